//! Dialog widget: a focus-trapping modal bound to existing markup.
//!
//! The dialog hides and reveals its container, locks page scrolling while
//! open, traps Tab inside itself, and hands focus back to the element that
//! was focused before it opened. Focusable content is re-queried on every
//! Tab press, so content swapped in while the dialog is open is trapped
//! correctly.

use std::fmt;
use std::time::Duration;

use crate::dom::node::NodeId;
use crate::event::dispatch::{Event, EventKind};
use crate::event::input::Key;
use crate::event::listener::{EventTarget, ListenerId};
use crate::focus::focusable_descendants;
use crate::page::Page;
use crate::time::TimerId;
use crate::widget::{AttachError, Widget};

/// Delay before the first focusable element receives focus after opening.
/// Gives the host one beat to finish revealing the container.
const FOCUS_DELAY: Duration = Duration::from_millis(10);

// ---------------------------------------------------------------------------
// DialogConfig
// ---------------------------------------------------------------------------

/// Configuration for [`Dialog::attach`].
pub struct DialogConfig {
    container_key: String,
    close_on_escape: bool,
    close_on_outside_click: bool,
    focus_on_open: bool,
    restore_focus: bool,
    on_open: Option<Box<dyn FnMut()>>,
    on_close: Option<Box<dyn FnMut()>>,
}

impl DialogConfig {
    /// Configuration for the dialog whose container has the given id.
    pub fn new(container_key: impl Into<String>) -> Self {
        Self {
            container_key: container_key.into(),
            close_on_escape: true,
            close_on_outside_click: true,
            focus_on_open: true,
            restore_focus: true,
            on_open: None,
            on_close: None,
        }
    }

    /// Close when Escape is pressed (builder). Default `true`.
    pub fn close_on_escape(mut self, close_on_escape: bool) -> Self {
        self.close_on_escape = close_on_escape;
        self
    }

    /// Close when the backdrop itself is clicked (builder). Default `true`.
    pub fn close_on_outside_click(mut self, close_on_outside_click: bool) -> Self {
        self.close_on_outside_click = close_on_outside_click;
        self
    }

    /// Focus the first focusable element shortly after opening (builder).
    /// Default `true`.
    pub fn focus_on_open(mut self, focus_on_open: bool) -> Self {
        self.focus_on_open = focus_on_open;
        self
    }

    /// Restore focus to the previously focused element on close (builder).
    /// Default `true`.
    pub fn restore_focus(mut self, restore_focus: bool) -> Self {
        self.restore_focus = restore_focus;
        self
    }

    /// Callback invoked after the dialog opens (builder).
    pub fn on_open(mut self, on_open: impl FnMut() + 'static) -> Self {
        self.on_open = Some(Box::new(on_open));
        self
    }

    /// Callback invoked after the dialog closes (builder).
    pub fn on_close(mut self, on_close: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }
}

impl fmt::Debug for DialogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogConfig")
            .field("container_key", &self.container_key)
            .field("close_on_escape", &self.close_on_escape)
            .field("close_on_outside_click", &self.close_on_outside_click)
            .field("focus_on_open", &self.focus_on_open)
            .field("restore_focus", &self.restore_focus)
            .field("on_open", &self.on_open.as_ref().map(|_| "<fn>"))
            .field("on_close", &self.on_close.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Dialog
// ---------------------------------------------------------------------------

/// A modal dialog controller.
///
/// # Examples
///
/// ```ignore
/// let mut dialog = Dialog::attach(&mut page, DialogConfig::new("signup-modal"))?;
/// dialog.open(&mut page);
/// ```
#[derive(Debug)]
pub struct Dialog {
    container: NodeId,
    config: DialogConfig,
    open: bool,
    previously_focused: Option<NodeId>,
    keydown_listener: ListenerId,
    click_listener: Option<ListenerId>,
    focus_timer: Option<TimerId>,
}

impl Dialog {
    /// Bind a dialog to the container with the configured id.
    ///
    /// The container starts hidden with `role=dialog`, `aria-modal=true` and
    /// `aria-hidden=true`. A document-level keydown listener is always
    /// registered: it carries both the Escape handling (subject to
    /// configuration) and the Tab containment (unconditional). A container
    /// click listener is registered only when outside-click closing is on.
    pub fn attach(page: &mut Page, config: DialogConfig) -> Result<Self, AttachError> {
        let container =
            page.dom
                .query_by_id(&config.container_key)
                .ok_or_else(|| AttachError::ContainerNotFound {
                    key: config.container_key.clone(),
                })?;

        if let Some(data) = page.dom.get_mut(container) {
            data.set_attr("role", "dialog");
            data.set_attr("aria-modal", "true");
            data.set_attr("aria-hidden", "true");
            data.visible = false;
        }

        let keydown_listener = page.add_listener(EventTarget::Document, EventKind::KeyDown);
        let click_listener = config
            .close_on_outside_click
            .then(|| page.add_listener(EventTarget::Node(container), EventKind::Click));

        Ok(Self {
            container,
            config,
            open: false,
            previously_focused: None,
            keydown_listener,
            click_listener,
            focus_timer: None,
        })
    }

    /// Open the dialog. No-op if already open.
    ///
    /// Records the active element for later restoration, reveals the
    /// container, locks page scrolling, defers the initial focus move, and
    /// invokes the open callback.
    pub fn open(&mut self, page: &mut Page) {
        if self.open {
            return;
        }
        self.previously_focused = page.active_element();
        if let Some(data) = page.dom.get_mut(self.container) {
            data.visible = true;
            data.set_attr("aria-hidden", "false");
        }
        page.lock_scroll();
        self.open = true;
        if self.config.focus_on_open {
            self.focus_timer = Some(page.set_timeout(FOCUS_DELAY));
        }
        if let Some(on_open) = &mut self.config.on_open {
            on_open();
        }
    }

    /// Close the dialog. No-op if already closed.
    ///
    /// Hides the container, releases the scroll lock, cancels a pending
    /// focus move, optionally restores focus, and invokes the close
    /// callback.
    pub fn close(&mut self, page: &mut Page) {
        if !self.open {
            return;
        }
        if let Some(data) = page.dom.get_mut(self.container) {
            data.visible = false;
            data.set_attr("aria-hidden", "true");
        }
        page.unlock_scroll();
        self.open = false;
        if let Some(timer) = self.focus_timer.take() {
            page.clear_timer(timer);
        }
        if self.config.restore_focus {
            if let Some(previous) = self.previously_focused.take() {
                // The element may be gone or unfocusable by now; then focus
                // is simply left where it is.
                page.focus_node(previous);
            }
        }
        if let Some(on_close) = &mut self.config.on_close {
            on_close();
        }
    }

    /// Open if closed, close if open.
    pub fn toggle(&mut self, page: &mut Page) {
        if self.open {
            self.close(page);
        } else {
            self.open(page);
        }
    }

    /// Whether the dialog is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Keep Tab cycles inside the dialog.
    ///
    /// Focusable content is recomputed on every press. Only the boundary
    /// positions are intercepted: Shift+Tab on the first element wraps to the
    /// last, Tab on the last wraps to the first. Everything else is left to
    /// the host's normal traversal. With no focusable content the press
    /// passes through untouched.
    fn contain_tab(&mut self, page: &mut Page, event: &mut Event, backward: bool) {
        let focusables = focusable_descendants(&page.dom, self.container);
        let (Some(&first), Some(&last)) = (focusables.first(), focusables.last()) else {
            return;
        };
        let active = page.active_element();
        if backward && active == Some(first) {
            event.prevent_default();
            page.focus_node(last);
        } else if !backward && active == Some(last) {
            event.prevent_default();
            page.focus_node(first);
        }
    }
}

impl Widget for Dialog {
    fn container(&self) -> NodeId {
        self.container
    }

    fn handle_event(&mut self, page: &mut Page, event: &mut Event) {
        match event.kind() {
            EventKind::KeyDown => {
                if !page.listener_matches(self.keydown_listener, event) || !self.open {
                    return;
                }
                let Some(key) = event.key() else {
                    return;
                };
                match key.code {
                    Key::Escape if self.config.close_on_escape => {
                        event.prevent_default();
                        self.close(page);
                    }
                    Key::Tab => self.contain_tab(page, event, key.shift()),
                    _ => {}
                }
            }
            EventKind::Click => {
                let Some(listener) = self.click_listener else {
                    return;
                };
                if !page.listener_matches(listener, event) || !self.open {
                    return;
                }
                // A click on a descendant bubbles here too; only the
                // backdrop itself closes.
                if event.target == Some(self.container) {
                    self.close(page);
                }
            }
            _ => {}
        }
    }

    fn on_timer(&mut self, page: &mut Page, timer: TimerId) {
        if self.focus_timer != Some(timer) {
            return;
        }
        self.focus_timer = None;
        if !self.open {
            return;
        }
        if let Some(&first) = focusable_descendants(&page.dom, self.container).first() {
            page.focus_node(first);
        }
    }

    fn destroy(&mut self, page: &mut Page) {
        self.close(page);
        page.remove_listener(self.keydown_listener);
        if let Some(listener) = self.click_listener.take() {
            page.remove_listener(listener);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
