//! Pilot: programmatic interaction with a headless page.
//!
//! The `Pilot` owns a [`Page`] and plays the host's role in tests: it builds
//! events, hands them to a widget's [`handle_event`](Widget::handle_event),
//! and routes fired timers into [`on_timer`](Widget::on_timer). Every input
//! method returns the dispatched [`Event`] so assertions can inspect
//! `default_prevented`.

use std::time::Duration;

use crate::event::dispatch::Event;
use crate::event::input::{Key, KeyEvent, Modifiers};
use crate::dom::NodeId;
use crate::page::Page;
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless page driver for testing.
///
/// The Pilot does not route events by itself; each simulation method takes
/// the widget under test, mirroring a host that forwards every event to its
/// attached widgets.
///
/// # Examples
///
/// ```ignore
/// use aria_kit::testing::Pilot;
/// use aria_kit::event::Key;
///
/// let mut pilot = Pilot::new();
/// // ... build a page, attach a widget ...
/// let event = pilot.press_key(&mut dialog, Key::Escape);
/// assert!(event.default_prevented);
/// ```
pub struct Pilot {
    page: Page,
}

impl Pilot {
    /// Create a pilot over an empty page.
    pub fn new() -> Self {
        Self { page: Page::new() }
    }

    /// Create a pilot over a page built elsewhere.
    pub fn from_page(page: Page) -> Self {
        Self { page }
    }

    /// Borrow the underlying page immutably.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Borrow the underlying page mutably.
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Simulate a key press with no modifiers, targeted at the focused node.
    pub fn press_key(&mut self, widget: &mut dyn Widget, key: Key) -> Event {
        self.press_key_with(widget, key, Modifiers::NONE)
    }

    /// Simulate a key press with modifiers, targeted at the focused node.
    pub fn press_key_with(
        &mut self,
        widget: &mut dyn Widget,
        key: Key,
        modifiers: Modifiers,
    ) -> Event {
        let target = self.page.active_element();
        self.dispatch(widget, Event::key_down(KeyEvent::new(key, modifiers), target))
    }

    /// Simulate a key press targeted at a specific node.
    pub fn press_key_on(&mut self, widget: &mut dyn Widget, target: NodeId, key: Key) -> Event {
        self.dispatch(
            widget,
            Event::key_down(KeyEvent::new(key, Modifiers::NONE), Some(target)),
        )
    }

    /// Simulate a click on a node.
    pub fn click_on(&mut self, widget: &mut dyn Widget, target: NodeId) -> Event {
        self.dispatch(widget, Event::click(target))
    }

    /// Simulate the pointer entering a node.
    pub fn pointer_enter(&mut self, widget: &mut dyn Widget, target: NodeId) -> Event {
        self.dispatch(widget, Event::pointer_enter(target))
    }

    /// Simulate the pointer leaving a node.
    pub fn pointer_leave(&mut self, widget: &mut dyn Widget, target: NodeId) -> Event {
        self.dispatch(widget, Event::pointer_leave(target))
    }

    /// Simulate focus arriving at a node.
    pub fn focus_in(&mut self, widget: &mut dyn Widget, target: NodeId) -> Event {
        self.dispatch(widget, Event::focus_in(target))
    }

    /// Simulate focus leaving a node.
    pub fn focus_out(&mut self, widget: &mut dyn Widget, target: NodeId) -> Event {
        self.dispatch(widget, Event::focus_out(target))
    }

    /// Simulate a horizontal touch gesture on a node, from `from_x` to
    /// `to_x`. Returns the touch-end event.
    pub fn swipe(
        &mut self,
        widget: &mut dyn Widget,
        target: NodeId,
        from_x: f32,
        to_x: f32,
    ) -> Event {
        self.dispatch(widget, Event::touch_start(target, from_x));
        self.dispatch(widget, Event::touch_end(target, to_x))
    }

    // ── Time ─────────────────────────────────────────────────────────

    /// Advance the page clock, routing every fired timer into the widget.
    pub fn advance_with(&mut self, widget: &mut dyn Widget, delta: Duration) {
        for timer in self.page.advance(delta) {
            widget.on_timer(&mut self.page, timer);
        }
    }

    fn dispatch(&mut self, widget: &mut dyn Widget, mut event: Event) -> Event {
        widget.handle_event(&mut self.page, &mut event);
        event
    }
}

impl Default for Pilot {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
