//! Page environment: document, focus, listeners, timers, scroll lock.
//!
//! [`Page`] is the single environment the widgets share. It owns the document
//! tree, tracks the active (focused) element, registers listeners, arms
//! timers, and holds the page-wide scroll lock. Widgets never own any of
//! this; every widget operation borrows the page it acts on.

use std::time::Duration;

use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::event::dispatch::{Event, EventKind};
use crate::event::listener::{EventTarget, ListenerId, ListenerSet};
use crate::focus::is_programmatically_focusable;
use crate::time::{TimerId, Timers};

/// The shared widget environment.
pub struct Page {
    /// The document tree.
    pub dom: Dom,
    listeners: ListenerSet,
    timers: Timers,
    active_element: Option<NodeId>,
    scroll_locks: u32,
}

impl Page {
    /// Create an empty page.
    pub fn new() -> Self {
        Self {
            dom: Dom::new(),
            listeners: ListenerSet::new(),
            timers: Timers::new(),
            active_element: None,
            scroll_locks: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Focus
    // -----------------------------------------------------------------------

    /// The currently focused node, if it still exists in the document.
    pub fn active_element(&self) -> Option<NodeId> {
        self.active_element.filter(|&id| self.dom.contains(id))
    }

    /// Move focus to `id`.
    ///
    /// Succeeds for nodes that exist, are enabled, and are visible through
    /// their whole ancestor chain; this reaches elements with a negative tab
    /// index, like script-driven focus does. Returns `false` and leaves the
    /// current focus untouched otherwise.
    pub fn focus_node(&mut self, id: NodeId) -> bool {
        if !is_programmatically_focusable(&self.dom, id) {
            return false;
        }
        self.active_element = Some(id);
        true
    }

    /// Clear focus.
    pub fn blur(&mut self) {
        self.active_element = None;
    }

    // -----------------------------------------------------------------------
    // Scroll lock
    // -----------------------------------------------------------------------

    /// Take one reference on the page scroll lock.
    pub fn lock_scroll(&mut self) {
        self.scroll_locks += 1;
    }

    /// Release one reference on the page scroll lock. Saturates at zero.
    pub fn unlock_scroll(&mut self) {
        self.scroll_locks = self.scroll_locks.saturating_sub(1);
    }

    /// Whether any holder currently locks page scrolling.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locks > 0
    }

    /// Number of outstanding scroll-lock references.
    pub fn scroll_lock_count(&self) -> u32 {
        self.scroll_locks
    }

    // -----------------------------------------------------------------------
    // Listeners
    // -----------------------------------------------------------------------

    /// Register a listener and return its id.
    pub fn add_listener(&mut self, target: EventTarget, kind: EventKind) -> ListenerId {
        self.listeners.add(target, kind)
    }

    /// Remove a listener by id. Idempotent; stale ids return `false`.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Whether the listener `id` should receive `event`.
    pub fn listener_matches(&self, id: ListenerId, event: &Event) -> bool {
        self.listeners.matches(&self.dom, id, event)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // -----------------------------------------------------------------------
    // Timers
    // -----------------------------------------------------------------------

    /// Arm a one-shot timer due `delay` from now.
    pub fn set_timeout(&mut self, delay: Duration) -> TimerId {
        self.timers.set_timeout(delay)
    }

    /// Arm a repeating timer firing every `period`.
    pub fn set_interval(&mut self, period: Duration) -> TimerId {
        self.timers.set_interval(period)
    }

    /// Cancel a timer. Idempotent; stale ids return `false`.
    pub fn clear_timer(&mut self, id: TimerId) -> bool {
        self.timers.cancel(id)
    }

    /// Whether a timer id is still armed.
    pub fn timer_scheduled(&self, id: TimerId) -> bool {
        self.timers.is_scheduled(id)
    }

    /// The current virtual time.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Move virtual time forward, collecting every timer that comes due in
    /// firing order. The host routes each fired id to its widgets.
    pub fn advance(&mut self, delta: Duration) -> Vec<TimerId> {
        self.timers.advance(delta)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
