//! Event objects: kinds, payloads, bubbling classification.
//!
//! An [`Event`] wraps a payload ([`EventDetail`]) with its target node and a
//! `default_prevented` flag the widgets set when they consume a key or touch
//! the host would otherwise act on.

use crate::dom::node::NodeId;

use super::input::KeyEvent;

// ---------------------------------------------------------------------------
// EventKind
// ---------------------------------------------------------------------------

/// Payload-free event discriminant, used for listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    Click,
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
    TouchStart,
    TouchEnd,
}

impl EventKind {
    /// Whether events of this kind propagate from their target up through its
    /// ancestors. Pointer enter/leave fire on the crossed node only.
    pub fn bubbles(self) -> bool {
        !matches!(self, Self::PointerEnter | Self::PointerLeave)
    }
}

// ---------------------------------------------------------------------------
// EventDetail
// ---------------------------------------------------------------------------

/// Event payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventDetail {
    KeyDown(KeyEvent),
    Click,
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
    /// Horizontal touch position at gesture start.
    TouchStart { x: f32 },
    /// Horizontal touch position at gesture end.
    TouchEnd { x: f32 },
}

impl EventDetail {
    /// The discriminant for this payload.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::KeyDown(_) => EventKind::KeyDown,
            Self::Click => EventKind::Click,
            Self::PointerEnter => EventKind::PointerEnter,
            Self::PointerLeave => EventKind::PointerLeave,
            Self::FocusIn => EventKind::FocusIn,
            Self::FocusOut => EventKind::FocusOut,
            Self::TouchStart { .. } => EventKind::TouchStart,
            Self::TouchEnd { .. } => EventKind::TouchEnd,
        }
    }
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A dispatched event.
///
/// `target` is the node the event occurred on; `None` models input that
/// reached the document without landing on any element (keys pressed while
/// nothing is focused).
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// The payload.
    pub detail: EventDetail,
    /// The node the event occurred on, if any.
    pub target: Option<NodeId>,
    /// Whether a handler asked to suppress the host's default action.
    pub default_prevented: bool,
}

impl Event {
    /// Create an event from a payload and optional target.
    pub fn new(detail: EventDetail, target: Option<NodeId>) -> Self {
        Self {
            detail,
            target,
            default_prevented: false,
        }
    }

    /// A key press, targeted at the focused node if there is one.
    pub fn key_down(key: KeyEvent, target: Option<NodeId>) -> Self {
        Self::new(EventDetail::KeyDown(key), target)
    }

    /// A click on a node.
    pub fn click(target: NodeId) -> Self {
        Self::new(EventDetail::Click, Some(target))
    }

    /// Pointer entering a node.
    pub fn pointer_enter(target: NodeId) -> Self {
        Self::new(EventDetail::PointerEnter, Some(target))
    }

    /// Pointer leaving a node.
    pub fn pointer_leave(target: NodeId) -> Self {
        Self::new(EventDetail::PointerLeave, Some(target))
    }

    /// Focus arriving at a node.
    pub fn focus_in(target: NodeId) -> Self {
        Self::new(EventDetail::FocusIn, Some(target))
    }

    /// Focus leaving a node.
    pub fn focus_out(target: NodeId) -> Self {
        Self::new(EventDetail::FocusOut, Some(target))
    }

    /// Touch landing on a node at horizontal position `x`.
    pub fn touch_start(target: NodeId, x: f32) -> Self {
        Self::new(EventDetail::TouchStart { x }, Some(target))
    }

    /// Touch lifting off a node at horizontal position `x`.
    pub fn touch_end(target: NodeId, x: f32) -> Self {
        Self::new(EventDetail::TouchEnd { x }, Some(target))
    }

    /// The discriminant for this event's payload.
    pub fn kind(&self) -> EventKind {
        self.detail.kind()
    }

    /// The key payload, if this is a key event.
    pub fn key(&self) -> Option<KeyEvent> {
        match self.detail {
            EventDetail::KeyDown(key) => Some(key),
            _ => None,
        }
    }

    /// Ask the host to suppress its default action for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

// ===========================================================================
// Tests
// ===========================================================================
