//! Listener registry and event-to-listener matching.
//!
//! [`ListenerSet`] hands out stable [`ListenerId`]s so the party that
//! registered a listener can later remove exactly that listener. Widgets keep
//! the ids they were given and drop them on destroy; an event only reaches a
//! widget through an id that is still registered.

use slotmap::{new_key_type, SlotMap};

use crate::dom::node::NodeId;
use crate::dom::tree::Dom;

use super::dispatch::{Event, EventKind};

new_key_type! {
    /// Unique identifier for a registered listener. Copy, lightweight (u64).
    pub struct ListenerId;
}

// ---------------------------------------------------------------------------
// EventTarget
// ---------------------------------------------------------------------------

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// Receives every event of the registered kind.
    Document,
    /// Receives events targeted at this node or, for bubbling kinds, at any
    /// of its descendants.
    Node(NodeId),
}

// ---------------------------------------------------------------------------
// Listener / ListenerSet
// ---------------------------------------------------------------------------

/// A registered listener: target + event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub target: EventTarget,
    pub kind: EventKind,
}

/// Registry of listeners keyed by stable ids.
#[derive(Debug, Default)]
pub struct ListenerSet {
    listeners: SlotMap<ListenerId, Listener>,
}

impl ListenerSet {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
        }
    }

    /// Register a listener and return its id.
    pub fn add(&mut self, target: EventTarget, kind: EventKind) -> ListenerId {
        self.listeners.insert(Listener { target, kind })
    }

    /// Remove a listener by id.
    ///
    /// Returns `false` for ids that were already removed; removal is
    /// idempotent.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    /// Whether a listener id is still registered.
    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(id)
    }

    /// Look up a listener's registration.
    pub fn get(&self, id: ListenerId) -> Option<Listener> {
        self.listeners.get(id).copied()
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether the registry has no listeners.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Whether the listener `id` should receive `event`.
    ///
    /// Kind must match exactly. Document listeners see every event of their
    /// kind. Node listeners see events targeted at their node, plus events
    /// targeted at a descendant when the kind bubbles. Events with no target
    /// reach document listeners only. Stale ids never match.
    pub fn matches(&self, dom: &Dom, id: ListenerId, event: &Event) -> bool {
        let Some(listener) = self.listeners.get(id) else {
            return false;
        };
        if listener.kind != event.kind() {
            return false;
        }
        match listener.target {
            EventTarget::Document => true,
            EventTarget::Node(node) => match event.target {
                Some(target) => {
                    target == node
                        || (listener.kind.bubbles() && dom.is_descendant_of(target, node))
                }
                None => false,
            },
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
