//! Event system: input primitives, event objects, listener registry.

pub mod dispatch;
pub mod input;
pub mod listener;

pub use dispatch::{Event, EventDetail, EventKind};
pub use input::{Key, KeyEvent, Modifiers};
pub use listener::{EventTarget, Listener, ListenerId, ListenerSet};
