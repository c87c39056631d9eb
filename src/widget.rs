//! Widget contract and attach-time errors.
//!
//! Widgets are controllers bound to existing markup: they hold node ids,
//! listener ids, and timer ids, never the document itself. The host owns the
//! [`Page`] and routes every event and fired timer through each live widget;
//! a widget reacts only when one of its registered listener ids still
//! matches, so destroying it observably detaches its behavior.

use crate::dom::node::NodeId;
use crate::dom::query::Selector;
use crate::event::dispatch::Event;
use crate::page::Page;
use crate::time::TimerId;

/// Errors from binding a widget to the document at attach time.
///
/// These are configuration errors: the markup the widget was pointed at does
/// not have the required shape. A failed attach leaves no listeners, timers,
/// or attribute changes behind.
#[derive(Debug, thiserror::Error)]
pub enum AttachError {
    #[error("container not found: #{key}")]
    ContainerNotFound { key: String },
    #[error("required element {selector} not found inside #{container}")]
    MissingChild { container: String, selector: Selector },
    #[error("no elements match {selector} inside #{container}")]
    NoMatches { container: String, selector: Selector },
}

/// Core trait implemented by all widgets.
///
/// Object-safe, so a host can keep `Vec<Box<dyn Widget>>` and drive every
/// instance uniformly.
pub trait Widget {
    /// The container node this widget is bound to.
    fn container(&self) -> NodeId;

    /// React to an event the host routed here.
    ///
    /// The widget consults its own registered listener ids via
    /// [`Page::listener_matches`]; events that match none of them pass
    /// through untouched. Handlers may call [`Event::prevent_default`] to
    /// suppress the host's default action.
    fn handle_event(&mut self, page: &mut Page, event: &mut Event);

    /// React to a fired timer the host routed here. Ids that do not belong
    /// to this widget must be ignored. Default: ignore everything.
    fn on_timer(&mut self, _page: &mut Page, _timer: TimerId) {}

    /// Tear down: remove the widget's listeners and cancel its timers.
    ///
    /// Idempotent. The markup (nodes, attributes) is left in place.
    fn destroy(&mut self, page: &mut Page);
}

// ===========================================================================
// Tests
// ===========================================================================
