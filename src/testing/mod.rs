//! Headless testing framework: Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to drive a [`Page`](crate::page::Page) and its widgets
//! without a real host. Use [`outline`] and [`page_outline`] to capture the
//! document tree as plain text for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{outline, page_outline};
