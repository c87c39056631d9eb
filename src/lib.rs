//! # aria-kit
//!
//! Headless, accessible interaction widgets over a retained document tree.
//!
//! aria-kit packages the keyboard and ARIA behavior of three common patterns,
//! a modal dialog, a tab list and a carousel, as host-independent widgets.
//! The host owns a [`Page`](page::Page) (document tree, listeners, virtual
//! clock, focus) and forwards events and timer ticks to attached widgets;
//! the widgets answer by mutating the tree's ARIA state and focus.
//!
//! ## Core Systems
//!
//! - **[`dom`]** — Slotmap-backed document arena with tree operations and selector matching
//! - **[`event`]** — Event objects, key input, listener registry with bubbling
//! - **[`time`]** — Virtual-clock timeouts and intervals with deterministic firing order
//! - **[`page`]** — Document, listeners, timers, focus and scroll lock in one host surface
//! - **[`focus`]** — Focusability rules and focusable-descendant queries
//! - **[`widget`]** — Widget trait and attach errors
//! - **[`widgets`]** — Built-in widgets: Dialog, Tabs, Carousel
//! - **[`testing`]** — Headless Pilot driver and snapshot outlines

// Core systems
pub mod dom;
pub mod event;
pub mod time;

// Host surface
pub mod focus;
pub mod page;

// Widget system
pub mod widget;
pub mod widgets;

// Test support
pub mod testing;
