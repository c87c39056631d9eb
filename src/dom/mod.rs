//! Document arena: slotmap-backed element tree with scoped selector queries.

pub mod node;
pub mod tree;
pub mod query;

pub use node::{NodeId, NodeData};
pub use query::Selector;
pub use tree::Dom;
