//! Document queries: id lookup, selector matching within a subtree.

use std::fmt;

use super::node::{NodeData, NodeId};
use super::tree::Dom;

/// The selector forms widget configuration accepts.
///
/// Parsed from the familiar shorthand: `#id`, `.class`, `role=x`, or a bare
/// element type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Matches the node with this id (`#save`).
    Id(String),
    /// Matches nodes carrying this class (`.carousel-slide`).
    Class(String),
    /// Matches nodes whose `role` attribute equals this value (`role=tab`).
    Role(String),
    /// Matches nodes of this element type (`Button`).
    Type(String),
}

impl Selector {
    /// Selector matching an id.
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Selector matching a class.
    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    /// Selector matching a `role` attribute value.
    pub fn role(role: impl Into<String>) -> Self {
        Self::Role(role.into())
    }

    /// Selector matching an element type name.
    pub fn element(element_type: impl Into<String>) -> Self {
        Self::Type(element_type.into())
    }

    /// Parse the shorthand forms. Returns `None` for an empty string.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        if let Some(rest) = text.strip_prefix('#') {
            return (!rest.is_empty()).then(|| Self::id(rest));
        }
        if let Some(rest) = text.strip_prefix('.') {
            return (!rest.is_empty()).then(|| Self::class(rest));
        }
        if let Some(rest) = text.strip_prefix("role=") {
            return (!rest.is_empty()).then(|| Self::role(rest));
        }
        Some(Self::element(text))
    }

    /// Whether a node's data matches this selector.
    pub fn matches(&self, data: &NodeData) -> bool {
        match self {
            Self::Id(id) => data.id.as_deref() == Some(id),
            Self::Class(class) => data.has_class(class),
            Self::Role(role) => data.role() == Some(role),
            Self::Type(element_type) => data.element_type == *element_type,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
            Self::Role(role) => write!(f, "role={role}"),
            Self::Type(element_type) => write!(f, "{element_type}"),
        }
    }
}

impl Dom {
    /// Find the first node whose `id` field matches the given string.
    ///
    /// Iterates all nodes in the arena, not just the tree below `root`.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, data)| data.id.as_deref() == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// All descendants of `root` matching `selector`, in document order.
    ///
    /// `root` itself is never a candidate.
    pub fn query_within(&self, root: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.walk_depth_first(root)
            .into_iter()
            .filter(|&id| id != root)
            .filter(|&id| self.get(id).is_some_and(|data| selector.matches(data)))
            .collect()
    }

    /// First descendant of `root` matching `selector`, in document order.
    pub fn first_within(&self, root: NodeId, selector: &Selector) -> Option<NodeId> {
        self.walk_depth_first(root)
            .into_iter()
            .filter(|&id| id != root)
            .find(|&id| self.get(id).is_some_and(|data| selector.matches(data)))
    }
}

#[cfg(test)]
mod tests {
    use super::Selector;
    use crate::dom::node::NodeData;
    use crate::dom::tree::Dom;

    /// A features section the way the widgets expect to find one:
    ///
    /// ```text
    /// #features
    /// └── role=tablist
    ///     ├── Button role=tab .tab-button  (pricing)
    ///     └── Button role=tab .tab-button  (support)
    /// ```
    fn features_section() -> Dom {
        let mut dom = Dom::new();
        let section = dom.insert(NodeData::new("Container").with_id("features"));
        let tablist = dom.insert_child(
            section,
            NodeData::new("Container").with_attr("role", "tablist"),
        );
        for name in ["pricing", "support"] {
            dom.insert_child(
                tablist,
                NodeData::new("Button")
                    .with_id(name)
                    .with_class("tab-button")
                    .with_attr("role", "tab"),
            );
        }
        dom
    }

    #[test]
    fn parse_understands_each_shorthand() {
        assert_eq!(Selector::parse("#features"), Some(Selector::id("features")));
        assert_eq!(
            Selector::parse(".carousel-slide"),
            Some(Selector::class("carousel-slide"))
        );
        assert_eq!(Selector::parse("role=tab"), Some(Selector::role("tab")));
        assert_eq!(Selector::parse("Input"), Some(Selector::element("Input")));
    }

    #[test]
    fn parse_rejects_empty_forms() {
        assert_eq!(Selector::parse(""), None);
        assert_eq!(Selector::parse("#"), None);
        assert_eq!(Selector::parse("."), None);
        assert_eq!(Selector::parse("role="), None);
    }

    #[test]
    fn display_round_trips() {
        for text in ["#features", ".carousel-slide", "role=tab", "Input"] {
            let selector = Selector::parse(text).unwrap();
            assert_eq!(selector.to_string(), text);
        }
    }

    #[test]
    fn id_lookup() {
        let dom = features_section();
        let hit = dom.query_by_id("pricing");
        assert_eq!(
            hit.and_then(|id| dom.get(id)).map(|d| d.element_type.as_str()),
            Some("Button")
        );
        assert!(dom.query_by_id("gallery").is_none());
        assert!(Dom::new().query_by_id("features").is_none());
    }

    #[test]
    fn role_query_keeps_document_order() {
        let dom = features_section();
        let section = dom.query_by_id("features").unwrap();
        let tabs = dom.query_within(section, &Selector::role("tab"));
        let names: Vec<_> = tabs
            .iter()
            .filter_map(|&id| dom.get(id))
            .filter_map(|d| d.id.as_deref())
            .collect();
        assert_eq!(names, vec!["pricing", "support"]);
    }

    #[test]
    fn class_and_type_queries_agree_here() {
        let dom = features_section();
        let section = dom.query_by_id("features").unwrap();
        assert_eq!(
            dom.query_within(section, &Selector::class("tab-button")),
            dom.query_within(section, &Selector::element("Button"))
        );
    }

    #[test]
    fn scoped_queries_skip_the_scope_itself() {
        let dom = features_section();
        let section = dom.query_by_id("features").unwrap();
        let tablist = dom.first_within(section, &Selector::role("tablist")).unwrap();
        assert!(dom.query_within(tablist, &Selector::role("tablist")).is_empty());
    }

    #[test]
    fn nesting_does_not_break_order() {
        let mut dom = Dom::new();
        let gallery = dom.insert(NodeData::new("Container").with_id("gallery"));
        let track = dom.insert_child(gallery, NodeData::new("Container"));
        let first = dom.insert_child(track, NodeData::new("Container").with_class("slide"));
        let second = dom.insert_child(track, NodeData::new("Container").with_class("slide"));
        let stray = dom.insert_child(gallery, NodeData::new("Container").with_class("slide"));

        let slides = dom.query_within(gallery, &Selector::class("slide"));
        assert_eq!(slides, vec![first, second, stray]);
    }

    #[test]
    fn first_within_takes_the_earliest_match() {
        let dom = features_section();
        let section = dom.query_by_id("features").unwrap();
        assert_eq!(
            dom.first_within(section, &Selector::role("tab")),
            dom.query_by_id("pricing")
        );
        assert!(dom.first_within(section, &Selector::role("menu")).is_none());
    }

    #[test]
    fn queries_from_a_stale_scope_are_empty() {
        let mut dom = features_section();
        let section = dom.query_by_id("features").unwrap();
        dom.remove(section);
        assert!(dom.query_within(section, &Selector::role("tab")).is_empty());
        assert!(dom.first_within(section, &Selector::role("tab")).is_none());
    }
}
