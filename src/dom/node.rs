//! Node types: NodeId, NodeData.

use std::collections::BTreeMap;

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a document node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single document node.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Element type name (e.g. "Button", "Container").
    pub element_type: String,
    /// Optional unique id (#id lookup key).
    pub id: Option<String>,
    /// Classes (for .class selectors).
    pub classes: Vec<String>,
    /// Whether this node is displayed. Hiding a node hides its subtree.
    pub visible: bool,
    /// Whether this element kind is intrinsically focusable (button, link, input).
    pub focusable: bool,
    /// Whether this node is disabled.
    pub disabled: bool,
    /// Explicit tab index. Negative opts out of sequential focus order,
    /// non-negative opts in regardless of element kind.
    pub tab_index: Option<i16>,
    /// String attributes (role, aria-* state, labels).
    pub attrs: BTreeMap<String, String>,
    /// Text content (labels, live-region announcements).
    pub text: String,
}

impl NodeData {
    /// Create a new `NodeData` with the given element type and sensible defaults.
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            id: None,
            classes: Vec::new(),
            visible: true,
            focusable: false,
            disabled: false,
            tab_index: None,
            attrs: BTreeMap::new(),
            text: String::new(),
        }
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a single class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add multiple classes (builder).
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for class in classes {
            self = self.with_class(class);
        }
        self
    }

    /// Set an attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set the explicit tab index (builder).
    pub fn with_tab_index(mut self, tab_index: i16) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set whether this element kind is intrinsically focusable (builder).
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    /// Set whether this node is disabled (builder).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether this node is displayed (builder).
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Check whether this node has a given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. No-op if already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Toggle a class: add if absent, remove if present.
    pub fn toggle_class(&mut self, class: &str) {
        if self.has_class(class) {
            self.remove_class(class);
        } else {
            self.add_class(class);
        }
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// Remove an attribute. No-op if not present.
    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.remove(name);
    }

    /// Check whether an attribute is set.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// The node's role attribute, if any.
    pub fn role(&self) -> Option<&str> {
        self.attr("role")
    }
}
