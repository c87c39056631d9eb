//! Snapshot helpers.
//!
//! Functions for converting a document subtree into a plain-text outline
//! suitable for snapshot-style assertions. The output is deterministic:
//! children appear in document order and attributes are sorted by name.

use crate::dom::node::NodeData;
use crate::dom::tree::Dom;
use crate::dom::NodeId;
use crate::page::Page;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a subtree as an indented outline, one node per line.
///
/// Each line shows the element type, `#id`, `.class` markers, visibility and
/// disabled flags, the tab index when set, every attribute in name order, and
/// the text content when non-empty. Children are indented two spaces below
/// their parent. The final line has no trailing newline.
///
/// # Examples
///
/// ```ignore
/// use aria_kit::testing::outline;
///
/// insta::assert_snapshot!(outline(&page.dom, modal));
/// ```
pub fn outline(dom: &Dom, root: NodeId) -> String {
    let mut out = String::new();
    write_node(dom, root, 0, &mut out);
    // Drop the trailing newline so snapshots do not end in a blank line.
    if out.ends_with('\n') {
        out.pop();
    }
    out
}

/// Render the whole page as an outline, starting from the document root.
///
/// An empty page renders as an empty string.
pub fn page_outline(page: &Page) -> String {
    match page.dom.root() {
        Some(root) => outline(&page.dom, root),
        None => String::new(),
    }
}

fn write_node(dom: &Dom, id: NodeId, depth: usize, out: &mut String) {
    let Some(data) = dom.get(id) else {
        return;
    };
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(&describe(data));
    out.push('\n');
    for &child in dom.children(id) {
        write_node(dom, child, depth + 1, out);
    }
}

fn describe(data: &NodeData) -> String {
    let mut line = data.element_type.clone();
    if let Some(id) = &data.id {
        line.push('#');
        line.push_str(id);
    }
    for class in &data.classes {
        line.push('.');
        line.push_str(class);
    }
    if !data.visible {
        line.push_str(" (hidden)");
    }
    if data.disabled {
        line.push_str(" (disabled)");
    }
    if let Some(tab_index) = data.tab_index {
        line.push_str(&format!(" tabindex={tab_index}"));
    }
    for (name, value) in &data.attrs {
        line.push_str(&format!(" {name}={value:?}"));
    }
    if !data.text.is_empty() {
        line.push_str(&format!(" {:?}", data.text));
    }
    line
}

// ===========================================================================
// Tests
// ===========================================================================
