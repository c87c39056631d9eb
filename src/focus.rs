//! Focus-order computation over the document tree.
//!
//! Two notions of focusability apply. Sequential focus is what the Tab key
//! traverses: enabled, visible elements that are intrinsically focusable or
//! opted in with a non-negative tab index. Programmatic focus is what
//! `Page::focus_node` can reach: it additionally accepts negative tab
//! indices, matching how a script may focus elements the Tab key skips.

use crate::dom::node::NodeData;
use crate::dom::{Dom, NodeId};

/// Whether a node participates in sequential (Tab) focus order, judged from
/// its own data alone. Visibility of ancestors is the caller's concern.
pub fn is_sequentially_focusable(data: &NodeData) -> bool {
    if data.disabled || !data.visible {
        return false;
    }
    match data.tab_index {
        Some(index) => index >= 0,
        None => data.focusable,
    }
}

/// Document-order sequential focus candidates strictly below `root`.
///
/// Hidden nodes prune their entire subtree, so a visible element inside a
/// hidden parent is never a candidate. A hidden or stale `root` yields an
/// empty list. Recomputed on every call; the document may have changed since
/// the last one.
pub fn focusable_descendants(dom: &Dom, root: NodeId) -> Vec<NodeId> {
    let mut result = Vec::new();
    if !dom.get(root).is_some_and(|data| data.visible) {
        return result;
    }
    let mut stack: Vec<NodeId> = dom.children(root).iter().rev().copied().collect();
    while let Some(id) = stack.pop() {
        let Some(data) = dom.get(id) else {
            continue;
        };
        if !data.visible {
            continue;
        }
        if is_sequentially_focusable(data) {
            result.push(id);
        }
        for &child in dom.children(id).iter().rev() {
            stack.push(child);
        }
    }
    result
}

/// Whether `id` can receive programmatic focus: it exists, is enabled, and
/// is visible through its whole ancestor chain.
pub fn is_programmatically_focusable(dom: &Dom, id: NodeId) -> bool {
    let Some(data) = dom.get(id) else {
        return false;
    };
    if data.disabled || !data.visible {
        return false;
    }
    dom.ancestors(id)
        .iter()
        .all(|&ancestor| dom.get(ancestor).is_some_and(|d| d.visible))
}

// ===========================================================================
// Tests
// ===========================================================================
