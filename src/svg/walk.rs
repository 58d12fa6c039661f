//! Group traversal.
//!
//! Walks a parsed diagram depth-first in document order and records every
//! `<g>` element with its identity, class tokens, and nearest identified
//! ancestor. Traversal visits every node type; only groups are recorded.

use serde::{Deserialize, Serialize};

use super::dom::{Element, strip_namespace};
use super::side::Side;

/// The only tag recorded by the walker.
pub const GROUP_TAG: &str = "g";

/// One recorded group node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupElement {
    /// The `id` attribute. Unique by convention, not enforced.
    pub id: Option<String>,
    /// Class tokens in source order. Duplicates allowed, empty tokens dropped.
    pub classes: Vec<String>,
    /// Always [`GROUP_TAG`].
    pub tag: String,
    /// Id of the nearest ancestor (of any node type) that carries one.
    pub parent_id: Option<String>,
    /// Viewpoint of the source document, constant per document.
    pub side: Side,
}

/// Collect every group of `root` in exact pre-order.
///
/// Ordering is significant: it must be reproducible across runs for the
/// emitted artifact to be diffable.
pub fn collect_groups(root: &Element, side: Side) -> Vec<GroupElement> {
    let mut elements = Vec::new();
    visit(root, None, side, &mut elements);
    elements
}

/// Recursive step carrying the inherited parent identity.
///
/// Recording a group and propagating identity are independent: any node with
/// an id - group or not, recorded or not - becomes the parent reference for
/// its descendants, and recursion descends into every child because nested
/// groups may appear arbitrarily deep.
fn visit(node: &Element, inherited: Option<&str>, side: Side, out: &mut Vec<GroupElement>) {
    if strip_namespace(&node.tag) == GROUP_TAG {
        out.push(GroupElement {
            id: node.id.clone(),
            classes: split_classes(node.class.as_deref()),
            tag: GROUP_TAG.to_string(),
            parent_id: inherited.map(str::to_owned),
            side,
        });
    }

    let child_parent = node.id.as_deref().or(inherited);
    for child in &node.children {
        visit(child, child_parent, side, out);
    }
}

/// Tokenize a raw `class` attribute.
///
/// Splits on any whitespace (newlines included), drops empty tokens, keeps
/// source order.
pub fn split_classes(raw: Option<&str>) -> Vec<String> {
    raw.map_or_else(Vec::new, |value| {
        value.split_whitespace().map(str::to_owned).collect()
    })
}
