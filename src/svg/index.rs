//! Index construction.
//!
//! Folds the walker's flat element list into the per-document lookup
//! structures and merges the two documents into the combined artifact.
//! Building is a pure second stage over the element list, decoupled from
//! traversal, so the fold is insensitive to how the list was produced.

use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::dom::load;
use super::side::Side;
use super::walk::{GroupElement, collect_groups};
use crate::config::IndexConfig;

/// Summary counters for one document.
///
/// `total` always equals `groups`: only group nodes are ever recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub total: usize,
    pub groups: usize,
    pub with_id: usize,
    pub with_class: usize,
}

/// The complete extracted metadata for one diagram.
#[derive(Debug, Serialize)]
pub struct DocumentIndex {
    /// Every recorded group, in exact document pre-order.
    pub elements: Vec<GroupElement>,

    /// Id lookup. Insertion-ordered; on duplicate ids the last element
    /// visited wins and the key keeps its original position. Earlier
    /// duplicates stay in `elements` but are unreachable here.
    #[serde(rename = "byId")]
    pub by_id: Map<String, Value>,

    /// Reverse class lookup, restricted to elements that have an id.
    /// Keys serialize sorted; id sets serialize as sorted sequences.
    #[serde(rename = "classToIds")]
    pub class_to_ids: BTreeMap<String, BTreeSet<String>>,

    pub counts: Counts,
}

/// The final persisted artifact: one index per anatomical side.
///
/// Keys are positional - the configured front document feeds `front` - while
/// each element's `side` field reflects the loader's inference or hint.
#[derive(Debug, Serialize)]
pub struct CombinedIndex {
    pub front: DocumentIndex,
    pub back: DocumentIndex,
}

/// Fold an element list into a [`DocumentIndex`].
///
/// One pass in element order:
/// - a non-empty id inserts into `byId` (overwrite on collision, last wins);
/// - an id plus classes adds the id to `classToIds` under every token
///   (set semantics, so duplicate adds are no-ops);
/// - counters accumulate alongside.
///
/// Because the fold runs over `elements` rather than the final `byId`, an
/// earlier duplicate's classes may still map to an id whose `byId` slot was
/// later overwritten. That is the documented fold order, kept as-is.
pub fn build_index(elements: Vec<GroupElement>) -> Result<DocumentIndex> {
    let mut by_id = Map::new();
    let mut class_to_ids: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut counts = Counts::default();

    for element in &elements {
        counts.total += 1;
        counts.groups += 1;

        let id = element.id.as_deref().filter(|id| !id.is_empty());
        if let Some(id) = id {
            counts.with_id += 1;
            by_id.insert(id.to_owned(), serde_json::to_value(element)?);
        }
        if !element.classes.is_empty() {
            counts.with_class += 1;
            // Elements with classes but no id contribute nothing here.
            if let Some(id) = id {
                for class in &element.classes {
                    class_to_ids
                        .entry(class.clone())
                        .or_default()
                        .insert(id.to_owned());
                }
            }
        }
    }

    Ok(DocumentIndex {
        elements,
        by_id,
        class_to_ids,
        counts,
    })
}

/// Run the full Loader -> Walker -> Builder pipeline for one document.
pub fn index_document(path: &Path, side_hint: Option<Side>) -> Result<DocumentIndex> {
    let (root, side) = load(path, side_hint)?;
    build_index(collect_groups(&root, side))
}

/// Index both configured documents and combine them.
///
/// The two documents are processed independently: no cross-document
/// deduplication, and ids are allowed to collide between front and back -
/// each side's `byId` and `classToIds` is self-contained.
pub fn aggregate(config: &IndexConfig) -> Result<CombinedIndex> {
    let front = index_document(&config.front, config.front_side)?;
    let back = index_document(&config.back, config.back_side)?;
    Ok(CombinedIndex { front, back })
}
