//! Anatomy diagram structural indexing.
//!
//! Pipeline: [`dom::load`] parses one SVG into a tree and resolves its side,
//! [`walk::collect_groups`] records every group in document order,
//! [`index::build_index`] folds the list into the per-document lookups, and
//! [`index::aggregate`] + [`emit::emit`] combine both sides into the one
//! persisted JSON artifact.

pub mod dom;
pub mod emit;
pub mod index;
pub mod side;
pub mod walk;
