//! Subfile metadata tree.
//!
//! The portal describes what a skylink holds in the `skynet-file-metadata`
//! response header: a JSON object with `filename` and, for directory uploads,
//! a nested `subfiles` map. The root's `len` and `contenttype` come from the
//! response's own `content-length` / `content-type` headers.

mod assemble;
mod parse;

pub use assemble::{metadata_from_headers, METADATA_HEADER};
pub use parse::parse_subfile;

use serde::Serialize;

/// One node of the metadata tree. A single-file upload is a leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubfileMetadata {
    pub filename: String,
    pub content_type: String,
    pub length: u64,
    /// Named children in header order; empty for a leaf.
    pub subfiles: Vec<(String, SubfileMetadata)>,
}

impl SubfileMetadata {
    pub fn is_leaf(&self) -> bool {
        self.subfiles.is_empty()
    }

    /// Sum of leaf lengths below this node, or this node's own length for a leaf.
    pub fn total_len(&self) -> u64 {
        if self.is_leaf() {
            return self.length;
        }
        self.subfiles.iter().map(|(_, m)| m.total_len()).sum()
    }

    /// Depth-first pre-order visit of every descendant with its depth (root's
    /// children are depth 1).
    pub fn walk<F>(&self, mut f: F)
    where
        F: FnMut(usize, &str, &SubfileMetadata),
    {
        fn go<F>(node: &SubfileMetadata, depth: usize, f: &mut F)
        where
            F: FnMut(usize, &str, &SubfileMetadata),
        {
            for (name, child) in &node.subfiles {
                f(depth, name, child);
                go(child, depth + 1, f);
            }
        }
        go(self, 1, &mut f);
    }
}
