//! In-memory representation of a Polar document.
//!
//! This crate defines the document tree produced by the shorthand and
//! canonical parsers and consumed by the export pipeline: a `Document`
//! root, a closed set of `Block` variants, a closed set of `Inline`
//! variants, and the metadata header. There is no behavior here beyond
//! structure and visitation; every consumer dispatches over the variant
//! sets exhaustively, so adding a variant is a compile-time event for
//! the whole workspace.

pub mod block;
pub mod inline;
pub mod metadata;
pub mod visit;

pub use block::{Block, BlockMeta, ListItem, ListKind};
pub use inline::{Image, Inline};
pub use metadata::{Author, DateStamp, Metadata};
pub use visit::{BlockVisitor, InlineVisitor};

/// Version written into new documents and assumed when the attribute is
/// missing on read.
pub const FORMAT_VERSION: &str = "0.1";

/// A complete Polar document: format version, optional id/style, the
/// metadata header and an ordered block sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub version: String,
    pub id: Option<String>,
    pub style: Option<String>,
    pub metadata: Metadata,
    pub blocks: Vec<Block>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            id: None,
            style: None,
            metadata: Metadata::default(),
            blocks: Vec::new(),
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }
}
