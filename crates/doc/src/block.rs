//! Block-level nodes: the top-level structural units of a document.

use crate::inline::Inline;
use crate::visit::BlockVisitor;

/// Optional attributes shared by every block variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockMeta {
    pub id: Option<String>,
    pub style: Option<String>,
}

/// Marker discipline of a list. A list never mixes kinds; the shorthand
/// parser closes the current list when the marker kind switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListKind {
    #[default]
    Bullet,
    Ordered,
}

/// A single entry of a [`Block::List`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListItem {
    pub inlines: Vec<Inline>,
}

/// A block-level element. The variant set is closed: consumers match
/// exhaustively so a new kind cannot be silently skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A heading with level 1..=6.
    Heading {
        meta: BlockMeta,
        level: u8,
        inlines: Vec<Inline>,
    },
    Paragraph {
        meta: BlockMeta,
        inlines: Vec<Inline>,
    },
    List {
        meta: BlockMeta,
        kind: ListKind,
        items: Vec<ListItem>,
    },
    /// Verbatim code with an optional language tag.
    Code {
        meta: BlockMeta,
        language: Option<String>,
        code: String,
    },
    Rule {
        meta: BlockMeta,
    },
    /// A run of `count >= 1` consecutive blank lines.
    Blank {
        meta: BlockMeta,
        count: u32,
    },
}

impl Block {
    pub fn meta(&self) -> &BlockMeta {
        match self {
            Block::Heading { meta, .. } => meta,
            Block::Paragraph { meta, .. } => meta,
            Block::List { meta, .. } => meta,
            Block::Code { meta, .. } => meta,
            Block::Rule { meta } => meta,
            Block::Blank { meta, .. } => meta,
        }
    }

    pub fn meta_mut(&mut self) -> &mut BlockMeta {
        match self {
            Block::Heading { meta, .. } => meta,
            Block::Paragraph { meta, .. } => meta,
            Block::List { meta, .. } => meta,
            Block::Code { meta, .. } => meta,
            Block::Rule { meta } => meta,
            Block::Blank { meta, .. } => meta,
        }
    }

    /// A string identifier for the block kind, mainly for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::List { .. } => "list",
            Block::Code { .. } => "code",
            Block::Rule { .. } => "rule",
            Block::Blank { .. } => "blank",
        }
    }

    /// Dispatches to the matching visitor method.
    pub fn accept<T, V: BlockVisitor<T>>(&self, visitor: &mut V) -> T {
        match self {
            Block::Heading { meta, level, inlines } => visitor.visit_heading(meta, *level, inlines),
            Block::Paragraph { meta, inlines } => visitor.visit_paragraph(meta, inlines),
            Block::List { meta, kind, items } => visitor.visit_list(meta, *kind, items),
            Block::Code { meta, language, code } => {
                visitor.visit_code(meta, language.as_deref(), code)
            }
            Block::Rule { meta } => visitor.visit_rule(meta),
            Block::Blank { meta, count } => visitor.visit_blank(meta, *count),
        }
    }
}
