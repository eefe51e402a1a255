//! Intermediate representation for export.
//!
//! The IR is the flattened form of a document that paginated renderers
//! consume: one flat block list where every inline is a linear,
//! style-resolved span. All nesting from the document tree is folded
//! into per-span [`SpanStyle`] values during construction.

mod builder;
mod color;
mod style;

pub use builder::{LogSink, UnsupportedSink, build};
pub use color::Color;
pub use style::{CODE_BACKGROUND, CODE_FAMILY, CODE_SIZE_FACTOR, LINK_COLOR, SpanStyle};

use polar_doc::ListKind;

/// A flattened document, ready for layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IrDocument {
    pub blocks: Vec<IrBlock>,
}

/// Block-level IR element. Mirrors the document block set but carries
/// resolved spans instead of nested inlines.
#[derive(Debug, Clone, PartialEq)]
pub enum IrBlock {
    Heading { level: u8, spans: Vec<IrInline> },
    Paragraph { spans: Vec<IrInline> },
    Code { language: Option<String>, code: String },
    List { kind: ListKind, items: Vec<IrListItem> },
    Rule,
    Blank { count: u32 },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IrListItem {
    pub spans: Vec<IrInline>,
}

/// Linear inline IR element; never nested.
#[derive(Debug, Clone, PartialEq)]
pub enum IrInline {
    /// A text run with the fully accumulated style at its position.
    Span { text: String, style: SpanStyle },
    Break,
    Image {
        src: String,
        alt: String,
        title: Option<String>,
    },
}
