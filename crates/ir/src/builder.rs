//! Document → IR transform.
//!
//! Flattens nested inline formatting into style-resolved spans. The
//! style travels by value: each wrapper derives a new style for its own
//! subtree and ancestors are never mutated. The block and inline
//! variant sets are closed, so the transform maps every node; content
//! a later stage cannot typeset is reported through an
//! [`UnsupportedSink`] there.

use crate::style::SpanStyle;
use crate::{IrBlock, IrDocument, IrInline, IrListItem};
use polar_doc::{Block, Document, Inline, ListItem};

/// Observability side channel for skipped content. Not a control path:
/// implementations must not fail.
pub trait UnsupportedSink {
    fn unsupported(&mut self, kind: &str);
}

/// Default sink: forwards to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl UnsupportedSink for LogSink {
    fn unsupported(&mut self, kind: &str) {
        log::warn!("skipping unsupported element: {kind}");
    }
}

/// Transforms a document into its flat IR, in original block order.
pub fn build(doc: &Document) -> IrDocument {
    let blocks = doc.blocks.iter().map(block).collect();
    IrDocument { blocks }
}

fn block(block: &Block) -> IrBlock {
    match block {
        Block::Heading { level, inlines, .. } => IrBlock::Heading {
            level: *level,
            spans: flatten(inlines, &SpanStyle::default()),
        },
        Block::Paragraph { inlines, .. } => IrBlock::Paragraph {
            spans: flatten(inlines, &SpanStyle::default()),
        },
        Block::Code { language, code, .. } => IrBlock::Code {
            language: language.clone(),
            code: code.clone(),
        },
        Block::List { kind, items, .. } => IrBlock::List {
            kind: *kind,
            items: items.iter().map(item).collect(),
        },
        Block::Rule { .. } => IrBlock::Rule,
        Block::Blank { count, .. } => IrBlock::Blank { count: *count },
    }
}

fn item(item: &ListItem) -> IrListItem {
    IrListItem { spans: flatten(&item.inlines, &SpanStyle::default()) }
}

/// Flattens an inline sequence, accumulating `style` downward.
fn flatten(inlines: &[Inline], style: &SpanStyle) -> Vec<IrInline> {
    let mut spans = Vec::new();
    flatten_into(inlines, style, &mut spans);
    spans
}

fn flatten_into(inlines: &[Inline], style: &SpanStyle, out: &mut Vec<IrInline>) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push(IrInline::Span {
                text: text.clone(),
                style: style.clone(),
            }),
            Inline::Strong(children) => {
                flatten_into(children, &style.bolded(), out);
            }
            Inline::Emphasis(children) => {
                flatten_into(children, &style.italicized(), out);
            }
            Inline::Code(code) => out.push(IrInline::Span {
                text: code.clone(),
                style: style.coded(),
            }),
            Inline::Link { href, children, .. } => {
                flatten_into(children, &style.linked(href), out);
            }
            Inline::Image(image) => out.push(IrInline::Image {
                src: image.src.clone(),
                alt: image.alt.clone(),
                title: image.title.clone(),
            }),
            Inline::LineBreak => out.push(IrInline::Break),
        }
    }
}
