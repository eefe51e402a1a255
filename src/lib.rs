//! Polar document toolkit.
//!
//! Ties the member crates into one pipeline: parse shorthand or read
//! the canonical format into a [`Document`], flatten it to the export
//! IR, and drive a paginated composer to bytes. The workspace archive
//! container lives in [`archive`].

pub mod archive;
mod error;

pub use error::PolarError;

pub use polar_doc::{
    Author, Block, BlockMeta, BlockVisitor, DateStamp, Document, Image, Inline, InlineVisitor,
    ListItem, ListKind, Metadata,
};
pub use polar_canonical::{CanonicalError, read, read_from, write, write_to};
pub use polar_ir::{IrDocument, LogSink, UnsupportedSink, build};
pub use polar_render::{
    DocumentInfo, PageComposer, RenderError, Renderer, TemplateConfig, TraceComposer, render,
};
pub use polar_syntax::{Parser, parse};

/// Options for the export pipeline.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub template: TemplateConfig,
    /// Document title for the backend's metadata surface. Falls back to
    /// the document's own metadata title.
    pub title: Option<String>,
    /// Author for the backend's metadata surface. Falls back to the
    /// first document author.
    pub author: Option<String>,
}

/// Flattens a document and renders it through `composer` in one call.
pub fn export(
    doc: &Document,
    options: &ExportOptions,
    composer: Box<dyn PageComposer>,
) -> Result<Vec<u8>, PolarError> {
    let ir = polar_ir::build(doc);
    let info = DocumentInfo {
        title: options
            .title
            .clone()
            .or_else(|| doc.metadata.title.clone()),
        author: options
            .author
            .clone()
            .or_else(|| doc.metadata.authors.first().map(|a| a.name.clone())),
    };
    Ok(render(&ir, &info, &options.template, composer)?)
}
