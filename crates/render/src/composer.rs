//! The seam between the renderer and a paginated backend.
//!
//! The renderer owns document traversal and style resolution; a
//! [`PageComposer`] owns pages, columns and actual typesetting. Calls
//! arrive in document order. Text content is bracketed by
//! `begin_text`/`end_text`, list rows by `begin_item`/`end_item`, and
//! `finish` consumes the composer and yields the produced bytes.

use crate::error::RenderError;
use polar_ir::SpanStyle;

/// Document-level fields forwarded to the backend for its own
/// metadata surface (PDF info dictionary, file properties).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Resolved options for one text block.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    /// Absolute size in points, heading multipliers already applied.
    pub font_size: f32,
    pub bold: bool,
    pub padding_bottom: f32,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self { font_size: 12.0, bold: false, padding_bottom: 8.0 }
    }
}

/// Resolved options for one code block.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeOptions {
    pub language: Option<String>,
    pub font_size: f32,
    pub padding_bottom: f32,
}

/// One styled text run, ready to emit.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSpan {
    pub text: String,
    pub style: SpanStyle,
}

/// Paginated typesetting primitives, abstracted from any one backend.
pub trait PageComposer {
    fn begin_document(
        &mut self,
        info: &DocumentInfo,
        template: &crate::TemplateConfig,
    ) -> Result<(), RenderError>;

    fn begin_text(&mut self, options: &TextOptions) -> Result<(), RenderError>;

    fn span(&mut self, span: &ResolvedSpan) -> Result<(), RenderError>;

    fn line_break(&mut self) -> Result<(), RenderError>;

    fn end_text(&mut self) -> Result<(), RenderError>;

    /// Opens a list row: a fixed-width marker column holding `marker`,
    /// then a flexible content column that the following
    /// `begin_text`/`end_text` pair fills.
    fn begin_item(&mut self, marker: &str, marker_width: f32) -> Result<(), RenderError>;

    fn end_item(&mut self) -> Result<(), RenderError>;

    fn code_block(&mut self, code: &str, options: &CodeOptions) -> Result<(), RenderError>;

    fn horizontal_rule(&mut self) -> Result<(), RenderError>;

    /// Reserves `height` points of empty vertical space.
    fn vertical_space(&mut self, height: f32) -> Result<(), RenderError>;

    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError>;
}
