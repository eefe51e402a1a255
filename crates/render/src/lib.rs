//! Paginated rendering of the export IR.
//!
//! The renderer walks an [`polar_ir::IrDocument`] and drives a
//! [`PageComposer`], the trait any typesetting backend implements. A
//! deterministic [`TraceComposer`] backend ships here for tests and
//! headless use; real page backends live outside this crate.

mod composer;
mod error;
mod renderer;
mod template;
mod trace;

pub use composer::{CodeOptions, DocumentInfo, PageComposer, ResolvedSpan, TextOptions};
pub use error::RenderError;
pub use renderer::{MARKER_COLUMN_WIDTH, Renderer, render};
pub use template::{Margins, POINTS_PER_CM, TemplateConfig};
pub use trace::TraceComposer;
