use thiserror::Error;
use polar_canonical::CanonicalError;
use polar_render::RenderError;

/// A comprehensive error type for the whole document pipeline.
#[derive(Error, Debug)]
pub enum PolarError {
    #[error("Canonical format error: {0}")]
    Canonical(#[from] CanonicalError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
