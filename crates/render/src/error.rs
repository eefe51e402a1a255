use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("composer error: {0}")]
    Compose(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Compose(s.to_string())
    }
}
