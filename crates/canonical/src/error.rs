use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanonicalError {
    /// Malformed canonical input: wrong root tag, unparsable or
    /// out-of-range numeric attribute, bad text escape. Aborts the read
    /// with no partial document.
    #[error("malformed document structure: {0}")]
    Structural(String),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl From<quick_xml::events::attributes::AttrError> for CanonicalError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        CanonicalError::Xml(quick_xml::Error::InvalidAttr(e))
    }
}
