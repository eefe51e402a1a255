//! Canonical tagged serialization for Polar documents.
//!
//! The on-disk form is a small XML dialect rooted at `<polar>`. The
//! reader enforces the schema (wrong root or malformed numeric
//! attributes abort the whole read) while staying forward-compatible:
//! unknown tags are skipped with their subtree anywhere they appear.
//! The writer mirrors the tag mapping with a fixed element and
//! attribute order, so `read(write(doc))` returns a structurally equal
//! document; only pure whitespace formatting may differ.

mod cursor;
mod error;
mod reader;
mod writer;

pub use error::CanonicalError;
pub use reader::{read, read_from};
pub use writer::{write, write_to};

pub(crate) mod tags {
    pub const ROOT: &str = "polar";
    pub const METADATA: &str = "metadata";
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const DATE: &str = "date";
    pub const CUSTOM: &str = "custom";
    pub const HEADING: &str = "heading";
    pub const PARAGRAPH: &str = "p";
    pub const LIST: &str = "list";
    pub const ITEM: &str = "item";
    pub const CODE: &str = "code";
    pub const RULE: &str = "hr";
    pub const BLANK: &str = "blank";
    pub const STRONG: &str = "strong";
    pub const EMPHASIS: &str = "em";
    pub const LINK: &str = "a";
    pub const IMAGE: &str = "img";
    pub const BREAK: &str = "br";
}

/// Date attribute format used by `<date created= modified=>`.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// `list type` attribute values.
pub(crate) const LIST_TYPE_BULLET: &str = "bullet";
pub(crate) const LIST_TYPE_NUMBERED: &str = "numbered";
