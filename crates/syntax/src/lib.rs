//! Shorthand plain-text syntax for Polar documents.
//!
//! The grammar is permissive on purpose: parsing is total over any input
//! and never fails. Unrecognized content degrades to plain paragraph
//! text. A single forward pass classifies each line; a separate inline
//! sub-parser handles bold/italic/code/link formatting inside text.

mod inline;
mod parser;

pub use inline::parse_inlines;
pub use parser::{Parser, parse};
