//! Accumulated span styling.
//!
//! During IR construction the builder carries one [`SpanStyle`] value
//! down the inline tree. Every wrapper derives a fresh value for its
//! own subtree, so siblings can never observe each other's changes.

use crate::color::Color;

/// Font family applied to inline and block code.
pub const CODE_FAMILY: &str = "Courier New";
/// Background behind code spans and code blocks.
pub const CODE_BACKGROUND: Color = Color::gray(0xF5);
/// Code renders slightly smaller than the surrounding text.
pub const CODE_SIZE_FACTOR: f32 = 0.9;
/// Classic hyperlink blue.
pub const LINK_COLOR: Color = Color::rgb(0, 0, 0xEE);

/// Style accumulated along the path from a block down to one text run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpanStyle {
    pub bold: bool,
    pub italic: bool,
    /// Font family override; `None` keeps the template default.
    pub family: Option<String>,
    /// Multiplier over the template base size; `None` keeps the block
    /// default.
    pub size_factor: Option<f32>,
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub href: Option<String>,
    pub underline: bool,
}

impl SpanStyle {
    pub fn bolded(&self) -> Self {
        Self { bold: true, ..self.clone() }
    }

    pub fn italicized(&self) -> Self {
        Self { italic: true, ..self.clone() }
    }

    pub fn linked(&self, href: &str) -> Self {
        Self {
            href: Some(href.to_string()),
            color: Some(LINK_COLOR),
            underline: true,
            ..self.clone()
        }
    }

    /// The fixed inline-code override: monospace, light background,
    /// reduced size. Other accumulated fields pass through.
    pub fn coded(&self) -> Self {
        Self {
            family: Some(CODE_FAMILY.to_string()),
            background: Some(CODE_BACKGROUND),
            size_factor: Some(CODE_SIZE_FACTOR),
            ..self.clone()
        }
    }
}
