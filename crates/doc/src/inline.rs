//! Inline nodes: styled or linked content nested inside a block.

use crate::visit::InlineVisitor;

/// An inline image reference. `src` points at the stored asset; when the
/// document was authored from local files, `original_path` remembers
/// where the asset came from so archives can re-bundle it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image {
    pub src: String,
    pub alt: String,
    pub title: Option<String>,
    pub original_path: Option<String>,
}

/// An inline-level element. Closed variant set, like [`crate::Block`].
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Code(String),
    Link {
        href: String,
        title: Option<String>,
        children: Vec<Inline>,
    },
    Image(Image),
    LineBreak,
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Inline::Text(_) => "text",
            Inline::Strong(_) => "strong",
            Inline::Emphasis(_) => "emphasis",
            Inline::Code(_) => "code",
            Inline::Link { .. } => "link",
            Inline::Image(_) => "image",
            Inline::LineBreak => "line-break",
        }
    }

    /// Dispatches to the matching visitor method.
    pub fn accept<T, V: InlineVisitor<T>>(&self, visitor: &mut V) -> T {
        match self {
            Inline::Text(text) => visitor.visit_text(text),
            Inline::Strong(children) => visitor.visit_strong(children),
            Inline::Emphasis(children) => visitor.visit_emphasis(children),
            Inline::Code(code) => visitor.visit_code(code),
            Inline::Link { href, title, children } => {
                visitor.visit_link(href, title.as_deref(), children)
            }
            Inline::Image(image) => visitor.visit_image(image),
            Inline::LineBreak => visitor.visit_line_break(),
        }
    }
}
