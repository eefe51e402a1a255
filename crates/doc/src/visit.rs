//! Visitation over the closed block and inline variant sets.
//!
//! Cross-cutting operations (serialization, export, UI rendering) are
//! written as visitors so the compiler forces them to handle every
//! variant. The traits have one method per variant; `Block::accept` and
//! `Inline::accept` perform the dispatch.

use crate::block::{BlockMeta, ListItem, ListKind};
use crate::inline::{Image, Inline};

pub trait BlockVisitor<T> {
    fn visit_heading(&mut self, meta: &BlockMeta, level: u8, inlines: &[Inline]) -> T;
    fn visit_paragraph(&mut self, meta: &BlockMeta, inlines: &[Inline]) -> T;
    fn visit_list(&mut self, meta: &BlockMeta, kind: ListKind, items: &[ListItem]) -> T;
    fn visit_code(&mut self, meta: &BlockMeta, language: Option<&str>, code: &str) -> T;
    fn visit_rule(&mut self, meta: &BlockMeta) -> T;
    fn visit_blank(&mut self, meta: &BlockMeta, count: u32) -> T;
}

pub trait InlineVisitor<T> {
    fn visit_text(&mut self, text: &str) -> T;
    fn visit_strong(&mut self, children: &[Inline]) -> T;
    fn visit_emphasis(&mut self, children: &[Inline]) -> T;
    fn visit_code(&mut self, code: &str) -> T;
    fn visit_link(&mut self, href: &str, title: Option<&str>, children: &[Inline]) -> T;
    fn visit_image(&mut self, image: &Image) -> T;
    fn visit_line_break(&mut self) -> T;
}
