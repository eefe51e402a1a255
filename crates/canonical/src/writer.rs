//! Canonical writer: [`Document`] to indented XML.
//!
//! Mirrors the reader's tag mapping with a fixed ordering: metadata
//! before blocks; inside metadata title, then authors in declared
//! order, then date, then custom entries. Block dispatch goes through
//! [`BlockVisitor`] so a new block variant cannot be forgotten here.

use crate::error::CanonicalError;
use crate::{DATE_FORMAT, LIST_TYPE_BULLET, LIST_TYPE_NUMBERED, tags};
use polar_doc::{BlockMeta, BlockVisitor, Document, Inline, ListItem, ListKind, Metadata};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Serializes a document to an indented canonical string.
pub fn write(doc: &Document) -> Result<String, CanonicalError> {
    let mut buf = Vec::new();
    write_to(doc, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Serializes a document to a stream.
pub fn write_to(doc: &Document, out: impl Write) -> Result<(), CanonicalError> {
    DocumentWriter { xml: Writer::new_with_indent(out, b' ', 2) }.write_document(doc)
}

struct DocumentWriter<W: Write> {
    xml: Writer<W>,
}

impl<W: Write> DocumentWriter<W> {
    fn write_document(&mut self, doc: &Document) -> Result<(), CanonicalError> {
        self.xml
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut root = BytesStart::new(tags::ROOT);
        root.push_attribute(("version", doc.version.as_str()));
        if let Some(id) = &doc.id {
            root.push_attribute(("id", id.as_str()));
        }
        if let Some(style) = &doc.style {
            root.push_attribute(("style", style.as_str()));
        }
        self.xml.write_event(Event::Start(root))?;

        self.write_metadata(&doc.metadata)?;
        for block in &doc.blocks {
            block.accept(self)?;
        }

        self.xml.write_event(Event::End(BytesEnd::new(tags::ROOT)))?;
        Ok(())
    }

    fn write_metadata(&mut self, metadata: &Metadata) -> Result<(), CanonicalError> {
        if *metadata == Metadata::default() {
            self.xml
                .write_event(Event::Empty(BytesStart::new(tags::METADATA)))?;
            return Ok(());
        }

        self.xml
            .write_event(Event::Start(BytesStart::new(tags::METADATA)))?;

        if let Some(title) = &metadata.title {
            self.text_element(BytesStart::new(tags::TITLE), title)?;
        }
        for author in &metadata.authors {
            let mut start = BytesStart::new(tags::AUTHOR);
            if let Some(id) = &author.id {
                start.push_attribute(("id", id.as_str()));
            }
            self.text_element(start, &author.name)?;
        }
        if let Some(date) = &metadata.date {
            let mut start = BytesStart::new(tags::DATE);
            if let Some(created) = date.created {
                let value = created.format(DATE_FORMAT).to_string();
                start.push_attribute(("created", value.as_str()));
            }
            if let Some(modified) = date.modified {
                let value = modified.format(DATE_FORMAT).to_string();
                start.push_attribute(("modified", value.as_str()));
            }
            self.xml.write_event(Event::Empty(start))?;
        }
        for (key, value) in &metadata.custom {
            let mut start = BytesStart::new(tags::CUSTOM);
            start.push_attribute(("key", key.as_str()));
            self.text_element(start, value)?;
        }

        self.xml
            .write_event(Event::End(BytesEnd::new(tags::METADATA)))?;
        Ok(())
    }

    /// Writes `<name ...>text</name>`, collapsing the empty-text case
    /// to the self-closed form.
    fn text_element(&mut self, start: BytesStart<'_>, text: &str) -> Result<(), CanonicalError> {
        if text.is_empty() {
            self.xml.write_event(Event::Empty(start))?;
            return Ok(());
        }
        let name = String::from_utf8(start.name().as_ref().to_vec())?;
        self.xml.write_event(Event::Start(start))?;
        self.xml.write_event(Event::Text(BytesText::new(text)))?;
        self.xml.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Writes an element whose content is an inline sequence. The
    /// content stays on one line: any whitespace inside it is document
    /// text, so the indenting writer must not inject its own.
    fn inline_element(
        &mut self,
        start: BytesStart<'_>,
        inlines: &[Inline],
    ) -> Result<(), CanonicalError> {
        if inlines.is_empty() {
            self.xml.write_event(Event::Empty(start))?;
            return Ok(());
        }
        let name = String::from_utf8(start.name().as_ref().to_vec())?;
        self.xml.write_event(Event::Start(start))?;
        self.write_inlines(inlines)?;
        self.cancel_indent()?;
        self.xml.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// An empty text event suppresses the line break the indenting
    /// writer would otherwise put before the next tag.
    fn cancel_indent(&mut self) -> Result<(), CanonicalError> {
        self.xml.write_event(Event::Text(BytesText::new("")))?;
        Ok(())
    }

    fn write_inlines(&mut self, inlines: &[Inline]) -> Result<(), CanonicalError> {
        for inline in inlines {
            self.cancel_indent()?;
            match inline {
                Inline::Text(text) => {
                    self.xml.write_event(Event::Text(BytesText::new(text)))?;
                }
                Inline::Strong(children) => {
                    self.inline_element(BytesStart::new(tags::STRONG), children)?;
                }
                Inline::Emphasis(children) => {
                    self.inline_element(BytesStart::new(tags::EMPHASIS), children)?;
                }
                Inline::Code(code) => {
                    self.text_element(BytesStart::new(tags::CODE), code)?;
                }
                Inline::Link { href, title, children } => {
                    let mut start = BytesStart::new(tags::LINK);
                    start.push_attribute(("href", href.as_str()));
                    if let Some(title) = title {
                        start.push_attribute(("title", title.as_str()));
                    }
                    self.inline_element(start, children)?;
                }
                Inline::Image(image) => {
                    let mut start = BytesStart::new(tags::IMAGE);
                    start.push_attribute(("src", image.src.as_str()));
                    start.push_attribute(("alt", image.alt.as_str()));
                    if let Some(title) = &image.title {
                        start.push_attribute(("title", title.as_str()));
                    }
                    if let Some(path) = &image.original_path {
                        start.push_attribute(("original-path", path.as_str()));
                    }
                    self.xml.write_event(Event::Empty(start))?;
                }
                Inline::LineBreak => {
                    self.xml
                        .write_event(Event::Empty(BytesStart::new(tags::BREAK)))?;
                }
            }
        }
        Ok(())
    }

    fn push_meta_attrs(start: &mut BytesStart<'_>, meta: &BlockMeta) {
        if let Some(id) = &meta.id {
            start.push_attribute(("id", id.as_str()));
        }
        if let Some(style) = &meta.style {
            start.push_attribute(("style", style.as_str()));
        }
    }
}

impl<W: Write> BlockVisitor<Result<(), CanonicalError>> for DocumentWriter<W> {
    fn visit_heading(
        &mut self,
        meta: &BlockMeta,
        level: u8,
        inlines: &[Inline],
    ) -> Result<(), CanonicalError> {
        let mut start = BytesStart::new(tags::HEADING);
        let level = level.to_string();
        start.push_attribute(("level", level.as_str()));
        Self::push_meta_attrs(&mut start, meta);
        self.inline_element(start, inlines)
    }

    fn visit_paragraph(&mut self, meta: &BlockMeta, inlines: &[Inline]) -> Result<(), CanonicalError> {
        let mut start = BytesStart::new(tags::PARAGRAPH);
        Self::push_meta_attrs(&mut start, meta);
        self.inline_element(start, inlines)
    }

    fn visit_list(
        &mut self,
        meta: &BlockMeta,
        kind: ListKind,
        items: &[ListItem],
    ) -> Result<(), CanonicalError> {
        let mut start = BytesStart::new(tags::LIST);
        let kind = match kind {
            ListKind::Bullet => LIST_TYPE_BULLET,
            ListKind::Ordered => LIST_TYPE_NUMBERED,
        };
        start.push_attribute(("type", kind));
        Self::push_meta_attrs(&mut start, meta);
        if items.is_empty() {
            self.xml.write_event(Event::Empty(start))?;
            return Ok(());
        }
        self.xml.write_event(Event::Start(start))?;
        for item in items {
            self.inline_element(BytesStart::new(tags::ITEM), &item.inlines)?;
        }
        self.xml.write_event(Event::End(BytesEnd::new(tags::LIST)))?;
        Ok(())
    }

    fn visit_code(
        &mut self,
        meta: &BlockMeta,
        language: Option<&str>,
        code: &str,
    ) -> Result<(), CanonicalError> {
        let mut start = BytesStart::new(tags::CODE);
        if let Some(language) = language {
            start.push_attribute(("language", language));
        }
        Self::push_meta_attrs(&mut start, meta);
        self.text_element(start, code)
    }

    fn visit_rule(&mut self, meta: &BlockMeta) -> Result<(), CanonicalError> {
        let mut start = BytesStart::new(tags::RULE);
        Self::push_meta_attrs(&mut start, meta);
        self.xml.write_event(Event::Empty(start))?;
        Ok(())
    }

    fn visit_blank(&mut self, meta: &BlockMeta, count: u32) -> Result<(), CanonicalError> {
        let mut start = BytesStart::new(tags::BLANK);
        if count > 1 {
            let count = count.to_string();
            start.push_attribute(("count", count.as_str()));
        }
        Self::push_meta_attrs(&mut start, meta);
        self.xml.write_event(Event::Empty(start))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read;
    use polar_doc::{Author, Block};

    #[test]
    fn empty_document_writes_self_closed_metadata() {
        let doc = Document::new();
        let xml = write(&doc).expect("write");
        assert!(xml.contains("<polar version=\"0.1\">"));
        assert!(xml.contains("<metadata/>"));
    }

    #[test]
    fn attribute_order_is_stable() {
        let mut doc = Document::new();
        doc.blocks.push(Block::Heading {
            meta: BlockMeta { id: Some("h1".into()), style: Some("wide".into()) },
            level: 2,
            inlines: vec![Inline::text("Hi")],
        });
        let xml = write(&doc).expect("write");
        assert!(xml.contains(r#"<heading level="2" id="h1" style="wide">Hi</heading>"#));
    }

    #[test]
    fn whitespace_between_styled_runs_survives() {
        let mut doc = Document::new();
        doc.blocks.push(Block::Paragraph {
            meta: BlockMeta::default(),
            inlines: vec![
                Inline::Strong(vec![Inline::text("a")]),
                Inline::text(" "),
                Inline::Strong(vec![Inline::text("b")]),
            ],
        });
        let xml = write(&doc).expect("write");
        assert!(
            xml.contains("<strong>a</strong> <strong>b</strong>"),
            "xml: {xml}"
        );
        assert_eq!(read(&xml).expect("read"), doc);
    }

    #[test]
    fn special_characters_are_escaped_and_restored() {
        let mut doc = Document::new();
        doc.metadata = Metadata {
            title: Some("a < b & c".into()),
            authors: vec![Author { name: "Ada".into(), id: None }],
            ..Metadata::default()
        };
        doc.blocks.push(Block::Paragraph {
            meta: BlockMeta::default(),
            inlines: vec![Inline::text("5 > 4 & \"quotes\"")],
        });
        let xml = write(&doc).expect("write");
        let back = read(&xml).expect("read");
        assert_eq!(back, doc);
    }
}
