//! Canonical reader: XML event stream to [`Document`].
//!
//! Every sub-reader is entered with its element's start tag already
//! consumed and returns with the cursor positioned just past its own
//! closing tag. Unknown elements are skipped with their whole subtree
//! wherever they occur; only schema violations abort.

use crate::cursor::{Attributes, Cursor, Node};
use crate::error::CanonicalError;
use crate::{DATE_FORMAT, LIST_TYPE_NUMBERED, tags};
use chrono::NaiveDate;
use polar_doc::{
    Author, Block, BlockMeta, DateStamp, Document, Image, Inline, ListItem, ListKind, Metadata,
};
use std::str::FromStr;

/// Reads a canonical document. Fails with [`CanonicalError::Structural`]
/// when the root element is not `<polar>`; no partial document is ever
/// returned.
pub fn read(input: &str) -> Result<Document, CanonicalError> {
    DocumentReader { cur: Cursor::new(input) }.read_document()
}

/// Reads a canonical document from a stream. The stream is consumed
/// before parsing starts and released on every exit path.
pub fn read_from(mut input: impl std::io::BufRead) -> Result<Document, CanonicalError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    read(&text)
}

struct DocumentReader<'a> {
    cur: Cursor<'a>,
}

impl DocumentReader<'_> {
    fn read_document(&mut self) -> Result<Document, CanonicalError> {
        let (name, mut attrs, empty) = loop {
            match self.cur.next()? {
                Node::Start { name, attrs, empty } => break (name, attrs, empty),
                Node::Text(_) => continue,
                Node::End | Node::Eof => {
                    return Err(CanonicalError::Structural("missing root element".into()));
                }
            }
        };
        if name != tags::ROOT {
            return Err(CanonicalError::Structural(format!(
                "root element must be <{}>, got <{name}>",
                tags::ROOT
            )));
        }

        let mut doc = Document {
            version: attrs
                .remove("version")
                .unwrap_or_else(|| polar_doc::FORMAT_VERSION.to_string()),
            id: attrs.remove("id"),
            style: attrs.remove("style"),
            ..Document::new()
        };
        if empty {
            return Ok(doc);
        }

        loop {
            match self.cur.next()? {
                Node::Start { name, attrs, empty } => {
                    if name == tags::METADATA {
                        doc.metadata = self.read_metadata(empty)?;
                    } else if let Some(block) = self.read_block(&name, attrs, empty)? {
                        doc.blocks.push(block);
                    }
                }
                // stray character data at document level carries no meaning
                Node::Text(_) => continue,
                Node::End => break,
                Node::Eof => {
                    return Err(CanonicalError::Structural(
                        "unexpected end of input inside <polar>".into(),
                    ));
                }
            }
        }
        Ok(doc)
    }

    fn read_metadata(&mut self, empty: bool) -> Result<Metadata, CanonicalError> {
        let mut metadata = Metadata::default();
        if empty {
            return Ok(metadata);
        }
        loop {
            match self.cur.next()? {
                Node::Start { name, mut attrs, empty } => match name.as_str() {
                    tags::TITLE => metadata.title = Some(self.text_content(empty)?),
                    tags::AUTHOR => {
                        let id = attrs.remove("id");
                        metadata.authors.push(Author { name: self.text_content(empty)?, id });
                    }
                    tags::DATE => {
                        metadata.date = Some(DateStamp {
                            created: parse_date(attrs.get("created")),
                            modified: parse_date(attrs.get("modified")),
                        });
                        self.skip_element(empty)?;
                    }
                    tags::CUSTOM => {
                        let key = attrs.remove("key");
                        let value = self.text_content(empty)?;
                        // a blank or missing key drops the entry
                        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
                            metadata.custom.insert(key, value);
                        }
                    }
                    _ => self.skip_element(empty)?,
                },
                Node::Text(_) => continue,
                Node::End => return Ok(metadata),
                Node::Eof => {
                    return Err(CanonicalError::Structural(
                        "unexpected end of input inside <metadata>".into(),
                    ));
                }
            }
        }
    }

    fn read_block(
        &mut self,
        name: &str,
        mut attrs: Attributes,
        empty: bool,
    ) -> Result<Option<Block>, CanonicalError> {
        let meta = BlockMeta { id: attrs.remove("id"), style: attrs.remove("style") };
        let block = match name {
            tags::HEADING => {
                let level: u8 = numeric_attr(&attrs, "level", 1)?;
                if !(1..=6).contains(&level) {
                    return Err(CanonicalError::Structural(format!(
                        "heading level out of range: {level}"
                    )));
                }
                Block::Heading { meta, level, inlines: self.read_inlines(empty)? }
            }
            tags::PARAGRAPH => Block::Paragraph { meta, inlines: self.read_inlines(empty)? },
            tags::LIST => {
                let kind = match attrs.get("type").map(String::as_str) {
                    Some(LIST_TYPE_NUMBERED) => ListKind::Ordered,
                    // absent or unknown type falls back to bullet
                    _ => ListKind::Bullet,
                };
                Block::List { meta, kind, items: self.read_items(empty)? }
            }
            tags::CODE => Block::Code {
                meta,
                language: attrs.remove("language"),
                code: self.text_content(empty)?,
            },
            tags::RULE => {
                self.skip_element(empty)?;
                Block::Rule { meta }
            }
            tags::BLANK => {
                let count: u32 = numeric_attr(&attrs, "count", 1)?;
                if count < 1 {
                    return Err(CanonicalError::Structural(
                        "blank count must be at least 1".into(),
                    ));
                }
                self.skip_element(empty)?;
                Block::Blank { meta, count }
            }
            _ => {
                log::debug!("skipping unknown element <{name}>");
                self.skip_element(empty)?;
                return Ok(None);
            }
        };
        Ok(Some(block))
    }

    fn read_items(&mut self, empty: bool) -> Result<Vec<ListItem>, CanonicalError> {
        let mut items = Vec::new();
        if empty {
            return Ok(items);
        }
        loop {
            match self.cur.next()? {
                Node::Start { name, empty, .. } if name == tags::ITEM => {
                    items.push(ListItem { inlines: self.read_inlines(empty)? });
                }
                Node::Start { empty, .. } => self.skip_element(empty)?,
                Node::Text(_) => continue,
                Node::End => return Ok(items),
                Node::Eof => {
                    return Err(CanonicalError::Structural(
                        "unexpected end of input inside <list>".into(),
                    ));
                }
            }
        }
    }

    fn read_inlines(&mut self, empty: bool) -> Result<Vec<Inline>, CanonicalError> {
        let mut inlines = Vec::new();
        if empty {
            return Ok(inlines);
        }
        loop {
            match self.cur.next()? {
                Node::Text(text) => inlines.push(Inline::Text(text)),
                Node::Start { name, mut attrs, empty } => match name.as_str() {
                    tags::STRONG => inlines.push(Inline::Strong(self.read_inlines(empty)?)),
                    tags::EMPHASIS => inlines.push(Inline::Emphasis(self.read_inlines(empty)?)),
                    tags::LINK => inlines.push(Inline::Link {
                        href: attrs.remove("href").unwrap_or_default(),
                        title: attrs.remove("title"),
                        children: self.read_inlines(empty)?,
                    }),
                    tags::CODE => inlines.push(Inline::Code(self.text_content(empty)?)),
                    tags::IMAGE => {
                        inlines.push(Inline::Image(Image {
                            src: attrs.remove("src").unwrap_or_default(),
                            alt: attrs.remove("alt").unwrap_or_default(),
                            title: attrs.remove("title"),
                            original_path: attrs.remove("original-path"),
                        }));
                        self.skip_element(empty)?;
                    }
                    tags::BREAK => {
                        inlines.push(Inline::LineBreak);
                        self.skip_element(empty)?;
                    }
                    _ => {
                        log::debug!("skipping unknown inline element <{name}>");
                        self.skip_element(empty)?;
                    }
                },
                Node::End => return Ok(inlines),
                Node::Eof => {
                    return Err(CanonicalError::Structural(
                        "unexpected end of input in inline content".into(),
                    ));
                }
            }
        }
    }

    /// Collects the text content of the current element, skipping any
    /// nested elements, and consumes the closing tag.
    fn text_content(&mut self, empty: bool) -> Result<String, CanonicalError> {
        let mut text = String::new();
        if empty {
            return Ok(text);
        }
        loop {
            match self.cur.next()? {
                Node::Text(t) => text.push_str(&t),
                Node::Start { empty, .. } => self.skip_element(empty)?,
                Node::End => return Ok(text),
                Node::Eof => {
                    return Err(CanonicalError::Structural(
                        "unexpected end of input in text content".into(),
                    ));
                }
            }
        }
    }

    /// Skips the rest of the current element, nested subtrees included.
    fn skip_element(&mut self, empty: bool) -> Result<(), CanonicalError> {
        if empty {
            return Ok(());
        }
        let mut depth = 1u32;
        loop {
            match self.cur.next()? {
                Node::Start { empty: false, .. } => depth += 1,
                Node::Start { empty: true, .. } | Node::Text(_) => {}
                Node::End => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Node::Eof => {
                    return Err(CanonicalError::Structural(
                        "unexpected end of input while skipping element".into(),
                    ));
                }
            }
        }
    }
}

fn numeric_attr<T: FromStr>(
    attrs: &Attributes,
    key: &str,
    default: T,
) -> Result<T, CanonicalError> {
    match attrs.get(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| {
            CanonicalError::Structural(format!("invalid numeric attribute {key}=\"{raw}\""))
        }),
    }
}

fn parse_date(value: Option<&String>) -> Option<NaiveDate> {
    value.and_then(|v| NaiveDate::parse_from_str(v, DATE_FORMAT).ok())
}
