//! A cursor over the canonical XML event stream.
//!
//! Wraps the quick-xml reader and reduces its events to the four node
//! kinds the document schema cares about. Character data arrives from
//! quick-xml as a mix of text chunks and general-reference events
//! (`&amp;`, `&#xNN;`, ...); the cursor resolves the references and
//! coalesces each run into a single [`Node::Text`], so sub-parsers see
//! one node per contiguous text run. Whitespace-only runs are kept;
//! parsers at element-list level ignore them, inline parsers keep them
//! as content.

use crate::error::CanonicalError;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Decoder, Reader};
use std::collections::HashMap;

pub(crate) type Attributes = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    /// An opening tag; `empty` marks the self-closed form.
    Start {
        name: String,
        attrs: Attributes,
        empty: bool,
    },
    /// One contiguous run of character data, references resolved.
    Text(String),
    End,
    Eof,
}

pub(crate) struct Cursor<'a> {
    reader: Reader<&'a [u8]>,
    buf: Vec<u8>,
    /// Node already read while a text run was still being accumulated.
    pending: Option<Node>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        let mut reader = Reader::from_str(input);
        reader.config_mut().trim_text(false);
        Self { reader, buf: Vec::new(), pending: None }
    }

    /// Returns the next node.
    pub(crate) fn next(&mut self) -> Result<Node, CanonicalError> {
        if let Some(node) = self.pending.take() {
            return Ok(node);
        }
        let decoder = self.reader.decoder();
        let mut text = String::new();
        loop {
            self.buf.clear();
            let node = match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(e) => Some(Node::Start {
                    name: decode(e.name().as_ref())?,
                    attrs: collect_attrs(&e, decoder)?,
                    empty: false,
                }),
                Event::Empty(e) => Some(Node::Start {
                    name: decode(e.name().as_ref())?,
                    attrs: collect_attrs(&e, decoder)?,
                    empty: true,
                }),
                Event::Text(e) => {
                    text.push_str(decode(e.as_ref())?.as_str());
                    None
                }
                Event::CData(e) => {
                    text.push_str(decode(e.as_ref())?.as_str());
                    None
                }
                Event::GeneralRef(e) => {
                    if let Some(ch) = e.resolve_char_ref()? {
                        text.push(ch);
                    } else {
                        let name = e.decode().map_err(quick_xml::Error::from)?;
                        match resolve_predefined_entity(&name) {
                            Some(resolved) => text.push_str(resolved),
                            None => {
                                return Err(CanonicalError::Structural(format!(
                                    "unresolvable entity reference &{name};"
                                )));
                            }
                        }
                    }
                    None
                }
                Event::End(_) => Some(Node::End),
                Event::Eof => Some(Node::Eof),
                // declarations, comments, processing instructions
                _ => None,
            };
            if let Some(node) = node {
                if text.is_empty() {
                    return Ok(node);
                }
                self.pending = Some(node);
                return Ok(Node::Text(text));
            }
        }
    }
}

fn collect_attrs(element: &BytesStart<'_>, decoder: Decoder) -> Result<Attributes, CanonicalError> {
    let mut attrs = Attributes::new();
    for attr in element.attributes() {
        let attr = attr?;
        let key = decode(attr.key.as_ref())?;
        let value = attr.decode_and_unescape_value(decoder)?.into_owned();
        attrs.insert(key, value);
    }
    Ok(attrs)
}

fn decode(bytes: &[u8]) -> Result<String, CanonicalError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| CanonicalError::Structural(e.to_string()))
}
