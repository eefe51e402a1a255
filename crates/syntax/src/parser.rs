//! Line-level scanner: classifies each input line and accumulates blocks.

use crate::inline::parse_inlines;
use once_cell::sync::Lazy;
use polar_doc::{Block, BlockMeta, Document, ListItem, ListKind};
use regex::Regex;
use std::path::{Path, PathBuf};

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("regex"));
static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[-*+]\s+(.*)$").expect("regex"));
static ORDERED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\.\s+(.*)$").expect("regex"));
static RULE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(-{3,}|\*{3,}|_{3,})$").expect("regex"));

const FENCE: &str = "```";

/// Parses shorthand text into a fresh [`Document`].
pub fn parse(text: &str) -> Document {
    Parser::new().parse(text)
}

/// Shorthand parser entry point.
///
/// The optional base directory does not affect parsing itself (the
/// shorthand grammar carries no asset references); it is recorded so
/// the archive layer can resolve relative asset paths later.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    base_dir: Option<PathBuf>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: Some(dir.into()) }
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Total over its input; never fails.
    pub fn parse(&self, text: &str) -> Document {
        let mut scanner = LineScanner::default();
        for raw in text.split('\n') {
            scanner.scan(raw.strip_suffix('\r').unwrap_or(raw));
        }
        Document { blocks: scanner.finish(), ..Document::default() }
    }
}

/// State carried across the single forward pass: the four accumulators
/// plus the blocks emitted so far. At most one of paragraph/list/blank
/// is ever pending at a time; the classifier flushes the others before
/// feeding an accumulator.
#[derive(Default)]
struct LineScanner {
    blocks: Vec<Block>,
    paragraph: Vec<String>,
    items: Vec<String>,
    list_kind: ListKind,
    code: Vec<String>,
    code_language: Option<String>,
    in_code: bool,
    blank_run: u32,
}

impl LineScanner {
    /// Classifies one line, in fixed priority order.
    fn scan(&mut self, line: &str) {
        if let Some(rest) = line.strip_prefix(FENCE) {
            self.fence(rest);
            return;
        }
        if self.in_code {
            self.code.push(line.to_string());
            return;
        }
        if line.is_empty() {
            self.flush_list();
            self.flush_paragraph();
            self.blank_run += 1;
            return;
        }
        if RULE_RE.is_match(line) {
            self.flush_paragraph();
            self.flush_list();
            self.flush_blanks();
            self.blocks.push(Block::Rule { meta: BlockMeta::default() });
            return;
        }
        if let Some(caps) = HEADING_RE.captures(line) {
            self.flush_paragraph();
            self.flush_list();
            self.flush_blanks();
            self.blocks.push(Block::Heading {
                meta: BlockMeta::default(),
                level: caps[1].len() as u8,
                inlines: parse_inlines(&caps[2]),
            });
            return;
        }
        if let Some(caps) = BULLET_RE.captures(line) {
            self.list_item(ListKind::Bullet, caps[1].to_string());
            return;
        }
        if let Some(caps) = ORDERED_RE.captures(line) {
            self.list_item(ListKind::Ordered, caps[1].to_string());
            return;
        }
        self.flush_list();
        self.flush_blanks();
        self.paragraph.push(line.to_string());
    }

    fn fence(&mut self, rest: &str) {
        if self.in_code {
            let code = self.code.join("\n");
            self.code.clear();
            self.in_code = false;
            self.blocks.push(Block::Code {
                meta: BlockMeta::default(),
                language: self.code_language.take(),
                code,
            });
        } else {
            self.flush_paragraph();
            self.flush_list();
            self.flush_blanks();
            self.in_code = true;
            let language = rest.trim();
            self.code_language = (!language.is_empty()).then(|| language.to_string());
        }
    }

    /// Appends one item; a pending list of the other kind closes first,
    /// so kinds never mix within a single list block.
    fn list_item(&mut self, kind: ListKind, text: String) {
        self.flush_paragraph();
        if self.list_kind != kind {
            self.flush_list();
        }
        self.flush_blanks();
        self.list_kind = kind;
        self.items.push(text);
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join("\n");
        self.paragraph.clear();
        self.blocks.push(Block::Paragraph {
            meta: BlockMeta::default(),
            inlines: parse_inlines(&text),
        });
    }

    fn flush_list(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let items = self
            .items
            .drain(..)
            .map(|text| ListItem { inlines: parse_inlines(&text) })
            .collect();
        self.blocks.push(Block::List {
            meta: BlockMeta::default(),
            kind: self.list_kind,
            items,
        });
    }

    fn flush_blanks(&mut self) {
        if self.blank_run == 0 {
            return;
        }
        self.blocks.push(Block::Blank {
            meta: BlockMeta::default(),
            count: self.blank_run,
        });
        self.blank_run = 0;
    }

    /// End of input: an open fence keeps everything it captured, other
    /// accumulators flush in fixed order so no trailing content is lost.
    fn finish(mut self) -> Vec<Block> {
        if self.in_code {
            let code = self.code.join("\n");
            self.blocks.push(Block::Code {
                meta: BlockMeta::default(),
                language: self.code_language.take(),
                code,
            });
            return self.blocks;
        }
        self.flush_paragraph();
        self.flush_list();
        self.flush_blanks();
        self.blocks
    }
}
