//! Inline formatting sub-parser.
//!
//! Works on one physical line at a time: repeatedly finds the earliest
//! match among the four span patterns, emits the text before it as a
//! plain run, emits the match as its structured node and rescans the
//! remainder. Matched content is not re-parsed in the same pass, so
//! `**a*b*c**` stays a single strong run.

use once_cell::sync::Lazy;
use polar_doc::Inline;
use regex::Regex;

static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("regex"));
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("regex"));
static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.+?)`").expect("regex"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\[([^\]]*)\]\(([^)\s"]+)(?:\s+"([^"]*)")?\)"#).expect("regex"));

/// Tie-break order for matches starting at the same offset. Kept as a
/// single list so the precedence is reviewable in one place.
const PATTERNS: [SpanKind; 4] = [
    SpanKind::Bold,
    SpanKind::Italic,
    SpanKind::Code,
    SpanKind::Link,
];

#[derive(Debug, Clone, Copy)]
enum SpanKind {
    Bold,
    Italic,
    Code,
    Link,
}

struct SpanMatch {
    start: usize,
    end: usize,
    node: Inline,
}

impl SpanKind {
    fn find(self, text: &str) -> Option<SpanMatch> {
        match self {
            SpanKind::Bold => BOLD_RE.captures(text).and_then(|caps| {
                let whole = caps.get(0)?;
                Some(SpanMatch {
                    start: whole.start(),
                    end: whole.end(),
                    node: Inline::Strong(vec![Inline::text(&caps[1])]),
                })
            }),
            SpanKind::Italic => ITALIC_RE.captures(text).and_then(|caps| {
                let whole = caps.get(0)?;
                Some(SpanMatch {
                    start: whole.start(),
                    end: whole.end(),
                    node: Inline::Emphasis(vec![Inline::text(&caps[1])]),
                })
            }),
            SpanKind::Code => CODE_RE.captures(text).and_then(|caps| {
                let whole = caps.get(0)?;
                Some(SpanMatch {
                    start: whole.start(),
                    end: whole.end(),
                    node: Inline::Code(caps[1].to_string()),
                })
            }),
            SpanKind::Link => LINK_RE.captures(text).and_then(|caps| {
                let whole = caps.get(0)?;
                Some(SpanMatch {
                    start: whole.start(),
                    end: whole.end(),
                    node: Inline::Link {
                        href: caps[2].to_string(),
                        title: caps.get(3).map(|m| m.as_str().to_string()),
                        children: vec![Inline::text(&caps[1])],
                    },
                })
            }),
        }
    }
}

/// Parses possibly multi-line text into inline nodes. Physical lines are
/// parsed independently with an explicit [`Inline::LineBreak`] between
/// consecutive lines.
pub fn parse_inlines(text: &str) -> Vec<Inline> {
    let mut inlines = Vec::new();
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            inlines.push(Inline::LineBreak);
        }
        parse_line(line, &mut inlines);
    }
    inlines
}

fn parse_line(line: &str, out: &mut Vec<Inline>) {
    let mut rest = line;
    while !rest.is_empty() {
        let Some(found) = earliest_match(rest) else {
            out.push(Inline::text(rest));
            return;
        };
        if found.start > 0 {
            out.push(Inline::text(&rest[..found.start]));
        }
        out.push(found.node);
        rest = &rest[found.end..];
    }
}

/// Earliest-starting match wins; on a tied offset the order of
/// [`PATTERNS`] decides.
fn earliest_match(text: &str) -> Option<SpanMatch> {
    let mut best: Option<SpanMatch> = None;
    for kind in PATTERNS {
        if let Some(found) = kind.find(text) {
            let better = best.as_ref().is_none_or(|b| found.start < b.start);
            if better {
                best = Some(found);
            }
        }
    }
    best
}
