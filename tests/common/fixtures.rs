use polar::{Author, Block, BlockMeta, Document, Image, Inline, ListItem, ListKind, Metadata};

pub fn text(s: &str) -> Inline {
    Inline::Text(s.to_string())
}

pub fn heading(level: u8, s: &str) -> Block {
    Block::Heading {
        meta: BlockMeta::default(),
        level,
        inlines: vec![text(s)],
    }
}

pub fn paragraph(inlines: Vec<Inline>) -> Block {
    Block::Paragraph { meta: BlockMeta::default(), inlines }
}

pub fn list(kind: ListKind, items: Vec<&str>) -> Block {
    Block::List {
        meta: BlockMeta::default(),
        kind,
        items: items
            .into_iter()
            .map(|s| ListItem { inlines: vec![text(s)] })
            .collect(),
    }
}

pub fn image(src: &str, alt: &str) -> Inline {
    Inline::Image(Image {
        src: src.to_string(),
        alt: alt.to_string(),
        title: None,
        original_path: None,
    })
}

/// A document exercising every block kind, most inline kinds, and the
/// full metadata header.
pub fn full_document() -> Document {
    Document {
        id: Some("doc-1".to_string()),
        style: Some("report".to_string()),
        metadata: Metadata {
            title: Some("Quarterly Report".to_string()),
            authors: vec![
                Author { name: "Ada".to_string(), id: Some("u-1".to_string()) },
                Author { name: "Grace".to_string(), id: None },
            ],
            date: Some(polar::DateStamp {
                created: chrono::NaiveDate::from_ymd_opt(2026, 3, 14),
                modified: None,
            }),
            custom: [("department".to_string(), "finance".to_string())]
                .into_iter()
                .collect(),
        },
        blocks: vec![
            heading(1, "Overview"),
            paragraph(vec![
                text("Revenue was "),
                Inline::Strong(vec![text("up")]),
                text(" versus "),
                Inline::Emphasis(vec![text("last quarter")]),
                text("."),
            ]),
            Block::Blank { meta: BlockMeta::default(), count: 2 },
            list(ListKind::Bullet, vec!["north", "south"]),
            list(ListKind::Ordered, vec!["first", "second"]),
            Block::Code {
                meta: BlockMeta::default(),
                language: Some("rust".to_string()),
                code: "fn main() {}".to_string(),
            },
            Block::Rule { meta: BlockMeta::default() },
            paragraph(vec![
                Inline::Link {
                    href: "https://example.com".to_string(),
                    title: Some("home".to_string()),
                    children: vec![text("site")],
                },
                Inline::LineBreak,
                image("assets/chart.png", "chart"),
                Inline::Code("x + 1".to_string()),
            ]),
        ],
        ..Document::new()
    }
}
