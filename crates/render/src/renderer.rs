//! IR traversal driving a [`PageComposer`].

use crate::composer::{CodeOptions, DocumentInfo, PageComposer, ResolvedSpan, TextOptions};
use crate::error::RenderError;
use crate::template::TemplateConfig;
use polar_doc::ListKind;
use polar_ir::{CODE_SIZE_FACTOR, Color, IrBlock, IrDocument, IrInline, IrListItem, SpanStyle};
use polar_ir::{LogSink, UnsupportedSink};

/// Width of the marker column in list rows, in points.
pub const MARKER_COLUMN_WIDTH: f32 = 30.0;

const BULLET_MARKER: &str = "\u{2022}";
const BLOCK_PADDING: f32 = 8.0;
const PLACEHOLDER_COLOR: Color = Color::gray(0x80);

/// Renders a document with the default logging sink.
pub fn render(
    ir: &IrDocument,
    info: &DocumentInfo,
    template: &TemplateConfig,
    composer: Box<dyn PageComposer>,
) -> Result<Vec<u8>, RenderError> {
    Renderer::new(template.clone()).render(ir, info, composer)
}

pub struct Renderer<S = LogSink> {
    template: TemplateConfig,
    sink: S,
}

impl Renderer<LogSink> {
    pub fn new(template: TemplateConfig) -> Self {
        Self { template, sink: LogSink }
    }
}

impl<S: UnsupportedSink> Renderer<S> {
    pub fn with_sink(template: TemplateConfig, sink: S) -> Self {
        Self { template, sink }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Walks the IR in order, issuing composer calls for every block.
    /// Composer failures abort the render; only content the mapping has
    /// no typesetting for (images, for now) degrades to a placeholder.
    pub fn render(
        &mut self,
        ir: &IrDocument,
        info: &DocumentInfo,
        mut composer: Box<dyn PageComposer>,
    ) -> Result<Vec<u8>, RenderError> {
        composer.begin_document(info, &self.template)?;
        for block in &ir.blocks {
            self.block(block, composer.as_mut())?;
        }
        composer.finish()
    }

    fn block(&mut self, block: &IrBlock, composer: &mut dyn PageComposer) -> Result<(), RenderError> {
        match block {
            IrBlock::Heading { level, spans } => {
                let options = TextOptions {
                    font_size: self.template.heading_size(*level),
                    bold: true,
                    padding_bottom: BLOCK_PADDING,
                };
                self.text_block(spans, &options, composer)
            }
            IrBlock::Paragraph { spans } => {
                let options = TextOptions {
                    font_size: self.template.font_size,
                    bold: false,
                    padding_bottom: BLOCK_PADDING,
                };
                self.text_block(spans, &options, composer)
            }
            IrBlock::Code { language, code } => composer.code_block(
                code,
                &CodeOptions {
                    language: language.clone(),
                    font_size: self.template.font_size * CODE_SIZE_FACTOR,
                    padding_bottom: BLOCK_PADDING,
                },
            ),
            IrBlock::List { kind, items } => self.list(*kind, items, composer),
            IrBlock::Rule => composer.horizontal_rule(),
            IrBlock::Blank { count } => {
                let height =
                    self.template.font_size * self.template.line_height * *count as f32;
                composer.vertical_space(height)
            }
        }
    }

    fn list(
        &mut self,
        kind: ListKind,
        items: &[IrListItem],
        composer: &mut dyn PageComposer,
    ) -> Result<(), RenderError> {
        let options = TextOptions {
            font_size: self.template.font_size,
            bold: false,
            padding_bottom: 0.0,
        };
        for (index, item) in items.iter().enumerate() {
            let marker = match kind {
                ListKind::Bullet => BULLET_MARKER.to_string(),
                ListKind::Ordered => format!("{}.", index + 1),
            };
            composer.begin_item(&marker, MARKER_COLUMN_WIDTH)?;
            self.text_block(&item.spans, &options, composer)?;
            composer.end_item()?;
        }
        Ok(())
    }

    fn text_block(
        &mut self,
        spans: &[IrInline],
        options: &TextOptions,
        composer: &mut dyn PageComposer,
    ) -> Result<(), RenderError> {
        composer.begin_text(options)?;
        for span in spans {
            match span {
                IrInline::Span { text, style } => composer.span(&ResolvedSpan {
                    text: text.clone(),
                    style: style.clone(),
                })?,
                IrInline::Break => composer.line_break()?,
                IrInline::Image { src, alt, .. } => {
                    self.sink.unsupported("image");
                    log::warn!("no image backend, rendering placeholder for {src}");
                    composer.span(&image_placeholder(alt))?;
                }
            }
        }
        composer.end_text()
    }
}

fn image_placeholder(alt: &str) -> ResolvedSpan {
    ResolvedSpan {
        text: format!("[Image: {alt}]"),
        style: SpanStyle {
            italic: true,
            color: Some(PLACEHOLDER_COLOR),
            ..SpanStyle::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::TraceComposer;

    fn span(text: &str) -> IrInline {
        IrInline::Span { text: text.to_string(), style: SpanStyle::default() }
    }

    fn render_trace(ir: &IrDocument) -> String {
        let bytes = render(
            ir,
            &DocumentInfo::default(),
            &TemplateConfig::generic(),
            Box::new(TraceComposer::new()),
        )
        .unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn heading_sizes_scale_with_level() {
        let ir = IrDocument {
            blocks: vec![
                IrBlock::Heading { level: 1, spans: vec![span("big")] },
                IrBlock::Heading { level: 6, spans: vec![span("small")] },
            ],
        };
        let trace = render_trace(&ir);
        assert!(trace.contains("text size=22 bold"));
        assert!(trace.contains("text size=7.37 bold"));
    }

    #[test]
    fn ordered_markers_restart_per_list() {
        let item = |text: &str| IrListItem { spans: vec![span(text)] };
        let ir = IrDocument {
            blocks: vec![
                IrBlock::List { kind: ListKind::Ordered, items: vec![item("a"), item("b")] },
                IrBlock::List { kind: ListKind::Ordered, items: vec![item("c")] },
            ],
        };
        let trace = render_trace(&ir);
        let markers: Vec<&str> = trace
            .lines()
            .filter(|line| line.starts_with("item"))
            .collect();
        assert_eq!(
            markers,
            vec![
                "item marker=1. width=30",
                "item marker=2. width=30",
                "item marker=1. width=30",
            ]
        );
    }

    #[test]
    fn blank_reserves_scaled_height() {
        let ir = IrDocument { blocks: vec![IrBlock::Blank { count: 3 }] };
        let trace = render_trace(&ir);
        // 11 * 1.15 * 3
        assert!(trace.contains("space height=37.95"), "trace: {trace}");
    }

    #[test]
    fn images_become_italic_placeholders() {
        let ir = IrDocument {
            blocks: vec![IrBlock::Paragraph {
                spans: vec![IrInline::Image {
                    src: "assets/chart.png".into(),
                    alt: "quarterly chart".into(),
                    title: None,
                }],
            }],
        };
        let trace = render_trace(&ir);
        assert!(trace.contains("span \"[Image: quarterly chart]\" italic"), "trace: {trace}");
    }
}
