//! Deterministic reference backend.
//!
//! Records every composer call as one line of text and returns the
//! trace as the produced bytes. Used by the test suites and anywhere a
//! headless, dependency-free backend is enough.

use crate::composer::{CodeOptions, DocumentInfo, PageComposer, ResolvedSpan, TextOptions};
use crate::error::RenderError;
use crate::template::TemplateConfig;
use std::fmt::Write;

/// Formats a dimension with at most two decimals, no trailing zeros.
fn num(value: f32) -> String {
    let mut s = format!("{value:.2}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

#[derive(Debug, Default)]
pub struct TraceComposer {
    out: String,
}

impl TraceComposer {
    pub fn new() -> Self {
        Self::default()
    }

    fn line(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }
}

impl PageComposer for TraceComposer {
    fn begin_document(
        &mut self,
        info: &DocumentInfo,
        template: &TemplateConfig,
    ) -> Result<(), RenderError> {
        let mut line = format!(
            "document font={} size={} line-height={}",
            template.font_family,
            num(template.font_size),
            num(template.line_height)
        );
        if let Some(title) = &info.title {
            write!(line, " title={title:?}").ok();
        }
        if let Some(author) = &info.author {
            write!(line, " author={author:?}").ok();
        }
        self.line(&line);
        Ok(())
    }

    fn begin_text(&mut self, options: &TextOptions) -> Result<(), RenderError> {
        let mut line = format!("text size={}", num(options.font_size));
        if options.bold {
            line.push_str(" bold");
        }
        self.line(&line);
        Ok(())
    }

    fn span(&mut self, span: &ResolvedSpan) -> Result<(), RenderError> {
        let mut line = format!("span {:?}", span.text);
        if span.style.bold {
            line.push_str(" bold");
        }
        if span.style.italic {
            line.push_str(" italic");
        }
        if span.style.underline {
            line.push_str(" underline");
        }
        if let Some(family) = &span.style.family {
            write!(line, " family={family}").ok();
        }
        if let Some(href) = &span.style.href {
            write!(line, " href={href}").ok();
        }
        if let Some(color) = &span.style.color {
            write!(line, " color=#{:02X}{:02X}{:02X}", color.r, color.g, color.b).ok();
        }
        self.line(&line);
        Ok(())
    }

    fn line_break(&mut self) -> Result<(), RenderError> {
        self.line("break");
        Ok(())
    }

    fn end_text(&mut self) -> Result<(), RenderError> {
        self.line("end-text");
        Ok(())
    }

    fn begin_item(&mut self, marker: &str, marker_width: f32) -> Result<(), RenderError> {
        let line = format!("item marker={marker} width={}", num(marker_width));
        self.line(&line);
        Ok(())
    }

    fn end_item(&mut self) -> Result<(), RenderError> {
        self.line("end-item");
        Ok(())
    }

    fn code_block(&mut self, code: &str, options: &CodeOptions) -> Result<(), RenderError> {
        let mut line = format!("code size={}", num(options.font_size));
        if let Some(language) = &options.language {
            write!(line, " lang={language}").ok();
        }
        write!(line, " lines={}", code.lines().count()).ok();
        self.line(&line);
        Ok(())
    }

    fn horizontal_rule(&mut self) -> Result<(), RenderError> {
        self.line("rule");
        Ok(())
    }

    fn vertical_space(&mut self, height: f32) -> Result<(), RenderError> {
        let line = format!("space height={}", num(height));
        self.line(&line);
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
        Ok(self.out.into_bytes())
    }
}
