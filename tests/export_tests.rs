mod common;

use common::fixtures::*;
use common::{TestResult, export_trace};
use polar::{Document, ExportOptions, TemplateConfig, UnsupportedSink};

#[test]
fn full_document_drives_the_composer_in_order() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = full_document();
    let trace = export_trace(&doc, &ExportOptions::default())?;

    let kinds: Vec<&str> = trace
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "document",
            "text", "span", "end-text",                     // heading
            "text", "span", "span", "span", "span", "span", "end-text",
            "space",
            "item", "text", "span", "end-text", "end-item", // bullets
            "item", "text", "span", "end-text", "end-item",
            "item", "text", "span", "end-text", "end-item", // ordered
            "item", "text", "span", "end-text", "end-item",
            "code",
            "rule",
            "text", "span", "break", "span", "span", "end-text",
        ]
    );
    Ok(())
}

#[test]
fn document_info_falls_back_to_metadata() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = full_document();
    let trace = export_trace(&doc, &ExportOptions::default())?;
    assert!(trace.contains(r#"title="Quarterly Report""#), "trace: {trace}");
    assert!(trace.contains(r#"author="Ada""#), "trace: {trace}");

    let options = ExportOptions {
        title: Some("Override".to_string()),
        author: Some("Someone Else".to_string()),
        ..ExportOptions::default()
    };
    let trace = export_trace(&doc, &options)?;
    assert!(trace.contains(r#"title="Override""#));
    assert!(trace.contains(r#"author="Someone Else""#));
    Ok(())
}

#[test]
fn heading_and_blank_dimensions_use_the_template() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = full_document();
    let trace = export_trace(&doc, &ExportOptions::default())?;
    // Generic template: base 11pt, level 1 multiplier 2.0, two blanks
    // at line height 1.15.
    assert!(trace.contains("text size=22 bold"), "trace: {trace}");
    assert!(trace.contains("space height=25.3"), "trace: {trace}");
    Ok(())
}

#[test]
fn government_template_scales_everything_up() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = Document {
        blocks: vec![heading(2, "h")],
        ..Document::new()
    };
    let options = ExportOptions {
        template: TemplateConfig::government(),
        ..ExportOptions::default()
    };
    let trace = export_trace(&doc, &options)?;
    assert!(trace.contains("document font=Arial size=12 line-height=1.5"), "trace: {trace}");
    assert!(trace.contains("text size=18 bold"), "trace: {trace}");
    Ok(())
}

#[test]
fn nested_formatting_flattens_to_styled_spans() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = full_document();
    let trace = export_trace(&doc, &ExportOptions::default())?;
    assert!(trace.contains(r#"span "up" bold"#), "trace: {trace}");
    assert!(trace.contains(r#"span "last quarter" italic"#), "trace: {trace}");
    assert!(
        trace.contains(r#"span "site" underline href=https://example.com"#),
        "trace: {trace}"
    );
    assert!(trace.contains(r#"span "x + 1" family=Courier New"#), "trace: {trace}");
    Ok(())
}

#[test]
fn images_render_as_placeholders_and_report_through_the_sink() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    #[derive(Default)]
    struct Recording(Vec<String>);
    impl UnsupportedSink for Recording {
        fn unsupported(&mut self, kind: &str) {
            self.0.push(kind.to_string());
        }
    }

    let doc = Document {
        blocks: vec![paragraph(vec![image("assets/chart.png", "chart")])],
        ..Document::new()
    };
    let ir = polar::build(&doc);
    let mut renderer =
        polar::Renderer::with_sink(TemplateConfig::generic(), Recording::default());
    let bytes = renderer.render(
        &ir,
        &polar::DocumentInfo::default(),
        Box::new(polar::TraceComposer::new()),
    )?;
    let trace = String::from_utf8(bytes)?;
    assert!(trace.contains(r#"span "[Image: chart]" italic"#), "trace: {trace}");
    assert_eq!(renderer.into_sink().0, vec!["image".to_string()]);
    Ok(())
}
