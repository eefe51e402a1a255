mod common;

use common::TestResult;
use common::fixtures::full_document;
use polar::{Block, CanonicalError, Inline, ListKind, parse, read, write};

#[test]
fn full_document_round_trips() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = full_document();
    let xml = write(&doc)?;
    let back = read(&xml)?;
    assert_eq!(back, doc);

    // A second pass stays stable.
    let xml2 = write(&back)?;
    assert_eq!(read(&xml2)?, doc);
    Ok(())
}

#[test]
fn wrong_root_tag_is_structural() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let err = read("<document><p>x</p></document>").unwrap_err();
    assert!(matches!(err, CanonicalError::Structural(_)), "got {err:?}");
    Ok(())
}

#[test]
fn heading_level_out_of_range_is_structural() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let err = read(r#"<polar><heading level="7">x</heading></polar>"#).unwrap_err();
    assert!(matches!(err, CanonicalError::Structural(_)), "got {err:?}");
    Ok(())
}

#[test]
fn unknown_tags_are_skipped_with_their_subtree() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let xml = r#"<polar>
        <widget><p>not a real paragraph</p></widget>
        <p>kept <gadget depth="2"><b>deep</b></gadget>text</p>
    </polar>"#;
    let doc = read(xml)?;
    assert_eq!(doc.blocks.len(), 1);
    let Block::Paragraph { inlines, .. } = &doc.blocks[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(inlines, &vec![Inline::text("kept "), Inline::text("text")]);
    Ok(())
}

#[test]
fn empty_and_self_closed_forms_are_tolerated() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let xml = r#"<polar>
        <p/>
        <list type="numbered"/>
        <code></code>
        <heading level="2"/>
    </polar>"#;
    let doc = read(xml)?;
    assert_eq!(doc.blocks.len(), 4);
    assert!(matches!(&doc.blocks[0], Block::Paragraph { inlines, .. } if inlines.is_empty()));
    assert!(
        matches!(&doc.blocks[1], Block::List { kind: ListKind::Ordered, items, .. } if items.is_empty())
    );
    assert!(matches!(&doc.blocks[2], Block::Code { code, .. } if code.is_empty()));
    assert!(matches!(&doc.blocks[3], Block::Heading { level: 2, inlines, .. } if inlines.is_empty()));
    Ok(())
}

#[test]
fn missing_attributes_fall_back_to_defaults() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = read("<polar><heading>h</heading><list><item>x</item></list><blank/></polar>")?;
    assert!(matches!(&doc.blocks[0], Block::Heading { level: 1, .. }));
    assert!(matches!(&doc.blocks[1], Block::List { kind: ListKind::Bullet, .. }));
    assert!(matches!(&doc.blocks[2], Block::Blank { count: 1, .. }));
    assert_eq!(doc.version, polar::Document::new().version);
    Ok(())
}

#[test]
fn blank_custom_metadata_keys_are_dropped() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let xml = r#"<polar>
        <metadata>
            <custom key="kept">v</custom>
            <custom key="">dropped</custom>
            <custom>dropped too</custom>
        </metadata>
    </polar>"#;
    let doc = read(xml)?;
    assert_eq!(doc.metadata.custom.len(), 1);
    assert_eq!(doc.metadata.custom.get("kept").map(String::as_str), Some("v"));
    Ok(())
}

#[test]
fn markup_characters_in_text_round_trip() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = parse("AT&T says 1 < 2 & \"quotes\" work");
    let back = read(&write(&doc)?)?;
    assert_eq!(back, doc);

    let Block::Paragraph { inlines, .. } = &back.blocks[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(
        inlines,
        &vec![Inline::text("AT&T says 1 < 2 & \"quotes\" work")]
    );
    Ok(())
}

#[test]
fn spacing_between_adjacent_styled_runs_round_trips() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = parse("**a** **b**");
    let back = read(&write(&doc)?)?;
    assert_eq!(back, doc);

    let Block::Paragraph { inlines, .. } = &back.blocks[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(
        inlines,
        &vec![
            Inline::Strong(vec![Inline::text("a")]),
            Inline::text(" "),
            Inline::Strong(vec![Inline::text("b")]),
        ]
    );
    Ok(())
}

#[test]
fn mixed_inline_content_survives_the_round_trip() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = read(
        r#"<polar><p>a <strong>b <em>c</em></strong> d<br/><a href="https://e.com" title="t">e</a></p></polar>"#,
    )?;
    let back = read(&write(&doc)?)?;
    assert_eq!(back, doc);
    Ok(())
}
