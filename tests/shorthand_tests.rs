mod common;

use common::TestResult;
use polar::{Block, Inline, ListKind, parse};

#[test]
fn heading_marker_sets_the_level() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = parse("### Title");
    assert_eq!(doc.blocks.len(), 1);
    match &doc.blocks[0] {
        Block::Heading { level, inlines, .. } => {
            assert_eq!(*level, 3);
            assert_eq!(inlines, &vec![Inline::text("Title")]);
        }
        other => panic!("expected heading, got {other:?}"),
    }
    Ok(())
}

#[test]
fn changing_marker_kind_starts_a_new_list() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = parse("- a\n1. b");
    assert_eq!(doc.blocks.len(), 2);
    assert!(matches!(&doc.blocks[0], Block::List { kind: ListKind::Bullet, items, .. } if items.len() == 1));
    assert!(matches!(&doc.blocks[1], Block::List { kind: ListKind::Ordered, items, .. } if items.len() == 1));
    Ok(())
}

#[test]
fn blank_runs_between_blocks_are_counted() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = parse("one\n\n\n\ntwo");
    assert_eq!(doc.blocks.len(), 3);
    assert!(matches!(&doc.blocks[0], Block::Paragraph { .. }));
    assert!(matches!(&doc.blocks[1], Block::Blank { count: 3, .. }));
    assert!(matches!(&doc.blocks[2], Block::Paragraph { .. }));
    Ok(())
}

#[test]
fn tied_inline_offsets_prefer_bold() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = parse("**a*b*c**");
    let Block::Paragraph { inlines, .. } = &doc.blocks[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(
        inlines,
        &vec![Inline::Strong(vec![Inline::text("a*b*c")])]
    );
    Ok(())
}

#[test]
fn unterminated_fence_captures_the_rest_of_the_input() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = parse("intro\n```sh\necho hi\necho bye");
    assert_eq!(doc.blocks.len(), 2);
    match &doc.blocks[1] {
        Block::Code { language, code, .. } => {
            assert_eq!(language.as_deref(), Some("sh"));
            assert_eq!(code, "echo hi\necho bye");
        }
        other => panic!("expected code block, got {other:?}"),
    }
    Ok(())
}

#[test]
fn parsing_is_deterministic() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let text = "# T\n\npara **bold** [x](https://e.com)\n\n- a\n- b\n\n---\n";
    assert_eq!(parse(text), parse(text));
    Ok(())
}

#[test]
fn unrecognized_content_degrades_to_paragraph_text() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = parse("####### seven hashes is not a heading");
    assert_eq!(doc.blocks.len(), 1);
    let Block::Paragraph { inlines, .. } = &doc.blocks[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(inlines, &vec![Inline::text("####### seven hashes is not a heading")]);
    Ok(())
}
