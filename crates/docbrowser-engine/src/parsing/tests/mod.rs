//! Scanner tests over whole documents.

mod normalize;

use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::parsing::{
    blocks::BlockKind,
    inline::{InlineNode, parse_inline},
    parse_document,
    rope::slice_to_string,
};

fn scan(md: &str) -> Vec<String> {
    let rope = Rope::from(md);
    let doc = parse_document(&rope);
    invariants::check(&rope, &doc.blocks);
    normalize::describe(&rope, &doc.blocks)
}

#[test]
fn empty_document() {
    assert!(scan("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(scan("\n\n\n").is_empty());
}

#[test]
fn paragraphs_split_on_blank_lines() {
    assert_eq!(
        scan("first line\nsecond line\n\nthird\n"),
        vec![
            r#"Paragraph "first line\nsecond line""#,
            r#"Paragraph "third""#,
        ]
    );
}

#[test]
fn heading_ends_paragraph() {
    assert_eq!(
        scan("intro\n## Setup\nbody"),
        vec![
            r#"Paragraph "intro""#,
            r#"Heading(2) "Setup""#,
            r#"Paragraph "body""#,
        ]
    );
}

#[rstest]
#[case("# One", r#"Heading(1) "One""#)]
#[case("## Two", r#"Heading(2) "Two""#)]
#[case("### Three", r#"Heading(3) "Three""#)]
#[case("#### Four", "Paragraph \"#### Four\"")]
#[case("- item", r#"Bullet "item""#)]
#[case("10. item", r#"Numbered "item""#)]
#[case("> quoted", r#"Quote "quoted""#)]
#[case(">not quoted", r#"Paragraph ">not quoted""#)]
fn single_line_blocks(#[case] md: &str, #[case] expected: &str) {
    assert_eq!(scan(md), vec![expected]);
}

#[test]
fn list_run_is_one_block_per_line() {
    assert_eq!(
        scan("- a\n- b\n- c\n"),
        vec![r#"Bullet "a""#, r#"Bullet "b""#, r#"Bullet "c""#]
    );
}

#[test]
fn consecutive_list_items_have_abutting_spans() {
    let rope = Rope::from("- a\n- b\n\n- c\n");
    let doc = parse_document(&rope);
    assert_eq!(doc.blocks.len(), 3);
    assert!(doc.blocks[0].span.abuts(doc.blocks[1].span));
    assert!(!doc.blocks[1].span.abuts(doc.blocks[2].span));
}

#[test]
fn fenced_code_with_language() {
    assert_eq!(
        scan("```python\nprint('hi')\n```\nafter"),
        vec![
            r#"FencedCode(Some("python")) "print('hi')\n""#,
            r#"Paragraph "after""#,
        ]
    );
}

#[test]
fn fence_body_is_not_scanned() {
    assert_eq!(
        scan("```\n# not a heading\n- not an item\n```"),
        vec![r##"FencedCode(None) "# not a heading\n- not an item\n""##]
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    assert_eq!(
        scan("```\nlet x = 1;\n"),
        vec![r#"FencedCode(None) "let x = 1;\n""#]
    );
}

#[test]
fn fence_interrupts_paragraph() {
    assert_eq!(
        scan("text\n```\ncode\n```"),
        vec![r#"Paragraph "text""#, r#"FencedCode(None) "code\n""#]
    );
}

#[test]
fn table_with_header_and_rows() {
    assert_eq!(
        scan("| A | B |\n| - | - |\n| 1 | 2 |\n| 3 | 4 |\n\nafter"),
        vec![
            r#"TableHeader ["A", "B"]"#,
            r#"TableRow ["1", "2"]"#,
            r#"TableRow ["3", "4"]"#,
            r#"Paragraph "after""#,
        ]
    );
}

#[test]
fn table_ends_at_first_non_row_line() {
    assert_eq!(
        scan("| A |\n|---|\n| 1 |\nnot a row"),
        vec![
            r#"TableHeader ["A"]"#,
            r#"TableRow ["1"]"#,
            r#"Paragraph "not a row""#,
        ]
    );
}

#[test]
fn table_after_paragraph_text() {
    assert_eq!(
        scan("Results:\n| A |\n| - |\n| 1 |"),
        vec![
            r#"Paragraph "Results:""#,
            r#"TableHeader ["A"]"#,
            r#"TableRow ["1"]"#,
        ]
    );
}

#[test]
fn pipe_lines_without_separator_stay_paragraph() {
    assert_eq!(
        scan("| A | B |\n| 1 | 2 |"),
        vec![r#"Paragraph "| A | B |\n| 1 | 2 |""#]
    );
}

#[test]
fn header_span_covers_separator() {
    let rope = Rope::from("| A |\n| - |\n| 1 |\n");
    let doc = parse_document(&rope);
    assert_eq!(doc.blocks[0].span.end, 12);
    assert!(doc.blocks[0].span.abuts(doc.blocks[1].span));
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        scan("# Title\r\n\r\n- a\r\n- b\r\n"),
        vec![r#"Heading(1) "Title""#, r#"Bullet "a""#, r#"Bullet "b""#]
    );
}

/// Test that raw zones (code spans) don't produce links.
#[test]
fn raw_zones_suppress_inline_parsing() {
    let md = "`[not](a link)`";
    let rope = Rope::from(md);

    let doc = parse_document(&rope);
    assert_eq!(doc.blocks.len(), 1);
    assert!(matches!(doc.blocks[0].kind, BlockKind::Paragraph));

    let content = doc.blocks[0].content_span;
    let inlines = parse_inline(content.start, &slice_to_string(&rope, content));

    assert_eq!(inlines.len(), 1);
    assert!(matches!(inlines[0], InlineNode::CodeSpan { .. }));
}

#[test]
fn fenced_code_body_is_one_block() {
    let rope = Rope::from("```\n`code` [a](b)\n```");
    let doc = parse_document(&rope);
    assert_eq!(doc.blocks.len(), 1);
    assert!(matches!(doc.blocks[0].kind, BlockKind::FencedCode { lang: None }));
    assert_eq!(
        slice_to_string(&rope, doc.blocks[0].content_span),
        "`code` [a](b)\n"
    );
}
