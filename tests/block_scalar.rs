//! Block scalar parsing and rendering.

use std::sync::Once;

use yaml_fold::{
    BlockHeader, BlockStyle, Chomping, Error, FoldConfig, parse_block_scalar,
    render_block_scalar,
};

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

const MORE_INDENTED_BODY: &str = "Text on a line that
should get folded
with a line width of
20 characters.

  Indented text
  that appears to be
folded but is not.

  Text that is prevented from folding due to being more-indented.

Unfolded paragraph.
";

const MORE_INDENTED_VALUE: &str = "Text on a line that should get folded with a line width of 20 characters.

  Indented text
  that appears to be
folded but is not.

  Text that is prevented from folding due to being more-indented.

Unfolded paragraph.
";

#[test]
fn more_indented_lines_survive_a_round_trip() {
    setup_test_logging();
    let src = format!(
        "> # comment with an excessive length that won't get folded\n{MORE_INDENTED_BODY}"
    );
    let value = parse_block_scalar(&src).unwrap();
    assert_eq!(value, MORE_INDENTED_VALUE);

    let config = FoldConfig::new("").line_width(20).min_content_width(0);
    let rendered = render_block_scalar(&value, BlockStyle::Folded, &config).unwrap();
    assert_eq!(rendered, format!(">\n{MORE_INDENTED_BODY}"));
}

#[test]
fn folded_render_snapshot() {
    setup_test_logging();
    let value = "one two three four five six seven\n  code block\nend\n";
    let config = FoldConfig::new("  ").line_width(16).min_content_width(0);
    let rendered = render_block_scalar(value, BlockStyle::Folded, &config).unwrap();
    let lines: Vec<&str> = rendered.split('\n').collect();
    insta::assert_debug_snapshot!(lines, @r#"
    [
        ">",
        "  one two three",
        "  four five six",
        "  seven",
        "    code block",
        "  end",
        "",
    ]
    "#);
    assert_eq!(parse_block_scalar(&rendered).unwrap(), value);
}

#[test]
fn literal_render_snapshot() {
    let value = "  indented\nbody\n\n";
    let config = FoldConfig::new("  ");
    let rendered = render_block_scalar(value, BlockStyle::Literal, &config).unwrap();
    let lines: Vec<&str> = rendered.split('\n').collect();
    insta::assert_debug_snapshot!(lines, @r#"
    [
        "|3+",
        "    indented",
        "  body",
        "",
        "",
    ]
    "#);
    assert_eq!(parse_block_scalar(&rendered).unwrap(), value);
}

#[test]
fn chomping_indicators() {
    let body = "  line one\n  line two\n\n\n";
    let parse = |header: &str| parse_block_scalar(&format!("{header}\n{body}")).unwrap();
    assert_eq!(parse(">"), "line one line two\n");
    assert_eq!(parse(">-"), "line one line two");
    assert_eq!(parse(">+"), "line one line two\n\n\n");
    assert_eq!(parse("|"), "line one\nline two\n");
    assert_eq!(parse("|3-"), "line one\nline two");
}

#[test]
fn header_parses_and_prints_canonically() {
    let header: BlockHeader = ">+3 # trailing comment".parse().unwrap();
    assert_eq!(header.style, BlockStyle::Folded);
    assert_eq!(header.indent, Some(3));
    assert_eq!(header.chomping, Chomping::Keep);
    assert_eq!(header.to_string(), ">3+");
}

#[test]
fn malformed_sources_are_errors() {
    assert_eq!(
        parse_block_scalar("folded\n  text\n"),
        Err(Error::InvalidBlockHeader("folded".to_string()))
    );
    assert_eq!(
        parse_block_scalar("|\n  one\n two\n"),
        Err(Error::LessIndentedLine { line: 3 })
    );
    // ">4" asks for three spaces of indentation.
    assert_eq!(
        parse_block_scalar(">4\n  short\n"),
        Err(Error::LessIndentedLine { line: 2 })
    );
}
