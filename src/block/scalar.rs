//! Whole block scalars: header line plus body.
//!
//! These treat the scalar as a top-level node, so an explicit indentation
//! indicator `n` means content indented `n - 1` spaces.

use super::header::{BlockHeader, BlockStyle, Chomping};
use super::unfold::unfold_with;
use crate::error::{Error, Result};
use crate::fold::{FoldConfig, FoldMode, fold};
use tracing::debug;

/// Parse a block scalar (`>`/`|` header line followed by its body) into its
/// value.
///
/// # Errors
///
/// Returns [`Error::InvalidBlockHeader`] for a malformed header line and
/// [`Error::LessIndentedLine`] when a body line falls outside the content.
///
/// # Examples
///
/// ```
/// use yaml_fold::parse_block_scalar;
///
/// let value = parse_block_scalar(">-\n  one\n  two\n\n  three\n").unwrap();
/// assert_eq!(value, "one two\nthree");
/// ```
pub fn parse_block_scalar(src: &str) -> Result<String> {
    let (header_line, body) = src.split_once('\n').unwrap_or((src, ""));
    let header = BlockHeader::parse(header_line)?;
    let lines: Vec<&str> = body.split_inclusive('\n').collect();

    let width = match header.indent {
        Some(indicator) => usize::from(indicator) - 1,
        None => detect_indent(&lines),
    };
    let base_indent = " ".repeat(width);

    for (idx, line) in lines.iter().enumerate() {
        let text = line.trim_end_matches(['\n', '\r']);
        if !text.trim_start_matches(' ').is_empty() && !text.starts_with(&base_indent) {
            return Err(Error::LessIndentedLine { line: idx + 2 });
        }
    }

    debug!(%header, indent = width, lines = lines.len(), "parsing block scalar");
    Ok(unfold_with(lines, &base_indent, header.style, header.chomping))
}

/// Render `value` as a top-level block scalar with the given style, folding
/// text lines with `config` when the style is folded.
///
/// `config.indent` is the content indentation; it must be spaces.
///
/// # Errors
///
/// Returns [`Error::IndentIndicatorOutOfRange`] when the value starts with a
/// space and `config.indent` is too deep for a one-digit indentation
/// indicator.
pub fn render_block_scalar(
    value: &str,
    style: BlockStyle,
    config: &FoldConfig<'_>,
) -> Result<String> {
    let indent = config.indent;
    let content = value.trim_end_matches('\n');
    let trailing = value.len() - content.len();

    let mut header = BlockHeader::new(style).chomping(Chomping::for_value(value));
    let first_line = content.split('\n').find(|line| !line.is_empty());
    if first_line.is_some_and(|line| line.starts_with(' ')) {
        let indicator = indent.len() + 1;
        let indicator = u8::try_from(indicator)
            .ok()
            .filter(|n| (1..=9).contains(n))
            .ok_or(Error::IndentIndicatorOutOfRange(indicator))?;
        header = header.indent(indicator);
    }

    let line_config = FoldConfig {
        indent_at_start: None,
        mode: FoldMode::Block,
        ..*config
    };

    let mut out = format!("{header}\n");
    if !content.is_empty() {
        let mut prev_text: Option<bool> = None;
        let mut blanks = 0;
        for line in content.split('\n') {
            if line.is_empty() {
                blanks += 1;
                continue;
            }
            let is_text = !line.starts_with([' ', '\t']);
            // A single break between text lines would fold into a space.
            let breaks = match prev_text {
                None => blanks,
                Some(true) if is_text && style == BlockStyle::Folded => blanks + 2,
                Some(_) => blanks + 1,
            };
            out.extend(std::iter::repeat_n('\n', breaks));
            out.push_str(indent);
            if is_text && style == BlockStyle::Folded {
                out.push_str(&fold(line, &line_config));
            } else {
                out.push_str(line);
            }
            prev_text = Some(is_text);
            blanks = 0;
        }
    }
    out.extend(std::iter::repeat_n('\n', trailing));
    Ok(out)
}

/// Indentation of the first non-blank line, or of the longest blank line
/// when every line is blank.
fn detect_indent(lines: &[&str]) -> usize {
    let leading = |line: &str| {
        let text = line.trim_end_matches(['\n', '\r']);
        let rest = text.trim_start_matches(' ');
        (text.len() - rest.len(), rest.is_empty())
    };
    lines
        .iter()
        .map(|line| leading(line))
        .find(|&(_, blank)| !blank)
        .map_or_else(
            || lines.iter().map(|line| leading(line).0).max().unwrap_or(0),
            |(width, _)| width,
        )
}
