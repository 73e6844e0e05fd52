//! Block scalar unfolding.
//!
//! Rebuilds a block scalar's value from its physical body lines: the inverse
//! of folding on the read side.

use super::header::{BlockStyle, Chomping};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineKind {
    /// Nothing left after the base indentation.
    Blank,
    /// More-indented: starts with a space or tab after the base indentation.
    Spaced,
    Text,
}

/// A body line with its base indentation and terminator removed.
#[derive(Clone, Copy, Debug)]
struct BodyLine<'a> {
    kind: LineKind,
    content: &'a str,
    terminated: bool,
}

impl<'a> BodyLine<'a> {
    fn classify(line: &'a str, base_indent: &str) -> Self {
        let (body, terminated) = match line.strip_suffix('\n') {
            Some(body) => (body.strip_suffix('\r').unwrap_or(body), true),
            None => (line, false),
        };
        // Under-indented lines are the composer's problem; strip what is there.
        let content = body
            .strip_prefix(base_indent)
            .unwrap_or_else(|| body.trim_start_matches([' ', '\t']));
        let kind = match content.chars().next() {
            None => LineKind::Blank,
            Some(' ' | '\t') => LineKind::Spaced,
            Some(_) => LineKind::Text,
        };
        Self {
            kind,
            content,
            terminated,
        }
    }
}

/// Unfold the body lines of a folded (`>`) block scalar, keeping trailing
/// line breaks exactly as they appear in the source.
///
/// `lines` are physical lines as yielded by [`str::split_inclusive`] on
/// `'\n'`; `base_indent` is the scalar's content indentation.
///
/// # Examples
///
/// ```
/// use yaml_fold::unfold;
///
/// let body = "  folded\n  text\n\n    kept\n  end\n";
/// assert_eq!(unfold(body.split_inclusive('\n'), "  "), "folded text\n\n  kept\nend\n");
/// ```
#[must_use]
pub fn unfold<'a, I>(lines: I, base_indent: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    unfold_with(lines, base_indent, BlockStyle::Folded, Chomping::Keep)
}

/// Unfold the body lines of a block scalar with an explicit style and
/// chomping.
#[must_use]
pub fn unfold_with<'a, I>(
    lines: I,
    base_indent: &str,
    style: BlockStyle,
    chomping: Chomping,
) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    let mut prev: Option<LineKind> = None;
    let mut last_terminated = false;
    // Line breaks of blank lines since the last content line.
    let mut blanks = 0;

    for line in lines {
        let line = BodyLine::classify(line, base_indent);
        if line.kind == LineKind::Blank {
            blanks += usize::from(line.terminated);
            continue;
        }

        match prev {
            None => push_breaks(&mut out, blanks),
            Some(LineKind::Text) if style == BlockStyle::Folded && line.kind == LineKind::Text => {
                if blanks == 0 {
                    out.push(' ');
                } else {
                    push_breaks(&mut out, blanks);
                }
            }
            Some(_) => push_breaks(&mut out, blanks + 1),
        }

        out.push_str(line.content);
        prev = Some(line.kind);
        last_terminated = line.terminated;
        blanks = 0;
    }

    let trailing = if prev.is_some() {
        usize::from(last_terminated) + blanks
    } else {
        blanks
    };
    match chomping {
        Chomping::Keep => push_breaks(&mut out, trailing),
        Chomping::Clip if prev.is_some() && trailing > 0 => out.push('\n'),
        Chomping::Clip | Chomping::Strip => {}
    }
    out
}

fn push_breaks(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n('\n', count));
}
