//! Break candidate scanning.
//!
//! The scanner walks a scalar's rendered content once and reports every
//! position where a line break may be inserted without changing the value.
//! Escape sequences in quoted content are scanned as single units so that no
//! candidate ever falls inside one.

use super::config::FoldMode;

/// How a break at a candidate is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BreakKind {
    /// A single space between two non-blank characters, replaced by the
    /// line break. Re-reading folds the break back into that space.
    Natural,
    /// A `\` continuation after the candidate character (quoted mode only).
    Forced,
}

/// A position where a break may be inserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BreakCandidate {
    /// Char index. For [`BreakKind::Natural`] this is the space being
    /// replaced; for [`BreakKind::Forced`] the last char kept on the line.
    pub offset: usize,
    /// How the break is written.
    pub kind: BreakKind,
}

impl BreakCandidate {
    /// A natural break replacing the space at `offset`.
    #[must_use]
    pub const fn natural(offset: usize) -> Self {
        Self {
            offset,
            kind: BreakKind::Natural,
        }
    }

    /// A `\` continuation after the char at `offset`.
    #[must_use]
    pub const fn forced(offset: usize) -> Self {
        Self {
            offset,
            kind: BreakKind::Forced,
        }
    }
}

/// Scan `text` for break candidates, ordered by offset.
///
/// Natural and forced candidates may share an offset in quoted mode; the
/// natural one comes first.
#[must_use]
pub fn scan(text: &str, mode: FoldMode) -> Vec<BreakCandidate> {
    let chars: Vec<char> = text.chars().collect();
    scan_chars(&chars, mode)
}

pub(crate) fn scan_chars(chars: &[char], mode: FoldMode) -> Vec<BreakCandidate> {
    let len = chars.len();
    let mut out = Vec::new();
    let mut prev: Option<char> = None;
    let mut i = 0;

    if mode == FoldMode::Block {
        i = skip_more_indented(chars, 0);
        if i > 0 {
            prev = Some('\n');
        }
    }

    while i < len {
        let brk = break_len(chars, i, mode);
        if brk > 0 {
            i += brk;
            if mode == FoldMode::Block {
                i = skip_more_indented(chars, i);
            }
            prev = Some('\n');
            continue;
        }

        let ch = chars[i];
        let last = i + unit_len(chars, i, mode) - 1;
        let next = if break_len(chars, last + 1, mode) > 0 {
            Some('\n')
        } else {
            chars.get(last + 1).copied()
        };

        if ch == ' '
            && prev.is_some_and(|p| !is_break_blank(p))
            && next.is_some_and(|n| !is_break_blank(n))
        {
            out.push(BreakCandidate::natural(i));
        }
        if mode == FoldMode::Quoted && next.is_some_and(|n| !is_break_blank(n)) {
            out.push(BreakCandidate::forced(last));
        }

        prev = Some(ch);
        i = last + 1;
    }

    out
}

/// Length of the line break starting at `i`: a newline, or in quoted mode an
/// escaped line break (`\` then newline). Zero when no break starts there.
pub(crate) fn break_len(chars: &[char], i: usize, mode: FoldMode) -> usize {
    match chars.get(i) {
        Some('\n') => 1,
        Some('\\') if mode == FoldMode::Quoted && chars.get(i + 1) == Some(&'\n') => 2,
        _ => 0,
    }
}

/// Number of chars in the unit starting at `i`: a whole escape sequence in
/// quoted mode, otherwise one.
pub(crate) fn unit_len(chars: &[char], i: usize, mode: FoldMode) -> usize {
    if mode != FoldMode::Quoted || chars[i] != '\\' {
        return 1;
    }
    let len = match chars.get(i + 1) {
        Some('x') => 4,
        Some('u') => 6,
        Some('U') => 10,
        _ => 2,
    };
    len.min(chars.len() - i)
}

/// Skip more-indented lines starting at line start `pos`, returning the start
/// of the first line that is not more-indented (or the end of input).
pub(crate) fn skip_more_indented(chars: &[char], mut pos: usize) -> usize {
    while matches!(chars.get(pos), Some(' ' | '\t')) {
        pos = chars[pos..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(chars.len(), |nl| pos + nl + 1);
    }
    pos
}

/// Space, tab or newline: characters that may not border a break.
pub(crate) const fn is_break_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}

/// Space or tab.
pub(crate) const fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t')
}
