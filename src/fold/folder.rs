//! Greedy line folding.

use super::config::{FoldConfig, FoldMode, FoldObserver};
use super::scan::{
    BreakKind, break_len, is_blank, scan_chars, skip_more_indented, unit_len,
};
use std::borrow::Cow;
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FoldKind {
    /// Move the whole value onto a fresh continuation line.
    Leading,
    /// Replace the space at `at` with a line break.
    Natural,
    /// Insert `\` and a line break after the char at `at`.
    Escaped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Fold {
    at: usize,
    kind: FoldKind,
}

impl Fold {
    const fn new(at: usize, kind: FoldKind) -> Self {
        Self { at, kind }
    }
}

#[derive(Debug, Default)]
struct FoldPlan {
    folds: Vec<Fold>,
    overflow: bool,
}

/// Fold `text` to fit `config.line_width`.
///
/// Returns the input unchanged (borrowed) when folding is disabled, the text
/// is empty, or every line already fits.
///
/// # Examples
///
/// ```
/// use yaml_fold::{FoldConfig, fold};
///
/// let config = FoldConfig::new("").line_width(10).min_content_width(0);
/// let folded = fold("abc def ghi jkl", &config);
/// assert_eq!(folded, "abc def\nghi jkl");
/// ```
#[must_use]
pub fn fold<'t>(text: &'t str, config: &FoldConfig<'_>) -> Cow<'t, str> {
    fold_with(text, config, &mut || {})
}

/// Fold `text`, notifying `observer` once if any break was inserted and once
/// if any line overflows the width.
pub fn fold_with<'t, O>(text: &'t str, config: &FoldConfig<'_>, observer: &mut O) -> Cow<'t, str>
where
    O: FoldObserver + ?Sized,
{
    if config.line_width == 0 || text.is_empty() {
        return Cow::Borrowed(text);
    }

    let chars: Vec<char> = text.chars().collect();
    let plan = plan_folds(&chars, config);

    if plan.overflow {
        debug!(
            line_width = config.line_width,
            mode = %config.mode,
            "scalar line exceeds line width"
        );
        observer.on_overflow();
    }
    if plan.folds.is_empty() {
        return Cow::Borrowed(text);
    }

    trace!(folds = plan.folds.len(), mode = %config.mode, "folded scalar");
    observer.on_fold();
    Cow::Owned(render(text, config.indent, &plan.folds))
}

fn plan_folds(chars: &[char], config: &FoldConfig<'_>) -> FoldPlan {
    let len = chars.len();
    let mode = config.mode;
    let width = to_isize(config.line_width);
    let indent = to_isize(config.indent.chars().count());
    let min_content = to_isize(config.min_content_width);
    // Distance from a line's first char to the first char that overflows it.
    let end_step = (1 + min_content).max(1 + width - indent);

    let mut plan = FoldPlan::default();
    let mut end = width - indent;
    match config.indent_at_start {
        Some(at_start) if at_start > width - min_content.max(2) => {
            plan.folds.push(Fold::new(0, FoldKind::Leading));
        }
        Some(at_start) => end = width - at_start,
        None => {}
    }

    let candidates = scan_chars(chars, mode);
    let mut naturals = candidates
        .iter()
        .filter(|c| c.kind == BreakKind::Natural)
        .map(|c| c.offset)
        .peekable();
    let forced: Vec<usize> = candidates
        .iter()
        .filter(|c| c.kind == BreakKind::Forced)
        .map(|c| c.offset)
        .collect();

    let mut split: Option<usize> = None;
    let mut line_start = 0;
    let mut i = 0;

    if mode == FoldMode::Block {
        i = skip_more_indented(chars, 0);
        if i > 0 {
            end = to_isize(i) - 1 + end_step;
            line_start = i;
        }
    }

    while i < len {
        // Existing line breaks, escaped ones included, start a fresh line.
        let brk = break_len(chars, i, mode);
        if brk > 0 {
            i += brk;
            if mode == FoldMode::Block {
                i = skip_more_indented(chars, i);
            }
            end = to_isize(i) - 1 + end_step;
            line_start = i;
            split = None;
            continue;
        }

        // Escape sequences are measured at their last char.
        i += unit_len(chars, i, mode) - 1;
        while naturals.next_if(|&n| n < i).is_some() {}
        if naturals.next_if_eq(&i).is_some() {
            split = Some(i);
        }

        if to_isize(i) >= end {
            if let Some(at) = split.take() {
                plan.folds.push(Fold::new(at, FoldKind::Natural));
                end = to_isize(at) + end_step;
                line_start = at + 1;
            } else if mode == FoldMode::Quoted {
                // Trailing blanks stay on this line; the next line must start
                // with a non-blank char or re-reading would drop it.
                let resume = (i..=len).find(|&k| k == 0 || !is_blank(chars[k - 1]));
                match resume {
                    None => {
                        plan.overflow = true;
                        break;
                    }
                    Some(k) if k > i && break_len(chars, k - 1, mode) > 0 => {
                        plan.overflow = true;
                        i = k - 1;
                        continue;
                    }
                    Some(k) => {
                        if let Some(at) = last_forced(&forced, to_isize(k) - 2, line_start) {
                            plan.folds.push(Fold::new(at, FoldKind::Escaped));
                            plan.overflow |= k > i;
                            end = to_isize(at) + end_step;
                            line_start = at + 1;
                            // Resume at the unit that now starts the line.
                            i = if k > i + 1 { k - 1 } else { i + 1 };
                            continue;
                        }
                        trace!(offset = i, "no escape-safe break on line");
                        plan.overflow = true;
                    }
                }
            } else {
                plan.overflow = true;
            }
        }
        i += 1;
    }

    plan
}

/// Last forced candidate at or before `target` that keeps at least one char
/// on the current line.
fn last_forced(forced: &[usize], target: isize, line_start: usize) -> Option<usize> {
    if target < 0 {
        return None;
    }
    let idx = forced.partition_point(|&at| to_isize(at) <= target);
    forced[..idx].last().copied().filter(|&at| at >= line_start)
}

fn render(text: &str, indent: &str, folds: &[Fold]) -> String {
    let mut bytes: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
    bytes.push(text.len());

    let mut out = String::with_capacity(text.len() + folds.len() * (indent.len() + 2));
    let mut from = 0;
    for fold in folds {
        match fold.kind {
            FoldKind::Leading => {}
            FoldKind::Natural => {
                out.push_str(&text[from..bytes[fold.at]]);
                from = bytes[fold.at + 1];
            }
            FoldKind::Escaped => {
                let to = bytes[fold.at + 1];
                out.push_str(&text[from..to]);
                out.push('\\');
                from = to;
            }
        }
        out.push('\n');
        out.push_str(indent);
    }
    out.push_str(&text[from..]);
    out
}

fn to_isize(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}
