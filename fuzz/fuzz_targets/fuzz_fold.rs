//! Fuzz target for line folding.
//!
//! Folds arbitrary text in every mode and checks that plain and quoted
//! folds can be undone.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use yaml_fold::{FoldConfig, FoldMode, FoldStats, fold_with};

#[derive(Arbitrary, Debug)]
struct FoldInput<'a> {
    text: &'a str,
    mode: Mode,
    line_width: u8,
    min_content_width: u8,
    indent: u8,
    indent_at_start: Option<i8>,
}

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Mode {
    Plain,
    Quoted,
    Block,
}

impl From<Mode> for FoldMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Plain => Self::Plain,
            Mode::Quoted => Self::Quoted,
            Mode::Block => Self::Block,
        }
    }
}

fuzz_target!(|input: FoldInput<'_>| {
    let indent = " ".repeat(usize::from(input.indent % 16));
    let mut config = FoldConfig::new(&indent)
        .mode(input.mode.into())
        .line_width(usize::from(input.line_width))
        .min_content_width(usize::from(input.min_content_width));
    if let Some(at_start) = input.indent_at_start {
        config = config.indent_at_start(isize::from(at_start));
    }

    let mut stats = FoldStats::default();
    let out = fold_with(input.text, &config, &mut stats);
    assert!(stats.folds <= 1 && stats.overflows <= 1);
    assert_eq!(stats.folds == 1, out != input.text);

    // Without indentation or a leading fold, every unescaped break was a
    // space.
    if indent.is_empty() && config.indent_at_start.is_none() && !input.text.contains('\n') {
        match input.mode {
            Mode::Plain => assert_eq!(out.replace('\n', " "), input.text),
            Mode::Quoted if !input.text.contains('\\') => {
                assert_eq!(out.replace("\\\n", "").replace('\n', " "), input.text);
            }
            _ => {}
        }
    }
});
