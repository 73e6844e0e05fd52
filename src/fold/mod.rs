//! Line folding for plain, double-quoted and block scalar content.
//!
//! Folding inserts line breaks into a scalar's already-rendered text so that
//! lines stay within a target width, without changing the value a YAML
//! reader reconstructs:
//!
//! - Plain and block content only breaks at a single space between two
//!   non-blank characters; the break folds back into that space on re-read.
//!   Runs of two or more spaces are never split.
//! - Double-quoted content also uses `\` line continuations where no such
//!   space is available. A continuation line never starts with a blank.
//!
//! Existing newlines in the input are kept and reset the width count.
//!
//! # Examples
//!
//! ```
//! use yaml_fold::{FoldConfig, FoldMode, FoldStats, fold_with};
//!
//! let config = FoldConfig::new("")
//!     .mode(FoldMode::Quoted)
//!     .line_width(10)
//!     .min_content_width(0);
//! let mut stats = FoldStats::default();
//! let folded = fold_with("\"abc def ghi jkl mnopqrstuvwxyz\n\"", &config, &mut stats);
//! assert_eq!(folded, "\"abc def\nghi jkl\nmnopqrstu\\\nvwxyz\n\"");
//! assert_eq!(stats.folds, 1);
//! ```

mod config;
mod folder;
mod scan;

pub use config::{
    DEFAULT_LINE_WIDTH, DEFAULT_MIN_CONTENT_WIDTH, FoldConfig, FoldMode, FoldObserver, FoldSettings,
    FoldStats,
};
pub use folder::{fold, fold_with};
pub use scan::{BreakCandidate, BreakKind, scan};
