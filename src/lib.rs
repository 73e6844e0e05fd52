//! `yaml-fold` - line folding for YAML scalars
//!
//! Inserts line breaks into plain, double-quoted and block scalar text so
//! that lines fit a target width while the value a YAML reader reconstructs
//! stays the same, and unfolds block scalar bodies back into their values.
//!
//! # Examples
//!
//! ```
//! use yaml_fold::{FoldConfig, fold, unfold};
//!
//! let config = FoldConfig::new("  ").line_width(12).min_content_width(0);
//! let folded = fold("one two three four", &config);
//! assert_eq!(folded, "one two\n  three four");
//!
//! let lines = ["  one two\n", "  three four\n"];
//! assert_eq!(unfold(lines, "  "), "one two three four\n");
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow FoldConfig in fold etc
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::missing_errors_doc)] // Error variants document their causes

pub mod block;
pub mod error;
pub mod fold;

// Re-export core types at crate root
pub use error::{Error, Result};

// Re-export folding
pub use fold::{
    BreakCandidate, BreakKind, DEFAULT_LINE_WIDTH, DEFAULT_MIN_CONTENT_WIDTH, FoldConfig, FoldMode,
    FoldObserver, FoldSettings, FoldStats, fold, fold_with, scan,
};

// Re-export block scalar handling
pub use block::{
    BlockHeader, BlockStyle, Chomping, parse_block_scalar, render_block_scalar, unfold,
    unfold_with,
};
