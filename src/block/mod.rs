//! Block scalars (`|` literal and `>` folded).
//!
//! The read side turns a header line and body lines back into a value
//! ([`parse_block_scalar`], [`unfold`]); the write side picks a header and
//! folds long text lines ([`render_block_scalar`]).

mod header;
mod scalar;
mod unfold;

pub use header::{BlockHeader, BlockStyle, Chomping};
pub use scalar::{parse_block_scalar, render_block_scalar};
pub use unfold::{unfold, unfold_with};
