//! Fold configuration and observers.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Default target line width.
pub const DEFAULT_LINE_WIDTH: usize = 80;
/// Default minimum content width for indented continuation lines.
pub const DEFAULT_MIN_CONTENT_WIDTH: usize = 20;

/// Folding rules to apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FoldMode {
    /// Plain scalar: break only at single spaces between non-space characters.
    #[default]
    Plain,
    /// Double-quoted scalar: natural breaks plus `\` continuations.
    Quoted,
    /// Folded block scalar body: plain rules, but more-indented lines
    /// (starting with space or tab) are never folded.
    Block,
}

impl FoldMode {
    /// Name used by `Display`/`FromStr`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Quoted => "quoted",
            Self::Block => "block",
        }
    }
}

impl fmt::Display for FoldMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoldMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "flow" => Ok(Self::Plain),
            "quoted" => Ok(Self::Quoted),
            "block" => Ok(Self::Block),
            _ => Err(Error::UnknownFoldMode(s.to_string())),
        }
    }
}

/// Width limits shared by every scalar a writer emits.
///
/// This is the reusable, serializable half of [`FoldConfig`]; a writer keeps
/// one of these and builds a per-scalar [`FoldConfig`] from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FoldSettings {
    /// Maximum line width in chars; `0` disables folding.
    pub line_width: usize,
    /// Content width continuation lines may always use, even past `line_width`.
    pub min_content_width: usize,
}

impl Default for FoldSettings {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            min_content_width: DEFAULT_MIN_CONTENT_WIDTH,
        }
    }
}

impl FoldSettings {
    /// Settings that never fold.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            line_width: 0,
            min_content_width: 0,
        }
    }

    /// Whether these settings allow any folding at all.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.line_width > 0
    }
}

/// Per-call fold configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoldConfig<'a> {
    /// Prefix written after every inserted line break.
    pub indent: &'a str,
    /// Columns already used on the first line. `None` means the first line
    /// carries `indent` like every continuation line.
    pub indent_at_start: Option<isize>,
    /// Maximum line width in chars; `0` disables folding.
    pub line_width: usize,
    /// Content width continuation lines may always use, even past `line_width`.
    pub min_content_width: usize,
    /// Folding rules.
    pub mode: FoldMode,
}

impl<'a> FoldConfig<'a> {
    /// Create a plain-mode config with default settings.
    ///
    /// The default minimum content width of 20 takes priority over narrower
    /// line widths: continuation lines may then run past `line_width`. Set
    /// `min_content_width(0)` to hold every line to the width.
    #[must_use]
    pub fn new(indent: &'a str) -> Self {
        Self::with_settings(indent, FoldSettings::default())
    }

    /// Create a plain-mode config from shared settings.
    #[must_use]
    pub fn with_settings(indent: &'a str, settings: FoldSettings) -> Self {
        Self {
            indent,
            indent_at_start: None,
            line_width: settings.line_width,
            min_content_width: settings.min_content_width,
            mode: FoldMode::Plain,
        }
    }

    /// Set the fold mode.
    #[must_use]
    pub fn mode(mut self, mode: FoldMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the line width.
    #[must_use]
    pub fn line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    /// Set the minimum content width.
    #[must_use]
    pub fn min_content_width(mut self, width: usize) -> Self {
        self.min_content_width = width;
        self
    }

    /// Set the columns already consumed on the first line.
    #[must_use]
    pub fn indent_at_start(mut self, columns: isize) -> Self {
        self.indent_at_start = Some(columns);
        self
    }

    /// Width limits of this config.
    #[must_use]
    pub fn settings(&self) -> FoldSettings {
        FoldSettings {
            line_width: self.line_width,
            min_content_width: self.min_content_width,
        }
    }
}

/// Receives notifications from a fold call.
///
/// Both hooks run synchronously on the caller's thread, at most once per
/// call, before [`fold_with`](crate::fold_with) returns.
pub trait FoldObserver {
    /// At least one line break was inserted.
    fn on_fold(&mut self) {}

    /// Some output line could not be kept within the line width.
    fn on_overflow(&mut self) {}
}

impl<F: FnMut()> FoldObserver for F {
    fn on_fold(&mut self) {
        self();
    }
}

/// Observer that counts notifications.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FoldStats {
    /// Number of calls that inserted breaks.
    pub folds: usize,
    /// Number of calls that overflowed the line width.
    pub overflows: usize,
}

impl FoldObserver for FoldStats {
    fn on_fold(&mut self) {
        self.folds += 1;
    }

    fn on_overflow(&mut self) {
        self.overflows += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in [FoldMode::Plain, FoldMode::Quoted, FoldMode::Block] {
            assert_eq!(mode.to_string().parse::<FoldMode>(), Ok(mode));
        }
        assert_eq!(" Quoted ".parse::<FoldMode>(), Ok(FoldMode::Quoted));
        assert_eq!("flow".parse::<FoldMode>(), Ok(FoldMode::Plain));
        assert_eq!(
            "literal".parse::<FoldMode>(),
            Err(Error::UnknownFoldMode("literal".to_string()))
        );
    }

    #[test]
    fn test_config_builder() {
        let config = FoldConfig::new("  ")
            .mode(FoldMode::Quoted)
            .line_width(40)
            .min_content_width(10)
            .indent_at_start(-3);
        assert_eq!(config.indent, "  ");
        assert_eq!(config.mode, FoldMode::Quoted);
        assert_eq!(config.indent_at_start, Some(-3));
        assert_eq!(
            config.settings(),
            FoldSettings {
                line_width: 40,
                min_content_width: 10
            }
        );
    }

    #[test]
    fn test_default_settings() {
        let config = FoldConfig::new("");
        assert_eq!(config.line_width, DEFAULT_LINE_WIDTH);
        assert_eq!(config.min_content_width, DEFAULT_MIN_CONTENT_WIDTH);
        assert_eq!(config.indent_at_start, None);
        assert!(FoldSettings::default().is_enabled());
        assert!(!FoldSettings::disabled().is_enabled());
    }

    #[test]
    fn test_stats_observer() {
        let mut stats = FoldStats::default();
        stats.on_fold();
        stats.on_overflow();
        stats.on_overflow();
        assert_eq!(stats.folds, 1);
        assert_eq!(stats.overflows, 2);
    }

    #[test]
    fn test_closure_observer() {
        let mut count = 0;
        let mut observer = || count += 1;
        observer.on_fold();
        observer.on_overflow();
        observer.on_fold();
        assert_eq!(count, 2);
    }
}
