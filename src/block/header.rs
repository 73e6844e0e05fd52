//! Block scalar header (`|`, `>2-`, `>+ # comment`, ...).

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Block scalar style indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BlockStyle {
    /// `|`: every line break is content.
    Literal,
    /// `>`: breaks between text lines fold into spaces.
    #[default]
    Folded,
}

impl BlockStyle {
    /// Header indicator char.
    #[must_use]
    pub const fn indicator(self) -> char {
        match self {
            Self::Literal => '|',
            Self::Folded => '>',
        }
    }
}

/// Trailing line break handling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Chomping {
    /// No indicator: keep a single trailing line break.
    #[default]
    Clip,
    /// `-`: drop all trailing line breaks.
    Strip,
    /// `+`: keep every trailing line break.
    Keep,
}

impl Chomping {
    /// Header indicator char, if any.
    #[must_use]
    pub const fn indicator(self) -> Option<char> {
        match self {
            Self::Clip => None,
            Self::Strip => Some('-'),
            Self::Keep => Some('+'),
        }
    }

    /// The chomping that reproduces the trailing line breaks of `value`.
    #[must_use]
    pub fn for_value(value: &str) -> Self {
        let content = value.trim_end_matches('\n');
        match value.len() - content.len() {
            0 => Self::Strip,
            // Clip drops the breaks of a body with no content.
            1 if !content.is_empty() => Self::Clip,
            _ => Self::Keep,
        }
    }

    /// Name used by `Display`/`FromStr`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clip => "clip",
            Self::Strip => "strip",
            Self::Keep => "keep",
        }
    }
}

impl fmt::Display for Chomping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chomping {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "clip" => Ok(Self::Clip),
            "strip" | "-" => Ok(Self::Strip),
            "keep" | "+" => Ok(Self::Keep),
            _ => Err(Error::UnknownChomping(s.to_string())),
        }
    }
}

/// Parsed block scalar header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockHeader {
    /// Literal or folded.
    pub style: BlockStyle,
    /// Explicit indentation indicator (`1..=9`).
    pub indent: Option<u8>,
    /// Trailing line break handling.
    pub chomping: Chomping,
}

impl BlockHeader {
    #[must_use]
    pub const fn new(style: BlockStyle) -> Self {
        Self {
            style,
            indent: None,
            chomping: Chomping::Clip,
        }
    }

    #[must_use]
    pub fn chomping(mut self, chomping: Chomping) -> Self {
        self.chomping = chomping;
        self
    }

    #[must_use]
    pub fn indent(mut self, indicator: u8) -> Self {
        self.indent = Some(indicator);
        self
    }

    /// Parse a header line. A trailing `# comment` is allowed after
    /// whitespace.
    pub fn parse(line: &str) -> Result<Self> {
        let invalid = || Error::InvalidBlockHeader(line.to_string());
        let line = line.trim_end_matches(['\r', '\n']);

        let mut chars = line.char_indices();
        let style = match chars.next() {
            Some((_, '|')) => BlockStyle::Literal,
            Some((_, '>')) => BlockStyle::Folded,
            _ => return Err(invalid()),
        };
        let mut header = Self::new(style);
        let mut chomping_seen = false;
        let mut rest = "";

        for (idx, ch) in chars {
            match ch {
                '1'..='9' if header.indent.is_none() => {
                    header.indent = ch.to_digit(10).and_then(|d| u8::try_from(d).ok());
                }
                '-' | '+' if !chomping_seen => {
                    chomping_seen = true;
                    header.chomping = if ch == '-' {
                        Chomping::Strip
                    } else {
                        Chomping::Keep
                    };
                }
                ' ' | '\t' => {
                    rest = &line[idx..];
                    break;
                }
                _ => return Err(invalid()),
            }
        }

        let rest = rest.trim_start_matches([' ', '\t']);
        if !rest.is_empty() && !rest.starts_with('#') {
            return Err(invalid());
        }
        Ok(header)
    }
}

impl fmt::Display for BlockHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.style.indicator())?;
        if let Some(indent) = self.indent {
            write!(f, "{indent}")?;
        }
        if let Some(ch) = self.chomping.indicator() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl FromStr for BlockHeader {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
