//! Output configuration

use std::fmt;
use std::str::FromStr;

/// Linebreak written between blocks of output text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreak {
    /// `\n`
    #[default]
    Unix,
    /// `\r\n`
    Windows,
}

impl LineBreak {
    pub fn as_str(self) -> &'static str {
        match self {
            LineBreak::Unix => "\n",
            LineBreak::Windows => "\r\n",
        }
    }
}

impl fmt::Display for LineBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineBreak::Unix => "unix",
            LineBreak::Windows => "windows",
        })
    }
}

/// Unknown linebreak style name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown linebreak style: {0} (expected unix, lf, windows or crlf)")]
pub struct ParseLineBreakError(String);

impl FromStr for LineBreak {
    type Err = ParseLineBreakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unix" | "lf" => Ok(LineBreak::Unix),
            "windows" | "crlf" => Ok(LineBreak::Windows),
            _ => Err(ParseLineBreakError(s.to_string())),
        }
    }
}
