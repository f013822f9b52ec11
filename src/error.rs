//! Crate-level error types.

use std::fmt;

/// Errors produced by the resicolor crate.
#[derive(Debug)]
pub enum ResicolorError {
    /// Reading the structure file or writing host output failed.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The visualization host rejected a color operation.
    Host(String),
}

impl fmt::Display for ResicolorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(_) => write!(f, "I/O error"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Host(msg) => write!(f, "host error: {msg}"),
        }
    }
}

impl std::error::Error for ResicolorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ResicolorError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
