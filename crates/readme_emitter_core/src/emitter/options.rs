//! Emit behavior switches.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// How the destination is replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Truncate-or-create the destination and write in place.
    ///
    /// An interrupted write can leave a truncated file.
    #[default]
    Truncate,
    /// Write a sibling temp file, fsync it, then rename over the destination.
    Atomic,
}

impl WriteMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Truncate => "truncate",
            Self::Atomic => "atomic",
        }
    }
}

impl Display for WriteMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWriteModeError(String);

impl Display for ParseWriteModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported write mode `{}`; expected truncate|atomic",
            self.0
        )
    }
}

impl Error for ParseWriteModeError {}

impl FromStr for WriteMode {
    type Err = ParseWriteModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "truncate" => Ok(Self::Truncate),
            "atomic" => Ok(Self::Atomic),
            other => Err(ParseWriteModeError(other.to_string())),
        }
    }
}

/// Options controlling a single emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    pub write_mode: WriteMode,
    /// Create missing parent directories instead of failing.
    pub create_parents: bool,
}
