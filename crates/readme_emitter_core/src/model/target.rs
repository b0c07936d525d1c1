//! Destination path model.
//!
//! # Responsibility
//! - Validate the location the payload is written to.
//!
//! # Invariants
//! - Paths are absolute and end in a file-name component.
//! - Validation never touches the filesystem.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Destination used by the default emitter.
pub const DEFAULT_TARGET_PATH: &str = "/vercel/share/v0-project/README.md";

/// Validation errors for destination paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetPathError {
    Empty,
    NotAbsolute(PathBuf),
    MissingFileName(PathBuf),
}

impl Display for TargetPathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "target path cannot be empty"),
            Self::NotAbsolute(path) => {
                write!(f, "target path must be absolute, got `{}`", path.display())
            }
            Self::MissingFileName(path) => {
                write!(f, "target path `{}` does not name a file", path.display())
            }
        }
    }
}

impl Error for TargetPathError {}

/// Absolute file location the payload is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPath {
    path: PathBuf,
}

impl TargetPath {
    /// Validates and wraps a destination path.
    ///
    /// # Errors
    /// - `Empty` when the path is empty or whitespace.
    /// - `NotAbsolute` for relative paths.
    /// - `MissingFileName` when the path ends in `..` or is a root.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, TargetPathError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
            return Err(TargetPathError::Empty);
        }
        if !path.is_absolute() {
            return Err(TargetPathError::NotAbsolute(path.to_path_buf()));
        }
        if path.file_name().is_none() {
            return Err(TargetPathError::MissingFileName(path.to_path_buf()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Directory that must exist (or be created) before writing.
    pub fn parent(&self) -> &Path {
        // Absolute paths with a file name always have a parent.
        self.path.parent().unwrap_or_else(|| Path::new("/"))
    }

    /// Final path component, lossily decoded for display.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl Default for TargetPath {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_TARGET_PATH),
        }
    }
}

impl Display for TargetPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for TargetPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
