//! Document emitter and its error contract.
//!
//! # Responsibility
//! - Persist a `Document` at a `TargetPath`, replacing prior content.
//! - Surface every filesystem failure as a typed `EmitError`.
//!
//! # Invariants
//! - A successful emit leaves the destination equal to the payload bytes.
//! - A missing parent is reported before any file is opened unless
//!   `create_parents` is enabled.

use crate::model::target::TargetPathError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod options;
mod write;

pub use options::{EmitOptions, WriteMode};
pub use write::{EmitReport, Emitter};

pub type EmitResult<T> = Result<T, EmitError>;

/// Filesystem step that failed during an emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    CreateDir,
    Open,
    Write,
    Sync,
    SetPermissions,
    Rename,
}

impl IoOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateDir => "create_dir",
            Self::Open => "open",
            Self::Write => "write",
            Self::Sync => "sync",
            Self::SetPermissions => "set_permissions",
            Self::Rename => "rename",
        }
    }
}

impl Display for IoOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub enum EmitError {
    InvalidTarget(TargetPathError),
    ParentMissing {
        parent: PathBuf,
    },
    Io {
        op: IoOp,
        path: PathBuf,
        source: std::io::Error,
    },
}

impl EmitError {
    /// Stable machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidTarget(_) => "invalid_target",
            Self::ParentMissing { .. } => "parent_missing",
            Self::Io { op, .. } => match op {
                IoOp::CreateDir => "create_dir_failed",
                IoOp::Open => "open_failed",
                IoOp::Write => "write_failed",
                IoOp::Sync => "sync_failed",
                IoOp::SetPermissions => "set_permissions_failed",
                IoOp::Rename => "rename_failed",
            },
        }
    }

    pub(crate) fn io(op: IoOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

impl Display for EmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTarget(err) => write!(f, "{err}"),
            Self::ParentMissing { parent } => write!(
                f,
                "parent directory `{}` does not exist",
                parent.display()
            ),
            Self::Io { op, path, source } => {
                write!(f, "failed to {op} `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for EmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTarget(err) => Some(err),
            Self::ParentMissing { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<TargetPathError> for EmitError {
    fn from(value: TargetPathError) -> Self {
        Self::InvalidTarget(value)
    }
}
