//! Filesystem write paths for the emitter.
//!
//! # Invariants
//! - File handles are scoped to the write helpers and closed on every path.
//! - Atomic mode never leaves its temp file behind after a failed write.

use super::{EmitError, EmitOptions, EmitResult, IoOp, WriteMode};
use crate::model::document::Document;
use crate::model::target::TargetPath;
use log::{debug, error, info, warn};
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use uuid::Uuid;

/// Outcome of a successful emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmitReport {
    pub target: PathBuf,
    pub bytes_written: usize,
    pub write_mode: WriteMode,
    /// Whether a file existed at the destination before this emit.
    pub replaced_existing: bool,
}

/// Writes one document to one destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Emitter {
    document: Document,
    target: TargetPath,
    options: EmitOptions,
}

impl Emitter {
    pub fn new(document: Document, target: TargetPath, options: EmitOptions) -> Self {
        Self {
            document,
            target,
            options,
        }
    }

    /// Builds an emitter for an unvalidated destination.
    ///
    /// # Errors
    /// - `InvalidTarget` when `path` is empty, relative, or names no file.
    pub fn at_path(
        document: Document,
        path: impl AsRef<Path>,
        options: EmitOptions,
    ) -> EmitResult<Self> {
        let target = TargetPath::new(path)?;
        Ok(Self::new(document, target, options))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn target(&self) -> &TargetPath {
        &self.target
    }

    pub fn options(&self) -> EmitOptions {
        self.options
    }

    /// Writes the document to the destination, replacing any prior content.
    ///
    /// # Side effects
    /// - Destructively overwrites the destination; no backup is kept.
    /// - Creates parent directories when `create_parents` is set.
    /// - Emits `emit` logging events with duration and status.
    ///
    /// # Errors
    /// - `ParentMissing` when the parent directory is absent and
    ///   `create_parents` is off. Nothing is created in that case.
    /// - `Io` for any failed filesystem step.
    pub fn emit(&self) -> EmitResult<EmitReport> {
        let started_at = Instant::now();
        info!(
            "event=emit module=emitter status=start mode={} target={}",
            self.options.write_mode,
            self.target
        );

        match self.write() {
            Ok(report) => {
                info!(
                    "event=emit module=emitter status=ok mode={} duration_ms={} bytes={} replaced_existing={}",
                    report.write_mode,
                    started_at.elapsed().as_millis(),
                    report.bytes_written,
                    report.replaced_existing
                );
                Ok(report)
            }
            Err(err) => {
                error!(
                    "event=emit module=emitter status=error mode={} duration_ms={} error_code={} error={}",
                    self.options.write_mode,
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    fn write(&self) -> EmitResult<EmitReport> {
        let parent = self.target.parent();
        // A parent that exists but is not a directory fails later as `Io`.
        if !parent.exists() {
            if !self.options.create_parents {
                return Err(EmitError::ParentMissing {
                    parent: parent.to_path_buf(),
                });
            }
            fs::create_dir_all(parent)
                .map_err(|err| EmitError::io(IoOp::CreateDir, parent, err))?;
            debug!(
                "event=create_parents module=emitter status=ok dir={}",
                parent.display()
            );
        }

        let path = self.target.as_path();
        let replaced_existing = path.exists();
        let bytes = self.document.as_bytes();

        match self.options.write_mode {
            WriteMode::Truncate => write_in_place(path, bytes)?,
            WriteMode::Atomic => write_atomic(path, parent, &self.target.file_name(), bytes)?,
        }

        Ok(EmitReport {
            target: path.to_path_buf(),
            bytes_written: bytes.len(),
            write_mode: self.options.write_mode,
            replaced_existing,
        })
    }
}

fn write_in_place(path: &Path, bytes: &[u8]) -> EmitResult<()> {
    let mut file = File::create(path).map_err(|err| EmitError::io(IoOp::Open, path, err))?;
    file.write_all(bytes)
        .map_err(|err| EmitError::io(IoOp::Write, path, err))
}

fn write_atomic(path: &Path, parent: &Path, file_name: &str, bytes: &[u8]) -> EmitResult<()> {
    let tmp = parent.join(format!(".{file_name}.tmp.{}", Uuid::new_v4().simple()));

    if let Err(err) = write_temp_then_rename(&tmp, path, bytes) {
        if let Err(cleanup_err) = fs::remove_file(&tmp) {
            if cleanup_err.kind() != std::io::ErrorKind::NotFound {
                warn!(
                    "event=emit_cleanup module=emitter status=error tmp={} error={}",
                    tmp.display(),
                    cleanup_err
                );
            }
        }
        return Err(err);
    }

    // Directory fsync is unsupported on some platforms.
    if let Ok(dir) = File::open(parent) {
        let _ = dir.sync_all();
    }
    Ok(())
}

fn write_temp_then_rename(tmp: &Path, path: &Path, bytes: &[u8]) -> EmitResult<()> {
    {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(tmp)
            .map_err(|err| EmitError::io(IoOp::Open, tmp, err))?;
        file.write_all(bytes)
            .map_err(|err| EmitError::io(IoOp::Write, tmp, err))?;
        // Rename replaces the inode, so carry the destination's mode over.
        if let Ok(existing) = fs::metadata(path) {
            file.set_permissions(existing.permissions())
                .map_err(|err| EmitError::io(IoOp::SetPermissions, tmp, err))?;
        }
        file.sync_all()
            .map_err(|err| EmitError::io(IoOp::Sync, tmp, err))?;
    }
    fs::rename(tmp, path).map_err(|err| EmitError::io(IoOp::Rename, path, err))
}
