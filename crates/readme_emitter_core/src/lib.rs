//! Core of the AI Toolkit README emitter.
//! Owns the embedded payload, the destination rules, and the write itself.

pub mod emitter;
pub mod logging;
pub mod model;

pub use emitter::{EmitError, EmitOptions, EmitReport, EmitResult, Emitter, IoOp, WriteMode};
pub use logging::{
    default_log_level, flush_logging, init_logging, logging_status, normalize_level,
    normalize_log_dir, LogSink,
};
pub use model::document::{readme_payload, Document};
pub use model::target::{TargetPath, TargetPathError, DEFAULT_TARGET_PATH};

/// Writes the embedded README to `DEFAULT_TARGET_PATH` with default options.
pub fn emit() -> EmitResult<EmitReport> {
    Emitter::default().emit()
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
