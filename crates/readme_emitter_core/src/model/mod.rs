//! Payload and destination model for the README emitter.
//!
//! # Responsibility
//! - Define the immutable document that gets written.
//! - Define the validated destination it gets written to.
//!
//! # Invariants
//! - A `Document` is never mutated after construction.
//! - A `TargetPath` is always absolute and names a file.

pub mod document;
pub mod target;
