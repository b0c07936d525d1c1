//! Document payload model.
//!
//! # Responsibility
//! - Hold the text written by the emitter as an opaque blob.
//! - Expose the embedded AI Toolkit README as the default payload.
//!
//! # Invariants
//! - Content is written byte-for-byte; no newline normalization happens here.

use std::borrow::Cow;

const README_PAYLOAD: &str = include_str!("../../assets/README.md");

/// Returns the embedded AI Toolkit README text.
pub fn readme_payload() -> &'static str {
    README_PAYLOAD
}

/// Immutable text payload handed to the emitter.
///
/// Borrowed for compiled-in assets, owned for caller-built content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    content: Cow<'static, str>,
}

impl Document {
    /// Wraps caller-provided content.
    pub fn new(content: impl Into<Cow<'static, str>>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns the embedded README document.
    pub fn readme() -> Self {
        Self::new(README_PAYLOAD)
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::readme()
    }
}
