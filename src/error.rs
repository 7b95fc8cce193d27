//! Errors raised while building or executing attestation sources.

use thiserror::Error;

/// Failure kinds shared by every attestation source and the registry.
///
/// The data-processor and membership sources never produce one; the variants
/// exist so other sources can report structured failures through the same
/// `execute` signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttestationError {
    /// The attestation context does not satisfy the hosting contract
    #[error("Invalid attestation context: {0}")]
    InvalidContext(String),

    /// A source option is missing or has the wrong shape
    #[error("Invalid configuration for '{key}': {reason}")]
    Configuration { key: String, reason: String },

    #[error("Unknown attestation source type: {0}")]
    UnknownSourceType(String),

    #[error("Attestation source type already registered: {0}")]
    DuplicateSourceType(String),

    /// A required presented credential was not found in the context
    #[error("No presented credential of type {0}")]
    MissingCredential(String),

    #[error("Malformed JSON input: {0}")]
    Json(String),
}

impl AttestationError {
    pub fn configuration(key: &str, reason: impl Into<String>) -> Self {
        AttestationError::Configuration {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
