//! Typed error handling for invoice-desk
//!
//! Only two things can go wrong in the library, and neither is allowed to
//! crash the editor:
//!
//! - [`StorageError`]: the key-value backend could not be read or written,
//!   or the invoice list could not be encoded
//! - [`FieldError`]: a form field name does not name an editable field
//!
//! Malformed numbers are not errors; see
//! [`crate::core::field::parse_float_lenient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use invoice_desk::prelude::*;
//!
//! match editor.save() {
//!     Ok(id) => println!("saved {}", id),
//!     Err(StorageError::Io { key, source }) => {
//!         eprintln!("could not write slot '{}': {}", key, source);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use thiserror::Error;

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by a [`KeyValueStore`](crate::core::store::KeyValueStore)
/// backend or while encoding the slot contents
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure while touching a slot
    #[error("I/O error on slot '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Failure reported by an embedded database backend
    #[error("{backend} backend error: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },

    /// The invoice list could not be serialized or deserialized
    #[error("Failed to serialize/deserialize slot '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A lock guarding an in-memory backend was poisoned
    #[error("Failed to acquire {0} lock")]
    Lock(&'static str),
}

impl StorageError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Io { .. } => "STORAGE_IO_ERROR",
            StorageError::Backend { .. } => "STORAGE_BACKEND_ERROR",
            StorageError::Serialization { .. } => "STORAGE_SERIALIZATION_ERROR",
            StorageError::Lock(_) => "STORAGE_LOCK_ERROR",
        }
    }

    pub fn backend(backend: &'static str, err: impl std::fmt::Display) -> Self {
        StorageError::Backend {
            backend,
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Field Errors
// =============================================================================

/// Errors related to form field binding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The name does not match any editable field of the given scope
    #[error("Unknown {scope} field: '{name}'")]
    UnknownField { scope: &'static str, name: String },
}

impl FieldError {
    pub fn error_code(&self) -> &'static str {
        match self {
            FieldError::UnknownField { .. } => "UNKNOWN_FIELD",
        }
    }
}
