//! # Store Error Types
//!
//! Error types for document store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Store failure (missing id, bad patch, payload round-trip)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds collection + id context               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OpsError (volt-ops) ← Combined with business errors for the caller    │
//! │                                                                         │
//! │  A StoreError means the failed call persisted nothing; the one         │
//! │  partial-write case (invoice created, status not flipped) is modeled   │
//! │  separately in volt-ops because data WAS written.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Document store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Document not found in the collection.
    ///
    /// ## When This Occurs
    /// - `update`/`remove` on an id that doesn't exist
    /// - A stale id held by the UI after another client deleted the record
    #[error("{collection}/{id} not found")]
    NotFound { collection: String, id: String },

    /// Create with an id that already exists in the collection.
    #[error("{collection}/{id} already exists")]
    Duplicate { collection: String, id: String },

    /// A partial update that cannot be applied.
    ///
    /// ## When This Occurs
    /// - Patch is not a JSON object
    /// - Patch tries to rewrite the immutable `id` field
    #[error("Invalid patch: {reason}")]
    InvalidPatch { reason: String },

    /// A document failed the JSON round-trip (serialize, merge, deserialize).
    ///
    /// ## When This Occurs
    /// - A patch sets a field to a value of the wrong shape
    #[error("Document serialization failed: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Creates a NotFound error for a given collection and id.
    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Creates an InvalidPatch error.
    pub fn invalid_patch(reason: impl Into<String>) -> Self {
        StoreError::InvalidPatch {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
