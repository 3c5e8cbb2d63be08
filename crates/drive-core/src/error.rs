//! Error types for the drive registry.
//!
//! Lookups that used to fall through silently (missing directory, stale
//! positional index, unknown entry) are reported here so callers decide
//! what to do. `DirectoryRegistry::find` is the one operation that keeps its
//! root fallback.

use crate::models::EntryKind;
use thiserror::Error;

/// Main error type for the drive registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriveError {
    // Lookup errors
    #[error("Directory not found: {directory_id}")]
    DirectoryNotFound { directory_id: String },

    #[error("Directory index {index} out of range (registry holds {len} directories)")]
    InvalidIndex { index: usize, len: usize },

    #[error("No directory contains a {kind} with id {entry_id}")]
    EntryNotFound { kind: EntryKind, entry_id: String },

    // Construction errors
    #[error("Registry must hold at least one directory")]
    EmptyRegistry,

    // Caller errors
    #[error("Invalid parameters: {message}")]
    InvalidParams { message: String },

    #[error("Method not found: {method}")]
    MethodNotFound { method: String },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    // Allocation errors
    #[error("Entry ids exhausted after {last_id}")]
    IdsExhausted { last_id: u64 },
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, DriveError>;

impl From<serde_json::Error> for DriveError {
    fn from(err: serde_json::Error) -> Self {
        DriveError::Json {
            message: err.to_string(),
        }
    }
}

impl DriveError {
    /// Convert to a JSON-RPC error code.
    ///
    /// Standard JSON-RPC error codes:
    /// - -32601: Method not found
    /// - -32602: Invalid params
    /// - -32603: Internal error
    ///
    /// Custom error codes (application-defined, -32000 to -32099):
    /// - -32002: Directory or entry not found
    pub fn to_rpc_error_code(&self) -> i32 {
        match self {
            DriveError::DirectoryNotFound { .. } | DriveError::EntryNotFound { .. } => -32002,

            DriveError::MethodNotFound { .. } => -32601,

            DriveError::InvalidIndex { .. } | DriveError::InvalidParams { .. } => -32602,

            DriveError::EmptyRegistry | DriveError::Json { .. } | DriveError::IdsExhausted { .. } => {
                -32603
            }
        }
    }

    /// Check if this error means the addressed item does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DriveError::DirectoryNotFound { .. } | DriveError::EntryNotFound { .. }
        )
    }
}
