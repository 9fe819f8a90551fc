//! Error types for access-ticket
//!
//! Every fallible operation in the crate returns [`Result`], whose error side is
//! [`AccessTicketError`]. Errors are local to the operation that raised them: the
//! ticket store is never left half-modified when one of these is returned.

use thiserror::Error;

/// Result type alias for access-ticket operations
pub type Result<T> = std::result::Result<T, AccessTicketError>;

/// Main error type for access-ticket
#[derive(Error, Debug)]
pub enum AccessTicketError {
    /// A required field of the access request is missing or blank
    #[error("Missing required field: {field}")]
    Validation { field: String },

    /// An edit was attempted on a locked ticket
    #[error("Ticket {reference} is locked and cannot be edited")]
    TicketLocked { reference: String },

    /// The referenced ticket does not exist
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: String },

    /// A ticket reference matched more than one ticket
    #[error("Ambiguous ticket reference '{reference}' matches {matches} tickets")]
    AmbiguousReference { reference: String, matches: usize },

    /// The persisted snapshot could not be decoded
    #[error("Snapshot '{key}' is corrupt: {reason}")]
    PersistenceCorrupt { key: String, reason: String },

    /// The persisted snapshot was written by a newer release
    #[error("Snapshot '{key}' uses schema version {found}, newest supported is {supported}")]
    UnsupportedSnapshotVersion {
        key: String,
        found: u64,
        supported: u64,
    },

    /// Could not find a free identifier after several attempts
    #[error("Could not generate a unique {kind} after {attempts} attempts")]
    IdExhausted { kind: &'static str, attempts: usize },

    /// A string did not have the shape of a reference code
    #[error("Invalid reference code: {0}")]
    InvalidReference(String),

    /// A storage key contained characters that cannot be used on disk
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Prompt failed: {0}")]
    Dialog(#[from] dialoguer::Error),

    #[error("{0}")]
    Custom(String),
}

impl AccessTicketError {
    /// Shorthand for a validation failure on `field`
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }

    /// Whether the caller can act on this error and try again
    ///
    /// Validation and lock errors ask the caller to fix its input or block the edit.
    /// A missing ticket means the caller holds a stale reference.
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::TicketLocked { .. }
                | Self::AmbiguousReference { .. }
                | Self::InvalidReference(_)
                | Self::PersistenceCorrupt { .. }
        )
    }

    /// A hint shown under the error message by the CLI, if there is one
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Validation { .. } => Some("Fill in the missing field and submit again."),
            Self::TicketLocked { .. } => {
                Some("Unlock the ticket with 'access-ticket toggle-lock <ticket>' first.")
            },
            Self::TicketNotFound { .. } => Some("Run 'access-ticket list' to see current tickets."),
            Self::AmbiguousReference { .. } => Some("Use the full ticket id or reference code."),
            Self::UnsupportedSnapshotVersion { .. } => {
                Some("Upgrade access-ticket to read this data directory.")
            },
            _ => None,
        }
    }
}
