use std::io;

use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Faults raised by the ledger collaborator.
///
/// The registry treats every one of these as fatal for the transaction and
/// passes it through untouched.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The storage backend rejected or failed the operation.
    #[error("ledger backend: {0}")]
    Backend(String),

    #[error("ledger io: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

/// Failure to resolve the calling organization.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("failed to read client MSP: {0}")]
    Unreadable(String),

    #[error("caller identity carries no MSP ID")]
    MissingMspId,
}
