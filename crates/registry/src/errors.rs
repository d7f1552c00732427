use certreg_cert_types::{CertificateId, OrgId, RecordCodecError};
use certreg_ledger_types::{IdentityError, LedgerError};
use thiserror::Error;

use crate::{DispatchError, Operation};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Why a registry operation was rejected.
///
/// All of these abort the transaction before anything is written.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The caller's organization couldn't be resolved.
    #[error("identity: {0}")]
    Identity(#[from] IdentityError),

    #[error("access denied: {op} requires {required}, caller is {caller}")]
    Unauthorized {
        op: Operation,
        caller: OrgId,
        required: OrgId,
    },

    /// A required input was empty.
    #[error("{0}")]
    Validation(&'static str),

    #[error("certificate {0} already exists")]
    AlreadyExists(CertificateId),

    /// Ledger read or write fault, passed through unchanged.
    #[error("storage: {0}")]
    Storage(#[from] LedgerError),

    /// A stored record didn't decode, or a record couldn't be encoded.
    #[error("codec: {0}")]
    Codec(#[from] RecordCodecError),

    #[error("dispatch: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Coarse error classification seen by the invoking framework.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    Identity,
    Authorization,
    Validation,
    Conflict,
    Storage,
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::Identity(_) => ErrorKind::Identity,
            RegistryError::Unauthorized { .. } => ErrorKind::Authorization,
            RegistryError::Validation(_) | RegistryError::Dispatch(_) => ErrorKind::Validation,
            RegistryError::AlreadyExists(_) => ErrorKind::Conflict,
            // a record we can't decode is as broken as a failed read
            RegistryError::Storage(_) | RegistryError::Codec(_) => ErrorKind::Storage,
        }
    }

    /// Whether the failure came from a collaborator rather than from the
    /// request itself.
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind(), ErrorKind::Identity | ErrorKind::Storage)
    }
}
