//! Certificate registry.
//!
//! The registry is the state machine governing a certificate's life on the
//! ledger:
//!
//! ```text
//! (absent) --issue--> active --revoke--> revoked --revoke--> revoked
//! ```
//!
//! Every operation runs inside one ledger transaction.  The caller's
//! organization is checked against the [`AccessPolicy`] before anything is
//! read, inputs are validated, and at most one record is read and written.
//! Nothing is cached between calls; the registry itself only holds its
//! policy.
//!
//! - `policy`: the operation → required organization table
//! - `registry`: the operations themselves
//! - `dispatch`: invocation by contract function name with string arguments
//! - `outcome`: the non-error results of revocation and verification

mod dispatch;
mod errors;
mod outcome;
mod policy;
mod registry;


pub use dispatch::{ContractCall, DispatchError, Response};
pub use errors::{ErrorKind, RegistryError, RegistryResult};
pub use outcome::{RevokeOutcome, VerifyOutcome};
pub use policy::{
    Access, AccessPolicy, DEFAULT_ISSUER_ORG, DEFAULT_REVOKER_ORG, Operation, PolicyError,
};
pub use registry::CertificateRegistry;
