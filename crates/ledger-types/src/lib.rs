//! Collaborator interfaces of the certificate registry.
//!
//! The registry never owns storage or identity.  It reaches the ledger
//! through [`LedgerStore`] (and [`LedgerScan`] for whole-ledger queries),
//! scoped to the transaction being executed, and learns who is calling
//! through [`CallerIdentity`].  Whatever hosts the registry provides the
//! impls; [`MemLedger`] and [`FixedIdentity`] are the trivial ones.

mod errors;
mod identity;
mod mem;
mod store;

pub use errors::{IdentityError, LedgerError, LedgerResult};
#[cfg(feature = "test-utils")]
pub use identity::MockCallerIdentity;
pub use identity::{CallerIdentity, FixedIdentity};
pub use mem::MemLedger;
pub use store::{LedgerScan, LedgerStore};
