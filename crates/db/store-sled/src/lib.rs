//! Sled store for the certificate ledger.
//!
//! Keeps certificate records in a single sled tree keyed by certificate ID.
//! This gives hosts and tests a persistent [`LedgerStore`] without a real
//! replicated ledger behind it; it does no ordering or conflict detection of
//! its own.
//!
//! [`LedgerStore`]: certreg_ledger_types::LedgerStore

mod config;
mod init;
mod ledger;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use config::SledLedgerConfig;
pub use init::{open_sled_database, open_sled_ledger};
pub use ledger::SledLedger;

/// Default database name under `<datadir>/sled`.
pub const SLED_NAME: &str = "certreg";
