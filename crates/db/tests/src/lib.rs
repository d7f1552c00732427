//! Backend-generic ledger tests.
//!
//! Every [`LedgerScan`](certreg_ledger_types::LedgerScan) backend is expected
//! to pass these.  Backends instantiate them with [`ledger_store_tests!`],
//! passing an expression that builds a fresh, empty ledger.

pub mod ledger_tests;

#[cfg(test)]
mod tests {
    use certreg_ledger_types::MemLedger;

    crate::ledger_store_tests!(MemLedger::new());
}
