use crate::LedgerResult;

/// Transaction-scoped key-value view of the ledger.
///
/// Keys are certificate IDs.  Values are opaque record bytes.  Conflicting
/// concurrent writes are the ledger's problem, not the caller's.
pub trait LedgerStore {
    /// Reads the value under `key`, or `None` if nothing was ever written.
    fn get_state(&self, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Writes `value` under `key`, replacing whatever was there.
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> LedgerResult<()>;
}

/// Range reads over the ledger's key space.
pub trait LedgerScan: LedgerStore {
    /// Returns all entries with `start <= key < end`, in key order.
    ///
    /// An empty `start` or `end` leaves that side of the range open, so
    /// `scan_range("", "")` returns every entry.
    fn scan_range(&self, start: &str, end: &str) -> LedgerResult<Vec<(String, Vec<u8>)>>;
}
