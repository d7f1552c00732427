use std::{collections::BTreeMap, ops::Bound};

use crate::{LedgerResult, LedgerScan, LedgerStore};

/// In-memory ledger.  Every write is immediately visible.
#[derive(Clone, Debug, Default)]
pub struct MemLedger {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LedgerStore for MemLedger {
    fn get_state(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> LedgerResult<()> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }
}

impl LedgerScan for MemLedger {
    fn scan_range(&self, start: &str, end: &str) -> LedgerResult<Vec<(String, Vec<u8>)>> {
        let lower = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start)
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end)
        };

        // an inverted range would make BTreeMap panic
        if let (Bound::Included(s), Bound::Excluded(e)) = (lower, upper)
            && s >= e
        {
            return Ok(Vec::new());
        }

        Ok(self
            .entries
            .range::<str, _>((lower, upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
