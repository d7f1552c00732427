use certreg_ledger_types::{LedgerError, LedgerResult, LedgerScan, LedgerStore};
use tracing::*;

use crate::SledLedgerConfig;

fn to_ledger_error(err: sled::Error) -> LedgerError {
    match err {
        sled::Error::Io(e) => LedgerError::Io(e),
        other => LedgerError::Backend(format!("sled error: {other:?}")),
    }
}

/// Certificate ledger backed by one sled tree.
#[derive(Debug, Clone)]
pub struct SledLedger {
    tree: sled::Tree,
    config: SledLedgerConfig,
}

impl SledLedger {
    pub fn new(db: &sled::Db, config: SledLedgerConfig) -> LedgerResult<Self> {
        let tree = db
            .open_tree(config.tree_name.as_bytes())
            .map_err(to_ledger_error)?;
        Ok(Self { tree, config })
    }

    pub fn config(&self) -> &SledLedgerConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

impl LedgerStore for SledLedger {
    fn get_state(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        let val = self.tree.get(key.as_bytes()).map_err(to_ledger_error)?;
        Ok(val.map(|v| v.to_vec()))
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> LedgerResult<()> {
        self.tree
            .insert(key.as_bytes(), value)
            .map_err(to_ledger_error)?;

        if self.config.flush_every_write {
            let flushed = self.tree.flush().map_err(to_ledger_error)?;
            trace!(%key, flushed, "flushed sled tree");
        }

        Ok(())
    }
}

impl LedgerScan for SledLedger {
    fn scan_range(&self, start: &str, end: &str) -> LedgerResult<Vec<(String, Vec<u8>)>> {
        // sled panics on an inverted range
        if !start.is_empty() && !end.is_empty() && start >= end {
            return Ok(Vec::new());
        }

        let iter = match (start.is_empty(), end.is_empty()) {
            (true, true) => self.tree.iter(),
            (false, true) => self.tree.range(start.as_bytes()..),
            (true, false) => self.tree.range(..end.as_bytes()),
            (false, false) => self.tree.range(start.as_bytes()..end.as_bytes()),
        };

        iter.map(|entry| {
            let (k, v) = entry.map_err(to_ledger_error)?;
            let key = String::from_utf8(k.to_vec())
                .map_err(|e| LedgerError::Other(format!("non-utf8 key in ledger: {e}")))?;
            Ok((key, v.to_vec()))
        })
        .collect()
    }
}
