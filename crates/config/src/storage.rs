use std::path::PathBuf;

use certreg_db_store_sled::{SLED_NAME, SledLedger, SledLedgerConfig, open_sled_ledger};
use serde::{Deserialize, Serialize};

const DEFAULT_DATADIR: &str = "certreg-data";

/// Where the local ledger lives.
#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// The data directory where database contents reside.
    pub datadir: PathBuf,

    /// Database name under `<datadir>/sled`.
    pub dbname: String,

    /// Flush after every write.
    pub flush_every_write: bool,
}

impl StorageConfig {
    pub fn to_sled_config(&self) -> SledLedgerConfig {
        SledLedgerConfig {
            flush_every_write: self.flush_every_write,
            ..SledLedgerConfig::default()
        }
    }

    /// Opens (or creates) the ledger this config points at.
    pub fn open_ledger(&self) -> anyhow::Result<SledLedger> {
        open_sled_ledger(&self.datadir, &self.dbname, self.to_sled_config())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            datadir: DEFAULT_DATADIR.into(),
            dbname: SLED_NAME.to_owned(),
            flush_every_write: false,
        }
    }
}
