use std::{fs, path::Path};

use anyhow::Context;
use tracing::*;

use crate::{SledLedger, SledLedgerConfig};

/// Opens the sled database at `<datadir>/sled/<dbname>`, creating the
/// directory if needed.
pub fn open_sled_database(datadir: &Path, dbname: &str) -> anyhow::Result<sled::Db> {
    let mut database_dir = datadir.to_path_buf();
    database_dir.push("sled");
    database_dir.push(dbname);

    if !database_dir.exists() {
        fs::create_dir_all(&database_dir)
            .with_context(|| format!("creating {}", database_dir.display()))?;
    }

    debug!(path = %database_dir.display(), "opening sled database");
    let db = sled::open(&database_dir).context("opening sled database")?;
    Ok(db)
}

/// Opens the certificate ledger stored under `datadir`.
pub fn open_sled_ledger(
    datadir: &Path,
    dbname: &str,
    config: SledLedgerConfig,
) -> anyhow::Result<SledLedger> {
    let db = open_sled_database(datadir, dbname)?;
    SledLedger::new(&db, config).context("opening certificate tree")
}
