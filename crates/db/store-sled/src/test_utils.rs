use crate::{SledLedger, SledLedgerConfig};

pub fn get_test_sled_db() -> sled::Db {
    sled::Config::new().temporary(true).open().unwrap()
}

pub fn get_test_sled_config() -> SledLedgerConfig {
    SledLedgerConfig::test()
}

pub fn get_test_sled_ledger() -> SledLedger {
    SledLedger::new(&get_test_sled_db(), get_test_sled_config()).unwrap()
}
