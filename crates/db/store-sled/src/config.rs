/// Default tree holding certificate records.
pub(crate) const DEFAULT_TREE_NAME: &str = "certificates";

/// Sled ledger configuration.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SledLedgerConfig {
    /// Tree the records live in.
    pub tree_name: String,

    /// Flush to disk after every write instead of leaving it to sled's
    /// background flusher.
    pub flush_every_write: bool,
}

impl SledLedgerConfig {
    pub fn new(tree_name: impl Into<String>, flush_every_write: bool) -> Self {
        Self {
            tree_name: tree_name.into(),
            flush_every_write,
        }
    }

    /// Create production configuration with default values
    pub fn production() -> Self {
        Self::new(DEFAULT_TREE_NAME, true)
    }

    /// Create test configuration, skipping the per-write flush
    pub fn test() -> Self {
        Self::new(DEFAULT_TREE_NAME, false)
    }
}

impl Default for SledLedgerConfig {
    fn default() -> Self {
        Self::production()
    }
}
