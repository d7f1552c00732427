//! Registry configuration, read from a TOML file.

mod config;
mod errors;
mod logging;
mod storage;

pub use config::{PolicyConfig, RegistryConfig};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use storage::StorageConfig;
