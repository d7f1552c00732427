use std::{path::PathBuf, str::FromStr};

use certreg_common::logging::{FileLoggingConfig, LogFormat, LoggerConfig, format_service_name};
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::ConfigError;

const DEFAULT_FILE_NAME_PREFIX: &str = "certreg";

const DEFAULT_LEVEL: &str = "info";

#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of the compact format.
    pub json_format: bool,

    /// Suffix appended to the service name, e.g. an instance or env label.
    pub service_label: Option<String>,

    /// Also write rolling log files here when set.
    pub log_dir: Option<PathBuf>,

    pub file_name_prefix: String,

    /// Default level when `RUST_LOG` is unset.
    pub level: String,
}

impl LoggingConfig {
    pub fn to_logger_config(&self, service: &str) -> Result<LoggerConfig, ConfigError> {
        let level = Level::from_str(&self.level)
            .map_err(|_| ConfigError::InvalidLevel(self.level.clone()))?;
        let service_name = format_service_name(service, self.service_label.as_deref());
        let format = LogFormat::from_json_flag(self.json_format);

        let mut config = LoggerConfig::new(service_name)
            .with_default_level(level)
            .with_stdout_format(format);

        if let Some(dir) = &self.log_dir {
            let file = FileLoggingConfig::new(dir.clone(), self.file_name_prefix.clone())
                .with_format(format);
            config = config.with_file_logging(file);
        }

        Ok(config)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json_format: false,
            service_label: None,
            log_dir: None,
            file_name_prefix: DEFAULT_FILE_NAME_PREFIX.to_owned(),
            level: DEFAULT_LEVEL.to_owned(),
        }
    }
}
