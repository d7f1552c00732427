//! Subscriber setup for hosts embedding the registry.
//!
//! Output goes to stdout and, optionally, to rolling files.  The filter
//! starts from [`LoggerConfig::default_level`], then `RUST_LOG`, then any
//! explicit directives.

mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use manager::{LoggingInitError, init, try_init};
pub use tracing_appender::rolling::Rotation;
pub use types::{FileLoggingConfig, LogFormat, LoggerConfig, StdoutConfig};

/// Appends an instance label to a service name, as `<base>%<label>`.
pub fn format_service_name(base: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}
