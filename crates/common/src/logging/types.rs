//! Logger settings.

use std::path::PathBuf;

use tracing::Level;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::fmt::format::FmtSpan;

/// How each log line is rendered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Compact }
    }
}

#[derive(Clone, Debug)]
pub struct StdoutConfig {
    pub format: LogFormat,

    /// Span lifecycle events to emit as their own lines.  Off by default;
    /// `FmtSpan::CLOSE` is handy for timing registry operations.
    pub fmt_span: FmtSpan,
}

impl Default for StdoutConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Compact,
            fmt_span: FmtSpan::NONE,
        }
    }
}

/// Rolling log files, written alongside stdout.
#[derive(Clone, Debug)]
pub struct FileLoggingConfig {
    pub directory: PathBuf,

    /// Files are named `<prefix>.<date>` under daily rotation.
    pub file_name_prefix: String,

    pub rotation: Rotation,
    pub format: LogFormat,
}

impl FileLoggingConfig {
    pub fn new(directory: impl Into<PathBuf>, file_name_prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name_prefix: file_name_prefix.into(),
            rotation: Rotation::DAILY,
            format: LogFormat::Compact,
        }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Everything [`try_init`](super::try_init) needs to install a subscriber.
#[derive(Clone, Debug)]
pub struct LoggerConfig {
    /// Name the host reports itself as in the startup line.
    pub service_name: String,

    /// Level used when `RUST_LOG` doesn't say otherwise.
    pub default_level: Level,

    /// Extra filter directives, e.g. `certreg_registry=debug`.  These win
    /// over `RUST_LOG`.
    pub directives: Vec<String>,

    pub stdout: StdoutConfig,
    pub file: Option<FileLoggingConfig>,
}

impl LoggerConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            default_level: Level::INFO,
            directives: Vec::new(),
            stdout: StdoutConfig::default(),
            file: None,
        }
    }

    pub fn with_default_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directives.push(directive.into());
        self
    }

    pub fn with_stdout_format(mut self, format: LogFormat) -> Self {
        self.stdout.format = format;
        self
    }

    pub fn with_fmt_span(mut self, fmt_span: FmtSpan) -> Self {
        self.stdout.fmt_span = fmt_span;
        self
    }

    pub fn with_file_logging(mut self, file: FileLoggingConfig) -> Self {
        self.file = Some(file);
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new("certreg")
    }
}
