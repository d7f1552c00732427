//! Logging initialization.

use std::{io, path::PathBuf};

use thiserror::Error;
use tracing::*;
use tracing_appender::rolling::{InitError, RollingFileAppender};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::{Directive, ParseError},
    fmt::{MakeWriter, format::FmtSpan, layer},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::{SubscriberInitExt, TryInitError},
};

use super::types::{LogFormat, LoggerConfig};

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

#[derive(Debug, Error)]
pub enum LoggingInitError {
    #[error("invalid filter directive {directive:?}: {source}")]
    Directive {
        directive: String,
        #[source]
        source: ParseError,
    },

    #[error("cannot open log directory {directory:?}: {source}")]
    FileAppender {
        directory: PathBuf,
        #[source]
        source: InitError,
    },

    #[error("global subscriber already set: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Builds the filter from the configured default level, `RUST_LOG`, and the
/// configured directives, in increasing precedence.
pub(crate) fn build_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggingInitError> {
    let mut filt = EnvFilter::builder()
        .with_default_directive(config.default_level.into())
        .from_env_lossy();

    for directive in &config.directives {
        let parsed: Directive =
            directive
                .parse()
                .map_err(|source| LoggingInitError::Directive {
                    directive: directive.clone(),
                    source,
                })?;
        filt = filt.add_directive(parsed);
    }

    Ok(filt)
}

fn fmt_layer<S, W>(
    format: LogFormat,
    fmt_span: FmtSpan,
    writer: W,
    ansi: bool,
    filt: EnvFilter,
) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_span_events(fmt_span);

    match format {
        LogFormat::Compact => base.compact().with_filter(filt).boxed(),
        LogFormat::Json => base.json().with_filter(filt).boxed(),
    }
}

/// Installs the global subscriber described by `config`.
pub fn try_init(config: LoggerConfig) -> Result<(), LoggingInitError> {
    let stdout_layer = fmt_layer(
        config.stdout.format,
        config.stdout.fmt_span.clone(),
        io::stdout,
        true,
        build_filter(&config)?,
    );

    let file_layer = match &config.file {
        Some(file) => {
            let appender = RollingFileAppender::builder()
                .rotation(file.rotation.clone())
                .filename_prefix(file.file_name_prefix.as_str())
                .build(&file.directory)
                .map_err(|source| LoggingInitError::FileAppender {
                    directory: file.directory.clone(),
                    source,
                })?;

            // each layer needs its own filter instance
            Some(fmt_layer(
                file.format,
                FmtSpan::NONE,
                appender,
                false,
                build_filter(&config)?,
            ))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    info!(service_name = %config.service_name, "logging initialized");
    Ok(())
}

/// Like [`try_init`], but a failure only gets reported through whatever
/// subscriber is already installed.
pub fn init(config: LoggerConfig) {
    if let Err(e) = try_init(config) {
        warn!(err = %e, "could not initialize logging");
    }
}
