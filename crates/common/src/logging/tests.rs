//! Unit tests for the logging subsystem.

use std::{fs, path::PathBuf};

use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use super::{
    FileLoggingConfig, LogFormat, LoggerConfig, LoggingInitError, Rotation, format_service_name,
    manager::build_filter, try_init,
};

#[test]
fn test_logger_config_defaults() {
    let config = LoggerConfig::default();
    assert_eq!(config.service_name, "certreg");
    assert_eq!(config.default_level, Level::INFO);
    assert!(config.directives.is_empty());
    assert_eq!(config.stdout.format, LogFormat::Compact);
    assert_eq!(config.stdout.fmt_span, FmtSpan::NONE);
    assert!(config.file.is_none());
}

#[test]
fn test_logger_config_builder_pattern() {
    let config = LoggerConfig::new("registry-host")
        .with_default_level(Level::DEBUG)
        .with_directive("certreg_registry=trace")
        .with_stdout_format(LogFormat::Json)
        .with_fmt_span(FmtSpan::CLOSE);

    assert_eq!(config.service_name, "registry-host");
    assert_eq!(config.default_level, Level::DEBUG);
    assert_eq!(config.directives, ["certreg_registry=trace"]);
    assert_eq!(config.stdout.format, LogFormat::Json);
    assert_eq!(config.stdout.fmt_span, FmtSpan::CLOSE);
}

#[test]
fn test_file_logging_config() {
    let config = FileLoggingConfig::new("/tmp/logs", "certreg")
        .with_rotation(Rotation::HOURLY)
        .with_format(LogFormat::Json);

    assert_eq!(config.directory, PathBuf::from("/tmp/logs"));
    assert_eq!(config.file_name_prefix, "certreg");
    assert_eq!(config.rotation, Rotation::HOURLY);
    assert_eq!(config.format, LogFormat::Json);

    let logger = LoggerConfig::default().with_file_logging(config);
    assert!(logger.file.is_some());
}

#[test]
fn test_build_filter_accepts_directives() {
    let config = LoggerConfig::default()
        .with_directive("certreg_registry=debug")
        .with_directive("sled=warn");
    assert!(build_filter(&config).is_ok());
}

#[test]
fn test_build_filter_rejects_bad_directive() {
    let config = LoggerConfig::default().with_directive("certreg_registry=loudest");
    let err = build_filter(&config).unwrap_err();
    assert!(
        matches!(err, LoggingInitError::Directive { ref directive, .. } if directive == "certreg_registry=loudest")
    );
}

#[test]
fn test_second_init_fails() {
    // The first call may or may not win depending on test ordering, but
    // the second can never succeed.
    let _ = try_init(LoggerConfig::default());
    let res = try_init(LoggerConfig::default());
    assert!(matches!(res, Err(LoggingInitError::AlreadyInitialized(_))));
}

#[test]
fn test_log_format_from_json_flag() {
    assert_eq!(LogFormat::from_json_flag(true), LogFormat::Json);
    assert_eq!(LogFormat::from_json_flag(false), LogFormat::Compact);
    assert_eq!(LogFormat::default(), LogFormat::Compact);
}

#[test]
fn test_format_service_name() {
    assert_eq!(format_service_name("certreg", None), "certreg");
    assert_eq!(format_service_name("certreg", Some("dev")), "certreg%dev");
}

#[test]
fn test_unusable_log_dir_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, b"").unwrap();
    let log_dir = blocker.join("logs");

    let config =
        LoggerConfig::default().with_file_logging(FileLoggingConfig::new(&log_dir, "certreg"));
    let err = try_init(config).unwrap_err();
    assert!(matches!(
        err,
        LoggingInitError::FileAppender { ref directory, .. } if *directory == log_dir
    ));
}
