//! Logging bootstrap.
//!
//! Logs go to stderr by default, or to size-rotated files when the
//! configuration names a directory. `RUST_LOG` overrides the configured level.

use crate::config::LoggingConfig;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{info, warn};

const LOG_FILE_BASENAME: &str = "notecanvas";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts the global logger. Keep the returned handle alive for the lifetime
/// of the process; dropping it flushes and stops file output.
///
/// An unknown configured level falls back to [`default_log_level`] and is
/// reported once the logger is running.
///
/// # Errors
/// - the log directory cannot be created
/// - the logger backend fails to start (e.g. a logger is already installed)
pub fn init_logging(config: &LoggingConfig) -> Result<LoggerHandle, String> {
    let (level, rejected) = resolve_level(&config.level);

    let logger = Logger::try_with_env_or_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .format(flexi_logger::detailed_format);

    let logger = match config.directory.as_deref() {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|err| {
                format!("failed to create log directory `{}`: {err}", dir.display())
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir)
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
        }
        None => logger,
    };

    let handle = logger
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    info!(
        "notecanvas {} started (level={}, platform={})",
        env!("CARGO_PKG_VERSION"),
        level,
        std::env::consts::OS
    );
    if let Some(err) = rejected {
        warn!("{err}; using `{level}`");
    }
    Ok(handle)
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// The level to start with, plus the parse error when the configured one
/// had to be replaced by the default.
fn resolve_level(configured: &str) -> (&'static str, Option<String>) {
    match normalize_level(configured) {
        Ok(level) => (level, None),
        Err(err) => (default_log_level(), Some(err)),
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO"), Ok("info"));
        assert_eq!(normalize_level(" warning "), Ok("warn"));
        assert_eq!(normalize_level("trace"), Ok("trace"));
    }

    #[test]
    fn normalize_level_rejects_unknown_values() {
        let err = normalize_level("verbose").unwrap_err();
        assert!(err.contains("unsupported log level"));
    }

    #[test]
    fn resolve_level_falls_back_to_default() {
        assert_eq!(resolve_level("error"), ("error", None));

        let (level, rejected) = resolve_level("loud");
        assert_eq!(level, default_log_level());
        assert!(rejected.is_some_and(|err| err.contains("`loud`")));
    }

    // The only test in this crate that installs the global logger.
    #[test]
    fn unknown_level_still_starts_logger_at_default() {
        let config: LoggingConfig = toml::from_str(r#"level = "verbose""#).unwrap();
        assert_eq!(config.level, "verbose");

        let handle = init_logging(&config);
        assert!(handle.is_ok(), "logger failed to start: {:?}", handle.err());

        if std::env::var_os("RUST_LOG").is_none() {
            let expected: log::LevelFilter = default_log_level().parse().unwrap();
            assert_eq!(log::max_level(), expected);
        }
    }
}
