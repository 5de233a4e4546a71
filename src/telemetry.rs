//! Diagnostic logging setup.
//!
//! Progress lines go to stderr through `tracing`; stdout carries only the report.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Pick the log filter: a valid `RUST_LOG` value wins over `log_level`.
pub fn resolve_filter(log_level: &str, rust_log: Option<&str>) -> Result<EnvFilter, AppError> {
    if let Some(filter) = rust_log.and_then(|raw| EnvFilter::try_new(raw).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(log_level)
        .map_err(|e| AppError::config(format!("Invalid log level/filter '{log_level}': {e}")))
}

/// Install the global subscriber.
///
/// Reads `RUST_LOG` from the process environment, so `.env` must already be
/// loaded.
pub fn init(log_level: &str) -> Result<(), AppError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = resolve_filter(log_level, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| AppError::config(format!("Failed to initialize logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn rust_log_overrides_flag() {
        let filter = resolve_filter("info", Some("error")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn flag_applies_without_rust_log() {
        let filter = resolve_filter("debug", None).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn invalid_flag_is_config_error() {
        let err = resolve_filter("hcs=loud", None).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_CONFIG);
    }

    #[test]
    fn rust_log_from_dotenv_file_is_honored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "RUST_LOG=error\nHCS_TIMEOUT_MS=500\n").unwrap();

        let rust_log = dotenvy::from_path_iter(&path)
            .unwrap()
            .filter_map(Result::ok)
            .find(|(key, _)| key == EnvFilter::DEFAULT_ENV)
            .map(|(_, value)| value);
        let filter = resolve_filter(DEFAULT_LOG_LEVEL, rust_log.as_deref()).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }
}
