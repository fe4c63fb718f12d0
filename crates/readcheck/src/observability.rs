//! Logging setup: human-readable console output on stderr plus an optional
//! JSONL file sink.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "READCHECK_LOG_PATH";
const LOG_DIR_ENV: &str = "READCHECK_LOG_DIR";
const LOG_FILE_NAME: &str = "readcheck.jsonl";

/// Where the JSONL log goes, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact file to append to.
    pub log_path: Option<PathBuf>,
    /// Directory for a daily-rotated log file.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `READCHECK_LOG_PATH` and `READCHECK_LOG_DIR`; the environment
    /// wins over `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::from_values(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn from_values(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let non_empty = |p: &PathBuf| !p.as_os_str().is_empty();
        Self {
            log_path: env_path.filter(non_empty),
            log_dir: env_dir.filter(non_empty).or(config_dir),
        }
    }
}

/// Flushes the file sink on drop. Hold it until `main` returns.
#[derive(Debug)]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Build the level filter. `RUST_LOG` wins; otherwise `-q` means errors
/// only, each `-v` steps up from the configured level.
pub fn env_filter(quiet: bool, verbose: u8, configured: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_for(quiet, verbose, configured))
}

fn level_for(quiet: bool, verbose: u8, configured: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => configured,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

type FileWriter = Box<dyn std::io::Write + Send>;

fn file_writer(cfg: &ObservabilityConfig) -> anyhow::Result<Option<(FileWriter, PathBuf)>> {
    if let Some(ref path) = cfg.log_path {
        let dir = path
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let name = path
            .file_name()
            .with_context(|| format!("log path has no file name: {}", path.display()))?;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::never(dir, name);
        return Ok(Some((Box::new(appender), path.clone())));
    }
    if let Some(ref dir) = cfg.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
        return Ok(Some((Box::new(appender), dir.join(LOG_FILE_NAME))));
    }
    Ok(None)
}

/// Install the global subscriber.
pub fn init_observability(
    cfg: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<LogGuard> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard, target) = match file_writer(cfg)? {
        Some((writer, target)) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(writer);
            let layer = fmt::layer().json().with_writer(non_blocking);
            (Some(layer), Some(guard), Some(target))
        }
        None => (None, None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    if let Some(target) = target {
        tracing::debug!(log_file = %target.display(), "file logging enabled");
    }
    Ok(LogGuard { _file: guard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_wins_over_config_dir() {
        let cfg = ObservabilityConfig::from_values(
            None,
            Some(PathBuf::from("/env/logs")),
            Some(PathBuf::from("/config/logs")),
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/env/logs")));
    }

    #[test]
    fn empty_env_values_ignored() {
        let cfg = ObservabilityConfig::from_values(
            Some(PathBuf::new()),
            Some(PathBuf::new()),
            Some(PathBuf::from("/config/logs")),
        );
        assert!(cfg.log_path.is_none());
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/config/logs")));
    }

    #[test]
    fn nothing_configured_means_no_file() {
        let cfg = ObservabilityConfig::from_values(None, None, None);
        assert!(file_writer(&cfg).unwrap().is_none());
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(true, 2, "info"), "error");
        assert_eq!(level_for(false, 0, "warn"), "warn");
        assert_eq!(level_for(false, 1, "info"), "debug");
        assert_eq!(level_for(false, 3, "info"), "trace");
    }
}
