//! Logging bootstrap. The terminal belongs to the UI, so events go to a
//! daily-rolling file instead of stdout.

use std::{fs, path::PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

const LOG_FILE_PREFIX: &str = "banter.log";

/// Keeps the non-blocking writer alive for the lifetime of the process.
pub struct LogHandle {
    pub directory: PathBuf,
    _guard: WorkerGuard,
}

pub fn init(config: &LogConfig) -> Result<LogHandle, AppError> {
    let directory = resolve_log_dir(config)?;
    fs::create_dir_all(&directory).map_err(|source| AppError::LogDirCreate {
        path: directory.clone(),
        source,
    })?;

    let appender = tracing_appender::rolling::daily(&directory, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(LogHandle {
        directory,
        _guard: guard,
    })
}

fn resolve_log_dir(config: &LogConfig) -> Result<PathBuf, AppError> {
    if let Some(dir) = &config.dir {
        return Ok(dir.clone());
    }

    dirs::data_local_dir()
        .map(|base| base.join("banter").join("logs"))
        .ok_or(AppError::LogDirUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_dir_wins_over_platform_default() {
        let config = LogConfig {
            level: "info".to_owned(),
            dir: Some(PathBuf::from("/tmp/banter-logs")),
        };

        let dir = resolve_log_dir(&config).expect("dir must resolve");

        assert_eq!(dir, PathBuf::from("/tmp/banter-logs"));
    }
}
