//! Tracing subscriber setup.

use std::{fmt::Display, io, path::Path};

use tracing::Level;
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::fmt;

use crate::{
    config::Config,
    error::{Error, Result},
};

/// A non-blocking writer appending to the log file at `path`.
fn file_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    let fail = |msg: &dyn Display| Error::Config(format!("log file {}: {msg}", path.display()));
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| fail(&"no file name"))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)
        .map_err(|e| fail(&e))?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Install a global fmt subscriber writing to the configured log file, or to
/// stderr. Debug mode lowers the level filter to DEBUG.
///
/// The returned guard flushes buffered lines when dropped and must be held
/// for as long as logging is wanted. Returns `None` if a global subscriber
/// was already installed.
pub fn init(cfg: &Config) -> Result<Option<WorkerGuard>> {
    let level = if cfg.debug { Level::DEBUG } else { Level::INFO };
    let format = fmt::format()
        .with_level(true)
        .with_line_number(true)
        .with_ansi(false)
        .without_time()
        .compact();

    let (writer, guard) = match &cfg.log_file {
        Some(path) => file_writer(path)?,
        None => tracing_appender::non_blocking(io::stderr()),
    };

    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(writer)
        .event_format(format)
        .try_init()
        .is_ok();
    Ok(installed.then_some(guard))
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;

    #[test]
    fn logs_to_file() -> Result<()> {
        let path = env::temp_dir().join(format!("understory-log-{}.log", process::id()));
        let cfg = Config {
            debug: true,
            log_file: Some(path.clone()),
            ..Default::default()
        };
        let guard = init(&cfg)?;
        assert!(guard.is_some());
        assert!(init(&cfg)?.is_none());
        tracing::debug!("logging works");
        drop(guard);

        let contents = fs::read_to_string(&path).map_err(|e| Error::Internal(e.to_string()))?;
        assert!(contents.contains("logging works"));
        assert!(contents.contains("DEBUG"));
        let _ = fs::remove_file(&path);
        Ok(())
    }

    #[test]
    fn bad_log_path() -> Result<()> {
        // A regular file can't be used as the log directory.
        let blocker = env::temp_dir().join(format!("understory-blocker-{}", process::id()));
        fs::write(&blocker, "").map_err(|e| Error::Internal(e.to_string()))?;
        let cfg = Config {
            log_file: Some(blocker.join("understory.log")),
            ..Default::default()
        };
        assert!(matches!(init(&cfg), Err(Error::Config(_))));

        let cfg = Config {
            log_file: Some("/".into()),
            ..Default::default()
        };
        assert!(matches!(init(&cfg), Err(Error::Config(_))));
        let _ = fs::remove_file(&blocker);
        Ok(())
    }
}
