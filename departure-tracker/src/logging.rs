use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};
use tokio::task;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// How long rotated log files are kept on disk.
const LOG_RETENTION: Duration = Duration::from_secs(60 * 60 * 24 * 7);
const CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60 * 6);

/// Keeps the non-blocking log writer alive; drop flushes pending lines.
#[allow(dead_code)]
pub struct LoggerGuard(WorkerGuard);

/// Install the global subscriber: a daily-rolling file appender plus a
/// console layer, both filtered at `level` (overridable via RUST_LOG).
pub fn init_logging(log_dir: impl AsRef<Path>, prefix: &str, level: &str) -> LoggerGuard {
    let log_dir = log_dir.as_ref().to_path_buf();

    let level = if matches!(level, "trace" | "debug" | "info" | "warn" | "error") {
        level
    } else {
        tracing::warn!("Invalid log level '{}', defaulting to 'info'", level);
        "info"
    };

    let env_directives = std::env::var("RUST_LOG").unwrap_or_default();
    let filter = |base: &str| {
        EnvFilter::builder()
            .with_default_directive(base.parse().unwrap())
            .parse_lossy(&env_directives)
    };

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(&log_dir)
        .expect("Failed to create file appender");
    let (non_blocking, guard) = NonBlocking::new(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(filter(level));
    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_filter(filter(level));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    spawn_log_cleanup(log_dir, prefix.to_string());

    LoggerGuard(guard)
}

fn spawn_log_cleanup(log_dir: PathBuf, prefix: String) {
    task::spawn(async move {
        loop {
            if let Err(e) = prune_expired_logs(&log_dir, &prefix, LOG_RETENTION) {
                tracing::warn!("Log cleanup failed: {}", e);
            }
            tokio::time::sleep(CLEANUP_INTERVAL).await;
        }
    });
}

fn prune_expired_logs(log_dir: &Path, prefix: &str, max_age: Duration) -> std::io::Result<()> {
    let now = SystemTime::now();

    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !file_name.starts_with(prefix) || !file_name.ends_with(".log") {
            continue;
        }

        let modified = fs::metadata(&path)?.modified()?;
        if now.duration_since(modified).unwrap_or_default() > max_age {
            fs::remove_file(&path)?;
            tracing::info!("Expired log file deleted: {}", file_name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_keeps_fresh_logs() {
        let dir = std::env::temp_dir().join("departure_tracker_log_prune");
        fs::create_dir_all(&dir).unwrap();

        let log_path = dir.join("departure-tracker.2026-08-07.log");
        fs::write(&log_path, "line\n").unwrap();
        let unrelated = dir.join("notes.txt");
        fs::write(&unrelated, "keep\n").unwrap();

        prune_expired_logs(&dir, "departure-tracker", LOG_RETENTION).unwrap();
        assert!(log_path.exists());
        assert!(unrelated.exists());

        // Zero retention treats the fresh log as expired.
        std::thread::sleep(Duration::from_millis(20));
        prune_expired_logs(&dir, "departure-tracker", Duration::ZERO).unwrap();
        assert!(!log_path.exists());
        assert!(unrelated.exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_prune_missing_dir_is_an_error() {
        let dir = std::env::temp_dir().join("departure_tracker_no_such_dir");
        assert!(prune_expired_logs(&dir, "departure-tracker", LOG_RETENTION).is_err());
    }
}
