//! gitseek binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use gitseek::args::{Args, determine_log_level};
use gitseek::{app, theme};

/// Log timestamp formatter: local time as `YYYY-MM-DDTHH:MM:SS`.
struct GitseekTimer;

impl tracing_subscriber::fmt::time::FormatTime for GitseekTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S");
        write!(w, "{ts}")
    }
}

/// Keeps the non-blocking log writer flushing until process exit.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset.
///
/// Details:
/// - Writes to `<config_dir>/logs/gitseek.log`; falls back to stderr when the file
///   cannot be opened so startup never blocks on logging.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = theme::logs_dir().join("gitseek.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(GitseekTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(GitseekTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Some(dir) = args.config_dir.clone() {
        theme::set_config_dir_override(dir);
    }
    init_logging(&determine_log_level(&args));

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "gitseek starting");
    if let Err(err) = app::run(args.run_options()).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("gitseek: {err}");
        std::process::exit(1);
    }
    tracing::info!("gitseek exited");
}

#[cfg(test)]
mod tests {
    /// What: `FormatTime` impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives a `YYYY-MM-DDTHH:MM:SS` stamp
    #[test]
    fn gitseek_timer_formats_time() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let _ = super::GitseekTimer.format_time(&mut writer);
        assert_eq!(buf.len(), 19);
        assert_eq!(buf.as_bytes()[10], b'T');
    }
}
