use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "MEDTRACK_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is off unless `MEDTRACK_LOG` names a file path; writing to the
/// terminal would corrupt the TUI. The file gets a `{path}.{timestamp}.{pid}`
/// name so concurrent instances never share one.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV).ok().filter(|p| !p.is_empty()) else {
        return;
    };

    let unique_path = unique_log_path(&log_path, std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "medtrack starting");
}

fn unique_log_path(base: &str, pid: u32) -> String {
    let timestamp = chrono::Utc::now().timestamp();
    format!("{}.{}.{}", base, timestamp, pid)
}
