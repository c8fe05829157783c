use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log lines go.
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Append to a file; used while the UI owns the terminal.
    File(PathBuf),
    Stderr,
}

impl LogTarget {
    /// `<data dir>/countries-explorer/countries.log`.
    pub fn default_file() -> Self {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        LogTarget::File(data_dir.join("countries-explorer").join("countries.log"))
    }

    fn default_directive(&self) -> &'static str {
        match self {
            LogTarget::File(_) => "info",
            LogTarget::Stderr => "warn",
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default level.
///
/// A log file that cannot be opened disables logging rather than aborting.
pub fn init_tracing(target: LogTarget) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(target.default_directive()));

    match target {
        LogTarget::File(path) => {
            let Some(file) = open_log_file(&path) else {
                eprintln!("Warning: Failed to open log file: {}", path.display());
                return;
            };
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .with_timer(fmt::time::UtcTime::rfc_3339());
            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .init();
        }
        LogTarget::Stderr => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_timer(fmt::time::UtcTime::rfc_3339());
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
        }
    }
}

fn open_log_file(path: &Path) -> Option<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
