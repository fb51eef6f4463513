//! Diagnostic tracing.
//!
//! Reads `RUST_LOG`; defaults to `warn`. The TUI owns the terminal, so
//! interactive runs log to a file. Non-interactive commands log to stderr.
//!
//! ```bash
//! RUST_LOG=mainframe=debug mainframe --log-file /tmp/mainframe.log
//! ```

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log lines go.
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

impl LogTarget {
    /// `~/.mainframe/mainframe.log`.
    pub fn default_file() -> Option<PathBuf> {
        crate::config::Config::home_dir().map(|h| h.join("mainframe.log"))
    }
}

/// Install the global subscriber.
///
/// Fails only if a log file cannot be opened; nothing is installed then.
pub fn init(target: LogTarget) -> Result<(), String> {
    let (writer, ansi) = match target {
        LogTarget::Stderr => (BoxMakeWriter::new(io::stderr), true),
        LogTarget::File(path) => {
            let file = open_append(&path)
                .map_err(|e| format!("failed to open log file {}: {e}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        LogTarget::Discard => (BoxMakeWriter::new(io::sink), false),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(ansi).compact())
        .init();
    Ok(())
}

fn open_append(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
