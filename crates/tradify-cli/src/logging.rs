use crate::types::LogLevel;
use anyhow::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where diagnostics go
pub enum LogSink<'a> {
    Stderr,
    /// Append to a file; used while the TUI owns the terminal
    File(&'a Path),
}

/// Install the global subscriber. `RUST_LOG` overrides `level`.
pub fn init(level: LogLevel, sink: LogSink) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tradify={level},tradify_runtime={level}")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // A second init (e.g. in tests) keeps the first subscriber
    match sink {
        LogSink::Stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        LogSink::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }

    Ok(())
}
