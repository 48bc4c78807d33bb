//! Watchlist output sink
//!
//! Writes rendered symbol lists to their destination. The trait keeps the
//! export pipeline decoupled from the filesystem for testing.

use std::fs;
use std::path::Path;

use crate::core::WatchlistResult;

/// Destination for a rendered watchlist
pub trait WatchlistSink {
    /// Write one line per string, newline-terminated, no header
    fn write(&self, path: &Path, lines: &[String]) -> WatchlistResult<()>;
}

/// Sink writing plain text files, creating the parent directory if absent
pub struct FileSink;

impl WatchlistSink for FileSink {
    fn write(&self, path: &Path, lines: &[String]) -> WatchlistResult<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let mut body = String::new();
        for line in lines {
            body.push_str(line);
            body.push('\n');
        }

        fs::write(path, body)?;

        tracing::info!("Wrote {} lines to {:?}", lines.len(), path);
        Ok(())
    }
}
