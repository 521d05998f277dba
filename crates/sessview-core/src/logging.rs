//! Log setup for the CLI.
//!
//! Events go to `sessview.log` in the XDG state dir, next to the persisted
//! thumbnail cache. When that file cannot be opened the binary calls
//! [`init_logging_stderr`] instead, so a read-only home never stops a run.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,sessview=debug,sessview_core=debug,sessview_cli=debug";
const LOG_FILE: &str = "sessview.log";

/// `~/.local/state/sessview/sessview.log`; creates the state dir.
pub fn default_log_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("sessview")?;
    dirs.place_state_file(LOG_FILE)
        .context("create sessview state dir for log file")
}

/// Opens `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log dir: {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file: {}", path.display()))
}

/// One shared log file handed out per event. A handle that cannot be cloned
/// (fd exhaustion) sends that event to stderr rather than dropping it.
struct LogSink(File);

enum SinkWriter {
    File(File),
    Stderr(io::Stderr),
}

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            SinkWriter::File(f) => f.write(buf),
            SinkWriter::Stderr(e) => e.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            SinkWriter::File(f) => f.flush(),
            SinkWriter::Stderr(e) => e.flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = SinkWriter;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(f) => SinkWriter::File(f),
            Err(_) => SinkWriter::Stderr(io::stderr()),
        }
    }
}

/// `RUST_LOG` if set and valid, else the sessview default.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Logs to [`default_log_path`]. Errors leave no subscriber installed.
pub fn init_logging() -> Result<()> {
    let path = default_log_path()?;
    init_logging_at(&path)
}

/// Logs to an explicit file.
pub fn init_logging_at(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(LogSink(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;
    tracing::info!(path = %path.display(), "sessview logging started");
    Ok(())
}

/// Stderr-only logging; a no-op if a subscriber is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
