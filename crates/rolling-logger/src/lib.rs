//! Rolling Logger
//!
//! A log file bounded to the most recent lines. Each line is appended to
//! the file and also kept in a circular buffer of `max_lines`. Once the file
//! holds twice that many lines it is rewritten from the buffer, so a
//! long-running service never grows its log without bound.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default number of lines kept on disk
pub const DEFAULT_MAX_LINES: usize = 5000;

struct Buffer {
    path: PathBuf,
    file: File,
    lines: VecDeque<String>,
    max_lines: usize,
    /// Lines currently in the file, including ones already evicted from `lines`
    on_disk: usize,
    /// Bytes of an unfinished line (no trailing newline yet)
    partial: String,
}

impl Buffer {
    fn push_line(&mut self, line: String) -> io::Result<()> {
        writeln!(self.file, "{line}")?;
        self.on_disk += 1;

        if self.lines.len() == self.max_lines {
            self.lines.pop_front();
        }
        self.lines.push_back(line);

        if self.on_disk >= self.max_lines * 2 {
            self.compact()?;
        }
        Ok(())
    }

    /// Rewrite the file from the buffer and reopen it for appending
    fn compact(&mut self) -> io::Result<()> {
        self.file = rewrite(&self.path, &self.lines)?;
        self.on_disk = self.lines.len();
        Ok(())
    }
}

fn rewrite(path: &Path, lines: &VecDeque<String>) -> io::Result<File> {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    fs::write(path, out)?;
    OpenOptions::new().append(true).open(path)
}

/// Writer backed by a bounded line buffer mirrored to a file.
///
/// Cheap to clone; clones share the same buffer.
#[derive(Clone)]
pub struct RollingFileWriter {
    inner: Arc<Mutex<Buffer>>,
}

impl RollingFileWriter {
    /// Open (or create) a rolling log file, keeping the tail of any
    /// existing content.
    pub fn open(path: impl Into<PathBuf>, max_lines: usize) -> io::Result<Self> {
        let path = path.into();
        let max_lines = max_lines.max(1);

        let mut lines = VecDeque::with_capacity(max_lines);
        if path.exists() {
            let existing = fs::read_to_string(&path)?;
            for line in existing.lines() {
                if lines.len() == max_lines {
                    lines.pop_front();
                }
                lines.push_back(line.to_string());
            }
        }

        let file = rewrite(&path, &lines)?;
        let buffer = Buffer {
            path,
            file,
            on_disk: lines.len(),
            lines,
            max_lines,
            partial: String::new(),
        };

        Ok(Self {
            inner: Arc::new(Mutex::new(buffer)),
        })
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lock().lines.iter().cloned().collect()
    }

    pub fn path(&self) -> PathBuf {
        self.lock().path.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Buffer> {
        // A panic while holding the lock leaves the buffer usable.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Write for RollingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self.lock();
        buffer.partial.push_str(&String::from_utf8_lossy(buf));

        while let Some(pos) = buffer.partial.find('\n') {
            let line: String = buffer.partial.drain(..=pos).collect();
            buffer.push_line(line.trim_end_matches(['\n', '\r']).to_string())?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut buffer = self.lock();
        if !buffer.partial.is_empty() {
            let line = std::mem::take(&mut buffer.partial);
            buffer.push_line(line)?;
        }
        buffer.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingFileWriter {
    type Writer = RollingFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Local wall-clock timestamps, millisecond precision
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the global tracing subscriber.
///
/// Events go to stderr and to `<log_dir>/<app_name>.log`, which keeps at
/// most `max_lines` lines. The filter comes from `RUST_LOG`, defaulting to
/// `info`.
pub fn init_logger(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    max_lines: usize,
) -> io::Result<RollingFileWriter> {
    let log_dir = log_dir.as_ref();
    fs::create_dir_all(log_dir)?;
    let writer = RollingFileWriter::open(log_dir.join(format!("{app_name}.log")), max_lines)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(LocalTimer)
                .with_writer(io::stderr),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(LocalTimer)
                .with_ansi(false)
                .with_writer(writer.clone()),
        )
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    tracing::info!(app = app_name, path = %writer.path().display(), "rolling logger initialized");
    Ok(writer)
}
