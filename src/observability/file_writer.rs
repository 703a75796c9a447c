//! Size-rotated append-only file writer.
//!
//! Shared by the log layer and the OTLP span exporter. When a write would push
//! the active file past `max_bytes`, the file is shifted to `<name>.1`, older
//! backups move up one slot (`.1` → `.2`, ...), and anything past
//! `max_backups` is removed.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct ActiveFile {
    file: Option<File>,
    /// Bytes in the active file, seeded from its metadata on open.
    len: u64,
}

/// Thread-safe rotating writer.
///
/// `&RotatingFileWriter` implements [`Write`], so an `Arc` of it can be handed
/// to `tracing_subscriber::fmt` as a writer.
pub struct RotatingFileWriter {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    active: Mutex<ActiveFile>,
}

impl RotatingFileWriter {
    /// The file is opened lazily on the first write.
    #[must_use]
    pub fn new(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes: max_bytes.max(1),
            max_backups,
            active: Mutex::new(ActiveFile::default()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline, rotating first if needed.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing the file.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line.as_bytes());
        buf.push(b'\n');
        self.append(&buf)
    }

    /// Appends raw bytes as one unit; a single write never straddles files.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing the file.
    pub fn append(&self, bytes: &[u8]) -> io::Result<()> {
        let mut active = self
            .active
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if active.file.is_none() {
            self.open(&mut active)?;
        }
        if active.len > 0 && active.len + bytes.len() as u64 > self.max_bytes {
            active.file = None;
            self.rotate()?;
            self.open(&mut active)?;
        }

        let file = active
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "no file available"))?;
        file.write_all(bytes)?;
        file.flush()?;
        active.len += bytes.len() as u64;
        Ok(())
    }

    fn open(&self, active: &mut ActiveFile) -> io::Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        active.len = file.metadata().map(|m| m.len()).unwrap_or(0);
        active.file = Some(file);
        Ok(())
    }

    fn backup_path(&self, slot: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{slot}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.path).or_else(ignore_missing);
        }

        fs::remove_file(self.backup_path(self.max_backups)).or_else(ignore_missing)?;
        for slot in (1..self.max_backups).rev() {
            let from = self.backup_path(slot);
            if from.exists() {
                fs::rename(&from, self.backup_path(slot + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1)).or_else(ignore_missing)
    }
}

fn ignore_missing(e: io::Error) -> io::Result<()> {
    if e.kind() == io::ErrorKind::NotFound {
        Ok(())
    } else {
        Err(e)
    }
}

impl Write for &RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
