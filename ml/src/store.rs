//! Core line store implementation
//!
//! The backing file is the single source of truth: every operation re-reads
//! it, so there is no in-memory cache to go stale between calls.

use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{MemlogError, Result};

/// Handle to the append-only memory log file
///
/// Holds only the path; the file is opened on demand per operation. Lines
/// are 1-indexed at this boundary.
pub struct MemoryLog {
    /// Path to the backing log file
    path: PathBuf,
}

impl MemoryLog {
    /// Point at a log file; the file itself is created on first append
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        debug!("opened memory log at {}", path.display());
        Self { path }
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `text` plus a trailing newline, creating the file if needed
    ///
    /// The write is flushed and synced before returning. Returns the number
    /// of lines added (embedded newlines in `text` each start a new line).
    pub fn append(&self, text: &str) -> Result<usize> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{text}")?;
        file.flush()?;
        file.sync_all()?;

        let added = text.matches('\n').count() + 1;
        debug!("appended {added} line(s) to {}", self.path.display());
        Ok(added)
    }

    /// All persisted lines, oldest first; empty if the file does not exist
    pub fn read_all(&self) -> Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch a single line by 1-based index
    pub fn get(&self, line_number: usize) -> Result<String> {
        let lines = self.read_all()?;
        if line_number == 0 || line_number > lines.len() {
            return Err(MemlogError::NotFound {
                line: line_number,
                len: lines.len(),
            });
        }
        Ok(lines[line_number - 1].clone())
    }

    /// Current number of lines in the log
    pub fn len(&self) -> Result<usize> {
        Ok(self.read_all()?.len())
    }

    /// True when the log has no lines yet
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
