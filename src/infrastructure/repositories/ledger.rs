//! JSON Lines Ledger Repository
//!
//! Persists the progression ledger as one JSON object per line. The file is
//! only ever appended to. Access is coordinated through an advisory lock on a
//! sibling `.lock` file: readers share it, each committing action holds it
//! exclusively from snapshot load until its rows are on disk.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, warn};

use crate::domain::entities::{Ledger, ProgressionEvent};
use crate::domain::ports::{LedgerRepository, LedgerStoreError};

pub struct JsonlLedgerRepository {
    path: PathBuf,
}

/// Holds the advisory lock until dropped
struct LedgerLock {
    file: File,
}

impl Drop for LedgerLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

impl JsonlLedgerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    fn acquire(&self, exclusive: bool) -> Result<LedgerLock, LedgerStoreError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(LedgerStoreError::access)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(LedgerStoreError::access)?;

        let locked = if exclusive {
            FileExt::lock_exclusive(&file)
        } else {
            FileExt::lock_shared(&file)
        };
        locked.map_err(|e| LedgerStoreError::Lock {
            message: e.to_string(),
        })?;

        debug!(path = %lock_path.display(), exclusive, "ledger lock acquired");
        Ok(LedgerLock { file })
    }

    fn load_from_disk(&self) -> Result<Ledger, LedgerStoreError> {
        if !self.path.exists() {
            return Ok(Ledger::new());
        }

        let content = fs::read_to_string(&self.path).map_err(LedgerStoreError::access)?;
        let mut events = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let event: ProgressionEvent =
                serde_json::from_str(line).map_err(|e| LedgerStoreError::Corrupted {
                    path: self.path.clone(),
                    line: index + 1,
                    message: e.to_string(),
                })?;
            events.push(event);
        }

        debug!(path = %self.path.display(), events = events.len(), "ledger loaded");
        Ok(Ledger::from_events(events))
    }

    fn append_to_disk(&self, events: &[ProgressionEvent]) -> Result<(), LedgerStoreError> {
        if events.is_empty() {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(LedgerStoreError::access)?;
        let original_len = file.metadata().map_err(LedgerStoreError::access)?.len();

        let mut buffer = String::new();
        if original_len > 0 && !ends_with_newline(&mut file)? {
            // Terminate the last row before appending after it.
            buffer.push('\n');
        }
        for event in events {
            let line = serde_json::to_string(event).map_err(|e| {
                LedgerStoreError::SerializationError {
                    message: e.to_string(),
                }
            })?;
            buffer.push_str(&line);
            buffer.push('\n');
        }

        let written = file
            .write_all(buffer.as_bytes())
            .and_then(|_| file.sync_data());
        if let Err(e) = written {
            // Drop whatever part of this action reached the file.
            if let Err(truncate_err) = file.set_len(original_len) {
                warn!(error = %truncate_err, "failed to roll back partial ledger append");
            }
            return Err(LedgerStoreError::access(e));
        }

        debug!(path = %self.path.display(), appended = events.len(), "ledger appended");
        Ok(())
    }
}

fn ends_with_newline(file: &mut File) -> Result<bool, LedgerStoreError> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))
        .and_then(|_| file.read_exact(&mut last))
        .map_err(LedgerStoreError::access)?;
    Ok(last[0] == b'\n')
}

impl LedgerRepository for JsonlLedgerRepository {
    fn snapshot(&self) -> Result<Ledger, LedgerStoreError> {
        if !self.path.exists() {
            return Ok(Ledger::new());
        }
        let _lock = self.acquire(false)?;
        self.load_from_disk()
    }

    fn commit<T, E, F>(&self, action: F) -> Result<T, E>
    where
        F: FnOnce(&mut Ledger) -> Result<T, E>,
        E: From<LedgerStoreError>,
    {
        let _lock = self.acquire(true)?;
        let mut ledger = self.load_from_disk()?;
        let mark = ledger.len();

        let output = action(&mut ledger)?;
        self.append_to_disk(ledger.appended_since(mark))?;
        Ok(output)
    }
}
