use std::collections::HashMap;
use std::io::ErrorKind;

use anyhow::{Context, Result, bail};

/// Where documents are read from and written to.
pub trait FileStore {
    /// Read `path`. A file that does not exist is `Ok(None)`, not an error.
    fn load(&self, path: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the contents of `path` with `bytes`.
    fn write(&mut self, path: &str, bytes: &[u8]) -> Result<()>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl FileStore for FsStore {
    fn load(&self, path: &str) -> Result<Option<Vec<u8>>> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("Failed to read {path}")),
        }
    }

    fn write(&mut self, path: &str, bytes: &[u8]) -> Result<()> {
        std::fs::write(path, bytes).with_context(|| format!("Failed to write {path}"))
    }
}

/// An in-memory store that records every write. Handy for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    files: HashMap<String, Vec<u8>>,
    writes: Vec<(String, Vec<u8>)>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.to_string(), bytes.into());
        self
    }

    /// Make every subsequent write fail.
    pub fn failing(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Every write attempt so far, in order, including failed ones.
    pub fn writes(&self) -> &[(String, Vec<u8>)] {
        &self.writes
    }

    pub fn file(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }
}

impl FileStore for MemoryStore {
    fn load(&self, path: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.files.get(path).cloned())
    }

    fn write(&mut self, path: &str, bytes: &[u8]) -> Result<()> {
        self.writes.push((path.to_string(), bytes.to_vec()));
        if self.fail_writes {
            bail!("Failed to write {path}: disk full");
        }
        self.files.insert(path.to_string(), bytes.to_vec());
        Ok(())
    }
}
