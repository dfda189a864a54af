#![cfg(feature = "std")]

//! Best-score persistence owned by the presentation layer.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage for a single best-score integer.
pub trait ScoreStore {
    /// The stored best score, 0 if nothing has been stored.
    fn get(&self) -> u64;

    /// Replace the stored best score.
    fn set(&mut self, best: u64) -> io::Result<()>;
}

/// Store `score` if it beats the stored best. Returns whether it did.
pub fn record_best<S: ScoreStore + ?Sized>(store: &mut S, score: u64) -> io::Result<bool> {
    if score > store.get() {
        store.set(score)?;
        log::info!("new best score: {}", score);
        Ok(true)
    } else {
        Ok(false)
    }
}

/// In-process store, forgotten on exit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self) -> u64 {
        self.best
    }

    fn set(&mut self, best: u64) -> io::Result<()> {
        self.best = best;
        Ok(())
    }
}

/// Text file holding the best score as a single decimal integer.
///
/// A missing or unreadable file counts as a best score of 0.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    fn get(&self) -> u64 {
        match fs::read_to_string(&self.path) {
            Ok(text) => text.trim().parse().unwrap_or_else(|_| {
                log::warn!("ignoring malformed best score in {}", self.path.display());
                0
            }),
            Err(_) => 0,
        }
    }

    fn set(&mut self, best: u64) -> io::Result<()> {
        fs::write(&self.path, format!("{}\n", best))
    }
}
