//! File-backed task collection storage.
//!
//! `TaskStore` persists the entire task collection as one JSON array in
//! `tasks.json` under a store directory, next to a one-time seed marker
//! file. Reads are infallible: a missing, unreadable, or unavailable
//! store yields an empty collection, and data that no longer parses is
//! discarded so the next read starts clean.

use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use kanri_core::error::{KanriError, Result};
use kanri_core::task::Task;

use crate::paths::KanriPaths;
use crate::seed;

/// File-based storage for the whole task collection.
pub struct TaskStore {
    base_dir: PathBuf,
    /// False when the store directory could not be created; every
    /// operation then degrades to a silent no-op.
    available: bool,
}

impl TaskStore {
    const TASKS_FILENAME: &'static str = "tasks.json";
    const SEED_MARKER_FILENAME: &'static str = "seeded";

    /// Creates a store rooted at `base_dir`, creating the directory if needed.
    ///
    /// When the directory cannot be created the store still constructs
    /// but degrades: `load` returns an empty collection and writes do
    /// nothing. The system stays usable with an empty dataset.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let available = match fs::create_dir_all(&base_dir) {
            Ok(()) => true,
            Err(e) => {
                warn!("[TaskStore] Storage unavailable at {:?}: {}", base_dir, e);
                false
            }
        };

        Self {
            base_dir,
            available,
        }
    }

    /// Creates a store at the platform default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be determined.
    pub fn at_default_location() -> Result<Self> {
        let base_dir = KanriPaths::store_dir().map_err(|e| KanriError::io(e.to_string()))?;
        Ok(Self::new(base_dir))
    }

    /// Whether the backing directory exists and is writable.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Loads the whole task collection.
    ///
    /// Never fails. A slot that exists but no longer parses as a task
    /// array is deleted as a side effect, so a subsequent load does not
    /// hit the same corruption again.
    pub fn load(&self) -> Vec<Task> {
        if !self.available {
            return Vec::new();
        }

        let path = self.tasks_path();
        if !path.exists() {
            return Vec::new();
        }

        // Raw bytes: invalid UTF-8 is content corruption for the parser
        // to clear below, not a read failure that keeps the file.
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("[TaskStore] Failed to read {:?}: {}", path, e);
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<Task>>(&raw) {
            Ok(tasks) => tasks,
            Err(e) => {
                // Unrecoverable; clear the slot so the next load starts clean.
                warn!(
                    "[TaskStore] Discarding corrupt task data in {:?}: {}",
                    path, e
                );
                let _ = fs::remove_file(&path);
                Vec::new()
            }
        }
    }

    /// Saves the whole task collection, replacing the previous contents.
    ///
    /// Writes to a temporary file and renames it into place, so readers
    /// never observe a partially written collection. A save against an
    /// unavailable store is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails on an
    /// available store.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if !self.available {
            return Ok(());
        }

        let json = serde_json::to_string_pretty(tasks)?;

        let tmp_path = self
            .base_dir
            .join(format!(".{}.tmp", Self::TASKS_FILENAME));
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;

        // Ensure data is on disk before the rename makes it visible
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, self.tasks_path())?;

        Ok(())
    }

    /// Populates the fixed sample dataset at most once per store lifetime.
    ///
    /// Seeds only when the marker file is absent and the collection is
    /// empty. The marker is written in either case, so the check never
    /// repeats: clearing the collection later does not re-trigger
    /// seeding. No-op on an unavailable store.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the seed data or the marker fails on
    /// an available store.
    pub fn seed_if_empty(&self) -> Result<()> {
        if !self.available {
            return Ok(());
        }

        if self.marker_path().exists() {
            return Ok(());
        }

        if self.load().is_empty() {
            let samples = seed::sample_tasks();
            self.save(&samples)?;
            info!("[TaskStore] Seeded {} sample tasks", samples.len());
        }

        fs::write(self.marker_path(), "true")?;

        Ok(())
    }

    fn tasks_path(&self) -> PathBuf {
        self.base_dir.join(Self::TASKS_FILENAME)
    }

    fn marker_path(&self) -> PathBuf {
        self.base_dir.join(Self::SEED_MARKER_FILENAME)
    }
}
