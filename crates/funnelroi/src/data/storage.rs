//! Data directory layout and state persistence.
//!
//! Directory structure:
//! ~/.funnelroi/
//!   state.json              # Last-edited inputs (best-effort cache)
//!   funnelroi.log           # Log file
//!   funnel-roi-cro.csv      # CSV exports, one per scenario family
//!   funnel-roi-redesign.csv

use std::fs;
use std::path::{Path, PathBuf};

use funnelroi_core::ScenarioFamily;

use crate::util::io::atomic_write;

use super::snapshot::{StateSnapshot, StoredSnapshot};

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory holding the state cache and CSV exports.
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.funnelroi/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".funnelroi")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn state_path(&self) -> PathBuf {
        self.root.join("state.json")
    }

    pub fn export_path(&self, family: ScenarioFamily) -> PathBuf {
        self.root.join(format!("funnel-roi-{}.csv", family.key()))
    }

    /// Ensure the data directory exists.
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Load the stored snapshot. `Ok(None)` when no state has been saved
    /// yet; a parse failure is an error the caller downgrades to defaults.
    pub fn load_snapshot(&self) -> Result<Option<StoredSnapshot>, StorageError> {
        let state_path = self.state_path();
        if !state_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&state_path)
            .map_err(|e| StorageError::Io(format!("Failed to read state: {}", e)))?;

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StorageError::Parse(format!("Failed to parse state: {}", e)))
    }

    /// Persist the snapshot atomically.
    pub fn save_snapshot(&self, snapshot: &StateSnapshot) -> Result<(), StorageError> {
        self.init()?;

        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize state: {}", e)))?;

        atomic_write(&self.state_path(), &json)
            .map_err(|e| StorageError::Io(format!("Failed to write state: {}", e)))
    }

    /// Write a CSV export for the family, returning the file path.
    pub fn write_export(
        &self,
        family: ScenarioFamily,
        csv: &str,
    ) -> Result<PathBuf, StorageError> {
        self.init()?;

        let path = self.export_path(family);
        atomic_write(&path, csv)
            .map_err(|e| StorageError::Io(format!("Failed to write export: {}", e)))?;
        Ok(path)
    }
}
