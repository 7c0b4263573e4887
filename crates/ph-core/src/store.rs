//! Persistence for the playhouse.
//!
//! A store loads and saves whole [`Playhouse`] values, so a save either lands
//! completely or not at all.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PlayhouseError, PlayhouseResult};
use crate::playhouse::Playhouse;

/// Somewhere a playhouse can be loaded from and saved to.
pub trait PlayhouseStore {
    /// Whether a saved playhouse exists.
    fn exists(&self) -> bool;

    /// Load the saved playhouse.
    fn load(&self) -> PlayhouseResult<Playhouse>;

    /// Replace the saved playhouse.
    fn save(&mut self, house: &Playhouse) -> PlayhouseResult<()>;
}

/// Keeps the playhouse in memory as serialized JSON.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    json: Option<String>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayhouseStore for MemoryStore {
    fn exists(&self) -> bool {
        self.json.is_some()
    }

    fn load(&self) -> PlayhouseResult<Playhouse> {
        let json = self.json.as_deref().ok_or_else(|| {
            PlayhouseError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "nothing saved yet",
            ))
        })?;
        Ok(serde_json::from_str(json)?)
    }

    fn save(&mut self, house: &Playhouse) -> PlayhouseResult<()> {
        self.json = Some(serde_json::to_string(house)?);
        Ok(())
    }
}

/// Saves the playhouse as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// A store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl PlayhouseStore for JsonFileStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> PlayhouseResult<Playhouse> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&mut self, house: &Playhouse) -> PlayhouseResult<()> {
        let json = serde_json::to_string_pretty(house)?;
        // Write beside the target, then rename over it.
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
