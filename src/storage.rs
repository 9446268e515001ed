//! Durable key-value storage for session state.
//!
//! Each key is a single JSON file under the application data directory.
//! Reads are tolerant: a missing or unparsable file yields `None`, so a
//! corrupted file can never prevent the application from starting.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key holding the serialized current track (a JSON object).
pub const CURRENT_TRACK_KEY: &str = "current_track";
/// Key holding the serialized recent-plays history (a JSON array).
pub const RECENT_SONGS_KEY: &str = "recent_songs";

pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Storage rooted at the platform data directory.
    pub fn open_default() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sargam");
        Self { dir }
    }

    /// Storage rooted at an explicit directory (config override, tests).
    pub fn open_at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory backing this store. The log file lives next to the keys.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = fs::read_to_string(self.key_path(key)).ok()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("storage: discarding unreadable key '{key}': {e}");
                None
            }
        }
    }

    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let raw = serde_json::to_string(value)?;
        fs::write(self.key_path(key), raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn read_missing_key_yields_none() {
        let dir = tempdir().unwrap();
        let storage = Storage::open_at(dir.path());
        assert_eq!(storage.read::<Vec<String>>("nothing_here"), None);
    }

    #[test]
    fn read_corrupt_key_yields_none() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{not json").unwrap();
        let storage = Storage::open_at(dir.path());
        assert_eq!(storage.read::<Vec<String>>("broken"), None);
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let storage = Storage::open_at(dir.path().join("deeper"));
        let value = vec!["a".to_string(), "b".to_string()];
        storage.write("list", &value).unwrap();
        assert_eq!(storage.read::<Vec<String>>("list"), Some(value));
    }
}
