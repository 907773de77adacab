//! File-backed save storage: one JSON file per save key.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use wc_engine::{SaveError, SaveStore};

/// Stores each blob as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SaveStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, SaveError> {
        match fs::read_to_string(self.path(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, blob: &str) -> Result<(), SaveError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), blob)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.read("wasteland-save").unwrap(), None);
    }

    #[test]
    fn write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("saves"));
        store.write("slot", "{\"a\":1}").unwrap();
        assert!(dir.path().join("saves/slot.json").exists());
        assert_eq!(store.read("slot").unwrap().as_deref(), Some("{\"a\":1}"));
    }
}
