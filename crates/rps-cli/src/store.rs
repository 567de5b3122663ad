use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use rps_engine::{SCORE_KEY, ScoreStore, parse_score};
use serde_json::{Map, Value};

const STORE_FILE_NAME: &str = "store.json";

/// Score store backed by a small JSON key-value file.
///
/// The file holds an object of string entries; the score lives under
/// [`SCORE_KEY`] as a decimal string (`{"score": "3"}`). Other entries are
/// preserved on save.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the store at its default location in the user's data directory.
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(crate::util::data_dir()?.join(STORE_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all entries, or `None` if the file is missing or unusable.
    fn read_entries(&self) -> Option<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "score store not found");
                return None;
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "failed to read score store: {e}");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(entries) => Some(entries),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "failed to parse score store: {e}");
                None
            }
        }
    }

    fn write_score(&self, score: u64) -> anyhow::Result<()> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(SCORE_KEY.to_owned(), Value::String(score.to_string()));

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&entries)
            .context("failed to serialize score store")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u64 {
        let Some(entries) = self.read_entries() else {
            return 0;
        };
        match entries.get(SCORE_KEY) {
            Some(Value::String(value)) => {
                let score = parse_score(value);
                if score == 0 && value.trim() != "0" {
                    tracing::warn!(value = %value, "stored score is not a number, using 0");
                }
                score
            }
            Some(value) => {
                tracing::warn!(%value, "stored score is not a string, using 0");
                0
            }
            None => 0,
        }
    }

    fn save(&mut self, score: u64) {
        match self.write_score(score) {
            Ok(()) => tracing::debug!(score, path = %self.path.display(), "score saved"),
            Err(e) => tracing::error!("failed to save score: {e:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileScoreStore {
        FileScoreStore::new(dir.path().join("nested").join(STORE_FILE_NAME))
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).load(), 0);
    }

    #[test]
    fn test_save_creates_file_and_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.save(3);

        let content = fs::read_to_string(store.path()).unwrap();
        let entries: Map<String, Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(entries.get(SCORE_KEY), Some(&Value::String("3".to_owned())));

        assert_eq!(FileScoreStore::new(store.path()).load(), 3);
    }

    #[test]
    fn test_corrupt_values_load_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileScoreStore::new(dir.path().join(STORE_FILE_NAME));
        for content in [
            "",
            "not json",
            "[1, 2, 3]",
            r#"{"other": "5"}"#,
            r#"{"score": "five"}"#,
            r#"{"score": "-2"}"#,
            r#"{"score": 4}"#,
            r#"{"score": null}"#,
        ] {
            fs::write(store.path(), content).unwrap();
            assert_eq!(store.load(), 0, "{content:?}");
        }
    }

    #[test]
    fn test_save_keeps_other_entries() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileScoreStore::new(dir.path().join(STORE_FILE_NAME));
        fs::write(store.path(), r#"{"theme": "dark", "score": "1"}"#).unwrap();

        store.save(2);

        let content = fs::read_to_string(store.path()).unwrap();
        let entries: Map<String, Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(entries.get("theme"), Some(&Value::String("dark".to_owned())));
        assert_eq!(store.load(), 2);
    }

    #[test]
    fn test_save_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileScoreStore::new(dir.path().join(STORE_FILE_NAME));
        fs::write(store.path(), "{{{").unwrap();

        store.save(7);
        assert_eq!(store.load(), 7);
    }

    #[test]
    fn test_failed_save_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // The store path is a directory, so writing it fails.
        let mut store = FileScoreStore::new(dir.path());
        store.save(1);
        assert_eq!(store.load(), 0);
    }
}
