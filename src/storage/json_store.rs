//! JSON file persistence for the mistake collection
//!
//! The whole collection lives in one pretty-printed file:
//! `<data_dir>/mistakes.json`. The repository rewrites it on every
//! mutation, so the file is always a complete snapshot.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::mistakes::Mistake;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Load/save-all persistence for the mistake collection
pub trait MistakeStore {
    fn load(&self) -> Result<Vec<Mistake>>;
    fn save(&self, mistakes: &[Mistake]) -> Result<()>;
}

pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            file_path: data_dir.join("mistakes.json"),
        })
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("errata"))
            .ok_or(StoreError::DataDirNotFound)
    }
}

impl MistakeStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Mistake>> {
        if !self.file_path.exists() {
            // First run
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.file_path)?;
        let mistakes: Vec<Mistake> = serde_json::from_str(&content)?;
        Ok(mistakes)
    }

    fn save(&self, mistakes: &[Mistake]) -> Result<()> {
        let content = serde_json::to_string_pretty(mistakes)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mistakes::{AttemptRecord, CreateMistakeRequest, Subject};
    use tempfile::TempDir;

    fn sample_mistake() -> Mistake {
        let mut mistake = Mistake::new(CreateMistakeRequest {
            title: "Quadratic formula sign".to_string(),
            subject: Subject::Math,
            notes: "dropped the minus before b".to_string(),
            content: Some("Solve 2x^2 - 5x + 3 = 0".to_string()),
            image_url: None,
            solution: None,
            tags: vec!["algebra".to_string()],
        });
        let attempt = AttemptRecord::new(false, None);
        mistake.last_reviewed_at = Some(attempt.date);
        mistake.wrong_count = 1;
        mistake.correction_history.push(attempt);
        mistake
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf()).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf()).unwrap();

        let mistake = sample_mistake();
        store.save(std::slice::from_ref(&mistake)).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, mistake.id);
        assert_eq!(loaded[0].title, mistake.title);
        assert_eq!(loaded[0].subject, Subject::Math);
        assert_eq!(loaded[0].wrong_count, 1);
        assert_eq!(loaded[0].correction_history.len(), 1);
        assert_eq!(loaded[0].last_reviewed_at, mistake.last_reviewed_at);
    }

    #[test]
    fn test_new_creates_nested_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        let store = JsonFileStore::new(nested.clone()).unwrap();
        store.save(&[]).unwrap();

        assert!(nested.join("mistakes.json").exists());
    }

    #[test]
    fn test_corrupt_file_is_a_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf()).unwrap();
        fs::write(temp_dir.path().join("mistakes.json"), "not json").unwrap();

        assert!(matches!(store.load(), Err(StoreError::Json(_))));
    }
}
