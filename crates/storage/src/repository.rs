use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quiz_core::model::{Bank, QuestionError};
use thiserror::Error;

use crate::json::JsonFileSource;
use crate::sqlite::{SqliteInitError, SqliteRepository};

/// Errors surfaced while loading question banks.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("question file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed question data: {0}")]
    Parse(String),

    #[error("invalid question #{position} in {bank}: {source}")]
    InvalidQuestion {
        bank: String,
        position: usize,
        #[source]
        source: QuestionError,
    },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}

/// Anything that can produce the full list of question banks.
///
/// Implementations read everything up front; banks come back in source order.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Load every bank with its questions.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the backing store cannot be read or holds an
    /// invalid question.
    async fn load_all_banks(&self) -> Result<Vec<Bank>, LoadError>;

    /// Short human-readable description of where questions come from.
    fn describe(&self) -> String;
}

/// Simple in-memory source for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemorySource {
    banks: Arc<Mutex<Vec<Bank>>>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(banks: Vec<Bank>) -> Self {
        Self {
            banks: Arc::new(Mutex::new(banks)),
        }
    }
}

#[async_trait]
impl QuestionSource for InMemorySource {
    async fn load_all_banks(&self) -> Result<Vec<Bank>, LoadError> {
        let guard = self
            .banks
            .lock()
            .map_err(|e| LoadError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    fn describe(&self) -> String {
        "in-memory".to_owned()
    }
}

/// Which provider to load questions from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    File(PathBuf),
    Sqlite(String),
}

impl SourceConfig {
    /// Build the configured source behind a trait object.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if a database connection cannot be opened. File
    /// sources are not touched until they are loaded.
    pub async fn open(&self) -> Result<Arc<dyn QuestionSource>, LoadError> {
        match self {
            Self::File(path) => Ok(Arc::new(JsonFileSource::new(path.clone()))),
            Self::Sqlite(url) => {
                let repo = SqliteRepository::connect(url).await?;
                repo.migrate().await?;
                Ok(Arc::new(repo))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Question;

    fn bank(name: &str, count: usize) -> Bank {
        let questions = (0..count)
            .map(|i| Question::new(format!("{name} Q{i}"), vec!["x".into(), "y".into()], 0).unwrap())
            .collect();
        Bank::new(name, questions)
    }

    #[tokio::test]
    async fn in_memory_returns_copies_in_order() {
        let source = InMemorySource::new(vec![bank("One", 2), bank("Two", 3)]);
        let first = source.load_all_banks().await.unwrap();
        let second = source.load_all_banks().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].name(), "One");
        assert_eq!(first[1].len(), 3);
    }

    #[tokio::test]
    async fn default_in_memory_source_is_empty() {
        let source = InMemorySource::default();
        assert!(source.load_all_banks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn file_config_opens_lazily() {
        let config = SourceConfig::File(PathBuf::from("definitely/missing.json"));
        let source = config.open().await.unwrap();
        assert!(source.describe().contains("missing.json"));
        let err = source.load_all_banks().await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }
}
