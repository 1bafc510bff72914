//! Flat-file question banks.
//!
//! The file holds a top-level `games` list; each game has an optional `name`
//! and a list of questions shaped as `{"question", "content", "correct"}`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use quiz_core::model::{Bank, Question, default_bank_name};
use serde::Deserialize;

use crate::repository::{LoadError, QuestionSource};

/// Whole question file as stored on disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizFile {
    #[serde(default)]
    pub games: Vec<GameRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub content: Vec<String>,
    pub correct: usize,
}

impl QuizFile {
    /// Parse the JSON text of a question file.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Parse` if the text is not valid JSON of the expected shape.
    pub fn parse(raw: &str) -> Result<Self, LoadError> {
        serde_json::from_str(raw).map_err(|e| LoadError::Parse(e.to_string()))
    }

    /// Validate every record and convert into domain banks.
    ///
    /// Games without a name are labelled by their 1-based position.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidQuestion` for the first record that fails validation.
    pub fn into_banks(self) -> Result<Vec<Bank>, LoadError> {
        self.games
            .into_iter()
            .enumerate()
            .map(|(position, game)| {
                let name = game
                    .name
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(|| default_bank_name(position));
                let questions = game
                    .questions
                    .into_iter()
                    .enumerate()
                    .map(|(i, record)| {
                        Question::new(record.question, record.content, record.correct).map_err(
                            |source| LoadError::InvalidQuestion {
                                bank: name.clone(),
                                position: i + 1,
                                source,
                            },
                        )
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Bank::new(name, questions))
            })
            .collect()
    }
}

/// Reads banks from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read and parse a question file.
///
/// # Errors
///
/// Returns `LoadError::NotFound` for a missing file, `LoadError::Io` for other
/// read failures and the parse/validation errors of [`QuizFile`].
pub async fn read_banks(path: &Path) -> Result<Vec<Bank>, LoadError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let banks = QuizFile::parse(&raw)?.into_banks()?;
    debug!("loaded {} banks from {}", banks.len(), path.display());
    Ok(banks)
}

#[async_trait]
impl QuestionSource for JsonFileSource {
    async fn load_all_banks(&self) -> Result<Vec<Bank>, LoadError> {
        read_banks(&self.path).await
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionError;

    const SAMPLE: &str = r#"{
        "games": [
            {
                "questions": [
                    {"question": "Capital of France?", "content": ["Berlin", "Paris", "Rome"], "correct": 1},
                    {"question": "2 + 2?", "content": ["4", "5"], "correct": 0}
                ]
            },
            {
                "name": "Science",
                "questions": [
                    {"question": "H2O is?", "content": ["Water", "Salt"], "correct": 0}
                ]
            }
        ]
    }"#;

    #[test]
    fn parses_games_in_order_with_default_names() {
        let banks = QuizFile::parse(SAMPLE).unwrap().into_banks().unwrap();
        assert_eq!(banks.len(), 2);
        assert_eq!(banks[0].name(), "Game 1");
        assert_eq!(banks[1].name(), "Science");
        assert_eq!(banks[0].questions()[0].text(), "Capital of France?");
        assert_eq!(
            banks[0].questions()[0].options(),
            &["Berlin".to_string(), "Paris".to_string(), "Rome".to_string()]
        );
        assert_eq!(banks[0].questions()[0].correct_index(), 1);
    }

    #[test]
    fn missing_lists_mean_empty() {
        assert!(QuizFile::parse("{}").unwrap().into_banks().unwrap().is_empty());
        let banks = QuizFile::parse(r#"{"games": [{}]}"#)
            .unwrap()
            .into_banks()
            .unwrap();
        assert_eq!(banks.len(), 1);
        assert!(banks[0].is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = QuizFile::parse(r#"{"games": [{"questions": [{"question": 1}]}]}"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(matches!(QuizFile::parse("not json"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn out_of_range_answer_is_rejected_with_location() {
        let raw = r#"{"games": [{"questions": [
            {"question": "ok", "content": ["a"], "correct": 0},
            {"question": "bad", "content": ["a", "b"], "correct": 2}
        ]}]}"#;
        let err = QuizFile::parse(raw).unwrap().into_banks().unwrap_err();
        match err {
            LoadError::InvalidQuestion {
                bank,
                position,
                source,
            } => {
                assert_eq!(bank, "Game 1");
                assert_eq!(position, 2);
                assert_eq!(
                    source,
                    QuestionError::CorrectIndexOutOfRange { index: 2, count: 2 }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn reads_file_from_disk_twice_with_equal_results() {
        let path = std::env::temp_dir().join(format!("quiz_json_source_{}.json", std::process::id()));
        tokio::fs::write(&path, SAMPLE).await.unwrap();

        let source = JsonFileSource::new(&path);
        let first = source.load_all_banks().await.unwrap();
        let second = source.load_all_banks().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.iter().map(Bank::len).sum::<usize>(), 3);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let err = read_banks(Path::new("no/such/questions.json")).await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }
}
