use async_trait::async_trait;
use log::debug;
use quiz_core::model::Bank;
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{group_question_rows, map_question_row, usize_to_i64};
use crate::repository::{LoadError, QuestionSource};

fn conn<E: core::fmt::Display>(e: E) -> LoadError {
    LoadError::Connection(e.to_string())
}

/// Row counts written by [`SqliteRepository::replace_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub games: usize,
    pub questions: usize,
    pub options: usize,
}

impl SqliteRepository {
    /// Replace every stored game with `banks`.
    ///
    /// Runs in a single transaction; nothing is changed if any insert fails.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Connection` if a statement or the commit fails.
    pub async fn replace_all(&self, banks: &[Bank]) -> Result<ImportSummary, LoadError> {
        let mut tx = self.pool.begin().await.map_err(conn)?;

        // children first, foreign keys
        for table in ["options", "questions", "games"] {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&mut *tx)
                .await
                .map_err(conn)?;
        }

        let mut summary = ImportSummary::default();
        for bank in banks {
            let game_id = sqlx::query("INSERT INTO games (name) VALUES (?1)")
                .bind(bank.name())
                .execute(&mut *tx)
                .await
                .map_err(conn)?
                .last_insert_rowid();
            summary.games += 1;

            for question in bank.questions() {
                let question_id = sqlx::query(
                    r"
                    INSERT INTO questions (game_id, question_text, correct_option_index)
                    VALUES (?1, ?2, ?3)
                    ",
                )
                .bind(game_id)
                .bind(question.text())
                .bind(usize_to_i64("correct_option_index", question.correct_index())?)
                .execute(&mut *tx)
                .await
                .map_err(conn)?
                .last_insert_rowid();
                summary.questions += 1;

                for (index, text) in question.options().iter().enumerate() {
                    sqlx::query(
                        r"
                        INSERT INTO options (question_id, option_index, option_text)
                        VALUES (?1, ?2, ?3)
                        ",
                    )
                    .bind(question_id)
                    .bind(usize_to_i64("option_index", index)?)
                    .bind(text.as_str())
                    .execute(&mut *tx)
                    .await
                    .map_err(conn)?;
                    summary.options += 1;
                }
            }
        }

        tx.commit().await.map_err(conn)?;
        Ok(summary)
    }

    async fn load_bank(&self, game_id: i64, name: String) -> Result<Bank, LoadError> {
        let rows = sqlx::query(
            r"
            SELECT
                q.id AS question_id,
                q.question_text,
                q.correct_option_index,
                o.option_index,
                o.option_text
            FROM questions q
            JOIN options o ON q.id = o.question_id
            WHERE q.game_id = ?1
            ORDER BY q.id, o.option_index
            ",
        )
        .bind(game_id)
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let rows = rows
            .iter()
            .map(map_question_row)
            .collect::<Result<Vec<_>, _>>()?;
        let questions = group_question_rows(&name, rows)?;
        debug!("game {game_id} ({name}): {} questions", questions.len());
        Ok(Bank::new(name, questions))
    }
}

#[async_trait]
impl QuestionSource for SqliteRepository {
    async fn load_all_banks(&self) -> Result<Vec<Bank>, LoadError> {
        let games = sqlx::query("SELECT id, name FROM games ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(conn)?;

        let mut banks = Vec::with_capacity(games.len());
        for game in games {
            let id: i64 = game.try_get("id").map_err(conn)?;
            let name: String = game.try_get("name").map_err(conn)?;
            banks.push(self.load_bank(id, name).await?);
        }
        Ok(banks)
    }

    fn describe(&self) -> String {
        format!("database {}", self.url)
    }
}
