use std::collections::HashMap;

use quiz_core::model::Question;
use sqlx::Row;

use crate::repository::LoadError;

fn ser<E: core::fmt::Display>(e: E) -> LoadError {
    LoadError::Serialization(e.to_string())
}

fn i64_to_usize(field: &'static str, v: i64) -> Result<usize, LoadError> {
    usize::try_from(v).map_err(|_| LoadError::Serialization(format!("invalid {field}: {v}")))
}

pub(crate) fn usize_to_i64(field: &'static str, v: usize) -> Result<i64, LoadError> {
    i64::try_from(v).map_err(|_| LoadError::Serialization(format!("{field} overflow")))
}

/// One row of the question/option join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QuestionRow {
    pub question_id: i64,
    pub question_text: String,
    pub correct_option_index: i64,
    pub option_index: i64,
    pub option_text: String,
}

pub(crate) fn map_question_row(row: &sqlx::sqlite::SqliteRow) -> Result<QuestionRow, LoadError> {
    Ok(QuestionRow {
        question_id: row.try_get("question_id").map_err(ser)?,
        question_text: row.try_get("question_text").map_err(ser)?,
        correct_option_index: row.try_get("correct_option_index").map_err(ser)?,
        option_index: row.try_get("option_index").map_err(ser)?,
        option_text: row.try_get("option_text").map_err(ser)?,
    })
}

struct PendingQuestion {
    text: String,
    correct: i64,
    options: Vec<(usize, String)>,
}

/// Rebuild questions from joined rows.
///
/// Questions keep the order in which their id first appears. Options are placed
/// by their stored index, which must run `0..n` without gaps or repeats.
pub(crate) fn group_question_rows(
    bank: &str,
    rows: impl IntoIterator<Item = QuestionRow>,
) -> Result<Vec<Question>, LoadError> {
    let mut order: Vec<i64> = Vec::new();
    let mut pending: HashMap<i64, PendingQuestion> = HashMap::new();

    for row in rows {
        let option_index = i64_to_usize("option_index", row.option_index)?;
        let entry = pending.entry(row.question_id).or_insert_with(|| {
            order.push(row.question_id);
            PendingQuestion {
                text: row.question_text,
                correct: row.correct_option_index,
                options: Vec::new(),
            }
        });
        entry.options.push((option_index, row.option_text));
    }

    let mut questions = Vec::with_capacity(order.len());
    for (position, id) in order.into_iter().enumerate() {
        let Some(mut q) = pending.remove(&id) else {
            continue;
        };
        q.options.sort_by_key(|(index, _)| *index);
        for (expected, (index, _)) in q.options.iter().enumerate() {
            if *index != expected {
                return Err(LoadError::Serialization(format!(
                    "question {id} has option index {index} where {expected} was expected"
                )));
            }
        }

        let correct = i64_to_usize("correct_option_index", q.correct)?;
        let options = q.options.into_iter().map(|(_, text)| text).collect();
        let question =
            Question::new(q.text, options, correct).map_err(|source| LoadError::InvalidQuestion {
                bank: bank.to_owned(),
                position: position + 1,
                source,
            })?;
        questions.push(question);
    }

    Ok(questions)
}
