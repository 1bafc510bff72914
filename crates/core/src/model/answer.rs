use thiserror::Error;

use crate::model::labels::{ABORT_KEYWORD, index_for};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("not a valid option letter: {raw:?}")]
    InvalidAnswer { raw: String },
}

/// What the user typed at a question prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerInput {
    /// Zero-based index of the chosen option.
    Choice(usize),
    /// The abort keyword; ends the quiz without scoring the current question.
    Abort,
}

impl AnswerInput {
    /// Parses one line of input for a question with `option_count` options.
    ///
    /// The abort keyword wins over an option with the same letter.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::InvalidAnswer` for anything that is not a single
    /// valid option letter or the abort keyword.
    pub fn parse(raw: &str, option_count: usize) -> Result<Self, AnswerError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(AnswerError::InvalidAnswer {
                raw: trimmed.to_owned(),
            });
        };

        if letter.eq_ignore_ascii_case(&ABORT_KEYWORD) {
            return Ok(Self::Abort);
        }

        index_for(letter, option_count)
            .map(Self::Choice)
            .ok_or_else(|| AnswerError::InvalidAnswer {
                raw: trimmed.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letters_in_either_case() {
        assert_eq!(AnswerInput::parse("a", 4), Ok(AnswerInput::Choice(0)));
        assert_eq!(AnswerInput::parse(" D \n", 4), Ok(AnswerInput::Choice(3)));
    }

    #[test]
    fn abort_keyword_is_distinct_from_answers() {
        assert_eq!(AnswerInput::parse("q", 4), Ok(AnswerInput::Abort));
        assert_eq!(AnswerInput::parse("Q", 20), Ok(AnswerInput::Abort));
    }

    #[test]
    fn rejects_letters_past_last_option() {
        assert!(AnswerInput::parse("E", 4).is_err());
    }

    #[test]
    fn rejects_words_and_blank_lines() {
        for raw in ["", "   ", "AB", "quit", "1"] {
            assert_eq!(
                AnswerInput::parse(raw, 4),
                Err(AnswerError::InvalidAnswer {
                    raw: raw.trim().to_owned()
                }),
                "input {raw:?}"
            );
        }
    }
}
