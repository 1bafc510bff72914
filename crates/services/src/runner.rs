use std::io::{BufRead, Write};

use log::{info, warn};
use quiz_core::model::labels::{ABORT_KEYWORD, label_for, last_label};
use quiz_core::model::{AnswerInput, Question, QuizStats};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::QuizError;

/// Drives a line-based quiz over any reader/writer pair.
///
/// Production wires this to locked stdin/stdout; tests use in-memory buffers.
pub struct QuizRunner<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> QuizRunner<I, O> {
    #[must_use]
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub(crate) fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    #[must_use]
    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }

    /// Read one line, without its line ending. `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced rather than rejected so it reaches the
    /// re-prompt path like any other unrecognised input.
    pub(crate) fn read_line(&mut self) -> Result<Option<String>, QuizError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    /// Shuffle `questions` and ask them one by one until they run out or the
    /// user aborts.
    ///
    /// The aborted question is not scored. End of input counts as an abort.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Io` if reading input or writing output fails.
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        mut questions: Vec<Question>,
        rng: &mut R,
    ) -> Result<QuizStats, QuizError> {
        questions.shuffle(rng);
        let mut stats = QuizStats::new();
        writeln!(
            self.output,
            "\nStarting quiz with {} questions...",
            questions.len()
        )?;

        for (idx, question) in questions.iter().enumerate() {
            match self.ask(question, idx + 1)? {
                AnswerInput::Abort => {
                    info!("quiz aborted at question {} of {}", idx + 1, questions.len());
                    writeln!(self.output, "Quiz ended early by user.")?;
                    break;
                }
                AnswerInput::Choice(chosen) => {
                    if stats.record(question, chosen) {
                        writeln!(self.output, "Correct!\n")?;
                    } else {
                        writeln!(self.output, "Incorrect.\n")?;
                    }
                }
            }
        }

        Ok(stats)
    }

    /// Present one question and block until a valid answer or the abort keyword.
    fn ask(&mut self, question: &Question, number: usize) -> Result<AnswerInput, QuizError> {
        writeln!(self.output, "\nQ{number}: {}", question.text())?;
        for (i, option) in question.options().iter().enumerate() {
            let label = label_for(i).unwrap_or('?');
            writeln!(self.output, "  {label}. {option}")?;
        }

        let letters = match last_label(question.option_count()) {
            Some('A') | None => "A".to_owned(),
            Some(last) => format!("A-{last}"),
        };

        loop {
            write!(
                self.output,
                "Your answer ({letters}, or {ABORT_KEYWORD} to quit): "
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(AnswerInput::Abort);
            };
            match AnswerInput::parse(&line, question.option_count()) {
                Ok(answer) => return Ok(answer),
                Err(err) => {
                    warn!("{err}");
                    writeln!(self.output, "Please choose a valid letter.")?;
                }
            }
        }
    }
}
