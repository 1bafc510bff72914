use crate::model::Question;

/// An incorrectly answered question together with the option the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question: Question,
    pub chosen: usize,
}

impl AnswerRecord {
    /// Text of the option the user selected.
    #[must_use]
    pub fn chosen_option(&self) -> Option<&str> {
        self.question.option(self.chosen)
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        self.question.correct_option()
    }
}

/// Running tally for one quiz session.
///
/// `total_answered == correct_count + missed.len()` holds after every call to
/// [`QuizStats::record`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizStats {
    total_answered: usize,
    correct_count: usize,
    missed: Vec<AnswerRecord>,
}

impl QuizStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores one answer. Returns `true` when `chosen` is the correct option.
    pub fn record(&mut self, question: &Question, chosen: usize) -> bool {
        self.total_answered += 1;
        if question.is_correct(chosen) {
            self.correct_count += 1;
            true
        } else {
            self.missed.push(AnswerRecord {
                question: question.clone(),
                chosen,
            });
            false
        }
    }

    #[must_use]
    pub fn total_answered(&self) -> usize {
        self.total_answered
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn wrong_count(&self) -> usize {
        self.total_answered - self.correct_count
    }

    /// Incorrect answers in the order they were given.
    #[must_use]
    pub fn missed(&self) -> &[AnswerRecord] {
        &self.missed
    }

    /// Percentage of correct answers, rounded half up. `None` when nothing was answered.
    #[must_use]
    pub fn score_percent(&self) -> Option<u32> {
        if self.total_answered == 0 {
            return None;
        }
        let total = self.total_answered as u64;
        let correct = self.correct_count as u64;
        let rounded = (correct * 200 + total) / (total * 2);
        u32::try_from(rounded).ok()
    }
}
