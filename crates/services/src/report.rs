use std::fmt;

use quiz_core::model::{AnswerRecord, QuizStats};

/// Read-only summary of a finished quiz, rendered through `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport<'a> {
    pub total_answered: usize,
    pub correct: usize,
    pub wrong: usize,
    /// `None` when nothing was answered.
    pub score_percent: Option<u32>,
    pub missed: &'a [AnswerRecord],
}

impl<'a> ScoreReport<'a> {
    #[must_use]
    pub fn from_stats(stats: &'a QuizStats) -> Self {
        Self {
            total_answered: stats.total_answered(),
            correct: stats.correct_count(),
            wrong: stats.wrong_count(),
            score_percent: stats.score_percent(),
            missed: stats.missed(),
        }
    }
}

impl fmt::Display for ScoreReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== Quiz Summary ===")?;
        writeln!(f, "Questions answered: {}", self.total_answered)?;
        writeln!(f, "Correct: {}", self.correct)?;
        writeln!(f, "Incorrect: {}", self.wrong)?;

        if let Some(score) = self.score_percent {
            writeln!(f, "Score: {score}%")?;
        }

        if !self.missed.is_empty() {
            writeln!(f, "\nReview of incorrect questions:")?;
            for record in self.missed {
                writeln!(f, "- {}", record.question.text())?;
                writeln!(
                    f,
                    "  Your answer:    {}",
                    record.chosen_option().unwrap_or("?")
                )?;
                writeln!(f, "  Correct answer: {}\n", record.correct_option())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Question;

    fn capital() -> Question {
        Question::new(
            "Capital of France?",
            vec!["Berlin".into(), "Paris".into(), "Rome".into()],
            1,
        )
        .unwrap()
    }

    #[test]
    fn empty_stats_have_no_score_line() {
        let stats = QuizStats::new();
        let text = ScoreReport::from_stats(&stats).to_string();
        assert!(text.contains("Questions answered: 0"));
        assert!(text.contains("Correct: 0"));
        assert!(text.contains("Incorrect: 0"));
        assert!(!text.contains("Score:"));
        assert!(!text.contains("Review of incorrect questions"));
    }

    #[test]
    fn three_of_four_reports_75_percent() {
        let mut stats = QuizStats::new();
        let q = capital();
        stats.record(&q, 1);
        stats.record(&q, 1);
        stats.record(&q, 2);
        stats.record(&q, 1);

        let report = ScoreReport::from_stats(&stats);
        assert_eq!(report.score_percent, Some(75));
        assert_eq!(report.wrong, 1);
        assert!(report.to_string().contains("Score: 75%"));
    }

    #[test]
    fn review_lists_user_and_correct_options_in_order() {
        let mut stats = QuizStats::new();
        let first = capital();
        let second = Question::new("Largest planet?", vec!["Mars".into(), "Jupiter".into()], 1)
            .unwrap();
        stats.record(&first, 0);
        stats.record(&second, 0);

        let text = ScoreReport::from_stats(&stats).to_string();
        assert!(text.contains("Score: 0%"));
        assert!(text.contains("- Capital of France?\n  Your answer:    Berlin\n  Correct answer: Paris"));
        assert!(text.contains("- Largest planet?\n  Your answer:    Mars\n  Correct answer: Jupiter"));
        let first_at = text.find("Capital of France?").unwrap();
        let second_at = text.find("Largest planet?").unwrap();
        assert!(first_at < second_at);
    }
}
