use crate::model::Question;

/// A named, ordered group of questions (a "game").
///
/// The name is only a display label; question order is the order the source
/// produced them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    name: String,
    questions: Vec<Question>,
}

impl Bank {
    #[must_use]
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Default label for the bank at `position` (zero-based) when a source has no name for it.
#[must_use]
pub fn default_bank_name(position: usize) -> String {
    format!("Game {}", position + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_are_one_based() {
        assert_eq!(default_bank_name(0), "Game 1");
        assert_eq!(default_bank_name(4), "Game 5");
    }

    #[test]
    fn empty_bank_reports_len_zero() {
        let bank = Bank::new("Empty", Vec::new());
        assert!(bank.is_empty());
        assert_eq!(bank.len(), 0);
        assert_eq!(bank.name(), "Empty");
    }
}
