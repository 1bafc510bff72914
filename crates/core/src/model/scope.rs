use thiserror::Error;

/// Upper bound on the size of a random session.
pub const RANDOM_SAMPLE_SIZE: usize = 15;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScopeError {
    #[error("invalid selection {raw:?}, expected a number between 1 and {max}")]
    InvalidSelection { raw: String, max: usize },
}

/// Which questions a session covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionScope {
    /// One bank by zero-based position, in source order.
    SingleBank(usize),
    /// Every bank concatenated, bank order then question order.
    AllBanksMixed,
    /// A random sample of at most `RANDOM_SAMPLE_SIZE` questions from all banks.
    RandomFifteen,
}

impl SelectionScope {
    /// Maps a 1-based menu choice onto a scope.
    ///
    /// `1..=N` pick a single bank, `N + 1` mixes every bank and `N + 2` is the
    /// random sample, where `N` is `bank_count`.
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::InvalidSelection` for non-numeric input or a number
    /// outside `1..=N + 2`.
    pub fn from_menu_choice(raw: &str, bank_count: usize) -> Result<Self, ScopeError> {
        let max = Self::max_choice(bank_count);
        let trimmed = raw.trim();
        let invalid = || ScopeError::InvalidSelection {
            raw: trimmed.to_owned(),
            max,
        };

        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let pick: usize = trimmed.parse().map_err(|_| invalid())?;

        match pick {
            0 => Err(invalid()),
            n if n <= bank_count => Ok(Self::SingleBank(n - 1)),
            n if n == bank_count + 1 => Ok(Self::AllBanksMixed),
            n if n == bank_count + 2 => Ok(Self::RandomFifteen),
            _ => Err(invalid()),
        }
    }

    /// Highest valid menu number for `bank_count` banks.
    #[must_use]
    pub fn max_choice(bank_count: usize) -> usize {
        bank_count + 2
    }
}
