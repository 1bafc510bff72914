//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the selector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionError {
    #[error("bank {index} does not exist, there are {bank_count} banks")]
    UnknownBank { index: usize, bank_count: usize },
}

/// Errors emitted while driving the console quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("input closed before a selection was made")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
