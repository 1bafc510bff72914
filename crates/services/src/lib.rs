#![forbid(unsafe_code)]

pub mod error;
pub mod menu;
pub mod report;
pub mod runner;
pub mod selector;

pub use error::{QuizError, SelectionError};
pub use report::ScoreReport;
pub use runner::QuizRunner;
pub use selector::resolve;
