mod answer;
mod bank;
pub mod labels;
mod question;
mod scope;
mod stats;

pub use answer::{AnswerError, AnswerInput};
pub use bank::{Bank, default_bank_name};
pub use question::{Question, QuestionError};
pub use scope::{RANDOM_SAMPLE_SIZE, ScopeError, SelectionScope};
pub use stats::{AnswerRecord, QuizStats};
