#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    AnswerError, AnswerInput, AnswerRecord, Bank, Question, QuestionError, QuizStats, ScopeError,
    SelectionScope,
};
