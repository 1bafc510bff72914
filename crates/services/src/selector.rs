use log::debug;
use quiz_core::model::{Bank, Question, RANDOM_SAMPLE_SIZE, SelectionScope};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::SelectionError;

/// Resolve a scope into a fresh, owned list of questions.
///
/// The returned vector never aliases the banks, so callers may shuffle it.
/// `rng` is only consulted for `SelectionScope::RandomFifteen`.
///
/// # Errors
///
/// Returns `SelectionError::UnknownBank` when a `SingleBank` index is past the
/// last bank.
pub fn resolve<R: Rng + ?Sized>(
    banks: &[Bank],
    scope: SelectionScope,
    rng: &mut R,
) -> Result<Vec<Question>, SelectionError> {
    let questions = match scope {
        SelectionScope::SingleBank(index) => banks
            .get(index)
            .map(|bank| bank.questions().to_vec())
            .ok_or(SelectionError::UnknownBank {
                index,
                bank_count: banks.len(),
            })?,
        SelectionScope::AllBanksMixed => all_questions(banks),
        SelectionScope::RandomFifteen => {
            let all = all_questions(banks);
            if all.len() <= RANDOM_SAMPLE_SIZE {
                all
            } else {
                all.choose_multiple(rng, RANDOM_SAMPLE_SIZE)
                    .cloned()
                    .collect()
            }
        }
    };

    debug!("scope {scope:?} resolved to {} questions", questions.len());
    Ok(questions)
}

fn all_questions(banks: &[Bank]) -> Vec<Question> {
    let total = banks.iter().map(Bank::len).sum();
    let mut all = Vec::with_capacity(total);
    for bank in banks {
        all.extend_from_slice(bank.questions());
    }
    all
}
