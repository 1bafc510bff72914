use std::io::{BufRead, Write};

use log::warn;
use quiz_core::model::{Bank, RANDOM_SAMPLE_SIZE, SelectionScope};

use crate::error::QuizError;
use crate::runner::QuizRunner;

impl<I: BufRead, O: Write> QuizRunner<I, O> {
    /// Show the scope menu until the user picks a valid entry.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InputClosed` if input ends before a valid choice and
    /// `QuizError::Io` on read/write failures.
    pub fn choose_scope(&mut self, banks: &[Bank]) -> Result<SelectionScope, QuizError> {
        loop {
            write_menu(self.output_mut(), banks)?;

            let Some(line) = self.read_line()? else {
                return Err(QuizError::InputClosed);
            };
            match SelectionScope::from_menu_choice(&line, banks.len()) {
                Ok(scope) => return Ok(scope),
                Err(err) => {
                    warn!("{err}");
                    writeln!(self.output_mut(), "Invalid input. Try again.")?;
                }
            }
        }
    }
}

fn write_menu<W: Write>(out: &mut W, banks: &[Bank]) -> Result<(), QuizError> {
    let total: usize = banks.iter().map(Bank::len).sum();
    let count = banks.len();

    writeln!(out, "\n=== Main Menu ===")?;
    for (i, bank) in banks.iter().enumerate() {
        writeln!(out, "{}. {} ({} questions)", i + 1, bank.name(), bank.len())?;
    }
    writeln!(out, "{}. All games mixed ({total} questions)", count + 1)?;
    writeln!(
        out,
        "{}. Random {RANDOM_SAMPLE_SIZE} from all games",
        count + 2
    )?;
    write!(out, "Choose 1-{}: ", SelectionScope::max_choice(count))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Question;
    use std::io::Cursor;

    fn banks() -> Vec<Bank> {
        let q = |t: &str| Question::new(t, vec!["a".into(), "b".into()], 0).unwrap();
        vec![
            Bank::new("Game 1", vec![q("one"), q("two")]),
            Bank::new("Game 2", vec![q("three"), q("four"), q("five")]),
        ]
    }

    fn runner(input: &str) -> QuizRunner<Cursor<Vec<u8>>, Vec<u8>> {
        QuizRunner::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn menu_lists_banks_and_synthetic_scopes() {
        let mut runner = runner("1\n");
        let scope = runner.choose_scope(&banks()).unwrap();
        assert_eq!(scope, SelectionScope::SingleBank(0));

        let out = String::from_utf8(runner.into_parts().1).unwrap();
        assert!(out.contains("=== Main Menu ==="));
        assert!(out.contains("1. Game 1 (2 questions)"));
        assert!(out.contains("2. Game 2 (3 questions)"));
        assert!(out.contains("3. All games mixed (5 questions)"));
        assert!(out.contains("4. Random 15 from all games"));
        assert!(out.contains("Choose 1-4: "));
    }

    #[test]
    fn malformed_choices_redisplay_the_menu() {
        let mut runner = runner("x\n0\n99\n3\n");
        let scope = runner.choose_scope(&banks()).unwrap();
        assert_eq!(scope, SelectionScope::AllBanksMixed);

        let out = String::from_utf8(runner.into_parts().1).unwrap();
        assert_eq!(out.matches("Invalid input. Try again.").count(), 3);
        assert_eq!(out.matches("=== Main Menu ===").count(), 4);
    }

    #[test]
    fn random_scope_is_last_entry() {
        let mut runner = runner("4\n");
        assert_eq!(
            runner.choose_scope(&banks()).unwrap(),
            SelectionScope::RandomFifteen
        );
    }

    #[test]
    fn invalid_utf8_choice_redisplays_the_menu() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"1\n");
        let mut runner = QuizRunner::new(Cursor::new(input), Vec::new());
        assert_eq!(
            runner.choose_scope(&banks()).unwrap(),
            SelectionScope::SingleBank(0)
        );

        let out = String::from_utf8(runner.into_parts().1).unwrap();
        assert_eq!(out.matches("Invalid input. Try again.").count(), 1);
        assert_eq!(out.matches("=== Main Menu ===").count(), 2);
    }

    #[test]
    fn closed_input_is_reported() {
        let mut runner = runner("nope\n");
        let err = runner.choose_scope(&banks()).unwrap_err();
        assert!(matches!(err, QuizError::InputClosed));
    }
}
