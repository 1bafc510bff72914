//! Letter labels for question options ('A', 'B', ...).

/// Number of letters available for labelling options.
pub const MAX_OPTIONS: usize = 26;

/// Reserved input that ends a quiz early.
pub const ABORT_KEYWORD: char = 'Q';

/// Returns the label for the option at `index`, or `None` past 'Z'.
#[must_use]
pub fn label_for(index: usize) -> Option<char> {
    let offset = u8::try_from(index).ok().filter(|i| usize::from(*i) < MAX_OPTIONS)?;
    Some(char::from(b'A' + offset))
}

/// Resolves a letter (either case) to an option index for a question with
/// `option_count` options.
#[must_use]
pub fn index_for(letter: char, option_count: usize) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    if !upper.is_ascii_uppercase() {
        return None;
    }
    let index = usize::from(upper as u8 - b'A');
    (index < option_count.min(MAX_OPTIONS)).then_some(index)
}

/// Last valid label for a question with `option_count` options.
#[must_use]
pub fn last_label(option_count: usize) -> Option<char> {
    option_count.checked_sub(1).and_then(label_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_run_a_to_z() {
        assert_eq!(label_for(0), Some('A'));
        assert_eq!(label_for(3), Some('D'));
        assert_eq!(label_for(25), Some('Z'));
        assert_eq!(label_for(26), None);
    }

    #[test]
    fn index_lookup_is_case_insensitive_and_bounded() {
        assert_eq!(index_for('b', 4), Some(1));
        assert_eq!(index_for('B', 4), Some(1));
        assert_eq!(index_for('E', 4), None);
        assert_eq!(index_for('1', 4), None);
        assert_eq!(index_for('é', 4), None);
    }

    #[test]
    fn last_label_tracks_option_count() {
        assert_eq!(last_label(4), Some('D'));
        assert_eq!(last_label(1), Some('A'));
        assert_eq!(last_label(0), None);
    }
}
