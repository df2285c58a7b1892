//! Word tokenization for word-mode feature extraction.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Whether `ch` is a letter (`L*`) or number (`N*`) by Unicode general category.
///
/// Marks, symbols and letter-like symbols such as circled letters are not.
pub fn is_token_char(ch: char) -> bool {
    matches!(
        ch.general_category_group(),
        GeneralCategoryGroup::Letter | GeneralCategoryGroup::Number
    )
}

/// Split text into maximal runs of Unicode letters or numbers.
///
/// Every other code point is a separator and never appears in a token.
/// Tokens are returned in order of appearance, borrowing from `text`.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        match (is_token_char(ch), start) {
            (true, None) => start = Some(idx),
            (false, Some(begin)) => {
                tokens.push(&text[begin..idx]);
                start = None;
            }
            _ => {}
        }
    }

    if let Some(begin) = start {
        tokens.push(&text[begin..]);
    }

    tokens
}
