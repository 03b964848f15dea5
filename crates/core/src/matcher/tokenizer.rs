//! Word tokenization for title matching.

use unicode_categories::UnicodeCategories;

/// Lowercase `s` and split it into alphanumeric word tokens.
///
/// Any character outside the Unicode letter (`L*`) and decimal digit (`Nd`)
/// categories separates tokens, so letter numbers like `Ⅱ` and superscripts
/// like `²` are separators. Scripts without word spacing (e.g. Japanese) are not segmented, so a run
/// of ideographs comes out as one token.
pub fn tokenize(s: &str) -> Vec<String> {
    s.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_letter() || c.is_number_decimal_digit()
}

/// Whether a token is made only of decimal digits (episode numbers, years).
pub(crate) fn is_digit_only(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_number_decimal_digit())
}
