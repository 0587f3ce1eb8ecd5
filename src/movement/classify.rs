//! Character classification for motions

/// Character categories for word motions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII letters, digits and underscore
    Word,
    /// Everything else
    NonWord,
}

/// Classify a character for word boundary detection
///
/// Each `char` is classified on its own: a combining mark following a letter
/// is a non-word character.
pub fn classify_char(c: char) -> CharClass {
    if is_word_char(c) {
        CharClass::Word
    } else {
        CharClass::NonWord
    }
}

/// Check if a character is part of a word
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
