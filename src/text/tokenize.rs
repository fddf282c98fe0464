//! Tokenization strategies for review text.

/// Splits text into tokens.
pub trait Tokenizer {
    /// Tokenizes `text`; empty input yields an empty token list.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Word tokenizer that extracts alphanumeric word tokens.
///
/// Punctuation is dropped rather than emitted as its own token, and
/// internal apostrophes are kept so contractions survive as one word.
///
/// # Examples
///
/// ```
/// use calificar::text::{Tokenizer, WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
/// let tokens = tokenizer.tokenize("The tacos weren't bad!");
/// assert_eq!(tokens, vec!["The", "tacos", "weren't", "bad"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Creates a new word tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for ch in text.chars() {
            if ch.is_alphanumeric() || (ch == '\'' && !current.is_empty()) {
                current.push(ch);
            } else if !current.is_empty() {
                tokens.push(flush_token(&mut current));
            }
        }
        if !current.is_empty() {
            tokens.push(flush_token(&mut current));
        }

        tokens
    }
}

/// Takes the accumulated token, dropping any trailing apostrophes.
fn flush_token(current: &mut String) -> String {
    let token = current.trim_end_matches('\'').to_string();
    current.clear();
    token
}

/// Sentence tokenizer that segments on `.`, `!` and `?` boundaries.
///
/// A segment only counts as a sentence if it contains at least one
/// alphanumeric character; trailing text without a terminator is still
/// one sentence.
///
/// # Examples
///
/// ```
/// use calificar::text::{SentenceTokenizer, Tokenizer};
///
/// let tokenizer = SentenceTokenizer::new();
/// let sentences = tokenizer.tokenize("Great food. Would come again!");
/// assert_eq!(sentences, vec!["Great food", "Would come again"]);
///
/// assert!(tokenizer.tokenize("...").is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceTokenizer;

impl SentenceTokenizer {
    /// Creates a new sentence tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for SentenceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();

        for ch in text.chars() {
            if matches!(ch, '.' | '!' | '?') {
                push_sentence(&mut sentences, &mut current);
            } else {
                current.push(ch);
            }
        }
        push_sentence(&mut sentences, &mut current);

        sentences
    }
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    if current.chars().any(char::is_alphanumeric) {
        sentences.push(current.trim().to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenizer_basic() {
        let tokens = WordTokenizer::new().tokenize("Hello, world!");
        assert_eq!(tokens, vec!["Hello", "world"]);
    }

    #[test]
    fn test_word_tokenizer_contractions() {
        let tokens = WordTokenizer::new().tokenize("don't stop");
        assert_eq!(tokens, vec!["don't", "stop"]);
    }

    #[test]
    fn test_word_tokenizer_trailing_apostrophe() {
        let tokens = WordTokenizer::new().tokenize("the dogs' bowls");
        assert_eq!(tokens, vec!["the", "dogs", "bowls"]);
    }

    #[test]
    fn test_word_tokenizer_empty() {
        assert!(WordTokenizer::new().tokenize("").is_empty());
        assert!(WordTokenizer::new().tokenize("  ... !?").is_empty());
    }

    #[test]
    fn test_sentence_tokenizer_multiple_sentences() {
        let sentences = SentenceTokenizer::new().tokenize("One. Two! Three?");
        assert_eq!(sentences, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_sentence_tokenizer_no_terminator() {
        let sentences = SentenceTokenizer::new().tokenize("no punctuation here");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_sentence_tokenizer_repeated_terminators() {
        let sentences = SentenceTokenizer::new().tokenize("Wow!!! So good...");
        assert_eq!(sentences, vec!["Wow", "So good"]);
    }

    #[test]
    fn test_sentence_tokenizer_empty() {
        assert!(SentenceTokenizer::new().tokenize("").is_empty());
    }
}
