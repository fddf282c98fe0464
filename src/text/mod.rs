//! Text processing: tokenization and vectorization.
//!
//! Tokenizers segment raw review text into words or sentences; the
//! vectorizers turn document collections into numeric matrices for the
//! decision models. Vocabulary and weighting are learned once during
//! `fit` and reused unchanged at inference, so a token never seen in
//! training simply contributes no signal.

pub mod tokenize;
pub mod vectorize;

pub use tokenize::{SentenceTokenizer, Tokenizer, WordTokenizer};
pub use vectorize::{CountVectorizer, TfidfVectorizer};
