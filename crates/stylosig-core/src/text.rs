//! Text decomposition.
//!
//! Splits text into sentences, sentences into clauses, and clauses into words
//! using fixed punctuation delimiters. Every split borrows from the input, so
//! no characters are lost apart from the delimiters themselves.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of sentence-terminal punctuation.
static SENTENCE_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Runs of clause-separator punctuation.
static CLAUSE_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,:;]+").expect("valid regex"));

/// Split text into sentences on runs of `.`, `!` and `?`.
///
/// A trailing empty remainder (text ending in a terminator) is dropped.
/// Empty pieces anywhere else are kept.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences: Vec<&str> = SENTENCE_DELIMITERS.split(text).collect();
    if sentences.last().is_some_and(|s| s.is_empty()) {
        sentences.pop();
    }
    sentences
}

/// Split a sentence into clauses on runs of `,`, `:` and `;`.
///
/// Empty clauses are kept so clause counts reflect the punctuation.
pub fn split_clauses(sentence: &str) -> Vec<&str> {
    CLAUSE_DELIMITERS.split(sentence).collect()
}

/// Split a clause into words on runs of whitespace.
pub fn split_words(clause: &str) -> Vec<&str> {
    clause.split_whitespace().collect()
}

/// A text flattened into its sentences, clauses and words.
///
/// Clauses are collected across all sentences and words across all clauses,
/// in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decomposition<'a> {
    /// Sentences, terminators stripped.
    pub sentences: Vec<&'a str>,
    /// Clauses of every sentence.
    pub clauses: Vec<&'a str>,
    /// Words of every clause.
    pub words: Vec<&'a str>,
}

impl<'a> Decomposition<'a> {
    /// Decompose `text` into sentences, clauses and words.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn of(text: &'a str) -> Self {
        let sentences = split_sentences(text);
        let clauses: Vec<&'a str> = sentences.iter().flat_map(|&s| split_clauses(s)).collect();
        let words: Vec<&'a str> = clauses.iter().flat_map(|&c| split_words(c)).collect();

        tracing::trace!(
            sentences = sentences.len(),
            clauses = clauses.len(),
            words = words.len(),
            "decomposed text"
        );

        Self {
            sentences,
            clauses,
            words,
        }
    }
}

/// Length of a token in characters (Unicode scalar values, not bytes).
pub fn char_len(token: &str) -> usize {
    token.chars().count()
}
