//! Stylometric signatures.
//!
//! A [`Signature`] is a fixed six-component vector describing the style of a
//! text:
//!
//! | Component | Meaning                                         |
//! |-----------|-------------------------------------------------|
//! | `wal`     | average word length, in characters              |
//! | `ttr`     | type-token ratio (distinct words / words)       |
//! | `hlr`     | hapax legomena ratio (once-only words / words)  |
//! | `sal`     | average sentence length, in characters          |
//! | `sac`     | sentence complexity (clauses / sentences)       |
//! | `pal`     | average clause length, in characters            |
//!
//! Every divisor is floored to 1, so empty or degenerate text yields a
//! well-defined signature instead of an error.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::compare;
use crate::error::AnalysisError;
use crate::frequency::{count_distinct_words, count_unique_words};
use crate::text::{Decomposition, char_len};

/// Six-component style vector, in the order `[wal, ttr, hlr, sal, sac, pal]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Signature {
    /// Average word length.
    pub wal: f64,
    /// Type-token ratio.
    pub ttr: f64,
    /// Hapax legomena ratio.
    pub hlr: f64,
    /// Average sentence length.
    pub sal: f64,
    /// Average sentence complexity (clauses per sentence).
    pub sac: f64,
    /// Average clause length.
    pub pal: f64,
}

impl Signature {
    /// Number of components in a signature.
    pub const LEN: usize = 6;

    /// Short component names, in vector order.
    pub const NAMES: [&'static str; Self::LEN] = ["wal", "ttr", "hlr", "sal", "sac", "pal"];

    /// Human-readable component labels, in vector order.
    pub const LABELS: [&'static str; Self::LEN] = [
        "Average word length",
        "Type-token ratio",
        "Hapax legomena ratio",
        "Average sentence length",
        "Sentence complexity",
        "Average clause length",
    ];

    /// Components as an array in the fixed order.
    pub const fn as_array(&self) -> [f64; Self::LEN] {
        [self.wal, self.ttr, self.hlr, self.sal, self.sac, self.pal]
    }

    /// First component that is NaN or infinite, as `(name, value)`.
    pub fn first_non_finite(&self) -> Option<(&'static str, f64)> {
        Self::NAMES
            .into_iter()
            .zip(self.as_array())
            .find(|(_, value)| !value.is_finite())
    }

    /// Dissimilarity to another signature (see [`compare::distance`]).
    pub fn distance(&self, other: &Self) -> f64 {
        compare::distance(&self.as_array(), &other.as_array())
    }
}

impl From<[f64; Signature::LEN]> for Signature {
    fn from([wal, ttr, hlr, sal, sac, pal]: [f64; Signature::LEN]) -> Self {
        Self {
            wal,
            ttr,
            hlr,
            sal,
            sac,
            pal,
        }
    }
}

impl TryFrom<&[f64]> for Signature {
    type Error = AnalysisError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let array: [f64; Self::LEN] =
            values.try_into().map_err(|_| AnalysisError::SignatureArity {
                expected: Self::LEN,
                found: values.len(),
            })?;
        Ok(Self::from(array))
    }
}

/// A signature together with the counts it was derived from.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SignatureReport {
    /// The computed signature.
    pub signature: Signature,
    /// Number of sentences found.
    pub sentences: usize,
    /// Number of clauses found across all sentences.
    pub clauses: usize,
    /// Number of words found across all clauses.
    pub words: usize,
    /// Number of distinct case-insensitive word forms.
    pub distinct_words: usize,
    /// Number of word forms that occur exactly once.
    pub hapax_words: usize,
}

/// Compute the signature of a text.
pub fn compute_signature(text: &str) -> Signature {
    analyze_signature(text).signature
}

/// Compute the signature of a text along with its raw counts.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze_signature(text: &str) -> SignatureReport {
    let Decomposition {
        sentences,
        clauses,
        words,
    } = Decomposition::of(text);

    let num_words = words.len().max(1) as f64;
    let num_sentences = sentences.len().max(1) as f64;
    let num_clauses = clauses.len().max(1) as f64;

    let distinct_words = count_distinct_words(&words);
    let hapax_words = count_unique_words(&words);

    let word_chars: usize = words.iter().map(|w| char_len(w)).sum();
    let sentence_chars: usize = sentences.iter().map(|s| char_len(s)).sum();
    let clause_chars: usize = clauses.iter().map(|c| char_len(c)).sum();

    let signature = Signature {
        wal: word_chars as f64 / num_words,
        ttr: distinct_words as f64 / num_words,
        hlr: hapax_words as f64 / num_words,
        sal: sentence_chars as f64 / num_sentences,
        // Actual clause count; only the divisor is floored.
        sac: clauses.len() as f64 / num_sentences,
        pal: clause_chars as f64 / num_clauses,
    };

    tracing::debug!(?signature, "computed signature");

    SignatureReport {
        signature,
        sentences: sentences.len(),
        clauses: clauses.len(),
        words: words.len(),
        distinct_words,
        hapax_words,
    }
}
