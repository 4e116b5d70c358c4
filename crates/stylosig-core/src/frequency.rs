//! Case-insensitive word frequency statistics.

use std::collections::HashMap;

/// Count occurrences of each lowercased word form.
pub fn word_frequencies<S: AsRef<str>>(words: &[S]) -> HashMap<String, usize> {
    let mut freq: HashMap<String, usize> = HashMap::new();
    for w in words {
        *freq.entry(w.as_ref().to_lowercase()).or_insert(0) += 1;
    }
    freq
}

/// Number of word forms that occur exactly once (hapax legomena).
///
/// The running total is kept in step with the frequency map: a form counts
/// when first seen and stops counting when it is seen a second time.
pub fn count_unique_words<S: AsRef<str>>(words: &[S]) -> usize {
    let mut freq: HashMap<String, usize> = HashMap::new();
    let mut unique = 0usize;

    for w in words {
        let form = w.as_ref().to_lowercase();
        match freq.get_mut(&form) {
            Some(count) => {
                if *count == 1 {
                    unique -= 1;
                }
                *count += 1;
            }
            None => {
                freq.insert(form, 1);
                unique += 1;
            }
        }
    }

    unique
}

/// Number of distinct word forms, regardless of frequency.
pub fn count_distinct_words<S: AsRef<str>>(words: &[S]) -> usize {
    word_frequencies(words).len()
}
