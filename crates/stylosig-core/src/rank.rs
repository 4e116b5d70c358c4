//! Nearest-match ranking of candidate texts against a reference signature.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::signature::{Signature, compute_signature};

/// Score of a single candidate text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CandidateScore {
    /// 1-based position of the text in the corpus.
    pub index: usize,
    /// Signature computed for the text.
    pub signature: Signature,
    /// Distance from the reference signature.
    pub distance: f64,
}

/// Result of ranking a corpus against a reference signature.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RankReport {
    /// The reference signature every candidate was compared with.
    pub reference: Signature,
    /// One score per candidate, in corpus order.
    pub candidates: Vec<CandidateScore>,
    /// 1-based index of the closest candidate.
    pub best: usize,
}

impl RankReport {
    /// Score of the closest candidate.
    pub fn best_candidate(&self) -> Option<&CandidateScore> {
        self.candidates.get(self.best.checked_sub(1)?)
    }
}

/// Score every text against `reference` and pick the closest one.
///
/// Ties go to the earliest text. Fails with [`AnalysisError::NoCandidates`]
/// when `texts` is empty.
#[tracing::instrument(skip_all, fields(candidates = texts.len()))]
pub fn score_corpus<S: AsRef<str>>(
    texts: &[S],
    reference: &Signature,
) -> AnalysisResult<RankReport> {
    if texts.is_empty() {
        return Err(AnalysisError::NoCandidates);
    }

    let mut candidates = Vec::with_capacity(texts.len());
    let mut best: Option<(usize, f64)> = None;

    for (i, text) in texts.iter().enumerate() {
        let index = i + 1;
        let signature = compute_signature(text.as_ref());
        let distance = signature.distance(reference);
        tracing::debug!(index, distance, "scored candidate");

        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((index, distance));
        }
        candidates.push(CandidateScore {
            index,
            signature,
            distance,
        });
    }

    let (best, distance) = best.ok_or(AnalysisError::NoCandidates)?;
    tracing::debug!(best, distance, "closest candidate found");

    Ok(RankReport {
        reference: *reference,
        candidates,
        best,
    })
}

/// 1-based index of the text whose signature is closest to `reference`.
///
/// Ties go to the earliest text. Fails with [`AnalysisError::NoCandidates`]
/// when `texts` is empty.
pub fn rank<S: AsRef<str>>(texts: &[S], reference: &Signature) -> AnalysisResult<usize> {
    score_corpus(texts, reference).map(|report| report.best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins() {
        let texts = [
            "A short bland text.",
            "A verbose text with many many distinct long words indeed.",
        ];
        let reference = compute_signature("A short bland text.");
        assert_eq!(rank(&texts, &reference), Ok(1));
    }

    #[test]
    fn later_closer_text_wins() {
        let texts = [
            "A verbose text with many many distinct long words indeed.",
            "A short bland text.",
        ];
        let reference = compute_signature("A short bland text.");
        assert_eq!(rank(&texts, &reference), Ok(2));
    }

    #[test]
    fn ties_go_to_the_earliest_text() {
        // Same lengths and counts, so identical signatures.
        let texts = ["Hello there.", "Other thing.", "Hello there."];
        let reference = Signature::from([1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let report = score_corpus(&texts, &reference).unwrap();
        assert_eq!(report.candidates[0].distance, report.candidates[1].distance);
        assert_eq!(report.best, 1);
    }

    #[test]
    fn tie_after_a_worse_candidate_keeps_first_best() {
        let texts = ["x", "Hello there.", "Other thing."];
        let reference = compute_signature("Hello there.");
        assert_eq!(rank(&texts, &reference), Ok(2));
    }

    #[test]
    fn empty_corpus_is_an_error() {
        let texts: [&str; 0] = [];
        let reference = Signature::default();
        assert_eq!(rank(&texts, &reference), Err(AnalysisError::NoCandidates));
    }

    #[test]
    fn single_candidate_is_chosen() {
        let reference = Signature::from([9.0, 9.0, 9.0, 9.0, 9.0, 9.0]);
        assert_eq!(rank(&[""], &reference), Ok(1));
    }

    #[test]
    fn report_lists_every_candidate_in_order() {
        let texts = vec!["One.".to_string(), "Two, three.".to_string()];
        let reference = compute_signature("Two, three.");
        let report = score_corpus(&texts, &reference).unwrap();
        let indices: Vec<usize> = report.candidates.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(report.best, 2);
        assert_eq!(report.best_candidate().map(|c| c.distance), Some(0.0));
        assert_eq!(report.reference, reference);
    }
}
