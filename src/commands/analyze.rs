//! Word analysis command
//!
//! Scores one guess against the current pool.

use crate::core::{Error, Word};
use crate::solver::Session;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use anyhow::{Context, Result};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub metrics: GuessMetrics,
    /// 2^entropy: the factor the pool is expected to shrink by
    pub expected_reduction: f64,
    pub total_candidates: usize,
    /// Whether the word itself could still be the answer
    pub is_candidate: bool,
}

/// Analyze a guess against the session's current pool
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-letters)
/// - The word is not in the dictionary
/// - No candidates remain
pub fn analyze_word(word: &str, session: &Session<'_>) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;
    let word = session
        .dictionary()
        .get(word.text())
        .ok_or_else(|| Error::UnknownWord(word.text().to_owned()))?;

    let pool = session.pool();
    if pool.is_empty() {
        return Err(Error::EmptyPool).context("no word is consistent with the feedback given");
    }

    let metrics = calculate_metrics(word, pool.words());

    Ok(AnalysisResult {
        word: word.text().to_owned(),
        metrics,
        expected_reduction: metrics.entropy.exp2(),
        total_candidates: pool.len(),
        is_candidate: pool.contains(word),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::solver::RankerConfig;

    fn dictionary() -> Dictionary {
        Dictionary::from_entries(["abuse", "alarm", "alloy", "arose", "alive"]).0
    }

    #[test]
    fn analyze_valid_word() {
        let dictionary = dictionary();
        let session = Session::new(&dictionary, RankerConfig::default());

        let result = analyze_word("alarm", &session).unwrap();

        assert_eq!(result.word, "alarm");
        assert_eq!(result.total_candidates, 5);
        assert!(result.is_candidate);
        assert!(result.metrics.entropy > 0.0);
        assert!(result.metrics.entropy <= 5f64.log2());
        assert!((result.expected_reduction - result.metrics.entropy.exp2()).abs() < 1e-12);
    }

    #[test]
    fn analyze_after_turns() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, RankerConfig::default());
        session.apply_text("alarm", "GG---").unwrap();

        let result = analyze_word("ALLOY", &session).unwrap();
        assert_eq!(result.total_candidates, 2);
        assert!((result.metrics.entropy - 1.0).abs() < 1e-12);
        assert_eq!(result.metrics.max_partition, 1);

        // No longer possible, and tells nothing apart
        let result = analyze_word("alarm", &session).unwrap();
        assert!(!result.is_candidate);
        assert_eq!(result.metrics.max_partition, 2);
    }

    #[test]
    fn analyze_invalid_word() {
        let dictionary = dictionary();
        let session = Session::new(&dictionary, RankerConfig::default());

        assert!(analyze_word("xyz", &session).is_err());
        assert!(analyze_word("al4rm", &session).is_err());
    }

    #[test]
    fn analyze_word_not_in_dictionary() {
        let dictionary = dictionary();
        let session = Session::new(&dictionary, RankerConfig::default());

        let err = analyze_word("crane", &session).err().unwrap();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::UnknownWord("crane".into()))
        );
    }

    #[test]
    fn analyze_empty_pool() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, RankerConfig::default());
        session.apply_text("zzzzz", "GGGGG").unwrap();

        assert!(analyze_word("alarm", &session).is_err());
    }
}
