//! Scoring a single guess
//!
//! A guess splits the pool into groups, one per feedback pattern the secret could
//! produce. The more evenly it splits, the more the feedback is expected to tell.

use crate::core::{FeedbackPattern, Word};
use rustc_hash::FxHashMap;

/// How a guess splits a pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Bits of information the feedback is expected to carry
    pub entropy: f64,
    /// Pool size to expect after playing the guess
    pub expected_remaining: f64,
    /// Size of the biggest group
    pub max_partition: usize,
    pub partitions: usize,
}

/// Expected information from playing `guess` when every candidate is equally likely
///
/// 0 for an empty pool or when every candidate gives the same feedback.
///
/// ```
/// use wordle_suggest::core::Word;
/// use wordle_suggest::solver::entropy::calculate_entropy;
///
/// let pool = [Word::new("alloy").unwrap(), Word::new("alive").unwrap()];
/// let pool: Vec<&Word> = pool.iter().collect();
///
/// assert_eq!(calculate_entropy(&Word::new("alloy").unwrap(), &pool), 1.0);
/// assert_eq!(calculate_entropy(&Word::new("thumb").unwrap(), &pool), 0.0);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    shannon_entropy(partition_sizes(guess, candidates).values().copied())
}

/// Group size per feedback pattern
#[must_use]
pub fn partition_sizes(guess: &Word, candidates: &[&Word]) -> FxHashMap<FeedbackPattern, usize> {
    candidates
        .iter()
        .fold(FxHashMap::default(), |mut groups, &candidate| {
            *groups
                .entry(FeedbackPattern::compute(guess, candidate))
                .or_default() += 1;
            groups
        })
}

/// Entropy in bits of the distribution given by `group_sizes`
///
/// Empty groups are skipped. The result lies between 0 and log2 of the number of
/// non-empty groups.
///
/// ```
/// use wordle_suggest::solver::entropy::shannon_entropy;
///
/// assert_eq!(shannon_entropy([8, 8, 8, 8]), 2.0);
/// assert_eq!(shannon_entropy([12]), 0.0);
/// assert!(shannon_entropy([30, 1, 1]) < shannon_entropy([10, 11, 11]));
/// ```
#[must_use]
pub fn shannon_entropy<I>(group_sizes: I) -> f64
where
    I: IntoIterator<Item = usize>,
    I::IntoIter: Clone,
{
    let sizes = group_sizes.into_iter().filter(|&size| size > 0);
    let total: usize = sizes.clone().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    // p * log2(1/p) keeps every term non-negative, so one group gives +0.0
    sizes
        .map(|size| {
            let share = size as f64 / total;
            share * (1.0 / share).log2()
        })
        .sum()
}

/// Entropy plus the expected and worst-case pool size after `guess`
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    let groups = partition_sizes(guess, candidates);
    let total = candidates.len() as f64;

    // A candidate lands in a group of size k with chance k/N
    let expected_remaining = if candidates.is_empty() {
        0.0
    } else {
        groups.values().map(|&k| (k * k) as f64).sum::<f64>() / total
    };

    GuessMetrics {
        entropy: shannon_entropy(groups.values().copied()),
        expected_remaining,
        max_partition: groups.values().copied().max().unwrap_or(0),
        partitions: groups.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn refs(words: &[Word]) -> Vec<&Word> {
        words.iter().collect()
    }

    #[test]
    fn even_split_is_log2_of_groups() {
        assert!((shannon_entropy([3, 3, 3, 3]) - 2.0).abs() < 1e-12);
        assert!((shannon_entropy([1; 8]) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn one_group_is_positive_zero() {
        let entropy = shannon_entropy([10]);
        assert_eq!(entropy, 0.0);
        assert!(entropy.is_sign_positive());
    }

    #[test]
    fn lopsided_split_scores_lower() {
        assert!(shannon_entropy([97, 1, 1, 1]) < shannon_entropy([25, 25, 25, 25]));
    }

    #[test]
    fn empty_groups_ignored() {
        assert_eq!(shannon_entropy([5, 0, 5]), shannon_entropy([5, 5]));
        assert_eq!(shannon_entropy(std::iter::empty()), 0.0);
        assert_eq!(shannon_entropy([0, 0]), 0.0);
    }

    #[test]
    fn never_exceeds_group_bound() {
        let entropy = shannon_entropy([10, 20, 30]);
        assert!(entropy > 0.0);
        assert!(entropy <= 3f64.log2());
    }

    #[test]
    fn crane_against_four_words() {
        let pool = words(&["slate", "irate", "trace", "raise"]);
        let entropy = calculate_entropy(&Word::new("crane").unwrap(), &refs(&pool));
        assert!(entropy > 1.0 && entropy <= 2.0);
    }

    #[test]
    fn no_shared_letters_gives_nothing() {
        let pool = words(&["aaaaa", "bbbbb", "ccccc"]);
        assert_eq!(calculate_entropy(&Word::new("zzzzz").unwrap(), &refs(&pool)), 0.0);
    }

    #[test]
    fn empty_pool_scores_zero() {
        assert_eq!(calculate_entropy(&Word::new("crane").unwrap(), &[]), 0.0);
    }

    #[test]
    fn partition_sizes_sum_to_pool() {
        let pool = words(&["slate", "crate", "crane", "irate"]);
        let groups = partition_sizes(&Word::new("crane").unwrap(), &refs(&pool));

        assert_eq!(groups.values().sum::<usize>(), 4);
        assert_eq!(groups.get(&FeedbackPattern::SOLVED), Some(&1));
    }

    #[test]
    fn metrics_for_even_split() {
        let pool = words(&["alloy", "alive"]);
        let metrics = calculate_metrics(&Word::new("alloy").unwrap(), &refs(&pool));

        assert!((metrics.entropy - 1.0).abs() < 1e-12);
        assert!((metrics.expected_remaining - 1.0).abs() < 1e-12);
        assert_eq!(metrics.max_partition, 1);
        assert_eq!(metrics.partitions, 2);
    }

    #[test]
    fn metrics_for_useless_guess() {
        let pool = words(&["alloy", "alive", "abuse"]);
        let metrics = calculate_metrics(&Word::new("zzzzz").unwrap(), &refs(&pool));

        assert_eq!(metrics.entropy, 0.0);
        assert!((metrics.expected_remaining - 3.0).abs() < 1e-12);
        assert_eq!(metrics.max_partition, 3);
        assert_eq!(metrics.partitions, 1);
    }

    #[test]
    fn metrics_for_empty_pool() {
        let metrics = calculate_metrics(&Word::new("crane").unwrap(), &[]);
        assert_eq!(metrics.entropy, 0.0);
        assert_eq!(metrics.expected_remaining, 0.0);
        assert_eq!(metrics.max_partition, 0);
        assert_eq!(metrics.partitions, 0);
    }
}
