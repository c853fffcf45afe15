//! Sampled entropy ranking
//!
//! Scoring every candidate against every other is quadratic in the pool size, so only a
//! random sample of candidates is scored. Each sampled word is still scored against the
//! whole pool.

use super::calculator::calculate_entropy;
use crate::core::{Dictionary, Error, Result, Word};
use crate::solver::CandidatePool;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;

/// Number of candidates scored per turn unless configured otherwise
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Number of suggestions shown per turn unless configured otherwise
pub const DEFAULT_TOP: usize = 5;

/// A candidate guess with its estimated information gain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedSuggestion<'d> {
    pub word: &'d Word,
    /// Expected information gain in bits
    pub entropy: f64,
}

/// Settings for [`EntropyRanker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankerConfig {
    /// Maximum number of words scored per turn
    pub sample_size: usize,
    /// Fixed seed for reproducible sampling; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Number of suggestions returned by [`EntropyRanker::suggest`]
    pub top: usize,
    /// Fill half of the sample from the whole dictionary when the pool is large
    pub explore: bool,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
            top: DEFAULT_TOP,
            explore: false,
        }
    }
}

impl RankerConfig {
    #[must_use]
    pub const fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    #[must_use]
    pub const fn with_explore(mut self, explore: bool) -> Self {
        self.explore = explore;
        self
    }
}

/// Build the random source for one ranking
///
/// A fixed seed makes sampling deterministic; `None` draws a seed from the OS.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Rank a sample of the pool by expected information gain, best first
///
/// Samples up to `sample_size` pool words without replacement (the whole pool if it is
/// small enough), scores each against the full pool and sorts by descending entropy.
/// Ties keep pool order. A single remaining word is returned with score 0.
///
/// # Errors
/// - `Error::InvalidSampleSize` if `sample_size` is 0
/// - `Error::EmptyPool` if no candidates remain
///
/// # Examples
/// ```
/// use wordle_suggest::core::Dictionary;
/// use wordle_suggest::solver::{CandidatePool, rank};
///
/// let (dictionary, _) = Dictionary::from_entries(["alloy", "alive"]);
/// let pool = CandidatePool::full(&dictionary);
///
/// let ranking = rank(&pool, 100, Some(7)).unwrap();
/// assert_eq!(ranking.len(), 2);
/// assert!((ranking[0].entropy - 1.0).abs() < 1e-12);
/// ```
pub fn rank<'d>(
    pool: &CandidatePool<'d>,
    sample_size: usize,
    rng_seed: Option<u64>,
) -> Result<Vec<RankedSuggestion<'d>>> {
    rank_with_rng(pool, sample_size, &mut seeded_rng(rng_seed))
}

/// [`rank`] with an injected random source
///
/// # Errors
/// Same as [`rank`].
pub fn rank_with_rng<'d, R: Rng + ?Sized>(
    pool: &CandidatePool<'d>,
    sample_size: usize,
    rng: &mut R,
) -> Result<Vec<RankedSuggestion<'d>>> {
    if sample_size == 0 {
        return Err(Error::InvalidSampleSize);
    }

    let words = pool.words();
    match words {
        [] => Err(Error::EmptyPool),
        [only] => Ok(vec![RankedSuggestion {
            word: *only,
            entropy: 0.0,
        }]),
        _ => {
            let sample: Vec<&Word> = sample_indices(words.len(), sample_size, rng)
                .into_iter()
                .map(|i| words[i])
                .collect();
            Ok(score(&sample, words))
        }
    }
}

/// Pick `amount` distinct indices below `len`, returned in ascending order
fn sample_indices<R: Rng + ?Sized>(len: usize, amount: usize, rng: &mut R) -> Vec<usize> {
    if len <= amount {
        return (0..len).collect();
    }

    let mut picked = index::sample(rng, len, amount).into_vec();
    picked.sort_unstable();
    picked
}

/// Score each guess against the pool; the sort is stable so equal scores keep input order
fn score<'d>(guesses: &[&'d Word], pool: &[&Word]) -> Vec<RankedSuggestion<'d>> {
    let mut ranked: Vec<RankedSuggestion<'d>> = guesses
        .iter()
        .map(|&word| RankedSuggestion {
            word,
            entropy: calculate_entropy(word, pool),
        })
        .collect();

    ranked.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));
    ranked
}

/// Entropy ranking over a fixed dictionary
///
/// Holds the dictionary so exploration mode can draw guesses that are no longer
/// possible answers.
#[derive(Debug, Clone, Copy)]
pub struct EntropyRanker<'d> {
    dictionary: &'d Dictionary,
    config: RankerConfig,
}

impl<'d> EntropyRanker<'d> {
    #[must_use]
    pub const fn new(dictionary: &'d Dictionary, config: RankerConfig) -> Self {
        Self { dictionary, config }
    }

    #[must_use]
    pub const fn config(&self) -> &RankerConfig {
        &self.config
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Every sampled word ranked best first
    ///
    /// With a configured seed the same pool always gives the same ranking.
    ///
    /// # Errors
    /// `Error::InvalidSampleSize` or `Error::EmptyPool`, as for [`rank`].
    pub fn rank(&self, pool: &CandidatePool<'d>) -> Result<Vec<RankedSuggestion<'d>>> {
        self.rank_with_rng(pool, &mut seeded_rng(self.config.seed))
    }

    /// The best `top` suggestions
    ///
    /// # Errors
    /// Same as [`EntropyRanker::rank`].
    pub fn suggest(&self, pool: &CandidatePool<'d>) -> Result<Vec<RankedSuggestion<'d>>> {
        let mut ranked = self.rank(pool)?;
        ranked.truncate(self.config.top.max(1));
        Ok(ranked)
    }

    /// Ranking with an injected random source
    ///
    /// # Errors
    /// Same as [`EntropyRanker::rank`].
    pub fn rank_with_rng<R: Rng + ?Sized>(
        &self,
        pool: &CandidatePool<'d>,
        rng: &mut R,
    ) -> Result<Vec<RankedSuggestion<'d>>> {
        let sample_size = self.config.sample_size;
        if !self.config.explore || pool.len() <= sample_size {
            return rank_with_rng(pool, sample_size, rng);
        }

        if sample_size == 0 {
            return Err(Error::InvalidSampleSize);
        }

        let guesses = self.exploration_sample(pool, sample_size, rng);
        Ok(score(&guesses, pool.words()))
    }

    /// Half the sample from the pool, half from the whole dictionary, without duplicates
    ///
    /// Ordered pool words first (by pool position), then the others by dictionary position.
    fn exploration_sample<R: Rng + ?Sized>(
        &self,
        pool: &CandidatePool<'d>,
        sample_size: usize,
        rng: &mut R,
    ) -> Vec<&'d Word> {
        let from_dictionary = sample_size / 2;
        let from_pool = sample_size - from_dictionary;

        let pool_positions: FxHashMap<&str, usize> = pool
            .iter()
            .enumerate()
            .map(|(i, word)| (word.text(), i))
            .collect();

        let dictionary_words = self.dictionary.words();
        let mut keyed: Vec<(usize, &'d Word)> = sample_indices(pool.len(), from_pool, rng)
            .into_iter()
            .map(|i| (i, pool.words()[i]))
            .collect();

        for i in sample_indices(dictionary_words.len(), from_dictionary, rng) {
            let word = &dictionary_words[i];
            let key = pool_positions
                .get(word.text())
                .copied()
                .unwrap_or(pool.len() + i);
            keyed.push((key, word));
        }

        keyed.sort_by_key(|&(key, _)| key);
        keyed.dedup_by_key(|&mut (key, _)| key);
        keyed.into_iter().map(|(_, word)| word).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackPattern;
    use crate::wordlists::loader::embedded_dictionary;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_entries(words.iter().copied()).0
    }

    const FIVE: &[&str] = &["abuse", "alarm", "alloy", "arose", "alive"];

    #[test]
    fn empty_pool_is_an_error() {
        let pool = CandidatePool::from_words(Vec::new());
        assert_eq!(rank(&pool, 100, Some(1)), Err(Error::EmptyPool));
    }

    #[test]
    fn zero_sample_size_is_an_error() {
        let dictionary = dictionary(FIVE);
        let pool = CandidatePool::full(&dictionary);
        assert_eq!(rank(&pool, 0, Some(1)), Err(Error::InvalidSampleSize));
    }

    #[test]
    fn single_word_scores_zero() {
        let dictionary = dictionary(&["alloy"]);
        let pool = CandidatePool::full(&dictionary);

        let ranking = rank(&pool, 100, None).unwrap();
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].word.text(), "alloy");
        assert_eq!(ranking[0].entropy, 0.0);
    }

    #[test]
    fn two_word_pool_scores_one_bit() {
        let dictionary = dictionary(&["alloy", "alive"]);
        let pool = CandidatePool::full(&dictionary);

        for suggestion in rank(&pool, 100, Some(3)).unwrap() {
            assert!((suggestion.entropy - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn small_pool_is_scored_completely_in_order() {
        let dictionary = dictionary(FIVE);
        let pool = CandidatePool::full(&dictionary);

        let ranking = rank(&pool, 100, Some(9)).unwrap();
        assert_eq!(ranking.len(), 5);
        for pair in ranking.windows(2) {
            assert!(pair[0].entropy >= pair[1].entropy);
        }
    }

    #[test]
    fn ties_keep_pool_order() {
        // Both words split the pool into singletons, so both score 1 bit
        for order in [["alloy", "alive"], ["alive", "alloy"]] {
            let dictionary = dictionary(&order);
            let pool = CandidatePool::full(&dictionary);

            let ranked: Vec<&str> = rank(&pool, 100, None)
                .unwrap()
                .iter()
                .map(|s| s.word.text())
                .collect();
            assert_eq!(ranked, order);
        }
    }

    #[test]
    fn entropy_bounded_by_pool_size() {
        let dictionary = embedded_dictionary();
        let pool = CandidatePool::full(&dictionary);
        let bound = (pool.len() as f64).log2();

        let ranking = rank(&pool, 20, Some(5)).unwrap();
        assert_eq!(ranking.len(), 20);
        for suggestion in &ranking {
            assert!(suggestion.entropy >= 0.0);
            assert!(suggestion.entropy <= bound);
        }
    }

    #[test]
    fn sample_is_bounded_and_distinct() {
        let dictionary = embedded_dictionary();
        let pool = CandidatePool::full(&dictionary);

        let ranking = rank(&pool, 10, Some(11)).unwrap();
        assert_eq!(ranking.len(), 10);

        let mut texts: Vec<&str> = ranking.iter().map(|s| s.word.text()).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), 10);
        assert!(ranking.iter().all(|s| pool.contains(s.word)));
    }

    #[test]
    fn same_seed_same_ranking() {
        let dictionary = embedded_dictionary();
        let pool = CandidatePool::full(&dictionary);

        let first = rank(&pool, 15, Some(42)).unwrap();
        let second = rank(&pool, 15, Some(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn injected_rng_is_used() {
        let dictionary = embedded_dictionary();
        let pool = CandidatePool::full(&dictionary);

        let mut a = StdRng::seed_from_u64(8);
        let mut b = StdRng::seed_from_u64(8);
        assert_eq!(
            rank_with_rng(&pool, 12, &mut a).unwrap(),
            rank_with_rng(&pool, 12, &mut b).unwrap()
        );
    }

    #[test]
    fn sample_indices_sorted_and_unique() {
        let mut rng = StdRng::seed_from_u64(0);
        let picked = sample_indices(1000, 50, &mut rng);
        assert_eq!(picked.len(), 50);
        assert!(picked.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(sample_indices(3, 10, &mut rng), vec![0, 1, 2]);
    }

    #[test]
    fn ranker_suggest_truncates_to_top() {
        let dictionary = dictionary(FIVE);
        let pool = CandidatePool::full(&dictionary);
        let ranker = EntropyRanker::new(&dictionary, RankerConfig::default().with_top(2));

        let suggestions = ranker.suggest(&pool).unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(ranker.rank(&pool).unwrap().len(), 5);
    }

    #[test]
    fn ranker_with_seed_is_reproducible() {
        let dictionary = embedded_dictionary();
        let pool = CandidatePool::full(&dictionary);
        let config = RankerConfig::default()
            .with_sample_size(10)
            .with_seed(Some(99));
        let ranker = EntropyRanker::new(&dictionary, config);

        assert_eq!(ranker.rank(&pool).unwrap(), ranker.rank(&pool).unwrap());
    }

    #[test]
    fn explore_draws_from_dictionary_when_pool_is_large() {
        let dictionary = embedded_dictionary();
        let full = CandidatePool::full(&dictionary);

        // Narrow the pool to words starting with "s"
        let pool =
            CandidatePool::from_words(full.iter().filter(|w| w.text().starts_with('s')).collect());
        assert!(pool.len() > 20);

        let config = RankerConfig::default()
            .with_sample_size(20)
            .with_seed(Some(4))
            .with_explore(true);
        let ranker = EntropyRanker::new(&dictionary, config);
        let ranking = ranker.rank(&pool).unwrap();

        assert!(ranking.len() <= 20);
        assert!(ranking.len() >= 10);
        let bound = (pool.len() as f64).log2();
        assert!(ranking.iter().all(|s| s.entropy >= 0.0 && s.entropy <= bound));
        assert!(ranking.iter().any(|s| pool.contains(s.word)));
        assert!(ranking.iter().any(|s| !pool.contains(s.word)));
    }

    #[test]
    fn explore_ignored_for_small_pool() {
        let dictionary = embedded_dictionary();
        let secret = dictionary.get("alloy").unwrap();
        let guess = dictionary.get("alarm").unwrap();
        let pattern = FeedbackPattern::compute(guess, secret);
        let pool = CandidatePool::full(&dictionary).filter(guess, pattern);
        assert!(pool.len() <= 100);

        let config = RankerConfig::default().with_seed(Some(2)).with_explore(true);
        let ranker = EntropyRanker::new(&dictionary, config);
        let ranking = ranker.rank(&pool).unwrap();

        assert_eq!(ranking.len(), pool.len());
        assert!(ranking.iter().all(|s| pool.contains(s.word)));
    }

    #[test]
    fn explore_single_word_still_zero() {
        let dictionary = dictionary(FIVE);
        let only = dictionary.get("alive").unwrap();
        let pool = CandidatePool::from_words(vec![only]);
        let config = RankerConfig::default()
            .with_sample_size(1)
            .with_explore(true);

        let ranking = EntropyRanker::new(&dictionary, config).rank(&pool).unwrap();
        assert_eq!(
            ranking,
            vec![RankedSuggestion {
                word: only,
                entropy: 0.0
            }]
        );
    }
}
