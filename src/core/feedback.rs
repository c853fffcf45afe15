//! Wordle feedback patterns and the consistency check
//!
//! A pattern holds one [`Mark`] per position and is stored as a single base-3 code:
//! - 0 = Miss (letter not in the secret, or already used up)
//! - 1 = Present (letter in the secret, wrong position)
//! - 2 = Hit (letter in the correct position)
//!
//! Position `i` contributes `digit × 3^i`, so the code lies in `0..243`.

use super::error::{Error, Result};
use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter not in the secret, or exhausted by earlier marks
    Miss,
    /// Letter in the secret at another position
    Present,
    /// Letter in the secret at this position
    Hit,
}

impl Mark {
    /// Base-3 digit of this mark
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Miss => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    /// Mark for a raw code (0 = Miss, 1 = Present, 2 = Hit)
    ///
    /// # Errors
    /// Returns `Error::InvalidCode` for any other value.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Miss),
            1 => Ok(Self::Present),
            2 => Ok(Self::Hit),
            other => Err(Error::InvalidCode(other)),
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts G/2/🟩 for Hit, Y/1/🟨 for Present and -/_/0/B/X/⬜/⬛ for Miss,
    /// letters in either case.
    ///
    /// # Errors
    /// Returns `Error::InvalidPattern` for anything else.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            'G' | 'g' | '2' | '🟩' => Ok(Self::Hit),
            'Y' | 'y' | '1' | '🟨' => Ok(Self::Present),
            '-' | '_' | '0' | 'B' | 'b' | 'X' | 'x' | '⬜' | '⬛' => Ok(Self::Miss),
            other => Err(Error::InvalidPattern(other)),
        }
    }

    /// Compact letter for this mark
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Miss => '-',
            Self::Present => 'Y',
            Self::Hit => 'G',
        }
    }

    /// Colored square for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Miss => '⬜',
            Self::Present => '🟨',
            Self::Hit => '🟩',
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackPattern(u8);

impl FeedbackPattern {
    /// All hits (the guess is the secret)
    pub const SOLVED: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct patterns
    pub const COUNT: usize = 243;

    /// Create a pattern from a raw base-3 code
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if every position is a Hit
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == Self::SOLVED.0
    }

    /// Build a pattern from one mark per position
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            pattern += mark.code() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Build a pattern from a slice of marks of unchecked length
    ///
    /// # Errors
    /// Returns `Error::LengthMismatch` unless exactly 5 marks are given.
    pub fn from_mark_slice(marks: &[Mark]) -> Result<Self> {
        let marks: [Mark; WORD_LENGTH] = marks.try_into().map_err(|_| Error::LengthMismatch {
            expected: WORD_LENGTH,
            found: marks.len(),
        })?;
        Ok(Self::from_marks(marks))
    }

    /// Build a pattern from raw codes (0 = Miss, 1 = Present, 2 = Hit)
    ///
    /// # Errors
    /// - `Error::LengthMismatch` unless exactly 5 codes are given
    /// - `Error::InvalidCode` for a code outside 0..=2
    ///
    /// # Examples
    /// ```
    /// use wordle_suggest::core::{FeedbackPattern, Mark};
    ///
    /// let pattern = FeedbackPattern::from_codes(&[2, 2, 0, 0, 1]).unwrap();
    /// assert_eq!(pattern.marks()[4], Mark::Present);
    /// assert!(FeedbackPattern::from_codes(&[2, 2, 0, 0, 3]).is_err());
    /// ```
    pub fn from_codes(codes: &[u8]) -> Result<Self> {
        if codes.len() != WORD_LENGTH {
            return Err(Error::LengthMismatch {
                expected: WORD_LENGTH,
                found: codes.len(),
            });
        }

        let mut marks = [Mark::Miss; WORD_LENGTH];
        for (mark, &code) in marks.iter_mut().zip(codes) {
            *mark = Mark::from_code(code)?;
        }
        Ok(Self::from_marks(marks))
    }

    /// Parse a pattern from a string like "GY-GY", "21021" or "🟩🟨⬜🟩🟨"
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// - `Error::LengthMismatch` unless there are exactly 5 symbols
    /// - `Error::InvalidPattern` for an unrecognized symbol
    ///
    /// # Examples
    /// ```
    /// use wordle_suggest::core::FeedbackPattern;
    ///
    /// let p1 = FeedbackPattern::parse("GY-GY").unwrap();
    /// let p2 = FeedbackPattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// let p3 = FeedbackPattern::parse("21021").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1, p3);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(Error::LengthMismatch {
                expected: WORD_LENGTH,
                found: symbols.len(),
            });
        }

        let mut marks = [Mark::Miss; WORD_LENGTH];
        for (mark, &symbol) in marks.iter_mut().zip(&symbols) {
            *mark = Mark::from_symbol(symbol)?;
        }
        Ok(Self::from_marks(marks))
    }

    /// Decode into one mark per position
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut marks = [Mark::Miss; WORD_LENGTH];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = match val % 3 {
                2 => Mark::Hit,
                1 => Mark::Present,
                _ => Mark::Miss,
            };
            val /= 3;
        }
        marks
    }

    /// Calculate the pattern shown when `guess` is played and `secret` is the answer
    ///
    /// Duplicate letters follow Wordle's rules: a letter in the guess is marked at most as
    /// many times as it occurs in the secret, and exact-position matches claim their
    /// occurrences before anything else does.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches (hits) and count the secret's leftover letters
    /// 2. Second pass: mark present letters from the leftover counts, consuming one each
    ///
    /// # Examples
    /// ```
    /// use wordle_suggest::core::{FeedbackPattern, Mark, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let secret = Word::new("alarm").unwrap();
    /// let pattern = FeedbackPattern::compute(&guess, &secret);
    ///
    /// use Mark::{Hit, Miss, Present};
    /// assert_eq!(pattern.marks(), [Miss, Hit, Hit, Present, Present]);
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, secret: &Word) -> Self {
        let mut result = [Mark::Miss; WORD_LENGTH];
        let mut available = [0u8; 26];

        let pairs = guess.chars().iter().zip(secret.chars());

        // First pass: hits, and tally the secret letters they did not use
        for (i, (&g, &s)) in pairs.clone().enumerate() {
            if g == s {
                result[i] = Mark::Hit;
            } else {
                available[usize::from(s - b'a')] += 1;
            }
        }

        // Second pass: present letters, consuming the tally
        for (i, (&g, _)) in pairs.enumerate() {
            if result[i] == Mark::Hit {
                continue;
            }
            let slot = &mut available[usize::from(g - b'a')];
            if *slot > 0 {
                result[i] = Mark::Present;
                *slot -= 1;
            }
        }

        Self::from_marks(result)
    }

    /// Count the number of hits
    #[must_use]
    pub fn count_hits(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Hit).count()
    }

    /// Count the number of present marks
    #[must_use]
    pub fn count_present(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks().iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.marks().iter().map(|m| m.symbol()).collect();
        f.write_str(&text)
    }
}

impl std::str::FromStr for FeedbackPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<[Mark; WORD_LENGTH]> for FeedbackPattern {
    fn from(marks: [Mark; WORD_LENGTH]) -> Self {
        Self::from_marks(marks)
    }
}

/// Whether `candidate` could be the secret, given that `guess` produced `pattern`
///
/// # Examples
/// ```
/// use wordle_suggest::core::{FeedbackPattern, Word, matches};
///
/// let guess = Word::new("alarm").unwrap();
/// let pattern = FeedbackPattern::parse("GG---").unwrap();
/// assert!(matches(&guess, pattern, &Word::new("alloy").unwrap()));
/// assert!(!matches(&guess, pattern, &Word::new("arose").unwrap()));
/// ```
#[inline]
#[must_use]
pub fn matches(guess: &Word, pattern: FeedbackPattern, candidate: &Word) -> bool {
    FeedbackPattern::compute(guess, candidate) == pattern
}

/// Checked form of [`matches`] for raw text at an input boundary
///
/// # Errors
/// Returns the validation error of whichever of the three inputs is malformed.
pub fn matches_text(guess: &str, pattern: &str, candidate: &str) -> Result<bool> {
    let guess = Word::new(guess)?;
    let pattern = FeedbackPattern::parse(pattern)?;
    let candidate = Word::new(candidate)?;
    Ok(matches(&guess, pattern, &candidate))
}

#[cfg(test)]
mod tests {
    use super::Mark::{Hit, Miss, Present};
    use super::*;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn solved_constant() {
        assert_eq!(FeedbackPattern::SOLVED.value(), 242);
        assert!(FeedbackPattern::SOLVED.is_solved());
        assert_eq!(FeedbackPattern::SOLVED.count_hits(), 5);
        assert_eq!(FeedbackPattern::SOLVED.marks(), [Hit; 5]);
    }

    #[test]
    fn all_miss() {
        let pattern = FeedbackPattern::compute(&w("abcde"), &w("fghij"));
        assert_eq!(pattern.value(), 0);
        assert_eq!(pattern.marks(), [Miss; 5]);
    }

    #[test]
    fn duplicate_guess_letter_marked_once() {
        // Only one L in ALARM, and it is claimed by the hit at position 1
        let pattern = FeedbackPattern::compute(&w("llama"), &w("alarm"));
        assert_eq!(pattern.marks(), [Miss, Hit, Hit, Present, Present]);

        let l_marks = pattern.marks()[..2]
            .iter()
            .filter(|&&m| m != Miss)
            .count();
        assert_eq!(l_marks, 1);
    }

    #[test]
    fn duplicate_letters_both_present() {
        // SPEED vs ERASE: ERASE has two E's, neither in place
        let pattern = FeedbackPattern::compute(&w("speed"), &w("erase"));
        assert_eq!(pattern.marks(), [Present, Miss, Present, Present, Miss]);
        assert_eq!(pattern.value(), 37);
    }

    #[test]
    fn hit_claims_letter_before_present() {
        // ROBOT vs FLOOR: second O is a hit, first O takes the remaining O
        let pattern = FeedbackPattern::compute(&w("robot"), &w("floor"));
        assert_eq!(pattern.marks(), [Present, Present, Miss, Hit, Miss]);
        assert_eq!(pattern.value(), 58);
    }

    #[test]
    fn later_hit_beats_earlier_present() {
        // PIXIE has one E, taken by the hit at position 4
        let pattern = FeedbackPattern::compute(&w("eerie"), &w("pixie"));
        assert_eq!(pattern.marks(), [Miss, Miss, Miss, Hit, Hit]);

        // With no hit, only the first E of SPEED is marked
        let pattern = FeedbackPattern::compute(&w("speed"), &w("abide"));
        assert_eq!(pattern.marks(), [Miss, Miss, Present, Miss, Present]);
    }

    #[test]
    fn real_wordle_example() {
        // CRANE vs SLATE: 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
        let pattern = FeedbackPattern::compute(&w("crane"), &w("slate"));
        assert_eq!(pattern.value(), 180);
        assert_eq!(pattern.count_hits(), 2);
        assert_eq!(pattern.count_present(), 0);
    }

    #[test]
    fn self_consistency() {
        let words = ["crane", "llama", "alarm", "speed", "erase", "geese", "aaaaa", "fuzzy"];
        for guess in words {
            for candidate in words {
                let (g, c) = (w(guess), w(candidate));
                let pattern = FeedbackPattern::compute(&g, &c);
                assert!(matches(&g, pattern, &c), "{guess} vs {candidate}");
            }
        }
    }

    #[test]
    fn matches_rejects_other_patterns() {
        let guess = w("alarm");
        let pattern = FeedbackPattern::from_marks([Hit, Hit, Miss, Miss, Miss]);
        assert!(matches(&guess, pattern, &w("alloy")));
        assert!(matches(&guess, pattern, &w("alive")));
        assert!(!matches(&guess, pattern, &w("abuse")));
        assert!(!matches(&guess, pattern, &w("arose")));
        assert!(!matches(&guess, pattern, &w("alarm")));
    }

    #[test]
    fn parse_notations_agree() {
        let p1 = FeedbackPattern::parse("GYG--").unwrap();
        let p2 = FeedbackPattern::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = FeedbackPattern::parse("gyg__").unwrap();
        let p4 = FeedbackPattern::parse(" 21200 ").unwrap();
        let p5 = FeedbackPattern::parse("gygbx").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, p4);
        assert_eq!(p1, p5);
        // 2 + 1×3 + 2×9 = 23
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            FeedbackPattern::parse("GYGGY-"),
            Err(Error::LengthMismatch {
                expected: 5,
                found: 6
            })
        );
        assert!(matches!(
            FeedbackPattern::parse(""),
            Err(Error::LengthMismatch { found: 0, .. })
        ));
    }

    #[test]
    fn parse_rejects_unknown_marks() {
        assert_eq!(
            FeedbackPattern::parse("GQGGY"),
            Err(Error::InvalidPattern('Q'))
        );
        assert_eq!(FeedbackPattern::parse("22223"), Err(Error::InvalidPattern('3')));
    }

    #[test]
    fn from_codes_validates() {
        assert_eq!(
            FeedbackPattern::from_codes(&[2, 2, 2, 2, 2]),
            Ok(FeedbackPattern::SOLVED)
        );
        assert_eq!(
            FeedbackPattern::from_codes(&[0, 1, 2, 3, 0]),
            Err(Error::InvalidCode(3))
        );
        assert!(matches!(
            FeedbackPattern::from_codes(&[0, 1]),
            Err(Error::LengthMismatch { found: 2, .. })
        ));
    }

    #[test]
    fn from_mark_slice_checks_length() {
        assert!(FeedbackPattern::from_mark_slice(&[Hit; 5]).unwrap().is_solved());
        assert!(matches!(
            FeedbackPattern::from_mark_slice(&[Hit; 4]),
            Err(Error::LengthMismatch { found: 4, .. })
        ));
    }

    #[test]
    fn marks_round_trip_every_code() {
        for value in 0..243u8 {
            let pattern = FeedbackPattern::new(value);
            assert_eq!(FeedbackPattern::from_marks(pattern.marks()), pattern);
        }
    }

    #[test]
    fn display_and_emoji() {
        let pattern = FeedbackPattern::from_marks([Hit, Present, Miss, Hit, Present]);
        assert_eq!(pattern.to_string(), "GY-GY");
        assert_eq!(pattern.to_emoji(), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn matches_text_reports_each_input() {
        assert_eq!(matches_text("alarm", "GG---", "alloy"), Ok(true));
        assert!(matches!(
            matches_text("alar", "GG---", "alloy"),
            Err(Error::LengthMismatch { found: 4, .. })
        ));
        assert!(matches!(
            matches_text("alarm", "GG--", "alloy"),
            Err(Error::LengthMismatch { found: 4, .. })
        ));
        assert_eq!(
            matches_text("alarm", "GG--?", "alloy"),
            Err(Error::InvalidPattern('?'))
        );
        assert!(matches!(
            matches_text("alarm", "GG---", "alloys"),
            Err(Error::LengthMismatch { found: 6, .. })
        ));
    }
}
