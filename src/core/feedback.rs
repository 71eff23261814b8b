//! Letter-by-letter scoring of a guess against the secret
//!
//! Each guessed letter gets one of three outcomes:
//! - Absent (letter not in word, or every copy already claimed)
//! - Present (letter in word, wrong position)
//! - Correct (letter in correct position)

use super::Word;
use std::fmt;

/// Result of scoring a single letter
///
/// Ordered by dominance, so `max` picks the most informative outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Absent,
    Present,
    Correct,
}

impl Outcome {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-character code: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Outcomes for every position of one scored guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Outcome>);

impl Feedback {
    #[must_use]
    pub const fn new(outcomes: Vec<Outcome>) -> Self {
        Self(outcomes)
    }

    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&o| o == Outcome::Correct)
    }

    /// How many positions received `outcome`
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> usize {
        self.0.iter().filter(|&&o| o == outcome).count()
    }

    /// Render as a row of emoji squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|o| o.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.0 {
            write!(f, "{}", outcome.code())?;
        }
        Ok(())
    }
}

/// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// # Examples
/// ```
/// use wordle_puzzle::core::Feedback;
///
/// let a: Feedback = "GY-GY".parse().unwrap();
/// let b: Feedback = "🟩🟨⬜🟩🟨".parse().unwrap();
/// assert_eq!(a, b);
/// ```
impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let outcomes = s
            .chars()
            .map(Outcome::from_code)
            .collect::<Option<Vec<_>>>()
            .filter(|outcomes| !outcomes.is_empty())
            .ok_or_else(|| format!("Invalid feedback string: {s}"))?;
        Ok(Self(outcomes))
    }
}

/// Score `guess` against `secret`
///
/// Implements the exact duplicate-letter rules.
///
/// # Algorithm
/// 1. Build a letter-count table from a fresh copy of the secret
/// 2. First pass: mark exact matches `Correct` and remove them from the pool
/// 3. Second pass, left to right: a letter still in the pool is `Present`
///    and consumes one copy, otherwise `Absent`
///
/// The caller guarantees equal lengths.
///
/// # Examples
/// ```
/// use wordle_puzzle::core::{score, Outcome, Word};
///
/// let secret = Word::new("slate").unwrap();
/// let guess = Word::new("crane").unwrap();
/// let feedback = score(&secret, &guess);
///
/// // C(absent) R(absent) A(correct) N(absent) E(correct)
/// assert_eq!(feedback.to_string(), "--G-G");
/// assert_eq!(feedback.count(Outcome::Correct), 2);
/// ```
#[must_use]
pub fn score(secret: &Word, guess: &Word) -> Feedback {
    debug_assert_eq!(secret.len(), guess.len(), "guess length must match secret");

    let secret_letters = secret.letters();
    let guess_letters = guess.letters();
    let mut outcomes = vec![Outcome::Absent; guess_letters.len()];
    let mut available = secret.letter_counts();

    // First pass: exact position matches
    for (i, (&g, &s)) in guess_letters.iter().zip(secret_letters).enumerate() {
        if g == s {
            outcomes[i] = Outcome::Correct;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, but a copy remains
    for (outcome, &g) in outcomes.iter_mut().zip(guess_letters) {
        if *outcome == Outcome::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            *outcome = Outcome::Present;
            *count -= 1;
        }
    }

    Feedback(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use Outcome::{Absent, Correct, Present};

    fn scored(secret: &str, guess: &str) -> Vec<Outcome> {
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        score(&secret, &guess).outcomes().to_vec()
    }

    #[test]
    fn score_all_absent() {
        assert_eq!(scored("fghij", "abcde"), vec![Absent; 5]);
    }

    #[test]
    fn score_all_correct() {
        let secret = Word::new("crane").unwrap();
        let feedback = score(&secret, &secret);
        assert!(feedback.is_solved());
        assert_eq!(feedback.count(Correct), 5);
    }

    #[test]
    fn score_repeated_guess_letter_exhausts_supply() {
        // SPEED has two E's: the guess's E at 0 and E at 4 both claim one
        assert_eq!(
            scored("speed", "erase"),
            vec![Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn score_exact_match_claims_before_present() {
        // L at index 1 is exact; the L at index 0 takes the remaining copy.
        // Only one A in ALLOW, so the second A in LLAMA is absent.
        assert_eq!(
            scored("allow", "llama"),
            vec![Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn score_leftmost_present_wins_when_supply_runs_out() {
        // One E in the secret, three in the guess, none in place
        assert_eq!(
            scored("crane", "eeeky"),
            vec![Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn score_correct_letter_not_double_credited() {
        // ROBOT vs FLOOR: second O is exact, first O takes the other copy
        assert_eq!(
            scored("floor", "robot"),
            vec![Present, Present, Absent, Correct, Absent]
        );
        // Only one O in the secret and it is matched exactly
        assert_eq!(
            scored("phone", "ooooo"),
            vec![Absent, Absent, Correct, Absent, Absent]
        );
    }

    #[test]
    fn score_other_lengths() {
        assert_eq!(scored("cat", "act"), vec![Present, Present, Correct]);
        assert_eq!(scored("puzzles", "puzzles").len(), 7);
    }

    #[test]
    fn score_long_words_with_many_repeats() {
        let secret = Word::new("a".repeat(256)).unwrap();
        assert!(score(&secret, &secret).is_solved());

        // 256 A's against 255 A's and a B: every A still finds a copy
        let guess = Word::new(format!("b{}", "a".repeat(255))).unwrap();
        let feedback = score(&secret, &guess);
        assert_eq!(feedback.count(Correct), 255);
        assert_eq!(feedback.outcomes()[0], Absent);
    }

    #[test]
    fn feedback_parse_and_display() {
        let feedback: Feedback = "gy-_G".parse().unwrap();
        assert_eq!(
            feedback.outcomes(),
            &[Correct, Present, Absent, Absent, Correct]
        );
        assert_eq!(feedback.to_string(), "GY--G");
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜⬜🟩");
    }

    #[test]
    fn feedback_parse_invalid() {
        assert!("GXG".parse::<Feedback>().is_err());
        assert!("".parse::<Feedback>().is_err());
    }

    #[test]
    fn outcome_dominance_order() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert_eq!([Absent, Correct, Present].into_iter().max(), Some(Correct));
    }

    fn word_pair() -> impl Strategy<Value = (Word, Word)> {
        (1usize..=8).prop_flat_map(|len| {
            let letters = || proptest::collection::vec(b'A'..=b'F', len);
            (letters(), letters()).prop_map(|(s, g)| {
                let to_word = |bytes: Vec<u8>| Word::new(String::from_utf8(bytes).unwrap()).unwrap();
                (to_word(s), to_word(g))
            })
        })
    }

    proptest! {
        #[test]
        fn correct_count_matches_exact_positions((secret, guess) in word_pair()) {
            let feedback = score(&secret, &guess);
            let exact = secret
                .letters()
                .iter()
                .zip(guess.letters())
                .filter(|(s, g)| s == g)
                .count();
            prop_assert_eq!(feedback.count(Correct), exact);
        }

        #[test]
        fn credited_letters_never_exceed_supply((secret, guess) in word_pair()) {
            let feedback = score(&secret, &guess);
            let supply = secret.letter_counts();
            for letter in b'A'..=b'F' {
                let credited = guess
                    .letters()
                    .iter()
                    .zip(feedback.outcomes())
                    .filter(|&(&g, &o)| g == letter && o != Absent)
                    .count();
                let available = supply.get(&letter).copied().unwrap_or(0);
                prop_assert!(credited <= available);
            }
        }

        #[test]
        fn scoring_is_pure((secret, guess) in word_pair()) {
            let before = (secret.clone(), guess.clone());
            let first = score(&secret, &guess);
            let second = score(&secret, &guess);
            prop_assert_eq!(first, second);
            prop_assert_eq!((secret, guess), before);
        }
    }
}
