//! Hard-mode constraints carried forward from earlier guesses
//!
//! Three kinds of constraint:
//! - a letter scored `Correct` must stay in that position
//! - a letter scored `Present` must appear somewhere in the guess
//! - a letter scored `Present` cannot return to the position it was tried in
//!
//! A candidate is checked fixed positions first, then required letters, then
//! forbidden positions, each scanned left to right. Only the first violation
//! is reported.

use super::attempt::Attempt;
use crate::core::{Outcome, Word};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    FixedPosition,
    MustContain,
    ForbiddenPosition,
}

/// The first hard-mode rule a guess breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Violation {
    pub kind: ViolationKind,
    /// One-based position where the constraint was discovered
    pub position: usize,
    pub letter: char,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::FixedPosition => write!(
                f,
                "{} letter must be {}",
                ordinal(self.position),
                self.letter
            ),
            ViolationKind::MustContain => write!(f, "Guess must contain letter {}", self.letter),
            ViolationKind::ForbiddenPosition => write!(
                f,
                "{} letter cannot be {}",
                ordinal(self.position),
                self.letter
            ),
        }
    }
}

/// Constraints derived from every submitted attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    fixed: Vec<Option<u8>>,
    /// `(position, letter)` in the order they are checked, one per letter
    required: Vec<(usize, u8)>,
    /// Every `(position, letter)` scored `Present`, sorted by position
    forbidden: Vec<(usize, u8)>,
}

impl Constraints {
    /// Collect constraints from the submitted attempts in `attempts`
    ///
    /// Unsubmitted attempts are ignored.
    #[must_use]
    pub fn from_attempts(attempts: &[Attempt]) -> Self {
        let length = attempts.first().map_or(0, |a| a.slots().len());
        let mut fixed = vec![None; length];
        let mut forbidden: Vec<(usize, u8)> = Vec::new();

        for attempt in attempts {
            for (position, letter, outcome) in attempt.scored_letters() {
                match outcome {
                    Outcome::Correct => fixed[position] = Some(letter),
                    Outcome::Present => forbidden.push((position, letter)),
                    Outcome::Absent => {}
                }
            }
        }

        forbidden.sort_unstable();
        forbidden.dedup();

        // Each letter once, at the leftmost position it was seen present
        let mut required: Vec<(usize, u8)> = Vec::new();
        for &(position, letter) in &forbidden {
            if !required.iter().any(|&(_, l)| l == letter) {
                required.push((position, letter));
            }
        }

        Self {
            fixed,
            required,
            forbidden,
        }
    }

    /// Check a candidate guess
    ///
    /// # Errors
    ///
    /// Returns the first [`Violation`] found: fixed positions, then required
    /// letters, then forbidden positions, each scanned left to right.
    pub fn check(&self, guess: &Word) -> Result<(), Violation> {
        let letters = guess.letters();

        for (position, expected) in self.fixed.iter().enumerate() {
            if let Some(expected) = *expected
                && letters.get(position) != Some(&expected)
            {
                return Err(Violation {
                    kind: ViolationKind::FixedPosition,
                    position: position + 1,
                    letter: char::from(expected),
                });
            }
        }

        for &(position, letter) in &self.required {
            if !letters.contains(&letter) {
                return Err(Violation {
                    kind: ViolationKind::MustContain,
                    position: position + 1,
                    letter: char::from(letter),
                });
            }
        }

        for &(position, letter) in &self.forbidden {
            if letters.get(position) == Some(&letter) {
                return Err(Violation {
                    kind: ViolationKind::ForbiddenPosition,
                    position: position + 1,
                    letter: char::from(letter),
                });
            }
        }

        Ok(())
    }
}

/// English ordinal: 1st, 2nd, 3rd, 4th, ..., 11th, 21st
#[must_use]
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
