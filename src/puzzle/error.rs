//! Puzzle error types

use super::constraints::Violation;
use thiserror::Error;

/// Why an operation was refused
///
/// The first three are rejected guesses: the user sees the message and may try
/// again. None of them end the puzzle, and none change its state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("Not enough letters")]
    NotEnoughLetters,
    #[error("Not in word list")]
    NotInWordList,
    #[error("{0}")]
    HardModeViolation(Violation),
    #[error("invalid operation: {0}")]
    InvalidOperation(Misuse),
    #[error("'{0}' is not a letter")]
    InvalidCharacter(char),
}

impl PuzzleError {
    /// True for a guess rejected by validation
    #[must_use]
    pub const fn is_rejected_guess(&self) -> bool {
        matches!(
            self,
            Self::NotEnoughLetters | Self::NotInWordList | Self::HardModeViolation(_)
        )
    }
}

/// Operations that are usage errors rather than bad guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Misuse {
    #[error("the puzzle is already over")]
    PuzzleOver,
    #[error("hard mode can only be changed before the first guess")]
    HardModeLocked,
    #[error("the attempt has already been submitted")]
    AlreadySubmitted,
}

/// Failure to set up a puzzle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("the dictionary has no secret to offer")]
    NoSecret,
    #[error("secret has {found} letters but the dictionary uses {expected}")]
    LengthMismatch { expected: usize, found: usize },
}
