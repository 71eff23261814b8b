//! Puzzle progress and its read-only snapshot

use super::attempt::Attempt;
use super::keyboard::KeyboardFeedback;

/// Options fixed when a puzzle is created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PuzzleConfig {
    pub hard_mode: bool,
}

impl PuzzleConfig {
    #[must_use]
    pub const fn new(hard_mode: bool) -> Self {
        Self { hard_mode }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Cursor, limits and outcome of a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    pub(super) active_attempt: usize,
    pub(super) active_slot: usize,
    pub(super) max_attempts: usize,
    pub(super) hard_mode: bool,
    pub(super) status: Status,
    pub(super) message: Option<String>,
}

impl PuzzleState {
    pub(super) const fn new(word_length: usize, hard_mode: bool) -> Self {
        Self {
            active_attempt: 0,
            active_slot: 0,
            max_attempts: word_length + 1,
            hard_mode,
            status: Status::InProgress,
            message: None,
        }
    }

    /// Index of the attempt being typed (or the last one scored, once over)
    #[must_use]
    pub const fn active_attempt(&self) -> usize {
        self.active_attempt
    }

    #[must_use]
    pub const fn active_slot(&self) -> usize {
        self.active_slot
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Latest rejection message, or the secret after a loss
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Owned copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSnapshot {
    pub state: PuzzleState,
    pub attempts: Vec<Attempt>,
    pub keyboard: KeyboardFeedback,
}
