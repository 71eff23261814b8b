//! Per-letter hints for the on-screen keyboard
//!
//! A derived view over submitted attempts. It never feeds back into scoring.

use super::attempt::Attempt;
use super::command::Command;
use crate::core::Outcome;

/// Letter rows of the on-screen keyboard, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best-known status of one letter
///
/// `Correct` dominates `Present` dominates `Absent` dominates `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum KeyStatus {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl From<Outcome> for KeyStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Absent => Self::Absent,
            Outcome::Present => Self::Present,
            Outcome::Correct => Self::Correct,
        }
    }
}

/// A key on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    /// The puzzle command this key sends
    #[must_use]
    pub const fn command(self) -> Command {
        match self {
            Self::Letter(ch) => Command::Type(ch),
            Self::Enter => Command::Submit,
            Self::Backspace => Command::Backspace,
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(ch) => ch.to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }
}

/// Full key layout: ENTER opens the bottom row and BACKSPACE closes it
#[must_use]
pub fn keyboard_layout() -> Vec<Vec<Key>> {
    let mut rows: Vec<Vec<Key>> = KEYBOARD_ROWS
        .iter()
        .map(|row| row.chars().map(Key::Letter).collect())
        .collect();
    if let Some(bottom) = rows.last_mut() {
        bottom.insert(0, Key::Enter);
        bottom.push(Key::Backspace);
    }
    rows
}

/// Status for every letter A-Z
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardFeedback {
    statuses: [KeyStatus; 26],
}

impl KeyboardFeedback {
    /// Recompute from every submitted attempt
    #[must_use]
    pub fn from_attempts(attempts: &[Attempt]) -> Self {
        let mut statuses = [KeyStatus::Unknown; 26];
        for attempt in attempts {
            for (_, letter, outcome) in attempt.scored_letters() {
                if let Some(i) = letter_index(letter) {
                    statuses[i] = statuses[i].max(outcome.into());
                }
            }
        }
        Self { statuses }
    }

    /// Status of `letter`, case-insensitive; non-letters are always `Unknown`
    #[must_use]
    pub fn status(&self, letter: char) -> KeyStatus {
        u8::try_from(letter)
            .ok()
            .and_then(letter_index)
            .map_or(KeyStatus::Unknown, |i| self.statuses[i])
    }

    /// `(letter, status)` for A through Z
    pub fn iter(&self) -> impl Iterator<Item = (char, KeyStatus)> + '_ {
        (b'A'..=b'Z').map(char::from).zip(self.statuses.iter().copied())
    }
}

fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| usize::from(letter.to_ascii_uppercase() - b'A'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, score};

    fn submitted(secret: &str, guess: &str) -> Attempt {
        let mut attempt = Attempt::new(guess.len());
        for (i, b) in guess.bytes().enumerate() {
            attempt.fill(i, b);
        }
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        attempt.reveal(&score(&secret, &guess));
        attempt
    }

    #[test]
    fn empty_keyboard_is_unknown() {
        let keyboard = KeyboardFeedback::from_attempts(&[Attempt::new(5)]);
        assert!(keyboard.iter().all(|(_, s)| s == KeyStatus::Unknown));
        assert_eq!(keyboard.iter().count(), 26);
    }

    #[test]
    fn statuses_follow_outcomes() {
        let keyboard = KeyboardFeedback::from_attempts(&[submitted("crane", "north")]);
        assert_eq!(keyboard.status('N'), KeyStatus::Present);
        assert_eq!(keyboard.status('r'), KeyStatus::Present);
        assert_eq!(keyboard.status('O'), KeyStatus::Absent);
        assert_eq!(keyboard.status('Z'), KeyStatus::Unknown);
        assert_eq!(keyboard.status('?'), KeyStatus::Unknown);
    }

    #[test]
    fn better_outcome_is_never_downgraded() {
        // A is correct in SLATE, only present in ADIEU
        let history = [submitted("crane", "slate"), submitted("crane", "adieu")];
        let keyboard = KeyboardFeedback::from_attempts(&history);
        assert_eq!(keyboard.status('A'), KeyStatus::Correct);
        assert_eq!(keyboard.status('E'), KeyStatus::Correct);
        assert_eq!(keyboard.status('D'), KeyStatus::Absent);
    }

    #[test]
    fn duplicate_letter_keeps_best_slot() {
        // EERIE vs CRANE: E at 4 correct, other E's absent
        let keyboard = KeyboardFeedback::from_attempts(&[submitted("crane", "eerie")]);
        assert_eq!(keyboard.status('E'), KeyStatus::Correct);
    }

    #[test]
    fn layout_has_enter_and_backspace_on_bottom_row() {
        let layout = keyboard_layout();
        assert_eq!(layout.len(), 3);
        assert_eq!(layout[0].len(), 10);
        assert_eq!(layout[2].first(), Some(&Key::Enter));
        assert_eq!(layout[2].last(), Some(&Key::Backspace));
        assert_eq!(Key::Letter('Q').command(), Command::Type('Q'));
        assert_eq!(Key::Enter.command(), Command::Submit);
    }
}
