//! Formatting utilities for terminal output

use crate::core::Outcome;
use crate::puzzle::{Attempt, KEYBOARD_ROWS, KeyStatus, KeyboardFeedback};
use colored::{ColoredString, Colorize};

/// One letter as a coloured tile
#[must_use]
pub fn letter_tile(letter: char, outcome: Option<Outcome>) -> ColoredString {
    let tile = format!(" {letter} ");
    match outcome {
        Some(Outcome::Correct) => tile.black().on_green().bold(),
        Some(Outcome::Present) => tile.black().on_yellow().bold(),
        Some(Outcome::Absent) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// An attempt row as coloured tiles
#[must_use]
pub fn attempt_row(attempt: &Attempt) -> String {
    attempt
        .slots()
        .iter()
        .map(|slot| letter_tile(slot.letter().unwrap_or('_'), slot.outcome()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn key_tile(letter: char, status: KeyStatus) -> ColoredString {
    let key = letter.to_string();
    match status {
        KeyStatus::Correct => key.black().on_green().bold(),
        KeyStatus::Present => key.black().on_yellow().bold(),
        KeyStatus::Absent => key.bright_black(),
        KeyStatus::Unknown => key.white(),
    }
}

/// The keyboard as three coloured lines, each row indented like a real keyboard
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardFeedback) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|ch| key_tile(ch, keyboard.status(ch)).to_string())
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

/// Spoiler-free result grid, e.g. "3/6*" followed by emoji rows
///
/// `*` marks a hard-mode game; a loss shows `X` instead of the attempt count.
#[must_use]
pub fn share_text(attempts: &[Attempt], max_attempts: usize, won: bool, hard_mode: bool) -> String {
    let rows: Vec<String> = attempts
        .iter()
        .filter_map(Attempt::feedback)
        .map(|feedback| feedback.to_emoji())
        .collect();
    let score = if won {
        rows.len().to_string()
    } else {
        "X".to_string()
    };
    let star = if hard_mode { "*" } else { "" };
    format!("{score}/{max_attempts}{star}\n{}", rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::puzzle::{Puzzle, PuzzleConfig};
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;

    fn played(secret: &str, guesses: &[&str], hard_mode: bool) -> Vec<Attempt> {
        let words = WordList::from_answers(words_from_slice(&["crane", "slate", "north"])).unwrap();
        let secret = Word::new(secret).unwrap();
        let mut puzzle = Puzzle::with_secret(&words, secret, PuzzleConfig::new(hard_mode)).unwrap();
        for guess in guesses {
            for ch in guess.chars() {
                puzzle.type_letter(ch).unwrap();
            }
            puzzle.submit().unwrap();
        }
        puzzle.attempts().to_vec()
    }

    #[test]
    fn share_text_for_win() {
        let attempts = played("crane", &["slate", "crane"], false);
        assert_eq!(share_text(&attempts, 6, true, false), "2/6\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_text_marks_loss_and_hard_mode() {
        let attempts = played("crane", &["slate"], true);
        assert!(share_text(&attempts, 6, false, true).starts_with("X/6*\n"));
    }

    #[test]
    fn attempt_row_shows_placeholders() {
        colored::control::set_override(false);
        let attempts = played("crane", &[], false);
        assert_eq!(attempt_row(&attempts[0]), " _   _   _   _   _ ");
    }

    #[test]
    fn keyboard_has_three_rows() {
        colored::control::set_override(false);
        let lines = keyboard_lines(&KeyboardFeedback::default());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Q W E R T Y U I O P");
        assert!(lines[2].starts_with("  Z"));
    }
}
