//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one whole guess per line.

use crate::config::GameConfig;
use crate::output::{print_board, print_keyboard, print_loss, print_victory};
use crate::puzzle::{Event, Puzzle, PuzzleError};
use crate::wordlists::{Dictionary, WordList};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// What the player asked for after a line of input
enum Step {
    Continue,
    NewGame,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a puzzle
/// cannot be created from the configuration.
pub fn run_simple(words: &WordList, config: &GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Puzzle - Line Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word. Type a whole guess and press Enter.",
        words.word_length()
    );
    println!("Commands: 'quit' to exit, 'new' for new game, 'hard' to toggle hard mode, 'keys' for the keyboard\n");

    let mut rng = config.rng();

    loop {
        let mut puzzle = config.new_puzzle(words, &mut rng)?;
        announce(&puzzle);

        let step = loop {
            let prompt = format!(
                "Guess {}/{}",
                puzzle.state().active_attempt() + 1,
                puzzle.state().max_attempts()
            );
            let step = handle_line(&mut puzzle, &get_user_input(&prompt)?);
            if !matches!(step, Step::Continue) || puzzle.is_over() {
                break step;
            }
        };

        match step {
            Step::Quit => break,
            Step::NewGame => println!("\n🔄 New game started!\n"),
            Step::Continue => match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => println!("\n🔄 New game started!\n"),
                _ => break,
            },
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn announce<D: Dictionary>(puzzle: &Puzzle<'_, D>) {
    let mode = if puzzle.hard_mode() {
        "Hard mode".red().bold()
    } else {
        "Normal mode".green()
    };
    println!(
        "{} · {} letters, {} guesses",
        mode,
        puzzle.word_length(),
        puzzle.state().max_attempts()
    );
}

fn handle_line<D: Dictionary>(puzzle: &mut Puzzle<'_, D>, input: &str) -> Step {
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Step::Quit,
        "new" | "n" => return Step::NewGame,
        "hard" => {
            match puzzle.toggle_hard_mode() {
                Ok(_) => announce(puzzle),
                Err(e) => println!("❌ {e}"),
            }
            return Step::Continue;
        }
        "keys" => {
            print_keyboard(&puzzle.snapshot());
            return Step::Continue;
        }
        "" => return Step::Continue,
        _ => {}
    }

    if input.chars().count() > puzzle.word_length() {
        println!("❌ Too many letters\n");
        return Step::Continue;
    }

    if let Err(e) = enter_guess(puzzle, input) {
        println!("❌ {e}\n");
        return Step::Continue;
    }

    for event in puzzle.drain_events() {
        let snapshot = puzzle.snapshot();
        match event {
            Event::InvalidSubmission(message) => println!("❌ {message}\n"),
            Event::AttemptScored { .. } => print_board(&snapshot),
            Event::Victory { attempts } => print_victory(&snapshot, attempts),
            Event::RevealSecret(secret) => print_loss(&snapshot, &secret),
        }
    }
    puzzle.clear_message();
    Step::Continue
}

/// Replace the current row with `input` and submit it
///
/// A rejected guess is reported through the event queue, so only usage
/// errors come back as `Err`.
fn enter_guess<D: Dictionary>(puzzle: &mut Puzzle<'_, D>, input: &str) -> Result<(), PuzzleError> {
    for _ in 0..puzzle.word_length() {
        puzzle.backspace()?;
    }
    for ch in input.chars() {
        puzzle.type_letter(ch)?;
    }
    match puzzle.submit() {
        Err(e) if e.is_rejected_guess() => Ok(()),
        other => other.map(|_| ()),
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // EOF behaves like quit
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::puzzle::{PuzzleConfig, Status};
    use crate::wordlists::loader::words_from_slice;

    fn words() -> WordList {
        WordList::from_answers(words_from_slice(&["crane", "slate", "north"])).unwrap()
    }

    fn puzzle(words: &WordList) -> Puzzle<'_, WordList> {
        let secret = Word::new("crane").unwrap();
        Puzzle::with_secret(words, secret, PuzzleConfig::default()).unwrap()
    }

    #[test]
    fn guess_line_is_submitted() {
        let words = words();
        let mut puzzle = puzzle(&words);

        assert!(matches!(handle_line(&mut puzzle, "slate"), Step::Continue));
        assert_eq!(puzzle.submitted_count(), 1);
    }

    #[test]
    fn rejected_line_leaves_row_editable() {
        let words = words();
        let mut puzzle = puzzle(&words);

        handle_line(&mut puzzle, "zzzzz");
        assert_eq!(puzzle.submitted_count(), 0);
        assert!(puzzle.message().is_none());

        handle_line(&mut puzzle, "crane");
        assert_eq!(puzzle.status(), Status::Won);
    }

    #[test]
    fn short_line_is_not_enough_letters() {
        let words = words();
        let mut puzzle = puzzle(&words);

        handle_line(&mut puzzle, "cra");
        assert_eq!(puzzle.submitted_count(), 0);
        handle_line(&mut puzzle, "slate");
        assert_eq!(puzzle.attempts()[0].text(), "SLATE");
    }

    #[test]
    fn invalid_characters_are_reported() {
        let words = words();
        let mut puzzle = puzzle(&words);

        handle_line(&mut puzzle, "sl4te");
        assert_eq!(puzzle.submitted_count(), 0);
    }

    #[test]
    fn commands_are_recognised() {
        let words = words();
        let mut puzzle = puzzle(&words);

        assert!(matches!(handle_line(&mut puzzle, "QUIT"), Step::Quit));
        assert!(matches!(handle_line(&mut puzzle, "new"), Step::NewGame));
        handle_line(&mut puzzle, "hard");
        assert!(puzzle.hard_mode());
    }
}
