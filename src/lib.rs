//! Wordle Puzzle
//!
//! A word-guessing puzzle engine: exact duplicate-letter scoring, hard-mode
//! constraints, keyboard hints, and a state machine driven by commands.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_puzzle::core::Word;
//! use wordle_puzzle::puzzle::{Command, Event, Puzzle, PuzzleConfig};
//! use wordle_puzzle::wordlists::{WordList, loader::words_from_slice};
//!
//! let words = WordList::from_answers(words_from_slice(&["crane", "slate"])).unwrap();
//! let secret = Word::new("crane").unwrap();
//! let mut puzzle = Puzzle::with_secret(&words, secret, PuzzleConfig::default()).unwrap();
//!
//! for ch in "slate".chars() {
//!     puzzle.apply(Command::Type(ch)).unwrap();
//! }
//! puzzle.apply(Command::Submit).unwrap();
//!
//! assert_eq!(puzzle.attempts()[0].feedback().unwrap().to_string(), "--G-G");
//! assert_eq!(puzzle.drain_events(), vec![Event::AttemptScored { attempt: 0 }]);
//! ```

// Core domain types
pub mod core;

// Word lists and the dictionary seam
pub mod wordlists;

// Puzzle state machine
pub mod puzzle;

// Session configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
