//! Session configuration assembled from the command line

use crate::core::Word;
use crate::puzzle::{Puzzle, PuzzleConfig};
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{ANSWERS, WordList};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::convert::Infallible;
use std::path::PathBuf;
use std::str::FromStr;

/// Where guesses and secrets come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    /// Embedded answers plus the full list of accepted guesses
    Embedded,
    /// Embedded answers only, used for both secrets and guesses
    Answers,
    /// One word per line; used for both secrets and guesses
    File(PathBuf),
}

impl FromStr for WordlistSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "embedded" | "all" => Self::Embedded,
            "answers" => Self::Answers,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

impl WordlistSource {
    /// Build the dictionary
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its words are unusable.
    pub fn load(&self) -> Result<WordList> {
        let list = match self {
            Self::Embedded => WordList::embedded()?,
            Self::Answers => WordList::from_answers(words_from_slice(ANSWERS))?,
            Self::File(path) => {
                let words = load_from_file(path)
                    .with_context(|| format!("reading word list {}", path.display()))?;
                WordList::from_answers(words)
                    .with_context(|| format!("word list {}", path.display()))?
            }
        };
        Ok(list)
    }
}

/// Options that apply to every puzzle in a session
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub wordlist: WordlistSource,
    pub hard_mode: bool,
    /// Seed for secret selection; random when absent
    pub seed: Option<u64>,
    /// Fixed secret for every puzzle (practice and debugging)
    pub secret: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wordlist: WordlistSource::Embedded,
            hard_mode: false,
            seed: None,
            secret: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn puzzle_config(&self) -> PuzzleConfig {
        PuzzleConfig::new(self.hard_mode)
    }

    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Start a puzzle honouring `secret` if one was configured
    ///
    /// # Errors
    ///
    /// Returns an error if the configured secret is malformed or doesn't
    /// match the dictionary's word length.
    pub fn new_puzzle<'a>(
        &self,
        words: &'a WordList,
        rng: &mut StdRng,
    ) -> Result<Puzzle<'a, WordList>> {
        let puzzle = match &self.secret {
            Some(secret) => {
                let secret = Word::new(secret).context("invalid --secret")?;
                Puzzle::with_secret(words, secret, self.puzzle_config())?
            }
            None => Puzzle::new(words, rng, self.puzzle_config())?,
        };
        Ok(puzzle)
    }
}
