//! Word lists and the dictionary the puzzle consults
//!
//! The puzzle only needs two things from a dictionary: a membership test for
//! guesses and a way to pick a secret. [`WordList`] is the concrete
//! implementation used by the binary; tests build small ones in memory.

pub mod loader;

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use thiserror::Error;

// Generated by build.rs from data/answers.txt and data/allowed.txt
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

/// Source of valid guesses and secrets
pub trait Dictionary {
    /// Length shared by every word in the dictionary
    fn word_length(&self) -> usize;

    /// Membership test, case-insensitive
    fn is_valid_guess(&self, word: &str) -> bool;

    /// Choose a secret, or `None` if there is nothing to choose from
    fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Word>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordListError {
    #[error("word list has no answer words")]
    NoAnswers,
    #[error("word '{word}' has {found} letters, expected {expected}")]
    MixedLengths {
        word: String,
        expected: usize,
        found: usize,
    },
}

/// In-memory dictionary: a set of accepted guesses plus the answer pool
///
/// Answer words are always accepted as guesses.
#[derive(Debug, Clone)]
pub struct WordList {
    length: usize,
    allowed: FxHashSet<String>,
    answers: Vec<Word>,
}

impl WordList {
    /// Build a word list from accepted guesses and possible answers
    ///
    /// # Errors
    ///
    /// Returns `WordListError::NoAnswers` if `answers` is empty and
    /// `WordListError::MixedLengths` if the words don't all share the length
    /// of the first answer.
    pub fn new(
        allowed: impl IntoIterator<Item = Word>,
        answers: impl IntoIterator<Item = Word>,
    ) -> Result<Self, WordListError> {
        let answers: Vec<Word> = answers.into_iter().collect();
        let length = answers.first().ok_or(WordListError::NoAnswers)?.len();

        let mut set = FxHashSet::default();
        for word in answers.iter().cloned().chain(allowed) {
            if word.len() != length {
                return Err(WordListError::MixedLengths {
                    word: word.text().to_string(),
                    expected: length,
                    found: word.len(),
                });
            }
            set.insert(word.text().to_string());
        }

        Ok(Self {
            length,
            allowed: set,
            answers,
        })
    }

    /// Use the same words as both answers and accepted guesses
    ///
    /// # Errors
    ///
    /// Same as [`WordList::new`].
    pub fn from_answers(answers: Vec<Word>) -> Result<Self, WordListError> {
        Self::new(Vec::new(), answers)
    }

    /// The word lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded data is malformed.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(
            loader::words_from_slice(ALLOWED),
            loader::words_from_slice(ANSWERS),
        )
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of accepted guesses (answers included)
    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }
}

impl Dictionary for WordList {
    fn word_length(&self) -> usize {
        self.length
    }

    fn is_valid_guess(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.allowed.contains(w.text()))
    }

    fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Word> {
        self.answers.choose(rng).cloned()
    }
}
