//! The puzzle state machine
//!
//! A [`Puzzle`] owns its secret and every attempt row. Drivers feed it
//! [`Command`]s one at a time; each call runs to completion and either
//! succeeds or returns a [`PuzzleError`] with the state untouched (apart from
//! the transient message on a rejected guess). Display signals are queued as
//! [`Event`]s for the caller to drain.

mod attempt;
mod command;
mod constraints;
mod error;
mod keyboard;
mod state;

pub use attempt::{Attempt, LetterSlot};
pub use command::{Command, Event};
pub use constraints::{Constraints, Violation, ViolationKind, ordinal};
pub use error::{Misuse, PuzzleError, SetupError};
pub use keyboard::{KEYBOARD_ROWS, Key, KeyStatus, KeyboardFeedback, keyboard_layout};
pub use state::{PuzzleConfig, PuzzleSnapshot, PuzzleState, Status};

use crate::core::{Feedback, Word, score};
use crate::wordlists::Dictionary;
use rand::Rng;
use tracing::{debug, info};

/// One puzzle instance
///
/// Borrows its dictionary, so any number of puzzles can share one word list.
pub struct Puzzle<'a, D: Dictionary> {
    dictionary: &'a D,
    secret: Word,
    attempts: Vec<Attempt>,
    state: PuzzleState,
    keyboard: KeyboardFeedback,
    events: Vec<Event>,
}

impl<'a, D: Dictionary> Puzzle<'a, D> {
    /// Start a puzzle with a secret drawn from the dictionary
    ///
    /// # Errors
    ///
    /// Returns `SetupError::NoSecret` if the dictionary has nothing to offer.
    pub fn new<R: Rng + ?Sized>(
        dictionary: &'a D,
        rng: &mut R,
        config: PuzzleConfig,
    ) -> Result<Self, SetupError> {
        let secret = dictionary.pick_secret(rng).ok_or(SetupError::NoSecret)?;
        Self::with_secret(dictionary, secret, config)
    }

    /// Start a puzzle with a known secret
    ///
    /// The secret need not be a guessable word, but it must have the
    /// dictionary's length.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::LengthMismatch` if the lengths differ.
    ///
    /// # Examples
    /// ```
    /// use wordle_puzzle::core::Word;
    /// use wordle_puzzle::puzzle::{Puzzle, PuzzleConfig, Status};
    /// use wordle_puzzle::wordlists::{WordList, loader::words_from_slice};
    ///
    /// let words = WordList::from_answers(words_from_slice(&["crane", "slate"])).unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let mut puzzle = Puzzle::with_secret(&words, secret, PuzzleConfig::default()).unwrap();
    ///
    /// for ch in "crane".chars() {
    ///     puzzle.type_letter(ch).unwrap();
    /// }
    /// let feedback = puzzle.submit().unwrap();
    /// assert!(feedback.is_solved());
    /// assert_eq!(puzzle.status(), Status::Won);
    /// ```
    pub fn with_secret(
        dictionary: &'a D,
        secret: Word,
        config: PuzzleConfig,
    ) -> Result<Self, SetupError> {
        let length = dictionary.word_length();
        if secret.len() != length {
            return Err(SetupError::LengthMismatch {
                expected: length,
                found: secret.len(),
            });
        }

        let state = PuzzleState::new(length, config.hard_mode);
        let attempts = (0..state.max_attempts)
            .map(|_| Attempt::new(length))
            .collect();

        info!(
            length,
            max_attempts = state.max_attempts,
            hard_mode = config.hard_mode,
            "puzzle created"
        );

        Ok(Self {
            dictionary,
            secret,
            attempts,
            state,
            keyboard: KeyboardFeedback::default(),
            events: Vec::new(),
        })
    }

    #[must_use]
    pub const fn state(&self) -> &PuzzleState {
        &self.state
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn current_attempt(&self) -> &Attempt {
        &self.attempts[self.state.active_attempt]
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardFeedback {
        &self.keyboard
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.state.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.status.is_over()
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.state.hard_mode
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.state.message()
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    /// Number of attempts scored so far
    #[must_use]
    pub fn submitted_count(&self) -> usize {
        self.attempts.iter().filter(|a| a.is_submitted()).count()
    }

    /// The secret, but only once the puzzle is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.is_over().then_some(&self.secret)
    }

    #[must_use]
    pub fn snapshot(&self) -> PuzzleSnapshot {
        PuzzleSnapshot {
            state: self.state.clone(),
            attempts: self.attempts.clone(),
            keyboard: self.keyboard.clone(),
        }
    }

    /// Take every event queued since the last call
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Run one command
    ///
    /// # Errors
    ///
    /// Whatever the underlying operation returns.
    pub fn apply(&mut self, command: Command) -> Result<(), PuzzleError> {
        match command {
            Command::Type(ch) => self.type_letter(ch),
            Command::Backspace => self.backspace(),
            Command::Submit => self.submit().map(|_| ()),
            Command::ToggleHardMode => self.toggle_hard_mode().map(|_| ()),
            Command::ClearMessage => {
                self.clear_message();
                Ok(())
            }
        }
    }

    /// Write a letter into the active slot and move to the next empty one
    ///
    /// A filled last slot is never overwritten; only [`Puzzle::backspace`]
    /// clears it.
    ///
    /// # Errors
    ///
    /// `InvalidOperation` once the puzzle is over, `InvalidCharacter` for
    /// anything but an ASCII letter.
    pub fn type_letter(&mut self, ch: char) -> Result<(), PuzzleError> {
        self.ensure_in_progress()?;
        if !ch.is_ascii_alphabetic() {
            return Err(PuzzleError::InvalidCharacter(ch));
        }

        let slot = self.state.active_slot;
        let attempt = &mut self.attempts[self.state.active_attempt];
        if attempt.is_submitted() || attempt.slots()[slot].is_filled() {
            return Ok(());
        }

        attempt.fill(slot, ch.to_ascii_uppercase() as u8);
        if let Some(next) = attempt.next_empty_after(slot) {
            self.state.active_slot = next;
        }
        Ok(())
    }

    /// Clear the active slot, or step back one slot and clear that
    ///
    /// Never leaves the current attempt.
    ///
    /// # Errors
    ///
    /// `InvalidOperation` once the puzzle is over.
    pub fn backspace(&mut self) -> Result<(), PuzzleError> {
        self.ensure_in_progress()?;

        let slot = self.state.active_slot;
        let attempt = &mut self.attempts[self.state.active_attempt];
        if attempt.is_submitted() {
            return Ok(());
        }

        if attempt.slots()[slot].is_filled() {
            attempt.clear(slot);
        } else if slot > 0 {
            attempt.clear(slot - 1);
            self.state.active_slot = slot - 1;
        }
        Ok(())
    }

    /// Validate, score and freeze the active attempt
    ///
    /// Validation runs fully before anything is mutated: every slot filled,
    /// the word in the dictionary, then (in hard mode) the carried-forward
    /// constraints.
    ///
    /// # Errors
    ///
    /// `NotEnoughLetters`, `NotInWordList` or `HardModeViolation` for a
    /// rejected guess (the message is set and `InvalidSubmission` queued);
    /// `InvalidOperation` once the puzzle is over.
    pub fn submit(&mut self) -> Result<Feedback, PuzzleError> {
        self.ensure_in_progress()?;

        let index = self.state.active_attempt;
        let guess = match self.validate(index) {
            Ok(guess) => guess,
            Err(err) => {
                if err.is_rejected_guess() {
                    self.reject(&err);
                }
                return Err(err);
            }
        };

        let feedback = score(&self.secret, &guess);
        self.attempts[index].reveal(&feedback);
        self.keyboard = KeyboardFeedback::from_attempts(&self.attempts);
        self.events.push(Event::AttemptScored { attempt: index });
        debug!(attempt = index + 1, guess = %guess, feedback = %feedback, "guess scored");

        if feedback.is_solved() {
            self.state.status = Status::Won;
            self.events.push(Event::Victory {
                attempts: index + 1,
            });
            info!(attempts = index + 1, "puzzle solved");
        } else if index + 1 == self.state.max_attempts {
            self.state.status = Status::Lost;
            self.state.message = Some(self.secret.text().to_string());
            self.events
                .push(Event::RevealSecret(self.secret.text().to_string()));
            info!(secret = %self.secret, "puzzle lost");
        } else {
            self.state.active_attempt = index + 1;
            self.state.active_slot = 0;
        }

        Ok(feedback)
    }

    /// Flip hard mode; returns the new setting
    ///
    /// # Errors
    ///
    /// `InvalidOperation` once any attempt has been submitted.
    pub fn toggle_hard_mode(&mut self) -> Result<bool, PuzzleError> {
        if self.submitted_count() > 0 {
            return Err(PuzzleError::InvalidOperation(Misuse::HardModeLocked));
        }
        self.state.hard_mode = !self.state.hard_mode;
        debug!(hard_mode = self.state.hard_mode, "hard mode toggled");
        Ok(self.state.hard_mode)
    }

    /// Drop the transient message
    pub fn clear_message(&mut self) {
        self.state.message = None;
    }

    fn ensure_in_progress(&self) -> Result<(), PuzzleError> {
        if self.is_over() {
            Err(PuzzleError::InvalidOperation(Misuse::PuzzleOver))
        } else {
            Ok(())
        }
    }

    fn validate(&self, index: usize) -> Result<Word, PuzzleError> {
        let attempt = &self.attempts[index];
        if attempt.is_submitted() {
            return Err(PuzzleError::InvalidOperation(Misuse::AlreadySubmitted));
        }

        let guess = attempt.word().ok_or(PuzzleError::NotEnoughLetters)?;

        if !self.dictionary.is_valid_guess(guess.text()) {
            return Err(PuzzleError::NotInWordList);
        }

        if self.state.hard_mode {
            Constraints::from_attempts(&self.attempts)
                .check(&guess)
                .map_err(PuzzleError::HardModeViolation)?;
        }

        Ok(guess)
    }

    fn reject(&mut self, err: &PuzzleError) {
        let message = err.to_string();
        debug!(attempt = self.state.active_attempt + 1, reason = %message, "guess rejected");
        self.state.message = Some(message.clone());
        self.events.push(Event::InvalidSubmission(message));
    }
}
