//! Guess rows and their letter slots

use crate::core::{Feedback, Outcome, Word};

/// One letter position within an attempt
///
/// `outcome` stays `None` until the owning attempt is submitted and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSlot {
    position: usize,
    letter: Option<u8>,
    outcome: Option<Outcome>,
}

impl LetterSlot {
    const fn empty(position: usize) -> Self {
        Self {
            position,
            letter: None,
            outcome: None,
        }
    }

    /// Zero-based index within the attempt
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The typed letter, uppercase
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        self.letter.map(char::from)
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.letter.is_some()
    }
}

/// One guess row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    slots: Vec<LetterSlot>,
    submitted: bool,
}

impl Attempt {
    pub(super) fn new(length: usize) -> Self {
        Self {
            slots: (0..length).map(LetterSlot::empty).collect(),
            submitted: false,
        }
    }

    #[must_use]
    pub fn slots(&self) -> &[LetterSlot] {
        &self.slots
    }

    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(LetterSlot::is_filled)
    }

    /// The typed letters, with `_` for empty slots
    #[must_use]
    pub fn text(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.letter().unwrap_or('_'))
            .collect()
    }

    /// The guess as a word, once every slot is filled
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        if self.is_full() {
            Word::new(self.text()).ok()
        } else {
            None
        }
    }

    /// Scored outcomes, once submitted
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        if !self.submitted {
            return None;
        }
        self.slots
            .iter()
            .map(LetterSlot::outcome)
            .collect::<Option<Vec<_>>>()
            .map(Feedback::new)
    }

    /// Iterate `(position, letter, outcome)` over a submitted attempt
    pub(super) fn scored_letters(&self) -> impl Iterator<Item = (usize, u8, Outcome)> + '_ {
        self.slots
            .iter()
            .filter(|_| self.submitted)
            .filter_map(|slot| Some((slot.position, slot.letter?, slot.outcome?)))
    }

    /// First empty slot after `position`
    pub(super) fn next_empty_after(&self, position: usize) -> Option<usize> {
        self.slots
            .iter()
            .skip(position + 1)
            .find(|slot| !slot.is_filled())
            .map(LetterSlot::position)
    }

    pub(super) fn fill(&mut self, position: usize, letter: u8) {
        debug_assert!(!self.submitted, "submitted attempts are frozen");
        self.slots[position].letter = Some(letter.to_ascii_uppercase());
    }

    pub(super) fn clear(&mut self, position: usize) {
        debug_assert!(!self.submitted, "submitted attempts are frozen");
        self.slots[position].letter = None;
    }

    /// Freeze the attempt and tag each slot with its outcome
    pub(super) fn reveal(&mut self, feedback: &Feedback) {
        debug_assert!(!self.submitted, "an attempt is submitted exactly once");
        debug_assert_eq!(feedback.len(), self.slots.len());
        for (slot, &outcome) in self.slots.iter_mut().zip(feedback.outcomes()) {
            slot.outcome = Some(outcome);
        }
        self.submitted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    fn typed(text: &str) -> Attempt {
        let mut attempt = Attempt::new(text.len());
        for (i, b) in text.bytes().enumerate() {
            attempt.fill(i, b);
        }
        attempt
    }

    #[test]
    fn new_attempt_is_empty() {
        let attempt = Attempt::new(5);
        assert_eq!(attempt.slots().len(), 5);
        assert!(!attempt.is_submitted());
        assert!(!attempt.is_full());
        assert_eq!(attempt.text(), "_____");
        assert!(attempt.word().is_none());
        assert!(attempt.feedback().is_none());
    }

    #[test]
    fn filled_attempt_forms_word() {
        let attempt = typed("crane");
        assert!(attempt.is_full());
        assert_eq!(attempt.word().unwrap().text(), "CRANE");
        assert_eq!(attempt.slots()[0].letter(), Some('C'));
        assert!(attempt.slots().iter().all(|s| s.outcome().is_none()));
    }

    #[test]
    fn next_empty_after_skips_filled() {
        let mut attempt = Attempt::new(5);
        attempt.fill(0, b'A');
        attempt.fill(2, b'B');
        assert_eq!(attempt.next_empty_after(0), Some(1));
        assert_eq!(attempt.next_empty_after(1), Some(3));
        assert_eq!(attempt.next_empty_after(4), None);
    }

    #[test]
    fn reveal_sets_outcomes_and_freezes() {
        let mut attempt = typed("slate");
        let secret = Word::new("crane").unwrap();
        let feedback = score(&secret, &attempt.word().unwrap());
        attempt.reveal(&feedback);

        assert!(attempt.is_submitted());
        assert_eq!(attempt.feedback(), Some(feedback));
        assert_eq!(attempt.slots()[2].outcome(), Some(Outcome::Correct));
        assert_eq!(attempt.scored_letters().count(), 5);
    }

    #[test]
    fn unsubmitted_attempt_has_no_scored_letters() {
        assert_eq!(typed("slate").scored_letters().count(), 0);
    }
}
