//! Core domain types for the puzzle
//!
//! Words and the scoring algorithm. Everything here is pure and has no
//! knowledge of puzzle state.

mod feedback;
mod word;

pub use feedback::{Feedback, Outcome, score};
pub use word::{Word, WordError};
