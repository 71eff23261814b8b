//! Terminal output formatting
//!
//! Display utilities for CLI results and line-mode play.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_loss, print_score_result, print_victory};
