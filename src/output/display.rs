//! Display functions for command results and line-mode play

use super::formatters::{attempt_row, keyboard_lines, letter_tile, share_text};
use crate::commands::ScoreResult;
use crate::puzzle::PuzzleSnapshot;
use colored::Colorize;

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.text().bright_yellow().bold(),
        result.guess.text().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let tiles: Vec<String> = result
        .guess
        .text()
        .chars()
        .zip(result.feedback.outcomes())
        .map(|(letter, &outcome)| letter_tile(letter, Some(outcome)).to_string())
        .collect();
    println!("\n  {}", tiles.join(" "));
    println!("  {}   {}\n", result.feedback.to_emoji(), result.feedback);
}

/// Print every submitted row plus the row being typed
pub fn print_board(snapshot: &PuzzleSnapshot) {
    println!();
    for (i, attempt) in snapshot.attempts.iter().enumerate() {
        if attempt.is_submitted() || i == snapshot.state.active_attempt() {
            println!("  {}", attempt_row(attempt));
        }
    }
    println!();
}

pub fn print_keyboard(snapshot: &PuzzleSnapshot) {
    for line in keyboard_lines(&snapshot.keyboard) {
        println!("  {line}");
    }
    println!();
}

/// Celebration banner with the share grid
pub fn print_victory(snapshot: &PuzzleSnapshot, attempts: usize) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    println!("{}", "        🎉  P U Z Z L E   S O L V E D !  🎉".bright_green().bold());
    println!("{}", "═".repeat(50).bright_cyan());

    let verdict = match attempts {
        1 => "🏆 Genius!",
        2 => "⭐ Magnificent!",
        3 => "💫 Impressive!",
        4 => "✨ Splendid!",
        5 => "👍 Great!",
        _ => "😅 Phew!",
    };
    println!("\n  {}", verdict.bright_yellow().bold());
    print_share(snapshot, true);
}

pub fn print_loss(snapshot: &PuzzleSnapshot, secret: &str) {
    println!(
        "\n  {} The word was {}",
        "❌ Out of guesses.".red().bold(),
        secret.bright_yellow().bold()
    );
    print_share(snapshot, false);
}

fn print_share(snapshot: &PuzzleSnapshot, won: bool) {
    let text = share_text(
        &snapshot.attempts,
        snapshot.state.max_attempts(),
        won,
        snapshot.state.hard_mode(),
    );
    println!();
    for line in text.lines() {
        println!("  {line}");
    }
    println!();
}
