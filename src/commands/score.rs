//! One-off scoring of a guess against a secret

use crate::core::{Feedback, Word, score};

/// Result of scoring a guess
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret` without a dictionary
///
/// # Errors
///
/// Returns an error if either word is malformed or the lengths differ.
pub fn score_words(secret: &str, guess: &str) -> Result<ScoreResult, String> {
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    if secret.len() != guess.len() {
        return Err(format!(
            "Guess has {} letters but the secret has {}",
            guess.len(),
            secret.len()
        ));
    }

    let feedback = score(&secret, &guess);
    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_valid_pair() {
        let result = score_words("speed", "erase").unwrap();
        assert_eq!(result.secret.text(), "SPEED");
        assert_eq!(result.feedback.to_string(), "Y--YY");
    }

    #[test]
    fn scores_long_repeated_words() {
        let word = "a".repeat(256);
        let result = score_words(&word, &word).unwrap();
        assert!(result.feedback.is_solved());
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = score_words("speed", "cat").err().unwrap();
        assert_eq!(err, "Guess has 3 letters but the secret has 5");
    }

    #[test]
    fn rejects_malformed_words() {
        assert!(score_words("sp3ed", "erase").is_err());
        assert!(score_words("speed", "").is_err());
    }
}
