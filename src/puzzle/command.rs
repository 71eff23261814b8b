//! Commands a driver sends to the puzzle, and the events it gets back

/// Every operation a presentation layer can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Type a letter into the active slot
    Type(char),
    Backspace,
    Submit,
    /// Only allowed before the first submission
    ToggleHardMode,
    /// Drop the transient message once it has been shown
    ClearMessage,
}

/// Transient signals for display; they carry no state of their own
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Event {
    /// A submission was rejected; the message says why
    InvalidSubmission(String),
    /// The attempt at this index was scored and frozen
    AttemptScored { attempt: usize },
    /// Solved, using this many attempts
    Victory { attempts: usize },
    /// Out of attempts; the secret is revealed
    RevealSecret(String),
}
