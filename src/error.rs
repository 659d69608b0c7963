//! Error types for the arena.

use std::fmt;

/// Failures of the matchmaking rendezvous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// No battle could be produced: the matchmaker state is gone or the
    /// pairing thread died before delivering a report.
    Unavailable,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Unavailable => write!(f, "no battle available"),
        }
    }
}

impl std::error::Error for MatchError {}

/// Result type for matchmaking calls.
pub type MatchResult<T> = Result<T, MatchError>;
