//! Error types surfaced by the engine.
//!
//! Only two variants ever leave the engine: `InvalidConfiguration` at start-up
//! and `InputUnavailable` when a decision source runs dry. `InvalidChoice` is
//! recovered locally by re-issuing the request.

use super::player::PlayerId;

/// Errors produced while configuring or running a game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Player count or dice count out of range. No game is started.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable description of the rejected value.
        reason: String,
    },

    /// A transfer destination that is neither of the source's neighbors.
    #[error("invalid choice {value}: expected {previous} or {next}")]
    InvalidChoice {
        /// The rejected value as supplied.
        value: i64,
        /// Previous neighbor offered in the request.
        previous: PlayerId,
        /// Next neighbor offered in the request.
        next: PlayerId,
    },

    /// The decision source could not supply any value.
    #[error("input unavailable: {0}")]
    InputUnavailable(String),
}

impl GameError {
    /// Shorthand for an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Returns true if the error ends the game.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::InvalidChoice { .. })
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::invalid_config("player count must be at least 2, got 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration: player count must be at least 2, got 1"
        );

        let err = GameError::InvalidChoice {
            value: 2,
            previous: PlayerId::new(0),
            next: PlayerId::new(2),
        };
        assert_eq!(err.to_string(), "invalid choice 2: expected Player 1 or Player 3");
    }

    #[test]
    fn test_fatality() {
        assert!(GameError::invalid_config("x").is_fatal());
        assert!(GameError::InputUnavailable("eof".into()).is_fatal());
        assert!(!GameError::InvalidChoice {
            value: 9,
            previous: PlayerId::new(0),
            next: PlayerId::new(1),
        }
        .is_fatal());
    }
}
