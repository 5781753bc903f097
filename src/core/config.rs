//! Game configuration and the fixed dice model.
//!
//! A game is configured by two counts: how many players sit at the table
//! and how many dice each starts with. The optional seed makes the whole
//! game reproducible.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::decision::{ChoiceRequest, DecisionSource};

/// Number of faces on every die.
pub const DIE_FACES: u8 = 6;

/// Face that banks a point and removes the die.
pub const SCORE_FACE: u8 = 6;

/// Face that passes the die to a neighbor.
pub const TRANSFER_FACE: u8 = 1;

/// Placeholder face of a die that has not been rolled yet.
pub const UNROLLED_FACE: u8 = 0;

/// Fewest players a circle can have.
pub const MIN_PLAYERS: usize = 2;

/// Most players `PlayerId` can address.
pub const MAX_PLAYERS: usize = 255;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (2-255).
    pub player_count: usize,

    /// Dice each player starts with (at least 1).
    pub dice_per_player: usize,

    /// RNG seed. `None` draws a fresh seed at game start.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration without a fixed seed.
    ///
    /// Values are checked by `validate`, not here.
    #[must_use]
    pub fn new(player_count: usize, dice_per_player: usize) -> Self {
        Self {
            player_count,
            dice_per_player,
            seed: None,
        }
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total dice in play for the whole game.
    #[must_use]
    pub fn total_dice(&self) -> usize {
        self.player_count * self.dice_per_player
    }

    /// Check both counts.
    pub fn validate(&self) -> Result<()> {
        if self.player_count < MIN_PLAYERS {
            return Err(GameError::invalid_config(format!(
                "number of players must be at least {MIN_PLAYERS}, got {}",
                self.player_count
            )));
        }
        if self.player_count > MAX_PLAYERS {
            return Err(GameError::invalid_config(format!(
                "number of players must be at most {MAX_PLAYERS}, got {}",
                self.player_count
            )));
        }
        if self.dice_per_player == 0 {
            return Err(GameError::invalid_config(
                "number of dice must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Ask a decision source for both counts and validate them.
    ///
    /// Negative answers are rejected the same way as too-small ones.
    pub fn request<D: DecisionSource + ?Sized>(decisions: &mut D) -> Result<Self> {
        let players = decisions.request_choice(&ChoiceRequest::PlayerCount)?;
        let player_count = count_from_answer(players, "players")?;

        let dice = decisions.request_choice(&ChoiceRequest::DicePerPlayer)?;
        let dice_per_player = count_from_answer(dice, "dice")?;

        let config = Self::new(player_count, dice_per_player);
        config.validate()?;
        Ok(config)
    }
}

fn count_from_answer(value: i64, what: &str) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| GameError::invalid_config(format!("number of {what} cannot be {value}")))
}
