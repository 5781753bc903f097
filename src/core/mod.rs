//! Core types: players, dice rolling, configuration, errors.
//!
//! Everything the round engine and controller build on. Nothing in here
//! knows about rounds or neighbors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{
    GameConfig, DIE_FACES, MAX_PLAYERS, MIN_PLAYERS, SCORE_FACE, TRANSFER_FACE, UNROLLED_FACE,
};
pub use error::{GameError, Result};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{DiceRoller, GameRng, GameRngState, SequenceRoller};
