//! # circle-dice
//!
//! Engine for a dice elimination game played around a table.
//!
//! Every round each player still holding dice rolls all of them. Sixes are
//! banked as points and leave the game; ones are handed to a neighbor. The
//! game ends when at most one player has dice left, and the highest score
//! wins, whether or not that player still holds dice.
//!
//! ## Design Principles
//!
//! 1. **Seats are permanent**: players without dice stay in the circle so
//!    everybody keeps the same neighbors.
//!
//! 2. **Order-sensitive removal**: score dice are removed before transfer dice,
//!    and transfers are applied as one batch after every decision is made.
//!
//! 3. **Injected collaborators**: dice come from a `DiceRoller`, choices from a
//!    `DecisionSource`, and output goes to a `GameObserver`. Seeded or scripted
//!    implementations make every game reproducible.
//!
//! ## Modules
//!
//! - `core`: players, dice rolling, configuration, errors
//! - `rules`: neighbor resolution and the round engine
//! - `decision`: decision sources and observers
//! - `game`: the controller loop and final standings

pub mod core;
pub mod decision;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    DiceRoller, GameConfig, GameError, GameRng, GameRngState, Player, PlayerId, PlayerMap, Result,
    SequenceRoller,
};

pub use crate::decision::{
    ChoiceRequest, DecisionSource, EventLog, GameEvent, GameObserver, NeighborPolicy, NullObserver,
    ScriptedDecisions,
};

pub use crate::game::{GameController, GameResult, StandingEntry, Standings, Tier};

pub use crate::rules::{
    Destination, NeighborResolver, Neighbors, RoundEngine, RoundOutcome, Transfer, TransferBatch,
};
