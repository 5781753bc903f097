//! Whole-game flow: the controller that loops rounds and the final standings.

pub mod controller;
pub mod standings;

pub use controller::GameController;
pub use standings::{GameResult, StandingEntry, Standings, Tier};
