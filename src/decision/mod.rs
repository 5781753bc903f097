//! External collaborators of the engine.
//!
//! - `DecisionSource`: answers configuration and transfer-destination questions
//! - `GameObserver`: one-way presentation of rolls, transfers and standings
//!
//! The engine only talks to these traits, so rules can be exercised without a
//! console. The binary provides the interactive implementations.

pub mod observer;
pub mod source;

pub use observer::{EventLog, GameEvent, GameObserver, NullObserver};
pub use source::{ChoiceRequest, DecisionSource, NeighborPolicy, ScriptedDecisions};
