//! Game rules: circular seating and round resolution.
//!
//! - `neighbors`: who sits next to whom, and where transfer dice may go
//! - `round`: rolling, scoring, transferring and batching for one round
//!
//! Rules read and mutate `Player` state but never talk to a console; all
//! outside input arrives through `DecisionSource`.

pub mod neighbors;
pub mod round;

pub use neighbors::{Destination, NeighborResolver, Neighbors};
pub use round::{RoundEngine, RoundOutcome, Transfer, TransferBatch};
