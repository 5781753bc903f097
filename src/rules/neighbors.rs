//! Circular seating: who sits next to whom, and where transfer dice go.
//!
//! Seats wrap around, so the first player's previous neighbor is the last
//! player and the last player's next neighbor is the first. Inactive players
//! keep their seat; they are skipped as recipients, not removed.

use crate::core::{GameError, PlayerId, Result, MAX_PLAYERS, MIN_PLAYERS};

/// The two seats adjacent to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Neighbors {
    pub previous: PlayerId,
    pub next: PlayerId,
}

impl Neighbors {
    /// Map a 1-based player number onto one of the two neighbors.
    ///
    /// Any other number is an `InvalidChoice`.
    pub fn select(&self, value: i64) -> Result<PlayerId> {
        if value == self.previous.number() {
            Ok(self.previous)
        } else if value == self.next.number() {
            Ok(self.next)
        } else {
            Err(GameError::InvalidChoice {
                value,
                previous: self.previous,
                next: self.next,
            })
        }
    }
}

/// Where a player's transfer dice go this round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    /// Exactly one neighbor can receive.
    Fixed(PlayerId),
    /// Both neighbors can receive; the player must pick.
    Choose(Neighbors),
    /// No neighbor holds dice, so the transfer dice stay put.
    Nobody,
}

/// Neighbor lookups for a table of fixed size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborResolver {
    player_count: usize,
}

impl NeighborResolver {
    /// Create a resolver for `player_count` seats.
    pub fn new(player_count: usize) -> Result<Self> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(GameError::invalid_config(format!(
                "a circle needs {MIN_PLAYERS} to {MAX_PLAYERS} players, got {player_count}"
            )));
        }
        Ok(Self { player_count })
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// The seat before `player`, wrapping to the last seat.
    #[must_use]
    pub fn previous(&self, player: PlayerId) -> PlayerId {
        let n = self.player_count;
        PlayerId::new(((player.index() + n - 1) % n) as u8)
    }

    /// The seat after `player`, wrapping to the first seat.
    #[must_use]
    pub fn next(&self, player: PlayerId) -> PlayerId {
        PlayerId::new(((player.index() + 1) % self.player_count) as u8)
    }

    /// Both neighbors of `player`.
    #[must_use]
    pub fn neighbors(&self, player: PlayerId) -> Neighbors {
        Neighbors {
            previous: self.previous(player),
            next: self.next(player),
        }
    }

    /// Decide where `source`'s transfer dice go.
    ///
    /// `is_active` must reflect the table before any of this round's
    /// transfers. With two players both neighbors are the same seat, which
    /// never needs a choice.
    pub fn destination(&self, source: PlayerId, is_active: impl Fn(PlayerId) -> bool) -> Destination {
        let neighbors = self.neighbors(source);

        match (is_active(neighbors.previous), is_active(neighbors.next)) {
            (true, true) if neighbors.previous == neighbors.next => {
                Destination::Fixed(neighbors.next)
            }
            (true, true) => Destination::Choose(neighbors),
            (false, true) => Destination::Fixed(neighbors.next),
            (true, false) => Destination::Fixed(neighbors.previous),
            (false, false) => Destination::Nobody,
        }
    }
}
