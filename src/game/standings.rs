//! Final standings: scores ranked, ties grouped.
//!
//! Winners are decided by score alone. A player who ran out of dice early can
//! still win if nobody banked more points.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players share the top score.
    SharedVictory(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners().contains(&player)
    }

    /// Every winning player, in seating order.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            GameResult::Winner(p) => std::slice::from_ref(p),
            GameResult::SharedVictory(ps) => ps,
        }
    }
}

/// One line of the score table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub player: PlayerId,
    pub score: u32,
    /// Dice still held when the game ended.
    pub dice: usize,
}

/// Players sharing one score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub score: u32,
    pub players: Vec<PlayerId>,
}

/// Final scores of every seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    entries: Vec<StandingEntry>,
    tiers: Vec<Tier>,
    result: GameResult,
}

impl Standings {
    /// Compute standings from the final table.
    #[must_use]
    pub fn from_players(players: &PlayerMap<Player>) -> Self {
        let entries: Vec<StandingEntry> = players
            .iter()
            .map(|(player, state)| StandingEntry {
                player,
                score: state.score(),
                dice: state.dice_count(),
            })
            .collect();

        let mut ranked = entries.clone();
        // Stable sort keeps seating order inside a tier
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        let mut tiers: Vec<Tier> = Vec::new();
        for entry in ranked {
            match tiers.last_mut() {
                Some(tier) if tier.score == entry.score => tier.players.push(entry.player),
                _ => tiers.push(Tier {
                    score: entry.score,
                    players: vec![entry.player],
                }),
            }
        }

        let result = match tiers.first().map(|t| t.players.as_slice()) {
            Some([single]) => GameResult::Winner(*single),
            Some(several) => GameResult::SharedVictory(several.to_vec()),
            None => GameResult::SharedVictory(Vec::new()),
        };

        Self {
            entries,
            tiers,
            result,
        }
    }

    /// One entry per seat, in seating order.
    #[must_use]
    pub fn entries(&self) -> &[StandingEntry] {
        &self.entries
    }

    /// Score groups from highest to lowest.
    #[must_use]
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Who won.
    #[must_use]
    pub fn result(&self) -> &GameResult {
        &self.result
    }

    /// The winning score.
    #[must_use]
    pub fn top_score(&self) -> u32 {
        self.tiers.first().map_or(0, |t| t.score)
    }
}
