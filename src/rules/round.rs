//! One round of rolling and resolution.
//!
//! A round runs four phases strictly in order:
//!
//! 1. **Roll**: every active player rolls all their dice.
//! 2. **Score**: sixes are banked and those dice removed.
//! 3. **Transfer**: players who rolled ones pick a recipient. Decisions are
//!    made against who held dice after scoring, then the ones are removed
//!    from their owners.
//! 4. **Apply**: the batch of transfers is handed out in seating order.
//!
//! Scoring removal always happens before transfer removal, so a player never
//! loses more dice than they hold. Received dice arrive only after every
//! transfer is decided, so nobody can pass on dice they got this round.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::neighbors::{Destination, NeighborResolver, Neighbors};
use crate::core::{DiceRoller, Player, PlayerId, PlayerMap, Result};
use crate::decision::{ChoiceRequest, DecisionSource, GameObserver};

/// Dice moving from one player to a neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transfer {
    pub from: PlayerId,
    pub to: PlayerId,
    pub dice: usize,
}

/// The transfers of a single round, in seating order of their sources.
pub type TransferBatch = SmallVec<[Transfer; 4]>;

/// What happened in a resolved round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Round number, starting at 1.
    pub round: u32,
    /// Dice banked as points this round.
    pub scored: usize,
    /// Transfers applied this round.
    pub transfers: TransferBatch,
    /// Players holding dice after the round.
    pub active_players: usize,
}

impl RoundOutcome {
    /// True when at most one player still holds dice.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.active_players <= 1
    }
}

/// Resolves rounds against borrowed collaborators.
///
/// Construct one per round; it holds no state of its own between rounds.
pub struct RoundEngine<'a, R: ?Sized, D: ?Sized, O: ?Sized> {
    resolver: &'a NeighborResolver,
    roller: &'a mut R,
    decisions: &'a mut D,
    observer: &'a mut O,
}

impl<'a, R, D, O> RoundEngine<'a, R, D, O>
where
    R: DiceRoller + ?Sized,
    D: DecisionSource + ?Sized,
    O: GameObserver + ?Sized,
{
    /// Create an engine for one round.
    pub fn new(
        resolver: &'a NeighborResolver,
        roller: &'a mut R,
        decisions: &'a mut D,
        observer: &'a mut O,
    ) -> Self {
        Self {
            resolver,
            roller,
            decisions,
            observer,
        }
    }

    /// Play round number `round` on `players`.
    ///
    /// Fails only when the decision source cannot answer. A rejected transfer
    /// choice is reported to the observer and asked again.
    pub fn run(&mut self, round: u32, players: &mut PlayerMap<Player>) -> Result<RoundOutcome> {
        debug_assert_eq!(players.player_count(), self.resolver.player_count());

        self.observer.on_round_start(round);
        self.decisions.confirm_roll(round)?;

        self.roll(players);
        let scored = self.score(players);
        let transfers = self.resolve_transfers(players)?;
        self.apply_transfers(players, &transfers);

        let active_players = players.iter().filter(|(_, p)| p.is_active()).count();
        let outcome = RoundOutcome {
            round,
            scored,
            transfers,
            active_players,
        };

        info!(
            round,
            scored,
            transfers = outcome.transfers.len(),
            active_players,
            "round resolved"
        );
        self.observer.on_round_end(&outcome);

        Ok(outcome)
    }

    fn roll(&mut self, players: &mut PlayerMap<Player>) {
        for (id, player) in players.iter_mut() {
            if !player.is_active() {
                player.reset_round_counters();
                continue;
            }

            player.roll(&mut *self.roller);
            debug!(
                player = %id,
                dice = ?player.dice(),
                sixes = player.round_sixes(),
                ones = player.round_ones(),
                "rolled"
            );
            self.observer.on_roll(id, player);
        }
    }

    fn score(&mut self, players: &mut PlayerMap<Player>) -> usize {
        players
            .iter_mut()
            .map(|(_, player)| player.bank_score_dice())
            .sum()
    }

    /// Decide every transfer, then take the dice off their owners.
    fn resolve_transfers(&mut self, players: &mut PlayerMap<Player>) -> Result<TransferBatch> {
        let active = PlayerMap::new(players.player_count(), |id| players[id].is_active());
        let mut batch = TransferBatch::new();

        for (from, player) in players.iter() {
            let dice = player.round_ones();
            if dice == 0 {
                continue;
            }

            let to = match self.resolver.destination(from, |id| active[id]) {
                Destination::Fixed(to) => to,
                Destination::Choose(neighbors) => self.choose(from, dice, neighbors)?,
                Destination::Nobody => {
                    debug!(player = %from, dice, "no neighbor holds dice, keeping transfer dice");
                    continue;
                }
            };

            batch.push(Transfer { from, to, dice });
        }

        for transfer in &batch {
            players[transfer.from].remove_dice(transfer.dice);
        }

        Ok(batch)
    }

    /// Ask until the answer names one of the two neighbors.
    fn choose(&mut self, source: PlayerId, dice: usize, neighbors: Neighbors) -> Result<PlayerId> {
        let request = ChoiceRequest::TransferTarget {
            source,
            dice,
            previous: neighbors.previous,
            next: neighbors.next,
        };

        loop {
            let value = self.decisions.request_choice(&request)?;
            match neighbors.select(value) {
                Ok(target) => return Ok(target),
                Err(err) => {
                    warn!(player = %source, value, "rejected transfer choice");
                    self.observer.on_choice_rejected(&err);
                }
            }
        }
    }

    fn apply_transfers(&mut self, players: &mut PlayerMap<Player>, batch: &TransferBatch) {
        for transfer in batch {
            players[transfer.to].receive_dice(transfer.dice);
            debug!(from = %transfer.from, to = %transfer.to, dice = transfer.dice, "transferred");
            self.observer.on_transfer(transfer);
        }
    }
}
