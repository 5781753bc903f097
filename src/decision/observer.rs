//! Presentation sinks: one-way reports of what happens at the table.

use crate::core::{GameConfig, GameError, Player, PlayerId};
use crate::game::Standings;
use crate::rules::{RoundOutcome, Transfer};

/// Receives game events in the order they happen.
///
/// All hooks default to doing nothing. Nothing an observer does can change
/// the game.
pub trait GameObserver {
    /// The table is set. `config.seed` holds the seed actually used.
    fn on_game_start(&mut self, _config: &GameConfig) {}

    /// A round is about to roll. Rounds are numbered from 1.
    fn on_round_start(&mut self, _round: u32) {}

    /// `player` just rolled, before score dice are banked.
    fn on_roll(&mut self, _player: PlayerId, _state: &Player) {}

    /// A transfer choice was rejected and will be asked again.
    fn on_choice_rejected(&mut self, _error: &GameError) {}

    /// Dice are handed over while the round's transfer batch is applied.
    fn on_transfer(&mut self, _transfer: &Transfer) {}

    /// The round is fully resolved.
    fn on_round_end(&mut self, _outcome: &RoundOutcome) {}

    /// The game is over.
    fn on_game_end(&mut self, _standings: &Standings) {}
}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn on_game_start(&mut self, config: &GameConfig) {
        (**self).on_game_start(config);
    }

    fn on_round_start(&mut self, round: u32) {
        (**self).on_round_start(round);
    }

    fn on_roll(&mut self, player: PlayerId, state: &Player) {
        (**self).on_roll(player, state);
    }

    fn on_choice_rejected(&mut self, error: &GameError) {
        (**self).on_choice_rejected(error);
    }

    fn on_transfer(&mut self, transfer: &Transfer) {
        (**self).on_transfer(transfer);
    }

    fn on_round_end(&mut self, outcome: &RoundOutcome) {
        (**self).on_round_end(outcome);
    }

    fn on_game_end(&mut self, standings: &Standings) {
        (**self).on_game_end(standings);
    }
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// A recorded observer callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    GameStart(GameConfig),
    RoundStart(u32),
    Roll { player: PlayerId, dice: Vec<u8>, score: u32 },
    ChoiceRejected(GameError),
    Transfer(Transfer),
    RoundEnd { round: u32, active_players: usize },
    GameEnd { winners: Vec<PlayerId> },
}

/// Keeps every event for later inspection.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in the order they were observed.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Only the transfer events.
    pub fn transfers(&self) -> impl Iterator<Item = &Transfer> {
        self.events.iter().filter_map(|e| match e {
            GameEvent::Transfer(t) => Some(t),
            _ => None,
        })
    }
}

impl GameObserver for EventLog {
    fn on_game_start(&mut self, config: &GameConfig) {
        self.events.push(GameEvent::GameStart(config.clone()));
    }

    fn on_round_start(&mut self, round: u32) {
        self.events.push(GameEvent::RoundStart(round));
    }

    fn on_roll(&mut self, player: PlayerId, state: &Player) {
        self.events.push(GameEvent::Roll {
            player,
            dice: state.dice().to_vec(),
            score: state.score(),
        });
    }

    fn on_choice_rejected(&mut self, error: &GameError) {
        self.events.push(GameEvent::ChoiceRejected(error.clone()));
    }

    fn on_transfer(&mut self, transfer: &Transfer) {
        self.events.push(GameEvent::Transfer(*transfer));
    }

    fn on_round_end(&mut self, outcome: &RoundOutcome) {
        self.events.push(GameEvent::RoundEnd {
            round: outcome.round,
            active_players: outcome.active_players,
        });
    }

    fn on_game_end(&mut self, standings: &Standings) {
        self.events.push(GameEvent::GameEnd {
            winners: standings.result().winners().to_vec(),
        });
    }
}
