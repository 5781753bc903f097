//! Game controller: owns the table and drives rounds until the game ends.

use tracing::info;

use super::standings::Standings;
use crate::core::{DiceRoller, GameConfig, GameRng, GameRngState, Player, PlayerMap, Result};
use crate::decision::{DecisionSource, GameObserver};
use crate::rules::{NeighborResolver, RoundEngine, RoundOutcome};

/// Runs one game from the opening roll to the final standings.
///
/// ## Example
///
/// ```
/// use circle_dice::core::GameConfig;
/// use circle_dice::decision::{NeighborPolicy, NullObserver};
/// use circle_dice::game::GameController;
///
/// let config = GameConfig::new(4, 3).with_seed(7);
/// let mut game = GameController::new(config, NeighborPolicy::PreferNext, NullObserver).unwrap();
/// let standings = game.run().unwrap();
///
/// assert!(game.active_players() <= 1);
/// assert_eq!(standings.entries().len(), 4);
/// ```
#[derive(Debug)]
pub struct GameController<R, D, O> {
    config: GameConfig,
    resolver: NeighborResolver,
    players: PlayerMap<Player>,
    roller: R,
    decisions: D,
    observer: O,
    rounds_played: u32,
}

impl<D, O> GameController<GameRng, D, O>
where
    D: DecisionSource,
    O: GameObserver,
{
    /// Create a game rolling with a seeded `GameRng`.
    ///
    /// Without a seed in `config` a fresh one is drawn and written back, so
    /// `config().seed` always tells how to replay the game.
    pub fn new(mut config: GameConfig, decisions: D, observer: O) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        config.seed = Some(rng.seed());
        Self::with_roller(config, rng, decisions, observer)
    }

    /// Checkpoint of the dice stream, to resume rolling from this point.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.roller.state()
    }
}

impl<R, D, O> GameController<R, D, O>
where
    R: DiceRoller,
    D: DecisionSource,
    O: GameObserver,
{
    /// Create a game with any dice source.
    pub fn with_roller(config: GameConfig, roller: R, decisions: D, observer: O) -> Result<Self> {
        config.validate()?;
        let resolver = NeighborResolver::new(config.player_count)?;
        let players = PlayerMap::new(config.player_count, |_| Player::new(config.dice_per_player));

        Ok(Self {
            config,
            resolver,
            players,
            roller,
            decisions,
            observer,
            rounds_played: 0,
        })
    }

    /// The configuration this game was started with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The table, in seating order.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// The decision source, for inspection.
    #[must_use]
    pub fn decisions(&self) -> &D {
        &self.decisions
    }

    /// The observer, for inspection.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Rounds resolved so far.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Players still holding dice.
    #[must_use]
    pub fn active_players(&self) -> usize {
        self.players.iter().filter(|(_, p)| p.is_active()).count()
    }

    /// True once at most one player holds dice.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.active_players() <= 1
    }

    /// Resolve the next round.
    pub fn play_round(&mut self) -> Result<RoundOutcome> {
        let round = self.rounds_played + 1;
        let outcome = RoundEngine::new(
            &self.resolver,
            &mut self.roller,
            &mut self.decisions,
            &mut self.observer,
        )
        .run(round, &mut self.players)?;

        self.rounds_played = round;
        Ok(outcome)
    }

    /// Play rounds until the game ends, then report the standings.
    pub fn run(&mut self) -> Result<Standings> {
        info!(
            players = self.config.player_count,
            dice = self.config.dice_per_player,
            seed = ?self.config.seed,
            "game started"
        );
        self.observer.on_game_start(&self.config);

        while !self.is_over() {
            self.play_round()?;
        }

        let standings = self.standings();
        info!(
            rounds = self.rounds_played,
            winners = ?standings.result().winners(),
            top_score = standings.top_score(),
            "game over"
        );
        self.observer.on_game_end(&standings);

        Ok(standings)
    }

    /// Standings of the table as it is now.
    #[must_use]
    pub fn standings(&self) -> Standings {
        Standings::from_players(&self.players)
    }
}
