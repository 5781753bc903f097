//! End-to-end games with fixed dice and scripted choices.
//!
//! These tests drive the public API the way the binary does: build a
//! controller, run it, and inspect standings and observed events.

use circle_dice::core::{GameConfig, GameError, PlayerId, SequenceRoller};
use circle_dice::decision::{ChoiceRequest, EventLog, GameEvent, NeighborPolicy, NullObserver, ScriptedDecisions};
use circle_dice::game::{GameController, GameResult};
use circle_dice::rules::Transfer;

fn p(i: u8) -> PlayerId {
    PlayerId::new(i)
}

/// Two players, one die each: the six banks, the one has nowhere to go.
#[test]
fn test_two_players_score_and_stranded_transfer() {
    let mut game = GameController::with_roller(
        GameConfig::new(2, 1),
        SequenceRoller::new(vec![6, 1]),
        ScriptedDecisions::default(),
        EventLog::new(),
    )
    .unwrap();

    let standings = game.run().unwrap();

    assert_eq!(game.rounds_played(), 1);
    let players = game.players();
    assert_eq!(players[p(0)].score(), 1);
    assert_eq!(players[p(0)].dice_count(), 0);
    assert_eq!(players[p(1)].score(), 0);
    assert_eq!(players[p(1)].dice_count(), 1);

    // The player without dice wins on score
    assert_eq!(standings.result(), &GameResult::Winner(p(0)));
    assert_eq!(game.observer().transfers().count(), 0);
    assert!(game.decisions().requests().is_empty());
}

/// Three players, the middle one rolls a one with both neighbors active.
#[test]
fn test_ambiguous_transfer_reprompts_on_invalid_choice() {
    // Round 1: [4, 1, 4]. Round 2 onwards: sixes for everyone.
    let mut game = GameController::with_roller(
        GameConfig::new(3, 1),
        SequenceRoller::new(vec![4, 1, 4, 6, 6, 6]),
        ScriptedDecisions::new([2, 3]),
        EventLog::new(),
    )
    .unwrap();

    let outcome = game.play_round().unwrap();

    let expected_request = ChoiceRequest::TransferTarget {
        source: p(1),
        dice: 1,
        previous: p(0),
        next: p(2),
    };
    assert_eq!(game.decisions().requests(), &[expected_request.clone(), expected_request]);
    assert_eq!(
        outcome.transfers.as_slice(),
        &[Transfer { from: p(1), to: p(2), dice: 1 }]
    );

    let rejected: Vec<_> = game
        .observer()
        .events()
        .iter()
        .filter_map(|e| match e {
            GameEvent::ChoiceRejected(err) => Some(err.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        rejected,
        vec![GameError::InvalidChoice { value: 2, previous: p(0), next: p(2) }]
    );

    let dice: Vec<_> = game.players().iter().map(|(_, pl)| pl.dice_count()).collect();
    assert_eq!(dice, vec![1, 0, 2]);
}

#[test]
fn test_fixed_sequence_four_players() {
    let mut game = GameController::with_roller(
        GameConfig::new(4, 2),
        SequenceRoller::new(vec![2, 1, 6, 4, 1, 3, 6, 5]),
        NeighborPolicy::PreferNext,
        NullObserver,
    )
    .unwrap();

    let standings = game.run().unwrap();

    assert_eq!(game.rounds_played(), 5);
    let scores: Vec<_> = standings.entries().iter().map(|e| e.score).collect();
    let dice: Vec<_> = standings.entries().iter().map(|e| e.dice).collect();
    assert_eq!(scores, vec![2, 2, 0, 2]);
    assert_eq!(dice, vec![0, 0, 2, 0]);
    assert_eq!(standings.result(), &GameResult::SharedVictory(vec![p(0), p(1), p(3)]));
}

#[test]
fn test_event_stream_brackets_the_game() {
    let config = GameConfig::new(3, 2).with_seed(11);
    let mut game = GameController::new(config.clone(), NeighborPolicy::PreferNext, EventLog::new()).unwrap();
    let standings = game.run().unwrap();

    let events = game.observer().events();
    assert_eq!(events.first(), Some(&GameEvent::GameStart(config)));
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameEnd { winners: standings.result().winners().to_vec() })
    );

    let round_ends = events
        .iter()
        .filter(|e| matches!(e, GameEvent::RoundEnd { .. }))
        .count();
    assert_eq!(round_ends as u32, game.rounds_played());
}

#[test]
fn test_unseeded_game_records_seed() {
    let game = GameController::new(GameConfig::new(2, 2), NeighborPolicy::PreferNext, NullObserver).unwrap();
    let seed = game.config().seed.expect("seed is filled in");

    let replay = GameController::new(GameConfig::new(2, 2).with_seed(seed), NeighborPolicy::PreferNext, NullObserver)
        .unwrap();
    assert_eq!(replay.config(), game.config());
}

#[test]
fn test_invalid_configuration_is_fatal() {
    let err = GameController::new(GameConfig::new(2, 0), NeighborPolicy::PreferNext, NullObserver).unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(err, GameError::invalid_config("number of dice must be greater than 0"));
}
