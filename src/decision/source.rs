//! Decision sources: where configuration counts and transfer choices come from.

use std::collections::VecDeque;

use crate::core::{GameError, PlayerId, Result};

/// A question the engine needs answered before it can continue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChoiceRequest {
    /// How many players sit at the table.
    PlayerCount,
    /// How many dice each player starts with.
    DicePerPlayer,
    /// Which neighbor receives `dice` transfer dice from `source`.
    ///
    /// Answered with the 1-based number of `previous` or `next`.
    TransferTarget {
        source: PlayerId,
        dice: usize,
        previous: PlayerId,
        next: PlayerId,
    },
}

/// Supplies answers to `ChoiceRequest`s.
///
/// Calls may block (a console waiting for a line). An answer the engine
/// rejects leads to the same request being issued again, so implementations
/// must tolerate repeats. Returning `InputUnavailable` aborts the game.
pub trait DecisionSource {
    /// Answer a request with an integer.
    fn request_choice(&mut self, request: &ChoiceRequest) -> Result<i64>;

    /// Called before every round's roll. Interactive sources pause here.
    fn confirm_roll(&mut self, _round: u32) -> Result<()> {
        Ok(())
    }
}

impl<D: DecisionSource + ?Sized> DecisionSource for &mut D {
    fn request_choice(&mut self, request: &ChoiceRequest) -> Result<i64> {
        (**self).request_choice(request)
    }

    fn confirm_roll(&mut self, round: u32) -> Result<()> {
        (**self).confirm_roll(round)
    }
}

/// Answers requests from a fixed script, in order.
///
/// Every request consumes one answer, including rejected ones. Once the
/// script runs out every request fails with `InputUnavailable`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDecisions {
    answers: VecDeque<i64>,
    asked: Vec<ChoiceRequest>,
}

impl ScriptedDecisions {
    /// Create a script from answers in the order they will be given.
    pub fn new(answers: impl IntoIterator<Item = i64>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Every request received so far, in order.
    #[must_use]
    pub fn requests(&self) -> &[ChoiceRequest] {
        &self.asked
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl DecisionSource for ScriptedDecisions {
    fn request_choice(&mut self, request: &ChoiceRequest) -> Result<i64> {
        self.asked.push(request.clone());
        self.answers
            .pop_front()
            .ok_or_else(|| GameError::InputUnavailable("decision script exhausted".into()))
    }
}

/// Resolves every transfer choice the same way, without asking anyone.
///
/// Used for unattended simulations. Cannot answer configuration requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NeighborPolicy {
    /// Always give to the next seat.
    #[default]
    PreferNext,
    /// Always give to the previous seat.
    PreferPrevious,
}

impl DecisionSource for NeighborPolicy {
    fn request_choice(&mut self, request: &ChoiceRequest) -> Result<i64> {
        match (*self, request) {
            (NeighborPolicy::PreferNext, ChoiceRequest::TransferTarget { next, .. }) => {
                Ok(next.number())
            }
            (NeighborPolicy::PreferPrevious, ChoiceRequest::TransferTarget { previous, .. }) => {
                Ok(previous.number())
            }
            (_, other) => Err(GameError::InputUnavailable(format!(
                "neighbor policy cannot answer {other:?}"
            ))),
        }
    }
}
