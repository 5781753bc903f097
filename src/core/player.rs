//! Player identification, seat-indexed storage and per-player dice state.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting 2-255 players. Indices are 0-based,
//! display is 1-based ("Player 1") to match what people at the table say.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, indexable by `PlayerId`.
//!
//! ## Player
//!
//! The dice a player holds, the points they banked and the counters of the
//! most recent roll.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::{SCORE_FACE, TRANSFER_FACE, UNROLLED_FACE};
use super::rng::DiceRoller;

/// Seat identifier supporting up to 255 players.
///
/// Seat indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The 1-based player number used in prompts and transcripts.
    #[must_use]
    pub const fn number(self) -> i64 {
        self.0 as i64 + 1
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use circle_dice::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use circle_dice::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(3, 0);
/// scores[PlayerId::new(1)] = 4;
/// assert_eq!(scores[PlayerId::new(1)], 4);
/// assert_eq!(scores.player_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// Callers validate the seat count first; see `GameConfig::validate`.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seating order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One seat at the table.
///
/// Dice are held as their last rolled face. Dice that have not been rolled yet
/// (at game start, or just received from a neighbor) show `UNROLLED_FACE`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    dice: Vec<u8>,
    score: u32,
    round_ones: usize,
    round_sixes: usize,
}

impl Player {
    /// Create a player holding `dice_count` unrolled dice and no score.
    #[must_use]
    pub fn new(dice_count: usize) -> Self {
        Self {
            dice: vec![UNROLLED_FACE; dice_count],
            score: 0,
            round_ones: 0,
            round_sixes: 0,
        }
    }

    /// Faces currently held, in roll order.
    #[must_use]
    pub fn dice(&self) -> &[u8] {
        &self.dice
    }

    /// Number of dice held.
    #[must_use]
    pub fn dice_count(&self) -> usize {
        self.dice.len()
    }

    /// Points banked so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Transfer faces in the most recent roll.
    #[must_use]
    pub fn round_ones(&self) -> usize {
        self.round_ones
    }

    /// Score faces in the most recent roll.
    #[must_use]
    pub fn round_sixes(&self) -> usize {
        self.round_sixes
    }

    /// A player is active while holding at least one die.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.dice.is_empty()
    }

    /// Zero both round counters.
    pub fn reset_round_counters(&mut self) {
        self.round_ones = 0;
        self.round_sixes = 0;
    }

    /// Roll every held die and count score and transfer faces.
    ///
    /// Counters are reset first, so an inactive player ends with both at zero.
    pub fn roll<R: DiceRoller + ?Sized>(&mut self, roller: &mut R) {
        self.reset_round_counters();

        for die in &mut self.dice {
            *die = roller.roll_die();
            match *die {
                SCORE_FACE => self.round_sixes += 1,
                TRANSFER_FACE => self.round_ones += 1,
                _ => {}
            }
        }
    }

    /// Bank every score face of the last roll and drop those dice.
    ///
    /// Returns the number of dice removed.
    pub fn bank_score_dice(&mut self) -> usize {
        let sixes = self.round_sixes;
        if sixes > 0 {
            self.score += sixes as u32;
            self.remove_dice(sixes);
        }
        sixes
    }

    /// Remove `count` dice from the tail of the collection.
    pub fn remove_dice(&mut self, count: usize) {
        let keep = self.dice.len().saturating_sub(count);
        self.dice.truncate(keep);
    }

    /// Append `count` unrolled dice.
    pub fn receive_dice(&mut self, count: usize) {
        self.dice.resize(self.dice.len() + count, UNROLLED_FACE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::SequenceRoller;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(p1.number(), 2);
        assert_eq!(format!("{}", p0), "Player 1");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(4, |p| p.index() * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_mutation_and_iter() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(3, 0);
        for (player, value) in map.iter_mut() {
            *value = player.index() as i32 + 1;
        }

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(0), &1));
        assert_eq!(pairs[2], (PlayerId::new(2), &3));
        assert_eq!(map.player_ids().count(), 3);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }

    #[test]
    fn test_new_player() {
        let player = Player::new(3);
        assert_eq!(player.dice(), &[UNROLLED_FACE; 3]);
        assert_eq!(player.score(), 0);
        assert!(player.is_active());
        assert!(!Player::new(0).is_active());
    }

    #[test]
    fn test_roll_counts_faces() {
        let mut player = Player::new(5);
        let mut roller = SequenceRoller::new(vec![6, 1, 3, 6, 1]);

        player.roll(&mut roller);

        assert_eq!(player.dice(), &[6, 1, 3, 6, 1]);
        assert_eq!(player.round_sixes(), 2);
        assert_eq!(player.round_ones(), 2);
    }

    #[test]
    fn test_roll_resets_counters() {
        let mut player = Player::new(2);
        let mut roller = SequenceRoller::new(vec![6, 6, 2, 3]);

        player.roll(&mut roller);
        assert_eq!(player.round_sixes(), 2);

        player.roll(&mut roller);
        assert_eq!(player.round_sixes(), 0);
        assert_eq!(player.round_ones(), 0);
    }

    #[test]
    fn test_inactive_roll_consumes_nothing() {
        let mut player = Player::new(0);
        let mut roller = SequenceRoller::new(vec![6]);

        player.roll(&mut roller);

        assert_eq!(player.round_sixes(), 0);
        assert_eq!(roller.rolls_made(), 0);
    }

    #[test]
    fn test_bank_score_dice() {
        let mut player = Player::new(4);
        let mut roller = SequenceRoller::new(vec![6, 2, 6, 1]);
        player.roll(&mut roller);

        assert_eq!(player.bank_score_dice(), 2);
        assert_eq!(player.score(), 2);
        assert_eq!(player.dice_count(), 2);

        // Counters stay for the transfer phase
        assert_eq!(player.round_ones(), 1);
    }

    #[test]
    fn test_remove_and_receive() {
        let mut player = Player::new(2);
        player.remove_dice(5);
        assert!(!player.is_active());

        player.receive_dice(3);
        assert_eq!(player.dice(), &[UNROLLED_FACE; 3]);
    }
}
