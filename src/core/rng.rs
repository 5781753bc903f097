//! Die rolling sources.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical game
//! - **Serializable**: O(1) state capture and restore
//! - **Fakeable**: `SequenceRoller` replays a fixed list of faces for tests
//!
//! ```
//! use circle_dice::core::{DiceRoller, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll_die(), b.roll_die());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::config::DIE_FACES;

/// Anything that can produce a six-sided die face.
///
/// Implementations must return values in `1..=DIE_FACES`.
pub trait DiceRoller {
    /// Roll a single die.
    fn roll_die(&mut self) -> u8;
}

impl<R: DiceRoller + ?Sized> DiceRoller for &mut R {
    fn roll_die(&mut self) -> u8 {
        (**self).roll_die()
    }
}

/// Seeded RNG used by real games.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh random seed.
    ///
    /// The seed is still recorded so the game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceRoller for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many dice have been rolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of faces, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct SequenceRoller {
    faces: Vec<u8>,
    cursor: usize,
}

impl SequenceRoller {
    /// Create a roller cycling through `faces`.
    pub fn new(faces: Vec<u8>) -> Self {
        assert!(!faces.is_empty(), "SequenceRoller needs at least one face");
        assert!(
            faces.iter().all(|f| (1..=DIE_FACES).contains(f)),
            "faces must be in 1..={DIE_FACES}"
        );
        Self { faces, cursor: 0 }
    }

    /// Number of dice rolled so far.
    #[must_use]
    pub fn rolls_made(&self) -> usize {
        self.cursor
    }
}

impl DiceRoller for SequenceRoller {
    fn roll_die(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..32).map(|_| rng1.roll_die()).collect();
        let seq2: Vec<_> = (0..32).map(|_| rng2.roll_die()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_rolls_cover_all_faces() {
        let mut rng = GameRng::new(7);
        let mut seen = [0usize; DIE_FACES as usize];

        for _ in 0..6000 {
            let face = rng.roll_die();
            assert!((1..=DIE_FACES).contains(&face));
            seen[face as usize - 1] += 1;
        }

        // Roughly uniform: every face within a generous band around 1000
        assert!(seen.iter().all(|&n| (800..1200).contains(&n)), "{seen:?}");
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.roll_die();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll_die()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll_die()).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_sequence_roller_wraps() {
        let mut roller = SequenceRoller::new(vec![1, 6]);
        let rolls: Vec<_> = (0..5).map(|_| roller.roll_die()).collect();

        assert_eq!(rolls, vec![1, 6, 1, 6, 1]);
        assert_eq!(roller.rolls_made(), 5);
    }

    #[test]
    #[should_panic(expected = "faces must be in 1..=6")]
    fn test_sequence_roller_rejects_bad_face() {
        let _ = SequenceRoller::new(vec![0]);
    }
}
