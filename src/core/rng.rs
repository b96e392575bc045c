//! Random sources for card selection.
//!
//! The draw engine never calls a platform random function directly. It asks
//! a [`RandomSource`] for a uniform index, so tests can pin the outcome and
//! sessions can be replayed from a seed.
//!
//! ## Implementations
//!
//! - [`DrawRng`]: seeded ChaCha8, the default for real sessions
//! - [`UnitIntervalSource`]: adapts any `[0, 1)` float generator
//! - [`ScriptedSource`]: replays a fixed list of indices
//!
//! ```
//! use prompt_deck::core::{DrawRng, RandomSource};
//!
//! let mut a = DrawRng::new(42);
//! let mut b = DrawRng::new(42);
//! assert_eq!(a.pick_index(10), b.pick_index(10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Capability that produces uniform indices.
pub trait RandomSource {
    /// Return an index uniformly distributed over `[0, len)`.
    ///
    /// Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Deterministic RNG for draws.
///
/// Uses ChaCha8 so a seed reproduces the same sequence of draws on every
/// platform.
#[derive(Clone, Debug)]
pub struct DrawRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DrawRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> DrawRngState {
        DrawRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DrawRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for DrawRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Serializable RNG state.
///
/// The ChaCha8 word position makes capture O(1) regardless of how many
/// draws have happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}

/// Adapter for generators that yield floats in `[0, 1)`.
///
/// The index is `floor(u * len)`, clamped into range so a generator that
/// misbehaves and returns 1.0 (or NaN) still yields a valid index.
pub struct UnitIntervalSource<F> {
    generator: F,
}

impl<F> UnitIntervalSource<F>
where
    F: FnMut() -> f64,
{
    pub fn new(generator: F) -> Self {
        Self { generator }
    }
}

impl<F> RandomSource for UnitIntervalSource<F>
where
    F: FnMut() -> f64,
{
    fn pick_index(&mut self, len: usize) -> usize {
        let u = (self.generator)();
        let scaled = (u * len as f64).floor();
        if scaled.is_nan() || scaled < 0.0 {
            0
        } else {
            (scaled as usize).min(len - 1)
        }
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
///
/// Each scripted value is reduced modulo `len`.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source from a non-empty script.
    ///
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "Script must not be empty");
        Self { script, cursor: 0 }
    }

    /// How many indices have been handed out.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = DrawRng::new(42);
        let mut rng2 = DrawRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.pick_index(1000), rng2.pick_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DrawRng::new(1);
        let mut rng2 = DrawRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.pick_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.pick_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_pick_index_in_range() {
        let mut rng = DrawRng::new(7);
        for len in 1..50 {
            assert!(rng.pick_index(len) < len);
        }
        assert_eq!(rng.pick_index(1), 0);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = DrawRng::new(42);
        for _ in 0..100 {
            rng.pick_index(1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.pick_index(1000)).collect();

        let mut restored = DrawRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.pick_index(1000)).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = DrawRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: DrawRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_unit_interval_floor() {
        let mut values = vec![0.0, 0.249, 0.25, 0.999].into_iter();
        let mut source = UnitIntervalSource::new(move || values.next().unwrap());

        assert_eq!(source.pick_index(4), 0);
        assert_eq!(source.pick_index(4), 0);
        assert_eq!(source.pick_index(4), 1);
        assert_eq!(source.pick_index(4), 3);
    }

    #[test]
    fn test_unit_interval_clamps_out_of_range() {
        let mut source = UnitIntervalSource::new(|| 1.0);
        assert_eq!(source.pick_index(3), 2);

        let mut source = UnitIntervalSource::new(|| f64::NAN);
        assert_eq!(source.pick_index(3), 0);

        let mut source = UnitIntervalSource::new(|| -0.5);
        assert_eq!(source.pick_index(3), 0);
    }

    #[test]
    fn test_scripted_source_cycles() {
        let mut source = ScriptedSource::new(vec![2, 0, 5]);

        assert_eq!(source.pick_index(3), 2);
        assert_eq!(source.pick_index(3), 0);
        assert_eq!(source.pick_index(3), 2); // 5 % 3
        assert_eq!(source.pick_index(3), 2); // wraps to the start
        assert_eq!(source.calls(), 4);
    }

    #[test]
    #[should_panic(expected = "Script must not be empty")]
    fn test_scripted_source_rejects_empty_script() {
        let _ = ScriptedSource::new(Vec::new());
    }

    #[test]
    fn test_borrowed_source() {
        fn pick(mut source: impl RandomSource) -> usize {
            source.pick_index(10)
        }

        let mut scripted = ScriptedSource::new(vec![4]);
        assert_eq!(pick(&mut scripted), 4);
        assert_eq!(scripted.calls(), 1);
    }
}
