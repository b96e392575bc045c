//! Draw engine.
//!
//! Selects one card uniformly at random from the active subset of a
//! collection. The engine holds no state: it reports what was drawn and
//! whether the turn should advance, and the session applies that.
//!
//! Randomness comes from an injected [`RandomSource`](crate::core::RandomSource),
//! so draws are reproducible under a fixed seed or script.

mod engine;

pub use engine::{draw, DrawResult};
