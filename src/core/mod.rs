//! Core engine types: players, turn rotation, random sources, configuration.
//!
//! These are the building blocks the card, draw and session layers share.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{PlayerId, PlayerMap, Turn, PLAYER_COUNT};
pub use rng::{DrawRng, DrawRngState, RandomSource, ScriptedSource, UnitIntervalSource};
pub use config::SessionConfig;
