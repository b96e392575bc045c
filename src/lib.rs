//! # prompt-deck
//!
//! Deck and turn engine for a two-player card-prompt game.
//!
//! Players take turns drawing a card (a text prompt tagged with an
//! intensity category) from a deck restricted by category filters. The deck
//! can be replaced at any time by importing a JSON card collection.
//!
//! ## Design Principles
//!
//! 1. **One owned state object**: `SessionState` holds everything and is
//!    changed only through its operations. No globals.
//!
//! 2. **Injected randomness**: draws ask a `RandomSource` for an index, so
//!    every draw is reproducible under a seed or a script.
//!
//! 3. **Errors as values**: rejected imports and empty pools are returned,
//!    never panicked on, and never leave the session half-updated.
//!
//! ## Modules
//!
//! - `core`: Players, turn rotation, random sources, configuration
//! - `cards`: Card model, collections, import validation, filters
//! - `draw`: Uniform draw from the active subset
//! - `session`: Session state and status messages
//! - `error`: Rejection and configuration errors

pub mod core;
pub mod cards;
pub mod draw;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, Turn,
    DrawRng, DrawRngState, RandomSource, ScriptedSource, UnitIntervalSource,
    SessionConfig,
};

pub use crate::cards::{
    Card, CardKind, Category, CategoryTag, Collection, FilterSet, ValidationMode,
    active_subset, parse_collection, read_collection, validate,
};

pub use crate::draw::{draw, DrawResult};

pub use crate::session::{DrawOutcome, DrawRefusal, DrawTicket, SessionState, StatusMessage};

pub use crate::error::{ConfigError, ImportResult, RejectionReason, StructureProblem};
