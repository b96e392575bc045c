//! Session configuration.
//!
//! `SessionConfig` holds everything a session needs at startup:
//! - Player display names
//! - Initial category filters
//! - How strictly imported collections are validated
//! - An optional RNG seed for reproducible draws
//!
//! Configs can be built in code or loaded from a JSON document where every
//! key is optional.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use super::rng::DrawRng;
use crate::cards::{FilterSet, ValidationMode};
use crate::error::ConfigError;

/// Startup configuration for a `SessionState`.
///
/// ## Example
///
/// ```
/// use prompt_deck::core::{PlayerId, SessionConfig};
/// use prompt_deck::cards::Category;
///
/// let config = SessionConfig::new()
///     .with_player_name(PlayerId::FIRST, "Ana")
///     .with_category(Category::Hot, false)
///     .with_seed(7);
///
/// assert_eq!(config.player_names[PlayerId::FIRST], "Ana");
/// assert!(!config.filters.is_enabled(Category::Hot));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Display names, in seat order.
    pub player_names: PlayerMap<String>,

    /// Filters the session starts with.
    pub filters: FilterSet,

    /// Validation applied to imported collections.
    pub validation: ValidationMode,

    /// Seed for the draw RNG. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_names: PlayerMap::new(|p| p.to_string()),
            filters: FilterSet::all_enabled(),
            validation: ValidationMode::default(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a config with default names, all filters on and strict validation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set a player's display name.
    #[must_use]
    pub fn with_player_name(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        self.player_names[player] = name.into();
        self
    }

    /// Set whether a category starts enabled.
    #[must_use]
    pub fn with_category(mut self, category: crate::cards::Category, enabled: bool) -> Self {
        self.filters.set(category, enabled);
        self
    }

    /// Set the validation mode for imports.
    #[must_use]
    pub fn with_validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the draw RNG this config describes.
    #[must_use]
    pub fn rng(&self) -> DrawRng {
        match self.seed {
            Some(seed) => DrawRng::new(seed),
            None => DrawRng::from_entropy(),
        }
    }
}
