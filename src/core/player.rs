//! Player seats and turn rotation.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. The game has exactly two seats, so the only
//! valid ids are `PlayerId::FIRST` (0) and `PlayerId::SECOND` (1).
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by a fixed two-element array.
//!
//! ## Turn
//!
//! The turn tracker: an index into the two seats that flips on every
//! successful draw. No terminal state.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::ConfigError;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Seat identifier, always 0 or 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who draws first.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The other player.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat across the table.
    #[must_use]
    pub const fn other(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Iterate over both seats in order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::FIRST, PlayerId::SECOND].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 | 1 => Ok(PlayerId(value)),
            other => Err(ConfigError::InvalidSeat(other)),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use prompt_deck::core::{PlayerId, PlayerMap};
///
/// let mut names = PlayerMap::new(|p| p.to_string());
/// assert_eq!(names[PlayerId::FIRST], "Player 1");
///
/// names[PlayerId::SECOND] = "Sam".to_string();
/// assert_eq!(names[PlayerId::SECOND], "Sam");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a map from a pair of values in seat order.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
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

/// Whose turn it is.
///
/// Starts at `PlayerId::FIRST`. `advance` is the only transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    active: PlayerId,
}

impl Turn {
    /// Create a tracker with the first player active.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: PlayerId::FIRST,
        }
    }

    /// Create a tracker with a specific player active.
    #[must_use]
    pub const fn starting_with(active: PlayerId) -> Self {
        Self { active }
    }

    /// The player whose turn it is.
    #[must_use]
    pub const fn active(self) -> PlayerId {
        self.active
    }

    /// Raw index of the active player (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.active.index()
    }

    /// Hand the turn to the other player and return the new active player.
    pub fn advance(&mut self) -> PlayerId {
        self.active = self.active.other();
        self.active
    }
}
