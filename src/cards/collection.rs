//! The loaded deck.
//!
//! A `Collection` is an ordered sequence of cards. The empty collection is a
//! valid state meaning "no deck loaded yet".
//!
//! Backed by `im::Vector` so a session snapshot clones in O(1).

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{Card, CategoryTag};

/// Ordered sequence of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    cards: Vector<Card>,
}

impl Collection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when no deck is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a position in original order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterate in original order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// How many cards carry each category tag, unknown tags included.
    #[must_use]
    pub fn category_counts(&self) -> FxHashMap<CategoryTag, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.category.clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl FromIterator<Card> for Collection {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Card>> for Collection {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
