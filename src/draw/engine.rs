//! Uniform draw from the active subset.

use tracing::trace;

use crate::cards::{Card, Collection, FilterSet};
use crate::core::RandomSource;

/// Outcome of a single draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawResult<'a> {
    /// A card was selected; the turn should advance.
    Selected {
        card: &'a Card,
        /// Position of the card within the pool.
        pool_index: usize,
        /// Size of the pool the card was drawn from.
        pool_size: usize,
    },
    /// The pool is empty. Nothing should change.
    EmptyPool,
}

impl<'a> DrawResult<'a> {
    /// The selected card, if any.
    #[must_use]
    pub fn card(&self) -> Option<&'a Card> {
        match *self {
            DrawResult::Selected { card, .. } => Some(card),
            DrawResult::EmptyPool => None,
        }
    }

    /// Should the turn pass to the other player?
    #[must_use]
    pub fn advances_turn(&self) -> bool {
        matches!(self, DrawResult::Selected { .. })
    }
}

/// Pick one card uniformly from the cards `filters` allows.
///
/// Pure apart from consuming one value from `rng`, and only when the pool is
/// non-empty. Repeats are allowed: the previously drawn card is not excluded.
/// An index past the end of the pool is clamped to the last card.
///
/// ```
/// use prompt_deck::cards::{Card, Category, Collection, FilterSet};
/// use prompt_deck::core::ScriptedSource;
/// use prompt_deck::draw::{draw, DrawResult};
///
/// let deck = Collection::from(vec![
///     Card::new("a", Category::Soft),
///     Card::new("b", Category::Hot),
/// ]);
/// let mut rng = ScriptedSource::new(vec![1]);
///
/// let result = draw(&deck, &FilterSet::all_enabled(), &mut rng);
/// assert_eq!(result.card().unwrap().text, "b");
///
/// let none = FilterSet::none_enabled();
/// assert_eq!(draw(&deck, &none, &mut rng), DrawResult::EmptyPool);
/// ```
pub fn draw<'a, R>(collection: &'a Collection, filters: &FilterSet, rng: &mut R) -> DrawResult<'a>
where
    R: RandomSource + ?Sized,
{
    let pool = filters.active_subset(collection);
    if pool.is_empty() {
        return DrawResult::EmptyPool;
    }

    let pool_size = pool.len();
    let pool_index = rng.pick_index(pool_size).min(pool_size - 1);
    trace!(pool_size, pool_index, "selected card from pool");

    DrawResult::Selected {
        card: pool[pool_index],
        pool_index,
        pool_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;
    use crate::core::{DrawRng, ScriptedSource};

    fn deck() -> Collection {
        Collection::from(vec![
            Card::new("soft-1", Category::Soft),
            Card::new("hot-1", Category::Hot),
            Card::new("soft-2", Category::Soft),
            Card::new("odd", "unknown"),
        ])
    }

    #[test]
    fn test_index_is_into_the_pool() {
        let filters = FilterSet::none_enabled().with(Category::Soft, true);
        let mut rng = ScriptedSource::new(vec![1]);

        match draw(&deck(), &filters, &mut rng) {
            DrawResult::Selected {
                card,
                pool_index,
                pool_size,
            } => {
                assert_eq!(card.text, "soft-2");
                assert_eq!(pool_index, 1);
                assert_eq!(pool_size, 2);
            }
            DrawResult::EmptyPool => panic!("pool should not be empty"),
        }
    }

    #[test]
    fn test_empty_collection() {
        let empty = Collection::new();
        let mut rng = ScriptedSource::new(vec![0]);
        let result = draw(&empty, &FilterSet::all_enabled(), &mut rng);

        assert_eq!(result, DrawResult::EmptyPool);
        assert!(!result.advances_turn());
        assert_eq!(rng.calls(), 0);
    }

    #[test]
    fn test_filtered_to_nothing() {
        let filters = FilterSet::none_enabled().with(Category::Deep, true);
        let mut rng = ScriptedSource::new(vec![0]);

        assert_eq!(draw(&deck(), &filters, &mut rng), DrawResult::EmptyPool);
        assert_eq!(rng.calls(), 0);
    }

    #[test]
    fn test_unknown_category_never_drawn() {
        let deck = deck();
        let mut rng = DrawRng::new(3);
        for _ in 0..200 {
            let card = draw(&deck, &FilterSet::all_enabled(), &mut rng).card().unwrap();
            assert_ne!(card.text, "odd");
        }
    }

    #[test]
    fn test_repeats_allowed() {
        let single = Collection::from(vec![Card::new("only", Category::Deep)]);
        let mut rng = DrawRng::new(11);

        for _ in 0..5 {
            let result = draw(&single, &FilterSet::all_enabled(), &mut rng);
            assert_eq!(result.card().unwrap().text, "only");
            assert!(result.advances_turn());
        }
    }

    struct OutOfRange;

    impl RandomSource for OutOfRange {
        fn pick_index(&mut self, len: usize) -> usize {
            len
        }
    }

    #[test]
    fn test_out_of_range_source_is_clamped() {
        let single = Collection::from(vec![Card::new("only", Category::Deep)]);
        let result = draw(&single, &FilterSet::all_enabled(), &mut OutOfRange);
        assert_eq!(result.card().unwrap().text, "only");

        let deck = deck();
        match draw(&deck, &FilterSet::all_enabled(), &mut OutOfRange) {
            DrawResult::Selected {
                card,
                pool_index,
                pool_size,
            } => {
                assert_eq!(card.text, "soft-2");
                assert_eq!(pool_index, 2);
                assert_eq!(pool_size, 3);
            }
            DrawResult::EmptyPool => panic!("pool should not be empty"),
        }
    }

    #[test]
    fn test_boxed_source() {
        let deck = deck();
        let mut rng: Box<dyn RandomSource> = Box::new(ScriptedSource::new(vec![1]));

        let result = draw(&deck, &FilterSet::all_enabled(), &mut rng);
        assert_eq!(result.card().unwrap().text, "hot-1");
    }

    #[test]
    fn test_seeded_draws_reproduce() {
        let deck = deck();
        let filters = FilterSet::all_enabled();
        let mut a = DrawRng::new(42);
        let mut b = DrawRng::new(42);

        for _ in 0..50 {
            assert_eq!(draw(&deck, &filters, &mut a), draw(&deck, &filters, &mut b));
        }
    }
}
