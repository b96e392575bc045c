//! Category filters.
//!
//! A `FilterSet` maps each known category to enabled/disabled. The active
//! subset (the draw pool) is every card whose category maps to `true`, in
//! original order. Unknown categories have no entry, so they never map to
//! `true` and never reach a pool.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::collection::Collection;
use super::definition::{Card, Category, CategoryTag};

/// Enabled/disabled flag per known category.
///
/// All three keys are always present; the default enables everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterSet {
    soft: bool,
    deep: bool,
    hot: bool,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::all_enabled()
    }
}

impl FilterSet {
    /// Every category enabled.
    #[must_use]
    pub const fn all_enabled() -> Self {
        Self {
            soft: true,
            deep: true,
            hot: true,
        }
    }

    /// Every category disabled.
    #[must_use]
    pub const fn none_enabled() -> Self {
        Self {
            soft: false,
            deep: false,
            hot: false,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut bool {
        match category {
            Category::Soft => &mut self.soft,
            Category::Deep => &mut self.deep,
            Category::Hot => &mut self.hot,
        }
    }

    /// Is this category enabled?
    #[must_use]
    pub const fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Soft => self.soft,
            Category::Deep => self.deep,
            Category::Hot => self.hot,
        }
    }

    /// Does this tag map to `true`? Unknown tags never do.
    #[must_use]
    pub fn allows(&self, tag: &CategoryTag) -> bool {
        tag.known().is_some_and(|category| self.is_enabled(category))
    }

    /// Set one category's flag.
    pub fn set(&mut self, category: Category, enabled: bool) {
        *self.slot_mut(category) = enabled;
    }

    /// Copy with one category's flag set (builder pattern).
    #[must_use]
    pub fn with(mut self, category: Category, enabled: bool) -> Self {
        self.set(category, enabled);
        self
    }

    /// Flip exactly one category in place and return its new flag.
    pub fn toggle(&mut self, category: Category) -> bool {
        let slot = self.slot_mut(category);
        *slot = !*slot;
        *slot
    }

    /// Copy with exactly one category flipped.
    #[must_use]
    pub fn toggled(mut self, category: Category) -> Self {
        self.toggle(category);
        self
    }

    /// Enabled categories in display order.
    #[must_use]
    pub fn enabled(&self) -> SmallVec<[Category; 3]> {
        Category::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }

    /// True when every category is off.
    #[must_use]
    pub fn is_none_enabled(&self) -> bool {
        !(self.soft || self.deep || self.hot)
    }

    /// The draw pool: cards whose category is enabled, in original order.
    #[must_use]
    pub fn active_subset<'a>(&self, collection: &'a Collection) -> Vec<&'a Card> {
        collection
            .iter()
            .filter(|card| self.allows(&card.category))
            .collect()
    }

    /// Size of the draw pool without materialising it.
    #[must_use]
    pub fn pool_size(&self, collection: &Collection) -> usize {
        collection
            .iter()
            .filter(|card| self.allows(&card.category))
            .count()
    }
}

/// The draw pool for `collection` under `filters`.
#[must_use]
pub fn active_subset<'a>(collection: &'a Collection, filters: &FilterSet) -> Vec<&'a Card> {
    filters.active_subset(collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Collection {
        Collection::from(vec![
            Card::new("s1", Category::Soft),
            Card::new("h1", Category::Hot),
            Card::new("x1", "mystery"),
            Card::new("d1", Category::Deep),
            Card::new("s2", Category::Soft),
        ])
    }

    fn texts(cards: &[&Card]) -> Vec<String> {
        cards.iter().map(|c| c.text.clone()).collect()
    }

    #[test]
    fn test_default_all_enabled() {
        let filters = FilterSet::default();
        for category in Category::ALL {
            assert!(filters.is_enabled(category));
        }
        assert_eq!(filters.enabled().as_slice(), &Category::ALL);
    }

    #[test]
    fn test_toggle_flips_only_named_key() {
        let mut filters = FilterSet::all_enabled();
        assert!(!filters.toggle(Category::Deep));

        assert!(filters.is_enabled(Category::Soft));
        assert!(!filters.is_enabled(Category::Deep));
        assert!(filters.is_enabled(Category::Hot));
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let filters = FilterSet::all_enabled().with(Category::Hot, false);
        for category in Category::ALL {
            assert_eq!(filters.toggled(category).toggled(category), filters);
        }
    }

    #[test]
    fn test_active_subset_keeps_order_and_skips_unknown() {
        let deck = deck();
        let all = active_subset(&deck, &FilterSet::all_enabled());
        assert_eq!(texts(&all), vec!["s1", "h1", "d1", "s2"]);

        let soft_only = FilterSet::none_enabled().with(Category::Soft, true);
        assert_eq!(texts(&soft_only.active_subset(&deck)), vec!["s1", "s2"]);
        assert_eq!(soft_only.pool_size(&deck), 2);
    }

    #[test]
    fn test_none_enabled_gives_empty_pool() {
        let filters = FilterSet::none_enabled();
        assert!(filters.is_none_enabled());
        assert!(filters.active_subset(&deck()).is_empty());
        assert_eq!(filters.pool_size(&deck()), 0);
    }

    #[test]
    fn test_unknown_tag_never_allowed() {
        let filters = FilterSet::all_enabled();
        assert!(!filters.allows(&CategoryTag::Unknown("mystery".to_string())));
        assert!(filters.allows(&CategoryTag::Known(Category::Deep)));
    }

    #[test]
    fn test_serde_shape() {
        let filters = FilterSet::all_enabled().with(Category::Deep, false);
        let json = serde_json::to_string(&filters).unwrap();
        assert_eq!(json, r#"{"soft":true,"deep":false,"hot":true}"#);

        assert!(serde_json::from_str::<FilterSet>(r#"{"spicy":true}"#).is_err());
    }
}
