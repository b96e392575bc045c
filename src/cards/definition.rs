//! The card model.
//!
//! A `Card` is a text prompt tagged with an intensity category and an
//! optional presentation kind. Cards are immutable once imported; every
//! other component exchanges them by reference or cheap clone.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The three known intensity tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Soft,
    Deep,
    Hot,
}

impl Category {
    /// Every known category, in display order.
    pub const ALL: [Category; 3] = [Category::Soft, Category::Deep, Category::Hot];

    /// Wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Soft => "soft",
            Category::Deep => "deep",
            Category::Hot => "hot",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known category names.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "soft" => Ok(Category::Soft),
            "deep" => Ok(Category::Deep),
            "hot" => Ok(Category::Hot),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// The category a card actually carries.
///
/// Imported collections may name categories outside the known three. Those
/// are kept verbatim as `Unknown` and can never be enabled by a filter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryTag {
    Known(Category),
    Unknown(String),
}

impl CategoryTag {
    /// The known category, if any.
    #[must_use]
    pub fn known(&self) -> Option<Category> {
        match self {
            CategoryTag::Known(category) => Some(*category),
            CategoryTag::Unknown(_) => None,
        }
    }

    /// Raw category name as it appeared in the payload.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            CategoryTag::Known(category) => category.as_str(),
            CategoryTag::Unknown(raw) => raw,
        }
    }
}

impl From<Category> for CategoryTag {
    fn from(category: Category) -> Self {
        CategoryTag::Known(category)
    }
}

impl From<String> for CategoryTag {
    fn from(raw: String) -> Self {
        match raw.parse() {
            Ok(category) => CategoryTag::Known(category),
            Err(_) => CategoryTag::Unknown(raw),
        }
    }
}

impl From<&str> for CategoryTag {
    fn from(raw: &str) -> Self {
        CategoryTag::from(raw.to_string())
    }
}

impl From<CategoryTag> for String {
    fn from(tag: CategoryTag) -> Self {
        match tag {
            CategoryTag::Known(category) => category.as_str().to_string(),
            CategoryTag::Unknown(raw) => raw,
        }
    }
}

/// Presentation hint carried in a card's `type` field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardKind {
    Question,
    Challenge,
    /// Any other value, kept as written.
    Other(String),
}

impl From<String> for CardKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "question" => CardKind::Question,
            "challenge" => CardKind::Challenge,
            _ => CardKind::Other(raw),
        }
    }
}

impl From<CardKind> for String {
    fn from(kind: CardKind) -> Self {
        match kind {
            CardKind::Question => "question".to_string(),
            CardKind::Challenge => "challenge".to_string(),
            CardKind::Other(raw) => raw,
        }
    }
}

/// A single prompt.
///
/// ## Example
///
/// ```
/// use prompt_deck::cards::{Card, CardKind, Category};
///
/// let card = Card::new("Share a memory.", Category::Deep).with_kind(CardKind::Challenge);
///
/// assert_eq!(card.category(), Some(Category::Deep));
/// assert_eq!(card.presentation_kind(), CardKind::Challenge);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Prompt shown to the players.
    pub text: String,

    /// Intensity tier.
    pub category: CategoryTag,

    /// Presentation hint, exactly as imported. `None` when absent.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CardKind>,
}

impl Card {
    /// Create a card with no `type`.
    #[must_use]
    pub fn new(text: impl Into<String>, category: impl Into<CategoryTag>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            kind: None,
        }
    }

    /// Set the presentation kind (builder pattern).
    #[must_use]
    pub fn with_kind(mut self, kind: CardKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// The card's known category, or `None` for an unknown tag.
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.category.known()
    }

    /// How the card should be presented.
    ///
    /// Only an explicit `challenge` is a challenge; a missing or
    /// unrecognised `type` is shown as a question.
    #[must_use]
    pub fn presentation_kind(&self) -> CardKind {
        match self.kind {
            Some(CardKind::Challenge) => CardKind::Challenge,
            _ => CardKind::Question,
        }
    }
}
