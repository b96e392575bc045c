//! Card system: the card model, collections, import validation and filters.
//!
//! ## Key Types
//!
//! - `Card`: A text prompt with a category and optional kind
//! - `Category` / `CategoryTag`: Known intensity tiers vs. what a card carries
//! - `Collection`: The loaded deck, in import order
//! - `FilterSet`: Which categories are eligible for drawing
//! - `ValidationMode`: How strictly imports are checked

pub mod collection;
pub mod definition;
pub mod filter;
pub mod validator;

pub use collection::Collection;
pub use definition::{Card, CardKind, Category, CategoryTag, UnknownCategory};
pub use filter::{active_subset, FilterSet};
pub use validator::{parse_collection, read_collection, validate, ValidationMode};
