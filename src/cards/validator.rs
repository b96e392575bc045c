//! Collection validator.
//!
//! Turns an externally supplied payload into a `Collection` or a
//! `RejectionReason`. Pure: nothing here touches session state.
//!
//! ## Pipeline
//!
//! ```text
//! bytes ──parse──▶ serde_json::Value ──validate──▶ Collection
//!   │                    │
//!   └─ ParseFailure      └─ MalformedStructure
//! ```
//!
//! ## Validation modes
//!
//! - `Strict` checks every element: each must be an object with a non-empty
//!   string `text` and a non-empty string `category`.
//! - `FirstElement` only inspects the first element, requiring `text` and
//!   `category` to be truthy (present and not null, false, 0 or empty). Later elements are accepted as
//!   they are; anything that cannot be typed becomes an empty text and/or an
//!   unknown category, which keeps it out of every draw pool.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Read;

use super::collection::Collection;
use super::definition::{Card, CardKind, CategoryTag};
use crate::error::{ImportResult, RejectionReason, StructureProblem};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// How thoroughly an import is checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Every element must be a well-formed card.
    #[default]
    Strict,
    /// Accept when the first element looks like a card.
    FirstElement,
}

/// Validate an already-parsed payload.
///
/// ```
/// use prompt_deck::cards::{validate, ValidationMode};
/// use serde_json::json;
///
/// let payload = json!([{ "type": "question", "category": "hot", "text": "..." }]);
/// let collection = validate(&payload, ValidationMode::Strict).unwrap();
/// assert_eq!(collection.len(), 1);
///
/// assert!(validate(&json!([]), ValidationMode::Strict).unwrap_err().is_malformed());
/// ```
pub fn validate(raw: &Value, mode: ValidationMode) -> ImportResult<Collection> {
    let elements = raw.as_array().ok_or(StructureProblem::NotAnArray)?;
    if elements.is_empty() {
        return Err(StructureProblem::EmptyArray.into());
    }

    match mode {
        ValidationMode::Strict => elements
            .iter()
            .enumerate()
            .map(|(index, element)| strict_card(index, element))
            .collect::<Result<Collection, StructureProblem>>()
            .map_err(RejectionReason::from),
        ValidationMode::FirstElement => {
            check_first_element(&elements[0])?;
            Ok(elements.iter().map(lenient_card).collect())
        }
    }
}

/// Parse raw bytes as JSON, then validate.
///
/// A leading UTF-8 byte order mark is ignored.
pub fn parse_collection(bytes: &[u8], mode: ValidationMode) -> ImportResult<Collection> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let raw: Value =
        serde_json::from_slice(bytes).map_err(|e| RejectionReason::parse(e.to_string()))?;
    validate(&raw, mode)
}

/// Read a payload to completion, then parse and validate it.
///
/// Read errors surface as `ParseFailure`.
pub fn read_collection<R: Read>(mut reader: R, mode: ValidationMode) -> ImportResult<Collection> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| RejectionReason::parse(e.to_string()))?;
    parse_collection(&bytes, mode)
}

fn strict_card(index: usize, element: &Value) -> Result<Card, StructureProblem> {
    let object = element
        .as_object()
        .ok_or(StructureProblem::NotAnObject { index })?;

    let text = non_empty_str(object, "text").ok_or(StructureProblem::MissingField {
        index,
        field: "text",
    })?;
    let category = non_empty_str(object, "category").ok_or(StructureProblem::MissingField {
        index,
        field: "category",
    })?;

    Ok(Card {
        text: text.to_string(),
        category: CategoryTag::from(category),
        kind: kind_of(object),
    })
}

fn check_first_element(first: &Value) -> Result<(), StructureProblem> {
    for field in ["text", "category"] {
        if !first.get(field).is_some_and(is_truthy) {
            return Err(StructureProblem::MissingField { index: 0, field });
        }
    }
    Ok(())
}

fn lenient_card(element: &Value) -> Card {
    let text = element.get("text").map(scalar_text).unwrap_or_default();
    let category = match element.get("category") {
        Some(Value::String(raw)) => CategoryTag::from(raw.as_str()),
        Some(other) => CategoryTag::Unknown(scalar_text(other)),
        None => CategoryTag::Unknown(String::new()),
    };

    Card {
        text,
        category,
        kind: element.as_object().and_then(kind_of),
    }
}

fn non_empty_str<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    object
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn kind_of(object: &Map<String, Value>) -> Option<CardKind> {
    match object.get("type")? {
        Value::Null => None,
        Value::String(raw) => Some(CardKind::from(raw.clone())),
        other => Some(CardKind::Other(other.to_string())),
    }
}

/// Text of a scalar as a prompt would show it. Containers and null become empty.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Loose truthiness: null, false, 0, NaN and "" are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
