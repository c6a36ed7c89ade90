//! Card catalog lookup consumed by callers before evaluation.
//!
//! The evaluator never resolves cards itself. Callers look entries up in a
//! [`CardCatalog`] and hand the evaluator [`ResolvedEntry`] values; a missing
//! card is reported here, as a [`LegalityError::NotFound`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{LegalityError, Result};
use crate::models::{CatalogCard, DeckCardEntry, ResolvedEntry};

// ---------------------------------------------------------------------------
// CardCatalog
// ---------------------------------------------------------------------------

/// Source of catalog cards keyed by printing identifier.
pub trait CardCatalog {
    fn get(&self, catalog_id: &str) -> Option<&CatalogCard>;
}

impl CardCatalog for HashMap<String, CatalogCard> {
    fn get(&self, catalog_id: &str) -> Option<&CatalogCard> {
        HashMap::get(self, catalog_id)
    }
}

/// Pair every deck entry with its catalog card.
///
/// Fails on the first entry whose identifier the catalog does not know.
pub fn resolve_entries<C: CardCatalog + ?Sized>(
    catalog: &C,
    entries: &[DeckCardEntry],
) -> Result<Vec<ResolvedEntry>> {
    entries
        .iter()
        .map(|entry| {
            let card = catalog.get(&entry.catalog_id).ok_or_else(|| {
                LegalityError::NotFound(format!("catalog card {}", entry.catalog_id))
            })?;
            Ok(ResolvedEntry {
                entry: entry.clone(),
                card: card.clone(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// InMemoryCatalog
// ---------------------------------------------------------------------------

/// A catalog snapshot held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    cards: HashMap<String, CatalogCard>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards<I: IntoIterator<Item = CatalogCard>>(cards: I) -> Self {
        let mut catalog = Self::new();
        for card in cards {
            catalog.insert(card);
        }
        catalog
    }

    /// Parse a catalog snapshot from JSON.
    ///
    /// Accepts an array of cards or an object mapping ids to cards, either
    /// of them optionally wrapped in `{ "data": ... }`. When the map form
    /// omits a card's `id`, the map key is used.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        match extract_data(value) {
            Value::Array(items) => {
                let cards = items
                    .into_iter()
                    .map(serde_json::from_value::<CatalogCard>)
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(Self::from_cards(cards))
            }
            Value::Object(map) => {
                let mut catalog = Self::new();
                for (key, mut item) in map {
                    if let Value::Object(ref mut fields) = item {
                        if !fields.contains_key("id") && !fields.contains_key("uuid") {
                            fields.insert("id".to_string(), Value::String(key));
                        }
                    }
                    catalog.insert(serde_json::from_value(item)?);
                }
                Ok(catalog)
            }
            other => Err(LegalityError::InvalidArgument(format!(
                "expected a card array or map, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&text)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            cards = catalog.len(),
            "loaded catalog snapshot"
        );
        Ok(catalog)
    }

    /// Insert a card, replacing any card with the same id.
    pub fn insert(&mut self, card: CatalogCard) -> Option<CatalogCard> {
        self.cards.insert(card.id.clone(), card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardCatalog for InMemoryCatalog {
    fn get(&self, catalog_id: &str) -> Option<&CatalogCard> {
        self.cards.get(catalog_id)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Extract the `"data"` field from a JSON wrapper, or return the value as-is
/// if there is no wrapper.
fn extract_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
