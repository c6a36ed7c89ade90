use serde::{Deserialize, Deserializer, Serialize};

use super::card::CatalogCard;

// ---------------------------------------------------------------------------
// DeckDescriptor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckDescriptor {
    #[serde(default)]
    pub format: Option<String>,
    /// Only consulted by the Pauper Commander rarity rule.
    #[serde(default, alias = "commanderScryfallId")]
    pub commander_catalog_id: Option<String>,
}

impl DeckDescriptor {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
            commander_catalog_id: None,
        }
    }

    pub fn with_commander(mut self, catalog_id: impl Into<String>) -> Self {
        self.commander_catalog_id = Some(catalog_id.into());
        self
    }
}

// ---------------------------------------------------------------------------
// DeckCardEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckCardEntry {
    #[serde(alias = "scryfallId", alias = "uuid")]
    pub catalog_id: String,
    #[serde(default, alias = "count", deserialize_with = "lenient_quantity")]
    pub quantity: u32,
}

impl DeckCardEntry {
    pub fn new(catalog_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            quantity,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum RawQuantity {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Read a quantity without ever failing: null, negative, fractional and
/// non-numeric values all become 0.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawQuantity>::deserialize(deserializer)?;
    let quantity = match raw {
        Some(RawQuantity::Int(n)) => u32::try_from(n).unwrap_or(if n > 0 { u32::MAX } else { 0 }),
        Some(RawQuantity::Float(f)) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 => {
            f.min(u32::MAX as f64) as u32
        }
        Some(RawQuantity::Text(s)) => s.trim().parse::<u32>().unwrap_or(0),
        _ => 0,
    };
    Ok(quantity)
}

// ---------------------------------------------------------------------------
// ResolvedEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEntry {
    pub entry: DeckCardEntry,
    pub card: CatalogCard,
}

impl ResolvedEntry {
    pub fn new(card: CatalogCard, quantity: u32) -> Self {
        Self {
            entry: DeckCardEntry::new(card.id.clone(), quantity),
            card,
        }
    }

    pub fn catalog_id(&self) -> &str {
        &self.entry.catalog_id
    }

    pub fn quantity(&self) -> u32 {
        self.entry.quantity
    }
}
