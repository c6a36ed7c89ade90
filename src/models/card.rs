use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::format::Format;

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Printed rarity of a card.
///
/// Parsing is case-insensitive. Missing or unrecognised values land in
/// [`Rarity::Other`], which no rarity rule ever flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Mythic,
    Special,
    #[default]
    Other,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Mythic => "mythic",
            Rarity::Special => "special",
            Rarity::Other => "other",
        }
    }
}

impl From<Option<String>> for Rarity {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref().map(|r| r.trim().to_lowercase()).as_deref() {
            Some("common") => Rarity::Common,
            Some("uncommon") => Rarity::Uncommon,
            Some("rare") => Rarity::Rare,
            Some("mythic") | Some("mythic rare") => Rarity::Mythic,
            Some("special") | Some("bonus") => Rarity::Special,
            _ => Rarity::Other,
        }
    }
}

impl From<&str> for Rarity {
    fn from(raw: &str) -> Self {
        Rarity::from(Some(raw.to_string()))
    }
}

impl From<Rarity> for String {
    fn from(rarity: Rarity) -> Self {
        rarity.as_str().to_string()
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LegalityStatus
// ---------------------------------------------------------------------------

/// Per-format legality of a card.
///
/// Accepts both the snake_case spelling (`not_legal`) and the MTGJSON
/// spelling (`Not Legal`). `Suspended` is read as [`LegalityStatus::Banned`].
/// Anything missing or unrecognised is [`LegalityStatus::NotLegal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum LegalityStatus {
    Legal,
    #[default]
    NotLegal,
    Banned,
    Restricted,
}

impl LegalityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegalityStatus::Legal => "legal",
            LegalityStatus::NotLegal => "not_legal",
            LegalityStatus::Banned => "banned",
            LegalityStatus::Restricted => "restricted",
        }
    }

    /// Whether a card with this status may not be played at all.
    pub fn is_illegal(&self) -> bool {
        matches!(self, LegalityStatus::NotLegal | LegalityStatus::Banned)
    }
}

impl From<Option<String>> for LegalityStatus {
    fn from(raw: Option<String>) -> Self {
        let normalized = raw
            .map(|s| s.trim().to_lowercase().replace([' ', '-'], "_"))
            .unwrap_or_default();
        match normalized.as_str() {
            "legal" => LegalityStatus::Legal,
            "banned" | "suspended" => LegalityStatus::Banned,
            "restricted" => LegalityStatus::Restricted,
            _ => LegalityStatus::NotLegal,
        }
    }
}

impl From<&str> for LegalityStatus {
    fn from(raw: &str) -> Self {
        LegalityStatus::from(Some(raw.to_string()))
    }
}

impl From<LegalityStatus> for String {
    fn from(status: LegalityStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for LegalityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CatalogCard
// ---------------------------------------------------------------------------

/// A normalized catalog record for one printing.
///
/// Field aliases let the same struct read Scryfall-style (`type_line`) and
/// MTGJSON-style (`uuid`, `type`) records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCard {
    #[serde(alias = "uuid")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "type", alias = "type_line")]
    pub type_line: String,
    #[serde(default)]
    pub rarity: Rarity,
    /// Keyed by lowercase format key.
    #[serde(default, deserialize_with = "lowercase_keys")]
    pub legalities: HashMap<String, LegalityStatus>,
}

impl CatalogCard {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_type_line(mut self, type_line: impl Into<String>) -> Self {
        self.type_line = type_line.into();
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_legality(mut self, format: &str, status: LegalityStatus) -> Self {
        self.legalities.insert(format.to_lowercase(), status);
        self
    }

    /// Legality of this printing in `format`, `NotLegal` when the catalog
    /// has no entry for it.
    pub fn legality(&self, format: &Format) -> LegalityStatus {
        self.legalities
            .get(format.key())
            .copied()
            .unwrap_or_default()
    }

    /// Name used to aggregate copies across printings.
    pub fn canonical_name(&self) -> String {
        canonical_name(&self.name)
    }

    /// True when the type line contains the whole-word phrase "basic land".
    pub fn is_basic_land(&self) -> bool {
        contains_word_phrase(&self.type_line, "basic land")
    }
}

fn lowercase_keys<'de, D>(deserializer: D) -> Result<HashMap<String, LegalityStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<HashMap<String, LegalityStatus>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(format, status)| (format.trim().to_lowercase(), status))
        .collect())
}

/// Trimmed, lowercased card name.
pub fn canonical_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Case-insensitive phrase match with regex `\b` boundaries: the phrase may
/// not touch a Unicode alphanumeric character or `_` on either side.
fn contains_word_phrase(haystack: &str, phrase: &str) -> bool {
    let haystack = haystack.to_lowercase();
    haystack.match_indices(phrase).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + phrase.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
