//! Format keys and the rarity constraints tied to them.
//!
//! Formats are identified by the lowercase keys used in card legality maps
//! (`"commander"`, `"paupercommander"`, ...). Keys that are not recognised
//! are kept as [`Format::Other`] so that newer formats still get the generic
//! rules instead of an error.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Format assumed when a deck does not declare one.
pub const DEFAULT_FORMAT: Format = Format::Commander;

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

/// A constructed play format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Format {
    Standard,
    Pioneer,
    Modern,
    Legacy,
    Vintage,
    Pauper,
    PauperCommander,
    Commander,
    Brawl,
    StandardBrawl,
    Historic,
    HistoricBrawl,
    Timeless,
    Alchemy,
    Explorer,
    Gladiator,
    Oathbreaker,
    Penny,
    Premodern,
    OldSchool,
    Predh,
    Duel,
    Future,
    /// Any key not listed above, stored lowercased.
    Other(String),
}

impl Format {
    /// Every known format, in the order a format picker lists them.
    pub const ALL: [Format; 23] = [
        Format::Standard,
        Format::Pioneer,
        Format::Modern,
        Format::Legacy,
        Format::Vintage,
        Format::Pauper,
        Format::Commander,
        Format::PauperCommander,
        Format::Oathbreaker,
        Format::Brawl,
        Format::StandardBrawl,
        Format::Historic,
        Format::HistoricBrawl,
        Format::Timeless,
        Format::Alchemy,
        Format::Explorer,
        Format::Gladiator,
        Format::Penny,
        Format::Premodern,
        Format::OldSchool,
        Format::Predh,
        Format::Duel,
        Format::Future,
    ];

    /// Parse a declared format key.
    ///
    /// The key is trimmed and lowercased. A missing or blank key yields
    /// [`DEFAULT_FORMAT`]; an unknown key yields [`Format::Other`].
    pub fn parse(key: Option<&str>) -> Format {
        let key = key.map(|k| k.trim().to_lowercase()).unwrap_or_default();
        if key.is_empty() {
            return DEFAULT_FORMAT;
        }
        match key.as_str() {
            "standard" => Format::Standard,
            "pioneer" => Format::Pioneer,
            "modern" => Format::Modern,
            "legacy" => Format::Legacy,
            "vintage" => Format::Vintage,
            "pauper" => Format::Pauper,
            "paupercommander" => Format::PauperCommander,
            "commander" => Format::Commander,
            "brawl" => Format::Brawl,
            "standardbrawl" => Format::StandardBrawl,
            "historic" => Format::Historic,
            "historicbrawl" => Format::HistoricBrawl,
            "timeless" => Format::Timeless,
            "alchemy" => Format::Alchemy,
            "explorer" => Format::Explorer,
            "gladiator" => Format::Gladiator,
            "oathbreaker" => Format::Oathbreaker,
            "penny" => Format::Penny,
            "premodern" => Format::Premodern,
            "oldschool" => Format::OldSchool,
            "predh" => Format::Predh,
            "duel" => Format::Duel,
            "future" => Format::Future,
            _ => Format::Other(key),
        }
    }

    /// The lowercase key used in card legality maps.
    pub fn key(&self) -> &str {
        match self {
            Format::Standard => "standard",
            Format::Pioneer => "pioneer",
            Format::Modern => "modern",
            Format::Legacy => "legacy",
            Format::Vintage => "vintage",
            Format::Pauper => "pauper",
            Format::PauperCommander => "paupercommander",
            Format::Commander => "commander",
            Format::Brawl => "brawl",
            Format::StandardBrawl => "standardbrawl",
            Format::Historic => "historic",
            Format::HistoricBrawl => "historicbrawl",
            Format::Timeless => "timeless",
            Format::Alchemy => "alchemy",
            Format::Explorer => "explorer",
            Format::Gladiator => "gladiator",
            Format::Oathbreaker => "oathbreaker",
            Format::Penny => "penny",
            Format::Premodern => "premodern",
            Format::OldSchool => "oldschool",
            Format::Predh => "predh",
            Format::Duel => "duel",
            Format::Future => "future",
            Format::Other(key) => key,
        }
    }

    /// Human-readable label.
    ///
    /// Unknown formats fall back to their raw key.
    pub fn display_name(&self) -> &str {
        match self {
            Format::Standard => "Standard",
            Format::Pioneer => "Pioneer",
            Format::Modern => "Modern",
            Format::Legacy => "Legacy",
            Format::Vintage => "Vintage",
            Format::Pauper => "Pauper",
            Format::PauperCommander => "Pauper Commander",
            Format::Commander => "Commander",
            Format::Brawl => "Brawl",
            Format::StandardBrawl => "Standard Brawl",
            Format::Historic => "Historic",
            Format::HistoricBrawl => "Historic Brawl",
            Format::Timeless => "Timeless",
            Format::Alchemy => "Alchemy",
            Format::Explorer => "Explorer",
            Format::Gladiator => "Gladiator",
            Format::Oathbreaker => "Oathbreaker",
            Format::Penny => "Penny Dreadful",
            Format::Premodern => "Premodern",
            Format::OldSchool => "Old School",
            Format::Predh => "PreDH",
            Format::Duel => "Duel Commander",
            Format::Future => "Future Standard",
            Format::Other(key) => key,
        }
    }

    /// The rarity constraint this format places on every card in the deck.
    pub fn rarity_rule(&self) -> RarityRule {
        match self {
            Format::Pauper => RarityRule::CommonsOnly,
            Format::PauperCommander => RarityRule::CommonsExceptCommander,
            _ => RarityRule::None,
        }
    }
}

impl Default for Format {
    fn default() -> Self {
        DEFAULT_FORMAT
    }
}

impl From<String> for Format {
    fn from(key: String) -> Self {
        Format::parse(Some(key.as_str()))
    }
}

impl From<&str> for Format {
    fn from(key: &str) -> Self {
        Format::parse(Some(key))
    }
}

impl From<Format> for String {
    fn from(format: Format) -> Self {
        format.key().to_string()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// RarityRule
// ---------------------------------------------------------------------------

/// Rarity restriction applied by the rarity pass of the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RarityRule {
    /// No rarity constraint.
    None,
    /// Every card must be common.
    CommonsOnly,
    /// Every card must be common, except the designated commander.
    CommonsExceptCommander,
}
