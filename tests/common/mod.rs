//! Shared test fixtures for the deck legality integration tests.
//!
//! Card builders cover the shapes the evaluator cares about: a plain
//! nonland spell, a basic land, and cards with a chosen rarity or legality.

#![allow(dead_code)]

use std::sync::Once;

use mtg_deck_legality::{CatalogCard, LegalityStatus, Rarity, ResolvedEntry};
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Install a test-writer tracing subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Formats every fixture card is marked legal in.
pub const LEGAL_FORMATS: &[&str] = &[
    "standard",
    "pioneer",
    "modern",
    "legacy",
    "vintage",
    "pauper",
    "paupercommander",
    "commander",
    "brawl",
    "standardbrawl",
    "gladiator",
    "oathbreaker",
];

/// A common nonland card legal in every fixture format.
pub fn spell(id: &str, name: &str) -> CatalogCard {
    let mut card = CatalogCard::new(id, name)
        .with_type_line("Creature \u{2014} Human Wizard")
        .with_rarity(Rarity::Common);
    for format in LEGAL_FORMATS {
        card = card.with_legality(format, LegalityStatus::Legal);
    }
    card
}

/// A basic land legal in every fixture format.
pub fn basic_land(id: &str, name: &str) -> CatalogCard {
    spell(id, name).with_type_line(format!("Basic Land \u{2014} {name}"))
}

pub fn with_rarity(card: CatalogCard, rarity: Rarity) -> CatalogCard {
    card.with_rarity(rarity)
}

pub fn entry(card: CatalogCard, quantity: u32) -> ResolvedEntry {
    ResolvedEntry::new(card, quantity)
}

/// `count` distinct legal commons, one copy each.
pub fn distinct_singles(count: usize) -> Vec<ResolvedEntry> {
    (0..count)
        .map(|i| entry(spell(&format!("card-{i:03}"), &format!("Card {i}")), 1))
        .collect()
}

/// Sample catalog snapshot in the MTGJSON-style map layout.
pub fn sample_catalog_json() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "bolt-a25": {
                "name": "Lightning Bolt",
                "type": "Instant",
                "rarity": "uncommon",
                "legalities": {
                    "modern": "Legal",
                    "vintage": "Restricted",
                    "standard": "Not Legal"
                }
            },
            "bolt-m10": {
                "name": "Lightning Bolt",
                "type": "Instant",
                "rarity": "common",
                "legalities": {
                    "modern": "Legal",
                    "pauper": "Legal"
                }
            },
            "forest-unh": {
                "name": "Forest",
                "type": "Basic Land \u{2014} Forest",
                "rarity": "common",
                "legalities": {
                    "modern": "Legal",
                    "commander": "Legal"
                }
            }
        }
    })
}
