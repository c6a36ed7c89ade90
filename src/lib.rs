//! Deck legality evaluation for Magic: The Gathering collections.
//!
//! Given a deck's declared format and its cards (each already resolved to a
//! catalog printing), produces a [`LegalityReport`]: deck size against the
//! format minimum, plus every printing that breaks a format rule (legality,
//! singleton, copy limit, Pauper rarity).
//!
//! # Quick start
//!
//! ```
//! use mtg_deck_legality::{CatalogCard, DeckDescriptor, LegalityStatus, Rarity, ResolvedEntry};
//!
//! let bolt = CatalogCard::new("bolt-a25", "Lightning Bolt")
//!     .with_type_line("Instant")
//!     .with_rarity(Rarity::Common)
//!     .with_legality("modern", LegalityStatus::Legal);
//!
//! let deck = DeckDescriptor::new("modern");
//! let report = mtg_deck_legality::evaluate(&deck, &[ResolvedEntry::new(bolt, 5)]);
//!
//! assert!(!report.size_ok);
//! assert_eq!(report.issues.len(), 1);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod index;
pub mod models;
pub mod rules;

pub use catalog::{resolve_entries, CardCatalog, InMemoryCatalog};
pub use error::{LegalityError, Result};
pub use evaluator::{LegalityEvaluator, LegalityEvaluatorBuilder};
pub use format::{Format, RarityRule};
pub use index::DeckCountIndex;
pub use models::{
    CatalogCard, DeckCardEntry, DeckDescriptor, LegalityIssue, LegalityReport, LegalityStatus,
    Problem, Rarity, ResolvedEntry,
};
pub use rules::{CopyLimit, RuleSet};

use once_cell::sync::Lazy;

static DEFAULT_EVALUATOR: Lazy<LegalityEvaluator> = Lazy::new(LegalityEvaluator::new);

/// Evaluate a deck against the built-in rule tables.
///
/// Shorthand for [`LegalityEvaluator::new()`] followed by
/// [`evaluate`](LegalityEvaluator::evaluate); the rule tables are built once
/// per process.
pub fn evaluate(descriptor: &DeckDescriptor, entries: &[ResolvedEntry]) -> LegalityReport {
    DEFAULT_EVALUATOR.evaluate(descriptor, entries)
}
