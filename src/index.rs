//! Quantity lookups built once per evaluation.

use std::collections::HashMap;

use crate::models::ResolvedEntry;

/// Deck card counts keyed by printing and by canonical name.
///
/// Entries with a quantity of 0 contribute nothing to either map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckCountIndex {
    by_printing: HashMap<String, u32>,
    by_name: HashMap<String, u32>,
    total: u32,
}

impl DeckCountIndex {
    pub fn build(entries: &[ResolvedEntry]) -> Self {
        let mut index = Self::default();
        for resolved in entries.iter().filter(|r| r.quantity() > 0) {
            let quantity = resolved.quantity();
            index.total = index.total.saturating_add(quantity);

            let printing = index
                .by_printing
                .entry(resolved.catalog_id().to_string())
                .or_insert(0);
            *printing = printing.saturating_add(quantity);

            let name = index
                .by_name
                .entry(resolved.card.canonical_name())
                .or_insert(0);
            *name = name.saturating_add(quantity);
        }
        index
    }

    /// Copies of one exact printing.
    pub fn printing_count(&self, catalog_id: &str) -> u32 {
        self.by_printing.get(catalog_id).copied().unwrap_or(0)
    }

    /// Copies of a card name summed across every printing.
    pub fn name_count(&self, name: &str) -> u32 {
        self.by_name
            .get(&crate::models::canonical_name(name))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all quantities in the deck.
    pub fn total(&self) -> u32 {
        self.total
    }
}
