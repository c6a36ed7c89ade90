//! Property-based tests for evaluator invariants.

mod common;

use mtg_deck_legality::{
    evaluate, DeckDescriptor, Format, LegalityStatus, Problem, Rarity, ResolvedEntry,
};
use proptest::prelude::*;

fn format_key() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(
            common::LEGAL_FORMATS
                .iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
        ),
        "[a-z]{3,12}",
    ]
}

fn rarity() -> impl Strategy<Value = Rarity> {
    prop::sample::select(vec![
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Mythic,
        Rarity::Special,
        Rarity::Other,
    ])
}

fn status() -> impl Strategy<Value = LegalityStatus> {
    prop::sample::select(vec![
        LegalityStatus::Legal,
        LegalityStatus::NotLegal,
        LegalityStatus::Banned,
        LegalityStatus::Restricted,
    ])
}

/// Decks drawn from a small name pool so printings share names.
fn deck(format: String) -> impl Strategy<Value = Vec<ResolvedEntry>> {
    prop::collection::vec((0usize..6, rarity(), status(), 0u32..8, any::<bool>()), 0..20).prop_map(
        move |cards| {
            cards
                .into_iter()
                .enumerate()
                .map(|(i, (name, rarity, status, quantity, basic))| {
                    let mut card = common::spell(&format!("p-{i}"), &format!("Card {name}"))
                        .with_rarity(rarity)
                        .with_legality(&format, status);
                    if basic {
                        card = card.with_type_line("Basic Land \u{2014} Plains");
                    }
                    ResolvedEntry::new(card, quantity)
                })
                .collect()
        },
    )
}

fn any_deck() -> impl Strategy<Value = (String, Vec<ResolvedEntry>)> {
    format_key().prop_flat_map(|format| (Just(format.clone()), deck(format)))
}

proptest! {
    /// Identical inputs give identical reports.
    #[test]
    fn prop_evaluate_is_idempotent((format, entries) in any_deck()) {
        let descriptor = DeckDescriptor::new(format);
        prop_assert_eq!(evaluate(&descriptor, &entries), evaluate(&descriptor, &entries));
    }

    /// `size_ok` always reflects `total >= min_required`.
    #[test]
    fn prop_size_flag_matches_totals((format, entries) in any_deck()) {
        let report = evaluate(&DeckDescriptor::new(format), &entries);
        let sum: u32 = entries.iter().map(|e| e.quantity()).sum();
        prop_assert_eq!(report.total, sum);
        prop_assert_eq!(report.size_ok, report.total >= report.min_required);
    }

    /// Basic lands never pick up singleton or copy-limit problems.
    #[test]
    fn prop_basic_lands_exempt_from_copy_rules(
        format in format_key(),
        quantities in prop::collection::vec(1u32..60, 1..6),
    ) {
        let entries: Vec<ResolvedEntry> = quantities
            .iter()
            .enumerate()
            .map(|(i, &q)| ResolvedEntry::new(common::basic_land(&format!("plains-{i}"), "Plains"), q))
            .collect();

        let report = evaluate(&DeckDescriptor::new(format), &entries);
        for issue in &report.issues {
            for problem in &issue.problems {
                let is_copy_rule = matches!(
                    problem,
                    Problem::SingletonPrinting | Problem::CopyLimit { .. }
                );
                prop_assert!(!is_copy_rule);
            }
        }
    }

    /// Any duplicate nonland printing in Commander is a singleton violation.
    #[test]
    fn prop_commander_flags_duplicate_printings(quantity in 2u32..10) {
        let entries = vec![ResolvedEntry::new(common::spell("dup", "Duplicate"), quantity)];
        let report = evaluate(&DeckDescriptor::new("commander"), &entries);
        prop_assert!(report.issues[0].messages().iter().any(|m| m.contains("Singleton")));
    }

    /// Pauper flags exactly the non-common, non-other printings.
    #[test]
    fn prop_pauper_flags_every_non_common(entries in deck("pauper".to_string())) {
        let report = evaluate(&DeckDescriptor::new("pauper"), &entries);
        for entry in entries.iter().filter(|e| e.quantity() > 0) {
            let flagged = report.issues_for(entry.catalog_id()).any(|issue| {
                issue.problems.iter().any(|p| matches!(p, Problem::MustBeCommon { .. }))
            });
            let expected = !matches!(entry.card.rarity, Rarity::Common | Rarity::Other);
            prop_assert_eq!(flagged, expected);
        }
    }

    /// The Pauper Commander commander is never flagged for rarity.
    #[test]
    fn prop_pauper_commander_never_flags_commander(
        commander_rarity in rarity(),
        others in deck("paupercommander".to_string()),
    ) {
        let commander = common::spell("the-commander", "The Commander").with_rarity(commander_rarity);
        let mut entries = vec![ResolvedEntry::new(commander, 1)];
        entries.extend(others);

        let descriptor = DeckDescriptor::new("paupercommander").with_commander("the-commander");
        let report = evaluate(&descriptor, &entries);
        let flagged = report.issues_for("the-commander").any(|issue| {
            issue.problems.iter().any(|p| matches!(p, Problem::MustBeCommon { .. }))
        });
        prop_assert!(!flagged);
    }

    /// Unknown formats keep the generic defaults.
    #[test]
    fn prop_unknown_format_uses_defaults(key in "zz[a-z]{3,8}") {
        let report = evaluate(&DeckDescriptor::new(key.clone()), &[]);
        prop_assert_eq!(Format::parse(Some(key.as_str())), Format::Other(key.clone()));
        prop_assert_eq!(report.min_required, 60);
        prop_assert!(!report.is_singleton);
        prop_assert!(report.issues.is_empty());
    }
}
