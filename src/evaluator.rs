//! Deck legality evaluation.
//!
//! [`LegalityEvaluator::evaluate`] is pure: it reads the descriptor and the
//! resolved entries, consults its [`RuleSet`], and returns a fresh
//! [`LegalityReport`]. It never fails. Malformed input was already normalized
//! into defaults by the model types (quantity 0, format `commander`,
//! legality `not_legal`, rarity `other`).

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::format::{Format, RarityRule};
use crate::index::DeckCountIndex;
use crate::models::{
    DeckDescriptor, LegalityIssue, LegalityReport, Problem, Rarity, ResolvedEntry,
};
use crate::rules::RuleSet;

// ---------------------------------------------------------------------------
// LegalityEvaluatorBuilder
// ---------------------------------------------------------------------------

/// Builder for a [`LegalityEvaluator`] with non-default rules.
///
/// Use [`LegalityEvaluator::builder()`] to obtain a builder.
#[derive(Debug, Default)]
pub struct LegalityEvaluatorBuilder {
    rules: Option<RuleSet>,
    rules_file: Option<PathBuf>,
}

impl LegalityEvaluatorBuilder {
    /// Use an already assembled rule set. Takes precedence over a rules file.
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Read rule overrides from a JSON file.
    pub fn rules_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.rules_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the evaluator.
    ///
    /// Without explicit rules or a rules file, the user rules file at
    /// [`crate::config::default_rules_path`] is applied when it exists.
    pub fn build(self) -> Result<LegalityEvaluator> {
        let rules = match self.rules {
            Some(rules) => rules,
            None => RuleSet::load(self.rules_file.as_deref())?,
        };
        Ok(LegalityEvaluator { rules })
    }
}

// ---------------------------------------------------------------------------
// LegalityEvaluator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct LegalityEvaluator {
    rules: RuleSet,
}

impl LegalityEvaluator {
    /// An evaluator using the built-in rule tables.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> LegalityEvaluatorBuilder {
        LegalityEvaluatorBuilder::default()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Compute the legality report for one deck.
    ///
    /// Per-card checks run first, in entry order, and record every problem
    /// found for a printing in a single issue: format legality, then the
    /// one-per-printing singleton rule, then the copy limit across all
    /// printings of the name. The rarity pass follows and appends its own
    /// issues, so a printing may appear twice in `issues`.
    pub fn evaluate(&self, descriptor: &DeckDescriptor, entries: &[ResolvedEntry]) -> LegalityReport {
        let format = Format::parse(descriptor.format.as_deref());
        let index = DeckCountIndex::build(entries);
        let total = index.total();
        let min_required = self.rules.min_deck_size(&format);
        let is_singleton = self.rules.is_singleton(&format);

        let mut issues: Vec<LegalityIssue> = entries
            .iter()
            .filter(|resolved| resolved.quantity() > 0)
            .filter_map(|resolved| {
                let problems = self.card_problems(resolved, &format, is_singleton, &index);
                (!problems.is_empty()).then(|| issue(resolved, problems))
            })
            .collect();
        issues.extend(rarity_issues(descriptor, &format, entries));

        for issue in &issues {
            tracing::trace!(
                catalog_id = %issue.catalog_id,
                name = %issue.name,
                problems = ?issue.messages(),
                "flagged printing"
            );
        }
        tracing::debug!(
            format = %format,
            total,
            min_required,
            issues = issues.len(),
            "evaluated deck legality"
        );

        LegalityReport {
            format: format.key().to_string(),
            total,
            min_required,
            size_ok: total >= min_required,
            is_singleton,
            issues,
        }
    }

    fn card_problems(
        &self,
        resolved: &ResolvedEntry,
        format: &Format,
        is_singleton: bool,
        index: &DeckCountIndex,
    ) -> Vec<Problem> {
        let card = &resolved.card;
        let status = card.legality(format);
        let mut problems = Vec::new();

        if status.is_illegal() {
            problems.push(Problem::IllegalInFormat { status });
        }

        if is_singleton
            && index.printing_count(resolved.catalog_id()) > 1
            && !card.is_basic_land()
        {
            problems.push(Problem::SingletonPrinting);
        }

        let allowed = self.rules.allowed_copies(card, format, status);
        let found = index.name_count(&card.name);
        if let Some(max) = allowed.as_finite() {
            if found > max {
                problems.push(Problem::CopyLimit { allowed: max, found });
            }
        }

        problems
    }
}

// ---------------------------------------------------------------------------
// Rarity pass
// ---------------------------------------------------------------------------

fn rarity_issues(
    descriptor: &DeckDescriptor,
    format: &Format,
    entries: &[ResolvedEntry],
) -> Vec<LegalityIssue> {
    let exempt = match format.rarity_rule() {
        RarityRule::None => return Vec::new(),
        RarityRule::CommonsOnly => None,
        RarityRule::CommonsExceptCommander => descriptor
            .commander_catalog_id
            .as_deref()
            .filter(|id| !id.is_empty()),
    };

    entries
        .iter()
        .filter(|resolved| resolved.quantity() > 0)
        .filter(|resolved| exempt != Some(resolved.catalog_id()))
        .filter(|resolved| !matches!(resolved.card.rarity, Rarity::Common | Rarity::Other))
        .map(|resolved| {
            let problem = Problem::MustBeCommon {
                rarity: resolved.card.rarity,
            };
            issue(resolved, vec![problem])
        })
        .collect()
}

fn issue(resolved: &ResolvedEntry, problems: Vec<Problem>) -> LegalityIssue {
    LegalityIssue {
        catalog_id: resolved.catalog_id().to_string(),
        name: resolved.card.name.clone(),
        quantity: resolved.quantity(),
        problems,
    }
}
