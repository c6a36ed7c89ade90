use std::fmt;

use serde::{Serialize, Serializer};

use super::card::{LegalityStatus, Rarity};

// ---------------------------------------------------------------------------
// Problem
// ---------------------------------------------------------------------------

/// A single rule violation found for a printing.
///
/// Serialized as its plain-text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// The printing is not legal (or banned) in the deck's format.
    IllegalInFormat { status: LegalityStatus },
    /// More than one copy of the same printing in a singleton format.
    SingletonPrinting,
    /// Too many copies of the same card name across all printings.
    CopyLimit { allowed: u32, found: u32 },
    /// A non-common card in a Pauper-style format.
    MustBeCommon { rarity: Rarity },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::IllegalInFormat { status } => match status {
                LegalityStatus::Banned => write!(f, "Illegal in this format (banned)"),
                _ => write!(f, "Illegal in this format"),
            },
            Problem::SingletonPrinting => write!(f, "Singleton: max 1 of this exact printing"),
            Problem::CopyLimit { allowed: 1, found } => write!(
                f,
                "Limit 1 copy of this card across all printings (deck has {found})"
            ),
            Problem::CopyLimit { allowed, found } => write!(
                f,
                "Limit {allowed} copies of this card across all printings (deck has {found})"
            ),
            Problem::MustBeCommon { rarity } => {
                write!(f, "Must be common (this printing is {rarity})")
            }
        }
    }
}

impl Serialize for Problem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// LegalityIssue
// ---------------------------------------------------------------------------

/// Every problem found for one printing in one pass of the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalityIssue {
    pub catalog_id: String,
    pub name: String,
    pub quantity: u32,
    pub problems: Vec<Problem>,
}

impl LegalityIssue {
    /// Plain-text messages for each problem, in the order they were found.
    pub fn messages(&self) -> Vec<String> {
        self.problems.iter().map(ToString::to_string).collect()
    }
}

// ---------------------------------------------------------------------------
// LegalityReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalityReport {
    /// Normalized format key the deck was evaluated against.
    pub format: String,
    pub total: u32,
    pub min_required: u32,
    pub size_ok: bool,
    pub is_singleton: bool,
    pub issues: Vec<LegalityIssue>,
}

impl LegalityReport {
    /// True when the deck meets the size minimum and no printing was flagged.
    pub fn is_legal(&self) -> bool {
        self.size_ok && self.issues.is_empty()
    }

    /// All issues recorded for one printing.
    ///
    /// A printing can appear more than once, since the rarity pass reports
    /// separately from the per-card checks.
    pub fn issues_for<'a>(&'a self, catalog_id: &'a str) -> impl Iterator<Item = &'a LegalityIssue> {
        self.issues
            .iter()
            .filter(move |issue| issue.catalog_id == catalog_id)
    }
}
