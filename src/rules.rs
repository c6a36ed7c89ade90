//! Rule tables consulted by the evaluator.
//!
//! A [`RuleSet`] starts from the built-in tables in [`crate::config`] and can
//! be adjusted in code or from a JSON rules file:
//!
//! ```json
//! {
//!   "copyExceptions": { "Seven Dwarves": 7, "Relentless Rats": "unlimited" },
//!   "minDeckSizes": { "highlander": 100 },
//!   "singletonFormats": ["commander", "highlander"],
//!   "defaultMinDeckSize": 60,
//!   "defaultCopyLimit": 4
//! }
//! ```
//!
//! Every key is optional. Copy exceptions and minimum sizes are merged over
//! the defaults; `singletonFormats`, when present, replaces the default set.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::config;
use crate::error::{LegalityError, Result};
use crate::format::Format;
use crate::models::{canonical_name, CatalogCard, LegalityStatus};

// ---------------------------------------------------------------------------
// CopyLimit
// ---------------------------------------------------------------------------

/// Maximum number of copies of one card name a deck may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyLimit {
    Limited(u32),
    Unlimited,
}

impl CopyLimit {
    /// Whether `count` copies stay within the limit.
    pub fn allows(&self, count: u32) -> bool {
        match self {
            CopyLimit::Limited(max) => count <= *max,
            CopyLimit::Unlimited => true,
        }
    }

    pub fn as_finite(&self) -> Option<u32> {
        match self {
            CopyLimit::Limited(max) => Some(*max),
            CopyLimit::Unlimited => None,
        }
    }
}

// ---------------------------------------------------------------------------
// RuleSet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    singleton_formats: HashSet<Format>,
    min_deck_sizes: HashMap<Format, u32>,
    copy_exceptions: HashMap<String, CopyLimit>,
    default_min_deck_size: u32,
    default_copy_limit: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            singleton_formats: config::SINGLETON_FORMATS.iter().cloned().collect(),
            min_deck_sizes: (*config::MIN_DECK_SIZES).clone(),
            copy_exceptions: config::COPY_EXCEPTIONS
                .iter()
                .map(|(name, limit)| (name.to_string(), *limit))
                .collect(),
            default_min_deck_size: config::DEFAULT_MIN_DECK_SIZE,
            default_copy_limit: config::DEFAULT_COPY_LIMIT,
        }
    }
}

impl RuleSet {
    // -- Lookups -------------------------------------------------------------

    /// Whether `format` allows only one copy of each card.
    pub fn is_singleton(&self, format: &Format) -> bool {
        self.singleton_formats.contains(format)
    }

    /// Smallest legal deck for `format`.
    pub fn min_deck_size(&self, format: &Format) -> u32 {
        self.min_deck_sizes
            .get(format)
            .copied()
            .unwrap_or(self.default_min_deck_size)
    }

    /// Configured exception for a card name, matched case-insensitively.
    pub fn copy_exception(&self, name: &str) -> Option<CopyLimit> {
        self.copy_exceptions.get(&canonical_name(name)).copied()
    }

    /// Copies of `card`'s name allowed in `format`. First matching rule wins:
    ///
    /// 1. basic lands are unlimited
    /// 2. singleton formats allow one
    /// 3. Vintage-restricted cards allow one
    /// 4. a configured exception for the name
    /// 5. the default limit
    pub fn allowed_copies(
        &self,
        card: &CatalogCard,
        format: &Format,
        status: LegalityStatus,
    ) -> CopyLimit {
        if card.is_basic_land() {
            return CopyLimit::Unlimited;
        }
        if self.is_singleton(format) {
            return CopyLimit::Limited(1);
        }
        if *format == Format::Vintage && status == LegalityStatus::Restricted {
            return CopyLimit::Limited(1);
        }
        if let Some(limit) = self.copy_exception(&card.name) {
            return limit;
        }
        CopyLimit::Limited(self.default_copy_limit)
    }

    // -- Adjustments ---------------------------------------------------------

    pub fn with_singleton_format(mut self, format: Format) -> Self {
        self.singleton_formats.insert(format);
        self
    }

    pub fn with_min_deck_size(mut self, format: Format, size: u32) -> Self {
        self.min_deck_sizes.insert(format, size);
        self
    }

    pub fn with_copy_exception(mut self, name: &str, limit: CopyLimit) -> Self {
        self.copy_exceptions.insert(canonical_name(name), limit);
        self
    }

    // -- Loading -------------------------------------------------------------

    /// Apply a JSON rules document over the built-in defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: RulesFile = serde_json::from_str(json)?;
        file.apply(RuleSet::default())
    }

    /// Apply a JSON rules file over the built-in defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let rules = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded rules file");
        Ok(rules)
    }

    /// Resolve the rules to use.
    ///
    /// An explicit `path` must exist. Without one, the file at
    /// [`config::default_rules_path`] is used if present, otherwise the
    /// built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        let default_path = config::default_rules_path();
        if default_path.is_file() {
            Self::from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }
}

// ---------------------------------------------------------------------------
// Rules file
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RulesFile {
    #[serde(default)]
    copy_exceptions: HashMap<String, Value>,
    #[serde(default)]
    min_deck_sizes: HashMap<String, u32>,
    singleton_formats: Option<Vec<String>>,
    default_min_deck_size: Option<u32>,
    default_copy_limit: Option<u32>,
}

impl RulesFile {
    fn apply(self, mut rules: RuleSet) -> Result<RuleSet> {
        if let Some(limit) = self.default_copy_limit {
            if limit == 0 {
                return Err(LegalityError::InvalidArgument(
                    "defaultCopyLimit must be at least 1".to_string(),
                ));
            }
            rules.default_copy_limit = limit;
        }
        if let Some(size) = self.default_min_deck_size {
            rules.default_min_deck_size = size;
        }
        if let Some(formats) = self.singleton_formats {
            rules.singleton_formats = formats
                .iter()
                .map(|key| Format::parse(Some(key.as_str())))
                .collect();
        }
        for (key, size) in self.min_deck_sizes {
            rules.min_deck_sizes.insert(Format::parse(Some(key.as_str())), size);
        }
        for (name, value) in self.copy_exceptions {
            match parse_copy_limit(&value) {
                Some(limit) => {
                    rules.copy_exceptions.insert(canonical_name(&name), limit);
                }
                None => tracing::warn!(card = %name, value = %value, "ignoring unusable copy exception"),
            }
        }
        Ok(rules)
    }
}

fn parse_copy_limit(value: &Value) -> Option<CopyLimit> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(CopyLimit::Limited),
        Value::String(s) if s.eq_ignore_ascii_case("unlimited") => Some(CopyLimit::Unlimited),
        _ => None,
    }
}
