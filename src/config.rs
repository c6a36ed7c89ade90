use std::collections::HashMap;
use std::path::PathBuf;

use once_cell::sync::Lazy;

use crate::format::Format;
use crate::rules::CopyLimit;

/// Minimum deck size for any format without an explicit entry.
pub const DEFAULT_MIN_DECK_SIZE: u32 = 60;

/// Copies of one card name allowed in non-singleton formats.
pub const DEFAULT_COPY_LIMIT: u32 = 4;

/// File name of the optional user rules override.
pub const RULES_FILE_NAME: &str = "rules.json";

pub static SINGLETON_FORMATS: Lazy<Vec<Format>> = Lazy::new(|| {
    vec![
        Format::Commander,
        Format::PauperCommander,
        Format::Brawl,
        Format::StandardBrawl,
        Format::Gladiator,
        Format::Oathbreaker,
    ]
});

pub static MIN_DECK_SIZES: Lazy<HashMap<Format, u32>> = Lazy::new(|| {
    HashMap::from([
        (Format::Commander, 100),
        (Format::PauperCommander, 100),
        (Format::Oathbreaker, 60),
        (Format::Brawl, 60),
        (Format::StandardBrawl, 60),
        (Format::Gladiator, 100),
    ])
});

/// Cards whose own text allows more than the default number of copies,
/// keyed by canonical (lowercased) name.
pub static COPY_EXCEPTIONS: Lazy<HashMap<&'static str, CopyLimit>> = Lazy::new(|| {
    HashMap::from([
        // "A deck can have any number of cards named ..."
        ("relentless rats", CopyLimit::Unlimited),
        ("rat colony", CopyLimit::Unlimited),
        ("shadowborn apostle", CopyLimit::Unlimited),
        ("persistent petitioners", CopyLimit::Unlimited),
        ("dragon's approach", CopyLimit::Unlimited),
        ("slime against humanity", CopyLimit::Unlimited),
        ("hare apparent", CopyLimit::Unlimited),
        ("templar knight", CopyLimit::Unlimited),
        ("tempest hawk", CopyLimit::Unlimited),
        ("cid, timeless artificer", CopyLimit::Unlimited),
        // Capped exceptions
        ("seven dwarves", CopyLimit::Limited(7)),
        ("nazgûl", CopyLimit::Limited(9)),
    ])
});

/// Platform location of the user rules override file.
///
/// e.g. `~/.config/mtg-deck-legality/rules.json` on Linux. Falls back to a
/// directory relative to the working directory when no config dir exists.
pub fn default_rules_path() -> PathBuf {
    if let Some(config) = dirs::config_dir() {
        config.join("mtg-deck-legality").join(RULES_FILE_NAME)
    } else {
        PathBuf::from(".mtg-deck-legality").join(RULES_FILE_NAME)
    }
}
