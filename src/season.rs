//! Season tags shared by the resolver, content lookup, and card ordering.
//!
//! The serialized keys are consumed verbatim by the homepage content table and
//! the season cards, so they are fixed strings rather than derived names.
use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six recurring liturgical seasons.
///
/// Epiphany is folded into `OrdinaryTime`; there is no seventh season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Advent,
    Christmas,
    OrdinaryTime,
    Lent,
    Easter,
    Pentecost,
}

/// Liturgical order used for display rotation.
pub const CANONICAL_ORDER: [Season; 6] = [
    Season::Advent,
    Season::Christmas,
    Season::OrdinaryTime,
    Season::Lent,
    Season::Easter,
    Season::Pentecost,
];

impl Season {
    /// Return the stable key used in JSON artifacts and content lookups.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Advent => "advent",
            Season::Christmas => "christmas",
            Season::OrdinaryTime => "ordinary-time",
            Season::Lent => "lent",
            Season::Easter => "easter",
            Season::Pentecost => "pentecost",
        }
    }

    /// Human-facing name shown on season cards.
    pub fn label(&self) -> &'static str {
        match self {
            Season::Advent => "Advent",
            Season::Christmas => "Christmas",
            Season::OrdinaryTime => "Ordinary Time",
            Season::Lent => "Lent",
            Season::Easter => "Easter",
            Season::Pentecost => "Pentecost",
        }
    }

    /// Position of the season in [`CANONICAL_ORDER`].
    pub fn canonical_index(&self) -> usize {
        match self {
            Season::Advent => 0,
            Season::Christmas => 1,
            Season::OrdinaryTime => 2,
            Season::Lent => 3,
            Season::Easter => 4,
            Season::Pentecost => 5,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        CANONICAL_ORDER
            .iter()
            .copied()
            .find(|season| season.as_str() == raw)
            .ok_or_else(|| {
                let keys: Vec<&str> = CANONICAL_ORDER.iter().map(Season::as_str).collect();
                anyhow!("unknown season {raw:?} (expected one of {})", keys.join(", "))
            })
    }
}
