//! Budget tier enumeration
//!
//! Every item is assigned to one of five fixed tiers; each tier carries a
//! fixed spending limit that the budget aggregator compares against. The
//! serialized identifiers are the kebab-case strings the data files use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Budget tier an item's price counts against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Essential,
    Functional,
    NiceToHave,
    Peak,
    Luxury,
}

impl Tier {
    /// All tiers in budget-summary order
    pub fn all() -> &'static [Self] {
        &[
            Self::Essential,
            Self::Functional,
            Self::NiceToHave,
            Self::Peak,
            Self::Luxury,
        ]
    }

    /// The fixed spending limit for this tier (whole currency units)
    pub const fn limit(&self) -> Money {
        match self {
            Self::Essential => Money::from_units(50_000_000),
            Self::Functional => Money::from_units(100_000_000),
            Self::NiceToHave => Money::from_units(250_000_000),
            Self::Peak => Money::from_units(500_000_000),
            Self::Luxury => Money::from_units(1_000_000_000),
        }
    }

    /// The serialized identifier for this tier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Essential => "essential",
            Self::Functional => "functional",
            Self::NiceToHave => "nice-to-have",
            Self::Peak => "peak",
            Self::Luxury => "luxury",
        }
    }

    /// Human-readable name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Essential => "Essential / Bare Bones",
            Self::Functional => "Functional Upgrade",
            Self::NiceToHave => "Nice-to-Have",
            Self::Peak => "Peak - Dim Return",
            Self::Luxury => "Luxury Item",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "essential" => Ok(Self::Essential),
            "functional" => Ok(Self::Functional),
            "nice-to-have" => Ok(Self::NiceToHave),
            "peak" => Ok(Self::Peak),
            "luxury" => Ok(Self::Luxury),
            other => Err(format!("unknown tier: {}", other)),
        }
    }
}
