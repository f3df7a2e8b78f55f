use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::planner::constants::{APPETITE_HIGH, APPETITE_LIGHT, APPETITE_NORMAL};

/// Average appetite of the party, scaling every portion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appetite {
    Light,
    #[default]
    Normal,
    High,
}

impl Appetite {
    pub const ALL: [Appetite; 3] = [Appetite::Light, Appetite::Normal, Appetite::High];

    pub fn multiplier(self) -> f64 {
        match self {
            Appetite::Light => APPETITE_LIGHT,
            Appetite::Normal => APPETITE_NORMAL,
            Appetite::High => APPETITE_HIGH,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Appetite::Light => "light",
            Appetite::Normal => "normal",
            Appetite::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Appetite::Light => "Light (-20%)",
            Appetite::Normal => "Normal",
            Appetite::High => "High (+20%)",
        }
    }
}

impl fmt::Display for Appetite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Appetite {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Appetite::ALL
            .into_iter()
            .find(|a| a.key() == needle)
            .ok_or_else(|| {
                PlannerError::InvalidInput(format!(
                    "unrecognized appetite '{}' (expected light, normal or high)",
                    s
                ))
            })
    }
}

/// Guest counts and preferences collected from the user.
///
/// Counts are unsigned: negative or fractional values are rejected when the
/// input is parsed, before it reaches the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuestInput {
    pub adults_omnivore: u32,
    pub children_omnivore: u32,
    pub adults_veg: u32,
    pub children_veg: u32,
    pub appetite: Appetite,
    /// Omnivores also get grilled vegetables as a side.
    pub include_sides_for_omnivores: bool,
}

impl GuestInput {
    pub fn total_guests(&self) -> u64 {
        [
            self.adults_omnivore,
            self.children_omnivore,
            self.adults_veg,
            self.children_veg,
        ]
        .into_iter()
        .map(u64::from)
        .sum()
    }
}

/// Parse a guest count, rejecting negative and non-integer values.
pub fn parse_guest_count(s: &str) -> Result<u32, PlannerError> {
    s.trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a valid guest count", s)))
}
