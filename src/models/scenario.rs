use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// A named weighting profile for redistributing the meat pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Reference baseline for percentage comparisons.
    #[default]
    Classico,
    Chicken,
    Budget,
    Veg,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Classico,
        Scenario::Chicken,
        Scenario::Budget,
        Scenario::Veg,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Scenario::Classico => "classico",
            Scenario::Chicken => "chicken",
            Scenario::Budget => "budget",
            Scenario::Veg => "veg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scenario::Classico => "Classico bilanciato",
            Scenario::Chicken => "Chicken-forward",
            Scenario::Budget => "Budget/Insaccati",
            Scenario::Veg => "Veg-friendly",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Scenario {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Scenario::ALL
            .into_iter()
            .find(|sc| sc.key() == needle)
            .ok_or_else(|| PlannerError::UnknownScenario(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.key().parse::<Scenario>().unwrap(), scenario);
        }
        assert_eq!("Budget".parse::<Scenario>().unwrap(), Scenario::Budget);
    }

    #[test]
    fn test_parse_unknown_key() {
        assert!(matches!(
            "vegan".parse::<Scenario>(),
            Err(PlannerError::UnknownScenario(key)) if key == "vegan"
        ));
    }
}
