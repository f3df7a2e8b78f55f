use serde::{Deserialize, Serialize};

use crate::models::item::ItemMap;
use crate::planner::calculations::grams_to_kilograms;
use crate::planner::constants::ROUNDING_STEP_GRAMS;

/// Computed quantity for one item.
///
/// Grams are authoritative; kilograms are derived on construction and can
/// not drift out of sync because the fields are private.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "GramsOnly")]
pub struct ItemTotal {
    grams: u64,
    kilograms: f64,
}

/// Deserialization shim: kilograms are always recomputed from grams.
#[derive(Deserialize)]
struct GramsOnly {
    grams: u64,
}

impl TryFrom<GramsOnly> for ItemTotal {
    type Error = String;

    fn try_from(raw: GramsOnly) -> Result<Self, Self::Error> {
        let step = ROUNDING_STEP_GRAMS as u64;
        if raw.grams % step != 0 {
            return Err(format!(
                "{} g is not a multiple of {} g",
                raw.grams, step
            ));
        }
        Ok(ItemTotal::from_grams(raw.grams))
    }
}

impl ItemTotal {
    pub fn from_grams(grams: u64) -> Self {
        Self {
            grams,
            kilograms: grams_to_kilograms(grams),
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    #[inline]
    pub fn grams(&self) -> u64 {
        self.grams
    }

    #[inline]
    pub fn kilograms(&self) -> f64 {
        self.kilograms
    }

    pub fn is_zero(&self) -> bool {
        self.grams == 0
    }
}

/// Per-item totals; exactly six entries, always.
pub type Totals = ItemMap<ItemTotal>;

/// Totals straight from guest counts, before any scenario.
pub type BaseTotals = Totals;

/// Totals after a scenario reallocated the meat pool.
pub type ScenarioTotals = Totals;
