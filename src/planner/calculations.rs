use crate::error::{PlannerError, Result};
use crate::models::{
    BaseTotals, GuestInput, Item, ItemMap, ItemTotal, ParameterTable, Scenario, ScenarioTotals,
};
use crate::planner::constants::{scenario_weights, MAX_ITEM_GRAMS, ROUNDING_STEP_GRAMS};

const ROUNDING_STEP: u64 = ROUNDING_STEP_GRAMS as u64;

/// Round to the nearest multiple of 50 grams.
///
/// Halfway values round away from zero (`f64::round`), so 25 becomes 50 and
/// 24 becomes 0. Negative and non-finite inputs saturate to 0, huge inputs
/// to the largest multiple of 50 a `u64` holds.
pub fn round_to_nearest_fifty(n: f64) -> u64 {
    let steps = (n / ROUNDING_STEP_GRAMS).round();
    // `as` saturates: NaN and negatives map to 0.
    let steps = (steps as u64).min(u64::MAX / ROUNDING_STEP);
    steps * ROUNDING_STEP
}

/// Convert grams to kilograms rounded to two decimals.
pub fn grams_to_kilograms(grams: u64) -> f64 {
    ((grams as f64 / 1000.0) * 100.0).round() / 100.0
}

/// Reject parameter tables that would produce negative or NaN totals.
fn validate_parameters(params: &ParameterTable) -> Result<()> {
    for (item, p) in params.iter() {
        if !p.is_valid() {
            return Err(PlannerError::InvalidInput(format!(
                "{} portion sizes must be non-negative numbers (adult: {}, child: {})",
                item, p.base_adult_grams, p.base_child_grams
            )));
        }
    }
    Ok(())
}

/// Compute per-item totals from guest counts and portion parameters.
///
/// Meats are sized for omnivores, plant items for vegetarians. Grilled
/// vegetables additionally cover omnivores when sides are requested.
/// Disabled items stay in the result at zero.
pub fn compute_base_totals(input: &GuestInput, params: &ParameterTable) -> Result<BaseTotals> {
    validate_parameters(params)?;

    let multiplier = input.appetite.multiplier();

    let raw = ItemMap::from_fn(|item| {
        let p = params.get(item);
        if !p.enabled {
            return 0.0;
        }

        if item.is_meat() {
            p.grams_for(input.adults_omnivore, input.children_omnivore) * multiplier
        } else {
            let mut grams = p.grams_for(input.adults_veg, input.children_veg) * multiplier;
            if item == Item::Verdure && input.include_sides_for_omnivores {
                grams += p.grams_for(input.adults_omnivore, input.children_omnivore) * multiplier;
            }
            grams
        }
    });

    for (item, grams) in raw.iter() {
        if *grams > MAX_ITEM_GRAMS {
            return Err(PlannerError::InvalidInput(format!(
                "{} would need {:.0} g, above the {:.0} g limit per item",
                item, grams, MAX_ITEM_GRAMS
            )));
        }
    }

    let totals =
        BaseTotals::from_fn(|item| ItemTotal::from_grams(round_to_nearest_fifty(*raw.get(item))));

    log::debug!(
        "Base totals for {} guests at {} appetite: {} g meat",
        input.total_guests(),
        input.appetite,
        meat_grams(&totals)
    );

    Ok(totals)
}

/// Sum of grams over the four meat items.
///
/// Summed in `u128` so four `u64` totals can never overflow.
pub fn meat_grams(totals: &BaseTotals) -> u128 {
    Item::MEATS
        .iter()
        .map(|&item| u128::from(totals.get(item).grams()))
        .sum()
}

/// Reallocate base totals under a scenario.
///
/// All meat mass is pooled and handed back by the scenario's weights,
/// independent of how it was split originally. A meat item disabled upstream
/// contributes nothing to the pool but still receives its weighted share.
/// Plant items are scaled by their own boost.
pub fn apply_scenario(base: &BaseTotals, scenario: Scenario) -> ScenarioTotals {
    let weights = scenario_weights(scenario);
    let pool = meat_grams(base) as f64;

    ScenarioTotals::from_fn(|item| {
        let weight = *weights.get(item);
        let raw = if item.is_meat() {
            pool * weight
        } else {
            base.get(item).grams() as f64 * weight
        };
        ItemTotal::from_grams(round_to_nearest_fifty(raw))
    })
}

/// Like [`apply_scenario`], for a scenario named by its key.
pub fn apply_scenario_by_key(base: &BaseTotals, key: &str) -> Result<ScenarioTotals> {
    let scenario: Scenario = key.parse()?;
    Ok(apply_scenario(base, scenario))
}
