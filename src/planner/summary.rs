use crate::models::{BaseTotals, ItemMap, Scenario, Totals};
use crate::planner::calculations::apply_scenario;
use crate::planner::constants::BUFFER_FACTOR;

/// Sum of per-item kilograms.
pub fn total_kilograms(totals: &Totals) -> f64 {
    totals.iter().map(|(_, t)| t.kilograms()).sum()
}

/// Displayed grand total, with the 10% safety margin when requested.
///
/// Presentation only: scenario totals themselves are never buffered.
pub fn apply_buffer(total_kg: f64, include_buffer: bool) -> f64 {
    if include_buffer {
        total_kg * BUFFER_FACTOR
    } else {
        total_kg
    }
}

/// Whole-percent change from `reference` to `value`, halves rounded upward.
///
/// A zero reference reports 0.
pub fn percent_delta(value: u64, reference: u64) -> i64 {
    if reference == 0 {
        return 0;
    }
    let (value, reference) = (value as f64, reference as f64);
    ((value - reference) * 100.0 / reference + 0.5).floor() as i64
}

/// Percentage change of each item in `scenario` relative to classico.
///
/// Items that classico leaves at zero report 0.
pub fn scenario_deltas(base: &BaseTotals, scenario: Scenario) -> ItemMap<i64> {
    let classico = apply_scenario(base, Scenario::Classico);
    let other = apply_scenario(base, scenario);

    ItemMap::from_fn(|item| percent_delta(other.get(item).grams(), classico.get(item).grams()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, ItemTotal};

    fn sample_base() -> BaseTotals {
        ItemMap {
            manzo: ItemTotal::from_grams(2000),
            pollo: ItemTotal::from_grams(1800),
            salsiccia: ItemTotal::from_grams(1500),
            maiale: ItemTotal::from_grams(1800),
            tofu: ItemTotal::from_grams(0),
            verdure: ItemTotal::from_grams(500),
        }
    }

    #[test]
    fn test_total_kilograms() {
        assert_float_absolute_eq!(total_kilograms(&sample_base()), 7.6, 1e-9);
    }

    #[test]
    fn test_buffer_only_when_enabled() {
        assert_float_absolute_eq!(apply_buffer(10.0, false), 10.0, 1e-9);
        assert_float_absolute_eq!(apply_buffer(10.0, true), 11.0, 1e-9);
    }

    #[test]
    fn test_percent_delta_halves_round_up() {
        assert_eq!(percent_delta(1950, 2000), -2);
        assert_eq!(percent_delta(2050, 2000), 3);
        assert_eq!(percent_delta(2000, 2000), 0);
        assert_eq!(percent_delta(500, 0), 0);
    }

    #[test]
    fn test_classico_deltas_are_zero() {
        let deltas = scenario_deltas(&sample_base(), Scenario::Classico);
        assert!(deltas.iter().all(|(_, d)| *d == 0));
    }

    #[test]
    fn test_chicken_deltas() {
        // pool 7100: classico pollo 2150, chicken pollo 3900
        let deltas = scenario_deltas(&sample_base(), Scenario::Chicken);
        assert_eq!(*deltas.get(Item::Pollo), 81);
        assert!(*deltas.get(Item::Manzo) < 0);
        // zero reference stays neutral
        assert_eq!(*deltas.get(Item::Tofu), 0);
        assert_eq!(*deltas.get(Item::Verdure), 0);
    }
}
