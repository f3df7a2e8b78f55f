pub mod calculations;
pub mod constants;
pub mod summary;

pub use calculations::{
    apply_scenario, apply_scenario_by_key, compute_base_totals, grams_to_kilograms, meat_grams,
    round_to_nearest_fifty,
};
pub use constants::*;
pub use summary::{apply_buffer, percent_delta, scenario_deltas, total_kilograms};
