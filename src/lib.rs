#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{
    BaseTotals, GuestInput, Item, ItemParameters, ItemTotal, Scenario, ScenarioTotals,
};
pub use planner::{apply_scenario, compute_base_totals, default_parameters};
