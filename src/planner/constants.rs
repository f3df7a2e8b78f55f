use crate::models::{ItemMap, ItemParameters, ParameterTable, Scenario};

/// Appetite multipliers applied to every base portion.
pub const APPETITE_LIGHT: f64 = 0.8;
pub const APPETITE_NORMAL: f64 = 1.0;
pub const APPETITE_HIGH: f64 = 1.2;

/// Every item total is rounded to a multiple of this many grams.
pub const ROUNDING_STEP_GRAMS: f64 = 50.0;

/// Largest raw quantity accepted for a single item (a billion tonnes).
///
/// Four meat items at this ceiling still sum far below `u64::MAX`.
pub const MAX_ITEM_GRAMS: f64 = 1e15;

/// Safety margin applied to the displayed grand total when the buffer is on.
pub const BUFFER_FACTOR: f64 = 1.10;

/// Namespace key the session blob is stored under.
pub const STORAGE_KEY: &str = "grigliata-planner";

/// Default state file for the CLI.
pub const DEFAULT_STATE_FILE: &str = "grigliata_state.json";

const fn params(adult: f64, child: f64) -> ItemParameters {
    ItemParameters {
        base_adult_grams: adult,
        base_child_grams: child,
        enabled: true,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Portion sizes (grams per person)
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_PARAMETERS: ParameterTable = ItemMap {
    manzo: params(200.0, 120.0),
    pollo: params(180.0, 100.0),
    salsiccia: params(150.0, 80.0),
    maiale: params(180.0, 100.0),
    tofu: params(150.0, 100.0),
    verdure: params(120.0, 120.0),
};

// ─────────────────────────────────────────────────────────────────────────────
// Scenario weights
//
// Meat entries are shares of the pooled meat mass (they need not sum to 1).
// Plant entries multiply the item's own base total.
// ─────────────────────────────────────────────────────────────────────────────

pub const CLASSICO_WEIGHTS: ItemMap<f64> = ItemMap {
    manzo: 0.35,
    pollo: 0.30,
    salsiccia: 0.20,
    maiale: 0.15,
    tofu: 1.0,
    verdure: 1.0,
};

pub const CHICKEN_WEIGHTS: ItemMap<f64> = ItemMap {
    manzo: 0.15,
    pollo: 0.55,
    salsiccia: 0.20,
    maiale: 0.10,
    tofu: 1.0,
    verdure: 1.0,
};

pub const BUDGET_WEIGHTS: ItemMap<f64> = ItemMap {
    manzo: 0.10,
    pollo: 0.25,
    salsiccia: 0.50,
    maiale: 0.15,
    tofu: 1.0,
    verdure: 1.0,
};

pub const VEG_WEIGHTS: ItemMap<f64> = ItemMap {
    manzo: 0.20,
    pollo: 0.20,
    salsiccia: 0.15,
    maiale: 0.10,
    tofu: 1.3,
    verdure: 1.2,
};

/// Static weight table for a scenario.
pub fn scenario_weights(scenario: Scenario) -> &'static ItemMap<f64> {
    match scenario {
        Scenario::Classico => &CLASSICO_WEIGHTS,
        Scenario::Chicken => &CHICKEN_WEIGHTS,
        Scenario::Budget => &BUDGET_WEIGHTS,
        Scenario::Veg => &VEG_WEIGHTS,
    }
}

/// Fresh copy of the default portion table, safe to mutate.
pub fn default_parameters() -> ParameterTable {
    DEFAULT_PARAMETERS
}

/// Display name for every item.
pub fn item_names() -> ItemMap<&'static str> {
    ItemMap::from_fn(|item| item.label())
}

/// Display name for every scenario, in tab order.
pub fn scenario_names() -> [(Scenario, &'static str); 4] {
    Scenario::ALL.map(|scenario| (scenario, scenario.label()))
}
