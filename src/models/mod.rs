pub mod guests;
pub mod item;
pub mod scenario;
pub mod totals;

pub use guests::{parse_guest_count, Appetite, GuestInput};
pub use item::{Item, ItemMap, ItemParameters, ParameterTable};
pub use scenario::Scenario;
pub use totals::{BaseTotals, ItemTotal, ScenarioTotals, Totals};
