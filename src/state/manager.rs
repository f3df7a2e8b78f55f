use crate::error::Result;
use crate::models::{BaseTotals, GuestInput, Item, ParameterTable, Scenario, ScenarioTotals};
use crate::planner::{
    apply_buffer, apply_scenario, compute_base_totals, default_parameters, total_kilograms,
};
use crate::state::persistence::StoredSession;

/// Live session: the form inputs plus the last computed result.
///
/// Editing inputs never touches `results`; only [`SessionState::calculate`]
/// does, from a snapshot of the inputs at that moment.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub guest_input: GuestInput,
    pub params: ParameterTable,
    pub include_buffer: bool,
    pub active_scenario: Scenario,
    results: Option<BaseTotals>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            guest_input: GuestInput::default(),
            params: default_parameters(),
            include_buffer: false,
            active_scenario: Scenario::Classico,
            results: None,
        }
    }
}

impl SessionState {
    /// Restore a session from persisted data; absent fields use defaults.
    pub fn from_stored(stored: &StoredSession) -> Self {
        Self {
            guest_input: stored.guest_input.unwrap_or_default(),
            params: stored.parameter_table(),
            include_buffer: stored.include_buffer.unwrap_or(false),
            ..Default::default()
        }
    }

    /// Snapshot of everything worth persisting.
    pub fn to_stored(&self) -> StoredSession {
        StoredSession {
            guest_input: Some(self.guest_input),
            params: Some(StoredSession::from_table(&self.params)),
            include_buffer: Some(self.include_buffer),
        }
    }

    pub fn set_base_adult(&mut self, item: Item, grams: f64) {
        self.params.get_mut(item).base_adult_grams = grams;
    }

    pub fn set_base_child(&mut self, item: Item, grams: f64) {
        self.params.get_mut(item).base_child_grams = grams;
    }

    pub fn set_enabled(&mut self, item: Item, enabled: bool) {
        self.params.get_mut(item).enabled = enabled;
    }

    /// Restore the default portion table.
    pub fn reset_params(&mut self) {
        self.params = default_parameters();
    }

    pub fn total_guests(&self) -> u64 {
        self.guest_input.total_guests()
    }

    /// Compute base totals from the current inputs and keep them.
    pub fn calculate(&mut self) -> Result<&BaseTotals> {
        let guests = self.guest_input;
        let params = self.params;
        let totals = compute_base_totals(&guests, &params)?;
        Ok(self.results.insert(totals))
    }

    pub fn results(&self) -> Option<&BaseTotals> {
        self.results.as_ref()
    }

    /// Last results reallocated under the active scenario.
    pub fn current_totals(&self) -> Option<ScenarioTotals> {
        self.results
            .as_ref()
            .map(|base| apply_scenario(base, self.active_scenario))
    }

    /// Grand total for display, buffered if the toggle is on.
    pub fn displayed_total_kg(&self) -> Option<f64> {
        self.current_totals()
            .map(|totals| apply_buffer(total_kilograms(&totals), self.include_buffer))
    }

    /// Back to a blank form with default parameters and no results.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Appetite;

    fn ten_adults() -> SessionState {
        let mut session = SessionState::default();
        session.guest_input.adults_omnivore = 10;
        session
    }

    #[test]
    fn test_no_results_before_calculate() {
        let session = ten_adults();
        assert!(session.results().is_none());
        assert!(session.current_totals().is_none());
        assert!(session.displayed_total_kg().is_none());
    }

    #[test]
    fn test_editing_inputs_does_not_recompute() {
        let mut session = ten_adults();
        session.calculate().unwrap();
        let before = *session.results().unwrap();

        session.guest_input.appetite = Appetite::High;
        session.set_enabled(Item::Manzo, false);
        assert_eq!(*session.results().unwrap(), before);

        let after = *session.calculate().unwrap();
        assert_eq!(after.manzo.grams(), 0);
    }

    #[test]
    fn test_buffer_applies_to_displayed_total() {
        let mut session = ten_adults();
        session.calculate().unwrap();
        let plain = session.displayed_total_kg().unwrap();

        session.include_buffer = true;
        let buffered = session.displayed_total_kg().unwrap();
        assert_float_absolute_eq!(buffered, plain * 1.1, 1e-9);
    }

    #[test]
    fn test_param_setters() {
        let mut session = SessionState::default();
        session.set_base_adult(Item::Pollo, 220.0);
        session.set_base_child(Item::Pollo, 90.0);
        assert_eq!(session.params.pollo.base_adult_grams, 220.0);
        assert_eq!(session.params.pollo.base_child_grams, 90.0);

        session.reset_params();
        assert_eq!(session.params, default_parameters());
    }

    #[test]
    fn test_stored_roundtrip_and_reset() {
        let mut session = ten_adults();
        session.include_buffer = true;
        session.set_enabled(Item::Tofu, false);

        let restored = SessionState::from_stored(&session.to_stored());
        assert_eq!(restored.guest_input, session.guest_input);
        assert_eq!(restored.params, session.params);
        assert!(restored.include_buffer);

        session.calculate().unwrap();
        session.reset();
        assert!(session.results().is_none());
        assert_eq!(session.total_guests(), 0);
        assert_eq!(session.params, default_parameters());
    }
}
