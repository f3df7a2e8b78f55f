use std::fs;

use grigliata_planner_rs::interface::{to_csv_string, to_plain_text, to_print_html};
use grigliata_planner_rs::models::{Appetite, GuestInput, Item, Scenario};
use grigliata_planner_rs::planner::scenario_deltas;
use grigliata_planner_rs::state::{clear_session, load_session, save_session, SessionState};
use tempfile::TempDir;

fn party() -> GuestInput {
    GuestInput {
        adults_omnivore: 10,
        children_omnivore: 4,
        adults_veg: 3,
        children_veg: 1,
        appetite: Appetite::Normal,
        include_sides_for_omnivores: true,
    }
}

#[test]
fn test_session_survives_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    let mut session = SessionState::default();
    session.guest_input = party();
    session.include_buffer = true;
    session.set_base_adult(Item::Salsiccia, 175.0);
    session.set_enabled(Item::Maiale, false);
    save_session(&path, &session.to_stored());

    let mut restored = SessionState::from_stored(&load_session(&path));
    assert_eq!(restored.guest_input, party());
    assert!(restored.include_buffer);
    assert_eq!(restored.params.salsiccia.base_adult_grams, 175.0);
    assert!(!restored.params.maiale.enabled);

    let original = *session.calculate().unwrap();
    let reloaded = *restored.calculate().unwrap();
    assert_eq!(original, reloaded);
}

#[test]
fn test_corrupt_state_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "[1, 2, 3").unwrap();

    let session = SessionState::from_stored(&load_session(&path));
    assert_eq!(session.total_guests(), 0);
    assert!(!session.include_buffer);

    // Saving over a corrupt file replaces it.
    save_session(&path, &session.to_stored());
    let reloaded = load_session(&path);
    assert_eq!(reloaded.include_buffer, Some(false));
}

#[test]
fn test_clear_then_load_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    let mut session = SessionState::default();
    session.guest_input = party();
    save_session(&path, &session.to_stored());
    clear_session(&path);

    assert!(load_session(&path).guest_input.is_none());
}

#[test]
fn test_exports_match_scenario_totals() {
    let mut session = SessionState::default();
    session.guest_input = party();
    session.active_scenario = Scenario::Veg;
    session.calculate().unwrap();
    let totals = session.current_totals().unwrap();

    let text = to_plain_text(&totals);
    let csv = to_csv_string(&totals).unwrap();
    let html = to_print_html(&totals);

    let listed = totals.iter().filter(|(_, t)| !t.is_zero()).count();
    assert_eq!(text.lines().count(), listed);
    assert_eq!(csv.lines().count(), listed + 1);
    for (item, total) in totals.iter().filter(|(_, t)| !t.is_zero()) {
        assert!(text.contains(&format!("{}: {} kg", item.label(), total.kilograms())));
        assert!(csv.contains(&format!("{},{}", item.label(), total.grams())));
        assert!(html.contains(&format!("<td>{} g</td>", total.grams())));
    }
}

#[test]
fn test_deltas_against_classico() {
    let mut session = SessionState::default();
    session.guest_input = party();
    let base = *session.calculate().unwrap();

    let chicken = scenario_deltas(&base, Scenario::Chicken);
    assert!(*chicken.get(Item::Pollo) > 0);
    assert!(*chicken.get(Item::Manzo) < 0);

    let veg = scenario_deltas(&base, Scenario::Veg);
    // tofu 550 g -> 700 g under the veg boost
    assert_eq!(*veg.get(Item::Tofu), 27);
}
