use crate::models::{BaseTotals, GuestInput, Item, ParameterTable, Scenario, Totals};
use crate::planner::constants::{item_names, scenario_names};
use crate::planner::{apply_buffer, apply_scenario, scenario_deltas, total_kilograms};

/// Width of the product column, sized for the longest label.
fn name_width() -> usize {
    item_names().iter().map(|(_, n)| n.len()).max().unwrap_or(10)
}

/// Format a signed percentage like `+12%` / `-5%` / `0%`.
pub fn format_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{}%", delta)
    } else {
        format!("{}%", delta)
    }
}

/// Display a guest summary line.
pub fn display_guests(input: &GuestInput) {
    println!(
        "Guests: {} ({} omnivore adults, {} omnivore children, {} veg adults, {} veg children)",
        input.total_guests(),
        input.adults_omnivore,
        input.children_omnivore,
        input.adults_veg,
        input.children_veg
    );
    println!(
        "Appetite: {} | Sides for omnivores: {}",
        input.appetite.label(),
        if input.include_sides_for_omnivores { "yes" } else { "no" }
    );
}

/// Display a totals table for one scenario, including zero rows.
pub fn display_totals(totals: &Totals, scenario: Scenario, include_buffer: bool) {
    let width = name_width();

    println!();
    println!("=== {} ===", scenario.label());
    println!();
    println!("{:<width$}  {:>8}  {:>8}", "Product", "Grams", "Kg", width = width);

    for (item, total) in totals.iter() {
        let marker = if total.is_zero() { "  -" } else { "" };
        println!(
            "{:<width$}  {:>6} g  {:>5.2} kg{}",
            item.label(),
            total.grams(),
            total.kilograms(),
            marker,
            width = width
        );
    }

    let total_kg = total_kilograms(totals);
    let shown = apply_buffer(total_kg, include_buffer);
    println!();
    if include_buffer {
        println!("Total: {:.2} kg (with +10% buffer)", shown);
    } else {
        println!("Total: {:.2} kg", shown);
    }
    println!();
}

/// Display every scenario with its difference from classico.
pub fn display_comparison(base: &BaseTotals) {
    let width = name_width();

    println!();
    println!("=== Scenario comparison (vs. {}) ===", Scenario::Classico.label());

    for (scenario, name) in scenario_names() {
        let totals = apply_scenario(base, scenario);
        let deltas = scenario_deltas(base, scenario);

        println!();
        println!("--- {} ({:.2} kg) ---", name, total_kilograms(&totals));
        for (item, total) in totals.iter() {
            let delta = if scenario == Scenario::Classico {
                String::new()
            } else {
                format!("  {:>5}", format_delta(*deltas.get(item)))
            };
            println!(
                "  {:<width$}  {:>5.2} kg{}",
                item.label(),
                total.kilograms(),
                delta,
                width = width
            );
        }
    }
    println!();
}

/// Display the portion parameter table.
pub fn display_parameters(params: &ParameterTable) {
    let width = name_width();

    println!();
    println!("=== Portion parameters (grams per person) ===");
    println!();
    println!(
        "{:<width$}  {:>7}  {:>7}  {:>7}  {}",
        "Product", "Key", "Adult", "Child", "Enabled",
        width = width
    );

    for (item, p) in params.iter() {
        let group = if item.is_meat() { "meat" } else { "plant" };
        println!(
            "{:<width$}  {:>7}  {:>7.0}  {:>7.0}  {} ({})",
            item.label(),
            item.key(),
            p.base_adult_grams,
            p.base_child_grams,
            if p.enabled { "yes" } else { "no" },
            group,
            width = width
        );
    }
    println!();
}

/// One-line summary of a single item's parameters.
pub fn describe_parameter(params: &ParameterTable, item: Item) -> String {
    let p = params.get(item);
    format!(
        "{}: adult {} g, child {} g, {}",
        item.label(),
        p.base_adult_grams,
        p.base_child_grams,
        if p.enabled { "enabled" } else { "disabled" }
    )
}
