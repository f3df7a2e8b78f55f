use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::{parse_guest_count, Appetite, GuestInput};

/// Prompt for a non-negative whole number of guests.
pub fn prompt_count(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    parse_guest_count(&input)
}

/// Prompt for the average appetite.
pub fn prompt_appetite(default: Appetite) -> Result<Appetite> {
    let options: Vec<&str> = Appetite::ALL.iter().map(|a| a.label()).collect();
    let default_idx = Appetite::ALL
        .iter()
        .position(|&a| a == default)
        .unwrap_or(1);

    let selection = Select::new()
        .with_prompt("Average appetite")
        .items(&options)
        .default(default_idx)
        .interact()?;

    Ok(Appetite::ALL.get(selection).copied().unwrap_or_default())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect the whole guest form, pre-filled with `current`.
pub fn collect_guest_input(current: &GuestInput) -> Result<GuestInput> {
    let adults_omnivore = prompt_count("Omnivore adults", current.adults_omnivore)?;
    let children_omnivore = prompt_count("Omnivore children", current.children_omnivore)?;
    let adults_veg = prompt_count("Vegetarian adults", current.adults_veg)?;
    let children_veg = prompt_count("Vegetarian children", current.children_veg)?;
    let appetite = prompt_appetite(current.appetite)?;
    let include_sides_for_omnivores = prompt_yes_no(
        "Include grilled vegetables as a side for omnivores?",
        current.include_sides_for_omnivores,
    )?;

    Ok(GuestInput {
        adults_omnivore,
        children_omnivore,
        adults_veg,
        children_veg,
        appetite,
        include_sides_for_omnivores,
    })
}
