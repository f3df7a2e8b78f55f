use std::fs;
use std::path::Path;

use clap::Parser;

use grigliata_planner_rs::cli::{Cli, Command, ExportFormat, GuestArgs, ParamsAction};
use grigliata_planner_rs::error::{PlannerError, Result};
use grigliata_planner_rs::interface::{
    collect_guest_input, describe_parameter, display_comparison, display_guests,
    display_parameters, display_totals, to_csv_string, to_plain_text, to_print_html,
};
use grigliata_planner_rs::models::{GuestInput, Item, Scenario};
use grigliata_planner_rs::state::{clear_session, load_session, save_session, SessionState};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let path = Path::new(&cli.file);

    match command {
        Command::Plan {
            guests,
            scenario,
            buffer,
            no_buffer,
            interactive,
        } => cmd_plan(path, &guests, scenario, buffer, no_buffer, interactive),
        Command::Compare => cmd_compare(path),
        Command::Export {
            format,
            scenario,
            output,
        } => cmd_export(path, format, scenario, output.as_deref()),
        Command::Params { action } => cmd_params(path, action.unwrap_or(ParamsAction::Show)),
        Command::Reset => cmd_reset(path),
    }
}

/// Overlay command-line guest fields on the stored form.
fn apply_guest_args(input: &mut GuestInput, args: &GuestArgs) {
    if let Some(n) = args.adults {
        input.adults_omnivore = n;
    }
    if let Some(n) = args.children {
        input.children_omnivore = n;
    }
    if let Some(n) = args.veg_adults {
        input.adults_veg = n;
    }
    if let Some(n) = args.veg_children {
        input.children_veg = n;
    }
    if let Some(appetite) = args.appetite {
        input.appetite = appetite;
    }
    if args.sides {
        input.include_sides_for_omnivores = true;
    }
    if args.no_sides {
        input.include_sides_for_omnivores = false;
    }
}

/// Load the session, or explain why there is nothing to compute yet.
fn load_with_guests(path: &Path) -> Option<SessionState> {
    let session = SessionState::from_stored(&load_session(path));
    if session.total_guests() == 0 {
        println!("No guests stored. Run 'plan' with guest counts first.");
        return None;
    }
    Some(session)
}

/// Calculate quantities and show the selected scenario.
fn cmd_plan(
    path: &Path,
    guests: &GuestArgs,
    scenario: Scenario,
    buffer: bool,
    no_buffer: bool,
    interactive: bool,
) -> Result<()> {
    let mut session = SessionState::from_stored(&load_session(path));

    apply_guest_args(&mut session.guest_input, guests);
    if interactive {
        session.guest_input = collect_guest_input(&session.guest_input)?;
    }
    if buffer {
        session.include_buffer = true;
    }
    if no_buffer {
        session.include_buffer = false;
    }
    session.active_scenario = scenario;

    // Inputs are kept even when there is nothing to calculate yet.
    save_session(path, &session.to_stored());

    if session.total_guests() == 0 {
        println!("No guests entered. Use --adults, --veg-adults, ... or --interactive.");
        return Ok(());
    }

    println!();
    display_guests(&session.guest_input);

    session.calculate()?;
    if let Some(totals) = session.current_totals() {
        display_totals(&totals, session.active_scenario, session.include_buffer);
    }

    Ok(())
}

/// Show every scenario side by side.
fn cmd_compare(path: &Path) -> Result<()> {
    let Some(mut session) = load_with_guests(path) else {
        return Ok(());
    };

    display_guests(&session.guest_input);
    let base = *session.calculate()?;
    display_comparison(&base);
    Ok(())
}

/// Export the shopping list to a file or stdout.
fn cmd_export(
    path: &Path,
    format: ExportFormat,
    scenario: Scenario,
    output: Option<&str>,
) -> Result<()> {
    let Some(mut session) = load_with_guests(path) else {
        return Ok(());
    };

    session.active_scenario = scenario;
    session.calculate()?;
    let totals = session
        .current_totals()
        .ok_or_else(|| PlannerError::InvalidInput("nothing calculated".to_string()))?;

    let content = match format {
        ExportFormat::Text => format!("{}\n", to_plain_text(&totals)),
        ExportFormat::Csv => to_csv_string(&totals)?,
        ExportFormat::Html => to_print_html(&totals),
    };

    match output {
        Some(out) => {
            fs::write(out, content)?;
            println!("Exported {} list to {}", scenario.label(), out);
        }
        None => print!("{}", content),
    }

    Ok(())
}

/// Show or change portion parameters.
fn cmd_params(path: &Path, action: ParamsAction) -> Result<()> {
    let mut session = SessionState::from_stored(&load_session(path));

    match action {
        ParamsAction::Show => {
            display_parameters(&session.params);
            return Ok(());
        }
        ParamsAction::Set {
            item,
            adult,
            child,
            enable,
            disable,
        } => {
            if adult.is_none() && child.is_none() && !enable && !disable {
                println!("Please specify at least one change:");
                println!("  --adult <g>   Grams per adult");
                println!("  --child <g>   Grams per child");
                println!("  --enable      Include the item");
                println!("  --disable     Exclude the item");
                return Ok(());
            }
            update_param(&mut session, item, adult, child, enable, disable)?;
            println!("{}", describe_parameter(&session.params, item));
        }
        ParamsAction::Reset => {
            session.reset_params();
            println!("Portion parameters restored to defaults.");
        }
    }

    save_session(path, &session.to_stored());
    Ok(())
}

fn update_param(
    session: &mut SessionState,
    item: Item,
    adult: Option<f64>,
    child: Option<f64>,
    enable: bool,
    disable: bool,
) -> Result<()> {
    for grams in [adult, child].into_iter().flatten() {
        if !grams.is_finite() || grams < 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "portion size must be a non-negative number, got {}",
                grams
            )));
        }
    }

    if let Some(grams) = adult {
        session.set_base_adult(item, grams);
    }
    if let Some(grams) = child {
        session.set_base_child(item, grams);
    }
    if enable {
        session.set_enabled(item, true);
    }
    if disable {
        session.set_enabled(item, false);
    }
    Ok(())
}

/// Clear everything stored for this planner.
fn cmd_reset(path: &Path) -> Result<()> {
    clear_session(path);
    println!("Session cleared. Defaults restored.");
    Ok(())
}
