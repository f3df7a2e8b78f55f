use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::models::{parse_guest_count, Appetite, Item, Scenario};
use crate::planner::constants::DEFAULT_STATE_FILE;

/// Grigliata Planner — how much meat and veg to buy for a barbecue.
#[derive(Parser, Debug)]
#[command(name = "grigliata_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the session state JSON file.
    #[arg(short, long, default_value = DEFAULT_STATE_FILE)]
    pub file: String,
}

/// Guest form fields; anything omitted keeps the stored value.
#[derive(Args, Debug, Default, Clone)]
pub struct GuestArgs {
    /// Omnivore adults.
    #[arg(long, value_parser = parse_guest_count)]
    pub adults: Option<u32>,

    /// Omnivore children.
    #[arg(long, value_parser = parse_guest_count)]
    pub children: Option<u32>,

    /// Vegetarian adults.
    #[arg(long, value_parser = parse_guest_count)]
    pub veg_adults: Option<u32>,

    /// Vegetarian children.
    #[arg(long, value_parser = parse_guest_count)]
    pub veg_children: Option<u32>,

    /// Average appetite: light, normal or high.
    #[arg(long)]
    pub appetite: Option<Appetite>,

    /// Include grilled vegetables as a side for omnivores.
    #[arg(long, overrides_with = "no_sides")]
    pub sides: bool,

    /// Do not include sides for omnivores.
    #[arg(long)]
    pub no_sides: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// `Name: X kg` lines.
    Text,
    /// `Product,Grams,Kilograms` table.
    Csv,
    /// Printable HTML page.
    Html,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate quantities for the guests and show one scenario.
    Plan {
        #[command(flatten)]
        guests: GuestArgs,

        /// Scenario to show: classico, chicken, budget or veg.
        #[arg(short, long, default_value = "classico")]
        scenario: Scenario,

        /// Add a 10% safety margin to the displayed total.
        #[arg(long, overrides_with = "no_buffer")]
        buffer: bool,

        /// Remove the safety margin.
        #[arg(long)]
        no_buffer: bool,

        /// Enter guest counts interactively.
        #[arg(short, long)]
        interactive: bool,
    },

    /// Show all four scenarios with differences from classico.
    Compare,

    /// Export the shopping list for a scenario.
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,

        /// Scenario to export.
        #[arg(short, long, default_value = "classico")]
        scenario: Scenario,

        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect or change portion parameters.
    Params {
        #[command(subcommand)]
        action: Option<ParamsAction>,
    },

    /// Clear the stored session.
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum ParamsAction {
    /// Show the current parameter table.
    Show,

    /// Change one item's portion sizes or toggle it.
    Set {
        /// Item key: manzo, pollo, salsiccia, maiale, tofu or verdure.
        item: Item,

        /// Grams per adult.
        #[arg(long)]
        adult: Option<f64>,

        /// Grams per child.
        #[arg(long)]
        child: Option<f64>,

        /// Include the item in calculations.
        #[arg(long, conflicts_with = "disable")]
        enable: bool,

        /// Exclude the item from calculations.
        #[arg(long)]
        disable: bool,
    },

    /// Restore default parameters.
    Reset,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            guests: GuestArgs::default(),
            scenario: Scenario::Classico,
            buffer: false,
            no_buffer: false,
            interactive: false,
        }
    }
}
