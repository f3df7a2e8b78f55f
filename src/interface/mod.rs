pub mod export;
pub mod prompts;
pub mod render;

pub use export::{to_csv_string, to_plain_text, to_print_html, write_csv};
pub use prompts::{collect_guest_input, prompt_appetite, prompt_count, prompt_yes_no};
pub use render::{
    describe_parameter, display_comparison, display_guests, display_parameters, display_totals,
    format_delta,
};
