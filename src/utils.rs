pub mod number_formatter;

pub use number_formatter::{format_percentage, format_tick, format_value};
