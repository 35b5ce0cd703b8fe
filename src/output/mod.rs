pub mod formatter;

pub use formatter::{format_allocation_table, format_delta, format_report, should_use_colors};
