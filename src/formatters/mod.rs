//! Output formatters
//!
//! Renders explanation records for human consumption. Text is the only
//! output format; it targets consoles and logs.

mod text;

pub use text::format_as_text;
