//! Report formatters and their registry.
//!
//! A formatter renders a report document into the final output string.
//! `json` and `text` are registered out of the box; more can be added with
//! [`register_formatter`].

mod factory;
mod json;
mod text;

pub use factory::{
    FormatterFactory, ReportFormatter, formatter_types, get_formatter, register_formatter,
};
pub use json::{JSON_FORMAT, JsonFormatter};
pub use text::{NO_DATA_MESSAGE, TEXT_FORMAT, TextFormatter};
