//! Utility functions

pub mod display;

pub use display::{days_left, format_date, truncate_text};
