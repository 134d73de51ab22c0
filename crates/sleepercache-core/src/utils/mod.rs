//! Utility functions for formatting and display.

pub mod format;

pub use format::{decode_points, format_record, team_name_fallback};
