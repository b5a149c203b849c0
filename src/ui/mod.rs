//! User interface module - terminal output for the CLI.
//!
//! Library code never prints; everything user-facing goes through here.

pub mod formatter;

pub use formatter::{
    display_candidates, display_commands, display_config, display_error, display_status,
    display_success, display_validation, display_warning, format_candidate, format_parsed,
};
