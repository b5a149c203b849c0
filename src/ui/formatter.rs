//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text; `display_*` functions print it.

use console::style;

use crate::candidates::{Candidate, CandidateSet};
use crate::config::Config;
use crate::domain::{Command, RefNameViolation, TagFormat};
use crate::warning::RenderWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a render warning to the user.
pub fn display_warning(warning: &RenderWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One line per candidate: the rendered tag, or the reason it failed.
pub fn format_candidate(candidate: &Candidate) -> String {
    match &candidate.outcome {
        Ok(tag) => format!("{} {}  ({})", style("✓").green(), tag, candidate.format),
        Err(e) => format!("{} {}  {}", style("✗").red(), candidate.format, e),
    }
}

/// Display every candidate of a set followed by its warnings.
pub fn display_candidates(set: &CandidateSet) {
    for candidate in &set.candidates {
        println!("{}", format_candidate(candidate));
    }
    for warning in &set.warnings {
        display_warning(warning);
    }
}

/// Display validation results for a tag.
///
/// # Arguments
/// * `tag` - The tag that was checked
/// * `violations` - Broken rules, empty when the tag is valid
pub fn display_validation(tag: &str, violations: &[RefNameViolation]) {
    if violations.is_empty() {
        display_success(&format!("'{}' is a valid tag name", tag));
        return;
    }
    display_error(&format!("'{}' is not a valid tag name", tag));
    for violation in violations {
        eprintln!("    - {}", violation);
    }
}

/// Summary line for a successfully parsed format.
pub fn format_parsed(format: &TagFormat) -> String {
    let commands: Vec<&str> = format.commands().map(|c| c.name()).collect();
    let needs_date = if format.requires_date() {
        "needs a date"
    } else {
        "no date needed"
    };
    format!(
        "{}  commands: [{}], {}",
        format,
        commands.join(", "),
        needs_date
    )
}

/// Display the fixed command table.
pub fn display_commands() {
    println!("{}", style("Available commands:").bold());
    for command in Command::ALL {
        let name = format!("{{{}}}", command.name());
        println!("  {:<9} {}", name, command.description());
    }
}

/// Display configured global and per-package formats.
pub fn display_config(config: &Config) {
    println!("{}", style("Tag formats:").bold());
    for format in &config.tag_formats {
        println!("  - {}", format);
    }
    for (name, package) in &config.packages {
        match &package.repo {
            Some(repo) => println!("{} ({})", style(name).bold(), repo),
            None => println!("{}", style(name).bold()),
        }
        if package.tag_formats.is_empty() {
            println!("  (global formats)");
        }
        for format in &package.tag_formats {
            println!("  - {}", format);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    #[test]
    fn test_format_candidate_success() {
        console::set_colors_enabled(false);
        let candidate = Candidate {
            format: "v{major}".to_string(),
            outcome: Ok("v1".to_string()),
        };
        assert_eq!(format_candidate(&candidate), "✓ v1  (v{major})");
    }

    #[test]
    fn test_format_candidate_failure() {
        console::set_colors_enabled(false);
        let candidate = Candidate {
            format: "{nope}".to_string(),
            outcome: Err(FormatError::UnknownCommand("nope".to_string())),
        };
        assert_eq!(
            format_candidate(&candidate),
            "✗ {nope}  Unknown command: {nope}"
        );
    }

    #[test]
    fn test_format_parsed() {
        let format = TagFormat::parse("{YYYY}.{MM}-v{major}").unwrap();
        assert_eq!(
            format_parsed(&format),
            "{YYYY}.{MM}-v{major}  commands: [YYYY, MM, major], needs a date"
        );
    }

    #[test]
    fn test_display_functions() {
        // Visual verification test - output goes to stdout/stderr
        display_status("test status");
        display_validation("bad tag", &[RefNameViolation::ForbiddenChar(' ')]);
        display_commands();
    }
}
