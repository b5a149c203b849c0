//! Render workflow orchestration
//!
//! Resolves the candidate formats and inputs for a render request and
//! produces the rendered set. Kept apart from clap so it can be driven
//! programmatically.

use crate::candidates::{render_candidates, CandidateSet};
use crate::config::Config;
use crate::domain::{ReleaseDate, Version};
use crate::error::{Result, TagFormatError};

/// Arguments for the render workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderWorkflowArgs {
    /// Formats given on the command line; configured formats are used when empty
    pub formats: Vec<String>,

    /// Version string as published by the registry
    pub version: String,

    /// Release date, `YYYY-MM-DD` or RFC 3339
    pub date: Option<String>,

    /// Use this package's configured formats
    pub package: Option<String>,
}

/// Result of a render workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub version: Version,
    pub date: Option<ReleaseDate>,
    pub set: CandidateSet,
}

impl WorkflowResult {
    /// First successfully rendered tag, if any
    pub fn first_tag(&self) -> Option<&str> {
        self.set.tags().into_iter().next()
    }
}

/// Main render workflow
///
/// 1. Parse the version and optional date
/// 2. Pick the formats: explicit ones, else the package's, else the global list
/// 3. Render every candidate
///
/// # Errors
/// Version or date parse failures, an unknown package, or an empty format list.
/// Per-format render failures are reported inside the returned set instead.
pub fn run_render_workflow(args: &RenderWorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    let version = Version::parse(&args.version)?;
    let date = args.date.as_deref().map(ReleaseDate::parse).transpose()?;

    let formats: &[String] = if args.formats.is_empty() {
        config.formats_for(args.package.as_deref())?
    } else {
        &args.formats
    };
    if formats.is_empty() {
        return Err(TagFormatError::config("No tag formats to render"));
    }

    tracing::info!(
        %version,
        date = ?date.map(|d| d.to_string()),
        formats = formats.len(),
        "rendering tag candidates"
    );
    let set = render_candidates(formats, &version, date.as_ref());

    Ok(WorkflowResult { version, date, set })
}
