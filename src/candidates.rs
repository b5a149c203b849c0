//! Rendering several candidate formats for one version.
//!
//! A package may declare more than one tag format; the caller tries each
//! rendered tag against the source repository in order.

use crate::domain::{ReleaseDate, TagFormat, Version};
use crate::error::FormatError;
use crate::warning::RenderWarning;

/// Outcome of rendering one candidate format
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub format: String,
    pub outcome: Result<String, FormatError>,
}

impl Candidate {
    pub fn tag(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }
}

/// Every candidate in input order plus the warnings raised while rendering
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidateSet {
    pub candidates: Vec<Candidate>,
    pub warnings: Vec<RenderWarning>,
}

impl CandidateSet {
    /// Successfully rendered tags, de-duplicated, first occurrence wins
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.candidates.iter().filter_map(Candidate::tag) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Candidates that failed, with their errors
    pub fn failures(&self) -> impl Iterator<Item = (&str, &FormatError)> {
        self.candidates
            .iter()
            .filter_map(|c| c.outcome.as_ref().err().map(|e| (c.format.as_str(), e)))
    }

    /// Whether at least one candidate rendered a tag
    pub fn has_tags(&self) -> bool {
        self.candidates.iter().any(|c| c.outcome.is_ok())
    }
}

/// Render each format against the same version and date.
///
/// Failures are kept alongside successes rather than aborting the set.
pub fn render_candidates<S: AsRef<str>>(
    formats: &[S],
    version: &Version,
    date: Option<&ReleaseDate>,
) -> CandidateSet {
    let mut set = CandidateSet::default();
    let mut date_used = false;

    for format in formats {
        let format = format.as_ref();
        let outcome = TagFormat::parse(format).and_then(|parsed| {
            date_used |= parsed.requires_date();
            parsed.render(version, date)
        });

        match &outcome {
            Ok(tag) => {
                let first = set
                    .candidates
                    .iter()
                    .find(|c| c.tag() == Some(tag.as_str()));
                if let Some(first) = first {
                    set.warnings.push(RenderWarning::DuplicateTag {
                        tag: tag.clone(),
                        first_format: first.format.clone(),
                        duplicate_format: format.to_string(),
                    });
                }
            }
            Err(e) => tracing::debug!(format, error = %e, "candidate format failed"),
        }

        set.candidates.push(Candidate {
            format: format.to_string(),
            outcome,
        });
    }

    if let Some(date) = date {
        if !date_used {
            set.warnings.push(RenderWarning::UnusedDate {
                date: date.to_string(),
            });
        }
    }
    if !set.has_tags() {
        set.warnings.push(RenderWarning::NoCandidates {
            attempted: formats.len(),
        });
    }

    tracing::debug!(
        version = %version,
        attempted = formats.len(),
        rendered = set.tags().len(),
        "rendered candidate formats"
    );
    set
}
