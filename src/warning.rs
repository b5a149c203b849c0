use std::fmt;

/// Non-fatal findings while rendering a set of candidate formats.
/// These should be reported to the user but do not stop rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderWarning {
    /// Two formats produced the same tag; only the first is kept
    DuplicateTag {
        tag: String,
        first_format: String,
        duplicate_format: String,
    },
    /// A date was supplied but none of the formats reads it
    UnusedDate { date: String },
    /// Every candidate format failed to render
    NoCandidates { attempted: usize },
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderWarning::DuplicateTag {
                tag,
                first_format,
                duplicate_format,
            } => write!(
                f,
                "Format '{}' renders the same tag '{}' as '{}'",
                duplicate_format, tag, first_format
            ),
            RenderWarning::UnusedDate { date } => {
                write!(f, "Date {} was supplied but no format uses it", date)
            }
            RenderWarning::NoCandidates { attempted } => {
                write!(f, "None of the {} candidate formats rendered a tag", attempted)
            }
        }
    }
}
