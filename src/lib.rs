pub mod candidates;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod ui;
pub mod warning;

pub use candidates::{render_candidates, Candidate, CandidateSet};
pub use domain::{
    format_tag, tokenize, Command, RefNameViolation, ReleaseDate, TagFormat, Token, Version,
};
pub use error::{FormatError, Result, TagFormatError};
