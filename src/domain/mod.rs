//! Domain logic - the tag format language, independent of configuration and I/O

pub mod command;
pub mod date;
pub mod refname;
pub mod tag;
pub mod token;
pub mod version;

pub use command::{Case, Command};
pub use date::ReleaseDate;
pub use refname::RefNameViolation;
pub use tag::{format_tag, TagFormat};
pub use token::{tokenize, Token};
pub use version::Version;
