use crate::error::{Result, TagFormatError};
use std::fmt;

/// Semantic version components used by the `{major}`, `{minor}` and `{patch}` commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string as published by a package registry.
    ///
    /// Accepts `1.2.3`, a `v`/`V` prefixed form, the two-component `1.2`
    /// form (patch defaults to 0) and full semver strings carrying
    /// pre-release or build metadata, of which only the core triple is kept.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let clean = trimmed
            .strip_prefix(|c: char| c == 'v' || c == 'V')
            .unwrap_or(trimmed);

        if let Ok(parsed) = semver::Version::parse(clean) {
            return Ok(Version::from(parsed));
        }

        let parts: Vec<&str> = clean.split('.').collect();
        let component = |name: &str, part: &str| {
            let invalid =
                || TagFormatError::version(format!("Invalid {} version: '{}'", name, part));
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u64>().map_err(|_| invalid())
        };

        match parts.as_slice() {
            &[major, minor] => Ok(Version::new(
                component("major", major)?,
                component("minor", minor)?,
                0,
            )),
            &[major, minor, patch] => Ok(Version::new(
                component("major", major)?,
                component("minor", minor)?,
                component("patch", patch)?,
            )),
            _ => Err(TagFormatError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z or X.Y",
                input
            ))),
        }
    }
}

impl From<semver::Version> for Version {
    fn from(v: semver::Version) -> Self {
        Version::new(v.major, v.minor, v.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
