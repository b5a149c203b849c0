//! Git ref-name rules applied to rendered tags.
//!
//! This is a pure string check; no repository is consulted.

use std::fmt;

const FORBIDDEN_CHARS: [char; 8] = [' ', '~', '^', ':', '?', '*', '[', '\\'];

/// A single broken ref-name rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefNameViolation {
    Empty,
    LeadingSlash,
    TrailingSlash,
    LockSuffix,
    LeadingHyphen,
    ConsecutiveSlashes,
    DoubleDot,
    AtBrace,
    /// First occurrence of each forbidden character
    ForbiddenChar(char),
    /// First occurrence of each ASCII control character
    ControlChar(char),
}

impl fmt::Display for RefNameViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefNameViolation::Empty => write!(f, "tag is empty"),
            RefNameViolation::LeadingSlash => write!(f, "starts with '/'"),
            RefNameViolation::TrailingSlash => write!(f, "ends with '/'"),
            RefNameViolation::LockSuffix => write!(f, "ends with '.lock'"),
            RefNameViolation::LeadingHyphen => write!(f, "starts with '-'"),
            RefNameViolation::ConsecutiveSlashes => write!(f, "contains '//'"),
            RefNameViolation::DoubleDot => write!(f, "contains '..'"),
            RefNameViolation::AtBrace => write!(f, "contains '@{{'"),
            RefNameViolation::ForbiddenChar(c) => write!(f, "contains forbidden character {:?}", c),
            RefNameViolation::ControlChar(c) => {
                write!(f, "contains control character U+{:04X}", *c as u32)
            }
        }
    }
}

/// Check a tag against every ref-name rule.
///
/// All violations are collected, in rule order, rather than stopping at the
/// first one.
pub fn validate(tag: &str) -> Result<(), Vec<RefNameViolation>> {
    let mut violations = Vec::new();

    if tag.is_empty() {
        violations.push(RefNameViolation::Empty);
        return Err(violations);
    }

    if tag.starts_with('/') {
        violations.push(RefNameViolation::LeadingSlash);
    }
    if tag.ends_with('/') {
        violations.push(RefNameViolation::TrailingSlash);
    }
    if tag.ends_with(".lock") {
        violations.push(RefNameViolation::LockSuffix);
    }
    if tag.starts_with('-') {
        violations.push(RefNameViolation::LeadingHyphen);
    }
    if tag.contains("//") {
        violations.push(RefNameViolation::ConsecutiveSlashes);
    }
    if tag.contains("..") {
        violations.push(RefNameViolation::DoubleDot);
    }
    if tag.contains("@{") {
        violations.push(RefNameViolation::AtBrace);
    }

    let mut forbidden: Vec<char> = Vec::new();
    let mut control: Vec<char> = Vec::new();
    for c in tag.chars() {
        if FORBIDDEN_CHARS.contains(&c) {
            if !forbidden.contains(&c) {
                forbidden.push(c);
            }
        } else if c.is_ascii_control() && !control.contains(&c) {
            control.push(c);
        }
    }
    violations.extend(forbidden.into_iter().map(RefNameViolation::ForbiddenChar));
    violations.extend(control.into_iter().map(RefNameViolation::ControlChar));

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Whether a tag satisfies every ref-name rule
pub fn is_valid(tag: &str) -> bool {
    validate(tag).is_ok()
}
