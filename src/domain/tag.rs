use regex::Regex;
use std::fmt;
use std::str::FromStr;

use super::command::Command;
use super::date::ReleaseDate;
use super::refname;
use super::token::{tokenize, Token};
use super::version::Version;
use crate::error::FormatError;

/// A parsed tag format such as `v{major}.{minor}.{patch}`.
///
/// Parsing checks brace balance and that every command is known, so a
/// `TagFormat` can only fail to render for a missing date or an invalid
/// resulting tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFormat {
    source: String,
    tokens: Vec<Token>,
}

impl TagFormat {
    /// Parse a format string
    pub fn parse(format: &str) -> Result<Self, FormatError> {
        let tokens = tokenize(format)?;
        for token in &tokens {
            if let Token::Command(name) = token {
                lookup(name)?;
            }
        }
        Ok(TagFormat {
            source: format.to_string(),
            tokens,
        })
    }

    /// The format string as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Commands used by this format, in order of appearance
    pub fn commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.tokens.iter().filter_map(|token| match token {
            Token::Command(name) => Command::from_name(name),
            Token::Literal(_) => None,
        })
    }

    /// Whether rendering needs a release date
    pub fn requires_date(&self) -> bool {
        self.commands().any(|c| c.requires_date())
    }

    /// Substitute the inputs and validate the resulting tag
    pub fn render(
        &self,
        version: &Version,
        date: Option<&ReleaseDate>,
    ) -> Result<String, FormatError> {
        let tag = render(&self.tokens, version, date)?;
        validate(&tag)?;
        tracing::debug!(format = %self.source, %tag, "rendered tag");
        Ok(tag)
    }

    /// Whether `tag` has the shape this format produces for some version and date
    pub fn matches(&self, tag: &str) -> bool {
        let mut pattern = String::from("^");
        for token in &self.tokens {
            match token {
                Token::Literal(text) => pattern.push_str(&regex::escape(text)),
                Token::Command(name) => {
                    if let Some(command) = Command::from_name(name) {
                        pattern.push_str(command.pattern());
                    }
                }
            }
        }
        pattern.push('$');

        match Regex::new(&pattern) {
            Ok(re) => re.is_match(tag),
            Err(e) => {
                tracing::warn!(format = %self.source, error = %e, "could not build tag matcher");
                false
            }
        }
    }
}

impl FromStr for TagFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TagFormat::parse(s)
    }
}

impl fmt::Display for TagFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn lookup(name: &str) -> Result<Command, FormatError> {
    Command::from_name(name).ok_or_else(|| FormatError::UnknownCommand(name.to_string()))
}

/// Concatenate tokens, substituting each command.
///
/// The result is not validated; see [`validate`].
pub fn render(
    tokens: &[Token],
    version: &Version,
    date: Option<&ReleaseDate>,
) -> Result<String, FormatError> {
    let mut tag = String::new();
    for token in tokens {
        match token {
            Token::Literal(text) => tag.push_str(text),
            Token::Command(name) => tag.push_str(&lookup(name)?.render(version, date)?),
        }
    }
    Ok(tag)
}

/// Check a rendered tag against the ref-name rules
pub fn validate(tag: &str) -> Result<(), FormatError> {
    refname::validate(tag).map_err(|violations| FormatError::InvalidTag {
        tag: tag.to_string(),
        violations,
    })
}

/// Tokenize, substitute and validate in one step.
///
/// Either a fully valid tag or the first failing stage's error is returned.
///
/// # Examples
/// ```
/// use tag_format::{format_tag, Version};
///
/// let tag = format_tag("v{major}.{minor}.{patch}", &Version::new(1, 2, 3), None).unwrap();
/// assert_eq!(tag, "v1.2.3");
/// ```
pub fn format_tag(
    format: &str,
    version: &Version,
    date: Option<&ReleaseDate>,
) -> Result<String, FormatError> {
    let tokens = tokenize(format)?;
    let tag = render(&tokens, version, date)?;
    validate(&tag)?;
    Ok(tag)
}
