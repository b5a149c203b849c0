use crate::error::FormatError;

/// A piece of a parsed format string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text copied verbatim into the tag
    Literal(String),
    /// The contents of a `{...}` block, not yet checked against the command table
    Command(String),
}

/// Split a format string into literal runs and `{command}` blocks.
///
/// Adjacent literal characters are coalesced into one token. An empty
/// format produces no tokens.
///
/// # Errors
/// `FormatError::MalformedCommand` when a `{` is never closed, a `}` has no
/// opening brace, or a `{` appears inside an open command.
pub fn tokenize(format: &str) -> Result<Vec<Token>, FormatError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut command = String::new();
    // byte offset of the currently open '{'
    let mut open: Option<usize> = None;

    for (i, c) in format.char_indices() {
        match c {
            '{' => {
                if let Some(start) = open {
                    return Err(FormatError::malformed(
                        start,
                        "unclosed '{' before nested '{'",
                    ));
                }
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                open = Some(i);
            }
            '}' => {
                if open.take().is_none() {
                    return Err(FormatError::malformed(i, "'}' without matching '{'"));
                }
                tokens.push(Token::Command(std::mem::take(&mut command)));
            }
            c if open.is_some() => command.push(c),
            c => literal.push(c),
        }
    }

    if let Some(start) = open {
        return Err(FormatError::malformed(start, "unclosed '{'"));
    }
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }

    tracing::trace!(format, count = tokens.len(), "tokenized format");
    Ok(tokens)
}
