//! Command identifier patterns.

/// A user-supplied pattern over command identifiers.
///
/// Patterns are an explicit AST rather than a runtime-built regex: a bare
/// `*` selects everything, a trailing `*` selects by prefix (the namespace
/// separator stays literal, so `moderation.*` does not match
/// `moderationx.kick`), and anything else must match exactly. Matching is
/// case-insensitive throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandPattern {
    /// `*`: every identifier
    Any,
    /// `ns.*`: identifiers beginning with the prefix
    Prefix(String),
    /// A literal identifier
    Literal(String),
}

impl CommandPattern {
    /// Parse user input into a pattern. Empty input yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let token = input.trim().to_ascii_lowercase();
        if token.is_empty() {
            return None;
        }
        if token == "*" {
            return Some(Self::Any);
        }
        if let Some(prefix) = token.strip_suffix('*') {
            return Some(Self::Prefix(prefix.to_string()));
        }
        Some(Self::Literal(token))
    }

    /// Whether a command identifier matches this pattern.
    pub fn matches(&self, id: &str) -> bool {
        let id = id.to_ascii_lowercase();
        match self {
            Self::Any => true,
            Self::Prefix(prefix) => id.starts_with(prefix.as_str()),
            Self::Literal(literal) => id == *literal,
        }
    }
}
