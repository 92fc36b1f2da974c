//! The permission directive grammar.
//!
//! Directives arrive as loose text of the shape
//! `<pattern> [in <channel-ref>] [for <target-ref>]`, with the invoking call
//! word already stripped by the dispatcher. Parsing is tolerant: unknown
//! tokens are skipped rather than rejected, and every piece is optional.

use crate::ChannelToken;
use derive_getters::Getters;

/// Parsed pieces of a permission directive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Directive {
    /// The command pattern token, if any
    pattern: Option<String>,
    /// The channel token following `in`, if any
    channel: Option<String>,
    /// The target token following `for`, if any
    target: Option<String>,
}

impl Directive {
    /// Parse directive text.
    ///
    /// The first token before any `in`/`for` keyword becomes the pattern;
    /// `in` and `for` each bind the token that follows them, first
    /// occurrence wins.
    pub fn parse(text: &str) -> Self {
        let mut directive = Self::default();
        let mut tokens = text.split_whitespace();
        while let Some(token) = tokens.next() {
            if token.eq_ignore_ascii_case("in") {
                if directive.channel.is_none()
                    && let Some(value) = tokens.next()
                {
                    directive.channel = Some(value.to_string());
                }
            } else if token.eq_ignore_ascii_case("for") {
                if directive.target.is_none()
                    && let Some(value) = tokens.next()
                {
                    directive.target = Some(value.to_string());
                }
            } else if directive.pattern.is_none()
                && directive.channel.is_none()
                && directive.target.is_none()
            {
                directive.pattern = Some(token.to_string());
            }
        }
        directive
    }
}

/// Scan a free-text fragment for the first channel reference.
///
/// The tracking directives have no positional grammar — trackable tokens are
/// interleaved with noise words — so the channel is whichever token first
/// parses as `here` or a (possibly `<#...>`-decorated) snowflake.
pub fn find_channel_token(text: &str) -> Option<String> {
    text.split_whitespace()
        .find(|token| {
            matches!(
                ChannelToken::parse(token),
                ChannelToken::Here | ChannelToken::Id(_)
            )
        })
        .map(|token| token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_directive() {
        let directive =
            Directive::parse("settings.enable in 123456789012345678 for 987654321098765432");
        assert_eq!(directive.pattern().as_deref(), Some("settings.enable"));
        assert_eq!(directive.channel().as_deref(), Some("123456789012345678"));
        assert_eq!(directive.target().as_deref(), Some("987654321098765432"));
    }

    #[test]
    fn test_parse_pattern_only() {
        let directive = Directive::parse("moderation.*");
        assert_eq!(directive.pattern().as_deref(), Some("moderation.*"));
        assert!(directive.channel().is_none());
        assert!(directive.target().is_none());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Directive::parse(""), Directive::default());
        assert_eq!(Directive::parse("   "), Directive::default());
    }

    #[test]
    fn test_parse_channel_without_pattern() {
        let directive = Directive::parse("in here");
        assert!(directive.pattern().is_none());
        assert_eq!(directive.channel().as_deref(), Some("here"));
    }

    #[test]
    fn test_parse_keywords_are_case_insensitive() {
        let directive = Directive::parse("music.* IN here FOR *");
        assert_eq!(directive.pattern().as_deref(), Some("music.*"));
        assert_eq!(directive.channel().as_deref(), Some("here"));
        assert_eq!(directive.target().as_deref(), Some("*"));
    }

    #[test]
    fn test_parse_first_occurrence_wins() {
        let directive = Directive::parse("a.b in here in 123456789012345678");
        assert_eq!(directive.channel().as_deref(), Some("here"));
    }

    #[test]
    fn test_parse_ignores_trailing_noise() {
        let directive = Directive::parse("a.b please and thank you");
        assert_eq!(directive.pattern().as_deref(), Some("a.b"));
        assert!(directive.channel().is_none());
    }

    #[test]
    fn test_find_channel_token_here() {
        assert_eq!(
            find_channel_token("alerts in here").as_deref(),
            Some("here")
        );
    }

    #[test]
    fn test_find_channel_token_decorated() {
        assert_eq!(
            find_channel_token("nitain <#123456789012345678>").as_deref(),
            Some("<#123456789012345678>")
        );
    }

    #[test]
    fn test_find_channel_token_absent() {
        assert!(find_channel_token("alerts nitain").is_none());
    }
}
