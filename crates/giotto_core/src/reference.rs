//! Platform identifier types and free-text reference extraction.
//!
//! Chat commands arrive as loose text in which channels, roles, and users
//! appear either as platform-decorated mentions (`<#...>`, `<@&...>`,
//! `<@...>`) or as bare numeric IDs. The extractors here strip decoration and
//! classify tokens without ever erroring: unrecognizable input degrades to an
//! explicit `Unresolved` variant and every call site supplies a default.

use serde::{Deserialize, Serialize};

/// Minimum digit count for a platform snowflake ID.
pub const MIN_SNOWFLAKE_DIGITS: usize = 15;

/// Snowflake identity of a channel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{_0}")]
pub struct ChannelId(u64);

impl ChannelId {
    /// Create an ID from its raw snowflake value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw snowflake value.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// Snowflake identity of a role.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{_0}")]
pub struct RoleId(u64);

impl RoleId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// Snowflake identity of a user.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{_0}")]
pub struct UserId(u64);

impl UserId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// Snowflake identity of a guild.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{_0}")]
pub struct GuildId(u64);

impl GuildId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// A channel reference extracted from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelToken {
    /// The literal `here`: the channel the command was issued in
    Here,
    /// `*`: every channel in the guild
    AllChannels,
    /// A decorated or bare numeric channel ID
    Id(ChannelId),
    /// Input that does not look like a channel reference
    Unresolved,
}

impl ChannelToken {
    /// Parse a raw token, stripping `<#...>` decoration.
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim();
        if token.eq_ignore_ascii_case("here") {
            return Self::Here;
        }
        if token == "*" {
            return Self::AllChannels;
        }
        let digits = token
            .strip_prefix("<#")
            .unwrap_or(token)
            .trim_end_matches('>');
        match parse_snowflake(digits) {
            Some(id) => Self::Id(ChannelId::new(id)),
            None => Self::Unresolved,
        }
    }
}

/// A target reference extracted from free text.
///
/// Roles and users share an ID namespace, so a bare numeric ID is
/// [`TargetToken::Ambiguous`]; only a sigil (`<@&...>` vs `<@...>`) pins the
/// token to one kind. Disambiguation of the bare form happens at resolution
/// time against the guild directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetToken {
    /// `*`: the guild's default (everyone) role
    Everyone,
    /// A role-sigil mention, `<@&...>`
    Role(RoleId),
    /// A user-sigil mention, `<@...>` or `<@!...>`
    User(UserId),
    /// A bare numeric ID that could name either a role or a user
    Ambiguous(u64),
    /// Input that does not look like a target reference
    Unresolved,
}

impl TargetToken {
    /// Parse a raw token, honoring role/user sigils.
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim();
        if token == "*" {
            return Self::Everyone;
        }
        if let Some(rest) = token.strip_prefix("<@&") {
            return match parse_snowflake(rest.trim_end_matches('>')) {
                Some(id) => Self::Role(RoleId::new(id)),
                None => Self::Unresolved,
            };
        }
        if let Some(rest) = token.strip_prefix("<@") {
            let digits = rest.strip_prefix('!').unwrap_or(rest).trim_end_matches('>');
            return match parse_snowflake(digits) {
                Some(id) => Self::User(UserId::new(id)),
                None => Self::Unresolved,
            };
        }
        match parse_snowflake(token) {
            Some(id) => Self::Ambiguous(id),
            None => Self::Unresolved,
        }
    }
}

/// The role or user a permission grant applies to.
///
/// The guild's default role is carried as `Role` with the everyone-role
/// identity, so downstream dispatch only ever distinguishes two kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedTarget {
    /// A role-scoped grant
    Role(RoleId),
    /// A member-scoped grant
    Member(UserId),
}

impl std::fmt::Display for ResolvedTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolvedTarget::Role(role) => write!(f, "<@&{}>", role),
            ResolvedTarget::Member(user) => write!(f, "<@{}>", user),
        }
    }
}

fn parse_snowflake(digits: &str) -> Option<u64> {
    if digits.len() < MIN_SNOWFLAKE_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_token_here() {
        assert_eq!(ChannelToken::parse("here"), ChannelToken::Here);
        assert_eq!(ChannelToken::parse("HERE"), ChannelToken::Here);
    }

    #[test]
    fn test_channel_token_wildcard() {
        assert_eq!(ChannelToken::parse("*"), ChannelToken::AllChannels);
    }

    #[test]
    fn test_channel_token_decorated_id() {
        assert_eq!(
            ChannelToken::parse("<#123456789012345678>"),
            ChannelToken::Id(ChannelId::new(123456789012345678))
        );
    }

    #[test]
    fn test_channel_token_bare_id() {
        assert_eq!(
            ChannelToken::parse("123456789012345678"),
            ChannelToken::Id(ChannelId::new(123456789012345678))
        );
    }

    #[test]
    fn test_channel_token_short_digits_unresolved() {
        // Below the snowflake minimum; not a channel reference
        assert_eq!(ChannelToken::parse("1234"), ChannelToken::Unresolved);
    }

    #[test]
    fn test_channel_token_noise_unresolved() {
        assert_eq!(ChannelToken::parse("general"), ChannelToken::Unresolved);
        assert_eq!(ChannelToken::parse(""), ChannelToken::Unresolved);
    }

    #[test]
    fn test_target_token_everyone() {
        assert_eq!(TargetToken::parse("*"), TargetToken::Everyone);
    }

    #[test]
    fn test_target_token_role_sigil() {
        assert_eq!(
            TargetToken::parse("<@&987654321098765432>"),
            TargetToken::Role(RoleId::new(987654321098765432))
        );
    }

    #[test]
    fn test_target_token_user_sigil() {
        assert_eq!(
            TargetToken::parse("<@987654321098765432>"),
            TargetToken::User(UserId::new(987654321098765432))
        );
        assert_eq!(
            TargetToken::parse("<@!987654321098765432>"),
            TargetToken::User(UserId::new(987654321098765432))
        );
    }

    #[test]
    fn test_target_token_bare_id_is_ambiguous() {
        assert_eq!(
            TargetToken::parse("987654321098765432"),
            TargetToken::Ambiguous(987654321098765432)
        );
    }

    #[test]
    fn test_target_token_noise_unresolved() {
        assert_eq!(TargetToken::parse("everyone"), TargetToken::Unresolved);
        assert_eq!(TargetToken::parse("<@abc>"), TargetToken::Unresolved);
    }

    #[test]
    fn test_resolved_target_display() {
        let role = ResolvedTarget::Role(RoleId::new(42000000000000001));
        let member = ResolvedTarget::Member(UserId::new(42000000000000002));
        assert_eq!(role.to_string(), "<@&42000000000000001>");
        assert_eq!(member.to_string(), "<@42000000000000002>");
    }
}
