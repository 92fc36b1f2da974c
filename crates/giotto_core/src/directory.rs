//! Synchronous lookup contracts against the platform cache.
//!
//! Resolution consults whatever channel/role/member cache the host platform
//! maintains. Suspension only happens at the settings-store boundary, so
//! these lookups are synchronous reads; unresolvable input yields an empty
//! result rather than an error.

use crate::{ChannelId, GuildId, RoleId, UserId};

/// Resolves channel references within a guild.
pub trait ChannelDirectory: Send + Sync {
    /// Every channel in the guild, for wildcard resolution.
    fn guild_channels(&self, guild: GuildId) -> Vec<ChannelId>;

    /// Whether the channel exists in the guild.
    fn channel_exists(&self, guild: GuildId, channel: ChannelId) -> bool;
}

/// Resolves role and member identities within a guild.
pub trait GuildDirectory: Send + Sync {
    /// Whether the role exists in the guild.
    fn role_exists(&self, guild: GuildId, role: RoleId) -> bool;

    /// Whether the user is a member of the guild.
    fn member_exists(&self, guild: GuildId, user: UserId) -> bool;

    /// The guild's default (everyone) role.
    fn everyone_role(&self, guild: GuildId) -> RoleId;
}
