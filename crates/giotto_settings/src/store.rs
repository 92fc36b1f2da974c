//! The settings store contract.

use async_trait::async_trait;
use giotto_core::{ChannelId, GuildId, RoleId, UserId};
use giotto_error::SettingsResult;

/// Per-channel setting gating confirmation artifacts after a settings change.
pub const RESPOND_TO_SETTINGS: &str = "respond_to_settings";

/// Per-guild setting holding the command prefix.
pub const PREFIX_SETTING: &str = "prefix";

/// Prefix used when a guild has none configured.
pub const DEFAULT_PREFIX: &str = "/";

/// Asynchronous contract for the external settings store.
///
/// Every call is scoped to a single channel (or guild, for guild settings).
/// Permission grants are keyed by channel × target × command with
/// last-write-wins semantics; tracking subscriptions are per-channel set
/// membership. Both are idempotent, which is what lets the mutation layer
/// issue its batch concurrently without coordination.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Set whether a role may invoke a command in a channel.
    async fn set_channel_permission_for_role(
        &self,
        channel: ChannelId,
        role: RoleId,
        command: &str,
        allow: bool,
    ) -> SettingsResult<()>;

    /// Set whether a member may invoke a command in a channel.
    async fn set_channel_permission_for_member(
        &self,
        channel: ChannelId,
        user: UserId,
        command: &str,
        allow: bool,
    ) -> SettingsResult<()>;

    /// Subscribe a channel to the given event types.
    async fn track_event_types(
        &self,
        channel: ChannelId,
        events: &[String],
    ) -> SettingsResult<()>;

    /// Subscribe a channel to the given reward/item types.
    async fn track_items(&self, channel: ChannelId, items: &[String]) -> SettingsResult<()>;

    /// Unsubscribe a channel from the given event types.
    async fn untrack_event_types(
        &self,
        channel: ChannelId,
        events: &[String],
    ) -> SettingsResult<()>;

    /// Unsubscribe a channel from the given reward/item types.
    async fn untrack_items(&self, channel: ChannelId, items: &[String]) -> SettingsResult<()>;

    /// Read a per-channel setting.
    async fn get_channel_setting(
        &self,
        channel: ChannelId,
        key: &str,
    ) -> SettingsResult<Option<String>>;

    /// Read a per-guild setting.
    async fn get_guild_setting(&self, guild: GuildId, key: &str)
    -> SettingsResult<Option<String>>;
}

/// Interpret a stored setting value as a boolean toggle.
///
/// Stores persist toggles as loose strings; `1`, `true`, `yes`, and `on`
/// count as set, anything else does not.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
