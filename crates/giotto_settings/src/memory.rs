//! In-memory implementation of the settings store.
//!
//! Stores everything in HashMaps protected by RwLocks for thread-safe
//! access. All data is lost when the store is dropped; useful for unit
//! tests and local runs.

use crate::SettingsStore;
use async_trait::async_trait;
use giotto_core::{ChannelId, GuildId, ResolvedTarget, RoleId, UserId};
use giotto_error::SettingsResult;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Natural key of a permission grant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GrantKey {
    channel: ChannelId,
    target: ResolvedTarget,
    command: String,
}

/// In-memory settings store.
///
/// Permission grants are keyed by channel × target × command, so re-applying
/// a grant overwrites rather than accumulates. Tracking subscriptions are
/// plain set membership per channel.
///
/// # Example
/// ```no_run
/// use giotto_settings::{MemorySettings, SettingsStore};
///
/// #[tokio::main]
/// async fn main() {
///     let store = MemorySettings::new();
///     // Use store.set_channel_permission_for_role(), track_items(), etc.
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    permissions: Arc<RwLock<HashMap<GrantKey, bool>>>,
    tracked_events: Arc<RwLock<HashMap<ChannelId, BTreeSet<String>>>>,
    tracked_items: Arc<RwLock<HashMap<ChannelId, BTreeSet<String>>>>,
    channel_settings: Arc<RwLock<HashMap<(ChannelId, String), String>>>,
    guild_settings: Arc<RwLock<HashMap<(GuildId, String), String>>>,
}

impl MemorySettings {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored permission grants (for testing).
    pub async fn grant_count(&self) -> usize {
        self.permissions.read().await.len()
    }

    /// Look up the stored allow flag for a role grant (for testing).
    pub async fn channel_permission_for_role(
        &self,
        channel: ChannelId,
        role: RoleId,
        command: &str,
    ) -> Option<bool> {
        self.permissions
            .read()
            .await
            .get(&GrantKey {
                channel,
                target: ResolvedTarget::Role(role),
                command: command.to_string(),
            })
            .copied()
    }

    /// Look up the stored allow flag for a member grant (for testing).
    pub async fn channel_permission_for_member(
        &self,
        channel: ChannelId,
        user: UserId,
        command: &str,
    ) -> Option<bool> {
        self.permissions
            .read()
            .await
            .get(&GrantKey {
                channel,
                target: ResolvedTarget::Member(user),
                command: command.to_string(),
            })
            .copied()
    }

    /// Event types a channel is subscribed to, in sorted order.
    pub async fn tracked_event_types(&self, channel: ChannelId) -> Vec<String> {
        self.tracked_events
            .read()
            .await
            .get(&channel)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Item types a channel is subscribed to, in sorted order.
    pub async fn tracked_item_types(&self, channel: ChannelId) -> Vec<String> {
        self.tracked_items
            .read()
            .await
            .get(&channel)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Write a per-channel setting.
    pub async fn set_channel_setting(&self, channel: ChannelId, key: &str, value: &str) {
        self.channel_settings
            .write()
            .await
            .insert((channel, key.to_string()), value.to_string());
    }

    /// Write a per-guild setting.
    pub async fn set_guild_setting(&self, guild: GuildId, key: &str, value: &str) {
        self.guild_settings
            .write()
            .await
            .insert((guild, key.to_string()), value.to_string());
    }

    /// Drop all stored state (for testing).
    pub async fn clear(&self) {
        self.permissions.write().await.clear();
        self.tracked_events.write().await.clear();
        self.tracked_items.write().await.clear();
        self.channel_settings.write().await.clear();
        self.guild_settings.write().await.clear();
    }

    async fn set_permission(&self, key: GrantKey, allow: bool) {
        debug!(channel = %key.channel, target = %key.target, command = %key.command, allow, "Storing grant");
        self.permissions.write().await.insert(key, allow);
    }
}

#[async_trait]
impl SettingsStore for MemorySettings {
    async fn set_channel_permission_for_role(
        &self,
        channel: ChannelId,
        role: RoleId,
        command: &str,
        allow: bool,
    ) -> SettingsResult<()> {
        self.set_permission(
            GrantKey {
                channel,
                target: ResolvedTarget::Role(role),
                command: command.to_string(),
            },
            allow,
        )
        .await;
        Ok(())
    }

    async fn set_channel_permission_for_member(
        &self,
        channel: ChannelId,
        user: UserId,
        command: &str,
        allow: bool,
    ) -> SettingsResult<()> {
        self.set_permission(
            GrantKey {
                channel,
                target: ResolvedTarget::Member(user),
                command: command.to_string(),
            },
            allow,
        )
        .await;
        Ok(())
    }

    async fn track_event_types(
        &self,
        channel: ChannelId,
        events: &[String],
    ) -> SettingsResult<()> {
        self.tracked_events
            .write()
            .await
            .entry(channel)
            .or_default()
            .extend(events.iter().cloned());
        Ok(())
    }

    async fn track_items(&self, channel: ChannelId, items: &[String]) -> SettingsResult<()> {
        self.tracked_items
            .write()
            .await
            .entry(channel)
            .or_default()
            .extend(items.iter().cloned());
        Ok(())
    }

    async fn untrack_event_types(
        &self,
        channel: ChannelId,
        events: &[String],
    ) -> SettingsResult<()> {
        if let Some(set) = self.tracked_events.write().await.get_mut(&channel) {
            for event in events {
                set.remove(event);
            }
        }
        Ok(())
    }

    async fn untrack_items(&self, channel: ChannelId, items: &[String]) -> SettingsResult<()> {
        if let Some(set) = self.tracked_items.write().await.get_mut(&channel) {
            for item in items {
                set.remove(item);
            }
        }
        Ok(())
    }

    async fn get_channel_setting(
        &self,
        channel: ChannelId,
        key: &str,
    ) -> SettingsResult<Option<String>> {
        Ok(self
            .channel_settings
            .read()
            .await
            .get(&(channel, key.to_string()))
            .cloned())
    }

    async fn get_guild_setting(
        &self,
        guild: GuildId,
        key: &str,
    ) -> SettingsResult<Option<String>> {
        Ok(self
            .guild_settings
            .read()
            .await
            .get(&(guild, key.to_string()))
            .cloned())
    }
}
