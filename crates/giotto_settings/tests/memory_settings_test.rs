//! Tests for the in-memory settings store.

use giotto_core::{ChannelId, GuildId, RoleId, UserId};
use giotto_settings::{MemorySettings, SettingsStore};

const CHANNEL: ChannelId = ChannelId::new(100000000000000001);
const OTHER_CHANNEL: ChannelId = ChannelId::new(100000000000000002);
const ROLE: RoleId = RoleId::new(200000000000000001);
const USER: UserId = UserId::new(300000000000000001);
const GUILD: GuildId = GuildId::new(400000000000000001);

#[tokio::test]
async fn test_role_permission_round_trip() {
    let store = MemorySettings::new();

    store
        .set_channel_permission_for_role(CHANNEL, ROLE, "settings.enable", true)
        .await
        .unwrap();

    assert_eq!(
        store
            .channel_permission_for_role(CHANNEL, ROLE, "settings.enable")
            .await,
        Some(true)
    );
    assert_eq!(
        store
            .channel_permission_for_role(OTHER_CHANNEL, ROLE, "settings.enable")
            .await,
        None
    );
}

#[tokio::test]
async fn test_member_permission_round_trip() {
    let store = MemorySettings::new();

    store
        .set_channel_permission_for_member(CHANNEL, USER, "moderation.kick", false)
        .await
        .unwrap();

    assert_eq!(
        store
            .channel_permission_for_member(CHANNEL, USER, "moderation.kick")
            .await,
        Some(false)
    );
}

#[tokio::test]
async fn test_reapplied_grant_does_not_accumulate() {
    let store = MemorySettings::new();

    store
        .set_channel_permission_for_role(CHANNEL, ROLE, "settings.enable", true)
        .await
        .unwrap();
    store
        .set_channel_permission_for_role(CHANNEL, ROLE, "settings.enable", true)
        .await
        .unwrap();

    assert_eq!(store.grant_count().await, 1);
}

#[tokio::test]
async fn test_last_write_wins() {
    let store = MemorySettings::new();

    store
        .set_channel_permission_for_role(CHANNEL, ROLE, "settings.enable", true)
        .await
        .unwrap();
    store
        .set_channel_permission_for_role(CHANNEL, ROLE, "settings.enable", false)
        .await
        .unwrap();

    assert_eq!(store.grant_count().await, 1);
    assert_eq!(
        store
            .channel_permission_for_role(CHANNEL, ROLE, "settings.enable")
            .await,
        Some(false)
    );
}

#[tokio::test]
async fn test_role_and_member_grants_are_distinct() {
    let store = MemorySettings::new();

    // Same raw ID on both sides of the role/user namespace overlap
    let role = RoleId::new(500000000000000001);
    let user = UserId::new(500000000000000001);
    store
        .set_channel_permission_for_role(CHANNEL, role, "settings.enable", true)
        .await
        .unwrap();
    store
        .set_channel_permission_for_member(CHANNEL, user, "settings.enable", false)
        .await
        .unwrap();

    assert_eq!(store.grant_count().await, 2);
}

#[tokio::test]
async fn test_track_and_untrack_events() {
    let store = MemorySettings::new();

    store
        .track_event_types(CHANNEL, &["alerts".to_string(), "sorties".to_string()])
        .await
        .unwrap();
    assert_eq!(
        store.tracked_event_types(CHANNEL).await,
        vec!["alerts", "sorties"]
    );

    store
        .untrack_event_types(CHANNEL, &["alerts".to_string()])
        .await
        .unwrap();
    assert_eq!(store.tracked_event_types(CHANNEL).await, vec!["sorties"]);
}

#[tokio::test]
async fn test_tracking_is_idempotent() {
    let store = MemorySettings::new();

    store
        .track_items(CHANNEL, &["nitain".to_string()])
        .await
        .unwrap();
    store
        .track_items(CHANNEL, &["nitain".to_string()])
        .await
        .unwrap();

    assert_eq!(store.tracked_item_types(CHANNEL).await, vec!["nitain"]);
}

#[tokio::test]
async fn test_untrack_absent_is_noop() {
    let store = MemorySettings::new();

    store
        .untrack_items(CHANNEL, &["nitain".to_string()])
        .await
        .unwrap();

    assert!(store.tracked_item_types(CHANNEL).await.is_empty());
}

#[tokio::test]
async fn test_tracking_is_scoped_per_channel() {
    let store = MemorySettings::new();

    store
        .track_event_types(CHANNEL, &["alerts".to_string()])
        .await
        .unwrap();

    assert!(store.tracked_event_types(OTHER_CHANNEL).await.is_empty());
}

#[tokio::test]
async fn test_channel_and_guild_settings() {
    let store = MemorySettings::new();

    store
        .set_channel_setting(CHANNEL, "respond_to_settings", "1")
        .await;
    store.set_guild_setting(GUILD, "prefix", "!").await;

    assert_eq!(
        store
            .get_channel_setting(CHANNEL, "respond_to_settings")
            .await
            .unwrap(),
        Some("1".to_string())
    );
    assert_eq!(
        store.get_guild_setting(GUILD, "prefix").await.unwrap(),
        Some("!".to_string())
    );
    assert_eq!(
        store.get_channel_setting(CHANNEL, "missing").await.unwrap(),
        None
    );
}

#[tokio::test]
async fn test_clear() {
    let store = MemorySettings::new();

    store
        .set_channel_permission_for_role(CHANNEL, ROLE, "settings.enable", true)
        .await
        .unwrap();
    store
        .track_event_types(CHANNEL, &["alerts".to_string()])
        .await
        .unwrap();

    store.clear().await;

    assert_eq!(store.grant_count().await, 0);
    assert!(store.tracked_event_types(CHANNEL).await.is_empty());
}
