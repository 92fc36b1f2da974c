//! Tests for channel-set and target resolution.


use giotto_commands::{resolve_channels, resolve_target};
use giotto_core::{ResolvedTarget, RoleId, UserId};
use test_helpers::*;

#[test]
fn test_channel_mentions_win_over_token() {
    let directory = test_directory();
    let ctx = context_builder("ignored")
        .channel_mentions(vec![SECOND_CHANNEL])
        .build()
        .unwrap();

    let channels = resolve_channels(&ctx, Some("here"), &directory);

    assert_eq!(channels, vec![SECOND_CHANNEL]);
}

#[test]
fn test_here_resolves_to_current_channel() {
    let directory = test_directory();
    let ctx = context("ignored");

    assert_eq!(
        resolve_channels(&ctx, Some("here"), &directory),
        vec![CURRENT_CHANNEL]
    );
}

#[test]
fn test_wildcard_resolves_to_guild_channels() {
    let directory = test_directory();
    let ctx = context("ignored");

    assert_eq!(
        resolve_channels(&ctx, Some("*"), &directory),
        vec![CURRENT_CHANNEL, SECOND_CHANNEL]
    );
}

#[test]
fn test_no_token_defaults_to_current_channel() {
    let directory = test_directory();
    let ctx = context("ignored");

    assert_eq!(
        resolve_channels(&ctx, None, &directory),
        vec![CURRENT_CHANNEL]
    );
}

#[test]
fn test_unknown_id_defaults_to_current_channel() {
    let directory = test_directory();
    let ctx = context("ignored");

    assert_eq!(
        resolve_channels(&ctx, Some("111111111111111111"), &directory),
        vec![CURRENT_CHANNEL]
    );
}

#[test]
fn test_role_mention_wins_over_user_mention_and_token() {
    let directory = test_directory();
    let ctx = context_builder("ignored")
        .role_mentions(vec![MOD_ROLE])
        .user_mentions(vec![MEMBER])
        .build()
        .unwrap();

    let token = SHARED_ID.to_string();
    let target = resolve_target(&ctx, Some(token.as_str()), &directory);

    assert_eq!(target, ResolvedTarget::Role(MOD_ROLE));
}

#[test]
fn test_user_mention_wins_over_token() {
    let directory = test_directory();
    let ctx = context_builder("ignored")
        .user_mentions(vec![MEMBER])
        .build()
        .unwrap();

    let token = SHARED_ID.to_string();
    let target = resolve_target(&ctx, Some(token.as_str()), &directory);

    assert_eq!(target, ResolvedTarget::Member(MEMBER));
}

#[test]
fn test_bare_id_tries_role_before_user() {
    let directory = test_directory();
    let ctx = context("ignored");

    let token = SHARED_ID.to_string();
    let target = resolve_target(&ctx, Some(token.as_str()), &directory);

    assert_eq!(target, ResolvedTarget::Role(RoleId::new(SHARED_ID)));
}

#[test]
fn test_bare_id_falls_through_to_user() {
    let directory = test_directory();
    let ctx = context("ignored");

    let token = MEMBER.get().to_string();
    let target = resolve_target(&ctx, Some(token.as_str()), &directory);

    assert_eq!(target, ResolvedTarget::Member(MEMBER));
}

#[test]
fn test_user_sigil_skips_role_lookup() {
    let directory = test_directory();
    let ctx = context("ignored");

    let token = format!("<@{}>", SHARED_ID);
    let target = resolve_target(&ctx, Some(token.as_str()), &directory);

    assert_eq!(target, ResolvedTarget::Member(UserId::new(SHARED_ID)));
}

#[test]
fn test_wildcard_resolves_to_everyone() {
    let directory = test_directory();
    let ctx = context("ignored");

    assert_eq!(
        resolve_target(&ctx, Some("*"), &directory),
        ResolvedTarget::Role(EVERYONE)
    );
}

#[test]
fn test_missing_target_defaults_to_everyone() {
    let directory = test_directory();
    let ctx = context("ignored");

    assert_eq!(
        resolve_target(&ctx, None, &directory),
        ResolvedTarget::Role(EVERYONE)
    );
    assert_eq!(
        resolve_target(&ctx, Some("nonsense"), &directory),
        ResolvedTarget::Role(EVERYONE)
    );
}

#[test]
fn test_unknown_sigil_role_degrades_to_everyone() {
    let directory = test_directory();
    let ctx = context("ignored");

    let target = resolve_target(
        &ctx,
        Some("<@&111111111111111111>"),
        &directory,
    );

    assert_eq!(target, ResolvedTarget::Role(EVERYONE));
}
