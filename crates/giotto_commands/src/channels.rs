//! Channel-set resolution.

use crate::MessageContext;
use giotto_core::{ChannelDirectory, ChannelId, ChannelToken};
use std::collections::HashSet;
use tracing::debug;

/// Resolve the channel set a directive applies to.
///
/// Platform-native channel mentions win over the textual token. `here` is
/// the invoking channel, `*` asks the directory for every channel in the
/// guild, and a numeric ID must exist in the guild or it drops out. An
/// empty result always falls back to the invoking channel, so resolution
/// never fails.
pub fn resolve_channels(
    ctx: &MessageContext,
    token: Option<&str>,
    directory: &dyn ChannelDirectory,
) -> Vec<ChannelId> {
    let resolved = if !ctx.channel_mentions().is_empty() {
        ctx.channel_mentions().clone()
    } else if let Some(token) = token {
        match ChannelToken::parse(token) {
            ChannelToken::Here => vec![*ctx.channel()],
            ChannelToken::AllChannels => directory.guild_channels(*ctx.guild()),
            ChannelToken::Id(id) => {
                if directory.channel_exists(*ctx.guild(), id) {
                    vec![id]
                } else {
                    Vec::new()
                }
            }
            ChannelToken::Unresolved => Vec::new(),
        }
    } else {
        Vec::new()
    };

    let mut seen = HashSet::new();
    let mut channels: Vec<ChannelId> = resolved
        .into_iter()
        .filter(|channel| seen.insert(*channel))
        .collect();
    if channels.is_empty() {
        channels.push(*ctx.channel());
    }
    debug!(count = channels.len(), "Resolved channel set");
    channels
}
