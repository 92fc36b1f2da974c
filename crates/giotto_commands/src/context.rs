//! Invocation context handed to the orchestrators.

use derive_builder::Builder;
use derive_getters::Getters;
use giotto_core::{ChannelId, GuildId, RoleId, UserId};

/// Everything an orchestrator needs to know about the invoking message.
///
/// `content` is the directive text with the invoking call word already
/// stripped by the dispatcher. The mention lists carry platform-native
/// mentions in message order; mentions are unambiguous and therefore take
/// precedence over textual IDs during resolution.
#[derive(Debug, Clone, Getters, Builder)]
#[builder(setter(into))]
pub struct MessageContext {
    /// Directive text, call word stripped
    content: String,
    /// Guild the message was sent in
    guild: GuildId,
    /// Channel the message was sent in
    channel: ChannelId,
    /// Platform-native channel mentions
    #[builder(default)]
    channel_mentions: Vec<ChannelId>,
    /// Platform-native role mentions
    #[builder(default)]
    role_mentions: Vec<RoleId>,
    /// Platform-native user mentions
    #[builder(default)]
    user_mentions: Vec<UserId>,
}
