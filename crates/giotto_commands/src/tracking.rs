//! The track/untrack subscription orchestrators.

use crate::response::should_respond;
use crate::{
    Artifact, CommandResponse, MessageContext, TrackingAction, apply_tracking, resolve_channels,
};
use giotto_core::{ChannelDirectory, TrackableVocabulary, find_channel_token};
use giotto_settings::{DEFAULT_PREFIX, PREFIX_SETTING, SettingsStore};
use tracing::{debug, info, instrument};

/// Orchestrates a single track or untrack directive.
///
/// The directive has no positional grammar; the whole fragment is scanned
/// for trackable tokens and for a channel reference. When nothing at all is
/// recognized, the dedicated instruction artifact is re-emitted (carrying
/// the guild's configured prefix) and the run fails. Otherwise the
/// per-channel subscription sets are updated and the run succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingCommand {
    action: TrackingAction,
}

impl TrackingCommand {
    /// The `track` command.
    pub const fn track() -> Self {
        Self {
            action: TrackingAction::Track,
        }
    }

    /// The `untrack` command.
    pub const fn untrack() -> Self {
        Self {
            action: TrackingAction::Untrack,
        }
    }

    /// The tracking action this orchestrator applies.
    pub const fn action(&self) -> TrackingAction {
        self.action
    }

    /// Run the directive against the store.
    #[instrument(
        skip_all,
        fields(action = %self.action, guild = %ctx.guild(), channel = %ctx.channel())
    )]
    pub async fn run(
        &self,
        ctx: &MessageContext,
        vocabulary: &TrackableVocabulary,
        channel_directory: &dyn ChannelDirectory,
        store: &dyn SettingsStore,
    ) -> CommandResponse {
        let selection = vocabulary.scan(ctx.content());
        if selection.is_empty() {
            debug!("No trackables recognized");
            return CommandResponse::failure(Artifact::TrackInstructions {
                prefix: self.prefix(ctx, store).await,
            });
        }

        let token = find_channel_token(ctx.content());
        let channels = resolve_channels(ctx, token.as_deref(), channel_directory);
        let outcome = apply_tracking(store, &channels, &selection, self.action).await;
        info!(
            attempted = outcome.attempted(),
            failed = outcome.failed(),
            events = selection.events().len(),
            items = selection.items().len(),
            "Applied tracking batch"
        );

        let artifact = should_respond(ctx, store)
            .await
            .then(|| Artifact::TrackingApplied {
                action: self.action,
                selection,
                channels,
            });
        CommandResponse::success(artifact)
    }

    /// The guild's configured prefix, for the instruction artifact.
    async fn prefix(&self, ctx: &MessageContext, store: &dyn SettingsStore) -> String {
        match store.get_guild_setting(*ctx.guild(), PREFIX_SETTING).await {
            Ok(Some(prefix)) => prefix,
            Ok(None) => DEFAULT_PREFIX.to_string(),
            Err(e) => {
                debug!(error = %e, "Could not read guild prefix");
                DEFAULT_PREFIX.to_string()
            }
        }
    }
}
