//! The enable/disable permission orchestrators.

use crate::response::should_respond;
use crate::{
    Artifact, CommandResponse, MessageContext, PermissionAction, apply_permission,
    resolve_channels, resolve_target,
};
use giotto_core::{ChannelDirectory, CommandPattern, CommandRegistry, Directive, GuildDirectory};
use giotto_settings::SettingsStore;
use tracing::{debug, info, instrument};

/// Orchestrates a single enable or disable directive.
///
/// A run has three outcomes: nothing actionable parsed (failure plus a usage
/// artifact), a pattern that matched no gateable command (same), or at least
/// one match, in which case the mutation batch runs and the command succeeds
/// regardless of individual write failures. The confirmation artifact is
/// gated by the invoking channel's `respond_to_settings` toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionCommand {
    action: PermissionAction,
}

impl PermissionCommand {
    /// The `enable` command.
    pub const fn enable() -> Self {
        Self {
            action: PermissionAction::Enable,
        }
    }

    /// The `disable` command.
    pub const fn disable() -> Self {
        Self {
            action: PermissionAction::Disable,
        }
    }

    /// The permission action this orchestrator applies.
    pub const fn action(&self) -> PermissionAction {
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
        registry: &CommandRegistry,
        channel_directory: &dyn ChannelDirectory,
        guild_directory: &dyn GuildDirectory,
        store: &dyn SettingsStore,
    ) -> CommandResponse {
        let directive = Directive::parse(ctx.content());
        let Some(pattern) = directive
            .pattern()
            .as_deref()
            .and_then(CommandPattern::parse)
        else {
            debug!("No command pattern parsed");
            return CommandResponse::failure(Artifact::PermissionUsage {
                action: self.action,
            });
        };

        let commands = registry.matching_gateable(&pattern);
        if commands.is_empty() {
            debug!("Pattern matched no gateable commands");
            return CommandResponse::failure(Artifact::PermissionUsage {
                action: self.action,
            });
        }

        let channels = resolve_channels(ctx, directive.channel().as_deref(), channel_directory);
        let target = resolve_target(ctx, directive.target().as_deref(), guild_directory);
        let outcome = apply_permission(store, &commands, &channels, target, self.action).await;
        info!(
            attempted = outcome.attempted(),
            failed = outcome.failed(),
            target = %target,
            "Applied permission batch"
        );

        let artifact = should_respond(ctx, store)
            .await
            .then(|| Artifact::PermissionApplied {
                action: self.action,
                commands,
                channels,
                target,
            });
        CommandResponse::success(artifact)
    }
}
