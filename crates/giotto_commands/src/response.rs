//! Command outcomes and presentation artifacts.
//!
//! The core never renders anything. An orchestrator run ends in a
//! [`CommandResponse`]: a terminal status plus, optionally, the class of
//! artifact the presentation layer should emit and the data to hand it.

use crate::{MessageContext, PermissionAction, TrackingAction};
use derive_getters::Getters;
use giotto_core::{ChannelId, ResolvedTarget, TrackableSelection};
use giotto_settings::{RESPOND_TO_SETTINGS, SettingsStore, is_truthy};
use tracing::debug;

/// Terminal status of an orchestrated command run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandStatus {
    Success,
    Failure,
}

/// Presentation artifact class plus its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// Usage help for a permission directive that parsed nothing actionable
    PermissionUsage {
        /// Which directive was attempted
        action: PermissionAction,
    },
    /// Tracking instructions, re-emitted when no trackables were recognized
    TrackInstructions {
        /// The guild's configured command prefix
        prefix: String,
    },
    /// Confirmation of an applied permission change
    PermissionApplied {
        action: PermissionAction,
        commands: Vec<String>,
        channels: Vec<ChannelId>,
        target: ResolvedTarget,
    },
    /// Confirmation of an applied tracking change
    TrackingApplied {
        action: TrackingAction,
        selection: TrackableSelection,
        channels: Vec<ChannelId>,
    },
}

/// What an orchestrator decided.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct CommandResponse {
    /// Terminal status
    status: CommandStatus,
    /// Artifact to render, if any
    artifact: Option<Artifact>,
}

impl CommandResponse {
    /// A successful run, optionally carrying a confirmation artifact.
    pub fn success(artifact: Option<Artifact>) -> Self {
        Self::new(CommandStatus::Success, artifact)
    }

    /// A failed run with its help artifact.
    pub fn failure(artifact: Artifact) -> Self {
        Self::new(CommandStatus::Failure, Some(artifact))
    }
}

/// Whether the invoking channel opted into settings-change confirmations.
///
/// A store read failure counts as opted out; confirmations are best-effort.
pub(crate) async fn should_respond(ctx: &MessageContext, store: &dyn SettingsStore) -> bool {
    match store
        .get_channel_setting(*ctx.channel(), RESPOND_TO_SETTINGS)
        .await
    {
        Ok(Some(value)) => is_truthy(&value),
        Ok(None) => false,
        Err(e) => {
            debug!(error = %e, "Could not read respond_to_settings");
            false
        }
    }
}
