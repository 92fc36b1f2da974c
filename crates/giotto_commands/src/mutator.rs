//! Batch application of permission and tracking mutations.
//!
//! Every mutation operates on deduplicated command and channel lists and is
//! issued as a set of independent concurrent store writes, awaited jointly.
//! One write's failure is caught and logged but never cancels the rest of
//! the batch and never fails the command: each (channel, command) grant is
//! an independently meaningful unit of configuration, so partial application
//! is accepted behavior.

use derive_getters::Getters;
use futures::future::join_all;
use giotto_core::{ChannelId, ResolvedTarget, TrackableSelection};
use giotto_error::SettingsResult;
use giotto_settings::SettingsStore;
use std::collections::HashSet;
use std::hash::Hash;
use tracing::{debug, error, instrument};

/// Whether a permission directive grants or revokes invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PermissionAction {
    /// Allow the target to invoke the matched commands
    Enable,
    /// Deny the target the matched commands
    Disable,
}

impl PermissionAction {
    /// The allow flag written to the store.
    pub const fn allow(&self) -> bool {
        matches!(self, Self::Enable)
    }
}

/// Whether a tracking directive subscribes or unsubscribes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TrackingAction {
    /// Add the trackables to the channel subscriptions
    Track,
    /// Remove the trackables from the channel subscriptions
    Untrack,
}

/// What happened to a mutation batch after all writes settled.
///
/// Individual failures are observability-only; the orchestrator reports
/// aggregate success whenever the batch was attempted at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, derive_new::new)]
pub struct BatchOutcome {
    /// Writes issued
    attempted: usize,
    /// Writes that failed and were absorbed
    failed: usize,
}

impl BatchOutcome {
    /// Writes that completed successfully.
    pub fn succeeded(&self) -> usize {
        self.attempted - self.failed
    }
}

/// Apply an enable/disable across commands × channels for one target.
#[instrument(skip_all, fields(action = %action, target = %target))]
pub async fn apply_permission(
    store: &dyn SettingsStore,
    commands: &[String],
    channels: &[ChannelId],
    target: ResolvedTarget,
    action: PermissionAction,
) -> BatchOutcome {
    let commands = dedup(commands);
    let channels = dedup(channels);
    let allow = action.allow();

    let mut keys = Vec::with_capacity(commands.len() * channels.len());
    let mut writes = Vec::with_capacity(keys.capacity());
    for command in &commands {
        for &channel in &channels {
            keys.push((command.as_str(), channel));
            writes.push(async move {
                match target {
                    ResolvedTarget::Role(role) => {
                        store
                            .set_channel_permission_for_role(channel, role, command, allow)
                            .await
                    }
                    ResolvedTarget::Member(user) => {
                        store
                            .set_channel_permission_for_member(channel, user, command, allow)
                            .await
                    }
                }
            });
        }
    }

    let results = join_all(writes).await;
    let mut failed = 0;
    for (index, result) in results.into_iter().enumerate() {
        if let Err(e) = result {
            let (command, channel) = keys[index];
            failed += 1;
            error!(command, channel = %channel, error = %e, "Permission write failed");
        }
    }

    debug!(attempted = keys.len(), failed, "Permission batch settled");
    BatchOutcome::new(keys.len(), failed)
}

/// Apply a track/untrack across the resolved channels.
///
/// The store takes the whole deduplicated event/item list in one call per
/// channel, so the batch size is per-channel, not per-trackable.
#[instrument(skip_all, fields(action = %action))]
pub async fn apply_tracking(
    store: &dyn SettingsStore,
    channels: &[ChannelId],
    selection: &TrackableSelection,
    action: TrackingAction,
) -> BatchOutcome {
    let channels = dedup(channels);
    let events = dedup(selection.events());
    let items = dedup(selection.items());

    let mut keys = Vec::new();
    let mut writes: Vec<_> = Vec::new();
    for &channel in &channels {
        if !events.is_empty() {
            keys.push(("event types", channel));
            writes.push(match action {
                TrackingAction::Track => store.track_event_types(channel, &events),
                TrackingAction::Untrack => store.untrack_event_types(channel, &events),
            });
        }
        if !items.is_empty() {
            keys.push(("items", channel));
            writes.push(match action {
                TrackingAction::Track => store.track_items(channel, &items),
                TrackingAction::Untrack => store.untrack_items(channel, &items),
            });
        }
    }

    let results: Vec<SettingsResult<()>> = join_all(writes).await;
    let mut failed = 0;
    for (index, result) in results.into_iter().enumerate() {
        if let Err(e) = result {
            let (kind, channel) = keys[index];
            failed += 1;
            error!(kind, channel = %channel, error = %e, "Tracking write failed");
        }
    }

    debug!(attempted = keys.len(), failed, "Tracking batch settled");
    BatchOutcome::new(keys.len(), failed)
}

fn dedup<T: Clone + Eq + Hash>(values: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    values
        .iter()
        .filter(|value| seen.insert((*value).clone()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_preserves_first_occurrence_order() {
        let values = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(dedup(&values), vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_permission_action_allow_flag() {
        assert!(PermissionAction::Enable.allow());
        assert!(!PermissionAction::Disable.allow());
    }

    #[test]
    fn test_action_display() {
        assert_eq!(PermissionAction::Enable.to_string(), "enable");
        assert_eq!(TrackingAction::Untrack.to_string(), "untrack");
    }

    #[test]
    fn test_batch_outcome_succeeded() {
        let outcome = BatchOutcome::new(4, 1);
        assert_eq!(outcome.succeeded(), 3);
    }
}
