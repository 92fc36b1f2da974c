//! Command orchestration for permission and tracking directives.
//!
//! This crate wires the pieces of a directive run together: extract
//! references and match patterns (`giotto_core`), resolve the channel set
//! and the target, then apply the mutation batch against the settings store
//! (`giotto_settings`). Four user-facing operations are exposed:
//!
//! - [`PermissionCommand::enable`] / [`PermissionCommand::disable`] — gate
//!   which roles or members may invoke commands, per channel
//! - [`TrackingCommand::track`] / [`TrackingCommand::untrack`] — toggle
//!   per-channel event/item subscriptions
//!
//! Each run is a single-shot parse → resolve → mutate pipeline; no state
//! persists between invocations.

mod channels;
mod context;
mod mutator;
mod permission;
mod response;
mod target;
mod tracking;

pub use channels::resolve_channels;
pub use context::{MessageContext, MessageContextBuilder, MessageContextBuilderError};
pub use mutator::{
    BatchOutcome, PermissionAction, TrackingAction, apply_permission, apply_tracking,
};
pub use permission::PermissionCommand;
pub use response::{Artifact, CommandResponse, CommandStatus};
pub use target::resolve_target;
pub use tracking::TrackingCommand;
