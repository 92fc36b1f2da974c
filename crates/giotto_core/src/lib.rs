//! Core data types for the Giotto command configuration core.
//!
//! This crate provides the foundation types shared by the settings store and
//! the command orchestrators:
//!
//! - Snowflake identifier newtypes and free-text reference extraction
//! - The command pattern AST and the immutable command registry snapshot
//! - The trackable vocabulary with its ranged day/night family
//! - The permission directive grammar
//! - Synchronous channel/guild lookup contracts

mod directive;
mod directory;
mod pattern;
mod reference;
mod registry;
mod vocabulary;

pub use directive::{Directive, find_channel_token};
pub use directory::{ChannelDirectory, GuildDirectory};
pub use pattern::CommandPattern;
pub use reference::{
    ChannelId, ChannelToken, GuildId, MIN_SNOWFLAKE_DIGITS, ResolvedTarget, RoleId, TargetToken,
    UserId,
};
pub use registry::{CommandDescriptor, CommandRegistry};
pub use vocabulary::{TrackableSelection, TrackableVocabulary};
