//! Unified interface for the Giotto permission/subscription configuration
//! core.
//!
//! Giotto decides, per guild/channel/role/user, which commands a caller may
//! invoke and which event/item notifications a channel receives. The facade
//! re-exports the public API of the member crates:
//!
//! - `giotto_core` — identifiers, patterns, vocabulary, directive grammar
//! - `giotto_settings` — the settings store contract and in-memory store
//! - `giotto_commands` — the enable/disable/track/untrack orchestrators
//! - `giotto_error` — error types
//!
//! # Example
//!
//! ```no_run
//! use giotto::{
//!     ChannelId, GuildId, MemorySettings, MessageContextBuilder, PermissionCommand,
//! };
//!
//! # async fn run(
//! #     registry: giotto::CommandRegistry,
//! #     directory: impl giotto::ChannelDirectory + giotto::GuildDirectory,
//! # ) {
//! let store = MemorySettings::new();
//! let ctx = MessageContextBuilder::default()
//!     .content("moderation.* in here for *")
//!     .guild(GuildId::new(400000000000000001))
//!     .channel(ChannelId::new(100000000000000001))
//!     .build()
//!     .unwrap();
//! let response = PermissionCommand::enable()
//!     .run(&ctx, &registry, &directory, &directory, &store)
//!     .await;
//! # }
//! ```

pub use giotto_commands::*;
pub use giotto_core::*;
pub use giotto_error::*;
pub use giotto_settings::*;
