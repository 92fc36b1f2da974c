//! Error types for the Giotto command configuration core.
//!
//! Each domain gets a kind enum describing the specific failure condition and
//! an error struct that pairs the kind with the source location where it was
//! raised, captured via `#[track_caller]`.

mod settings;
mod vocabulary;

pub use settings::{SettingsError, SettingsErrorKind, SettingsResult};
pub use vocabulary::{VocabularyError, VocabularyErrorKind, VocabularyResult};
