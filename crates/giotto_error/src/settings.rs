//! Settings store error types.

/// Specific error conditions for settings store operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SettingsErrorKind {
    /// The storage backend rejected the operation
    Backend(String),
    /// A stored value could not be interpreted
    InvalidValue {
        /// Setting key
        key: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl std::fmt::Display for SettingsErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsErrorKind::Backend(msg) => write!(f, "Settings backend failure: {}", msg),
            SettingsErrorKind::InvalidValue { key, reason } => {
                write!(f, "Invalid value for setting '{}': {}", key, reason)
            }
        }
    }
}

/// Error type for settings store operations.
///
/// # Examples
///
/// ```
/// use giotto_error::{SettingsError, SettingsErrorKind};
///
/// let err = SettingsError::new(SettingsErrorKind::Backend("connection reset".to_string()));
/// assert!(format!("{}", err).contains("connection reset"));
/// ```
#[derive(Debug, Clone)]
pub struct SettingsError {
    /// The specific error condition
    pub kind: SettingsErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SettingsError {
    /// Create a new SettingsError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SettingsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Settings Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for SettingsError {}

/// Result type for settings store operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
