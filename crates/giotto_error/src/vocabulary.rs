//! Trackable vocabulary error types.

/// Specific error conditions for vocabulary loading and validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VocabularyErrorKind {
    /// Failed to read the vocabulary file
    FileRead(String),
    /// Failed to parse JSON content
    JsonParse(String),
    /// A term appears in both the event and reward sets
    OverlappingTerm(String),
    /// A vocabulary term is empty or whitespace
    EmptyTerm,
}

impl std::fmt::Display for VocabularyErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VocabularyErrorKind::FileRead(msg) => {
                write!(f, "Failed to read vocabulary file: {}", msg)
            }
            VocabularyErrorKind::JsonParse(msg) => write!(f, "Failed to parse JSON: {}", msg),
            VocabularyErrorKind::OverlappingTerm(term) => write!(
                f,
                "Term '{}' appears in both the event and reward sets",
                term
            ),
            VocabularyErrorKind::EmptyTerm => {
                write!(f, "Vocabulary terms cannot be empty")
            }
        }
    }
}

/// Error type for vocabulary operations.
///
/// # Examples
///
/// ```
/// use giotto_error::{VocabularyError, VocabularyErrorKind};
///
/// let err = VocabularyError::new(VocabularyErrorKind::EmptyTerm);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone)]
pub struct VocabularyError {
    /// The specific error condition
    pub kind: VocabularyErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl VocabularyError {
    /// Create a new VocabularyError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: VocabularyErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vocabulary Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for VocabularyError {}

/// Result type for vocabulary operations.
pub type VocabularyResult<T> = Result<T, VocabularyError>;
