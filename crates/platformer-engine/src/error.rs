//! Error types for level loading. The simulation step itself never fails.

use thiserror::Error;

/// Why a single level descriptor line was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("expected at least 3 tokens, found {found}")]
    TooFewTokens { found: usize },

    #[error("unknown entity kind `{0}`")]
    UnknownKind(String),

    #[error("`{0}` is not an integer")]
    InvalidNumber(String),

    #[error("{kind} needs a width and a height")]
    MissingSize { kind: &'static str },

    #[error("{kind} size must be positive, got {width}x{height}")]
    NonPositiveSize {
        kind: &'static str,
        width: i32,
        height: i32,
    },
}

/// A rejected descriptor together with where it came from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {error} (data was: `{text}`)")]
pub struct LineError {
    /// 1-based line number.
    pub line: usize,
    pub text: String,
    #[source]
    pub error: DescriptorError,
}

/// Failure to obtain a level at all.
#[derive(Error, Debug)]
pub enum LevelError {
    #[error("level `{name}` is unavailable: {source}")]
    Unavailable {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for level loading.
pub type LevelResult<T> = Result<T, LevelError>;
