use thiserror::Error;

/// Failure to read a string as a semantic version.
///
/// Every rejection collapses into one kind: a grammar mismatch, an empty
/// identifier and a numeric identifier with a leading zero all surface as
/// [`ParseError::InvalidVersionFormat`]. `reason` is for diagnostics only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid semantic version `{version}`: {reason}")]
    InvalidVersionFormat { version: String, reason: String },
}

impl ParseError {
    /// Create an invalid format error for `version`
    pub fn invalid(version: impl Into<String>, reason: impl Into<String>) -> Self {
        ParseError::InvalidVersionFormat {
            version: version.into(),
            reason: reason.into(),
        }
    }

    /// The rejected input, verbatim
    pub fn version(&self) -> &str {
        match self {
            ParseError::InvalidVersionFormat { version, .. } => version,
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            ParseError::InvalidVersionFormat { reason, .. } => reason,
        }
    }
}

/// Unified error type for the command-line front end
#[derive(Error, Debug)]
pub enum SemverError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    ConfigFormat(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semantic-versioning
pub type Result<T> = std::result::Result<T, SemverError>;

impl SemverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverError::Config(msg.into())
    }
}
