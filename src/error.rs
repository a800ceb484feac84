use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed base64, PEM or UTF-8 input.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Key generation error: {0}")]
    KeyGeneration(String),

    #[error("Key export error: {0}")]
    Export(String),

    #[error("Key import error: {0}")]
    Import(String),

    #[error("Signing error: {0}")]
    Signing(String),

    /// Malformed verification input. A signature that simply does not match
    /// is reported as `Ok(false)`, never as this variant.
    #[error("Verification error: {0}")]
    Verification(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[cfg(feature = "async")]
    #[error("Operation cancelled: {0}")]
    Cancelled(String),
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::Decode(format!("invalid base64: {}", err))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Decode(format!("invalid UTF-8: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(feature = "async")]
impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Cancelled(err.to_string())
    }
}

/// Error codes for structured verification results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "MALFORMED_INPUT")]
    MalformedInput,
    #[serde(rename = "UNSUPPORTED_ALGORITHM")]
    UnsupportedAlgorithm,
    #[serde(rename = "SIGNATURE_INVALID")]
    SignatureInvalid,
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl ErrorCode {
    /// Classify a core error for display to the user.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::UnsupportedAlgorithm(_) => ErrorCode::UnsupportedAlgorithm,
            #[cfg(feature = "async")]
            Error::Cancelled(_) => ErrorCode::Cancelled,
            _ => ErrorCode::MalformedInput,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCode::MalformedInput => "MALFORMED_INPUT",
            ErrorCode::UnsupportedAlgorithm => "UNSUPPORTED_ALGORITHM",
            ErrorCode::SignatureInvalid => "SIGNATURE_INVALID",
            ErrorCode::Cancelled => "CANCELLED",
        };
        write!(f, "{}", s)
    }
}
