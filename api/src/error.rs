use thiserror::Error;

/// Stable machine-readable error codes. Notices carry these as i18n
/// arguments, so they must never change once shipped.
pub mod error_code {
    pub const UNAUTHENTICATED: &str = "unauthenticated";
    pub const SERVER: &str = "server";
    pub const NETWORK: &str = "network";
    pub const DECODE: &str = "decode";
}

/// Client-side API error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No session: either no credentials were attached or the backend
    /// answered 401.
    #[error("not signed in")]
    Unauthenticated,

    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),
}

impl ApiError {
    /// Stable code for notices and logs.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthenticated => error_code::UNAUTHENTICATED,
            ApiError::Server { .. } => error_code::SERVER,
            ApiError::Network(_) => error_code::NETWORK,
            ApiError::Decode(_) => error_code::DECODE,
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated)
    }
}
