use thiserror::Error;

/// Failure taxonomy at the transport boundary. Everything here is
/// recoverable: callers map each variant into a user-visible notice and the
/// session keeps running.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("login rejected by server")]
    InvalidCredentials,

    #[error("response carried no payload")]
    MissingPayload,
}
