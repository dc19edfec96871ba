use tc_core::error::CoreError;

/// Errors from the client side of the API.
///
/// The variants keep transport failures, server rejections, expired
/// sessions and local validation apart so workflows can react to each.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an envelope whose `code` is not 200.
    #[error("{message}")]
    Rejected { code: i64, message: String },

    /// A 401 ended the session. Stored credentials are already cleared.
    #[error("Session expired, please log in again")]
    Unauthorized,

    /// The response body was not the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Geocoding failed: {0}")]
    Geocoding(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => ClientError::Validation(msg),
            other => ClientError::Validation(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
