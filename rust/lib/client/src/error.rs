use thiserror::Error;

/// Client-side gateway error.
///
/// Only transport-level failures surface here; a well-formed response
/// with a non-zero business code resolves `Ok` and callers inspect the
/// envelope themselves.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Non-2xx HTTP status. `message` is the server's message when one
    /// was parsable, otherwise the canned text for the status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The request was sent but no usable response came back.
    #[error("network: {0}")]
    Network(reqwest::Error),

    /// The request could not be constructed.
    #[error("request setup: {0}")]
    Setup(String),

    /// The envelope parsed, but its payload did not match the declared
    /// output shape.
    #[error("decode: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Classify a reqwest failure into the transport taxonomy.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else if err.is_builder() {
            GatewayError::Setup(err.to_string())
        } else {
            GatewayError::Network(err)
        }
    }
}
