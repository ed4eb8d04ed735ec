use nimbus_core::transport::TransportError;

/// Client-stack error variants.
///
/// The split matters for test diagnostics: [`Transport`](Self::Transport)
/// means the wrong request was sent (or nothing was there to answer it),
/// while [`Decode`](Self::Decode) means the response came back but the
/// client mishandled its body.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("unexpected status {status} from {operation}")]
    UnexpectedStatus {
        operation: &'static str,
        status: http::StatusCode,
    },
    #[error("failed to encode {what} request body")]
    Encode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to decode {what} response body")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("transport failed")]
    Transport(#[from] TransportError),
}

impl ClientError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Auth(_) => "AUTH",
            Self::UnexpectedStatus { .. } => "UNEXPECTED_STATUS",
            Self::Encode { .. } => "ENCODE",
            Self::Decode { .. } => "DECODE",
            Self::Transport(_) => "TRANSPORT",
        }
    }
}
