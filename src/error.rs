use http::StatusCode;

/// Anything that may go wrong while talking to a device.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid device URL")]
    InvalidUrl(#[from] url::ParseError),

    /// The device is unreachable or refused to answer properly.
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// The response body is not JSON at all.
    #[error("failed to parse the response JSON")]
    Json(#[from] serde_json::Error),

    /// The response is JSON, but not the one we expect.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl Error {
    /// Whether the device could not be reached or answered with a non-2xx status.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{kind} `{host}`")]
pub struct ConnectionError {
    kind: ConnectionErrorKind,
    host: String,

    #[source]
    source: reqwest::Error,
}

impl ConnectionError {
    pub(crate) fn new(host: &str, source: reqwest::Error) -> Self {
        let kind = if source.is_timeout() {
            ConnectionErrorKind::Timeout
        } else if let Some(status) = source.status() {
            ConnectionErrorKind::Status(status)
        } else {
            ConnectionErrorKind::Transport
        };
        Self { kind, host: host.to_owned(), source }
    }

    #[must_use]
    pub const fn kind(&self) -> ConnectionErrorKind {
        self.kind
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self.kind, ConnectionErrorKind::Timeout)
    }

    /// Response status, if the device did answer.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self.kind {
            ConnectionErrorKind::Status(status) => Some(status),
            ConnectionErrorKind::Timeout | ConnectionErrorKind::Transport => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum ConnectionErrorKind {
    #[display("timeout occurred while connecting to")]
    Timeout,

    /// DNS, refused connection, broken protocol and alike.
    #[display("error occurred while communicating with")]
    Transport,

    #[display("HTTP {_0} from")]
    Status(StatusCode),
}

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("`{0}` is missing in the response")]
    MissingField(&'static str),

    #[error("unexpected response structure")]
    Invalid(#[source] serde_json::Error),
}
