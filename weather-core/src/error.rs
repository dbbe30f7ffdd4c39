use reqwest::StatusCode;
use thiserror::Error;

/// Classified failure of a single weather fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("bad request")]
    BadRequest,

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("server error {0}")]
    ServerError(u16),

    #[error("connection failed")]
    ConnectionFailed,

    #[error("request timed out")]
    TimedOut,

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("{0}")]
    Other(String),
}

impl FetchError {
    pub(crate) fn malformed() -> Self {
        FetchError::Other("malformed response".to_string())
    }

    /// Map a non-success HTTP status to its variant. Unknown codes fall into `Other`.
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            400 => FetchError::BadRequest,
            401 => FetchError::Unauthorized,
            403 => FetchError::Forbidden,
            404 => FetchError::NotFound,
            code @ (500 | 502 | 503 | 504) => FetchError::ServerError(code),
            _ => FetchError::Other(status.to_string()),
        }
    }

    /// Map a transport-level failure.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::TimedOut
        } else if err.is_connect() {
            FetchError::ConnectionFailed
        } else if err.is_redirect() {
            FetchError::TooManyRedirects
        } else {
            FetchError::Other(err.to_string())
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            FetchError::BadRequest => "Bad request:\nPlease check your input".to_string(),
            FetchError::Unauthorized => "Unauthorized:\nInvalid API key".to_string(),
            FetchError::Forbidden => "Forbidden:\nAccess is denied".to_string(),
            FetchError::NotFound => "Not found:\nCity not found".to_string(),
            FetchError::ServerError(500) => {
                "Internal Server Error:\nPlease try again later".to_string()
            }
            FetchError::ServerError(502) => {
                "Bad Gateway:\nInvalid response from the server".to_string()
            }
            FetchError::ServerError(503) => "Service Unavailable:\nServer is down".to_string(),
            FetchError::ServerError(504) => {
                "Gateway Timeout:\nNo response from the server".to_string()
            }
            FetchError::ServerError(code) => {
                format!("Server error {code}:\nPlease try again later")
            }
            FetchError::ConnectionFailed => {
                "Connection Error:\nCheck your internet connection".to_string()
            }
            FetchError::TimedOut => "Timeout Error:\nThe request timed out".to_string(),
            FetchError::TooManyRedirects => "Too many Redirects:\nCheck the URL".to_string(),
            FetchError::Other(msg) => format!("Request Error:\n{msg}"),
        }
    }
}

/// Everything that can stop a lookup from producing a reading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no city name given")]
    MissingInput,

    #[error("no API key available")]
    MissingCredential,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl LookupError {
    /// Fixed message shown on the render surface.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::MissingInput => "Please enter a city name.".to_string(),
            LookupError::MissingCredential => "API key is missing.".to_string(),
            LookupError::Fetch(err) => err.user_message(),
        }
    }
}
