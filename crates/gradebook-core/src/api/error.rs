use std::fmt;

/// Category of a failed API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The backend answered with a non-2xx status.
    HttpStatus,
    /// The request never produced a response (connection refused, DNS, ...).
    Transport,
    /// The response body was not the expected JSON.
    Parse,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::HttpStatus => write!(f, "http_status"),
            ApiErrorKind::Transport => write!(f, "transport"),
            ApiErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Uniform failure signal for every backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// Status code for `HttpStatus` errors.
    pub status: Option<u16>,
    /// One-line summary suitable for a notice.
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            message: message.into(),
        }
    }

    pub fn http_status(status: u16) -> Self {
        Self {
            kind: ApiErrorKind::HttpStatus,
            status: Some(status),
            message: format!("HTTP error! status: {status}"),
        }
    }

    pub fn transport(err: &reqwest::Error) -> Self {
        Self::new(ApiErrorKind::Transport, format!("Request failed: {err}"))
    }

    pub fn parse(err: impl fmt::Display) -> Self {
        Self::new(ApiErrorKind::Parse, format!("Invalid response body: {err}"))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}
