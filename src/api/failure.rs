//! Classification of failed API responses

use std::fmt;

use crate::error::FolioError;

/// A failed API request, classified by HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFailure {
    /// No response at all (connection refused, DNS, timeout)
    Network,
    /// 401: the session is gone and the caller must send the user to login
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 429
    RateLimited,
    /// Any other 4xx
    Client(u16),
    /// 5xx
    Server(u16),
}

impl ApiFailure {
    /// Classify an HTTP status. Status 0 stands for "no response".
    ///
    /// Returns `None` for statuses that are not failures.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            0 => Some(Self::Network),
            401 => Some(Self::Unauthorized),
            403 => Some(Self::Forbidden),
            404 => Some(Self::NotFound),
            429 => Some(Self::RateLimited),
            400..=499 => Some(Self::Client(status)),
            500..=599 => Some(Self::Server(status)),
            _ => None,
        }
    }

    /// Only server-side failures are retried
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Server(_))
    }

    /// Whether the caller should drop the session and redirect to login
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Message suitable for showing to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network => "Unable to reach the server. Check your connection and try again.",
            Self::Unauthorized => "Your session has expired. Please sign in again.",
            Self::Forbidden => "You do not have permission to view this data.",
            Self::NotFound => "The requested data could not be found.",
            Self::RateLimited => "Too many requests. Please wait a moment and try again.",
            Self::Client(_) => "The request could not be processed.",
            Self::Server(_) => "The server encountered an error. Please try again later.",
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}

impl From<ApiFailure> for FolioError {
    fn from(failure: ApiFailure) -> Self {
        FolioError::Api(failure.user_message().to_string())
    }
}
