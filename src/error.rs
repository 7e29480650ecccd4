// src/error.rs
//! Typed failures for Notion API requests.
//!
//! Every failure a caller can see is one of a closed set of variants: a
//! transport timeout, an HTTP-level failure (structured or not), or the
//! original transport error passed through untouched when classification
//! declines. Callers branch on the variant, or on [`Error::code`] when they
//! want the stable machine-readable string.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable code carried by timed-out requests.
pub const REQUEST_TIMEOUT_CODE: &str = "notionhq_client_request_timeout";

/// Stable code carried by HTTP failures whose body is not a recognized
/// Notion error.
pub const RESPONSE_ERROR_CODE: &str = "notionhq_client_response_error";

/// Error codes the Notion API reports in structured error bodies.
///
/// Instead of matching against magic strings like `"rate_limited"`, the
/// API's error vocabulary is encoded in the type system. A code outside
/// this set means the response is not a recognized Notion error and is
/// classified generically instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    /// The token is invalid or expired
    Unauthorized,
    /// The token lacks permission for this resource
    RestrictedResource,
    /// The requested object does not exist or is inaccessible
    ObjectNotFound,
    /// API rate limit exceeded
    RateLimited,
    /// The request body is not valid JSON
    InvalidJson,
    /// The request URL is malformed
    InvalidRequestUrl,
    /// The request is unsupported for this endpoint
    InvalidRequest,
    /// Request parameters failed Notion's validation
    ValidationError,
    /// Conflict with the current state of the resource
    ConflictError,
    /// Notion internal server error
    InternalServerError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
}

impl ApiErrorCode {
    /// The wire spelling of this code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::RestrictedResource => "restricted_resource",
            Self::ObjectNotFound => "object_not_found",
            Self::RateLimited => "rate_limited",
            Self::InvalidJson => "invalid_json",
            Self::InvalidRequestUrl => "invalid_request_url",
            Self::InvalidRequest => "invalid_request",
            Self::ValidationError => "validation_error",
            Self::ConflictError => "conflict_error",
            Self::InternalServerError => "internal_server_error",
            Self::ServiceUnavailable => "service_unavailable",
        }
    }

    /// Whether this failure is transient and worth a caller-side retry.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::InternalServerError | Self::ServiceUnavailable
        )
    }

    /// Whether this failure means the resource simply doesn't exist.
    pub fn is_not_found(self) -> bool {
        matches!(self, Self::ObjectNotFound)
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for all client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The transport gave up waiting for the Notion API.
    #[error("Request to Notion API has timed out")]
    RequestTimeout,

    /// A non-2xx response whose body did not match the Notion error schema.
    /// The message is synthesized from the status code.
    #[error("{message}")]
    HttpResponse {
        status: StatusCode,
        headers: HeaderMap,
        message: String,
    },

    /// A non-2xx response carrying a structured Notion API error. The
    /// `code` enables programmatic branching; the message is the API's own.
    #[error("{message}")]
    ApiResponse {
        code: ApiErrorCode,
        message: String,
        status: StatusCode,
        headers: HeaderMap,
    },

    /// A transport failure this client declines to classify (DNS failure,
    /// connection reset, response decoding). Carried verbatim, never
    /// rewrapped in a message of our own.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Rejected at construction: the base URL must carry a scheme the
    /// transport can speak.
    #[error("base URL must begin with \"https://\" or \"http://\": {0}")]
    InvalidBaseUrl(String),

    /// A configured token or version string cannot form an HTTP header.
    #[error("invalid header value: {message}")]
    InvalidHeader { message: String },

    /// An endpoint method was called without a parameter its path needs.
    #[error("missing required path parameter: {name}")]
    MissingPathParameter { name: &'static str },
}

impl Error {
    /// Stable machine-readable code for normalized failures. `None` for
    /// passthrough transport errors and client-side construction errors.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::RequestTimeout => Some(REQUEST_TIMEOUT_CODE),
            Self::HttpResponse { .. } => Some(RESPONSE_ERROR_CODE),
            Self::ApiResponse { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// Whether this is a request timeout.
    pub fn is_timeout_error(&self) -> bool {
        matches!(self, Self::RequestTimeout)
    }

    /// Whether this is an HTTP-level failure of either kind. The
    /// structured API error counts as a refinement of the generic one.
    pub fn is_http_response_error(&self) -> bool {
        matches!(self, Self::HttpResponse { .. } | Self::ApiResponse { .. })
    }

    /// Whether this is a structured Notion API error.
    pub fn is_api_response_error(&self) -> bool {
        matches!(self, Self::ApiResponse { .. })
    }
}

/// Structured error body the Notion API returns on failures.
///
/// Deserializing doubles as the schema check: an unrecognized `code` or a
/// missing/non-string `message` fails the parse and the response falls back
/// to the generic classification. Extra fields are tolerated and dropped.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: ApiErrorCode,
    message: String,
}

/// Classifies a failure reported by the transport itself. Timeouts become
/// [`Error::RequestTimeout`] no matter which phase of the request timed
/// out; everything else is declined and passed through untouched.
pub(crate) fn normalize_transport_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        return Error::RequestTimeout;
    }
    Error::Transport(error)
}

/// Classifies a non-2xx response from its status, headers, and body text.
pub(crate) fn normalize_error_response(
    status: StatusCode,
    headers: HeaderMap,
    body: &str,
) -> Error {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        return Error::ApiResponse {
            code: parsed.code,
            message: parsed.message,
            status,
            headers,
        };
    }
    Error::HttpResponse {
        status,
        headers,
        message: format!(
            "Request to Notion API failed with status: {}",
            status.as_u16()
        ),
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
