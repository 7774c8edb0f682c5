//! Error taxonomy for remote-service access and local checks.
//!
//! Every failure a store operation can hit converts to a user-displayable
//! message string stored on the collection's error slot; none are fatal to
//! the application.

use thiserror::Error;

/// Errors that can occur when interacting with the remote record service,
/// plus the two purely local failure modes (client-side not-found and the
/// owner check performed before any mutating request is issued).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure - no usable response received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server-reported failure - non-2xx status, optionally with a message
    /// taken from the response body.
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message from the response body, or a generic per-operation one.
        message: String,
    },

    /// Response body could not be parsed as the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A client-side lookup found no matching record.
    #[error("not found: {0}")]
    NotFound(String),

    /// Local owner check refused the action before any request was issued.
    #[error("forbidden: {0}")]
    Forbidden(String),
}

impl ApiError {
    /// Whether this is a server-reported authentication failure.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Server { status: 401, .. })
    }

    /// The message stored on a collection's error slot.
    ///
    /// Server-provided messages pass through; transport and parse failures
    /// collapse to generic wording rather than exposing internals.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Server { message, .. } | Self::Forbidden(message) => message.clone(),
            Self::NotFound(what) => format!("{what} was not found"),
            Self::Http(_) => "could not reach the recipe service".to_string(),
            Self::Parse(_) => "the recipe service returned an unexpected response".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound("recipe 5".to_string());
        assert_eq!(err.to_string(), "not found: recipe 5");

        let err = ApiError::Server {
            status: 500,
            message: "failed to load recipes".to_string(),
        };
        assert_eq!(err.to_string(), "server error (500): failed to load recipes");
    }

    #[test]
    fn test_is_unauthorized() {
        let err = ApiError::Server {
            status: 401,
            message: "invalid user name or password".to_string(),
        };
        assert!(err.is_unauthorized());

        let err = ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_user_message_passes_server_message_through() {
        let err = ApiError::Server {
            status: 500,
            message: "the oven is on fire".to_string(),
        };
        assert_eq!(err.user_message(), "the oven is on fire");

        let err = ApiError::NotFound("recipe 5".to_string());
        assert_eq!(err.user_message(), "recipe 5 was not found");
    }
}
