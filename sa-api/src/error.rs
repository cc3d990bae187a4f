use thiserror::Error;

/// Coarse classification of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a usable response: transport failure,
    /// timeout, or a non-success HTTP status.
    NetworkFailure,
    /// A body arrived but was not the expected array/object shape.
    MalformedResponse,
}

/// Error returned by every [`crate::ApiClient`] call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded with HTTP {status}")]
    Rejected {
        status: u16,
        /// The `message` field of the error body, when the server sent one.
        message: Option<String>,
    },

    #[error("malformed response: {0}")]
    Malformed(String),

    /// The body was empty, `null`, or another falsy JSON value where data
    /// was expected.
    #[error("response body was empty")]
    EmptyBody,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Network(_) | FetchError::Rejected { .. } => ErrorKind::NetworkFailure,
            FetchError::Malformed(_) | FetchError::EmptyBody => ErrorKind::MalformedResponse,
        }
    }

    /// The server-provided explanation, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            FetchError::Rejected {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Message for an error slot: the server's own text verbatim, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_and_network_are_network_failures() {
        assert_eq!(
            FetchError::Network("timeout".into()).kind(),
            ErrorKind::NetworkFailure
        );
        let rejected = FetchError::Rejected {
            status: 404,
            message: None,
        };
        assert_eq!(rejected.kind(), ErrorKind::NetworkFailure);
        assert_eq!(
            FetchError::Malformed("not an array".into()).kind(),
            ErrorKind::MalformedResponse
        );
        assert_eq!(FetchError::EmptyBody.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn user_message_prefers_server_text() {
        let err = FetchError::Rejected {
            status: 400,
            message: Some("Store not found".into()),
        };
        assert_eq!(err.user_message("fallback"), "Store not found");
    }

    #[test]
    fn user_message_falls_back() {
        let err = FetchError::Network("connection refused".into());
        assert_eq!(err.user_message("Try again later."), "Try again later.");

        let err = FetchError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Try again later."), "Try again later.");
    }
}
