use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub(crate) enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request failed ({status}): {body}")]
    Http {
        status: u16,
        /// `message` field of the error body, when the server sent one.
        message: Option<String>,
        body: String,
    },

    #[error("unreadable response: {0}")]
    Parse(String),

    #[error("record has no identifier")]
    MissingId,
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub(crate) fn network(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }

    pub(crate) fn parse(e: impl std::fmt::Display) -> Self {
        Self::Parse(e.to_string())
    }

    /// Builds an HTTP error, lifting `message` out of a JSON error body.
    pub(crate) fn http(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .filter(|m| !m.trim().is_empty());
        Self::Http {
            status,
            message,
            body,
        }
    }

    pub(crate) fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// What the user sees: the server's message verbatim, else `fallback`.
    pub(crate) fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_lifts_server_message() {
        let e = ApiError::http(409, r#"{"message":"Course code already exists"}"#.into());
        assert_eq!(e.server_message(), Some("Course code already exists"));
        assert_eq!(
            e.user_message("Failed to save course"),
            "Course code already exists"
        );
    }

    #[test]
    fn http_error_without_message_uses_fallback() {
        let e = ApiError::http(500, "Internal Server Error".into());
        assert_eq!(e.server_message(), None);
        assert_eq!(e.user_message("Failed to save course"), "Failed to save course");

        let blank = ApiError::http(400, r#"{"message":"  "}"#.into());
        assert_eq!(blank.server_message(), None);
    }

    #[test]
    fn transport_errors_never_leak_to_user() {
        let e = ApiError::Network("connection refused".into());
        assert_eq!(e.user_message("Failed to delete university"), "Failed to delete university");
        assert!(e.to_string().contains("connection refused"));
    }
}
