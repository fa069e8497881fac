use thiserror::Error;

/// Client-side classification of every way a backend call can fail.
///
/// `AuthRequired` is intercepted centrally and turned into a login
/// redirect; the other kinds propagate to the calling UI action and
/// surface as a toast.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    #[error("request could not be sent: {0}")]
    Network(String),
    #[error("login required")]
    AuthRequired,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("failed to parse response: {0}")]
    Parse(String),
    #[error("request failed with status {status}: {message}")]
    Failed { status: u16, message: String },
}

impl ApiError {
    /// Map a non-2xx status and its server-supplied message to an error
    /// kind.
    pub fn classify(status: u16, message: String) -> Self {
        match status {
            400 => ApiError::BadRequest(message),
            401 => ApiError::AuthRequired,
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            status => ApiError::Failed { status, message },
        }
    }

    pub fn is_auth_required(&self) -> bool {
        matches!(self, ApiError::AuthRequired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_auth_statuses() {
        assert_eq!(
            ApiError::classify(401, "expired".to_string()),
            ApiError::AuthRequired
        );
        assert_eq!(
            ApiError::classify(403, "not an operator".to_string()),
            ApiError::Forbidden("not an operator".to_string())
        );
    }

    #[test]
    fn not_found_is_distinct_from_generic_failure() {
        let not_found = ApiError::classify(404, "no such file".to_string());
        let generic = ApiError::classify(500, "boom".to_string());

        assert_eq!(not_found, ApiError::NotFound("no such file".to_string()));
        assert_eq!(
            generic,
            ApiError::Failed {
                status: 500,
                message: "boom".to_string()
            }
        );
        assert_ne!(not_found, generic);
    }

    #[test]
    fn bad_request_carries_server_message() {
        assert_eq!(
            ApiError::classify(400, "unknown command".to_string()),
            ApiError::BadRequest("unknown command".to_string())
        );
    }

    #[test]
    fn forbidden_message_displays_verbatim() {
        let error = ApiError::Forbidden("you are not an operator".to_string());
        assert_eq!(error.to_string(), "you are not an operator");
    }
}
