//! Contact form error types.

/// Errors that can occur when validating or submitting a contact message.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// A form field failed validation
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

    /// No access key configured for the form service
    #[error("contact form is not configured: set WEB3FORMS_ACCESS_KEY")]
    NotConfigured,

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Form service returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Form service accepted the request but reported failure
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

impl ContactError {
    /// Whether this error is the user's to fix (as opposed to ours or the
    /// form service's).
    pub fn is_user_error(&self) -> bool {
        matches!(self, ContactError::Invalid { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ContactError::Invalid {
            field: "email",
            reason: "must contain @",
        };
        assert_eq!(err.to_string(), "invalid email: must contain @");
        assert!(err.is_user_error());

        let err = ContactError::Api {
            status: 500,
            message: "oops".into(),
        };
        assert_eq!(err.to_string(), "API error 500: oops");
        assert!(!err.is_user_error());

        let err = ContactError::Rejected("Invalid access key".into());
        assert_eq!(err.to_string(), "submission rejected: Invalid access key");
    }
}
