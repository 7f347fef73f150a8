//! Errors raised while talking to the Career OS API

/// Error type for REST API calls
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            ApiError::Serialization(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_read_well() {
        let err = ApiError::Status {
            status: 401,
            message: "Invalid credentials".into(),
        };
        assert_eq!(err.to_string(), "API returned 401: Invalid credentials");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn serialization_has_no_status() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.status(), None);
        assert!(!err.is_unauthorized());
    }
}
