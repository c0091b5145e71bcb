//! Errors raised while talking to the portfolio backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, or a body that could not be decoded.
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    /// The backend answered with an unexpected status.
    #[error("{reason}({status})")]
    Status { status: u16, reason: String },
}

impl ApiError {
    pub(crate) fn from_status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Banner text shown when an upload fails.
    pub fn upload_message(&self) -> String {
        format!("envoi des données : {self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_message() {
        let e = ApiError::from_status(reqwest::StatusCode::UNAUTHORIZED);
        assert_eq!(e.status(), Some(401));
        assert_eq!(e.upload_message(), "envoi des données : Unauthorized(401)");
    }
}
