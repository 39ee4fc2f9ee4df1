//! Application error types
//!
//! Errors surfaced by the session operations and the campaign simulator
//! boundary. Fixture-backed flows (feed, messages, notifications, explore)
//! cannot fail by construction and carry no error type.

use thiserror::Error;

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Credentials were rejected.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Account registration was rejected.
    #[error("registration failed, please try again")]
    RegistrationFailed,
}

impl SessionError {
    /// User-facing banner text for this error.
    #[must_use]
    pub fn banner_text(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid email or password",
            Self::RegistrationFailed => "Registration failed. Please try again.",
        }
    }
}

/// Errors from the campaign simulation boundary.
///
/// Every variant collapses into the same generic banner in the UI; the
/// structured detail is only logged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The request never produced a response.
    #[error("transport failure: {reason}")]
    Transport {
        /// Underlying failure description
        reason: String,
    },

    /// The service answered with a non-success status.
    #[error("service returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The response body did not match the expected schema.
    #[error("malformed response: {reason}")]
    Schema {
        /// What the validation rejected
        reason: String,
    },
}

impl SimulationError {
    /// User-facing banner text, identical for every variant.
    #[must_use]
    pub fn banner_text(&self) -> &'static str {
        "Error simulating campaign. Check backend."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        assert_eq!(
            SessionError::InvalidCredentials.to_string(),
            "invalid email or password"
        );
        assert_eq!(
            SessionError::InvalidCredentials.banner_text(),
            "Invalid email or password"
        );
        assert_eq!(
            SessionError::RegistrationFailed.banner_text(),
            "Registration failed. Please try again."
        );
    }

    #[test]
    fn test_simulation_error_single_banner() {
        let errors = [
            SimulationError::Transport {
                reason: "connection refused".to_string(),
            },
            SimulationError::Status { status: 500 },
            SimulationError::Schema {
                reason: "missing preco_recomendado".to_string(),
            },
        ];
        for error in &errors {
            assert_eq!(error.banner_text(), "Error simulating campaign. Check backend.");
        }
    }

    #[test]
    fn test_simulation_error_detail_preserved() {
        let error = SimulationError::Status { status: 502 };
        assert_eq!(error.to_string(), "service returned status 502");
    }
}
