//! Login form state machine: `Idle -> Submitting -> {Success, Failure}`.
//!
//! [`LoginFlow::begin`] gates the network call: it refuses while a request is
//! already in flight and short-circuits to `Failure` when a field is empty.

use crate::models::Credentials;
use crate::validation::validate_credentials;

/// Shown for any non-200 answer or transport failure.
pub const DEFAULT_LOGIN_ERROR: &str = "Erreur dans l’identifiant ou le mot de passe";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginFlow {
    phase: LoginPhase,
}

impl LoginFlow {
    pub fn phase(&self) -> &LoginPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    /// Message to display, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoginPhase::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Start a submission. Returns `true` when the request should be sent.
    pub fn begin(&mut self, credentials: &Credentials) -> bool {
        if self.is_submitting() {
            return false;
        }
        match validate_credentials(credentials) {
            Ok(()) => {
                self.phase = LoginPhase::Submitting;
                true
            }
            Err(e) => {
                self.phase = LoginPhase::Failure(e.to_string());
                false
            }
        }
    }

    pub fn succeed(&mut self) {
        self.phase = LoginPhase::Success;
    }

    pub fn fail(&mut self) {
        self.phase = LoginPhase::Failure(DEFAULT_LOGIN_ERROR.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_fails_without_submitting() {
        let mut flow = LoginFlow::default();
        assert!(!flow.begin(&Credentials::new("sophie.bluel@test.tld", "")));
        assert_eq!(flow.error(), Some("Email ou Mot de passe non rempli"));
        assert!(!flow.is_submitting());
    }

    #[test]
    fn test_happy_path() {
        let mut flow = LoginFlow::default();
        assert_eq!(flow.phase(), &LoginPhase::Idle);
        assert!(flow.begin(&Credentials::new("a@b.fr", "pw")));
        assert!(flow.is_submitting());
        flow.succeed();
        assert_eq!(flow.phase(), &LoginPhase::Success);
        assert!(flow.error().is_none());
    }

    #[test]
    fn test_second_submit_is_refused_while_in_flight() {
        let mut flow = LoginFlow::default();
        let credentials = Credentials::new("a@b.fr", "pw");
        assert!(flow.begin(&credentials));
        assert!(!flow.begin(&credentials));
        flow.fail();
        assert_eq!(flow.error(), Some(DEFAULT_LOGIN_ERROR));

        // The form stays usable after a failure
        assert!(flow.begin(&credentials));
    }
}
