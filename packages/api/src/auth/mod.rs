//! Login and logout against the persisted session.

use store::login::DEFAULT_LOGIN_ERROR;
use store::validation::validate_credentials;
use store::{Credentials, KeyValueStore, SessionStore, ValidationError};
use thiserror::Error;

use crate::{ApiClient, ApiError};

#[derive(Debug, Error)]
pub enum LoginError {
    /// A field was empty; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// Wrong credentials, or the backend could not be reached.
    #[error("{}", DEFAULT_LOGIN_ERROR)]
    Rejected(#[from] ApiError),
}

/// Validate, post the credentials, and persist the returned session.
///
/// The session is written only when none is active yet. Returns whether the
/// store was written.
pub async fn submit_login<S: KeyValueStore>(
    client: &ApiClient,
    sessions: &SessionStore<S>,
    credentials: &Credentials,
) -> Result<bool, LoginError> {
    validate_credentials(credentials)?;

    let session = client
        .login(credentials)
        .await
        .inspect_err(|e| tracing::warn!("Login rejected: {e}"))?;

    let stored = sessions.save_if_absent(&session);
    tracing::info!("Logged in as user {}", session.user_id);
    Ok(stored)
}

/// Log in, then return the page the browser should load next.
///
/// Nothing is returned on failure; the caller stays on the login page.
pub async fn login_redirect<S: KeyValueStore>(
    client: &ApiClient,
    sessions: &SessionStore<S>,
    credentials: &Credentials,
    gallery_href: &str,
) -> Result<String, LoginError> {
    submit_login(client, sessions, credentials).await?;
    Ok(gallery_href.to_string())
}

/// Forget the persisted session.
pub fn logout<S: KeyValueStore>(sessions: &SessionStore<S>) {
    sessions.clear();
    tracing::info!("Logged out");
}
