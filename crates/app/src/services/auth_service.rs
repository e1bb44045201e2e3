//! Auth service: login and registration use-cases.

use maintrack_domain::auth::{Credentials, Registration};
use maintrack_domain::error::MaintrackError;

use crate::ports::{AuthApi, Navigator, TokenStore};
use crate::services::session::Session;

/// Application service for signing in and creating accounts.
#[derive(Debug, Clone)]
pub struct AuthService<A, S, N> {
    api: A,
    session: Session<S, N>,
}

impl<A: AuthApi, S: TokenStore, N: Navigator> AuthService<A, S, N> {
    /// Create a new service backed by the given API and session.
    pub fn new(api: A, session: Session<S, N>) -> Self {
        Self { api, session }
    }

    /// Validate the credentials, sign in and store the issued token.
    ///
    /// # Errors
    ///
    /// Returns [`MaintrackError::Validation`] when a field is empty, or
    /// [`MaintrackError::Api`] when the backend rejects the credentials or
    /// cannot be reached. Nothing is stored on error.
    #[tracing::instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<(), MaintrackError> {
        credentials.validate()?;
        let token = self.api.login(credentials).await?;
        self.session.store_token(&token);
        tracing::info!("signed in");
        Ok(())
    }

    /// Validate the registration form and create the account.
    ///
    /// Does not sign in: the user is sent back to the login form instead.
    ///
    /// # Errors
    ///
    /// Returns [`MaintrackError::Validation`] for missing fields or a short
    /// password, or [`MaintrackError::Api`] when the backend refuses the
    /// registration or cannot be reached.
    #[tracing::instrument(skip(self, registration), fields(email = %registration.email))]
    pub async fn register(&self, registration: &Registration) -> Result<(), MaintrackError> {
        registration.validate()?;
        self.api.register(registration).await?;
        tracing::info!("account created");
        Ok(())
    }

    #[must_use]
    pub fn session(&self) -> &Session<S, N> {
        &self.session
    }
}
