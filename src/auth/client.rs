//! Auth sub-client — signup and login.

use crate::auth::{AuthOutcome, AuthResponse, Credentials};
use crate::client::VeritasClient;
use crate::error::SdkError;
use crate::http::HttpReply;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a VeritasClient,
}

impl<'a> Auth<'a> {
    /// Register a new account.
    ///
    /// Not idempotent: submitting twice sends two requests, and the second
    /// is rejected by the server as a duplicate email.
    pub async fn signup(&self, credentials: &Credentials) -> Result<AuthOutcome, SdkError> {
        let reply: HttpReply<AuthResponse> = self.client.http.signup(credentials).await?;
        let outcome = AuthOutcome::from_reply(reply.status, reply.body);
        tracing::debug!(status = reply.status, accepted = outcome.is_accepted(), "Signup reply");
        Ok(outcome)
    }

    /// Verify an email/password pair.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthOutcome, SdkError> {
        let reply: HttpReply<AuthResponse> = self.client.http.login(credentials).await?;
        let outcome = AuthOutcome::from_reply(reply.status, reply.body);
        tracing::debug!(status = reply.status, accepted = outcome.is_accepted(), "Login reply");
        Ok(outcome)
    }
}
