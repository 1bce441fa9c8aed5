//! Signup and login pages.
//!
//! Both pages keep their form locally and report the result as a single
//! status line. Transport failures and server rejections read differently,
//! and signup additionally schedules a redirect home.

use super::route::Route;
use crate::auth::{AuthOutcome, Field, FormError, FormState};
use crate::client::VeritasClient;
use crate::error::SdkError;

use serde::Serialize;
use std::time::Duration;

pub const SIGNUP_SUCCESS: &str = "✅ Signup successful! You may now log in.";
pub const SIGNUP_FAILED: &str = "❌ Signup failed.";
pub const SIGNUP_NETWORK_ERROR: &str = "❌ Network error or server not reachable.";
pub const LOGIN_SUCCESS: &str = "Login successful";
pub const LOGIN_FAILED: &str = "Login failed.";
pub const LOGIN_NETWORK_ERROR: &str = "Network error or server not reachable.";

/// Delay before the post-signup redirect.
pub const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// A navigation to perform once `after` has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub route: Route,
    pub after: Duration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthFormView {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub email: String,
    /// Masked; the view never carries the password itself.
    pub password_len: usize,
    /// Client-side validation message, if the last submit was blocked.
    pub form_error: Option<String>,
    /// Result of the last request.
    pub message: Option<String>,
}

// ─── Signup ──────────────────────────────────────────────────────────────────

pub struct SignupPage {
    client: VeritasClient,
    form: FormState,
    form_error: Option<FormError>,
    message: Option<String>,
}

impl SignupPage {
    pub fn new(client: &VeritasClient) -> Self {
        Self {
            client: client.clone(),
            form: FormState::default(),
            form_error: None,
            message: None,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Validate and send the form. On success returns the redirect the
    /// caller should schedule.
    pub async fn submit(&mut self) -> Option<Redirect> {
        let credentials = match self.form.validate() {
            Ok(c) => c,
            Err(e) => {
                self.form_error = Some(e);
                return None;
            }
        };
        self.form_error = None;

        match self.client.auth().signup(&credentials).await {
            Ok(AuthOutcome::Accepted { .. }) => {
                self.message = Some(SIGNUP_SUCCESS.to_string());
                self.form.clear();
                Some(Redirect {
                    route: Route::Home,
                    after: SIGNUP_REDIRECT_DELAY,
                })
            }
            Ok(AuthOutcome::Rejected { reason, .. }) => {
                self.message = Some(match reason {
                    Some(reason) => format!("❌ {}", reason),
                    None => SIGNUP_FAILED.to_string(),
                });
                None
            }
            Err(e) => {
                self.message = Some(network_error(e, SIGNUP_NETWORK_ERROR));
                None
            }
        }
    }

    pub fn view(&self) -> AuthFormView {
        form_view("Create Account", "Sign Up", &self.form, &self.form_error, &self.message)
    }
}

// ─── Login ───────────────────────────────────────────────────────────────────

pub struct LoginPage {
    client: VeritasClient,
    form: FormState,
    form_error: Option<FormError>,
    message: Option<String>,
}

impl LoginPage {
    pub fn new(client: &VeritasClient) -> Self {
        Self {
            client: client.clone(),
            form: FormState::default(),
            form_error: None,
            message: None,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Validate and send the form. Returns whether the server accepted it.
    pub async fn submit(&mut self) -> bool {
        let credentials = match self.form.validate() {
            Ok(c) => c,
            Err(e) => {
                self.form_error = Some(e);
                return false;
            }
        };
        self.form_error = None;

        match self.client.auth().login(&credentials).await {
            Ok(AuthOutcome::Accepted { message }) => {
                self.message = Some(message.unwrap_or_else(|| LOGIN_SUCCESS.to_string()));
                self.form.clear();
                true
            }
            Ok(AuthOutcome::Rejected { reason, .. }) => {
                self.message = Some(reason.unwrap_or_else(|| LOGIN_FAILED.to_string()));
                false
            }
            Err(e) => {
                self.message = Some(network_error(e, LOGIN_NETWORK_ERROR));
                false
            }
        }
    }

    pub fn view(&self) -> AuthFormView {
        form_view("Login", "Log In", &self.form, &self.form_error, &self.message)
    }
}

fn network_error(e: SdkError, text: &str) -> String {
    tracing::warn!("Auth request failed: {}", e);
    text.to_string()
}

fn form_view(
    heading: &'static str,
    submit_label: &'static str,
    form: &FormState,
    form_error: &Option<FormError>,
    message: &Option<String>,
) -> AuthFormView {
    AuthFormView {
        heading,
        submit_label,
        email: form.email.clone(),
        password_len: form.password.chars().count(),
        form_error: form_error.as_ref().map(|e| e.to_string()),
        message: message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> VeritasClient {
        VeritasClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap()
    }

    #[test]
    fn test_signup_blocked_by_validation() {
        let mut page = SignupPage::new(&client());
        page.set(Field::Email, "not-an-email");
        page.set(Field::Password, "pw");
        let redirect = tokio_test::block_on(page.submit());
        assert!(redirect.is_none());
        assert!(page.message().is_none());
        assert_eq!(
            page.view().form_error.as_deref(),
            Some("Please enter an email address.")
        );
    }

    #[test]
    fn test_login_blocked_by_missing_password() {
        let mut page = LoginPage::new(&client());
        page.set(Field::Email, "jo@example.com");
        assert!(!tokio_test::block_on(page.submit()));
        assert_eq!(
            page.view().form_error.as_deref(),
            Some("Please fill out the password field.")
        );
    }

    #[test]
    fn test_form_view_masks_password() {
        let mut page = LoginPage::new(&client());
        page.set(Field::Email, "jo@example.com");
        page.set(Field::Password, "hunter2");
        let view = page.view();
        assert_eq!(view.heading, "Login");
        assert_eq!(view.email, "jo@example.com");
        assert_eq!(view.password_len, 7);
    }
}
