//! Authentication — credentials, form state, signup/login outcomes.
//!
//! The backend keeps no session for the site: signup creates an account and
//! login only verifies it. Both endpoints answer with a small JSON body whose
//! `message`/`error` fields describe the result; [`AuthOutcome`] turns that
//! into a typed value so pages never match on raw strings.

pub mod client;

use serde::{Deserialize, Serialize};

// ============================================================================
// Form state
// ============================================================================

/// Transient email/password input of an auth form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub email: String,
    pub password: String,
}

/// Form fields, for targeted validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

/// Client-side check failures. Only what an HTML `required` / `type=email`
/// input would reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    Required(Field),
    InvalidEmail,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::Required(field) => write!(f, "Please fill out the {} field.", field.as_str()),
            FormError::InvalidEmail => write!(f, "Please enter an email address."),
        }
    }
}

impl std::error::Error for FormError {}

impl FormState {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Set one field by name, as a change handler would.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Email => self.email = value.into(),
            Field::Password => self.password = value.into(),
        }
    }

    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
    }

    pub fn validate(&self) -> Result<Credentials, FormError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::Required(Field::Email));
        }
        if !looks_like_email(email) {
            return Err(FormError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(FormError::Required(Field::Password));
        }
        Ok(Credentials {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !s.contains(' ')
        }
        None => false,
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Body of `POST /api/signup` and `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Reply body of both auth endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of an auth request that reached the server.
///
/// Transport failures are reported separately as `Err(SdkError)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthOutcome {
    /// 2xx. `message` is whatever the server said, if anything.
    Accepted { message: Option<String> },
    /// Non-2xx. `reason` is the server's `error` field, else its `message`.
    Rejected { status: u16, reason: Option<String> },
}

impl AuthOutcome {
    pub fn from_reply(status: u16, body: Option<AuthResponse>) -> Self {
        let body = body.unwrap_or_default();
        if (200..300).contains(&status) {
            AuthOutcome::Accepted {
                message: body.message.filter(|m| !m.is_empty()),
            }
        } else {
            let reason = body
                .error
                .filter(|e| !e.is_empty())
                .or(body.message.filter(|m| !m.is_empty()));
            AuthOutcome::Rejected { status, reason }
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, AuthOutcome::Accepted { .. })
    }
}
