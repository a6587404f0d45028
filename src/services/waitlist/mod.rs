//! Waitlist signup: email validation, the HTTP submission and the form's
//! state machine.
//!
//! The HTTP call sits behind [`WaitlistTransport`] so the form logic can be
//! driven without a network.

use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;

use crate::models::settings::WaitlistSettings;

pub const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email.";
pub const RETRY_MESSAGE: &str = "Something went wrong — try again.";

#[derive(Debug, Error)]
pub enum WaitlistError {
    #[error("invalid email address")]
    InvalidEmail,
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("signup rejected with HTTP status {0}")]
    Status(StatusCode),
    #[error("signup request was interrupted")]
    Interrupted,
    #[error("signup service is unavailable")]
    Unavailable,
}

impl WaitlistError {
    /// Message shown under the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            WaitlistError::InvalidEmail => INVALID_EMAIL_MESSAGE,
            WaitlistError::Network(_)
            | WaitlistError::Status(_)
            | WaitlistError::Interrupted
            | WaitlistError::Unavailable => RETRY_MESSAGE,
        }
    }
}

/// `local@domain.tld` shape check: no whitespace, exactly one `@`, and a dot
/// in the domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Form-encoded request body for the mailing-list endpoint.
pub fn form_body(email: &str) -> String {
    format!("email={}&mailingLists=&userGroup=", urlencoding::encode(email))
}

#[cfg_attr(test, mockall::automock)]
pub trait WaitlistTransport: Send + Sync {
    fn submit(&self, email: &str) -> Result<(), WaitlistError>;
}

/// Posts signups to the hosted newsletter form.
pub struct LoopsClient {
    client: Client,
    form_url: String,
}

impl LoopsClient {
    pub fn new(settings: &WaitlistSettings) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build waitlist HTTP client")?;

        Ok(Self {
            client,
            form_url: settings.form_url(),
        })
    }
}

impl WaitlistTransport for LoopsClient {
    fn submit(&self, email: &str) -> Result<(), WaitlistError> {
        let response = self
            .client
            .post(&self.form_url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(form_body(email))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(WaitlistError::Status(status));
        }
        Ok(())
    }
}

/// Stand-in used when the HTTP client could not be built. Every attempt fails
/// with the retry message; the rest of the page keeps working.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableTransport;

impl WaitlistTransport for UnavailableTransport {
    fn submit(&self, _email: &str) -> Result<(), WaitlistError> {
        Err(WaitlistError::Unavailable)
    }
}

/// The transport for the page: the built client, or [`UnavailableTransport`]
/// after logging why the client is missing.
pub fn transport_or_unavailable(
    client: anyhow::Result<LoopsClient>,
) -> std::sync::Arc<dyn WaitlistTransport> {
    match client {
        Ok(client) => std::sync::Arc::new(client),
        Err(err) => {
            log::error!("Waitlist signups disabled: {:#}", err);
            std::sync::Arc::new(UnavailableTransport)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WaitlistStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

/// State behind the signup form.
#[derive(Debug, Clone, Default)]
pub struct WaitlistForm {
    email: String,
    status: WaitlistStatus,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn email_mut(&mut self) -> &mut String {
        &mut self.email
    }

    pub fn status(&self) -> &WaitlistStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == WaitlistStatus::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            WaitlistStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Call after the email text changed. Editing dismisses a previous error.
    pub fn on_email_edited(&mut self) {
        if matches!(self.status, WaitlistStatus::Error(_)) {
            self.status = WaitlistStatus::Idle;
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.on_email_edited();
    }

    /// Validate and move to `Loading`.
    ///
    /// Returns the trimmed address to submit, or `None` when the attempt ends
    /// here (invalid input, a request already in flight, or already signed up).
    pub fn begin_submit(&mut self) -> Option<String> {
        if matches!(self.status, WaitlistStatus::Loading | WaitlistStatus::Success) {
            return None;
        }

        let email = self.email.trim().to_string();
        if !is_valid_email(&email) {
            self.status = WaitlistStatus::Error(WaitlistError::InvalidEmail.user_message().to_string());
            return None;
        }

        self.status = WaitlistStatus::Loading;
        log::info!(target: "analytics", "waitlist_form_submitted");
        Some(email)
    }

    /// Record the outcome of the request started by [`Self::begin_submit`].
    pub fn finish(&mut self, result: Result<(), WaitlistError>) {
        match result {
            Ok(()) => {
                self.status = WaitlistStatus::Success;
                log::info!(target: "analytics", "waitlist_signup_success");
            }
            Err(err) => {
                log::warn!("Waitlist signup failed: {}", err);
                log::info!(target: "analytics", "waitlist_signup_error");
                self.status = WaitlistStatus::Error(err.user_message().to_string());
            }
        }
    }

    /// Run a whole attempt synchronously against `transport`.
    pub fn submit_with(&mut self, transport: &dyn WaitlistTransport) {
        if let Some(email) = self.begin_submit() {
            let result = transport.submit(&email);
            self.finish(result);
        }
    }
}
