//! Contact form relay.
//!
//! Takes one form submission, checks the required fields, and forwards a
//! plain-text summary to a fixed inbox. The outcome is reported only as
//! response text; the HTTP status is always 200.
//!
//! ## Form Fields
//!
//! | Field | Required | Use |
//! |-------|----------|-----|
//! | `demo-name` | yes | trimmed, HTML-escaped |
//! | `demo-email` | yes | trimmed, HTML-escaped |
//! | `demo-category` | yes | trimmed, HTML-escaped |
//! | `demo-priority` | yes | trimmed, HTML-escaped |
//! | `demo-copy` | no | checkbox: `Yes` when present |
//! | `demo-human` | no | checkbox: `Yes` when present |
//! | `demo-message` | yes | trimmed, HTML-escaped |
//!
//! A field that is absent or only whitespace counts as missing. Nothing is
//! retried or stored: a failed delivery is reported and the message is gone.

use crate::config::ConfigError;
use crate::mail::{MailError, Mailer};
use maud::Render;
use serde::Deserialize;
use thiserror::Error;

pub const RECIPIENT: &str = "hello@example.com";
pub const SUBJECT: &str = "New contact form submission";

pub const MSG_SENT: &str = "Thank you! Your message has been sent.";
pub const MSG_MISSING_FIELDS: &str = "All fields are required.";
pub const MSG_INVALID_REQUEST: &str = "Invalid request.";
const MSG_FAILED_PREFIX: &str = "Sorry, your message could not be sent:";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Form decode error: {0}")]
    Form(#[from] serde_urlencoded::de::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Mail(#[from] MailError),
}

/// Raw form fields as posted.
#[derive(Debug, Default, Deserialize)]
pub struct FormFields {
    #[serde(rename = "demo-name")]
    pub name: Option<String>,
    #[serde(rename = "demo-email")]
    pub email: Option<String>,
    #[serde(rename = "demo-category")]
    pub category: Option<String>,
    #[serde(rename = "demo-priority")]
    pub priority: Option<String>,
    #[serde(rename = "demo-copy")]
    pub copy: Option<String>,
    #[serde(rename = "demo-human")]
    pub human: Option<String>,
    #[serde(rename = "demo-message")]
    pub message: Option<String>,
}

/// Decode an `application/x-www-form-urlencoded` body. Unknown fields are ignored.
pub fn parse_form(body: &[u8]) -> Result<FormFields, RelayError> {
    Ok(serde_urlencoded::from_bytes(body)?)
}

/// A validated submission, every text field trimmed and HTML-escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub category: String,
    pub priority: String,
    pub copy_requested: bool,
    pub human: bool,
    pub message: String,
}

impl Submission {
    /// Returns `None` when any required field is missing.
    pub fn from_fields(fields: &FormFields) -> Option<Self> {
        Some(Self {
            name: required(&fields.name)?,
            email: required(&fields.email)?,
            category: required(&fields.category)?,
            priority: required(&fields.priority)?,
            copy_requested: fields.copy.is_some(),
            human: fields.human.is_some(),
            message: required(&fields.message)?,
        })
    }

    /// Plain-text mail body listing every field.
    pub fn body(&self) -> String {
        format!(
            "Name: {}\n\
             Email: {}\n\
             Category: {}\n\
             Priority: {}\n\
             Send a copy: {}\n\
             Human: {}\n\
             \n\
             Message:\n\
             {}\n",
            self.name,
            self.email,
            self.category,
            self.priority,
            yes_no(self.copy_requested),
            yes_no(self.human),
            self.message
        )
    }
}

fn required(value: &Option<String>) -> Option<String> {
    let trimmed = value.as_deref()?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.render().into_string())
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// How a request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    InvalidRequest,
    MissingFields,
    Sent,
    /// Delivery failed; carries the mail facility's diagnostic.
    Failed(String),
}

impl Outcome {
    /// Response body text for this outcome.
    pub fn message(&self) -> String {
        match self {
            Outcome::InvalidRequest => MSG_INVALID_REQUEST.to_string(),
            Outcome::MissingFields => MSG_MISSING_FIELDS.to_string(),
            Outcome::Sent => MSG_SENT.to_string(),
            Outcome::Failed(diagnostic) => format!("{MSG_FAILED_PREFIX} {diagnostic}"),
        }
    }
}

/// Handle one request.
///
/// `connect` is only called once the submission is valid, so a broken mail
/// setup never masks a validation error.
pub fn handle<M: Mailer>(
    method: &str,
    body: &[u8],
    connect: impl FnOnce() -> Result<M, RelayError>,
) -> Outcome {
    if !method.eq_ignore_ascii_case("POST") {
        return Outcome::InvalidRequest;
    }
    let fields = match parse_form(body) {
        Ok(fields) => fields,
        Err(_) => return Outcome::InvalidRequest,
    };
    let Some(submission) = Submission::from_fields(&fields) else {
        return Outcome::MissingFields;
    };

    let delivery = connect().and_then(|mailer| {
        mailer
            .send(RECIPIENT, SUBJECT, &submission.body())
            .map_err(RelayError::from)
    });
    match delivery {
        Ok(()) => Outcome::Sent,
        Err(e) => Outcome::Failed(e.to_string()),
    }
}
