//! Outbound mail for the form relay.
//!
//! [`Mailer`] is the seam between the relay logic and the mail facility, so
//! relay tests run against an in-memory mailer. [`SmtpMailer`] is the real
//! implementation: a blocking `lettre` SMTP transport built from
//! [`RelayConfig`]. One message per process means no pooling.

use crate::config::{RelayConfig, TlsMode};
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    /// SMTP transport-level failure (connection, authentication, rejection).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Email build error: {0}")]
    Build(#[from] lettre::error::Error),
}

/// Sends a plain-text message to a single recipient.
pub trait Mailer {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError>;
}

pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &RelayConfig) -> Result<Self, MailError> {
        let mut builder = match config.tls {
            TlsMode::None => SmtpTransport::builder_dangerous(&config.host),
            TlsMode::Starttls => SmtpTransport::starttls_relay(&config.host)?,
            TlsMode::Wrapper => SmtpTransport::relay(&config.host)?,
        }
        .port(config.port)
        .timeout(Some(Duration::from_secs(config.timeout_secs)));

        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            // App passwords are often pasted with spaces in them
            let clean_pass: String = pass.chars().filter(|c| !c.is_whitespace()).collect();
            builder = builder.credentials(Credentials::new(user.clone(), clean_pass));
        }

        Ok(Self {
            transport: builder.build(),
            from: config.from.parse()?,
        })
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        self.transport.send(&email)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailer_builds_from_default_config() {
        assert!(SmtpMailer::new(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn invalid_from_address_is_rejected() {
        let config = RelayConfig {
            from: "website".into(),
            ..RelayConfig::default()
        };
        assert!(matches!(
            SmtpMailer::new(&config),
            Err(MailError::Address(_))
        ));
    }

    #[test]
    fn address_error_display() {
        let addr_err: Result<lettre::Address, _> = "not-an-email".parse();
        let err = MailError::Address(addr_err.unwrap_err());
        assert!(err.to_string().contains("Email address parse error"));
    }
}
