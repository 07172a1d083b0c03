//! CGI entry point for the contact form relay.
//!
//! The web server supplies `REQUEST_METHOD` and `CONTENT_LENGTH` in the
//! environment and the form body on stdin. The response (headers, blank line,
//! plain-text message) goes to stdout; diagnostics go to stderr, which most
//! servers route to their error log.

use clap::Parser;
use project_pages::config;
use project_pages::mail::SmtpMailer;
use project_pages::relay::{self, Outcome, RelayError};
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "form-relay")]
#[command(about = "CGI handler that mails contact form submissions")]
#[command(version)]
struct Cli {
    /// SMTP config file [default: $FORM_RELAY_CONFIG or ./form-relay.toml]
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Read the request body, bounded by `CONTENT_LENGTH` when the server sets it.
fn read_body() -> io::Result<Vec<u8>> {
    let mut body = Vec::new();
    let stdin = io::stdin().lock();
    match std::env::var("CONTENT_LENGTH")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
    {
        Some(len) => stdin.take(len).read_to_end(&mut body)?,
        None => stdin.take(1 << 20).read_to_end(&mut body)?,
    };
    Ok(body)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let method = std::env::var("REQUEST_METHOD").unwrap_or_default();

    let body = if method.eq_ignore_ascii_case("POST") {
        read_body()?
    } else {
        Vec::new()
    };

    let config_path = cli.config.unwrap_or_else(config::relay_config_path);
    let outcome = relay::handle(&method, &body, || {
        let relay_config = config::load_relay_config(&config_path)?;
        SmtpMailer::new(&relay_config).map_err(RelayError::from)
    });

    if let Outcome::Failed(diagnostic) = &outcome {
        eprintln!("form-relay: delivery failed: {diagnostic}");
    }

    let mut stdout = io::stdout().lock();
    write!(
        stdout,
        "Content-Type: text/plain; charset=utf-8\r\n\r\n{}",
        outcome.message()
    )?;
    stdout.flush()?;
    Ok(())
}
