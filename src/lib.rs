//! # Project Pages
//!
//! Two small tools for a static portfolio site:
//!
//! - **Page generator** (`project-pages`): turns each project folder of curated
//!   media into a static HTML page.
//! - **Form relay** (`form-relay`): a CGI handler that mails contact-form
//!   submissions to the studio inbox.
//!
//! The two share no data. Each is a straight pipeline: read input, validate,
//! derive, render, emit.
//!
//! # Page Generator
//!
//! ```text
//! images/<folder>/selected/*   →   projects/<slug>.html
//! ```
//!
//! The filesystem is the data source. A project folder's `selected/`
//! directory holds the media that make it onto the page; everything else in
//! the folder is ignored. Each run recomputes every page from scratch; there
//! is no manifest and no cache.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Finds project folders and picks hero and gallery media |
//! | [`media`] | Image/video classification by extension |
//! | [`naming`] | Slug, display name, and caption derivation |
//! | [`generate`] | Renders the fixed page template with Maud and writes it |
//! | [`output`] | CLI output formatting for generator runs |
//! | [`config`] | Generator constants and the relay's SMTP config file |
//! | [`relay`] | Form validation, mail body composition, response text |
//! | [`mail`] | `Mailer` seam and the SMTP implementation |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Files
//!
//! The page template is a compile-time [Maud](https://maud.lambda.xyz/)
//! macro. Malformed markup is a build error, interpolated names are escaped,
//! and there is no template directory to ship.
//!
//! ## Deterministic Listing Order
//!
//! Directory listings are sorted by name before use, so "the first image"
//! and "the first four images" mean the same thing on every platform.
//!
//! ## CGI Relay
//!
//! The relay handles exactly one request per process and leaves concurrency
//! to the web server. Its outcome is carried only in the plain-text body.

pub mod config;
pub mod generate;
pub mod mail;
pub mod media;
pub mod naming;
pub mod output;
pub mod relay;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
