//! Name derivation for project folders and gallery files.
//!
//! A project folder name is the single source for three things:
//!
//! - **Slug**: the output filename stem. Lowercased, whitespace runs become a
//!   single `-`. `My Project` → `my-project`.
//! - **Display name**: the page heading. Dashes become spaces, case is kept.
//!   `My Project` → `My Project`, `night-market` → `night market`.
//! - **Captions**: gallery images are captioned from their file stem, which may
//!   carry an optional `NN-` ordering prefix: `02-night-shot` → `night shot`.
//!
//! Slug and display name are inverses modulo case: turning a slug back into a
//! display name gives the lowercased display name.

/// URL-safe slug for a project folder name.
pub fn slugify(folder_name: &str) -> String {
    folder_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Heading text for a project folder name.
pub fn display_name(folder_name: &str) -> String {
    folder_name.replace('-', " ")
}

/// Result of splitting a file stem like `02-night-shot`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStem {
    /// Ordering prefix if present (`2` from `02-night-shot`).
    pub number: Option<u32>,
    /// Caption text: name part with dashes and underscores as spaces.
    /// Empty when the stem is number-only.
    pub caption: String,
}

/// Split a media file stem into its optional number prefix and caption.
///
/// - `"02-night-shot"` → number=Some(2), caption="night shot"
/// - `"IMG_0042"` → number=None, caption="IMG 0042"
/// - `"07"` / `"07-"` → number=Some(7), caption=""
pub fn parse_stem(stem: &str) -> ParsedStem {
    if let Some((prefix, rest)) = stem.split_once('-')
        && let Ok(num) = prefix.parse::<u32>()
    {
        return ParsedStem {
            number: Some(num),
            caption: to_caption(rest),
        };
    }
    if let Ok(num) = stem.parse::<u32>() {
        return ParsedStem {
            number: Some(num),
            caption: String::new(),
        };
    }
    ParsedStem {
        number: None,
        caption: to_caption(stem),
    }
}

fn to_caption(raw: &str) -> String {
    raw.replace(['-', '_'], " ").trim().to_string()
}

/// Caption for the gallery slot at 1-based `position`.
///
/// Falls back to `"<display name> <position>"` when the stem carries no text.
pub fn gallery_caption(file_name: &str, project_display: &str, position: usize) -> String {
    let stem = std::path::Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parsed = parse_stem(&stem);
    if parsed.caption.is_empty() {
        format!("{project_display} {position}")
    } else {
        parsed.caption
    }
}
