//! CLI output formatting for generator runs.
//!
//! Output is information-first: each folder leads with its positional index
//! and display name, then `→` and the written file. Hero choice and gallery
//! fill are indented context lines.
//!
//! ```text
//! 001 Harbor Lights → projects/harbor-lights.html
//!     Hero: clip-hero.mp4 (video)
//!     Gallery: 4 of 4 slots
//! 002 Reel (skipped: no image files in selected/)
//! 003 scratch (skipped: no selected/ directory)
//!
//! Generated 1 page, skipped 2 folders
//! ```
//!
//! Warnings (an unknown `--hero` file) go to stderr:
//!
//! ```text
//! warning: hero image 'cover.jpg' not found in Harbor Lights, using 01-pier.jpg
//! ```
//!
//! `format_*` functions are pure and return lines; `print_*` wrappers do the I/O.

use crate::config::GALLERY_SLOTS;
use crate::generate::FolderReport;
use crate::scan::Hero;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Format the stdout lines for one folder.
pub fn format_folder_report(index: usize, report: &FolderReport) -> Vec<String> {
    match report {
        FolderReport::Generated {
            display_name,
            hero,
            gallery_count,
            path,
            ..
        } => {
            let hero_line = match hero {
                Hero::Video(file) => format!("    Hero: {file} (video)"),
                Hero::Image(file) => format!("    Hero: {file}"),
            };
            vec![
                format!(
                    "{} {} \u{2192} {}",
                    format_index(index),
                    display_name,
                    path.display()
                ),
                hero_line,
                format!("    Gallery: {} of {} slots", gallery_count, GALLERY_SLOTS),
            ]
        }
        FolderReport::Skipped { folder, reason } => {
            vec![format!(
                "{} {} (skipped: {})",
                format_index(index),
                folder,
                reason
            )]
        }
    }
}

/// Format the stderr warnings for one folder, if any.
pub fn format_folder_warnings(report: &FolderReport) -> Vec<String> {
    match report {
        FolderReport::Generated {
            folder,
            hero,
            missing_hero_override: Some(wanted),
            ..
        } => {
            // The fallback is the first image even when a hero video then wins.
            let fallback = match hero {
                Hero::Image(file) => file.as_str(),
                Hero::Video(_) => "the first image",
            };
            vec![format!(
                "warning: hero image '{wanted}' not found in {folder}, using {fallback}"
            )]
        }
        _ => Vec::new(),
    }
}

/// Format the closing summary line for a whole-directory run.
pub fn format_summary(reports: &[FolderReport]) -> String {
    let generated = reports
        .iter()
        .filter(|r| matches!(r, FolderReport::Generated { .. }))
        .count();
    let skipped = reports.len() - generated;
    format!(
        "Generated {}, skipped {}",
        plural(generated, "page", "pages"),
        plural(skipped, "folder", "folders")
    )
}

/// Print one folder's report: progress to stdout, warnings to stderr.
pub fn print_folder_report(index: usize, report: &FolderReport) {
    for line in format_folder_warnings(report) {
        eprintln!("{}", line);
    }
    for line in format_folder_report(index, report) {
        println!("{}", line);
    }
}

pub fn print_summary(reports: &[FolderReport]) {
    println!();
    println!("{}", format_summary(reports));
}
