//! Project folder discovery and per-folder media selection.
//!
//! ## Directory Structure
//!
//! ```text
//! images/                          # Images root
//! ├── Harbor Lights/               # Project folder → harbor-lights.html
//! │   ├── raw/                     # Ignored
//! │   └── selected/                # Curated media, the only input
//! │       ├── 01-pier.jpg
//! │       ├── 02-night-shot.jpg
//! │       └── clip-hero.mp4        # Lead medium (name contains "hero")
//! ├── night-market/
//! │   └── selected/
//! │       └── stall.webp
//! └── scratch/                     # No selected/ → skipped
//! ```
//!
//! ## Selection Rules
//!
//! - Only recognized media in `selected/` count (see [`crate::media`]).
//! - A folder must have at least one image, even when a hero video exists:
//!   the image gate runs before the video search.
//! - The hero image is the `--hero` file when it is among the images, else
//!   the first image. A warning is recorded when the override is absent.
//! - A video named `*hero*` replaces the hero image as the lead medium.
//! - The gallery is the first [`GALLERY_SLOTS`] images in listing order.
//!
//! Listing order is filename order: entries are sorted after reading, and
//! hidden entries are ignored.

use crate::config::{GALLERY_SLOTS, SELECTED_DIR};
use crate::media;
use crate::naming;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Folder not found: {0}")]
    FolderNotFound(PathBuf),
}

/// Why a project folder produced no page. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    NoSelectedDir,
    NoMedia,
    NoImages,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Skip::NoSelectedDir => "no selected/ directory",
            Skip::NoMedia => "no media files in selected/",
            Skip::NoImages => "no image files in selected/",
        };
        f.write_str(reason)
    }
}

/// The page's lead visual medium.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hero {
    Image(String),
    Video(String),
}

impl Hero {
    pub fn file_name(&self) -> &str {
        match self {
            Hero::Image(name) | Hero::Video(name) => name,
        }
    }
}

/// Everything derived from one project folder.
#[derive(Debug, Clone)]
pub struct Project {
    /// Directory name under the images root.
    pub folder: String,
    pub slug: String,
    pub display_name: String,
    /// Image filenames in listing order.
    pub images: Vec<String>,
    /// Video filenames in listing order.
    pub videos: Vec<String>,
    /// Resolved hero image, before the hero-video override.
    pub hero_image: String,
    pub hero: Hero,
    /// Up to [`GALLERY_SLOTS`] image filenames.
    pub gallery: Vec<String>,
    /// Set when `--hero` named a file that is not among the images.
    pub missing_hero_override: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ScanOutcome {
    Ready(Project),
    Skipped(Skip),
}

/// List project folders under the images root, sorted by name.
pub fn list_project_folders(images_root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut folders: Vec<PathBuf> = fs::read_dir(images_root)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir() && !is_hidden(p))
        .collect();
    folders.sort();
    Ok(folders)
}

/// Resolve an explicitly named folder, failing if it is missing or not a directory.
pub fn resolve_named_folder(images_root: &Path, name: &str) -> Result<PathBuf, ScanError> {
    let path = images_root.join(name);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(ScanError::FolderNotFound(path))
    }
}

/// Scan one project folder and select its hero and gallery.
pub fn scan_project(folder: &Path, hero_override: Option<&str>) -> Result<ScanOutcome, ScanError> {
    let selected = folder.join(SELECTED_DIR);
    if !selected.is_dir() {
        return Ok(ScanOutcome::Skipped(Skip::NoSelectedDir));
    }

    let media_files: Vec<String> = list_file_names(&selected)?
        .into_iter()
        .filter(|name| media::classify(name).is_some())
        .collect();
    if media_files.is_empty() {
        return Ok(ScanOutcome::Skipped(Skip::NoMedia));
    }

    let images: Vec<String> = media_files
        .iter()
        .filter(|name| media::is_image(name))
        .cloned()
        .collect();
    if images.is_empty() {
        return Ok(ScanOutcome::Skipped(Skip::NoImages));
    }

    let (hero_image, missing_hero_override) = resolve_hero_image(&images, hero_override);

    let hero = match media_files.iter().find(|name| media::is_hero_video(name)) {
        Some(video) => Hero::Video(video.clone()),
        None => Hero::Image(hero_image.clone()),
    };

    let videos = media_files
        .iter()
        .filter(|name| !media::is_image(name))
        .cloned()
        .collect();

    let folder_name = folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ScanOutcome::Ready(Project {
        slug: naming::slugify(&folder_name),
        display_name: naming::display_name(&folder_name),
        folder: folder_name,
        gallery: images.iter().take(GALLERY_SLOTS).cloned().collect(),
        images,
        videos,
        hero_image,
        hero,
        missing_hero_override,
    }))
}

/// Pick the hero image; `images` must be non-empty.
///
/// Returns the chosen file and, when the override was not found, the
/// override name so the caller can warn about it.
fn resolve_hero_image(images: &[String], hero_override: Option<&str>) -> (String, Option<String>) {
    let first = images[0].clone();
    match hero_override {
        Some(wanted) if images.iter().any(|i| i == wanted) => (wanted.to_string(), None),
        Some(wanted) => (first, Some(wanted.to_string())),
        None => (first, None),
    }
}

fn list_file_names(dir: &Path) -> Result<Vec<String>, ScanError> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && !is_hidden(p))
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    names.sort();
    Ok(names)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
