//! Shared test utilities: project folder fixtures and outcome unwrapping.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let folder = make_project(tmp.path(), "Harbor", &["a.jpg", "clip-hero.mp4"]);
//! let project = expect_ready(scan_project(&folder, None).unwrap());
//! ```

use std::path::{Path, PathBuf};

use crate::config::SELECTED_DIR;
use crate::scan::{Hero, Project, ScanOutcome};

/// Create `<root>/<name>/selected/` holding empty files with the given names.
///
/// Scanning only looks at names, so the files carry placeholder bytes.
pub fn make_project(root: &Path, name: &str, files: &[&str]) -> PathBuf {
    let folder = root.join(name);
    let selected = folder.join(SELECTED_DIR);
    std::fs::create_dir_all(&selected).unwrap();
    for file in files {
        std::fs::write(selected.join(file), "fake media").unwrap();
    }
    folder
}

/// Unwrap a ready project. Panics with the skip reason otherwise.
pub fn expect_ready(outcome: ScanOutcome) -> Project {
    match outcome {
        ScanOutcome::Ready(project) => project,
        ScanOutcome::Skipped(reason) => panic!("expected a project, folder was skipped: {reason}"),
    }
}

/// Build a project in memory, bypassing the filesystem.
pub fn sample_project(folder: &str, images: &[&str], hero: Hero) -> Project {
    let images: Vec<String> = images.iter().map(|s| s.to_string()).collect();
    Project {
        folder: folder.to_string(),
        slug: crate::naming::slugify(folder),
        display_name: crate::naming::display_name(folder),
        gallery: images.iter().take(crate::config::GALLERY_SLOTS).cloned().collect(),
        hero_image: images.first().cloned().unwrap_or_default(),
        videos: match &hero {
            Hero::Video(v) => vec![v.clone()],
            Hero::Image(_) => vec![],
        },
        images,
        hero,
        missing_hero_override: None,
    }
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
