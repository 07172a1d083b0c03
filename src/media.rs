//! Media classification by file extension.

use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4"];

/// Substring that marks a video as the page's lead medium.
const HERO_MARKER: &str = "hero";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Classify a filename, or `None` if the extension is not a recognized medium.
///
/// Extensions are matched case-insensitively.
pub fn classify(file_name: &str) -> Option<MediaKind> {
    let ext = Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())?;
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

pub fn is_image(file_name: &str) -> bool {
    classify(file_name) == Some(MediaKind::Image)
}

/// True for a video whose name contains `hero`, in any case.
pub fn is_hero_video(file_name: &str) -> bool {
    classify(file_name) == Some(MediaKind::Video)
        && file_name.to_lowercase().contains(HERO_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_image_extensions() {
        for name in ["a.jpg", "a.jpeg", "a.png", "a.gif", "a.webp", "A.JPG"] {
            assert_eq!(classify(name), Some(MediaKind::Image), "{name}");
        }
    }

    #[test]
    fn recognizes_mp4_as_video() {
        assert_eq!(classify("clip.mp4"), Some(MediaKind::Video));
        assert_eq!(classify("clip.MP4"), Some(MediaKind::Video));
    }

    #[test]
    fn rejects_other_files() {
        assert_eq!(classify("notes.txt"), None);
        assert_eq!(classify("movie.mov"), None);
        assert_eq!(classify("no-extension"), None);
    }

    #[test]
    fn hero_video_match_is_case_insensitive() {
        assert!(is_hero_video("clip-hero.mp4"));
        assert!(is_hero_video("HERO_loop.mp4"));
        assert!(!is_hero_video("clip.mp4"));
        assert!(!is_hero_video("hero.jpg"));
    }
}
