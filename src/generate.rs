//! Project page rendering and writing.
//!
//! Every project page has the same fixed shape:
//!
//! ```text
//! <head>            meta, title, stylesheet
//! section.hero      looping muted video, or a still image, plus the <h1>
//! section.overview  placeholder copy naming the project
//! section.gallery   exactly four slots: real images, then numbered placeholders
//! section.next-project
//! footer
//! ```
//!
//! Pages land in `<output-dir>/<slug>.html` and overwrite whatever was there.
//! Media and asset URLs are relative (`../images/...`, `../css/style.css`),
//! assuming the output directory sits next to the images root in the site.
//!
//! ## HTML Generation
//!
//! The template is a [maud](https://maud.lambda.xyz/) macro: checked at
//! compile time, no template files to ship, and every interpolated value
//! (folder names, filenames) is escaped.

use crate::config::{
    GALLERY_SLOTS, MEDIA_BASE_URL, NEXT_PROJECT_HREF, SCRIPT_SRC, SELECTED_DIR, STYLESHEET_HREF,
};
use crate::naming;
use crate::scan::{self, Hero, Project, ScanError, ScanOutcome, Skip};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// What a generator run operates on.
#[derive(Debug, Clone, Copy)]
pub struct Options<'a> {
    pub images_root: &'a Path,
    pub output_dir: &'a Path,
    /// Process only this folder; `None` processes every folder.
    pub folder: Option<&'a str>,
    /// Preferred hero image filename.
    pub hero: Option<&'a str>,
}

/// Result of processing one project folder.
#[derive(Debug, Clone)]
pub enum FolderReport {
    Generated {
        folder: String,
        display_name: String,
        hero: Hero,
        gallery_count: usize,
        path: PathBuf,
        missing_hero_override: Option<String>,
    },
    Skipped {
        folder: String,
        reason: Skip,
    },
}

/// Run the generator, calling `on_report` after each folder.
///
/// A named folder that does not exist fails with [`ScanError::FolderNotFound`]
/// before anything is written. Skipped folders are reported, not errors.
pub fn generate(
    options: Options<'_>,
    mut on_report: impl FnMut(&FolderReport),
) -> Result<Vec<FolderReport>, GenerateError> {
    let folders = match options.folder {
        Some(name) => vec![scan::resolve_named_folder(options.images_root, name)?],
        None => scan::list_project_folders(options.images_root)?,
    };

    let mut reports = Vec::with_capacity(folders.len());
    for folder in &folders {
        let report = generate_folder(folder, options.output_dir, options.hero)?;
        on_report(&report);
        reports.push(report);
    }
    Ok(reports)
}

/// Scan one folder and, unless it is skipped, write its page.
pub fn generate_folder(
    folder: &Path,
    output_dir: &Path,
    hero: Option<&str>,
) -> Result<FolderReport, GenerateError> {
    let folder_name = folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match scan::scan_project(folder, hero)? {
        ScanOutcome::Skipped(reason) => Ok(FolderReport::Skipped {
            folder: folder_name,
            reason,
        }),
        ScanOutcome::Ready(project) => {
            let path = write_project_page(&project, output_dir)?;
            Ok(FolderReport::Generated {
                gallery_count: project.gallery.len(),
                folder: project.folder,
                display_name: project.display_name,
                hero: project.hero,
                path,
                missing_hero_override: project.missing_hero_override,
            })
        }
    }
}

/// Render and write `<output_dir>/<slug>.html`, creating the directory if needed.
pub fn write_project_page(project: &Project, output_dir: &Path) -> Result<PathBuf, GenerateError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(format!("{}.html", project.slug));
    fs::write(&path, render_project_page(project).into_string())?;
    Ok(path)
}

/// One position in the gallery grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GallerySlot {
    Image { src: String, caption: String },
    /// 1-based slot number with no image to fill it.
    Placeholder(usize),
}

/// Exactly [`GALLERY_SLOTS`] slots: the project's gallery images, then placeholders.
pub fn gallery_slots(project: &Project) -> Vec<GallerySlot> {
    (1..=GALLERY_SLOTS)
        .map(|n| match project.gallery.get(n - 1) {
            Some(file) => GallerySlot::Image {
                src: media_url(&project.folder, file),
                caption: naming::gallery_caption(file, &project.display_name, n),
            },
            None => GallerySlot::Placeholder(n),
        })
        .collect()
}

/// URL of a file in a project's `selected/` directory, relative to the page.
///
/// Only the characters that would break a relative URL are percent-encoded.
pub fn media_url(folder: &str, file: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        MEDIA_BASE_URL,
        encode_path_segment(folder),
        SELECTED_DIR,
        encode_path_segment(file)
    )
}

fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for c in segment.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, description: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) }
                link rel="stylesheet" href=(STYLESHEET_HREF);
            }
            body.project-page {
                (content)
                script src=(SCRIPT_SRC) {}
            }
        }
    }
}

fn hero_section(project: &Project) -> Markup {
    html! {
        section.hero {
            @match &project.hero {
                Hero::Video(file) => {
                    video.hero-media autoplay muted loop playsinline {
                        source src=(media_url(&project.folder, file)) type="video/mp4";
                    }
                }
                Hero::Image(file) => {
                    img.hero-media src=(media_url(&project.folder, file)) alt=(project.display_name);
                }
            }
            div.hero-content {
                h1 { (project.display_name) }
            }
        }
    }
}

fn overview_section(project: &Project) -> Markup {
    html! {
        section.overview {
            h2 { "Overview" }
            p {
                (project.display_name)
                " is a project from our studio. Replace this paragraph with the brief and the story behind the work."
            }
            p { "Client: [CLIENT]" }
            p { "Year: [YEAR]" }
        }
    }
}

fn gallery_slot(slot: &GallerySlot) -> Markup {
    match slot {
        GallerySlot::Image { src, caption } => html! {
            figure.gallery-item {
                img src=(src) alt=(caption) loading="lazy";
                figcaption { (caption) }
            }
        },
        GallerySlot::Placeholder(n) => {
            let image = format!("[GALLERY_IMAGE_{n}]");
            let caption = format!("[GALLERY_CAPTION_{n}]");
            html! {
                figure.gallery-item.placeholder {
                    img src=(image) alt=(caption) loading="lazy";
                    figcaption { (caption) }
                }
            }
        }
    }
}

fn gallery_section(project: &Project) -> Markup {
    html! {
        section.gallery {
            h2 { "Gallery" }
            div.gallery-grid {
                @for slot in gallery_slots(project) {
                    (gallery_slot(&slot))
                }
            }
        }
    }
}

fn next_project_section() -> Markup {
    html! {
        section.next-project {
            span.next-label { "Next project" }
            a.next-link href=(NEXT_PROJECT_HREF) { "View all work" }
        }
    }
}

fn site_footer() -> Markup {
    html! {
        footer.site-footer {
            a href="../index.html" { "Home" }
            a href="../index.html#contact" { "Contact" }
            p.copyright { "All rights reserved." }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Renders a complete project page.
pub fn render_project_page(project: &Project) -> Markup {
    let content = html! {
        main {
            (hero_section(project))
            (overview_section(project))
            (gallery_section(project))
            (next_project_section())
        }
        (site_footer())
    };

    let title = format!("{} | Projects", project.display_name);
    let description = format!("{} project gallery", project.display_name);
    base_document(&title, &description, content)
}

// ============================================================================
// Tests
// ============================================================================
