use clap::Parser;
use project_pages::generate::{self, GenerateError, Options};
use project_pages::scan::ScanError;
use project_pages::{config, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "project-pages")]
#[command(about = "Generate static project pages from image folders")]
#[command(long_about = "\
Generate static project pages from image folders

Every project folder with a selected/ directory becomes one HTML page:

  images/
  ├── Harbor Lights/
  │   └── selected/
  │       ├── 01-pier.jpg          # First image = hero image
  │       ├── 02-night-shot.jpg    # First four images = gallery
  │       └── clip-hero.mp4        # Video named *hero* = lead medium
  └── scratch/                     # No selected/ = skipped

  → projects/harbor-lights.html

Recognized media: jpg, jpeg, png, gif, webp, mp4.
Existing pages with the same name are overwritten.")]
#[command(version = version_string())]
struct Cli {
    /// Process only this project folder
    folder: Option<String>,

    /// Image file in selected/ to use as the hero image
    #[arg(long, value_name = "FILENAME")]
    hero: Option<String>,

    /// Directory containing the project folders
    #[arg(long, default_value = config::DEFAULT_IMAGES_ROOT)]
    images_root: PathBuf,

    /// Directory the pages are written to
    #[arg(long, default_value = config::DEFAULT_OUTPUT_DIR)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let options = Options {
        images_root: &cli.images_root,
        output_dir: &cli.output,
        folder: cli.folder.as_deref(),
        hero: cli.hero.as_deref(),
    };

    if options.folder.is_none() {
        println!("==> Scanning {}", cli.images_root.display());
    }

    let mut index = 0;
    let result = generate::generate(options, |report| {
        index += 1;
        output::print_folder_report(index, report);
    });

    match result {
        Ok(reports) => {
            if options.folder.is_none() {
                output::print_summary(&reports);
            }
            Ok(())
        }
        Err(GenerateError::Scan(ScanError::FolderNotFound(path))) => {
            eprintln!("error: folder not found: {}", path.display());
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
