//! End-to-end tests driving the compiled binaries.

use std::fs;
use std::io::Write as _;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn make_project(images: &Path, name: &str, files: &[&str]) {
    let selected = images.join(name).join("selected");
    fs::create_dir_all(&selected).unwrap();
    for file in files {
        fs::write(selected.join(file), "fake media").unwrap();
    }
}

fn run_generator(site: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_project-pages"))
        .current_dir(site)
        .args(args)
        .output()
        .unwrap()
}

fn run_relay(method: &str, body: &str, config: &Path) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_form-relay"))
        .env("REQUEST_METHOD", method)
        .env("CONTENT_LENGTH", body.len().to_string())
        .env("FORM_RELAY_CONFIG", config)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(body.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

// =========================================================================
// Page generator
// =========================================================================

#[test]
fn help_exits_zero_without_touching_filesystem() {
    let site = TempDir::new().unwrap();
    for flag in ["--help", "-h"] {
        let output = run_generator(site.path(), &[flag]);
        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("--hero"));
    }
    assert!(!site.path().join("projects").exists());
}

#[test]
fn missing_named_folder_exits_nonzero_and_writes_nothing() {
    let site = TempDir::new().unwrap();
    fs::create_dir_all(site.path().join("images")).unwrap();

    let output = run_generator(site.path(), &["ghost"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("folder not found"));
    assert!(!site.path().join("projects").exists());
}

#[test]
fn whole_directory_mode_generates_and_skips() {
    let site = TempDir::new().unwrap();
    let images = site.path().join("images");
    make_project(&images, "My Project", &["a.jpg", "b.jpg", "clip-hero.mp4"]);
    make_project(&images, "empty", &["notes.txt"]);

    let output = run_generator(site.path(), &[]);
    assert!(output.status.success());

    let page = fs::read_to_string(site.path().join("projects/my-project.html")).unwrap();
    assert!(page.contains("<h1>My Project</h1>"));
    assert!(page.contains("<video"));
    assert!(page.contains("clip-hero.mp4"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("skipped: no media files in selected/"));
    assert!(stdout.contains("Generated 1 page, skipped 1 folder"));
}

#[test]
fn named_folder_with_hero_override() {
    let site = TempDir::new().unwrap();
    let images = site.path().join("images");
    make_project(&images, "harbor", &["a.jpg", "b.jpg"]);
    make_project(&images, "other", &["c.jpg"]);

    let output = run_generator(site.path(), &["--hero=b.jpg", "harbor"]);
    assert!(output.status.success());

    let page = fs::read_to_string(site.path().join("projects/harbor.html")).unwrap();
    // Hero and first gallery slot for b.jpg, gallery only for a.jpg
    assert_eq!(page.matches("selected/b.jpg").count(), 2);
    assert_eq!(page.matches("selected/a.jpg").count(), 1);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Hero: b.jpg"));
    assert!(!site.path().join("projects/other.html").exists());
}

#[test]
fn unknown_hero_override_warns_and_falls_back() {
    let site = TempDir::new().unwrap();
    make_project(&site.path().join("images"), "harbor", &["a.jpg"]);

    let output = run_generator(site.path(), &["--hero=missing.jpg", "harbor"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("'missing.jpg' not found"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Hero: a.jpg"));
}

#[test]
fn custom_roots() {
    let site = TempDir::new().unwrap();
    make_project(&site.path().join("media"), "harbor", &["a.png"]);

    let output = run_generator(site.path(), &["--images-root", "media", "--output", "out/pages"]);
    assert!(output.status.success());
    assert!(site.path().join("out/pages/harbor.html").exists());
}

// =========================================================================
// Form relay
// =========================================================================

#[test]
fn relay_rejects_get() {
    let tmp = TempDir::new().unwrap();
    let response = run_relay("GET", "", &tmp.path().join("none.toml"));
    assert!(response.starts_with("Content-Type: text/plain"));
    assert!(response.ends_with("\r\n\r\nInvalid request."));
}

#[test]
fn relay_rejects_incomplete_form() {
    let tmp = TempDir::new().unwrap();
    let response = run_relay("POST", "demo-name=Ada", &tmp.path().join("none.toml"));
    assert!(response.ends_with("All fields are required."));
}

#[test]
fn relay_reports_config_problem_as_failure() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("form-relay.toml");
    fs::write(&config, "port = 0\n").unwrap();

    let body = "demo-name=Ada&demo-email=ada%40example.com&demo-category=design\
                &demo-priority=high&demo-message=Hi";
    let response = run_relay("POST", body, &config);
    assert!(response.contains("Sorry, your message could not be sent:"));
    assert!(response.contains("port must be non-zero"));
}
