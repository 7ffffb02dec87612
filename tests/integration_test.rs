use image::{Rgba, RgbaImage};
use logo_gen::verify;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs `logo-gen -o <dir>` with no size arguments and checks the reference batch:
/// two 1024×1024 PNGs with identical bytes and a clean rounded silhouette.
#[test]
fn test_reference_batch_generation() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("assets");

    let output = run_logo_gen(&["-o", path_arg(&output_dir)]);
    assert_success(&output, "logo-gen with default manifest failed");

    let logo_path = output_dir.join("logo.png");
    let foreground_path = output_dir.join("logo_foreground.png");
    for path in [&logo_path, &foreground_path] {
        assert!(path.exists(), "Output should exist at: {}", path.display());
    }

    let logo = image::open(&logo_path).expect("Failed to load logo.png");
    assert_eq!(logo.width(), 1024, "Logo width should be 1024");
    assert_eq!(logo.height(), 1024, "Logo height should be 1024");

    let logo_bytes = std::fs::read(&logo_path).expect("Failed to read logo.png");
    let foreground_bytes =
        std::fs::read(&foreground_path).expect("Failed to read logo_foreground.png");
    assert_eq!(
        logo_bytes, foreground_bytes,
        "Both reference outputs should be byte-identical"
    );

    let report = verify::inspect(&logo.to_rgba8()).expect("Failed to inspect logo");
    assert!(report.is_valid(), "Silhouette mismatch:\n{}", report);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Generated logo.png (1024x1024)"));
    assert!(stdout.contains("✓ Logos generated successfully"));
}

#[test]
fn test_custom_sizes_replace_reference_batch() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("out");

    let output = run_logo_gen(&[
        "--size",
        "small.png=64,tiny.png=1",
        "-o",
        path_arg(&output_dir),
    ]);
    assert_success(&output, "logo-gen with custom sizes failed");

    for (name, size) in [("small.png", 64), ("tiny.png", 1)] {
        let img = image::open(output_dir.join(name))
            .unwrap_or_else(|_| panic!("Failed to load {}", name));
        assert_eq!(img.width(), size);
        assert_eq!(img.height(), size);
    }
    assert!(
        !output_dir.join("logo.png").exists(),
        "Reference outputs should not be written when sizes are given"
    );
}

#[test]
fn test_manifest_file_with_size_override() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let manifest_path = temp_dir.path().join("logos.json");
    std::fs::write(&manifest_path, r#"{"a.png": 32, "b.png": 48}"#)
        .expect("Failed to write manifest");
    let output_dir = temp_dir.path().join("out");

    let output = run_logo_gen(&[
        "-m",
        path_arg(&manifest_path),
        "-s",
        "b.png=20",
        "-o",
        path_arg(&output_dir),
    ]);
    assert_success(&output, "logo-gen with manifest failed");

    let a = image::open(output_dir.join("a.png")).expect("Failed to load a.png");
    let b = image::open(output_dir.join("b.png")).expect("Failed to load b.png");
    assert_eq!(a.width(), 32);
    assert_eq!(b.width(), 20, "--size should override the manifest entry");
}

#[test]
fn test_zero_size_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("out");

    let output = run_logo_gen(&[
        "--size",
        "bad.png=0",
        "-o",
        path_arg(&output_dir),
    ]);

    assert!(!output.status.success(), "Zero size should fail");
    assert!(!output.stderr.is_empty(), "An error should be reported");
    assert!(!output_dir.join("bad.png").exists());
}

#[test]
fn test_oversized_size_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("out");

    let output = run_logo_gen(&[
        "--size",
        "big.png=4294967295",
        "-o",
        path_arg(&output_dir),
    ]);

    assert!(!output.status.success(), "Oversized logo should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("maximum"), "Unexpected stderr: {}", stderr);
    assert!(!output_dir.exists(), "Nothing should be written");
}

#[test]
fn test_unwritable_output_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let blocker = temp_dir.path().join("occupied");
    std::fs::write(&blocker, b"not a directory").expect("Failed to write blocker file");

    let output = run_logo_gen(&[
        "--size",
        "x.png=8",
        "-o",
        path_arg(&blocker),
    ]);

    assert!(!output.status.success(), "Writing under a file should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("output directory"),
        "Unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_verify_logo_binary() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("out");

    let output = run_logo_gen(&[
        "-s",
        "logo.png=128",
        "-o",
        path_arg(&output_dir),
    ]);
    assert_success(&output, "logo-gen failed");

    let verified = Command::new(env!("CARGO_BIN_EXE_verify_logo"))
        .arg(output_dir.join("logo.png"))
        .output()
        .expect("Failed to run verify_logo");
    assert_success(&verified, "verify_logo rejected a generated logo");

    // A plain opaque square has no rounded corners.
    let square_path = temp_dir.path().join("square.png");
    create_opaque_square(&square_path, 128);
    let rejected = Command::new(env!("CARGO_BIN_EXE_verify_logo"))
        .arg(&square_path)
        .output()
        .expect("Failed to run verify_logo");
    assert!(
        !rejected.status.success(),
        "verify_logo should reject an unmasked square"
    );
}

fn run_logo_gen(args: &[&str]) -> Output {
    Command::new(logo_gen_binary_path())
        .args(args)
        .output()
        .expect("Failed to run logo-gen command")
}

fn assert_success(output: &Output, message: &str) {
    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("{}", message);
    }
}

/// Creates a fully opaque square PNG with no silhouette
fn create_opaque_square(path: &Path, size: u32) {
    let image = RgbaImage::from_pixel(size, size, Rgba([99, 102, 241, 255]));
    image.save(path).expect("Failed to save square image");
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("Temp path should be valid UTF-8")
}

fn logo_gen_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_logo-gen"))
}
