use std::path::Path;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chart-zones"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run chart-zones")
}

fn fixture_path(filename: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    format!("{}/tests/fixtures/{}", manifest_dir, filename)
}

#[test]
fn test_missing_argument_prints_usage() {
    let output = run_cli(&[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {}", stderr);
}

#[test]
fn test_nonexistent_image_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-chart.png");

    let output = run_cli(&[missing.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Could not load image"),
        "stderr was: {}",
        stderr
    );
}

#[test]
fn test_undersized_image_is_rejected_before_ocr() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dot.png");
    image::RgbImage::new(1, 1).save(&path).unwrap();

    let output = run_cli(&[path.to_str().unwrap(), "--format", "json"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Image too small"), "stderr was: {}", stderr);
}

#[test]
fn test_unknown_format_is_rejected() {
    let output = run_cli(&["chart.png", "--format", "xml"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

/// Needs the reference chart screenshot in tests/fixtures and a working OCR engine
#[test]
#[ignore]
fn test_reference_chart_labels() {
    let path = fixture_path("chart.png");
    assert!(Path::new(&path).exists(), "missing fixture {}", path);

    let output = run_cli(&[&path]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines.len() >= 15, "Expected at least 15 lines, got {}", lines.len());

    assert!(lines[0].contains("Resistance Zone"));
    assert!(lines[0].contains("26268"));
    assert!(lines[0].contains("26360"));
    assert!(lines[0].contains("Short-term Bias Confirming Zone"));
    assert_eq!(lines[1], "24H Range Extreme High");
    assert!(lines[2].contains("Resistance Zone"));
    assert!(lines[2].contains("Confirming Zone"));
    assert_eq!(lines[3], "24H Range Exhaustion High");

    assert!(stdout.contains("Resistance Zone"));
    assert!(stdout.contains("Support Zone"));
    for level in ["25950", "25448", "25373", "25241", "24806", "24407", "24144"] {
        assert!(stdout.contains(level), "Should detect a label around {}", level);
    }
}
