//! Integration tests that drive the `exposure-triangle` binary.
//!
//! Run with: cargo test --test cli

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_exposure-triangle"))
        .arg("--config-dir")
        .arg(config_dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    assert!(
        out.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout.clone()).unwrap()
}

#[test]
fn compute_defaults_to_full_sun_example() {
    let tmp = TempDir::new().unwrap();
    let text = stdout(&run(tmp.path(), &["compute"]));
    assert!(text.contains("Settings f/4 · 1/60 · ISO 100 → EV 9.91"));
    assert!(text.contains("Very over-exposed (-5.09 EV)"));
}

#[test]
fn compute_flags_override_selection() {
    let tmp = TempDir::new().unwrap();
    let text = stdout(&run(
        tmp.path(),
        &["compute", "--aperture", "8", "--shutter", "5", "--iso", "0"],
    ));
    assert!(text.contains("f/16 · 1/125 · ISO 100"));
    assert!(text.contains("Correct exposure"));
}

#[test]
fn compute_json_report() {
    let tmp = TempDir::new().unwrap();
    let text = stdout(&run(tmp.path(), &["compute", "--json"]));
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["labels"]["status"], "Very over-exposed");
    assert_eq!(json["output"]["brightness"], 3.0);
    assert_eq!(json["selection"]["shutter"], 6);
}

#[test]
fn compute_reads_config_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("exposure.toml"),
        "[selection]\nscene = 7\n\n[display]\nlanguage = \"fr\"\n",
    )
    .unwrap();
    let text = stdout(&run(tmp.path(), &["compute"]));
    assert!(text.contains("Nuit urbaine"));
    assert!(text.contains("Très sous-exposé"));
}

#[test]
fn lang_flag_overrides_config() {
    let tmp = TempDir::new().unwrap();
    let text = stdout(&run(tmp.path(), &["--lang", "fr", "compute"]));
    assert!(text.contains("Très surexposé"));
}

#[test]
fn out_of_range_index_fails() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["compute", "--iso", "8"]);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("IndexOutOfRange"), "stderr: {err}");
    assert!(err.contains("Iso"), "stderr: {err}");
}

#[test]
fn tables_lists_scenes() {
    let tmp = TempDir::new().unwrap();
    let text = stdout(&run(tmp.path(), &["tables"]));
    assert!(text.contains("☀️ Plein soleil (EV 15)"));
    assert!(text.contains("ISO 12800"));
}

#[test]
fn preview_writes_html() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("site/preview.html");
    stdout(&run(
        tmp.path(),
        &["preview", "--iso", "7", "--output", path.to_str().unwrap()],
    ));
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"class="grain""#));
}

#[test]
fn gen_config_round_trips_through_loader() {
    let tmp = TempDir::new().unwrap();
    let stock = stdout(&run(tmp.path(), &["gen-config"]));
    std::fs::write(tmp.path().join("exposure.toml"), stock).unwrap();
    let text = stdout(&run(tmp.path(), &["compute"]));
    assert!(text.contains("Very over-exposed"));
}
