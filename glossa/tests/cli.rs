//! End-to-end runs of the `glossa` binary against a temporary project.

use std::{fs, path::Path, process::Command};

use tempfile::TempDir;

fn glossa(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_glossa"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

fn project(locales: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("locales")).unwrap();
    for (file, content) in locales {
        fs::write(dir.path().join("locales").join(file), content).unwrap();
    }
    dir
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_check_valid_project() {
    let dir = project(&[
        ("en.yaml", "ok: OK\ngreet: \"hi {{ name }}\"\n"),
        ("zh.json", r#"{ "ok": "好", "greet": "{{ name }}你好" }"#),
    ]);

    let output = glossa(dir.path(), &["check"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("✓ 2 languages agree: en, zh"));
    assert!(out.contains("greet(name)"));
}

#[test]
fn test_check_reports_problems_and_fails() {
    let dir = project(&[
        ("en.yaml", "ok: OK\ncancel: Cancel\n"),
        ("zh.yaml", "ok: 好\n"),
    ]);

    let output = glossa(dir.path(), &["check"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("found 1 structural problem across 2 languages:"));
    assert!(err.contains("missing in: zh"));
}

#[test]
fn test_generate_writes_units() {
    let dir = project(&[("en.yaml", "ok: OK\n"), ("zh.yaml", "ok: 好\n")]);

    let output = glossa(
        dir.path(),
        &["generate", "--lazy", "--output", "web/i18n.ts", "-d", "zh"],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("  + web/i18n.ts"));

    let main = fs::read_to_string(dir.path().join("web/i18n.ts")).unwrap();
    assert!(main.contains("import(\"./en\")"));
    let en = fs::read_to_string(dir.path().join("web/en.ts")).unwrap();
    assert!(en.contains("export default {"));
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let dir = project(&[("en.yaml", "ok: OK\n")]);

    let output = glossa(dir.path(), &["generate", "--dry-run", "--target", "type"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("export declare class I18nProvider {"));
    assert!(!dir.path().join("src").exists());
}

#[test]
fn test_generate_fails_on_diagnostics() {
    let dir = project(&[
        ("en.yaml", "greet: \"hi {{ a }}\"\n"),
        ("zh.yaml", "greet: \"你好 {{ b }}\"\n"),
    ]);

    let output = glossa(dir.path(), &["generate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("[mismatched-arguments]"));
    assert!(!dir.path().join("src").exists());
}

#[test]
fn test_invalid_manifest_is_reported() {
    let dir = project(&[("en.yaml", "ok: OK\n")]);
    fs::write(dir.path().join("glossa.toml"), "[i18n]\nlocale = \"x\"\n").unwrap();

    let output = glossa(dir.path(), &["check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to parse glossa.toml"));
}

#[test]
fn test_inspect_json() {
    let dir = project(&[("en.toml", "[dialog]\ncancel = \"Cancel\"\n")]);

    let output = glossa(dir.path(), &["inspect", "--json"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["dialog"]["value"]["cancel"]["value"], "Cancel");
}
