use std::path::Path;
use std::process::Output;
use std::sync::LazyLock;

use escargot::CargoBuild;

static WORDPACK: LazyLock<escargot::CargoRun> = LazyLock::new(|| {
    CargoBuild::new()
        .bin("wordpack")
        .run()
        .expect("failed to build wordpack")
});

fn run_in(dir: &Path, args: &[&str]) -> Output {
    WORDPACK
        .command()
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_help() {
    let output = WORDPACK.command().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Convert the word list"));
    assert!(stdout.contains("Write a wordpack.config.json"));
}

#[test]
fn test_no_arguments_converts_default_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("IELTS 8000.txt"), "List 1\nabandon\n").unwrap();

    let output = run_in(dir.path(), &[]);

    assert!(output.status.success());
    let written = std::fs::read_to_string(dir.path().join("ielts-8000-data.js")).unwrap();
    assert!(written.starts_with("// IELTS 8000 Word Collection - Built-in Data\n"));
    assert!(written.contains("const IELTS_8000_DATA = `List 1\nabandon\n`;"));
    assert!(written.ends_with("window.IELTS_8000_DATA = IELTS_8000_DATA;\n"));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        format!(
            "✅ Created ielts-8000-data.js successfully!\n📊 File size: {} bytes\n",
            written.chars().count()
        )
    );
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(!dir.path().join("ielts-8000-data.js").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("IELTS 8000.txt"));
}

#[test]
fn test_convert_with_flags() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("words.txt"), "Hello ${name}").unwrap();

    let output = run_in(
        dir.path(),
        &[
            "convert", "--input", "words.txt", "--output", "words.js", "--name", "WORDS",
            "--module",
        ],
    );

    assert!(output.status.success());
    let written = std::fs::read_to_string(dir.path().join("words.js")).unwrap();
    assert!(written.contains("export const WORDS = `Hello \\${name}`;"));
    assert!(written.ends_with("export default WORDS;\n"));
}

#[test]
fn test_global_and_module_conflict() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(dir.path(), &["convert", "--global", "self", "--module"]);

    assert!(!output.status.success());
}

#[test]
fn test_init_then_convert_uses_config() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(dir.path(), &["init"]);
    assert!(output.status.success());
    let config_path = dir.path().join("wordpack.config.json");
    assert!(config_path.exists());

    let config = std::fs::read_to_string(&config_path)
        .unwrap()
        .replace("ielts-8000-data.js", "custom.js");
    std::fs::write(&config_path, config).unwrap();
    std::fs::write(dir.path().join("IELTS 8000.txt"), "a\\b").unwrap();

    let output = run_in(dir.path(), &[]);
    assert!(output.status.success());
    let written = std::fs::read_to_string(dir.path().join("custom.js")).unwrap();
    assert!(written.contains("const IELTS_8000_DATA = `a\\\\b`;"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("wordpack.config.json"), "{}").unwrap();

    let output = run_in(dir.path(), &["init"]);
    assert!(!output.status.success());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("wordpack.config.json")).unwrap(),
        "{}"
    );

    let output = run_in(dir.path(), &["init", "--force"]);
    assert!(output.status.success());
}

#[test]
fn test_explicit_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("IELTS 8000.txt"), "x").unwrap();

    let output = run_in(dir.path(), &["--config", "nope.json"]);

    assert!(!output.status.success());
    assert!(!dir.path().join("ielts-8000-data.js").exists());
}
