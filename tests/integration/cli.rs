//! CLI integration tests
//!
//! Runs the `tsb` binary with an isolated config directory.

use std::path::Path;
use std::process::{Command, Output};

fn tsb(args: &[&str]) -> Output {
    let config_home = tempfile::tempdir().unwrap();
    tsb_with_config(config_home.path(), args)
}

fn tsb_with_config(
    config_home: &Path,
    args: &[&str],
) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tsb"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_tokens_command() {
    let output = tsb(&["tokens", "-e", "let x = 5;"]);
    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "LET \"let\" @ 1:1");
    assert_eq!(lines[4], "; \";\" @ 1:10");
}

#[test]
fn test_tokens_json() {
    let output = tsb(&["tokens", "--json", "-e", "a == b"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tokens = value.as_array().unwrap();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1]["kind"], "Eq");
    assert_eq!(tokens[1]["literal"], "==");
    assert_eq!(tokens[3]["kind"], "Eof");
}

#[test]
fn test_parse_command() {
    let output = tsb(&["parse", "-e", "let x = a + b * c; x"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "let x = (a + (b * c));\nx\n");
}

#[test]
fn test_parse_command_errors() {
    let output = tsb(&["parse", "-e", "let = 5;"]);
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("parser error: expected next token to be IDENT, got = instead"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_parse_file_argument() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prog.tsb");
    std::fs::write(&path, "return fn(x) { x }(1);").unwrap();

    let output = tsb(&["parse", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "return fn(x) x(1);\n");
}

#[test]
fn test_parse_deep_nesting_is_an_error() {
    let n = 5_000;
    let source = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    let output = tsb(&["parse", "-e", &source]);
    assert_eq!(output.status.code(), Some(1));
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("parser error: nesting deeper than 128 levels"));
}

#[test]
fn test_config_init_creates_defaults() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("tsb").join("config.toml");

    let output = tsb_with_config(home.path(), &["config", "init"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), path.display().to_string());
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("prompt = \">> \""));
}

#[test]
fn test_config_init_keeps_existing_file() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("tsb").join("config.toml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[repl]\nmode = \"ast\"\n").unwrap();

    assert!(tsb_with_config(home.path(), &["config", "init"]).status.success());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[repl]\nmode = \"ast\"\n"
    );

    let shown = tsb_with_config(home.path(), &["config", "show"]);
    assert!(stdout(&shown).contains("mode = \"ast\""));

    assert!(tsb_with_config(home.path(), &["config", "init", "--force"]).status.success());
    let reset = tsb_with_config(home.path(), &["config", "show"]);
    assert!(stdout(&reset).contains("mode = \"tokens\""));
}

#[test]
fn test_config_path() {
    let home = tempfile::tempdir().unwrap();
    let output = tsb_with_config(home.path(), &["config", "path"]);
    assert!(output.status.success());
    assert!(stdout(&output).trim().ends_with("config.toml"));
    assert!(!home.path().join("tsb").exists());
}
