//! Exit status and output of the `duet` binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn duet(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_duet"))
        .args(args)
        .current_dir(dir)
        .env_remove("DUET_LOG")
        .output()
        .expect("failed to run duet")
}

#[test]
fn test_no_arguments_initializes_and_exits_zero() {
    let temp = TempDir::new().unwrap();
    let output = duet(temp.path(), &[]);

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("🚀 Initializing AI Collaboration System...\n📁 Created logs/ directory\n"));
    assert!(stdout.contains("✅ Created logs/ai_chat.md"));
    assert!(temp.path().join("logs/archived_logs.md").is_file());
}

#[test]
fn test_second_run_reports_existing_files() {
    let temp = TempDir::new().unwrap();
    assert!(duet(temp.path(), &[]).status.success());

    let output = duet(temp.path(), &["init"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in [
        "📁 logs/ directory already exists",
        "📄 logs/ai_chat.md already exists",
        "📄 logs/dev_log.md already exists",
        "📄 logs/archived_logs.md already exists",
    ] {
        assert!(stdout.contains(line), "missing {line:?}");
    }
    assert!(!stdout.contains("✅ Created"));
}

#[test]
fn test_filesystem_error_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("logs"), "not a directory").unwrap();

    let output = duet(temp.path(), &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to initialize logs in"), "{stderr}");
}

#[test]
fn test_status_before_init_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let output = duet(temp.path(), &["status"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("logs/ai_chat.md not found"));
}

#[test]
fn test_debug_logging_only_touches_stderr() {
    let quiet = TempDir::new().unwrap();
    let verbose = TempDir::new().unwrap();

    let plain = duet(quiet.path(), &[]);
    let debug = Command::new(env!("CARGO_BIN_EXE_duet"))
        .current_dir(verbose.path())
        .env("DUET_LOG", "1")
        .output()
        .unwrap();

    assert!(debug.status.success());
    assert_eq!(debug.stdout, plain.stdout);
    assert!(String::from_utf8_lossy(&debug.stderr).contains("[DEBUG duet::scaffold]"));
    assert!(plain.stderr.is_empty());
    assert_eq!(
        fs::read(verbose.path().join("logs/ai_chat.md")).unwrap(),
        fs::read(quiet.path().join("logs/ai_chat.md")).unwrap()
    );
}
