//! Show where the AI collaboration stands

use anyhow::{bail, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use duet::chat::{self, ChatStatus};
use duet::paths;
use duet::scaffold::Artifact;

#[derive(Debug, Serialize)]
struct StatusReport {
    #[serde(flatten)]
    chat: ChatStatus,
    files: Vec<FileStatus>,
}

#[derive(Debug, Serialize)]
struct FileStatus {
    path: String,
    exists: bool,
}

pub fn execute(json: bool) -> Result<()> {
    let root = std::env::current_dir()?;
    let report = collect(&root)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output_human(&report);
    }
    Ok(())
}

fn collect(root: &Path) -> Result<StatusReport> {
    let log_dir = Path::new(paths::logs::DEFAULT_DIR);
    let chat_path = root.join(paths::logs::ai_chat(log_dir));

    if !chat_path.exists() {
        bail!(
            "{} not found. Run `duet` first to create it.",
            paths::logs::ai_chat(log_dir).display()
        );
    }

    let files = Artifact::FILES
        .iter()
        .filter_map(|a| a.file_name())
        .map(|name| {
            let relative = log_dir.join(name);
            FileStatus {
                exists: root.join(&relative).is_file(),
                path: relative.display().to_string(),
            }
        })
        .collect();

    Ok(StatusReport {
        chat: chat::read(&chat_path)?,
        files,
    })
}

fn output_human(report: &StatusReport) {
    println!("{}", "📊 AI Collaboration Status".bold());

    let task = report.chat.task.as_deref().unwrap_or("None");
    let phase = report.chat.phase.as_deref().unwrap_or("unknown");
    println!("  Task:  {task}");
    println!("  Phase: {phase}");

    match report.chat.turn {
        Some(turn) => println!("  Next:  {} ({})", turn.describe().cyan(), turn.marker()),
        None => println!("  Next:  {}", "not started - press Cmd+Shift+D in Cursor".yellow()),
    }

    println!("\n📁 Files:");
    for file in &report.files {
        if file.exists {
            println!("  ✓ {}", file.path);
        } else {
            println!("  ✗ {} (missing - run `duet`)", file.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duet::chat::Turn;
    use duet::scaffold::Scaffold;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collect_after_init() -> Result<()> {
        let temp = TempDir::new()?;
        Scaffold::new(temp.path(), "logs").init()?;

        let report = collect(temp.path())?;
        assert_eq!(report.chat.phase.as_deref(), Some("PLAN"));
        assert_eq!(report.chat.turn, None);
        assert!(report.files.iter().all(|f| f.exists));
        Ok(())
    }

    #[test]
    fn test_collect_reports_missing_files() -> Result<()> {
        let temp = TempDir::new()?;
        Scaffold::new(temp.path(), "logs").init()?;
        fs::remove_file(temp.path().join("logs/archived_logs.md"))?;
        fs::write(temp.path().join("logs/ai_chat.md"), "HUMAN_APPROVAL_NEEDED\n")?;

        let report = collect(temp.path())?;
        assert_eq!(report.chat.turn, Some(Turn::HumanApproval));
        let missing: Vec<_> = report.files.iter().filter(|f| !f.exists).collect();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].path, "logs/archived_logs.md");
        Ok(())
    }

    #[test]
    fn test_collect_without_chat_log_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = collect(temp.path()).unwrap_err();
        assert!(err.to_string().contains("logs/ai_chat.md not found"));
    }

    #[test]
    fn test_json_flattens_chat_status() -> Result<()> {
        let temp = TempDir::new()?;
        Scaffold::new(temp.path(), "logs").init()?;

        let value = serde_json::to_value(collect(temp.path())?)?;
        assert_eq!(value["phase"], "PLAN");
        assert!(value["task"].is_null());
        assert_eq!(value["files"][0]["path"], "logs/ai_chat.md");
        Ok(())
    }
}
