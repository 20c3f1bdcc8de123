//! Scaffold the collaboration logs
//!
//! Ensures the log directory and its three template files exist. Files that
//! are already there are never touched, so running the scaffold again is
//! always safe.
//!
//! # Example
//!
//! ```no_run
//! use duet::scaffold::Scaffold;
//!
//! let report = Scaffold::new(".", "logs").init()?;
//! for line in report.status_lines() {
//!     println!("{line}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;
pub mod templates;

use anyhow::{bail, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

use crate::paths;

/// Something the scaffold creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Artifact {
    LogDirectory,
    ChatLog,
    DevLog,
    ArchiveLog,
}

impl Artifact {
    /// The template files, in creation order
    pub const FILES: [Artifact; 3] = [Artifact::ChatLog, Artifact::DevLog, Artifact::ArchiveLog];

    /// File name inside the log directory (`None` for the directory itself)
    pub fn file_name(&self) -> Option<&'static str> {
        match self {
            Artifact::LogDirectory => None,
            Artifact::ChatLog => Some(paths::logs::AI_CHAT),
            Artifact::DevLog => Some(paths::logs::DEV_LOG),
            Artifact::ArchiveLog => Some(paths::logs::ARCHIVED_LOGS),
        }
    }

    /// What the artifact is for
    pub fn role(&self) -> &'static str {
        match self {
            Artifact::LogDirectory => "Collaboration logs",
            Artifact::ChatLog => "AI communication",
            Artifact::DevLog => "Development record",
            Artifact::ArchiveLog => "Old conversations",
        }
    }
}

/// What happened to an artifact during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Created,
    AlreadyExists,
}

/// Result of a scaffold run
#[derive(Debug, Clone, Serialize)]
pub struct InitReport {
    /// Log directory as shown to the user (relative to the project root)
    pub log_dir: PathBuf,
    /// One entry per artifact, in creation order
    pub entries: Vec<(Artifact, Outcome)>,
}

impl InitReport {
    pub fn outcome(&self, artifact: Artifact) -> Option<Outcome> {
        self.entries
            .iter()
            .find(|(a, _)| *a == artifact)
            .map(|(_, outcome)| *outcome)
    }

    /// Artifacts this run created
    pub fn created(&self) -> impl Iterator<Item = Artifact> + '_ {
        self.entries
            .iter()
            .filter(|(_, outcome)| *outcome == Outcome::Created)
            .map(|(artifact, _)| *artifact)
    }

    /// Path of an artifact as shown to the user, e.g. `logs/ai_chat.md`
    pub fn display_path(&self, artifact: Artifact) -> String {
        let dir: PathBuf = self.log_dir.components().collect();
        match artifact.file_name() {
            Some(name) => dir.join(name).display().to_string(),
            None => format!("{}/", dir.display()),
        }
    }

    /// One human-readable line per artifact
    pub fn status_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(artifact, outcome)| {
                let path = self.display_path(*artifact);
                match (artifact, outcome) {
                    (Artifact::LogDirectory, Outcome::Created) => {
                        format!("📁 Created {path} directory")
                    }
                    (Artifact::LogDirectory, Outcome::AlreadyExists) => {
                        format!("📁 {path} directory already exists")
                    }
                    (_, Outcome::Created) => format!("✅ Created {path}"),
                    (_, Outcome::AlreadyExists) => format!("📄 {path} already exists"),
                }
            })
            .collect()
    }
}

/// Creates the log directory and its template files under a project root
pub struct Scaffold {
    root: PathBuf,
    log_dir: PathBuf,
}

impl Scaffold {
    /// `log_dir` is relative to `root` and must stay inside it
    pub fn new(root: impl AsRef<Path>, log_dir: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            log_dir: log_dir.as_ref().components().collect(),
        }
    }

    /// Absolute (or root-relative) location of the log directory
    pub fn log_path(&self) -> PathBuf {
        self.root.join(&self.log_dir)
    }

    /// Run the scaffold, stamping new files with the current local time
    pub fn init(&self) -> Result<InitReport> {
        self.init_at(Local::now())
    }

    /// Run the scaffold with an explicit creation time
    ///
    /// # Errors
    ///
    /// Returns an error if the log directory is not a plain relative path
    /// under the root, or if it or any missing file cannot be created.
    /// Files created before a failure are left in place.
    pub fn init_at(&self, now: DateTime<Local>) -> Result<InitReport> {
        let inside_root = self
            .log_dir
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if self.log_dir.as_os_str().is_empty() || !inside_root {
            bail!(
                "Log directory must be a relative path inside the project: {}",
                self.log_dir.display()
            );
        }

        let log_path = self.log_path();
        let mut entries = Vec::with_capacity(1 + Artifact::FILES.len());

        entries.push((Artifact::LogDirectory, internal::ensure_dir(&log_path)?));

        let chat_display = self
            .log_dir
            .join(paths::logs::AI_CHAT)
            .display()
            .to_string();

        for artifact in Artifact::FILES {
            let (name, content) = match artifact {
                Artifact::ChatLog => (paths::logs::AI_CHAT, templates::ai_chat(&chat_display)),
                Artifact::DevLog => (paths::logs::DEV_LOG, templates::dev_log(&now)),
                Artifact::ArchiveLog => (paths::logs::ARCHIVED_LOGS, templates::archived_logs(&now)),
                Artifact::LogDirectory => continue,
            };
            let outcome = internal::create_if_absent(&log_path.join(name), &content)?;
            entries.push((artifact, outcome));
        }

        Ok(InitReport {
            log_dir: self.log_dir.clone(),
            entries,
        })
    }
}
