//! Single source of truth for the duet filesystem layout.
//!
//! This module defines WHERE things live. It has no I/O, no validation,
//! no business logic.
//!
//! ```text
//! project/
//! └── logs/
//!     ├── ai_chat.md           # AI communication
//!     ├── dev_log.md           # Development record
//!     └── archived_logs.md     # Old conversations
//! ```

use std::path::{Path, PathBuf};

/// Log directory and the files inside it
pub mod logs {
    use super::*;

    /// Default log directory name
    pub const DEFAULT_DIR: &str = "logs";

    pub const AI_CHAT: &str = "ai_chat.md";
    pub const DEV_LOG: &str = "dev_log.md";
    pub const ARCHIVED_LOGS: &str = "archived_logs.md";

    /// Shared chat between the assistants: `<log_dir>/ai_chat.md`
    pub fn ai_chat(log_dir: &Path) -> PathBuf {
        log_dir.join(AI_CHAT)
    }

    /// Development record: `<log_dir>/dev_log.md`
    pub fn dev_log(log_dir: &Path) -> PathBuf {
        log_dir.join(DEV_LOG)
    }

    /// Archived conversations: `<log_dir>/archived_logs.md`
    pub fn archived_logs(log_dir: &Path) -> PathBuf {
        log_dir.join(ARCHIVED_LOGS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_files_live_in_log_dir() {
        let dir = Path::new("logs");
        assert_eq!(logs::ai_chat(dir), PathBuf::from("logs/ai_chat.md"));
        assert_eq!(logs::dev_log(dir), PathBuf::from("logs/dev_log.md"));
        assert_eq!(
            logs::archived_logs(dir),
            PathBuf::from("logs/archived_logs.md")
        );
    }
}
