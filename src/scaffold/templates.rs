//! Initial content of the scaffolded log files

use chrono::{DateTime, Local};

/// Timestamp format embedded in the dev and archive logs
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(now: &DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Chat log with the workflow instructions both assistants follow.
///
/// `chat_path` is how the assistants are told to find this file (e.g. `logs/ai_chat.md`).
pub fn ai_chat(chat_path: &str) -> String {
    format!(
        r#"<!-- DEVELOPMENT WORKFLOW INSTRUCTIONS
CURSOR (Cmd+Shift+D):
1. Read this file ({chat_path})
2. Look for CURSOR_TURN in the last message
3. Execute your current phase (PLAN → DELIVERABLES → DEVELOP → REVIEW)
4. Write timestamped response below
5. End with COPILOT_TURN or HUMAN_APPROVAL_NEEDED

COPILOT (Cmd+Shift+R):
1. Read this file ({chat_path})
2. Look for COPILOT_TURN in the last message
3. Review based on phase (PRE-DEV → CODE → FINAL)
4. Write timestamped response below
5. End with CURSOR_TURN or HUMAN_APPROVAL_NEEDED

Keep messages concise. Update dev_log.md with summaries.
-->

# AI Development Chat

## Current Task: None
## Current Phase: PLAN

---

START - Press Cmd+Shift+D in Cursor to begin the first development cycle.
"#
    )
}

pub fn dev_log(now: &DateTime<Local>) -> String {
    format!(
        "# Development Log\n\n\
         Started: {}\n\n\
         ## PREDEVELOPMENT PLAN\n\n\
         ## PREDEVELOPMENT DELIVERABLES\n\n\
         ## POST DEVELOPMENT\n\n\
         ---\n",
        format_timestamp(now)
    )
}

pub fn archived_logs(now: &DateTime<Local>) -> String {
    format!(
        "# Archived Logs\n\n\
         Created: {}\n\n\
         This file stores older conversations and logs for reference.\n\n\
         ---\n",
        format_timestamp(now)
    )
}
