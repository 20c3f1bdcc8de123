//! Read the shared chat log
//!
//! Each message in `ai_chat.md` ends with a turn marker handing control to
//! the other side. The file header also carries the current task and phase:
//!
//! ```text
//! ## Current Task: Add login form
//! ## Current Phase: DEVELOP
//! ...
//! COPILOT_TURN
//! ```
//!
//! A marker only counts on a line of its own; mentions inside a message do
//! not hand over. The instruction block at the top is an HTML comment that
//! mentions every marker, so comments are stripped before looking for them.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

const TASK_HEADING: &str = "## Current Task:";
const PHASE_HEADING: &str = "## Current Phase:";

/// Who acts next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Turn {
    #[serde(rename = "CURSOR_TURN")]
    Cursor,
    #[serde(rename = "COPILOT_TURN")]
    Copilot,
    #[serde(rename = "HUMAN_APPROVAL_NEEDED")]
    HumanApproval,
}

impl Turn {
    pub const ALL: [Turn; 3] = [Turn::Cursor, Turn::Copilot, Turn::HumanApproval];

    /// Marker text as written in the chat
    pub fn marker(&self) -> &'static str {
        match self {
            Turn::Cursor => "CURSOR_TURN",
            Turn::Copilot => "COPILOT_TURN",
            Turn::HumanApproval => "HUMAN_APPROVAL_NEEDED",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Turn::Cursor => "Cursor (Cmd+Shift+D)",
            Turn::Copilot => "Copilot (Cmd+Shift+R)",
            Turn::HumanApproval => "you (human approval needed)",
        }
    }
}

/// Where the collaboration currently stands
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatStatus {
    /// `None` when the header says `None` or is missing
    pub task: Option<String>,
    pub phase: Option<String>,
    /// `None` until the first message hands over a turn
    pub turn: Option<Turn>,
}

/// Parse chat log content
pub fn parse(content: &str) -> ChatStatus {
    let body = strip_comments(content);

    let task = heading_value(&body, TASK_HEADING).filter(|t| !t.eq_ignore_ascii_case("none"));
    let phase = heading_value(&body, PHASE_HEADING);

    let turn = body.lines().rev().find_map(|line| {
        let line = line.trim();
        Turn::ALL.into_iter().find(|turn| turn.marker() == line)
    });

    ChatStatus { task, phase, turn }
}

/// Read and parse a chat log file
pub fn read(path: &Path) -> Result<ChatStatus> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read chat log: {}", path.display()))?;
    Ok(parse(&content))
}

/// Value of the last line starting with `heading`
fn heading_value(body: &str, heading: &str) -> Option<String> {
    body.lines()
        .rev()
        .find_map(|line| line.trim_start().strip_prefix(heading))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Remove `<!-- ... -->` blocks; an unterminated comment runs to the end
fn strip_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start + 4..].find("-->") {
            Some(end) => rest = &rest[start + 4 + end + 3..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}
