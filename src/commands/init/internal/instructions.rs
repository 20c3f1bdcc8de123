//! Setup instructions printed after the scaffold runs

use duet::scaffold::{Artifact, InitReport};

pub const RULE_WIDTH: usize = 60;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Editor setup steps, one string per printed line
pub fn setup_steps(report: &InitReport) -> Vec<String> {
    let chat = report.display_path(Artifact::ChatLog);
    let prompt = format!("'Read {chat} and follow the instructions at the top'");

    vec![
        String::new(),
        "1️⃣  In Cursor, set up this keyboard shortcut:".to_string(),
        "   Cmd/Ctrl + Shift + D → Triggers development cycle".to_string(),
        String::new(),
        "   Give Cursor this simple instruction:".to_string(),
        format!("   {prompt}"),
        String::new(),
        "2️⃣  In VSCode with Copilot, set up:".to_string(),
        "   Cmd/Ctrl + Shift + R → Triggers review cycle".to_string(),
        String::new(),
        "   Give Copilot this simple instruction:".to_string(),
        format!("   {prompt}"),
        String::new(),
        "3️⃣  Check where things stand (optional):".to_string(),
        "   duet status".to_string(),
        String::new(),
        "4️⃣  Start development:".to_string(),
        "   Press Cmd+Shift+D in Cursor".to_string(),
    ]
}

/// Directory tree with each file's role
pub fn structure_tree(report: &InitReport) -> Vec<String> {
    let width = Artifact::FILES
        .iter()
        .filter_map(|a| a.file_name())
        .map(str::len)
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!("   {}", report.display_path(Artifact::LogDirectory))];
    for (i, artifact) in Artifact::FILES.iter().enumerate() {
        let Some(name) = artifact.file_name() else {
            continue;
        };
        let branch = if i + 1 == Artifact::FILES.len() {
            "└──"
        } else {
            "├──"
        };
        lines.push(format!(
            "   {branch} {name:<width$} ({})",
            artifact.role()
        ));
    }
    lines
}
