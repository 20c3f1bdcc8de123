//! Internal implementation for init command

pub mod instructions;

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use duet::paths;
use duet::scaffold::{Artifact, InitReport, Scaffold};

use self::instructions::{rule, setup_steps, structure_tree};

const BANNER: &str = "🚀 Initializing AI Collaboration System...";
const INSTRUCTIONS_HEADING: &str = "📋 SETUP INSTRUCTIONS";

/// Main execution logic for init command
pub fn execute_init(root: &Path) -> Result<()> {
    println!("{BANNER}");

    let scaffold = Scaffold::new(root, paths::logs::DEFAULT_DIR);
    let report = scaffold.init().with_context(|| {
        format!(
            "Failed to initialize logs in {}",
            scaffold.log_path().display()
        )
    })?;

    for line in render(&report) {
        if line == INSTRUCTIONS_HEADING {
            println!("{}", line.bold());
        } else if line.starts_with('✨') {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }

    Ok(())
}

/// Everything printed after the banner, one string per line
fn render(report: &InitReport) -> Vec<String> {
    let mut lines = report.status_lines();

    lines.push(String::new());
    lines.push(rule());
    lines.push(INSTRUCTIONS_HEADING.to_string());
    lines.push(rule());
    lines.extend(setup_steps(report));

    lines.push(String::new());
    lines.push(rule());
    lines.push(format!(
        "✨ Ready! The AIs will communicate through {}",
        report.display_path(Artifact::ChatLog)
    ));
    lines.push(rule());

    lines.push(String::new());
    lines.push("📁 Created structure:".to_string());
    lines.extend(structure_tree(report));
    lines.push(rule());

    lines
}
