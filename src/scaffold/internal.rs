//! Filesystem operations behind the scaffold

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use super::Outcome;

/// Debug logging for the scaffold (enabled with DUET_LOG)
fn log_debug(msg: &str) {
    if std::env::var("DUET_LOG").is_ok() {
        eprintln!("[DEBUG duet::scaffold] {}", msg);
    }
}

/// Create a directory and any missing parents
pub(super) fn ensure_dir(path: &Path) -> Result<Outcome> {
    if path.is_dir() {
        log_debug(&format!("{} exists", path.display()));
        return Ok(Outcome::AlreadyExists);
    }

    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    log_debug(&format!("created {}", path.display()));

    Ok(Outcome::Created)
}

/// Write `content` to a new file, leaving any existing file untouched
///
/// The existence check and the create are a single `create_new` open, so a
/// concurrent run can never overwrite a file this one wrote.
pub(super) fn create_if_absent(path: &Path, content: &str) -> Result<Outcome> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            log_debug(&format!("{} exists, skipping", path.display()));
            return Ok(Outcome::AlreadyExists);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create {}", path.display()));
        }
    };

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log_debug(&format!("wrote {} bytes to {}", content.len(), path.display()));

    Ok(Outcome::Created)
}
