//! Initialize the AI collaboration logs in the current directory
//!
//! Public interface only; the work happens in `internal/`.

mod internal;

use anyhow::Result;

/// Execute the init command
///
/// # Process
///
/// 1. **Scaffold**: Creates `logs/` and any missing log files
/// 2. **Report**: Prints what was created and what already existed
/// 3. **Instructions**: Prints the editor setup steps
///
/// Existing files are never modified, so this is safe to re-run.
///
/// # Errors
///
/// Returns an error if the log directory or a missing file cannot be created.
pub fn execute() -> Result<()> {
    let root = std::env::current_dir()?;
    internal::execute_init(&root)
}
