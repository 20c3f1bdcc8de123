pub mod chat;
pub mod paths;
pub mod scaffold;

// Re-export commonly used types
pub use chat::{ChatStatus, Turn};
pub use scaffold::{Artifact, InitReport, Outcome, Scaffold};
