use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Set up shared logs for AI pair development", long_about = None)]
struct Cli {
    /// Defaults to `init`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the log directory and any missing log files
    Init,

    /// Show the current task, phase and whose turn it is
    Status {
        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Init) {
        Commands::Init => {
            commands::init::execute()?;
        }
        Commands::Status { json } => {
            commands::status::execute(json)?;
        }
    }

    Ok(())
}
