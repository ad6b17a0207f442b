use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "duewise-cli", version, about = "DueWise CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a task snapshot by urgency
    Rank {
        /// Path to a JSON file holding an array of tasks
        file: PathBuf,
        /// Reference instant (RFC 3339); defaults to the current time
        #[arg(long)]
        now: Option<String>,
    },
    /// Show only the recommended next task
    Next {
        /// Path to a JSON file holding an array of tasks
        file: PathBuf,
        /// Reference instant (RFC 3339); defaults to the current time
        #[arg(long)]
        now: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Rank { file, now } => commands::rank::run(&file, now.as_deref()),
        Commands::Next { file, now } => commands::next::run(&file, now.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
