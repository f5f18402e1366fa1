use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod generate;
mod render;
mod scan;
mod types;
mod utils;

#[derive(Parser)]
#[command(name = "nav-gen")]
#[command(about = "Navigation page generator for app_<id>_<slug>.html pages")]
struct Cli {
    /// Directory containing the app pages (outputs are written here too)
    #[arg(short, long, global = true, default_value = ".")]
    dir: PathBuf,

    /// Quiet mode - suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate index.html and navigation.html (default)
    Generate,
    /// List discovered apps, sorted by id
    List {
        /// Print the apps as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => generate::run_generate(&cli.dir, cli.quiet),
        Commands::List { json } => generate::run_list(&cli.dir, json, cli.quiet),
    }
}
