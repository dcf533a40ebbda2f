use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Use the library modules
use sectorup::commands;

#[derive(Parser)]
#[clap(name = "sectorup")]
#[clap(about = "EuroScope sector data updater")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Configuration file (default: ./config.json, then ~/.sectorup/config.json)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download current sector data and update local profiles and scopes
    Update {
        /// Only update this FIR
        #[clap(long)]
        fir: Option<String>,
    },
    /// Resolve the current download links without downloading anything
    Check {
        /// Only check this FIR
        #[clap(long)]
        fir: Option<String>,
    },
    /// List configured FIRs
    List,
    /// Write a starter configuration file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Update { fir } => {
            commands::update::update_all(config, fir.as_deref()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { fir } => {
            commands::check::check(config, fir.as_deref()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::List => commands::list::list_entries(config).map_err(|e| anyhow::anyhow!(e)),
        Commands::Init => commands::init::init_config(config).map_err(|e| anyhow::anyhow!(e)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
