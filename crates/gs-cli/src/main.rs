//! CLI frontend for the gacha pull simulator.

mod commands;
mod session;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gacha",
    about = "Gacha pull simulator with pity, banners and milestone rewards",
    version,
    propagate_version = true
)]
struct Cli {
    /// Catalog JSON file (default: built-in catalog)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive pull session on stdin
    Play {
        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run a batch of pulls and print a summary
    Simulate {
        /// Number of counted pulls to make
        #[arg(short, long, default_value = "100")]
        pulls: u32,

        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Redeem bonus ten-pull tickets as soon as they are granted
        #[arg(short, long)]
        use_tickets: bool,

        /// Print the final state as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// List the banner rotation
    Banners,

    /// List catalog entities
    Roster {
        /// Only show one rarity (4, 5 or 6)
        #[arg(short, long)]
        rarity: Option<u8>,
    },

    /// Show the 6-star rate for each pity value
    Odds,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let catalog = cli.catalog.as_deref();

    let result = match cli.command {
        Commands::Play { seed } => commands::play::run(catalog, seed),
        Commands::Simulate {
            pulls,
            seed,
            use_tickets,
            json,
        } => commands::simulate::run(catalog, pulls, seed, use_tickets, json),
        Commands::Banners => commands::banners::run(catalog),
        Commands::Roster { rarity } => commands::roster::run(catalog, rarity),
        Commands::Odds => commands::odds::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
