mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use fairdraw_core::{FairdrawError, GameType};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "fairdraw")]
#[command(about = "Provably fair commit-reveal outcomes for roulette, plinko, mines and wheel")]
#[command(version)]
struct Cli {
    /// Data directory holding config.json
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh seed and its commit hash
    Commit,
    /// Compute the outcome a seed produces
    Outcome {
        /// Game type (roulette, plinko, mines, wheel)
        game: String,
        /// Seed (hex encoded, 32 bytes)
        seed: String,
        /// Game parameter as key=value, e.g. rows=12
        #[arg(short = 'p', long = "param")]
        params: Vec<String>,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a revealed seed against its commit hash
    Verify {
        /// Game type
        game: String,
        /// Revealed seed (hex encoded)
        seed: String,
        /// Commit hash published before the bet (hex encoded)
        commit: String,
        /// Game parameter as key=value
        #[arg(short = 'p', long = "param")]
        params: Vec<String>,
        /// JSON file with the recorded outcome to compare against
        #[arg(long)]
        expect: Option<PathBuf>,
    },
    /// Verify a round record produced by `play`
    Audit {
        /// Path to the round record JSON
        record: PathBuf,
    },
    /// Play one local round: commit, bet, reveal
    Play {
        /// Game type
        game: String,
        /// Bet amount in base units
        #[arg(short, long)]
        bet: u64,
        /// Game parameter as key=value
        #[arg(short = 'p', long = "param")]
        params: Vec<String>,
    },
    /// Estimate return to player over a reproducible seed chain
    Simulate {
        /// Game type
        game: String,
        /// Number of rounds (defaults to the configured count)
        #[arg(short, long)]
        rounds: Option<u64>,
        /// Start seed (hex encoded); random if omitted
        #[arg(short, long)]
        seed: Option<String>,
        /// Game parameter as key=value
        #[arg(short = 'p', long = "param")]
        params: Vec<String>,
    },
    /// Mines cash-out multiplier after a number of safe picks
    CashOut {
        /// Mines parameter as key=value: totalCells, numMines, revealed
        #[arg(short = 'p', long = "param")]
        params: Vec<String>,
    },
    /// Configuration commands
    #[command(subcommand)]
    Config(commands::ConfigCommands),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("fairdraw={},fairdraw_core={}", log_level, log_level))
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get data directory
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fairdraw")
    });

    // Ensure data directory exists
    tokio::fs::create_dir_all(&data_dir).await?;

    let result = match CliConfig::load(&data_dir).await {
        Ok(config) => run(cli.command, &config, &data_dir).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            match e {
                FairdrawError::UnsupportedGameType(game) => {
                    eprintln!("Error: Unsupported game type '{}'", game);
                    let names: Vec<&str> = GameType::ALL.iter().map(|g| g.name()).collect();
                    eprintln!("Supported games: {}", names.join(", "));
                }
                FairdrawError::InvalidSeed(reason) => {
                    eprintln!("Error: Invalid seed: {}", reason);
                    eprintln!("A seed is 32 bytes written as 64 hex characters");
                }
                FairdrawError::InvalidParams(reason) => {
                    eprintln!("Error: Invalid game parameters: {}", reason);
                    eprintln!("Pass parameters as -p key=value, e.g. -p rows=12");
                }
                _ => {
                    eprintln!("Error: {}", e);
                }
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run(command: Commands, config: &CliConfig, data_dir: &std::path::Path) -> fairdraw_core::Result<bool> {
    match command {
        Commands::Commit => commands::commit_seed(),
        Commands::Outcome {
            game,
            seed,
            params,
            json,
        } => commands::show_outcome(config, &game, &seed, &params, json),
        Commands::Verify {
            game,
            seed,
            commit,
            params,
            expect,
        } => commands::verify(config, &game, &seed, &commit, &params, expect.as_deref()).await,
        Commands::Audit { record } => commands::audit(&record).await,
        Commands::Play { game, bet, params } => commands::play(config, &game, bet, &params),
        Commands::Simulate {
            game,
            rounds,
            seed,
            params,
        } => commands::run_simulation(config, &game, rounds, seed.as_deref(), &params),
        Commands::CashOut { params } => commands::cash_out(config, &params),
        Commands::Config(cmd) => commands::handle_config_command(cmd, config, data_dir).await,
    }
}
