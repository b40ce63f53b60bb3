pub mod draw;
pub mod stats;

pub use draw::{audit, commit_seed, play, show_outcome, verify};
pub use stats::{cash_out, run_simulation};

use crate::config::CliConfig;
use clap::Subcommand;
use comfy_table::{presets::UTF8_FULL, Table};
use fairdraw_core::{GameParams, GameType, Outcome, Result};
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the active configuration
    Show,
    /// Write a default config file to the data directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn handle_config_command(
    cmd: ConfigCommands,
    config: &CliConfig,
    data_dir: &Path,
) -> Result<bool> {
    match cmd {
        ConfigCommands::Show => {
            println!("Config file: {}", CliConfig::path(data_dir).display());
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        ConfigCommands::Init { force } => {
            let path = CliConfig::path(data_dir);
            if path.exists() && !force {
                println!("Config already exists at {}", path.display());
                println!("Use --force to overwrite it");
                return Ok(false);
            }
            CliConfig::default().save(data_dir).await?;
            println!("Wrote default config to {}", path.display());
        }
    }
    Ok(true)
}

pub(crate) fn parse_game(name: &str) -> Result<GameType> {
    name.parse()
}

pub(crate) fn parse_params(pairs: &[String]) -> Result<GameParams> {
    GameParams::from_pairs(pairs)
}

pub(crate) fn outcome_table(outcome: &Outcome) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);

    let rows: Vec<(&str, String)> = match outcome {
        Outcome::Roulette(r) => vec![
            ("Result", r.result.to_string()),
            ("Color", r.color.to_string()),
            ("Even", r.is_even.to_string()),
            ("Odd", r.is_odd.to_string()),
            ("High", r.is_high.to_string()),
            ("Low", r.is_low.to_string()),
        ],
        Outcome::Plinko(p) => vec![
            ("Rows", p.rows.to_string()),
            ("Final position", p.final_position.to_string()),
            ("Path", p.path.clone()),
        ],
        Outcome::Mines(m) => vec![
            ("Total cells", m.total_cells.to_string()),
            ("Mines", m.num_mines.to_string()),
            ("Safe cells", m.safe_cells.to_string()),
            (
                "Positions",
                m.mine_positions
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        ],
        Outcome::Wheel(w) => vec![
            ("Segments", w.segments.to_string()),
            ("Segment", w.segment.to_string()),
        ],
    };

    for (field, value) in rows {
        table.add_row(vec![field.to_string(), value]);
    }
    table.add_row(vec!["Multiplier".to_string(), format!("{}x", outcome.multiplier())]);
    table
}
