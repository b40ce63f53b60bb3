use super::{parse_game, parse_params};
use crate::config::CliConfig;
use comfy_table::{presets::UTF8_FULL, Table};
use fairdraw_core::{cash_out_multiplier, simulate, GameType, Result, Seed};

pub fn run_simulation(
    config: &CliConfig,
    game: &str,
    rounds: Option<u64>,
    seed: Option<&str>,
    params: &[String],
) -> Result<bool> {
    let game = parse_game(game)?;
    let params = config.params_for(game, &parse_params(params)?);
    let rounds = rounds.unwrap_or(config.simulation_rounds);
    let start = match seed {
        Some(hex) => Seed::from_hex(hex)?,
        None => Seed::generate(),
    };

    let report = simulate(game, &params, &start, rounds);

    println!("Simulated {} rounds of {}", report.rounds, report.game_type);
    println!("Start seed: {}", start);
    println!("RTP: {:.4}", report.rtp);
    println!("Win rate: {:.2}%", report.win_rate * 100.0);
    println!(
        "Multiplier range: {}x - {}x",
        report.min_multiplier, report.max_multiplier
    );
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Multiplier", "Rounds", "Share"]);
    for (percent, count) in &report.histogram {
        table.add_row(vec![
            format!("{}x", *percent as f64 / 100.0),
            count.to_string(),
            format!("{:.2}%", *count as f64 * 100.0 / report.rounds as f64),
        ]);
    }
    println!("{}", table);
    Ok(true)
}

pub fn cash_out(config: &CliConfig, params: &[String]) -> Result<bool> {
    let params = config.params_for(GameType::Mines, &parse_params(params)?);
    let (cells, mines, revealed) = (params.total_cells(), params.num_mines(), params.revealed());
    let multiplier = cash_out_multiplier(cells, mines, revealed);
    println!(
        "{} safe picks on {} cells with {} mines: {}x",
        revealed.min(cells.saturating_sub(mines)),
        cells,
        mines.min(cells),
        multiplier
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairdraw_core::{FairdrawError, GameParams};

    #[test]
    fn test_cash_out_reads_params() {
        let mut config = CliConfig::default();
        config
            .defaults
            .insert("mines".to_string(), GameParams::new().with("numMines", 24));

        assert!(cash_out(&config, &["revealed=1".to_string()]).unwrap());
        assert!(matches!(
            cash_out(&config, &["revealed".to_string()]),
            Err(FairdrawError::InvalidParams(_))
        ));
    }
}
