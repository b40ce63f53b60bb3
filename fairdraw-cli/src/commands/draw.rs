use super::{outcome_table, parse_game, parse_params};
use crate::config::CliConfig;
use fairdraw_core::{
    commit, compute_outcome, verify_record, CommitHash, CommitmentScheme, GameParams, Outcome,
    Result, RoundBook, RoundRecord, RouletteBet, Seed, Sha3Commitment,
};
use std::path::Path;

pub fn commit_seed() -> Result<bool> {
    let seed = Seed::generate();
    let hash = commit(&seed);

    println!("Commit hash: {}", hash);
    println!("Seed (keep secret until reveal): {}", seed);
    println!();
    println!("After the bet is placed, reveal with:");
    println!("fairdraw verify <game> {} {}", seed, hash);
    Ok(true)
}

pub fn show_outcome(
    config: &CliConfig,
    game: &str,
    seed: &str,
    params: &[String],
    json: bool,
) -> Result<bool> {
    let game = parse_game(game)?;
    let seed = Seed::from_hex(seed)?;
    let params = config.params_for(game, &parse_params(params)?);
    let outcome = compute_outcome(game, &seed, &params);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.summary());
        println!("{}", outcome_table(&outcome));
        print_wager(&outcome, &params)?;
    }
    Ok(true)
}

fn print_wager(outcome: &Outcome, params: &GameParams) -> Result<()> {
    if let Outcome::Roulette(_) = outcome {
        if let Some(bet) = RouletteBet::from_params(params)? {
            println!("Wager on {}: {}x", bet, outcome.settlement_multiplier(params)?);
        }
    }
    Ok(())
}

pub async fn verify(
    config: &CliConfig,
    game: &str,
    seed: &str,
    commit_hex: &str,
    params: &[String],
    expect: Option<&Path>,
) -> Result<bool> {
    let game = parse_game(game)?;
    let seed = Seed::from_hex(seed)?;
    let commit_hash = CommitHash::from_hex(commit_hex)?;
    let params = config.params_for(game, &parse_params(params)?);

    let commit_matches = Sha3Commitment::verify(&commit_hash, &seed);
    let recomputed = compute_outcome(game, &seed, &params);

    println!("Commit: {}", if commit_matches { "OK" } else { "MISMATCH" });
    println!("Outcome: {}", recomputed.summary());

    let mut valid = commit_matches;
    if let Some(path) = expect {
        let content = tokio::fs::read_to_string(path).await?;
        let expected: Outcome = serde_json::from_str(&content)?;
        let outcome_matches = expected == recomputed;
        println!(
            "Recorded outcome: {}",
            if outcome_matches { "OK" } else { "MISMATCH" }
        );
        if !outcome_matches {
            println!("  recorded:   {}", expected.summary());
            println!("  recomputed: {}", recomputed.summary());
        }
        valid &= outcome_matches;
    }

    Ok(valid)
}

pub async fn audit(path: &Path) -> Result<bool> {
    let content = tokio::fs::read_to_string(path).await?;
    let record = RoundRecord::from_json(&content)?;
    let check = verify_record(&record);

    println!("Game: {}", record.game_type);
    println!("Commit: {}", if check.commit_matches { "OK" } else { "MISMATCH" });
    println!(
        "Outcome: {}",
        if check.outcome_matches { "OK" } else { "MISMATCH" }
    );
    println!("{}", outcome_table(&check.recomputed));
    Ok(check.is_valid())
}

/// Run one full round locally: commit, place, reveal.
pub fn play(config: &CliConfig, game: &str, bet: u64, params: &[String]) -> Result<bool> {
    let game = parse_game(game)?;
    let params = config.params_for(game, &parse_params(params)?);
    let book = RoundBook::new(config.book_config())?;

    let seed = Seed::generate();
    let id = book.place_bet(game, bet, commit(&seed), params)?;
    let settled = book.reveal(id, &seed)?;

    println!("Round {} settled", settled.id);
    println!("Game: {}", settled.game_type);
    println!("Commit hash: {}", settled.commit_hash);
    println!("Seed: {}", settled.seed);
    println!("{}", settled.outcome.summary());
    println!("{}", outcome_table(&settled.outcome));
    print_wager(&settled.outcome, &settled.params)?;
    println!("Bet: {}  Payout: {}", settled.bet, settled.payout);
    println!();
    println!("Round record:");
    println!("{}", serde_json::to_string_pretty(&settled.record())?);
    Ok(true)
}
