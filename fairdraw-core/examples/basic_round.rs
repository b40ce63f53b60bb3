use fairdraw_core::{commit, verify_record, BookConfig, GameParams, GameType, RoundBook, Seed};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let book = RoundBook::new(BookConfig::default())?;

    // Commit before the bet
    let seed = Seed::generate();
    let commit_hash = commit(&seed);
    println!("Commit hash: {}", commit_hash);

    let params = GameParams::new().with("rows", 12);
    let id = book.place_bet(GameType::Plinko, 1_000, commit_hash, params)?;
    println!("Placed round {}", id);

    // Reveal and settle
    let settled = book.reveal(id, &seed)?;
    println!("Seed: {}", settled.seed);
    println!("{}", settled.outcome);
    println!("Payout: {}", settled.payout);

    // Anyone holding the record can re-check it
    let check = verify_record(&settled.record());
    println!("\nRecord verifies: {}", check.is_valid());

    Ok(())
}
