//! Provably fair outcome generation
//!
//! A round commits to `SHA3-256(seed)` before the bet, reveals the 32-byte
//! seed afterwards, and derives its result with [`compute_outcome`]. Anyone
//! holding the revealed seed can re-run the same derivation and check it
//! against the commit.

pub mod commitment;
pub mod error;
pub mod games;
pub mod outcome;
pub mod params;
pub mod round;
pub mod simulate;

pub use commitment::{
    commit, verify_record, CommitHash, CommitmentScheme, RoundRecord, Seed, Sha3Commitment,
    Verification,
};
pub use error::{FairdrawError, Result};
pub use games::mines::cash_out_multiplier;
pub use games::roulette::{bet_multiplier, RouletteBet};
pub use outcome::{compute_outcome, compute_outcome_named, GameType, Outcome};
pub use params::GameParams;
pub use round::{BookConfig, BookTotals, PendingRound, RoundBook, RoundId, SettledRound};
pub use simulate::{simulate, SimulationReport};
