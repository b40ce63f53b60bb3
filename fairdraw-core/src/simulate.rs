//! Reproducible return-to-player estimates.
//!
//! Seeds are chained with SHA-256 from a caller supplied start seed, so the
//! same start always produces the same report.

use crate::{compute_outcome, GameParams, GameType, Seed};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub game_type: GameType,
    pub rounds: u64,
    /// Mean multiplier over all rounds
    pub rtp: f64,
    pub min_multiplier: f64,
    pub max_multiplier: f64,
    /// Share of rounds paying more than the stake
    pub win_rate: f64,
    /// Rounds per multiplier, keyed in hundredths
    pub histogram: BTreeMap<u64, u64>,
}

pub fn next_seed(seed: &Seed) -> Seed {
    let digest: [u8; 32] = Sha256::digest(seed.as_bytes()).into();
    Seed::from_bytes(digest)
}

pub fn simulate(game_type: GameType, params: &GameParams, start: &Seed, rounds: u64) -> SimulationReport {
    let mut seed = *start;
    let mut total = 0.0;
    let mut wins = 0u64;
    let mut min_multiplier = f64::INFINITY;
    let mut max_multiplier = f64::NEG_INFINITY;
    let mut histogram = BTreeMap::new();

    for _ in 0..rounds {
        let outcome = compute_outcome(game_type, &seed, params);
        let multiplier = outcome.multiplier();

        total += multiplier;
        if multiplier > 1.0 {
            wins += 1;
        }
        min_multiplier = min_multiplier.min(multiplier);
        max_multiplier = max_multiplier.max(multiplier);
        *histogram.entry(outcome.multiplier_percent()).or_insert(0) += 1;

        seed = next_seed(&seed);
    }

    tracing::debug!("Simulated {} rounds of {}", rounds, game_type);

    if rounds == 0 {
        return SimulationReport {
            game_type,
            rounds,
            rtp: 0.0,
            min_multiplier: 0.0,
            max_multiplier: 0.0,
            win_rate: 0.0,
            histogram,
        };
    }

    SimulationReport {
        game_type,
        rounds,
        rtp: total / rounds as f64,
        min_multiplier,
        max_multiplier,
        win_rate: wins as f64 / rounds as f64,
        histogram,
    }
}
