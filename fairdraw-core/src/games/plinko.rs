use crate::Seed;
use serde::{Deserialize, Serialize};

/// Payout by distance from the centre slot; distances past the end use the last rung.
pub const MULTIPLIER_LADDER: [f64; 9] = [1.0, 1.2, 1.5, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlinkoOutcome {
    pub rows: u32,
    pub final_position: u32,
    /// One `R` or `L` per row.
    pub path: String,
    pub multiplier: f64,
    pub summary: String,
}

/// Drop a ball through `rows` pegs, starting at slot `rows / 2`.
///
/// Step `i` reads bit `i % 8` of seed byte `(i / 8) % 32`: set moves right,
/// clear moves left, clamped to `[0, rows]`.
pub fn calculate(seed: &Seed, rows: u32) -> PlinkoOutcome {
    let bytes = seed.as_bytes();
    let center = rows / 2;
    let mut position = center;
    let mut path = String::new();

    for i in 0..rows as usize {
        let byte = bytes[(i / 8) % bytes.len()];
        let go_right = (byte >> (i % 8)) & 1 == 1;

        if go_right {
            position = (position + 1).min(rows);
            path.push('R');
        } else {
            position = position.saturating_sub(1);
            path.push('L');
        }
    }

    let distance = position.abs_diff(center) as usize;
    let multiplier = MULTIPLIER_LADDER[distance.min(MULTIPLIER_LADDER.len() - 1)];

    PlinkoOutcome {
        rows,
        final_position: position,
        summary: format!("Ball landed at position {} ({}x)", position, multiplier),
        path,
        multiplier,
    }
}
