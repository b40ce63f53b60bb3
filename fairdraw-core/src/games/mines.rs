use crate::Seed;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinesOutcome {
    /// Cell indices in the order they were drawn.
    pub mine_positions: Vec<u32>,
    pub total_cells: u32,
    pub num_mines: u32,
    pub safe_cells: u32,
    pub multiplier: f64,
    pub summary: String,
}

/// Place up to `num_mines` mines on a `total_cells` board.
///
/// Mine `i` takes `SHA-256(seed || i as u8)`, reads the first four bytes
/// big-endian, and picks that index (mod the remaining count) out of the
/// cells not yet mined.
pub fn calculate(seed: &Seed, total_cells: u32, num_mines: u32) -> MinesOutcome {
    let mut mine_positions = Vec::new();
    // ascending copy of `mine_positions`, used to skip already mined cells
    let mut taken: Vec<u32> = Vec::new();

    for i in 0..num_mines {
        let remaining = total_cells - taken.len() as u32;
        if remaining == 0 {
            break;
        }

        let mut hasher = Sha256::new();
        hasher.update(seed.as_bytes());
        hasher.update([i as u8]);
        let hash = hasher.finalize();
        let draw = u32::from_be_bytes([hash[0], hash[1], hash[2], hash[3]]);

        let cell = nth_available(&taken, draw % remaining);
        let slot = taken.partition_point(|&c| c < cell);
        taken.insert(slot, cell);
        mine_positions.push(cell);
    }

    let placed = mine_positions.len() as u32;
    MinesOutcome {
        total_cells,
        num_mines: placed,
        safe_cells: total_cells - placed,
        multiplier: flat_multiplier(placed),
        summary: format!("{} mines placed", placed),
        mine_positions,
    }
}

/// `index`-th cell (0-based) not present in the sorted `taken` list.
fn nth_available(taken: &[u32], index: u32) -> u32 {
    let mut cell = index;
    for &t in taken {
        if t <= cell {
            cell += 1;
        } else {
            break;
        }
    }
    cell
}

/// `1 + 0.2 × mines`, carried on every mines outcome.
pub fn flat_multiplier(num_mines: u32) -> f64 {
    (5.0 + num_mines as f64) / 5.0
}

/// Cash-out odds after `revealed` safe picks: the product of
/// `(total - i) / (safe - i)`, rounded to two decimals.
///
/// Not applied to [`MinesOutcome::multiplier`].
pub fn cash_out_multiplier(total_cells: u32, num_mines: u32, revealed: u32) -> f64 {
    let num_mines = num_mines.min(total_cells);
    let safe = total_cells - num_mines;
    let revealed = revealed.min(safe);

    let mut multiplier = 1.0;
    for i in 0..revealed {
        multiplier *= (total_cells - i) as f64 / (safe - i) as f64;
    }
    (multiplier * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_positions() {
        let outcome = calculate(&Seed::from_bytes([0u8; 32]), 25, 5);
        assert_eq!(outcome.mine_positions, vec![20, 21, 5, 22, 24]);
        assert_eq!(outcome.safe_cells, 20);
        assert_eq!(outcome.multiplier, 2.0);
        assert_eq!(outcome.summary, "5 mines placed");

        let outcome = calculate(&Seed::from_bytes([1u8; 32]), 25, 5);
        assert_eq!(outcome.mine_positions, vec![18, 13, 24, 23, 14]);
    }

    #[test]
    fn test_stops_when_board_is_full() {
        let outcome = calculate(&Seed::from_bytes([0u8; 32]), 3, 5);
        assert_eq!(outcome.mine_positions, vec![1, 0, 2]);
        assert_eq!(outcome.num_mines, 3);
        assert_eq!(outcome.safe_cells, 0);
    }

    #[test]
    fn test_empty_board() {
        let outcome = calculate(&Seed::generate(), 0, 5);
        assert!(outcome.mine_positions.is_empty());
        assert_eq!(outcome.multiplier, 1.0);
    }

    #[test]
    fn test_nth_available() {
        assert_eq!(nth_available(&[], 3), 3);
        assert_eq!(nth_available(&[0, 1, 2], 0), 3);
        assert_eq!(nth_available(&[1, 4], 1), 2);
        assert_eq!(nth_available(&[1, 4], 3), 5);
    }

    #[test]
    fn test_flat_multiplier() {
        assert_eq!(flat_multiplier(0), 1.0);
        assert_eq!(flat_multiplier(3), 1.6);
        assert_eq!(flat_multiplier(24), 5.8);
    }

    #[test]
    fn test_cash_out_multiplier() {
        assert_eq!(cash_out_multiplier(25, 5, 0), 1.0);
        // 25/20
        assert_eq!(cash_out_multiplier(25, 5, 1), 1.25);
        // 25/20 * 24/19
        assert_eq!(cash_out_multiplier(25, 5, 2), 1.58);
        // clamped to one safe cell
        assert_eq!(cash_out_multiplier(25, 24, 3), 25.0);
        assert_eq!(cash_out_multiplier(4, 9, 2), 1.0);
    }
}
