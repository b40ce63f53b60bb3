use crate::params::DEFAULT_SEGMENTS;
use crate::Seed;
use serde::{Deserialize, Serialize};

pub const MULTIPLIER_LADDER: [f64; 8] = [1.0, 1.5, 2.0, 0.5, 3.0, 1.0, 5.0, 0.5];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelOutcome {
    pub segments: u32,
    pub segment: u32,
    pub multiplier: f64,
    pub summary: String,
}

pub fn calculate(seed: &Seed, segments: u32) -> WheelOutcome {
    let segments = if segments == 0 { DEFAULT_SEGMENTS } else { segments };
    let segment = seed.seed_number() % segments;
    let multiplier = MULTIPLIER_LADDER[segment as usize % MULTIPLIER_LADDER.len()];

    WheelOutcome {
        segments,
        segment,
        multiplier,
        summary: format!("Wheel stopped at segment {} ({}x)", segment, multiplier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_with_number(n: u32) -> Seed {
        let mut bytes = [0u8; 32];
        bytes[..4].copy_from_slice(&n.to_be_bytes());
        Seed::from_bytes(bytes)
    }

    #[test]
    fn test_segment_ten_of_eight() {
        let outcome = calculate(&seed_with_number(10), 8);
        assert_eq!(outcome.segment, 2);
        assert_eq!(outcome.multiplier, 2.0);
        assert_eq!(outcome.summary, "Wheel stopped at segment 2 (2x)");
    }

    #[test]
    fn test_ladder_repeats_on_large_wheels() {
        let outcome = calculate(&seed_with_number(14), 20);
        assert_eq!(outcome.segment, 14);
        assert_eq!(outcome.multiplier, MULTIPLIER_LADDER[6]);
        assert_eq!(outcome.summary, "Wheel stopped at segment 14 (5x)");
    }

    #[test]
    fn test_zero_segments_uses_default() {
        let outcome = calculate(&seed_with_number(11), 0);
        assert_eq!(outcome.segments, 8);
        assert_eq!(outcome.segment, 3);
        assert_eq!(outcome.multiplier, 0.5);
    }
}
