use crate::games::{mines, plinko, roulette, wheel};
use crate::games::{MinesOutcome, PlinkoOutcome, RouletteBet, RouletteOutcome, WheelOutcome};
use crate::{FairdrawError, GameParams, Result, Seed};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The games the generator can draw for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum GameType {
    Roulette,
    Plinko,
    Mines,
    Wheel,
}

impl GameType {
    pub const ALL: [GameType; 4] = [
        GameType::Roulette,
        GameType::Plinko,
        GameType::Mines,
        GameType::Wheel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GameType::Roulette => "Roulette",
            GameType::Plinko => "Plinko",
            GameType::Mines => "Mines",
            GameType::Wheel => "Wheel",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive; anything else is `UnsupportedGameType`.
impl FromStr for GameType {
    type Err = FairdrawError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        GameType::ALL
            .into_iter()
            .find(|game| game.name().eq_ignore_ascii_case(tag))
            .ok_or_else(|| FairdrawError::UnsupportedGameType(tag.to_string()))
    }
}

impl TryFrom<String> for GameType {
    type Error = FairdrawError;

    fn try_from(tag: String) -> Result<Self> {
        tag.parse()
    }
}

/// Result of one draw, one shape per game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "lowercase")]
pub enum Outcome {
    Roulette(RouletteOutcome),
    Plinko(PlinkoOutcome),
    Mines(MinesOutcome),
    Wheel(WheelOutcome),
}

impl Outcome {
    pub fn game_type(&self) -> GameType {
        match self {
            Outcome::Roulette(_) => GameType::Roulette,
            Outcome::Plinko(_) => GameType::Plinko,
            Outcome::Mines(_) => GameType::Mines,
            Outcome::Wheel(_) => GameType::Wheel,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Outcome::Roulette(o) => o.multiplier,
            Outcome::Plinko(o) => o.multiplier,
            Outcome::Mines(o) => o.multiplier,
            Outcome::Wheel(o) => o.multiplier,
        }
    }

    pub fn summary(&self) -> &str {
        match self {
            Outcome::Roulette(o) => &o.summary,
            Outcome::Plinko(o) => &o.summary,
            Outcome::Mines(o) => &o.summary,
            Outcome::Wheel(o) => &o.summary,
        }
    }

    /// Multiplier in hundredths (`2.0` is `200`).
    pub fn multiplier_percent(&self) -> u64 {
        to_percent(self.multiplier())
    }

    /// `bet × multiplier` in integer base units, rounded down.
    pub fn payout(&self, bet: u64) -> u64 {
        payout_at(bet, self.multiplier_percent())
    }

    /// Multiplier a wager settles at. A roulette bet in `params` pays by
    /// its own table; every other round pays the outcome multiplier.
    pub fn settlement_multiplier(&self, params: &GameParams) -> Result<f64> {
        if let Outcome::Roulette(spin) = self {
            if let Some(bet) = RouletteBet::from_params(params)? {
                return Ok(roulette::bet_multiplier(spin, &bet));
            }
        }
        Ok(self.multiplier())
    }

    /// Payout for `bet` at [`Outcome::settlement_multiplier`].
    pub fn settle(&self, bet: u64, params: &GameParams) -> Result<u64> {
        let multiplier = self.settlement_multiplier(params)?;
        Ok(payout_at(bet, to_percent(multiplier)))
    }
}

fn to_percent(multiplier: f64) -> u64 {
    (multiplier * 100.0).round() as u64
}

fn payout_at(bet: u64, percent: u64) -> u64 {
    let payout = bet as u128 * percent as u128 / 100;
    u64::try_from(payout).unwrap_or(u64::MAX)
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.summary())
    }
}

/// Derive the outcome the authority computes for `seed`.
///
/// Pure: the same `(game_type, seed, params)` always gives an equal outcome.
pub fn compute_outcome(game_type: GameType, seed: &Seed, params: &GameParams) -> Outcome {
    match game_type {
        GameType::Roulette => Outcome::Roulette(roulette::calculate(seed)),
        GameType::Plinko => Outcome::Plinko(plinko::calculate(seed, params.rows())),
        GameType::Mines => Outcome::Mines(mines::calculate(
            seed,
            params.total_cells(),
            params.num_mines(),
        )),
        GameType::Wheel => Outcome::Wheel(wheel::calculate(seed, params.segments())),
    }
}

/// Entry point for game tags from untrusted input.
pub fn compute_outcome_named(game_type: &str, seed: &Seed, params: &GameParams) -> Result<Outcome> {
    let game_type = game_type.parse::<GameType>()?;
    Ok(compute_outcome(game_type, seed, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::Color;

    fn seed_with_number(n: u32) -> Seed {
        let mut bytes = [0x11u8; 32];
        bytes[..4].copy_from_slice(&n.to_be_bytes());
        Seed::from_bytes(bytes)
    }

    #[test]
    fn test_game_type_parsing() {
        assert_eq!("Roulette".parse::<GameType>().unwrap(), GameType::Roulette);
        assert_eq!("plinko".parse::<GameType>().unwrap(), GameType::Plinko);
        assert_eq!(" MINES ".parse::<GameType>().unwrap(), GameType::Mines);

        match "Baccarat".parse::<GameType>() {
            Err(FairdrawError::UnsupportedGameType(tag)) => assert_eq!(tag, "Baccarat"),
            other => panic!("expected UnsupportedGameType, got {:?}", other),
        }
    }

    #[test]
    fn test_game_type_serialization() {
        let json = serde_json::to_string(&GameType::Roulette).unwrap();
        assert_eq!(json, "\"Roulette\"");

        let lower: GameType = serde_json::from_str("\"wheel\"").unwrap();
        assert_eq!(lower, GameType::Wheel);

        let err = serde_json::from_str::<GameType>("\"Baccarat\"").unwrap_err();
        assert!(err.to_string().contains("Unsupported game type: Baccarat"));
    }

    #[test]
    fn test_unsupported_named_game() {
        let result = compute_outcome_named("Baccarat", &Seed::generate(), &GameParams::new());
        assert!(matches!(result, Err(FairdrawError::UnsupportedGameType(_))));
    }

    #[test]
    fn test_roulette_dispatch() {
        let outcome = compute_outcome(GameType::Roulette, &seed_with_number(37), &GameParams::new());
        match &outcome {
            Outcome::Roulette(r) => {
                assert_eq!(r.result, 0);
                assert_eq!(r.color, Color::Green);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(outcome.multiplier(), 35.0);
        assert_eq!(outcome.game_type(), GameType::Roulette);
    }

    #[test]
    fn test_params_flow_through() {
        let seed = seed_with_number(10);
        let params = GameParams::new().with("segments", 4).with("rows", 6);

        match compute_outcome(GameType::Wheel, &seed, &params) {
            Outcome::Wheel(w) => assert_eq!(w.segment, 2),
            other => panic!("unexpected outcome {:?}", other),
        }
        match compute_outcome(GameType::Plinko, &seed, &params) {
            Outcome::Plinko(p) => assert_eq!(p.path.len(), 6),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_payout() {
        let outcome = compute_outcome(GameType::Wheel, &seed_with_number(1), &GameParams::new());
        assert_eq!(outcome.multiplier_percent(), 150);
        assert_eq!(outcome.payout(1_000), 1_500);
        assert_eq!(outcome.payout(3), 4);
        assert_eq!(outcome.payout(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_outcome_json_is_tagged() {
        let outcome = compute_outcome(GameType::Roulette, &seed_with_number(37), &GameParams::new());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["game"], "roulette");
        assert_eq!(json["color"], "green");
        assert_eq!(json["isEven"], false);

        let back: Outcome = serde_json::from_value(json).unwrap();
        assert_eq!(back, outcome);
    }

    #[test]
    fn test_roulette_bet_settlement() {
        let seed = seed_with_number(19);
        let outcome = compute_outcome(GameType::Roulette, &seed, &GameParams::new());
        assert_eq!(outcome.settle(10, &GameParams::new()).unwrap(), 20);

        let red = GameParams::from_pairs(["betType=color", "betValue=red"]).unwrap();
        assert_eq!(outcome.settle(10, &red).unwrap(), 20);

        let black = GameParams::from_pairs(["betType=color", "betValue=black"]).unwrap();
        assert_eq!(outcome.settle(10, &black).unwrap(), 0);

        let straight = GameParams::from_pairs(["betType=number", "betValue=19"]).unwrap();
        assert_eq!(outcome.settlement_multiplier(&straight).unwrap(), 36.0);
        assert_eq!(outcome.multiplier(), 2.0);

        let wheel = compute_outcome(GameType::Wheel, &seed, &GameParams::new());
        assert_eq!(wheel.settle(10, &straight).unwrap(), wheel.payout(10));
    }
}
