use crate::{FairdrawError, GameParams, Result, Seed};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Single-zero wheel: pockets 0..=36.
pub const POCKETS: u32 = 37;
pub const GREEN_MULTIPLIER: f64 = 35.0;
pub const NUMBER_MULTIPLIER: f64 = 2.0;
/// Straight-up bet on a single pocket.
pub const STRAIGHT_BET_MULTIPLIER: f64 = 36.0;
/// Color, odd/even and high/low bets.
pub const EVEN_MONEY_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Red,
    Black,
}

impl Color {
    /// Zero is green, even pockets black, odd pockets red.
    pub fn of(result: u32) -> Self {
        if result == 0 {
            Color::Green
        } else if result % 2 == 0 {
            Color::Black
        } else {
            Color::Red
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Green => "green",
            Color::Red => "red",
            Color::Black => "black",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouletteOutcome {
    pub result: u32,
    pub color: Color,
    pub is_even: bool,
    pub is_odd: bool,
    pub is_high: bool,
    pub is_low: bool,
    pub multiplier: f64,
    pub summary: String,
}

pub fn calculate(seed: &Seed) -> RouletteOutcome {
    let result = seed.seed_number() % POCKETS;
    let color = Color::of(result);
    let multiplier = if color == Color::Green {
        GREEN_MULTIPLIER
    } else {
        NUMBER_MULTIPLIER
    };

    RouletteOutcome {
        result,
        color,
        is_even: result > 0 && result % 2 == 0,
        is_odd: result % 2 == 1,
        is_high: result >= 19,
        is_low: (1..=18).contains(&result),
        multiplier,
        summary: format!("Landed on {} ({})", result, color),
    }
}

/// A wager on the spin, read from the `betType` / `betValue` params.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouletteBet {
    Number(u32),
    Color(Color),
    Odd,
    Even,
    High,
    Low,
}

impl RouletteBet {
    /// `bet_type` is one of `number`, `color`, `odd_even`, `high_low`.
    pub fn parse(bet_type: &str, bet_value: &str) -> Result<Self> {
        let value = bet_value.trim().to_ascii_lowercase();
        let bet = match (bet_type.trim(), value.as_str()) {
            ("number", n) => match n.parse::<u32>() {
                Ok(n) if n < POCKETS => RouletteBet::Number(n),
                _ => return Err(invalid_bet(bet_type, bet_value)),
            },
            ("color", "red") => RouletteBet::Color(Color::Red),
            ("color", "black") => RouletteBet::Color(Color::Black),
            ("odd_even", "odd") => RouletteBet::Odd,
            ("odd_even", "even") => RouletteBet::Even,
            ("high_low", "high") => RouletteBet::High,
            ("high_low", "low") => RouletteBet::Low,
            _ => return Err(invalid_bet(bet_type, bet_value)),
        };
        Ok(bet)
    }

    /// `None` when the params carry no wager. A missing `betType` means `color`.
    pub fn from_params(params: &GameParams) -> Result<Option<Self>> {
        let bet_type = params.get("betType");
        let bet_value = params.get("betValue");
        if bet_type.is_none() && bet_value.is_none() {
            return Ok(None);
        }

        let bet_type = match bet_type {
            Some(value) => param_text(value).ok_or_else(|| invalid_bet("type", value))?,
            None => "color".to_string(),
        };
        let bet_value = bet_value
            .and_then(param_text)
            .ok_or_else(|| invalid_bet(&bet_type, "missing betValue"))?;
        Self::parse(&bet_type, &bet_value).map(Some)
    }
}

impl fmt::Display for RouletteBet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouletteBet::Number(n) => write!(f, "number {}", n),
            RouletteBet::Color(color) => write!(f, "{}", color),
            RouletteBet::Odd => f.write_str("odd"),
            RouletteBet::Even => f.write_str("even"),
            RouletteBet::High => f.write_str("high"),
            RouletteBet::Low => f.write_str("low"),
        }
    }
}

fn param_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn invalid_bet(bet_type: impl fmt::Display, detail: impl fmt::Display) -> FairdrawError {
    FairdrawError::invalid_params(format!("unusable roulette bet {}: {}", bet_type, detail))
}

/// What `bet` pays on this spin: `0.0` on a loss. Zero loses every outside bet.
pub fn bet_multiplier(outcome: &RouletteOutcome, bet: &RouletteBet) -> f64 {
    let won = match bet {
        RouletteBet::Number(n) => outcome.result == *n,
        RouletteBet::Color(color) => outcome.color == *color,
        RouletteBet::Odd => outcome.is_odd,
        RouletteBet::Even => outcome.is_even,
        RouletteBet::High => outcome.is_high,
        RouletteBet::Low => outcome.is_low,
    };

    match (won, bet) {
        (false, _) => 0.0,
        (true, RouletteBet::Number(_)) => STRAIGHT_BET_MULTIPLIER,
        (true, _) => EVEN_MONEY_MULTIPLIER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_with_number(n: u32) -> Seed {
        let mut bytes = [0xabu8; 32];
        bytes[..4].copy_from_slice(&n.to_be_bytes());
        Seed::from_bytes(bytes)
    }

    #[test]
    fn test_zero_is_green() {
        let outcome = calculate(&seed_with_number(37));
        assert_eq!(outcome.result, 0);
        assert_eq!(outcome.color, Color::Green);
        assert_eq!(outcome.multiplier, 35.0);
        assert!(!outcome.is_even && !outcome.is_odd && !outcome.is_high && !outcome.is_low);
        assert_eq!(outcome.summary, "Landed on 0 (green)");
    }

    #[test]
    fn test_colors_and_ranges() {
        let red = calculate(&seed_with_number(37 * 3 + 19));
        assert_eq!(red.result, 19);
        assert_eq!(red.color, Color::Red);
        assert!(red.is_odd && red.is_high);
        assert_eq!(red.multiplier, 2.0);

        let black = calculate(&seed_with_number(18));
        assert_eq!(black.color, Color::Black);
        assert!(black.is_even && black.is_low);
    }

    #[test]
    fn test_max_seed_number() {
        // 4294967295 mod 37 = 6
        let outcome = calculate(&seed_with_number(u32::MAX));
        assert_eq!(outcome.result, 6);
        assert_eq!(outcome.color, Color::Black);
    }

    #[test]
    fn test_bet_parsing() {
        assert_eq!(RouletteBet::parse("number", "17").unwrap(), RouletteBet::Number(17));
        assert_eq!(RouletteBet::parse("color", "Red").unwrap(), RouletteBet::Color(Color::Red));
        assert_eq!(RouletteBet::parse("high_low", "low").unwrap(), RouletteBet::Low);

        for (bet_type, value) in [("number", "37"), ("color", "green"), ("odd_even", "high"), ("split", "1")] {
            assert!(matches!(
                RouletteBet::parse(bet_type, value),
                Err(FairdrawError::InvalidParams(_))
            ));
        }
    }

    #[test]
    fn test_bet_from_params() {
        assert_eq!(RouletteBet::from_params(&GameParams::new()).unwrap(), None);

        let params = GameParams::from_pairs(["betType=number", "betValue=7"]).unwrap();
        assert_eq!(RouletteBet::from_params(&params).unwrap(), Some(RouletteBet::Number(7)));

        let params = GameParams::new().with("betValue", "black");
        assert_eq!(
            RouletteBet::from_params(&params).unwrap(),
            Some(RouletteBet::Color(Color::Black))
        );

        let params = GameParams::new().with("betType", "odd_even");
        assert!(RouletteBet::from_params(&params).is_err());
    }

    #[test]
    fn test_bet_multiplier() {
        let nineteen = calculate(&seed_with_number(19));
        assert_eq!(bet_multiplier(&nineteen, &RouletteBet::Number(19)), 36.0);
        assert_eq!(bet_multiplier(&nineteen, &RouletteBet::Number(18)), 0.0);
        assert_eq!(bet_multiplier(&nineteen, &RouletteBet::Color(Color::Red)), 2.0);
        assert_eq!(bet_multiplier(&nineteen, &RouletteBet::Color(Color::Black)), 0.0);
        assert_eq!(bet_multiplier(&nineteen, &RouletteBet::Odd), 2.0);
        assert_eq!(bet_multiplier(&nineteen, &RouletteBet::High), 2.0);
        assert_eq!(bet_multiplier(&nineteen, &RouletteBet::Low), 0.0);
    }

    #[test]
    fn test_zero_loses_outside_bets() {
        let zero = calculate(&seed_with_number(0));
        assert_eq!(bet_multiplier(&zero, &RouletteBet::Number(0)), 36.0);
        for bet in [
            RouletteBet::Color(Color::Red),
            RouletteBet::Color(Color::Black),
            RouletteBet::Odd,
            RouletteBet::Even,
            RouletteBet::High,
            RouletteBet::Low,
        ] {
            assert_eq!(bet_multiplier(&zero, &bet), 0.0, "{} should lose on zero", bet);
        }
    }
}
