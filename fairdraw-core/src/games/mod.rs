//! Per-game draw algorithms.
//!
//! Each game reads only the seed bytes it needs; `seed_number` (the first
//! four bytes, big-endian) is the shared entropy source for roulette and
//! the wheel.

pub mod mines;
pub mod plinko;
pub mod roulette;
pub mod wheel;

pub use mines::MinesOutcome;
pub use plinko::PlinkoOutcome;
pub use roulette::{Color, RouletteBet, RouletteOutcome};
pub use wheel::WheelOutcome;
