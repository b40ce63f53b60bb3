use crate::error::{FairdrawError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookConfig {
    /// How long a placed bet waits for its reveal
    pub reveal_window: Duration,
    pub min_bet: u64,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            reveal_window: Duration::from_secs(300), // 5 minutes
            min_bet: 1,
        }
    }
}

impl BookConfig {
    pub fn new(reveal_window: Duration, min_bet: u64) -> Self {
        Self {
            reveal_window,
            min_bet,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.reveal_window.is_zero() {
            return Err(FairdrawError::config("Reveal window must be greater than 0"));
        }

        if chrono::Duration::from_std(self.reveal_window).is_err() {
            return Err(FairdrawError::config("Reveal window is too large"));
        }

        if self.min_bet == 0 {
            return Err(FairdrawError::config("Minimum bet must be greater than 0"));
        }

        Ok(())
    }

    pub(crate) fn reveal_window_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.reveal_window).unwrap_or(chrono::Duration::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(BookConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(BookConfig::new(Duration::ZERO, 1).validate().is_err());
        assert!(BookConfig::new(Duration::from_secs(60), 0).validate().is_err());
        assert!(BookConfig::new(Duration::MAX, 1).validate().is_err());
    }
}
