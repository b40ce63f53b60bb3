use fairdraw_core::{BookConfig, FairdrawError, GameParams, GameType, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Per-game fallback parameters, keyed by lowercase game name
    pub defaults: BTreeMap<String, GameParams>,
    pub simulation_rounds: u64,
    pub reveal_window_secs: u64,
    pub min_bet: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        let book = BookConfig::default();
        Self {
            defaults: BTreeMap::new(),
            simulation_rounds: 10_000,
            reveal_window_secs: book.reveal_window.as_secs(),
            min_bet: book.min_bet,
        }
    }
}

impl CliConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    /// Read `<data_dir>/config.json`; a missing file yields the defaults.
    pub async fn load(data_dir: &Path) -> Result<Self> {
        let path = Self::path(data_dir);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: CliConfig = serde_json::from_str(&content).map_err(|e| {
            FairdrawError::config(format!("{}: {}", path.display(), e))
        })?;
        config.book_config().validate()?;
        Ok(config)
    }

    pub async fn save(&self, data_dir: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(Self::path(data_dir), content).await?;
        Ok(())
    }

    /// Explicit parameters layered over the configured defaults for `game`.
    pub fn params_for(&self, game: GameType, explicit: &GameParams) -> GameParams {
        match self.defaults.get(&game.name().to_lowercase()) {
            Some(defaults) => explicit.merged_over(defaults),
            None => explicit.clone(),
        }
    }

    pub fn book_config(&self) -> BookConfig {
        BookConfig::new(Duration::from_secs(self.reveal_window_secs), self.min_bet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = CliConfig::load(dir.path()).await.unwrap();
        assert_eq!(config.simulation_rounds, 10_000);
        assert_eq!(config.reveal_window_secs, 300);
        assert!(config.defaults.is_empty());
    }

    #[tokio::test]
    async fn test_partial_file_and_game_defaults() {
        let dir = tempdir().unwrap();
        tokio::fs::write(
            CliConfig::path(dir.path()),
            r#"{ "defaults": { "plinko": { "rows": 16 } }, "min_bet": 10 }"#,
        )
        .await
        .unwrap();

        let config = CliConfig::load(dir.path()).await.unwrap();
        assert_eq!(config.min_bet, 10);
        assert_eq!(config.simulation_rounds, 10_000);

        let params = config.params_for(GameType::Plinko, &GameParams::new());
        assert_eq!(params.rows(), 16);

        let explicit = GameParams::new().with("rows", 8);
        assert_eq!(config.params_for(GameType::Plinko, &explicit).rows(), 8);
        assert_eq!(config.params_for(GameType::Wheel, &GameParams::new()).segments(), 8);
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        tokio::fs::write(CliConfig::path(dir.path()), "{ not json").await.unwrap();
        assert!(matches!(
            CliConfig::load(dir.path()).await,
            Err(FairdrawError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_book_settings_rejected() {
        let dir = tempdir().unwrap();
        tokio::fs::write(CliConfig::path(dir.path()), r#"{ "reveal_window_secs": 0 }"#)
            .await
            .unwrap();
        assert!(CliConfig::load(dir.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let mut config = CliConfig::default();
        config
            .defaults
            .insert("mines".to_string(), GameParams::new().with("numMines", 3));
        config.save(dir.path()).await.unwrap();

        let loaded = CliConfig::load(dir.path()).await.unwrap();
        assert_eq!(loaded.params_for(GameType::Mines, &GameParams::new()).num_mines(), 3);
    }
}
