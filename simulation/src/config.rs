use std::{fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use strategies::StrategyKind;
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "OCTOPUS_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid player {0:?}, expected name:strategy")]
    InvalidPlayer(String),

    #[error(transparent)]
    InvalidStrategy(#[from] strategies::ParseStrategyError),

    #[error("invalid configuration: at least one player required")]
    NoPlayers,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub strategy: StrategyKind,
}

impl FromStr for PlayerConfig {
    type Err = ConfigError;

    /// Parses `name:strategy`, e.g. `alice:always` or `bob:random:0.3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, strategy) = s
            .split_once(':')
            .filter(|(name, _)| !name.trim().is_empty())
            .ok_or_else(|| ConfigError::InvalidPlayer(s.to_string()))?;
        Ok(Self {
            name: name.trim().to_string(),
            strategy: strategy.parse()?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub players: Vec<PlayerConfig>,
    pub games: usize,
    pub seed: Option<u64>,
    pub max_turns: Option<usize>,
    pub delay_ms: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            players: vec![
                PlayerConfig {
                    name: "Player 1".to_string(),
                    strategy: StrategyKind::AlwaysDraw,
                },
                PlayerConfig {
                    name: "Player 2".to_string(),
                    strategy: StrategyKind::NeverDraw,
                },
            ],
            games: 1,
            seed: None,
            max_turns: None,
            delay_ms: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Config file named on the command line, else the one in
    /// `OCTOPUS_CONFIG`, else the defaults.
    pub fn from_cli_or_env_or_default(cli_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = cli_path {
            log::info!("Loading config from {}", path.display());
            Self::from_file(path)
        } else if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            log::info!("Loading config from {CONFIG_ENV_VAR}={path}");
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        Ok(())
    }
}
