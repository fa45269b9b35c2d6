use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use types::{GameRng, Strategy};

use crate::{AlwaysDraw, CautiousStrategy, NeverDraw, RandomStrategy};

/// Strategy selection as written in config files and on the command line:
/// `always`, `never`, `random[:probability]` or `cautious[:threshold]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StrategyKind {
    AlwaysDraw,
    NeverDraw,
    Random { probability: f64 },
    Cautious { threshold: usize },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseStrategyError {
    #[error("Unknown strategy: {0}")]
    Unknown(String),

    #[error("Invalid parameter for {kind} strategy: {value}")]
    InvalidParameter { kind: String, value: String },
}

impl StrategyKind {
    /// Builds a fresh strategy. Randomised strategies draw from `rng`.
    pub fn build(&self, rng: GameRng) -> Box<dyn Strategy> {
        match *self {
            StrategyKind::AlwaysDraw => Box::new(AlwaysDraw),
            StrategyKind::NeverDraw => Box::new(NeverDraw),
            StrategyKind::Random { probability } => Box::new(RandomStrategy::new(probability, rng)),
            StrategyKind::Cautious { threshold } => Box::new(CautiousStrategy::new(threshold)),
        }
    }
}

fn invalid(kind: &str, value: &str) -> ParseStrategyError {
    ParseStrategyError::InvalidParameter {
        kind: kind.to_string(),
        value: value.to_string(),
    }
}

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, param) = match s.trim().split_once(':') {
            Some((kind, param)) => (kind, Some(param.trim())),
            None => (s.trim(), None),
        };
        match (kind.to_lowercase().as_str(), param) {
            ("always" | "always_draw", None) => Ok(StrategyKind::AlwaysDraw),
            ("never" | "never_draw", None) => Ok(StrategyKind::NeverDraw),
            ("random", None) => Ok(StrategyKind::Random { probability: 0.5 }),
            ("random", Some(p)) => match p.parse::<f64>() {
                Ok(probability) if (0.0..=1.0).contains(&probability) => {
                    Ok(StrategyKind::Random { probability })
                }
                _ => Err(invalid(kind, p)),
            },
            ("cautious", None) => Ok(StrategyKind::Cautious { threshold: 3 }),
            ("cautious", Some(t)) => t
                .parse()
                .map(|threshold| StrategyKind::Cautious { threshold })
                .map_err(|_| invalid(kind, t)),
            _ => Err(ParseStrategyError::Unknown(s.to_string())),
        }
    }
}

impl TryFrom<String> for StrategyKind {
    type Error = ParseStrategyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StrategyKind> for String {
    fn from(kind: StrategyKind) -> Self {
        kind.to_string()
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::AlwaysDraw => write!(f, "always"),
            StrategyKind::NeverDraw => write!(f, "never"),
            StrategyKind::Random { probability } => write!(f, "random:{probability}"),
            StrategyKind::Cautious { threshold } => write!(f, "cautious:{threshold}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy_kinds() {
        assert_eq!("always".parse::<StrategyKind>(), Ok(StrategyKind::AlwaysDraw));
        assert_eq!("Never".parse::<StrategyKind>(), Ok(StrategyKind::NeverDraw));
        assert_eq!(
            "random:0.25".parse::<StrategyKind>(),
            Ok(StrategyKind::Random { probability: 0.25 })
        );
        assert_eq!(
            "cautious".parse::<StrategyKind>(),
            Ok(StrategyKind::Cautious { threshold: 3 })
        );
        assert_eq!(
            "cautious:4".parse::<StrategyKind>(),
            Ok(StrategyKind::Cautious { threshold: 4 })
        );
    }

    #[test]
    fn test_parse_strategy_errors() {
        assert_eq!(
            "sometimes".parse::<StrategyKind>(),
            Err(ParseStrategyError::Unknown("sometimes".to_string()))
        );
        assert!(matches!(
            "random:1.5".parse::<StrategyKind>(),
            Err(ParseStrategyError::InvalidParameter { .. })
        ));
        assert!(matches!(
            "always:3".parse::<StrategyKind>(),
            Err(ParseStrategyError::Unknown(_))
        ));
    }

    #[test]
    fn test_strategy_kind_in_yaml() {
        let kinds: Vec<StrategyKind> =
            serde_yaml::from_str("- always\n- random:0.75\n- cautious:2\n")
                .expect("valid yaml");
        assert_eq!(
            kinds,
            vec![
                StrategyKind::AlwaysDraw,
                StrategyKind::Random { probability: 0.75 },
                StrategyKind::Cautious { threshold: 2 },
            ]
        );
        assert_eq!(
            serde_yaml::to_string(&StrategyKind::NeverDraw).expect("serializable"),
            "never\n"
        );
    }
}
