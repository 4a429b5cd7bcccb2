//! Configuration types for match play
//!
//! Level 4 - Utilities and configuration

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use hexreversi_core::{HexBoard, MoveStrategy};

/// Who sits at one side of the board
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Reads actions from an input stream
    Human,
    /// Plays whatever the strategy proposes
    Machine(MoveStrategy),
    /// Uniformly random legal placements
    Random { seed: u64 },
}

impl PlayerKind {
    /// Corner first, then greedy capture
    pub fn both() -> Self {
        PlayerKind::Machine(MoveStrategy::Chain(vec![
            MoveStrategy::CornerPreference,
            MoveStrategy::MaxCapture,
        ]))
    }

    pub fn is_human(&self) -> bool {
        matches!(self, PlayerKind::Human)
    }
}

impl Default for PlayerKind {
    fn default() -> Self {
        PlayerKind::both()
    }
}

impl FromStr for PlayerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "human" => PlayerKind::Human,
            "capture" => PlayerKind::Machine(MoveStrategy::MaxCapture),
            "corner" => PlayerKind::Machine(MoveStrategy::CornerPreference),
            "both" => PlayerKind::both(),
            "random" => PlayerKind::Random { seed: 0 },
            other => match other.strip_prefix("random:") {
                Some(seed) => PlayerKind::Random {
                    seed: seed
                        .parse()
                        .with_context(|| format!("Invalid random seed: {}", seed))?,
                },
                None => bail!(
                    "Unknown player kind '{}' (expected human, capture, corner, both or random)",
                    s
                ),
            },
        };
        Ok(kind)
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Random { seed: 0 } => write!(f, "random"),
            PlayerKind::Random { seed } => write!(f, "random:{}", seed),
            PlayerKind::Machine(MoveStrategy::MaxCapture) => write!(f, "capture"),
            PlayerKind::Machine(MoveStrategy::CornerPreference) => write!(f, "corner"),
            kind if *kind == PlayerKind::both() => write!(f, "both"),
            PlayerKind::Machine(strategy) => write!(f, "{:?}", strategy),
        }
    }
}

/// Configuration for a series of games between two players
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Board size (odd, greater than 3)
    pub size: i32,
    /// Number of games (colors alternate each game)
    pub games: usize,
    /// Plays Black in even-numbered games
    pub first: PlayerKind,
    /// Plays Black in odd-numbered games
    pub second: PlayerKind,
    /// Whether to run games in parallel
    pub parallel: bool,
    /// Base seed for random players (None = 42)
    pub seed: Option<u64>,
    /// Game is abandoned after this many actions
    pub max_plies: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            size: 7,
            games: 10,
            first: PlayerKind::both(),
            second: PlayerKind::Machine(MoveStrategy::MaxCapture),
            parallel: false,
            seed: None,
            max_plies: 1000,
        }
    }
}

impl MatchConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read match config: {}", path.display()))?;
        let config: MatchConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse match config: {}", path.display()))?;
        Ok(config)
    }

    pub fn with_size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_players(mut self, first: PlayerKind, second: PlayerKind) -> Self {
        self.first = first;
        self.second = second;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = max_plies;
        self
    }

    /// Reject configurations no game could be played with
    pub fn validate(&self) -> anyhow::Result<()> {
        HexBoard::new(self.size).with_context(|| format!("Invalid board size {}", self.size))?;
        if self.parallel && (self.first.is_human() || self.second.is_human()) {
            bail!("Human players cannot take part in parallel matches");
        }
        if self.max_plies == 0 {
            bail!("max_plies must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_kinds() {
        assert_eq!("human".parse::<PlayerKind>().unwrap(), PlayerKind::Human);
        assert_eq!(
            "capture".parse::<PlayerKind>().unwrap(),
            PlayerKind::Machine(MoveStrategy::MaxCapture)
        );
        assert_eq!(
            "Corner".parse::<PlayerKind>().unwrap(),
            PlayerKind::Machine(MoveStrategy::CornerPreference)
        );
        assert_eq!("both".parse::<PlayerKind>().unwrap(), PlayerKind::both());
        assert_eq!("random".parse::<PlayerKind>().unwrap(), PlayerKind::Random { seed: 0 });
        assert_eq!(
            "random:17".parse::<PlayerKind>().unwrap(),
            PlayerKind::Random { seed: 17 }
        );
        assert!("minimax".parse::<PlayerKind>().is_err());
        assert!("random:x".parse::<PlayerKind>().is_err());
    }

    #[test]
    fn test_player_kind_display_round_trips() {
        for name in ["human", "capture", "corner", "both", "random", "random:9"] {
            let kind: PlayerKind = name.parse().unwrap();
            assert_eq!(kind.to_string(), name);
        }
    }

    #[test]
    fn test_match_config_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.size, 7);
        assert_eq!(config.games, 10);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_match_config_builders() {
        let config = MatchConfig::default()
            .with_size(11)
            .with_games(4)
            .with_players(PlayerKind::Random { seed: 1 }, PlayerKind::Human)
            .with_seed(5)
            .with_max_plies(50);
        assert_eq!(config.size, 11);
        assert_eq!(config.games, 4);
        assert_eq!(config.second, PlayerKind::Human);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.max_plies, 50);
        assert!(config.validate().is_ok());
        assert!(config.with_parallel(true).validate().is_err());
    }

    #[test]
    fn test_match_config_rejects_bad_size() {
        assert!(MatchConfig::default().with_size(6).validate().is_err());
        assert!(MatchConfig::default().with_size(3).validate().is_err());
    }

    #[test]
    fn test_match_config_partial_json() {
        let config: MatchConfig =
            serde_json::from_str(r#"{"size": 9, "first": {"Random": {"seed": 3}}}"#).unwrap();
        assert_eq!(config.size, 9);
        assert_eq!(config.first, PlayerKind::Random { seed: 3 });
        assert_eq!(config.games, MatchConfig::default().games);
    }

    #[test]
    fn test_match_config_load() {
        let path = std::env::temp_dir().join(format!("hexreversi-config-{}.json", std::process::id()));
        let config = MatchConfig::default().with_games(6).with_seed(11);
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = MatchConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);

        assert!(MatchConfig::load(&path).is_err());
    }
}
