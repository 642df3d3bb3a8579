// Configuration module for reading Othello.toml
// Holds the search and match settings used by the `play` binary

use derive_more::{Display, Error, From};
use log::warn;
use othello4::Player;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "Othello.toml";

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub search: SearchConfig,
    pub game: GameConfig,
}

/// Settings for the computer player
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub pruning: bool,
}

/// Settings for the turn loop
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub human_player: Player,
    pub max_turns: u32,
}

#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display(fmt = "failed to read config file: {}", _0)]
    Read(std::io::Error),
    #[display(fmt = "failed to parse config file: {}", _0)]
    Parse(toml::de::Error),
}

impl Config {
    /// Parses a configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Loads configuration from Othello.toml in the working directory
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_file(DEFAULT_CONFIG_PATH)
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the values in Othello.toml
    pub fn default_hardcoded() -> Self {
        Config {
            search: SearchConfig {
                depth: 3,
                pruning: true,
            },
            game: GameConfig {
                human_player: Player::Black,
                max_turns: 50,
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            warn!(
                "Could not load {} ({}), using hardcoded defaults",
                DEFAULT_CONFIG_PATH, e
            );
            Self::default_hardcoded()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hardcoded_defaults() {
        let config = Config::default_hardcoded();
        assert_eq!(config.search.depth, 3);
        assert!(config.search.pruning);
        assert_eq!(config.game.human_player, Player::Black);
        assert_eq!(config.game.max_turns, 50);
    }

    #[test]
    fn test_othello_toml_matches_hardcoded_defaults() {
        let config = Config::from_file("Othello.toml").expect("Othello.toml should be parseable");
        assert_eq!(config, Config::default_hardcoded());
    }

    #[test]
    fn test_load_or_default_works() {
        let config = Config::load_or_default();
        assert_eq!(config.search.depth, 3);
    }

    #[test]
    fn test_parse_custom_values() {
        let config = Config::from_toml_str(
            r#"
            [search]
            depth = 5
            pruning = false

            [game]
            human_player = "white"
            max_turns = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.search.depth, 5);
        assert!(!config.search.pruning);
        assert_eq!(config.game.human_player, Player::White);
        assert_eq!(config.game.max_turns, 20);
    }

    #[test]
    fn test_unknown_player_is_a_parse_error() {
        let result = Config::from_toml_str(
            r#"
            [search]
            depth = 3
            pruning = true

            [game]
            human_player = "red"
            max_turns = 50
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let result = Config::from_file("nonexistent.toml");
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }
}
