//! Game configuration.
//!
//! `GameConfig` carries the table setup (player names, seed) and the numeric
//! rules the turn engine reads. Every field has a default matching the
//! standard game, so a JSON config file only needs the fields it changes.
//!
//! ```
//! use property_deal::core::GameConfig;
//!
//! let config = GameConfig::new(["adam", "devin"]).with_seed(7);
//! assert_eq!(config.player_count(), 2);
//! assert_eq!(config.starting_hand_size, 5);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Table setup and rule constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player names in seat order.
    pub players: Vec<String>,

    /// Seed for the deck shuffle and draw streams.
    pub seed: u64,

    /// Cards dealt to each player before the first turn.
    pub starting_hand_size: usize,

    /// Cards drawn at the start of each turn.
    pub draw_per_turn: usize,

    /// Extra cards drawn by Pass Go.
    pub pass_go_draw: usize,

    /// Amount every opponent pays on a Birthday.
    pub birthday_charge: u32,

    /// Plays allowed per turn by the turn loop.
    pub plays_per_turn: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: vec!["adam".to_string(), "devin".to_string()],
            seed: 0,
            starting_hand_size: 5,
            draw_per_turn: 2,
            pass_go_draw: 2,
            birthday_charge: 2,
            plays_per_turn: 3,
        }
    }
}

impl GameConfig {
    /// Standard rules for the given players.
    pub fn new<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_draw_per_turn(mut self, count: usize) -> Self {
        self.draw_per_turn = count;
        self
    }

    #[must_use]
    pub fn with_plays_per_turn(mut self, count: usize) -> Self {
        self.plays_per_turn = count;
        self
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check the setup can produce a game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.players.is_empty() {
            return Err(GameError::InvalidConfig("at least one player is required".into()));
        }
        if self.players.len() > 255 {
            return Err(GameError::InvalidConfig(format!(
                "{} players given, at most 255 supported",
                self.players.len()
            )));
        }
        if self.plays_per_turn == 0 {
            return Err(GameError::InvalidConfig("plays_per_turn must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.players, vec!["adam", "devin"]);
        assert_eq!(config.starting_hand_size, 5);
        assert_eq!(config.draw_per_turn, 2);
        assert_eq!(config.pass_go_draw, 2);
        assert_eq!(config.birthday_charge, 2);
        assert_eq!(config.plays_per_turn, 3);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(["a", "b", "c"])
            .with_seed(99)
            .with_starting_hand_size(0)
            .with_draw_per_turn(1)
            .with_plays_per_turn(2);

        assert_eq!(config.player_count(), 3);
        assert_eq!(config.seed, 99);
        assert_eq!(config.starting_hand_size, 0);
        assert_eq!(config.draw_per_turn, 1);
        assert_eq!(config.plays_per_turn, 2);
    }

    #[test]
    fn test_validate() {
        assert!(GameConfig::new(Vec::<String>::new()).validate().is_err());
        assert!(GameConfig::new(["solo"]).validate().is_ok());

        let too_many: Vec<String> = (0..256).map(|i| format!("p{i}")).collect();
        assert!(GameConfig::new(too_many).validate().is_err());

        assert!(GameConfig::default().with_plays_per_turn(0).validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"players": ["x", "y", "z"], "seed": 5}"#).unwrap();

        assert_eq!(config.player_count(), 3);
        assert_eq!(config.seed, 5);
        assert_eq!(config.starting_hand_size, 5);
        assert_eq!(config.birthday_charge, 2);
    }
}
