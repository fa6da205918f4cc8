// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table configuration.
use serde::{Deserialize, Serialize};

use crate::{error::GameError, poker::Chips};

/// The table settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// The small blind amount.
    pub small_blind: Chips,
    /// The big blind amount.
    pub big_blind: Chips,
    /// The minimum number of players to start a game.
    pub min_players: usize,
    /// The maximum number of seats.
    pub max_players: usize,
    /// Consecutive rejected actions before a player is folded.
    pub max_invalid_actions: usize,
    /// Stop the game after this many hands.
    pub max_hands: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: Chips::new(10),
            big_blind: Chips::new(20),
            min_players: 3,
            max_players: 8,
            max_invalid_actions: 5,
            max_hands: None,
        }
    }
}

impl TableConfig {
    /// Checks the settings are consistent.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.small_blind == Chips::ZERO || self.small_blind > self.big_blind {
            return Err(GameError::InvalidBlinds {
                small: self.small_blind,
                big: self.big_blind,
            });
        }

        if self.min_players < 2 || self.min_players > self.max_players {
            return Err(GameError::InvalidConfig(format!(
                "players range {}..={}",
                self.min_players, self.max_players
            )));
        }

        if self.max_invalid_actions == 0 {
            return Err(GameError::InvalidConfig(
                "max_invalid_actions must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(TableConfig::default().validate().is_ok());
    }

    #[test]
    fn invalid_settings() {
        let config = TableConfig {
            small_blind: Chips::new(50),
            big_blind: Chips::new(20),
            ..TableConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidBlinds { .. })
        ));

        let config = TableConfig {
            small_blind: Chips::ZERO,
            ..TableConfig::default()
        };
        assert!(config.validate().is_err());

        let config = TableConfig {
            min_players: 9,
            ..TableConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }
}
