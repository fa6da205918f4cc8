// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table player types.
use serde::{Deserialize, Serialize};

use crate::poker::{Chips, PlayerCards};

/// The last action taken by a player, used for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LastAction {
    /// No action yet.
    #[default]
    None,
    /// Small blind.
    SmallBlind,
    /// Big blind.
    BigBlind,
    /// Fold.
    Fold,
    /// Check.
    Check,
    /// Call.
    Call,
    /// First bet in a round.
    Bet,
    /// Raise over a previous bet.
    Raise,
    /// The player put all their chips in.
    AllIn,
}

impl LastAction {
    /// The action label.
    pub fn label(&self) -> &'static str {
        match self {
            LastAction::None => "",
            LastAction::SmallBlind => "SB",
            LastAction::BigBlind => "BB",
            LastAction::Fold => "FOLD",
            LastAction::Check => "CHECK",
            LastAction::Call => "CALL",
            LastAction::Bet => "BET",
            LastAction::Raise => "RAISE",
            LastAction::AllIn => "ALL-IN",
        }
    }
}

/// A table player state.
#[derive(Debug, Clone)]
pub struct Player {
    /// The player name.
    pub name: String,
    /// This player chips.
    pub chips: Chips,
    /// The player bet amount in the current betting round.
    pub bet: Chips,
    /// The player folded in this hand.
    pub folded: bool,
    /// The last player action.
    pub action: LastAction,
    /// This player private cards.
    pub hole_cards: PlayerCards,
    /// The player has the button.
    pub has_button: bool,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, chips: Chips) -> Self {
        Self {
            name: name.into(),
            chips,
            bet: Chips::ZERO,
            folded: false,
            action: LastAction::None,
            hole_cards: PlayerCards::None,
            has_button: false,
        }
    }

    /// Checks if the player is in the hand with no chips left.
    pub fn is_all_in(&self) -> bool {
        !self.folded && self.chips == Chips::ZERO
    }

    /// Checks if the player can still take a betting decision.
    pub fn can_act(&self) -> bool {
        !self.folded && self.chips > Chips::ZERO
    }

    /// Raises this player bet to the given total, returns the chips paid.
    ///
    /// A player without enough chips goes all in.
    pub(crate) fn bet_to(&mut self, total: Chips) -> Chips {
        // How much to bet considering previous bets.
        let remainder = total - self.bet;

        let paid = if self.chips < remainder {
            self.chips
        } else {
            remainder
        };

        self.bet += paid;
        self.chips -= paid;
        paid
    }

    /// Sets this player in fold state.
    pub(crate) fn fold(&mut self) {
        self.folded = true;
        self.action = LastAction::Fold;
    }

    /// Reset state for a new hand.
    pub(crate) fn start_hand(&mut self) {
        self.folded = false;
        self.has_button = false;
        self.bet = Chips::ZERO;
        self.action = LastAction::None;
        self.hole_cards = PlayerCards::None;
    }

    /// Reset state for a new betting round.
    pub(crate) fn start_round(&mut self) {
        self.bet = Chips::ZERO;
        if self.can_act() {
            self.action = LastAction::None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_to_clamps_to_chips() {
        let mut player = Player::new("Alice", Chips::new(100));
        assert_eq!(player.bet_to(Chips::new(40)), Chips::new(40));
        assert_eq!(player.bet, Chips::new(40));
        assert_eq!(player.chips, Chips::new(60));

        // Raise to 80 only pays the difference.
        assert_eq!(player.bet_to(Chips::new(80)), Chips::new(40));
        assert_eq!(player.chips, Chips::new(20));

        // Short stack goes all in.
        assert_eq!(player.bet_to(Chips::new(500)), Chips::new(20));
        assert_eq!(player.bet, Chips::new(100));
        assert!(player.is_all_in());
        assert!(!player.can_act());
    }

    #[test]
    fn folded_player_is_not_all_in() {
        let mut player = Player::new("Bob", Chips::new(10));
        player.bet_to(Chips::new(10));
        assert!(player.is_all_in());

        player.fold();
        assert!(!player.is_all_in());
        assert!(!player.can_act());
        assert_eq!(player.action.label(), "FOLD");

        player.start_hand();
        assert!(!player.folded);
        assert_eq!(player.action, LastAction::None);
    }
}
