// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player decisions and the collaborator that provides them.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{error::ActionError, event::TableSnapshot, poker::Chips};

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Leave the hand.
    Fold,
    /// Pass without adding chips.
    Check,
    /// Match the current bet.
    Call,
    /// Raise the player bet to the given total.
    Bet(Chips),
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Fold => write!(f, "fold"),
            PlayerAction::Check => write!(f, "check"),
            PlayerAction::Call => write!(f, "call"),
            PlayerAction::Bet(amount) => write!(f, "bet {amount}"),
        }
    }
}

/// The kind of actions offered to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Fold is always allowed.
    Fold,
    /// Nothing to call.
    Check,
    /// Chips to call.
    Call,
    /// The player can raise the minimum.
    Bet,
}

/// A request for a player decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    /// The seat of the player to act.
    pub seat: usize,
    /// The player name.
    pub name: String,
    /// The player chips behind.
    pub chips: Chips,
    /// The player bet in this round.
    pub bet: Chips,
    /// The amount needed to call, clamped to the player chips.
    pub to_call: Chips,
    /// The bet every player must match.
    pub min_bet: Chips,
    /// The smallest total a bet can raise to.
    pub min_raise: Chips,
    /// The hand big blind.
    pub big_blind: Chips,
    /// The actions choices.
    pub actions: Vec<ActionKind>,
}

impl ActionRequest {
    /// Check if a call action is in the request.
    pub fn can_call(&self) -> bool {
        self.check_action(ActionKind::Call)
    }

    /// Check if a check action is in the request.
    pub fn can_check(&self) -> bool {
        self.check_action(ActionKind::Check)
    }

    /// Check if a bet action is in the request.
    pub fn can_bet(&self) -> bool {
        self.check_action(ActionKind::Bet)
    }

    /// The largest total this player can bet.
    pub fn max_bet(&self) -> Chips {
        self.chips + self.bet
    }

    fn check_action(&self, action: ActionKind) -> bool {
        self.actions.iter().any(|a| a == &action)
    }
}

/// Provides the decisions for the players at a table.
pub trait ActionSource {
    /// Returns the action for the player in the request.
    fn next_action(&mut self, req: &ActionRequest, table: &TableSnapshot) -> PlayerAction;

    /// Called when the last action was rejected, the player is then asked again.
    fn rejected(&mut self, _req: &ActionRequest, _err: &ActionError) {}
}

impl<S: ActionSource + ?Sized> ActionSource for &mut S {
    fn next_action(&mut self, req: &ActionRequest, table: &TableSnapshot) -> PlayerAction {
        (**self).next_action(req, table)
    }

    fn rejected(&mut self, req: &ActionRequest, err: &ActionError) {
        (**self).rejected(req, err)
    }
}

impl<S: ActionSource + ?Sized> ActionSource for Box<S> {
    fn next_action(&mut self, req: &ActionRequest, table: &TableSnapshot) -> PlayerAction {
        (**self).next_action(req, table)
    }

    fn rejected(&mut self, req: &ActionRequest, err: &ActionError) {
        (**self).rejected(req, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_actions() {
        let req = ActionRequest {
            seat: 1,
            name: "Alice".to_string(),
            chips: Chips::new(100),
            bet: Chips::ZERO,
            to_call: Chips::new(20),
            min_bet: Chips::new(20),
            min_raise: Chips::new(20),
            big_blind: Chips::new(20),
            actions: vec![ActionKind::Fold, ActionKind::Call, ActionKind::Bet],
        };

        assert!(req.can_call());
        assert!(req.can_bet());
        assert!(!req.can_check());
        assert_eq!(req.max_bet(), Chips::new(100));
    }

    #[test]
    fn action_display() {
        assert_eq!(PlayerAction::Fold.to_string(), "fold");
        assert_eq!(PlayerAction::Bet(Chips::new(1_500)).to_string(), "bet 1,500");
    }
}
