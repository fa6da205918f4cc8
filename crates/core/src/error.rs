// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game errors.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::poker::{Chips, EvalError};

/// A rejected player action, the player is asked again.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ActionError {
    /// The player must call, bet or fold.
    #[error("cannot check, {to_call} chips to call")]
    CannotCheck {
        /// Chips needed to call.
        to_call: Chips,
    },
    /// The bet is lower than the minimum.
    #[error("bet {amount} is below the minimum {minimum}")]
    BetTooSmall {
        /// The requested bet.
        amount: Chips,
        /// The minimum bet.
        minimum: Chips,
    },
    /// The player cannot cover the minimum bet.
    #[error("bet {amount} exceeds the available {available} chips")]
    InsufficientChips {
        /// The requested bet.
        amount: Chips,
        /// The player chips plus the current bet.
        available: Chips,
    },
    /// The round is not waiting for an action.
    #[error("betting round is not waiting for an action")]
    NotAwaitingAction,
}

/// A fatal game error.
#[derive(Debug, Error)]
pub enum GameError {
    /// The deck ran out of cards during a hand.
    #[error("deck exhausted")]
    DeckExhausted,
    /// Hand evaluation failed.
    #[error("hand evaluation error: {0}")]
    Eval(#[from] EvalError),
    /// Too few players.
    #[error("not enough players: {count} < {min}")]
    NotEnoughPlayers {
        /// Number of players.
        count: usize,
        /// The minimum.
        min: usize,
    },
    /// Too many players.
    #[error("too many players: {count} > {max}")]
    TooManyPlayers {
        /// Number of players.
        count: usize,
        /// The maximum.
        max: usize,
    },
    /// A player without a name.
    #[error("player name cannot be empty")]
    EmptyName,
    /// Two players with the same name.
    #[error("duplicate player name {0}")]
    DuplicateName(String),
    /// A player joined without chips.
    #[error("player {0} has no chips")]
    NoChips(String),
    /// Blinds must be positive with small <= big.
    #[error("invalid blinds {small}/{big}")]
    InvalidBlinds {
        /// Small blind.
        small: Chips,
        /// Big blind.
        big: Chips,
    },
    /// The players stacks add up to more than a pot can hold.
    #[error("total chips {0} exceed the table limit")]
    TooManyChips(u64),
    /// Other configuration errors.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
