// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator classifies 5-cards hands with [classify] and finds the best
//! 5-cards hand out of 5, 6, or 7 cards with [best_hand] by checking all the
//! 5-cards subsets of the input (21 subsets for a 7 cards hand).
//!
//! Hands are compared using the [RankedHand] ordering, the category first and
//! then the hand rank values in order of significance, suits never break ties.
use thiserror::Error;

use showdown_cards::Card;

mod category;
mod ranked;

pub use category::{HandCategory, classify};
pub use ranked::RankedHand;

/// Evaluation errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Fewer than 5 cards.
    #[error("at least 5 cards are needed to evaluate a hand, got {0}")]
    NotEnoughCards(usize),
    /// More than 7 cards.
    #[error("at most 7 cards can be evaluated, got {0}")]
    TooManyCards(usize),
}

/// Returns the best 5-cards hand out of 5 to 7 cards.
///
/// When two subsets have the same category and ranks the first one found is
/// returned, the two hands compare equal anyway.
pub fn best_hand(cards: &[Card]) -> Result<RankedHand, EvalError> {
    let n = cards.len();
    if n < 5 {
        return Err(EvalError::NotEnoughCards(n));
    }

    if n > 7 {
        return Err(EvalError::TooManyCards(n));
    }

    let mut best: Option<RankedHand> = None;

    for c1 in 0..n {
        for c2 in (c1 + 1)..n {
            for c3 in (c2 + 1)..n {
                for c4 in (c3 + 1)..n {
                    for c5 in (c4 + 1)..n {
                        let hand = classify([cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]]);
                        if best.is_none_or(|b| hand > b) {
                            best = Some(hand);
                        }
                    }
                }
            }
        }
    }

    best.ok_or(EvalError::NotEnoughCards(n))
}
