// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator searches all
//! the 5-cards subsets of a hand and returns the best one as a [RankedHand], a
//! hand category with the rank values used to break ties:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = [
//!     Card::new(Rank::Five, Suit::Clubs),
//!     Card::new(Rank::Five, Suit::Diamonds),
//!     Card::new(Rank::Five, Suit::Hearts),
//!     Card::new(Rank::Nine, Suit::Spades),
//!     Card::new(Rank::Nine, Suit::Clubs),
//!     Card::new(Rank::Deuce, Suit::Hearts),
//!     Card::new(Rank::Trey, Suit::Diamonds),
//! ];
//!
//! let hand = best_hand(&cards).unwrap();
//! assert_eq!(hand.category(), HandCategory::FullHouse);
//! assert_eq!(hand.ranks(), [5, 5, 5, 9, 9]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandCategory, RankedHand, best_hand, classify};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};
