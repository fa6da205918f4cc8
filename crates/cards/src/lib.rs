// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let ad = Card::new(Rank::Ace, Suit::Diamonds);
//!
//! // Cards are ordered by rank first and by suit to break ties.
//! assert!(ah > ad);
//! assert!(Card::new(Rank::King, Suit::Spades) < ad);
//! assert_eq!(ah.rank().value(), 14);
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hole = (deck.deal(), deck.deal());
//! assert!(hole.0.is_some() && hole.1.is_some());
//! assert_eq!(deck.count(), Deck::SIZE - 2);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};
