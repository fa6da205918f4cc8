// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker core types.
//!
//! A [Table](table::Table) runs hands for 3 to 8 players: it deals the cards,
//! runs a [BettingRound](betting::BettingRound) for each stage, and pays the
//! pot to the winners at showdown. Player decisions come from an
//! [ActionSource](action::ActionSource) and the table reports its progress to
//! a [TableObserver](event::TableObserver):
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use showdown_core::{
//!     action::{ActionRequest, ActionSource, PlayerAction},
//!     config::TableConfig,
//!     event::{NoopObserver, TableSnapshot},
//!     poker::Chips,
//!     table::{Seat, Table},
//! };
//!
//! struct CallingStation;
//!
//! impl ActionSource for CallingStation {
//!     fn next_action(&mut self, req: &ActionRequest, _table: &TableSnapshot) -> PlayerAction {
//!         if req.can_check() {
//!             PlayerAction::Check
//!         } else {
//!             PlayerAction::Call
//!         }
//!     }
//! }
//!
//! let seats = ["Alice", "Bob", "Carol"]
//!     .into_iter()
//!     .map(|name| Seat::new(name, Chips::new(1_000)))
//!     .collect();
//! let rng = StdRng::seed_from_u64(42);
//! let mut table = Table::with_rng(TableConfig::default(), seats, rng).unwrap();
//!
//! let summary = table.play_hand(&mut CallingStation, &mut NoopObserver).unwrap();
//! assert!(summary.showdown);
//!
//! let total = table.players().iter().map(|p| p.chips).sum::<Chips>();
//! assert_eq!(total, Chips::new(3_000));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod action;
pub mod betting;
pub mod config;
pub mod error;
pub mod event;
pub mod player;
pub mod poker;
pub mod pot;
pub mod table;
