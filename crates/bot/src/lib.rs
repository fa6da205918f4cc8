// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Bot.
//!
//! Automated players that can sit at a [Table](showdown_core::table::Table),
//! and a [Lineup] that gives each player its own action source.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use showdown_core::{
    action::ActionSource,
    config::TableConfig,
    event::TableObserver,
    poker::Chips,
    table::{GameSummary, Seat, Table},
};

mod lineup;
mod strategy;

pub use lineup::Lineup;
pub use showdown_core as core;
pub use strategy::{AlwaysCallOrCheck, RandomBot};

/// Bot games configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of bots at the table.
    pub bots: usize,
    /// The bots starting chips.
    pub chips: Chips,
    /// Seed for the deck and the bots, random if not set.
    pub seed: Option<u64>,
    /// The table settings.
    pub table: TableConfig,
}

/// Names given to the bots in seat order.
pub static NICKNAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Mike",
];

/// Plays a game between bots, the factory creates the source for each seat.
pub fn run<F, S, O>(config: Config, factory: F, observer: &mut O) -> Result<GameSummary>
where
    F: Fn(usize) -> S,
    S: ActionSource + 'static,
    O: TableObserver + ?Sized,
{
    let mut lineup = Lineup::new();
    let seats = NICKNAMES
        .iter()
        .take(config.bots)
        .enumerate()
        .map(|(idx, name)| {
            lineup.insert(*name, factory(idx));
            Seat::new(*name, config.chips)
        })
        .collect();

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut table = Table::with_rng(config.table, seats, rng)?;
    info!("Starting game with {} bots", lineup.len());

    let summary = table.play(&mut lineup, observer)?;
    Ok(summary)
}
