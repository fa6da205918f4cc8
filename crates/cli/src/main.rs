// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker terminal game.
//!
//! Human players share the keyboard and can play against bots.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};
use std::{io, time::Duration};

use showdown_bot::{Lineup, RandomBot};
use showdown_core::{
    config::TableConfig,
    poker::Chips,
    table::{Seat, Table},
};

pub mod input;
pub mod setup;
pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// A human player name, can be repeated.
    #[clap(long = "player", short)]
    players: Vec<String>,
    /// Number of bots at the table.
    #[clap(long, default_value_t = 0)]
    bots: usize,
    /// The players starting chips.
    #[clap(long, default_value_t = 1_000)]
    chips: u32,
    /// The small blind.
    #[clap(long, default_value_t = 10)]
    small_blind: u32,
    /// The big blind.
    #[clap(long, default_value_t = 20)]
    big_blind: u32,
    /// Seed for reproducible games.
    #[clap(long)]
    seed: Option<u64>,
    /// Stop after this many hands.
    #[clap(long)]
    max_hands: Option<u64>,
    /// Pause between the hand stages in milliseconds.
    #[clap(long, default_value_t = 1_000)]
    pace_ms: u64,
    /// Clear the screen between players, on with more than one human player.
    #[clap(long)]
    hot_seat: bool,
    /// Log debug messages.
    #[clap(long, short)]
    verbose: bool,
}

fn run(cli: Cli) -> Result<()> {
    let table_config = TableConfig {
        small_blind: Chips::new(cli.small_blind),
        big_blind: Chips::new(cli.big_blind),
        max_hands: cli.max_hands,
        ..TableConfig::default()
    };
    table_config.validate()?;

    let seats = if cli.players.is_empty() && cli.bots == 0 {
        setup::read_seats(
            &mut io::stdin().lock(),
            &mut io::stdout(),
            table_config.min_players,
            table_config.max_players,
        )?
    } else {
        let names = cli
            .players
            .iter()
            .map(|name| name.trim().to_string())
            .collect::<Vec<_>>();
        names
            .iter()
            .cloned()
            .chain(setup::bot_names(&names, cli.bots))
            .map(|name| Seat::new(name, Chips::new(cli.chips)))
            .collect::<Vec<_>>()
    };

    let humans = seats.len() - cli.bots.min(seats.len());

    let hot_seat = cli.hot_seat || humans > 1;
    let input = input::HumanInput::new(io::stdin().lock(), io::stdout(), hot_seat);
    let mut lineup = Lineup::with_fallback(input);

    for (idx, seat) in seats.iter().skip(humans).enumerate() {
        let bot = match cli.seed {
            Some(seed) => RandomBot::with_seed(seed.wrapping_add(idx as u64 + 1)),
            None => RandomBot::new(),
        };
        lineup.insert(seat.name.clone(), bot);
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut table = Table::with_rng(table_config, seats, rng)?;
    info!(
        "Starting game with {} humans and {} bots, blinds {}/{}",
        humans,
        lineup.len(),
        table.config().small_blind,
        table.config().big_blind
    );

    let mut view = terminal::TerminalView::new(io::stdout(), Duration::from_millis(cli.pace_ms));
    let summary = table.play(&mut lineup, &mut view)?;
    info!("Game over after {} hands", summary.hands);

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
