// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Bot, plays a game between bots and logs the results.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::Parser;
use log::{error, info};

use showdown_bot::{
    AlwaysCallOrCheck, Config, NICKNAMES, RandomBot,
    core::{
        action::ActionSource,
        config::TableConfig,
        event::{TableEvent, TableObserver, TableSnapshot},
        poker::Chips,
    },
};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of bots.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(3..=8))]
    bots: u8,
    /// The bots starting chips.
    #[clap(long, default_value_t = 1_000)]
    chips: u32,
    /// Stop after this many hands.
    #[clap(long, default_value_t = 1_000)]
    hands: u64,
    /// Seed for reproducible games.
    #[clap(long)]
    seed: Option<u64>,
    /// Bots always call or check.
    #[clap(long)]
    passive: bool,
}

/// Logs the end of each hand.
struct HandLogger;

impl TableObserver for HandLogger {
    fn on_event(&mut self, event: &TableEvent, table: &TableSnapshot) {
        match event {
            TableEvent::PotAwarded { payoffs } => {
                let stacks = table
                    .players
                    .iter()
                    .map(|p| format!("{} {}", p.name, p.chips))
                    .collect::<Vec<_>>();
                info!(
                    "Paid {} players, stacks: {}",
                    payoffs.len(),
                    stacks.join(", ")
                );
            }
            TableEvent::PlayerEliminated { name } => info!("{name} is out"),
            _ => {}
        }
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = Config {
        bots: (cli.bots as usize).min(NICKNAMES.len()),
        chips: Chips::new(cli.chips),
        seed: cli.seed,
        table: TableConfig {
            max_hands: Some(cli.hands),
            ..TableConfig::default()
        },
    };

    let seed = cli.seed;
    let passive = cli.passive;
    let factory = move |idx: usize| -> Box<dyn ActionSource> {
        if passive {
            Box::new(AlwaysCallOrCheck)
        } else {
            match seed {
                Some(seed) => Box::new(RandomBot::with_seed(seed.wrapping_add(idx as u64))),
                None => Box::new(RandomBot::new()),
            }
        }
    };

    match showdown_bot::run(config, factory, &mut HandLogger) {
        Ok(summary) => info!(
            "Game over after {} hands, winner {}",
            summary.hands,
            summary.winner.as_deref().unwrap_or("none")
        ),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
