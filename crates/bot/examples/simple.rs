// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A simple example bot strategy playing against random bots.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;

use showdown_bot::{
    RandomBot,
    core::{
        action::{ActionRequest, ActionSource, PlayerAction},
        config::TableConfig,
        event::{NoopObserver, TableSnapshot},
        poker::{Chips, PlayerCards, Rank},
    },
};

/// Only plays pairs and aces, then calls down.
struct PairsAndAces;

impl ActionSource for PairsAndAces {
    fn next_action(&mut self, req: &ActionRequest, table: &TableSnapshot) -> PlayerAction {
        let playable = table.players.get(req.seat).is_some_and(|p| match p.hole_cards {
            PlayerCards::Cards(c1, c2) => {
                c1.rank() == c2.rank() || c1.rank() == Rank::Ace || c2.rank() == Rank::Ace
            }
            PlayerCards::None => false,
        });

        if req.can_check() {
            PlayerAction::Check
        } else if playable {
            PlayerAction::Call
        } else {
            PlayerAction::Fold
        }
    }
}

#[derive(Debug, Parser)]
struct Cli {
    /// Number of games to play.
    #[clap(long, default_value_t = 20)]
    games: u64,
    /// The random seed.
    #[clap(long, default_value_t = 7)]
    seed: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut wins = 0;
    for game in 0..cli.games {
        let config = showdown_bot::Config {
            bots: 4,
            chips: Chips::new(1_000),
            seed: Some(cli.seed + game),
            table: TableConfig {
                max_hands: Some(500),
                ..TableConfig::default()
            },
        };

        // The first seat plays the example strategy.
        let seed = cli.seed + game;
        let summary = showdown_bot::run(
            config,
            |idx| -> Box<dyn ActionSource> {
                if idx == 0 {
                    Box::new(PairsAndAces)
                } else {
                    Box::new(RandomBot::with_seed(seed * 10 + idx as u64))
                }
            },
            &mut NoopObserver,
        )?;

        if summary.winner.as_deref() == Some(showdown_bot::NICKNAMES[0]) {
            wins += 1;
        }
    }

    println!("Pairs and aces won {wins} of {} games", cli.games);
    Ok(())
}
