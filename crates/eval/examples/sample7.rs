// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example sample7 -- --hands 1000000
// ...
// Total hands      1000000
// Elapsed:         1.204s
// Hands/sec:       830564
//
// High Card:       174193
// Pair:            438281
// ...
// ```
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of 7 cards hands to sample.
    #[clap(long, default_value_t = 100_000)]
    hands: usize,
    /// The random seed.
    #[clap(long, default_value_t = 7)]
    seed: u64,
}

#[rustfmt::skip]
fn main() {
    let cli = Cli::parse();
    let mut rng = StdRng::seed_from_u64(cli.seed);

    let now = Instant::now();
    let mut counts = [0usize; 10];

    for _ in 0..cli.hands {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let hand = (0..7).filter_map(|_| deck.deal()).collect::<Vec<_>>();
        let ranked = best_hand(&hand).expect("7 cards hand");
        counts[ranked.category() as usize] += 1;
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandCategory::HighCard as usize]);
    println!("Pair:            {}", counts[HandCategory::Pair as usize]);
    println!("Two Pairs:       {}", counts[HandCategory::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandCategory::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandCategory::Straight as usize]);
    println!("Flush:           {}", counts[HandCategory::Flush as usize]);
    println!("Full House:      {}", counts[HandCategory::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandCategory::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandCategory::StraightFlush as usize]);
    println!("Royal Flush:     {}", counts[HandCategory::RoyalFlush as usize]);
}
