// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The hand pot.
use serde::{Deserialize, Serialize};

use crate::poker::{Chips, RankedHand};

/// A single pot that collects all the bets in a hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    chips: Chips,
}

impl Pot {
    /// The chips in the pot.
    pub fn chips(&self) -> Chips {
        self.chips
    }

    /// Adds chips to the pot.
    pub(crate) fn add(&mut self, chips: Chips) {
        self.chips += chips;
    }

    /// Empties the pot splitting it among the winners.
    ///
    /// The winners seats must be given in payout order, each winner gets an
    /// equal share and the odd chips go one each starting from the first seat.
    pub(crate) fn split(&mut self, winners: &[usize]) -> Vec<(usize, Chips)> {
        if winners.is_empty() {
            return Vec::new();
        }

        let count = winners.len() as u32;
        let share = self.chips / count;
        let odd = (self.chips % count).amount() as usize;
        self.chips = Chips::ZERO;

        winners
            .iter()
            .enumerate()
            .map(|(idx, &seat)| {
                let extra = if idx < odd { Chips::new(1) } else { Chips::ZERO };
                (seat, share + extra)
            })
            .collect()
    }
}

/// The chips won by a player at the end of a hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payoff {
    /// The winner seat.
    pub seat: usize,
    /// The winner name.
    pub name: String,
    /// The chips won.
    pub chips: Chips,
    /// The winning hand, none if the pot was uncontested.
    pub hand: Option<RankedHand>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_single_winner() {
        let mut pot = Pot::default();
        pot.add(Chips::new(150));
        pot.add(Chips::new(50));
        assert_eq!(pot.chips(), Chips::new(200));

        assert_eq!(pot.split(&[2]), vec![(2, Chips::new(200))]);
        assert_eq!(pot.chips(), Chips::ZERO);
    }

    #[test]
    fn split_odd_chips() {
        let mut pot = Pot::default();
        pot.add(Chips::new(101));
        let shares = pot.split(&[3, 0, 1]);
        assert_eq!(
            shares,
            vec![(3, Chips::new(34)), (0, Chips::new(34)), (1, Chips::new(33))]
        );

        let total = shares.iter().map(|(_, c)| *c).sum::<Chips>();
        assert_eq!(total, Chips::new(101));
    }

    #[test]
    fn split_no_winners() {
        let mut pot = Pot::default();
        pot.add(Chips::new(10));
        assert!(pot.split(&[]).is_empty());
        assert_eq!(pot.chips(), Chips::new(10));
    }
}
