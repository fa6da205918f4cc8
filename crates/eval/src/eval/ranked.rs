// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ranked hand type.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::Card;

use super::HandCategory;

/// A 5-cards hand with its category and tie breaking ranks.
///
/// Equality and ordering only consider the category and the ranks, two hands
/// with the same ranks and different suits are tied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RankedHand {
    category: HandCategory,
    ranks: [u8; 5],
    cards: [Card; 5],
}

impl RankedHand {
    pub(crate) fn new(category: HandCategory, ranks: [u8; 5], cards: [Card; 5]) -> Self {
        Self {
            category,
            ranks,
            cards,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The hand rank values in order of significance.
    pub fn ranks(&self) -> [u8; 5] {
        self.ranks
    }

    /// The five cards that make this hand.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }
}

impl PartialEq for RankedHand {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.ranks == other.ranks
    }
}

impl Eq for RankedHand {}

impl PartialOrd for RankedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.ranks.cmp(&other.ranks))
    }
}

impl fmt::Display for RankedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }

        Ok(())
    }
}
