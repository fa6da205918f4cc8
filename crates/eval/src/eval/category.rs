// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and 5-cards hand classification.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, Rank};

use super::RankedHand;

/// A poker hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No other category.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// The category label.
    pub fn label(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "high card",
            HandCategory::Pair => "pair",
            HandCategory::TwoPair => "two pair",
            HandCategory::ThreeOfAKind => "three of a kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full house",
            HandCategory::FourOfAKind => "four of a kind",
            HandCategory::StraightFlush => "straight flush",
            HandCategory::RoyalFlush => "royal flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classifies a 5-cards hand.
///
/// The hand gets the highest category it satisfies and its rank values are
/// ordered by significance: groups with more cards first and higher ranks
/// first within groups of the same size, so that a full house of fives over
/// nines has ranks `[5, 5, 5, 9, 9]`. The ace of a wheel straight counts as 1.
pub fn classify(cards: [Card; 5]) -> RankedHand {
    let mut counts = [0u8; 15];
    for card in &cards {
        counts[card.rank().value() as usize] += 1;
    }

    // (count, rank) groups, by count and then by rank.
    let mut groups = (Rank::Deuce.value()..=Rank::Ace.value())
        .rev()
        .filter(|&r| counts[r as usize] > 0)
        .map(|r| (counts[r as usize], r))
        .collect::<Vec<_>>();
    groups.sort_by(|g1, g2| g2.0.cmp(&g1.0));

    let mut ranks = [0u8; 5];
    for (slot, rank) in ranks
        .iter_mut()
        .zip(groups.iter().flat_map(|&(n, r)| std::iter::repeat_n(r, n as usize)))
    {
        *slot = rank;
    }

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight = straight_ranks(groups.len(), &ranks);
    let shape = groups.iter().map(|g| g.0).collect::<Vec<_>>();

    let (category, ranks) = match (straight, shape.as_slice()) {
        (Some(s), _) if is_flush && s[0] == Rank::Ace.value() => (HandCategory::RoyalFlush, s),
        (Some(s), _) if is_flush => (HandCategory::StraightFlush, s),
        (_, [4, 1]) => (HandCategory::FourOfAKind, ranks),
        (_, [3, 2]) => (HandCategory::FullHouse, ranks),
        _ if is_flush => (HandCategory::Flush, ranks),
        (Some(s), _) => (HandCategory::Straight, s),
        (_, [3, 1, 1]) => (HandCategory::ThreeOfAKind, ranks),
        (_, [2, 2, 1]) => (HandCategory::TwoPair, ranks),
        (_, [2, 1, 1, 1]) => (HandCategory::Pair, ranks),
        _ => (HandCategory::HighCard, ranks),
    };

    RankedHand::new(category, ranks, cards)
}

/// Returns the straight ranks, highest first, if the ranks make a straight.
fn straight_ranks(distinct: usize, ranks: &[u8; 5]) -> Option<[u8; 5]> {
    if distinct != 5 {
        return None;
    }

    if ranks[0] - ranks[4] == 4 {
        Some(*ranks)
    } else if *ranks == [14, 5, 4, 3, 2] {
        Some([5, 4, 3, 2, 1])
    } else {
        None
    }
}
