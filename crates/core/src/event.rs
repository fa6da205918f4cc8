// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table events and the read-only table view given to collaborators.
use serde::{Deserialize, Serialize};

use crate::{
    betting::Stage,
    error::ActionError,
    player::{LastAction, Player},
    poker::{Card, Chips, PlayerCards, RankedHand},
    pot::{Payoff, Pot},
};

/// A player state as seen by the collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// The player name.
    pub name: String,
    /// The player chips.
    pub chips: Chips,
    /// The player bet in this round.
    pub bet: Chips,
    /// The player folded.
    pub folded: bool,
    /// The player is all in.
    pub all_in: bool,
    /// The last player action.
    pub action: LastAction,
    /// The player hole cards.
    pub hole_cards: PlayerCards,
    /// The player has the button.
    pub has_button: bool,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            chips: player.chips,
            bet: player.bet,
            folded: player.folded,
            all_in: player.is_all_in(),
            action: player.action,
            hole_cards: player.hole_cards,
            has_button: player.has_button,
        }
    }
}

/// A read-only view of the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// The hand stage.
    pub stage: Stage,
    /// The dealer seat.
    pub dealer: usize,
    /// The community cards.
    pub board: Vec<Card>,
    /// The chips in the pot.
    pub pot: Chips,
    /// The players in seat order.
    pub players: Vec<PlayerSnapshot>,
}

impl TableSnapshot {
    /// Captures the table state.
    pub fn capture(
        stage: Stage,
        dealer: usize,
        players: &[Player],
        pot: &Pot,
        board: &[Card],
    ) -> Self {
        Self {
            stage,
            dealer,
            board: board.to_vec(),
            pot: pot.chips(),
            players: players.iter().map(PlayerSnapshot::from).collect(),
        }
    }

    /// The total chips on the table, pot included.
    pub fn total_chips(&self) -> Chips {
        self.pot + self.players.iter().map(|p| p.chips).sum::<Chips>()
    }
}

/// A player hand at showdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowdownHand {
    /// The player seat.
    pub seat: usize,
    /// The player name.
    pub name: String,
    /// The best hand for this player.
    pub hand: RankedHand,
}

/// Events reported by the table as a hand progresses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TableEvent {
    /// A new hand has been dealt.
    HandStarted {
        /// The hand number, starting from 1.
        hand: u64,
        /// The dealer seat.
        dealer: usize,
    },
    /// The blinds have been posted.
    BlindsPosted {
        /// The small blind seat.
        small_seat: usize,
        /// Chips paid for the small blind.
        small: Chips,
        /// The big blind seat.
        big_seat: usize,
        /// Chips paid for the big blind.
        big: Chips,
    },
    /// A betting stage started, with the cards dealt for it.
    StageStarted {
        /// The stage.
        stage: Stage,
        /// The new community cards.
        cards: Vec<Card>,
    },
    /// A player action was applied.
    PlayerActed {
        /// The player seat.
        seat: usize,
        /// The action taken.
        action: LastAction,
        /// Chips the player added to the pot.
        paid: Chips,
    },
    /// A player action was rejected.
    ActionRejected {
        /// The player seat.
        seat: usize,
        /// The rejection reason.
        error: ActionError,
    },
    /// No more betting is possible, the remaining cards are dealt out.
    AllInRunout,
    /// The hands of the players at showdown.
    Showdown {
        /// The hands in seat order.
        hands: Vec<ShowdownHand>,
    },
    /// The pot has been paid.
    PotAwarded {
        /// The winners.
        payoffs: Vec<Payoff>,
    },
    /// A player ran out of chips and left the table.
    PlayerEliminated {
        /// The player name.
        name: String,
    },
    /// The game has finished.
    GameOver {
        /// The winner or the chip leader.
        winner: Option<String>,
    },
}

/// Receives the table events.
pub trait TableObserver {
    /// Handles an event, the snapshot is the table state after the event.
    fn on_event(&mut self, event: &TableEvent, table: &TableSnapshot);
}

impl<O: TableObserver + ?Sized> TableObserver for &mut O {
    fn on_event(&mut self, event: &TableEvent, table: &TableSnapshot) {
        (**self).on_event(event, table)
    }
}

impl<O: TableObserver + ?Sized> TableObserver for Box<O> {
    fn on_event(&mut self, event: &TableEvent, table: &TableSnapshot) {
        (**self).on_event(event, table)
    }
}

/// An observer that ignores all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TableObserver for NoopObserver {
    fn on_event(&mut self, _event: &TableEvent, _table: &TableSnapshot) {}
}
