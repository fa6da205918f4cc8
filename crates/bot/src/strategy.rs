// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bot strategies.
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use showdown_core::{
    action::{ActionRequest, ActionSource, PlayerAction},
    error::ActionError,
    event::TableSnapshot,
    poker::PlayerCards,
};

/// A bot that never folds if it can stay in the hand.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysCallOrCheck;

impl ActionSource for AlwaysCallOrCheck {
    fn next_action(&mut self, req: &ActionRequest, _table: &TableSnapshot) -> PlayerAction {
        if req.can_call() {
            PlayerAction::Call
        } else if req.can_check() {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        }
    }
}

/// A bot that raises pocket pairs preflop and sometimes folds.
#[derive(Debug, Clone)]
pub struct RandomBot {
    rng: StdRng,
    fold_probability: f64,
    raise_probability: f64,
}

impl RandomBot {
    /// Creates a bot seeded from the OS.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a bot with a reproducible seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            fold_probability: 0.1,
            raise_probability: 0.8,
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionSource for RandomBot {
    fn next_action(&mut self, req: &ActionRequest, table: &TableSnapshot) -> PlayerAction {
        // Some randomness.
        let p = self.rng.random::<f64>();

        let pocket_pair = table.players.get(req.seat).is_some_and(|player| {
            matches!(player.hole_cards, PlayerCards::Cards(c1, c2) if c1.rank() == c2.rank())
        });

        // Raise preflop with a pair if nobody raised yet.
        if pocket_pair
            && table.board.is_empty()
            && req.can_bet()
            && req.min_bet <= req.big_blind
            && p < self.raise_probability
        {
            let amount = (req.min_bet + req.big_blind).min(req.max_bet());
            return PlayerAction::Bet(amount);
        }

        if p > 1.0 - self.fold_probability && !req.can_check() {
            PlayerAction::Fold
        } else if req.can_call() {
            PlayerAction::Call
        } else if req.can_check() {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        }
    }

    fn rejected(&mut self, req: &ActionRequest, err: &ActionError) {
        debug!("Bot {} action rejected: {err}", req.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_core::{
        action::ActionKind,
        betting::Stage,
        event::PlayerSnapshot,
        player::LastAction,
        poker::{Card, Chips, Rank, Suit},
    };

    fn request(actions: Vec<ActionKind>, min_bet: u32) -> ActionRequest {
        ActionRequest {
            seat: 0,
            name: "Bot".to_string(),
            chips: Chips::new(1_000),
            bet: Chips::ZERO,
            to_call: Chips::new(min_bet),
            min_bet: Chips::new(min_bet),
            min_raise: Chips::new(20),
            big_blind: Chips::new(20),
            actions,
        }
    }

    fn snapshot(hole_cards: PlayerCards) -> TableSnapshot {
        TableSnapshot {
            stage: Stage::Preflop,
            dealer: 1,
            board: Vec::new(),
            pot: Chips::new(30),
            players: vec![PlayerSnapshot {
                name: "Bot".to_string(),
                chips: Chips::new(1_000),
                bet: Chips::ZERO,
                folded: false,
                all_in: false,
                action: LastAction::None,
                hole_cards,
                has_button: false,
            }],
        }
    }

    #[test]
    fn always_call_or_check() {
        let table = snapshot(PlayerCards::None);
        let mut bot = AlwaysCallOrCheck;

        let req = request(vec![ActionKind::Fold, ActionKind::Call, ActionKind::Bet], 20);
        assert_eq!(bot.next_action(&req, &table), PlayerAction::Call);

        let req = request(vec![ActionKind::Fold, ActionKind::Check], 0);
        assert_eq!(bot.next_action(&req, &table), PlayerAction::Check);

        let req = request(vec![ActionKind::Fold], 20);
        assert_eq!(bot.next_action(&req, &table), PlayerAction::Fold);
    }

    #[test]
    fn random_bot_raises_pairs() {
        let pair = PlayerCards::Cards(
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Spades),
        );
        let table = snapshot(pair);
        let req = request(vec![ActionKind::Fold, ActionKind::Call, ActionKind::Bet], 20);

        let mut bot = RandomBot::with_seed(3);
        let actions = (0..200)
            .map(|_| bot.next_action(&req, &table))
            .collect::<Vec<_>>();

        assert!(actions.contains(&PlayerAction::Bet(Chips::new(40))));
        assert!(
            actions
                .iter()
                .all(|a| matches!(a, PlayerAction::Bet(_) | PlayerAction::Call | PlayerAction::Fold))
        );
    }

    #[test]
    fn random_bot_never_folds_a_check() {
        let table = snapshot(PlayerCards::None);
        let req = request(vec![ActionKind::Fold, ActionKind::Check], 0);

        let mut bot = RandomBot::with_seed(11);
        for _ in 0..200 {
            assert_eq!(bot.next_action(&req, &table), PlayerAction::Check);
        }
    }
}
