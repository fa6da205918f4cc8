// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Betting round state machine.
//!
//! A [BettingRound] is created for each stage of a hand and mutates the
//! players bets until it reaches a terminal [RoundState]. The round keeps two
//! counters to detect its end: the seat of the last raiser and the number of
//! players that acted since the last raise, the round completes when the action
//! gets back to the raiser, or all the players in the hand have acted, and all
//! players that can still bet have matched the minimum bet.
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    action::{ActionKind, ActionRequest, ActionSource, PlayerAction},
    config::TableConfig,
    error::ActionError,
    event::{TableEvent, TableObserver, TableSnapshot},
    player::{LastAction, Player},
    poker::{Card, Chips},
    pot::Pot,
};

/// The betting stages of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    /// Betting on the hole cards.
    Preflop,
    /// Betting after the first three community cards.
    Flop,
    /// Betting after the fourth card.
    Turn,
    /// Betting after the last card.
    River,
}

impl Stage {
    /// The community cards dealt when this stage starts.
    pub fn cards_to_deal(&self) -> usize {
        match self {
            Stage::Preflop => 0,
            Stage::Flop => 3,
            Stage::Turn | Stage::River => 1,
        }
    }

    /// The stage that follows this one.
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Preflop => Some(Stage::Flop),
            Stage::Flop => Some(Stage::Turn),
            Stage::Turn => Some(Stage::River),
            Stage::River => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Preflop => "preflop",
            Stage::Flop => "flop",
            Stage::Turn => "turn",
            Stage::River => "river",
        };

        write!(f, "{s}")
    }
}

/// The betting round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Waiting for the player at the given seat.
    AwaitingAction(usize),
    /// All bets are settled.
    RoundComplete,
    /// Everybody else folded.
    SinglePlayerRemaining,
    /// No more than one player can bet.
    AllRemainingAllIn,
}

impl RoundState {
    /// Checks if the round has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundState::AwaitingAction(_))
    }
}

/// An action applied to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// The player seat.
    pub seat: usize,
    /// The resulting action.
    pub action: LastAction,
    /// The chips paid into the pot.
    pub paid: Chips,
}

/// The posted blinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blinds {
    /// The small blind seat.
    pub small_seat: usize,
    /// Chips paid by the small blind.
    pub small: Chips,
    /// The big blind seat.
    pub big_seat: usize,
    /// Chips paid by the big blind.
    pub big: Chips,
}

/// Posts the blinds for the two seats after the dealer.
///
/// A player that cannot cover a blind goes all in.
pub fn post_blinds(
    players: &mut [Player],
    pot: &mut Pot,
    dealer: usize,
    small_blind: Chips,
    big_blind: Chips,
) -> Blinds {
    let num_players = players.len();
    let small_seat = (dealer + 1) % num_players;
    let big_seat = (dealer + 2) % num_players;

    let small = players[small_seat].bet_to(small_blind);
    players[small_seat].action = LastAction::SmallBlind;
    pot.add(small);

    let big = players[big_seat].bet_to(big_blind);
    players[big_seat].action = LastAction::BigBlind;
    pot.add(big);

    debug!(
        "Blinds {} {small}, {} {big}",
        players[small_seat].name, players[big_seat].name
    );

    Blinds {
        small_seat,
        small,
        big_seat,
        big,
    }
}

/// A betting round for one stage of a hand.
#[derive(Debug, Clone)]
pub struct BettingRound {
    stage: Stage,
    dealer: usize,
    big_blind: Chips,
    min_bet: Chips,
    raiser: usize,
    acted_since_raise: usize,
    index: usize,
    state: RoundState,
    auto_call: Option<Applied>,
    invalid_actions: usize,
    max_invalid_actions: usize,
}

impl BettingRound {
    /// Starts the preflop round, the blinds must have been posted.
    pub fn preflop(
        players: &mut [Player],
        pot: &mut Pot,
        dealer: usize,
        config: &TableConfig,
    ) -> Self {
        let num_players = players.len();
        let mut round = Self {
            stage: Stage::Preflop,
            dealer,
            big_blind: config.big_blind,
            min_bet: config.big_blind,
            raiser: (dealer + 2) % num_players,
            acted_since_raise: 0,
            index: (dealer + 3) % num_players,
            state: RoundState::RoundComplete,
            auto_call: None,
            invalid_actions: 0,
            max_invalid_actions: config.max_invalid_actions,
        };

        round.start(players, pot);
        round
    }

    /// Starts a round after the community cards for this stage are dealt.
    pub fn street(
        stage: Stage,
        players: &mut [Player],
        pot: &mut Pot,
        dealer: usize,
        config: &TableConfig,
    ) -> Self {
        for player in players.iter_mut() {
            player.start_round();
        }

        let mut round = Self {
            stage,
            dealer,
            big_blind: config.big_blind,
            min_bet: Chips::ZERO,
            raiser: dealer,
            acted_since_raise: 0,
            index: (dealer + 1) % players.len(),
            state: RoundState::RoundComplete,
            auto_call: None,
            invalid_actions: 0,
            max_invalid_actions: config.max_invalid_actions,
        };

        round.start(players, pot);
        round
    }

    /// The round state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// The round stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The bet every player must match.
    pub fn min_bet(&self) -> Chips {
        self.min_bet
    }

    /// The seat of the last raiser.
    pub fn raiser(&self) -> usize {
        self.raiser
    }

    /// Number of players that acted since the last raise.
    pub fn acted_since_raise(&self) -> usize {
        self.acted_since_raise
    }

    /// The call made for the last player that could bet when the round started.
    pub fn auto_call(&self) -> Option<Applied> {
        self.auto_call
    }

    /// Returns the request for the player to act, if any.
    pub fn action_request(&self, players: &[Player]) -> Option<ActionRequest> {
        let RoundState::AwaitingAction(seat) = self.state else {
            return None;
        };

        let player = &players[seat];
        let min_raise = self.min_raise();
        let available = player.chips + player.bet;

        let mut actions = vec![ActionKind::Fold];
        if player.bet >= self.min_bet {
            actions.push(ActionKind::Check);
        } else {
            actions.push(ActionKind::Call);
        }

        if available > self.min_bet && available >= min_raise {
            actions.push(ActionKind::Bet);
        }

        let to_call = (self.min_bet - player.bet).min(player.chips);

        Some(ActionRequest {
            seat,
            name: player.name.clone(),
            chips: player.chips,
            bet: player.bet,
            to_call,
            min_bet: self.min_bet,
            min_raise,
            big_blind: self.big_blind,
            actions,
        })
    }

    /// Applies an action for the player to act and moves to the next player.
    pub fn apply(
        &mut self,
        players: &mut [Player],
        pot: &mut Pot,
        action: PlayerAction,
    ) -> Result<Applied, ActionError> {
        let RoundState::AwaitingAction(seat) = self.state else {
            return Err(ActionError::NotAwaitingAction);
        };

        let applied = match action {
            PlayerAction::Fold => {
                players[seat].fold();
                Applied {
                    seat,
                    action: LastAction::Fold,
                    paid: Chips::ZERO,
                }
            }
            PlayerAction::Check => {
                let player = &players[seat];
                if player.bet < self.min_bet {
                    return Err(ActionError::CannotCheck {
                        to_call: (self.min_bet - player.bet).min(player.chips),
                    });
                }

                self.call(&mut players[seat], seat)
            }
            PlayerAction::Call => self.call(&mut players[seat], seat),
            PlayerAction::Bet(amount) => {
                let player = &mut players[seat];
                let min_raise = self.min_raise();
                let available = player.chips + player.bet;

                let amount = if amount > available {
                    if available < min_raise {
                        return Err(ActionError::InsufficientChips { amount, available });
                    }

                    available
                } else {
                    amount
                };

                if amount < min_raise {
                    return Err(ActionError::BetTooSmall {
                        amount,
                        minimum: min_raise,
                    });
                }

                if amount == self.min_bet {
                    self.call(player, seat)
                } else {
                    let paid = player.bet_to(amount);
                    player.action = if player.chips == Chips::ZERO {
                        LastAction::AllIn
                    } else if self.min_bet == Chips::ZERO {
                        LastAction::Bet
                    } else {
                        LastAction::Raise
                    };

                    self.min_bet = amount;
                    self.raiser = seat;
                    self.acted_since_raise = 1;

                    Applied {
                        seat,
                        action: player.action,
                        paid,
                    }
                }
            }
        };

        pot.add(applied.paid);
        self.invalid_actions = 0;

        debug!(
            "{} {} {} paid {} min bet {} raiser {} acted {}",
            self.stage,
            players[seat].name,
            applied.action.label(),
            applied.paid,
            self.min_bet,
            self.raiser,
            self.acted_since_raise,
        );

        self.finish_turn(players);
        Ok(applied)
    }

    /// Runs the round until it reaches a terminal state.
    ///
    /// Rejected actions are reported to the source and the player is asked
    /// again, a player is folded after too many consecutive rejections.
    pub fn run<S, O>(
        &mut self,
        players: &mut [Player],
        pot: &mut Pot,
        board: &[Card],
        source: &mut S,
        observer: &mut O,
    ) -> RoundState
    where
        S: ActionSource + ?Sized,
        O: TableObserver + ?Sized,
    {
        if let Some(applied) = self.auto_call.take() {
            self.notify_applied(applied, players, pot, board, observer);
        }

        while let Some(req) = self.action_request(players) {
            let snapshot = self.snapshot(players, pot, board);
            let action = source.next_action(&req, &snapshot);

            match self.apply(players, pot, action) {
                Ok(applied) => self.notify_applied(applied, players, pot, board, observer),
                Err(err) => {
                    debug!("{} action {action} rejected: {err}", req.name);
                    source.rejected(&req, &err);
                    observer.on_event(
                        &TableEvent::ActionRejected {
                            seat: req.seat,
                            error: err,
                        },
                        &snapshot,
                    );

                    self.invalid_actions += 1;
                    if self.invalid_actions >= self.max_invalid_actions {
                        warn!(
                            "{} folded after {} invalid actions",
                            req.name, self.invalid_actions
                        );

                        if let Ok(applied) = self.apply(players, pot, PlayerAction::Fold) {
                            self.notify_applied(applied, players, pot, board, observer);
                        }
                    }
                }
            }
        }

        self.state
    }

    fn notify_applied<O>(
        &self,
        applied: Applied,
        players: &[Player],
        pot: &Pot,
        board: &[Card],
        observer: &mut O,
    ) where
        O: TableObserver + ?Sized,
    {
        let event = TableEvent::PlayerActed {
            seat: applied.seat,
            action: applied.action,
            paid: applied.paid,
        };

        observer.on_event(&event, &self.snapshot(players, pot, board));
    }

    fn snapshot(&self, players: &[Player], pot: &Pot, board: &[Card]) -> TableSnapshot {
        TableSnapshot::capture(self.stage, self.dealer, players, pot, board)
    }

    fn min_raise(&self) -> Chips {
        self.big_blind.max(self.min_bet)
    }

    /// Matches the minimum bet, or checks if there is nothing to call.
    fn call(&mut self, player: &mut Player, seat: usize) -> Applied {
        let paid = if player.bet < self.min_bet {
            let paid = player.bet_to(self.min_bet);
            player.action = if player.chips == Chips::ZERO {
                LastAction::AllIn
            } else {
                LastAction::Call
            };
            paid
        } else {
            player.action = LastAction::Check;
            Chips::ZERO
        };

        self.acted_since_raise += 1;

        Applied {
            seat,
            action: player.action,
            paid,
        }
    }

    /// Checks for rounds that need no decisions and finds the first player.
    fn start(&mut self, players: &mut [Player], pot: &mut Pot) {
        let active = players.iter().filter(|p| !p.folded).count();
        let can_act = players.iter().filter(|p| p.can_act()).count();

        if active <= 1 {
            self.state = RoundState::SinglePlayerRemaining;
        } else if can_act == 0 {
            self.state = RoundState::AllRemainingAllIn;
        } else if can_act == 1 {
            // The last player with chips only has to match the all in bets.
            let highest = players
                .iter()
                .filter(|p| !p.folded)
                .map(|p| p.bet)
                .max()
                .unwrap_or_default();

            if let Some(seat) = players.iter().position(|p| p.can_act()) {
                let player = &mut players[seat];
                let paid = if player.bet < highest {
                    let paid = player.bet_to(highest);
                    player.action = if player.chips == Chips::ZERO {
                        LastAction::AllIn
                    } else {
                        LastAction::Call
                    };
                    paid
                } else {
                    player.action = LastAction::Check;
                    Chips::ZERO
                };

                pot.add(paid);
                self.auto_call = Some(Applied {
                    seat,
                    action: player.action,
                    paid,
                });
            }

            self.state = RoundState::AllRemainingAllIn;
        } else if players[self.index].can_act() {
            self.state = RoundState::AwaitingAction(self.index);
        } else {
            if players[self.index].is_all_in() {
                self.acted_since_raise += 1;
            }

            self.finish_turn(players);
        }

        debug!("{} round started {:?}", self.stage, self.state);
    }

    /// Checks if the round is over, or moves to the next player that can act.
    fn finish_turn(&mut self, players: &[Player]) {
        let num_players = players.len();

        for _ in 0..num_players {
            if let Some(state) = self.terminal_state(players) {
                self.state = state;
                return;
            }

            self.index = (self.index + 1) % num_players;
            let player = &players[self.index];
            if player.can_act() {
                self.state = RoundState::AwaitingAction(self.index);
                return;
            }

            // All in players are skipped but count as acted.
            if player.is_all_in() {
                self.acted_since_raise += 1;
            }
        }

        self.state = self
            .terminal_state(players)
            .unwrap_or(RoundState::AllRemainingAllIn);
    }

    fn terminal_state(&self, players: &[Player]) -> Option<RoundState> {
        let active = players.iter().filter(|p| !p.folded).count();
        if active <= 1 {
            return Some(RoundState::SinglePlayerRemaining);
        }

        // All in players cannot add chips and are settled with any bet.
        let settled = players
            .iter()
            .filter(|p| p.can_act())
            .all(|p| p.bet == self.min_bet);

        if settled && (self.index == self.raiser || self.acted_since_raise >= active) {
            return Some(RoundState::RoundComplete);
        }

        if players.iter().all(|p| !p.can_act()) {
            return Some(RoundState::AllRemainingAllIn);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::NoopObserver;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::collections::VecDeque;

    fn players(chips: &[u32]) -> Vec<Player> {
        chips
            .iter()
            .enumerate()
            .map(|(idx, &c)| Player::new(format!("Player {idx}"), Chips::new(c)))
            .collect()
    }

    fn total_chips(players: &[Player], pot: &Pot) -> Chips {
        pot.chips() + players.iter().map(|p| p.chips).sum::<Chips>()
    }

    /// Plays the scripted actions, then checks or calls.
    #[derive(Default)]
    struct Script {
        actions: VecDeque<PlayerAction>,
        asked: Vec<usize>,
        rejected: Vec<ActionError>,
    }

    impl Script {
        fn new(actions: &[PlayerAction]) -> Self {
            Self {
                actions: actions.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl ActionSource for Script {
        fn next_action(&mut self, req: &ActionRequest, _table: &TableSnapshot) -> PlayerAction {
            self.asked.push(req.seat);
            self.actions.pop_front().unwrap_or(if req.can_check() {
                PlayerAction::Check
            } else {
                PlayerAction::Call
            })
        }

        fn rejected(&mut self, _req: &ActionRequest, err: &ActionError) {
            self.rejected.push(err.clone());
        }
    }

    /// Checks chips are conserved at every event.
    struct ConservationCheck {
        total: Chips,
        events: usize,
    }

    impl TableObserver for ConservationCheck {
        fn on_event(&mut self, _event: &TableEvent, table: &TableSnapshot) {
            assert_eq!(table.total_chips(), self.total);
            self.events += 1;
        }
    }

    struct NeverAsked;

    impl ActionSource for NeverAsked {
        fn next_action(&mut self, req: &ActionRequest, _table: &TableSnapshot) -> PlayerAction {
            panic!("unexpected request for {}", req.name);
        }
    }

    #[test]
    fn preflop_all_call() {
        let config = TableConfig::default();
        let mut players = players(&[1_000, 1_000, 1_000]);
        let mut pot = Pot::default();

        let blinds = post_blinds(&mut players, &mut pot, 0, config.small_blind, config.big_blind);
        assert_eq!(blinds.small_seat, 1);
        assert_eq!(blinds.big_seat, 2);
        assert_eq!(pot.chips(), Chips::new(30));

        let mut round = BettingRound::preflop(&mut players, &mut pot, 0, &config);
        assert_eq!(round.state(), RoundState::AwaitingAction(0));
        assert_eq!(round.raiser(), 2);

        let mut source = Script::default();
        let mut observer = ConservationCheck {
            total: Chips::new(3_000),
            events: 0,
        };
        let state = round.run(&mut players, &mut pot, &[], &mut source, &mut observer);

        assert_eq!(state, RoundState::RoundComplete);
        assert_eq!(source.asked, vec![0, 1, 2]);
        assert_eq!(observer.events, 3);
        assert_eq!(pot.chips(), Chips::new(60));
        assert!(players.iter().all(|p| p.bet == Chips::new(20)));
        assert_eq!(players[2].action, LastAction::Check);
    }

    #[test]
    fn big_blind_raise_reopens_action() {
        let config = TableConfig::default();
        let mut players = players(&[1_000, 1_000, 1_000]);
        let mut pot = Pot::default();
        post_blinds(&mut players, &mut pot, 0, config.small_blind, config.big_blind);

        let mut round = BettingRound::preflop(&mut players, &mut pot, 0, &config);
        let mut source = Script::new(&[
            PlayerAction::Call,
            PlayerAction::Call,
            PlayerAction::Bet(Chips::new(60)),
        ]);
        let state = round.run(&mut players, &mut pot, &[], &mut source, &mut NoopObserver);

        assert_eq!(state, RoundState::RoundComplete);
        assert_eq!(source.asked, vec![0, 1, 2, 0, 1]);
        assert_eq!(round.raiser(), 2);
        assert_eq!(round.min_bet(), Chips::new(60));
        assert_eq!(pot.chips(), Chips::new(180));
        assert_eq!(players[2].action, LastAction::Raise);
    }

    #[test]
    fn street_starts_left_of_dealer() {
        let config = TableConfig::default();
        let mut players = players(&[1_000, 1_000, 1_000, 1_000]);
        let mut pot = Pot::default();
        players[2].fold();

        let mut round = BettingRound::street(Stage::Flop, &mut players, &mut pot, 1, &config);
        assert_eq!(round.state(), RoundState::AwaitingAction(3));
        assert_eq!(round.min_bet(), Chips::ZERO);

        let mut source = Script::new(&[PlayerAction::Check, PlayerAction::Bet(Chips::new(40))]);
        let state = round.run(&mut players, &mut pot, &[], &mut source, &mut NoopObserver);

        // Seat 3 checks, seat 0 bets, seats 1 and 3 call.
        assert_eq!(state, RoundState::RoundComplete);
        assert_eq!(source.asked, vec![3, 0, 1, 3]);
        assert_eq!(pot.chips(), Chips::new(120));
        assert_eq!(players[0].action, LastAction::Bet);
    }

    #[test]
    fn checked_around_street() {
        let config = TableConfig::default();
        let mut players = players(&[500, 500, 500]);
        let mut pot = Pot::default();

        let mut round = BettingRound::street(Stage::River, &mut players, &mut pot, 2, &config);
        let mut source = Script::default();
        let state = round.run(&mut players, &mut pot, &[], &mut source, &mut NoopObserver);

        assert_eq!(state, RoundState::RoundComplete);
        assert_eq!(source.asked, vec![0, 1, 2]);
        assert_eq!(pot.chips(), Chips::ZERO);
    }

    #[test]
    fn single_player_remaining() {
        let config = TableConfig::default();
        let mut players = players(&[1_000, 1_000, 1_000]);
        let mut pot = Pot::default();
        post_blinds(&mut players, &mut pot, 0, config.small_blind, config.big_blind);

        let mut round = BettingRound::preflop(&mut players, &mut pot, 0, &config);
        let mut source = Script::new(&[PlayerAction::Fold, PlayerAction::Fold]);
        let state = round.run(&mut players, &mut pot, &[], &mut source, &mut NoopObserver);

        assert_eq!(state, RoundState::SinglePlayerRemaining);
        assert_eq!(source.asked, vec![0, 1]);
        assert_eq!(pot.chips(), Chips::new(30));
        assert!(!players[2].folded);
    }

    #[test]
    fn folded_players_short_circuit() {
        let config = TableConfig::default();
        let mut players = players(&[1_000, 1_000, 1_000]);
        let mut pot = Pot::default();
        players[0].fold();
        players[1].fold();

        let mut round = BettingRound::street(Stage::Turn, &mut players, &mut pot, 0, &config);
        assert_eq!(round.state(), RoundState::SinglePlayerRemaining);
        let state = round.run(&mut players, &mut pot, &[], &mut NeverAsked, &mut NoopObserver);
        assert_eq!(state, RoundState::SinglePlayerRemaining);
    }

    #[test]
    fn all_in_players_are_not_asked() {
        let config = TableConfig::default();
        let mut players = players(&[0, 0, 800]);
        let mut pot = Pot::default();
        pot.add(Chips::new(600));

        let mut round = BettingRound::street(Stage::Flop, &mut players, &mut pot, 0, &config);
        assert_eq!(round.state(), RoundState::AllRemainingAllIn);
        assert_eq!(
            round.auto_call(),
            Some(Applied {
                seat: 2,
                action: LastAction::Check,
                paid: Chips::ZERO
            })
        );

        let state = round.run(&mut players, &mut pot, &[], &mut NeverAsked, &mut NoopObserver);
        assert_eq!(state, RoundState::AllRemainingAllIn);
        assert_eq!(pot.chips(), Chips::new(600));
    }

    #[test]
    fn short_blinds_auto_call() {
        let config = TableConfig::default();
        let mut players = players(&[1_000, 5, 15]);
        let mut pot = Pot::default();
        post_blinds(&mut players, &mut pot, 0, config.small_blind, config.big_blind);
        assert!(players[1].is_all_in());
        assert!(players[2].is_all_in());

        let mut round = BettingRound::preflop(&mut players, &mut pot, 0, &config);
        assert_eq!(round.state(), RoundState::AllRemainingAllIn);

        let mut observer = ConservationCheck {
            total: Chips::new(1_020),
            events: 0,
        };
        round.run(&mut players, &mut pot, &[], &mut NeverAsked, &mut observer);

        // The only player with chips matches the highest all in bet.
        assert_eq!(observer.events, 1);
        assert_eq!(players[0].bet, Chips::new(15));
        assert_eq!(players[0].chips, Chips::new(985));
        assert_eq!(pot.chips(), Chips::new(35));
    }

    #[test]
    fn all_in_raise_then_calls() {
        let config = TableConfig::default();
        let mut players = players(&[1_000, 300, 1_000]);
        let mut pot = Pot::default();

        let mut round = BettingRound::street(Stage::Flop, &mut players, &mut pot, 0, &config);
        let mut source = Script::new(&[PlayerAction::Bet(Chips::new(300))]);
        let state = round.run(&mut players, &mut pot, &[], &mut source, &mut NoopObserver);

        // Seat 1 shoves, seat 2 and seat 0 call.
        assert_eq!(state, RoundState::RoundComplete);
        assert_eq!(source.asked, vec![1, 2, 0]);
        assert_eq!(players[1].action, LastAction::AllIn);
        assert_eq!(pot.chips(), Chips::new(900));
    }

    #[test]
    fn short_call_goes_all_in() {
        let config = TableConfig::default();
        let mut players = players(&[1_000, 1_000, 100]);
        let mut pot = Pot::default();

        let mut round = BettingRound::street(Stage::Turn, &mut players, &mut pot, 0, &config);
        let mut source = Script::new(&[PlayerAction::Bet(Chips::new(400))]);
        let state = round.run(&mut players, &mut pot, &[], &mut source, &mut NoopObserver);

        // Seat 2 calls short, the round completes when seat 0 calls.
        assert_eq!(state, RoundState::RoundComplete);
        assert_eq!(source.asked, vec![1, 2, 0]);
        assert!(players[2].is_all_in());
        assert_eq!(players[2].bet, Chips::new(100));
        assert_eq!(pot.chips(), Chips::new(900));
    }

    #[test]
    fn rejected_check_is_asked_again() {
        let config = TableConfig::default();
        let mut players = players(&[1_000, 1_000, 1_000]);
        let mut pot = Pot::default();
        post_blinds(&mut players, &mut pot, 0, config.small_blind, config.big_blind);

        let mut round = BettingRound::preflop(&mut players, &mut pot, 0, &config);
        let mut source = Script::new(&[PlayerAction::Check, PlayerAction::Call]);
        let state = round.run(&mut players, &mut pot, &[], &mut source, &mut NoopObserver);

        assert_eq!(state, RoundState::RoundComplete);
        assert_eq!(source.asked, vec![0, 0, 1, 2]);
        assert_eq!(
            source.rejected,
            vec![ActionError::CannotCheck {
                to_call: Chips::new(20)
            }]
        );
    }

    #[test]
    fn repeated_invalid_actions_fold() {
        let config = TableConfig {
            max_invalid_actions: 3,
            ..TableConfig::default()
        };
        let mut players = players(&[1_000, 1_000, 1_000]);
        let mut pot = Pot::default();
        post_blinds(&mut players, &mut pot, 0, config.small_blind, config.big_blind);

        let mut round = BettingRound::preflop(&mut players, &mut pot, 0, &config);
        let mut source = Script::new(&[PlayerAction::Check; 3]);
        let state = round.run(&mut players, &mut pot, &[], &mut source, &mut NoopObserver);

        assert_eq!(state, RoundState::RoundComplete);
        assert!(players[0].folded);
        assert_eq!(source.rejected.len(), 3);
        assert_eq!(source.asked, vec![0, 0, 0, 1, 2]);
    }

    #[test]
    fn bet_validation() {
        let config = TableConfig::default();
        let mut players = players(&[1_000, 1_000, 30]);
        let mut pot = Pot::default();
        post_blinds(&mut players, &mut pot, 0, config.small_blind, config.big_blind);

        let mut round = BettingRound::preflop(&mut players, &mut pot, 0, &config);
        let req = round.action_request(&players).unwrap();
        assert_eq!(req.seat, 0);
        assert_eq!(req.to_call, Chips::new(20));
        assert_eq!(req.min_raise, Chips::new(20));
        assert!(req.can_call() && req.can_bet() && !req.can_check());

        assert_eq!(
            round.apply(&mut players, &mut pot, PlayerAction::Bet(Chips::new(10))),
            Err(ActionError::BetTooSmall {
                amount: Chips::new(10),
                minimum: Chips::new(20)
            })
        );

        // Oversized bets are clamped to the player stack.
        let applied = round
            .apply(&mut players, &mut pot, PlayerAction::Bet(Chips::new(5_000)))
            .unwrap();
        assert_eq!(applied.action, LastAction::AllIn);
        assert_eq!(applied.paid, Chips::new(1_000));
        assert_eq!(round.min_bet(), Chips::new(1_000));

        // Seat 1 calls, seat 2 cannot cover a raise.
        round.apply(&mut players, &mut pot, PlayerAction::Call).unwrap();
        assert_eq!(
            round.apply(&mut players, &mut pot, PlayerAction::Bet(Chips::new(2_000))),
            Err(ActionError::InsufficientChips {
                amount: Chips::new(2_000),
                available: Chips::new(30)
            })
        );

        let req = round.action_request(&players).unwrap();
        assert!(!req.can_bet());
        assert_eq!(req.to_call, Chips::new(10));

        // Both remaining players are all in for the same amount.
        round.apply(&mut players, &mut pot, PlayerAction::Fold).unwrap();
        assert_eq!(round.state(), RoundState::RoundComplete);
        assert!(players[0].is_all_in() && players[1].is_all_in());
        assert_eq!(
            round.apply(&mut players, &mut pot, PlayerAction::Check),
            Err(ActionError::NotAwaitingAction)
        );
        assert_eq!(total_chips(&players, &pot), Chips::new(2_030));
    }

    /// Random actions, including invalid ones.
    struct RandomSource {
        rng: StdRng,
        asked: usize,
    }

    impl ActionSource for RandomSource {
        fn next_action(&mut self, req: &ActionRequest, _table: &TableSnapshot) -> PlayerAction {
            self.asked += 1;
            match self.rng.random_range(0..10) {
                0 => PlayerAction::Fold,
                1..=3 => PlayerAction::Check,
                4..=6 => PlayerAction::Call,
                _ => {
                    let max = req.max_bet().amount() + 50;
                    PlayerAction::Bet(Chips::new(self.rng.random_range(0..=max)))
                }
            }
        }
    }

    #[test]
    fn random_rounds_terminate_settled() {
        let config = TableConfig::default();

        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let num_players = rng.random_range(2..=8);
            let chips = (0..num_players)
                .map(|_| rng.random_range(1..=600))
                .collect::<Vec<_>>();
            let mut players = players(&chips);
            let mut pot = Pot::default();
            let total = total_chips(&players, &pot);
            let dealer = rng.random_range(0..num_players);

            let mut source = RandomSource { rng, asked: 0 };
            let mut observer = ConservationCheck { total, events: 0 };

            post_blinds(&mut players, &mut pot, dealer, config.small_blind, config.big_blind);
            let mut round = BettingRound::preflop(&mut players, &mut pot, dealer, &config);
            let mut stage = Stage::Preflop;

            loop {
                let state = round.run(&mut players, &mut pot, &[], &mut source, &mut observer);
                assert!(state.is_terminal());
                assert_eq!(total_chips(&players, &pot), total);

                if state == RoundState::RoundComplete {
                    assert!(
                        players
                            .iter()
                            .filter(|p| p.can_act())
                            .all(|p| p.bet == round.min_bet()),
                        "seed {seed} bets not settled"
                    );
                }

                if state == RoundState::SinglePlayerRemaining {
                    assert_eq!(players.iter().filter(|p| !p.folded).count(), 1);
                    break;
                }

                let Some(next) = stage.next() else {
                    break;
                };

                stage = next;
                round = BettingRound::street(stage, &mut players, &mut pot, dealer, &config);
            }

            assert!(source.asked < 2_000, "seed {seed} asked {}", source.asked);
        }
    }
}
