// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A poker table that runs hands until one player is left.
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    action::ActionSource,
    betting::{BettingRound, RoundState, Stage, post_blinds},
    config::TableConfig,
    error::GameError,
    event::{ShowdownHand, TableEvent, TableObserver, TableSnapshot},
    player::Player,
    poker::{Card, Chips, Deck, PlayerCards, best_hand},
    pot::{Payoff, Pot},
};

/// A player joining the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// The player name.
    pub name: String,
    /// The player starting chips.
    pub chips: Chips,
}

impl Seat {
    /// Creates a new seat.
    pub fn new(name: impl Into<String>, chips: Chips) -> Self {
        Self {
            name: name.into(),
            chips,
        }
    }
}

/// The result of a hand.
#[derive(Debug, Clone)]
pub struct HandSummary {
    /// The hand number.
    pub hand: u64,
    /// The chips paid to the winners.
    pub payoffs: Vec<Payoff>,
    /// The hand ended with a showdown.
    pub showdown: bool,
    /// Players that ran out of chips.
    pub eliminated: Vec<String>,
}

/// The result of a game.
#[derive(Debug, Clone)]
pub struct GameSummary {
    /// Number of hands played.
    pub hands: u64,
    /// The last player standing or the chip leader.
    pub winner: Option<String>,
}

/// A poker table.
#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    players: Vec<Player>,
    dealer: usize,
    stage: Stage,
    board: Vec<Card>,
    pot: Pot,
    rng: StdRng,
    hand_count: u64,
}

impl Table {
    /// Creates a table with a randomly seeded deck.
    pub fn new(config: TableConfig, seats: Vec<Seat>) -> Result<Self, GameError> {
        Self::with_rng(config, seats, StdRng::from_os_rng())
    }

    /// Creates a table that shuffles the deck with the given generator.
    pub fn with_rng(
        config: TableConfig,
        seats: Vec<Seat>,
        rng: StdRng,
    ) -> Result<Self, GameError> {
        config.validate()?;

        if seats.len() < config.min_players {
            return Err(GameError::NotEnoughPlayers {
                count: seats.len(),
                min: config.min_players,
            });
        }

        if seats.len() > config.max_players {
            return Err(GameError::TooManyPlayers {
                count: seats.len(),
                max: config.max_players,
            });
        }

        let total = seats.iter().map(|s| u64::from(s.chips.amount())).sum::<u64>();
        if total > u64::from(u32::MAX) {
            return Err(GameError::TooManyChips(total));
        }

        let mut players: Vec<Player> = Vec::with_capacity(seats.len());
        for seat in seats {
            let name = seat.name.trim();
            if name.is_empty() {
                return Err(GameError::EmptyName);
            }

            if players.iter().any(|p| p.name == name) {
                return Err(GameError::DuplicateName(name.to_string()));
            }

            if seat.chips == Chips::ZERO {
                return Err(GameError::NoChips(name.to_string()));
            }

            players.push(Player::new(name, seat.chips));
        }

        Ok(Self {
            config,
            players,
            dealer: 0,
            stage: Stage::Preflop,
            board: Vec::with_capacity(5),
            pot: Pot::default(),
            rng,
            hand_count: 0,
        })
    }

    /// The table configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The players still at the table in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The dealer seat.
    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// The community cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The hand pot.
    pub fn pot(&self) -> &Pot {
        &self.pot
    }

    /// Number of hands played.
    pub fn hand_count(&self) -> u64 {
        self.hand_count
    }

    /// A read-only view of this table.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::capture(
            self.stage,
            self.dealer,
            &self.players,
            &self.pot,
            &self.board,
        )
    }

    /// Plays hands until one player is left or the hands limit is reached.
    pub fn play<S, O>(&mut self, source: &mut S, observer: &mut O) -> Result<GameSummary, GameError>
    where
        S: ActionSource + ?Sized,
        O: TableObserver + ?Sized,
    {
        while self.players.len() > 1
            && self
                .config
                .max_hands
                .is_none_or(|max| self.hand_count < max)
        {
            self.play_hand(source, observer)?;
        }

        let winner = self.chip_leader().map(|p| p.name.clone());
        info!(
            "Game over after {} hands, winner {}",
            self.hand_count,
            winner.as_deref().unwrap_or("none")
        );

        observer.on_event(
            &TableEvent::GameOver {
                winner: winner.clone(),
            },
            &self.snapshot(),
        );

        Ok(GameSummary {
            hands: self.hand_count,
            winner,
        })
    }

    /// Plays a single hand with a new shuffled deck.
    pub fn play_hand<S, O>(&mut self, source: &mut S, observer: &mut O) -> Result<HandSummary, GameError>
    where
        S: ActionSource + ?Sized,
        O: TableObserver + ?Sized,
    {
        let deck = Deck::new_and_shuffled(&mut self.rng);
        self.run_hand(deck, source, observer)
    }

    fn run_hand<S, O>(
        &mut self,
        mut deck: Deck,
        source: &mut S,
        observer: &mut O,
    ) -> Result<HandSummary, GameError>
    where
        S: ActionSource + ?Sized,
        O: TableObserver + ?Sized,
    {
        if self.players.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                count: self.players.len(),
                min: 2,
            });
        }

        let total_chips = self.total_chips();
        self.start_hand(&mut deck)?;

        info!(
            "Hand {} started, dealer {}",
            self.hand_count, self.players[self.dealer].name
        );

        observer.on_event(
            &TableEvent::HandStarted {
                hand: self.hand_count,
                dealer: self.dealer,
            },
            &self.snapshot(),
        );

        let blinds = post_blinds(
            &mut self.players,
            &mut self.pot,
            self.dealer,
            self.config.small_blind,
            self.config.big_blind,
        );

        observer.on_event(
            &TableEvent::BlindsPosted {
                small_seat: blinds.small_seat,
                small: blinds.small,
                big_seat: blinds.big_seat,
                big: blinds.big,
            },
            &self.snapshot(),
        );

        let mut stage = Stage::Preflop;
        let mut runout = false;

        loop {
            self.stage = stage;

            let mut cards = Vec::with_capacity(stage.cards_to_deal());
            for _ in 0..stage.cards_to_deal() {
                cards.push(deck.deal().ok_or(GameError::DeckExhausted)?);
            }

            self.board.extend_from_slice(&cards);
            debug!("{stage} board {:?}", self.board);
            observer.on_event(&TableEvent::StageStarted { stage, cards }, &self.snapshot());

            let state = if runout {
                RoundState::AllRemainingAllIn
            } else {
                let mut round = if stage == Stage::Preflop {
                    BettingRound::preflop(&mut self.players, &mut self.pot, self.dealer, &self.config)
                } else {
                    BettingRound::street(
                        stage,
                        &mut self.players,
                        &mut self.pot,
                        self.dealer,
                        &self.config,
                    )
                };

                round.run(&mut self.players, &mut self.pot, &self.board, source, observer)
            };

            match state {
                RoundState::SinglePlayerRemaining => {
                    let payoffs = self.award_uncontested();
                    return Ok(self.end_hand(payoffs, false, total_chips, observer));
                }
                RoundState::AllRemainingAllIn if !runout => {
                    runout = true;
                    info!("All players all in, dealing the remaining cards");
                    observer.on_event(&TableEvent::AllInRunout, &self.snapshot());
                }
                _ => {}
            }

            match stage.next() {
                Some(next) => stage = next,
                None => break,
            }
        }

        let payoffs = self.showdown(observer)?;
        Ok(self.end_hand(payoffs, true, total_chips, observer))
    }

    /// Resets the players and deals two cards to each player.
    fn start_hand(&mut self, deck: &mut Deck) -> Result<(), GameError> {
        self.hand_count += 1;
        self.stage = Stage::Preflop;
        self.board.clear();
        self.pot = Pot::default();

        for player in &mut self.players {
            player.start_hand();
        }

        self.players[self.dealer].has_button = true;

        // One card at a time starting left of the dealer.
        let num_players = self.players.len();
        let mut first_cards = vec![None; num_players];
        for pass in 0..2 {
            for seat in self.seats_from_dealer() {
                let card = deck.deal().ok_or(GameError::DeckExhausted)?;
                if pass == 0 {
                    first_cards[seat] = Some(card);
                } else if let Some(first) = first_cards[seat] {
                    self.players[seat].hole_cards = PlayerCards::Cards(first, card);
                }
            }
        }

        Ok(())
    }

    /// Evaluates the hands of the players still in the hand and pays the winners.
    fn showdown<O>(&mut self, observer: &mut O) -> Result<Vec<Payoff>, GameError>
    where
        O: TableObserver + ?Sized,
    {
        let mut hands = Vec::new();
        for (seat, player) in self.players.iter().enumerate() {
            if player.folded {
                continue;
            }

            let mut cards = player.hole_cards.to_vec();
            cards.extend_from_slice(&self.board);
            let hand = best_hand(&cards)?;
            debug!("{} shows {hand}", player.name);

            hands.push(ShowdownHand {
                seat,
                name: player.name.clone(),
                hand,
            });
        }

        observer.on_event(
            &TableEvent::Showdown {
                hands: hands.clone(),
            },
            &self.snapshot(),
        );

        let Some(best) = hands.iter().map(|h| h.hand).max() else {
            return Ok(Vec::new());
        };

        // Odd chips go to the first winners left of the dealer.
        let winners = self
            .seats_from_dealer()
            .filter(|seat| hands.iter().any(|h| h.seat == *seat && h.hand == best))
            .collect::<Vec<_>>();

        let payoffs = self
            .pot
            .split(&winners)
            .into_iter()
            .map(|(seat, chips)| {
                let player = &mut self.players[seat];
                player.chips += chips;
                info!("{} wins {chips} with {best}", player.name);

                let hand = hands.iter().find(|h| h.seat == seat).map(|h| h.hand);
                Payoff {
                    seat,
                    name: player.name.clone(),
                    chips,
                    hand,
                }
            })
            .collect();

        Ok(payoffs)
    }

    /// Pays the pot to the only player that did not fold.
    fn award_uncontested(&mut self) -> Vec<Payoff> {
        let winners = self
            .players
            .iter()
            .position(|p| !p.folded)
            .into_iter()
            .collect::<Vec<_>>();

        self.pot
            .split(&winners)
            .into_iter()
            .map(|(seat, chips)| {
                let player = &mut self.players[seat];
                player.chips += chips;
                info!("{} wins {chips} uncontested", player.name);

                Payoff {
                    seat,
                    name: player.name.clone(),
                    chips,
                    hand: None,
                }
            })
            .collect()
    }

    /// Moves the button and removes the players with no chips.
    fn end_hand<O>(
        &mut self,
        payoffs: Vec<Payoff>,
        showdown: bool,
        total_chips: Chips,
        observer: &mut O,
    ) -> HandSummary
    where
        O: TableObserver + ?Sized,
    {
        for player in &mut self.players {
            player.bet = Chips::ZERO;
        }

        debug_assert_eq!(self.total_chips(), total_chips);

        observer.on_event(
            &TableEvent::PotAwarded {
                payoffs: payoffs.clone(),
            },
            &self.snapshot(),
        );

        // The next dealer is the first player after the button with chips.
        let next_dealer = self
            .seats_from_dealer()
            .find(|&seat| self.players[seat].chips > Chips::ZERO);

        let eliminated = self
            .players
            .iter()
            .filter(|p| p.chips == Chips::ZERO)
            .map(|p| p.name.clone())
            .collect::<Vec<_>>();

        self.dealer = match next_dealer {
            Some(seat) => {
                let removed_before = self.players[..seat]
                    .iter()
                    .filter(|p| p.chips == Chips::ZERO)
                    .count();
                seat - removed_before
            }
            None => 0,
        };

        self.players.retain(|p| p.chips > Chips::ZERO);

        for name in &eliminated {
            info!("{name} eliminated");
            observer.on_event(
                &TableEvent::PlayerEliminated { name: name.clone() },
                &self.snapshot(),
            );
        }

        HandSummary {
            hand: self.hand_count,
            payoffs,
            showdown,
            eliminated,
        }
    }

    /// The seats in dealing order, the dealer is the last one.
    fn seats_from_dealer(&self) -> impl Iterator<Item = usize> + use<> {
        let num_players = self.players.len();
        let dealer = self.dealer;
        (1..=num_players).map(move |offset| (dealer + offset) % num_players)
    }

    fn total_chips(&self) -> Chips {
        self.pot.chips() + self.players.iter().map(|p| p.chips).sum::<Chips>()
    }

    /// The player with most chips, the first one in seat order on ties.
    fn chip_leader(&self) -> Option<&Player> {
        self.players.iter().fold(None, |leader: Option<&Player>, p| match leader {
            Some(l) if l.chips >= p.chips => Some(l),
            _ => Some(p),
        })
    }
}
