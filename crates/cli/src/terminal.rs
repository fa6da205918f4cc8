// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal output.
use anyhow::Result;
use crossterm::{
    cursor, execute, queue,
    style::{self, Stylize},
    terminal::{Clear, ClearType},
};
use log::error;
use std::{io, thread, time::Duration};

use showdown_core::{
    action::ActionRequest,
    event::{PlayerSnapshot, TableEvent, TableObserver, TableSnapshot},
    player::LastAction,
    poker::{Card, Chips, PlayerCards},
};

/// Clears the screen.
pub fn clear(w: &mut impl io::Write) -> Result<()> {
    execute!(w, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    Ok(())
}

/// Formats cards with the suit symbols.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.symbol())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prints the table for the player that has to act.
pub fn print_request(
    w: &mut impl io::Write,
    req: &ActionRequest,
    table: &TableSnapshot,
) -> Result<()> {
    print_players(w, table, Some(req.seat))?;

    queue!(
        w,
        style::Print(format!("\nCurrent pot: {}\n", table.pot)),
        style::Print(format!("Board: {}\n", format_cards(&table.board))),
    )?;

    if let Some(PlayerCards::Cards(c1, c2)) = table.players.get(req.seat).map(|p| p.hole_cards) {
        queue!(
            w,
            style::PrintStyledContent(
                format!("{}, your hand: {}\n", req.name, format_cards(&[c1, c2])).bold()
            )
        )?;
    }

    queue!(
        w,
        style::Print(format!(
            "\nCurrent bet to call: {}\nYou have bet: {}\nYour chips: {}\n",
            req.min_bet, req.bet, req.chips
        ))
    )?;

    w.flush()?;
    Ok(())
}

/// Prints a row for each player, the hole cards are only shown for `show_seat`.
pub fn print_players(
    w: &mut impl io::Write,
    table: &TableSnapshot,
    show_seat: Option<usize>,
) -> Result<()> {
    for (seat, player) in table.players.iter().enumerate() {
        print_player(w, player, show_seat == Some(seat))?;
    }

    w.flush()?;
    Ok(())
}

fn print_player(w: &mut impl io::Write, p: &PlayerSnapshot, show_cards: bool) -> Result<()> {
    let button = if p.has_button { "D" } else { "" };

    let action = if p.all_in && p.action != LastAction::AllIn {
        "ALL-IN"
    } else {
        p.action.label()
    };

    let bet = if p.bet > Chips::ZERO {
        p.bet.to_string()
    } else {
        String::new()
    };

    let cards = match p.hole_cards {
        PlayerCards::None => String::new(),
        PlayerCards::Cards(..) if p.folded => String::new(),
        PlayerCards::Cards(c1, c2) if show_cards => format!("{} {}", c1.symbol(), c2.symbol()),
        PlayerCards::Cards(..) => "▒▒ ▒▒".to_string(),
    };

    let text = format!(
        "{button:^3}|{:<10.10}|{:<10.10}|{:<10.10}|{:<10.10}|{:<8}",
        p.name,
        p.chips.to_string(),
        action,
        bet,
        cards
    );

    let text = if p.folded {
        text.dark_grey()
    } else {
        text.dark_green()
    };

    queue!(w, style::PrintStyledContent(text), style::Print("\n"))?;
    Ok(())
}

/// Prints the game progress.
pub struct TerminalView<W> {
    out: W,
    pace: Duration,
}

impl<W: io::Write> TerminalView<W> {
    /// Creates a view that pauses for `pace` between the hand stages.
    pub fn new(out: W, pace: Duration) -> Self {
        Self { out, pace }
    }

    /// Consumes the view and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn pause(&self) {
        if !self.pace.is_zero() {
            thread::sleep(self.pace);
        }
    }

    fn line(&mut self, text: impl Into<String>) -> Result<()> {
        queue!(self.out, style::Print(text.into()), style::Print("\n"))?;
        Ok(())
    }

    fn highlight(&mut self, text: impl Into<String>) -> Result<()> {
        let text: String = text.into();
        queue!(
            self.out,
            style::PrintStyledContent(text.bold().yellow()),
            style::Print("\n")
        )?;
        Ok(())
    }

    fn show(&mut self, event: &TableEvent, table: &TableSnapshot) -> Result<()> {
        let name = |seat: usize| {
            table
                .players
                .get(seat)
                .map(|p| p.name.clone())
                .unwrap_or_default()
        };

        match event {
            TableEvent::HandStarted { hand, dealer } => {
                self.line("")?;
                self.highlight(format!("Dealing cards, hand {hand} is starting"))?;
                self.line(format!("{} has the button", name(*dealer)))?;
            }
            TableEvent::BlindsPosted {
                small_seat,
                small,
                big_seat,
                big,
            } => {
                self.line(format!("Small blind is {} and has bet {small}", name(*small_seat)))?;
                self.line(format!("Big blind is {} and has bet {big}", name(*big_seat)))?;
            }
            TableEvent::StageStarted { stage, cards } => {
                if !cards.is_empty() {
                    self.out.flush()?;
                    self.pause();
                    self.highlight(format!(
                        "{stage} community cards: {}",
                        format_cards(&table.board)
                    ))?;
                }
            }
            TableEvent::PlayerActed { seat, action, paid } => {
                let text = match action {
                    LastAction::Fold => format!("{} folds", name(*seat)),
                    LastAction::Check => format!("{} checks", name(*seat)),
                    LastAction::Call => format!("{} calls {paid}", name(*seat)),
                    LastAction::AllIn => format!("{} is all in with {paid}", name(*seat)),
                    _ => {
                        let bet = table.players.get(*seat).map(|p| p.bet).unwrap_or_default();
                        format!("{} {} to {bet}", name(*seat), action.label().to_lowercase())
                    }
                };
                self.line(text)?;
            }
            TableEvent::ActionRejected { .. } => {}
            TableEvent::AllInRunout => {
                self.line("All players are all in or folded.")?;
            }
            TableEvent::Showdown { hands } => {
                self.out.flush()?;
                self.pause();
                self.highlight("Calculating winners...")?;
                for hand in hands {
                    let hole = table
                        .players
                        .get(hand.seat)
                        .map(|p| p.hole_cards.to_vec())
                        .unwrap_or_default();
                    self.line(format!(
                        "{}'s hand: {} ({})",
                        hand.name,
                        format_cards(&hole),
                        hand.hand.category()
                    ))?;
                }
            }
            TableEvent::PotAwarded { payoffs } => {
                if payoffs.len() > 1 {
                    let names = payoffs
                        .iter()
                        .map(|p| p.name.as_str())
                        .collect::<Vec<_>>();
                    self.highlight(format!("It's a tie between: {}", names.join(", ")))?;
                }

                for payoff in payoffs {
                    let text = match &payoff.hand {
                        Some(hand) => format!(
                            "{} wins {} with a {}: {}",
                            payoff.name,
                            payoff.chips,
                            hand.category(),
                            format_cards(hand.cards())
                        ),
                        None => format!("{} wins the pot of {}", payoff.name, payoff.chips),
                    };
                    self.highlight(text)?;
                }

                self.line("")?;
                print_players(&mut self.out, table, None)?;
                self.pause();
            }
            TableEvent::PlayerEliminated { name } => {
                self.line(format!("{name} is eliminated, nice try"))?;
            }
            TableEvent::GameOver { winner } => {
                self.line("")?;
                if let Some(winner) = winner {
                    self.highlight(format!("{winner} is the winner of the game!"))?;
                }
                self.line("Game over!")?;
                self.line("Thanks for playing!")?;
            }
        }

        self.out.flush()?;
        Ok(())
    }
}

impl<W: io::Write> TableObserver for TerminalView<W> {
    fn on_event(&mut self, event: &TableEvent, table: &TableSnapshot) {
        if let Err(e) = self.show(event, table) {
            error!("Terminal output error {e}");
        }
    }
}
