// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Human player input.
use anyhow::Result;
use log::warn;
use std::io::{BufRead, Write};

use showdown_core::{
    action::{ActionRequest, ActionSource, PlayerAction},
    error::ActionError,
    event::TableSnapshot,
    poker::Chips,
};

use crate::{setup::prompt, terminal};

/// A command typed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Bet or raise, the amount is asked next.
    Bet,
    /// Fold.
    Fold,
    /// Check, also an empty line.
    Check,
    /// Call.
    Call,
}

/// Parses a command, returns `None` for unknown commands.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_lowercase().as_str() {
        "" | "check" => Some(Command::Check),
        "bet" | "raise" => Some(Command::Bet),
        "fold" => Some(Command::Fold),
        "call" => Some(Command::Call),
        _ => None,
    }
}

/// Reads the actions of the human players from a terminal.
pub struct HumanInput<R, W> {
    input: R,
    out: W,
    hot_seat: bool,
    last_player: Option<String>,
}

impl<R: BufRead, W: Write> HumanInput<R, W> {
    /// Creates the input, with `hot_seat` the screen is cleared between players.
    pub fn new(input: R, out: W, hot_seat: bool) -> Self {
        Self {
            input,
            out,
            hot_seat,
            last_player: None,
        }
    }

    fn read_action(&mut self, req: &ActionRequest, table: &TableSnapshot) -> Result<PlayerAction> {
        if self.hot_seat && self.last_player.as_deref() != Some(req.name.as_str()) {
            terminal::clear(&mut self.out)?;
            writeln!(
                self.out,
                "Switching to {}'s turn, please give the keyboard to them",
                req.name
            )?;
            self.prompt(&format!("{}, press enter to continue\n", req.name))?;
            self.last_player = Some(req.name.clone());
        }

        writeln!(self.out)?;
        terminal::print_request(&mut self.out, req, table)?;

        loop {
            let line = self.prompt("bet/fold/check/call\n")?;
            match parse_command(&line) {
                Some(Command::Fold) => return Ok(PlayerAction::Fold),
                Some(Command::Call) => return Ok(PlayerAction::Call),
                Some(Command::Check) if req.can_check() => return Ok(PlayerAction::Check),
                Some(Command::Check) => return self.call_or_fold(req),
                Some(Command::Bet) => return self.read_bet(req),
                None => writeln!(self.out, "That was not a valid command. Please try again.")?,
            }
        }
    }

    /// A player that cannot check must call or fold.
    fn call_or_fold(&mut self, req: &ActionRequest) -> Result<PlayerAction> {
        writeln!(self.out, "You must call")?;
        writeln!(self.out, "{} to stay in", req.to_call)?;

        let line = self.prompt("call/fold\n")?;
        if parse_command(&line) == Some(Command::Call) {
            Ok(PlayerAction::Call)
        } else {
            if parse_command(&line) != Some(Command::Fold) {
                writeln!(self.out, "You mistyped, so you automatically folded")?;
            }

            Ok(PlayerAction::Fold)
        }
    }

    fn read_bet(&mut self, req: &ActionRequest) -> Result<PlayerAction> {
        loop {
            let line = self.prompt(&format!(
                "How much will you bet? (at least {}, at most {}) ",
                req.min_raise,
                req.max_bet()
            ))?;

            match line.replace(',', "").parse::<u32>() {
                Ok(amount) => return Ok(PlayerAction::Bet(Chips::new(amount))),
                Err(_) => writeln!(self.out, "Please try again. That was not a valid number.")?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        prompt(&mut self.input, &mut self.out, text)
    }
}

impl<R: BufRead, W: Write> ActionSource for HumanInput<R, W> {
    fn next_action(&mut self, req: &ActionRequest, table: &TableSnapshot) -> PlayerAction {
        match self.read_action(req, table) {
            Ok(action) => action,
            Err(e) => {
                warn!("Input error for {}: {e}, folding", req.name);
                PlayerAction::Fold
            }
        }
    }

    fn rejected(&mut self, _req: &ActionRequest, err: &ActionError) {
        let _ = writeln!(self.out, "Not allowed: {err}. Please try again.");
    }
}
