// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Routes the action requests to each player source.
use ahash::AHashMap;

use showdown_core::{
    action::{ActionRequest, ActionSource, PlayerAction},
    error::ActionError,
    event::TableSnapshot,
};

use crate::AlwaysCallOrCheck;

/// The action sources for the players at a table, by player name.
///
/// Players without their own source are handled by the fallback source.
pub struct Lineup {
    sources: AHashMap<String, Box<dyn ActionSource>>,
    fallback: Box<dyn ActionSource>,
}

impl Default for Lineup {
    fn default() -> Self {
        Self::with_fallback(AlwaysCallOrCheck)
    }
}

impl Lineup {
    /// Creates an empty lineup where unknown players call or check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty lineup with the source for unknown players.
    pub fn with_fallback<S>(fallback: S) -> Self
    where
        S: ActionSource + 'static,
    {
        Self {
            sources: AHashMap::default(),
            fallback: Box::new(fallback),
        }
    }

    /// Sets the source for a player.
    pub fn insert<S>(&mut self, name: impl Into<String>, source: S)
    where
        S: ActionSource + 'static,
    {
        self.sources.insert(name.into(), Box::new(source));
    }

    /// Number of players in the lineup.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Checks if the lineup has no players.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl ActionSource for Lineup {
    fn next_action(&mut self, req: &ActionRequest, table: &TableSnapshot) -> PlayerAction {
        match self.sources.get_mut(&req.name) {
            Some(source) => source.next_action(req, table),
            None => self.fallback.next_action(req, table),
        }
    }

    fn rejected(&mut self, req: &ActionRequest, err: &ActionError) {
        match self.sources.get_mut(&req.name) {
            Some(source) => source.rejected(req, err),
            None => self.fallback.rejected(req, err),
        }
    }
}
