#![cfg(feature = "std")]

//! Win-counter persistence. The engine reports a winner once per game; a
//! [`ScoreStore`] keeps the running totals across games.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::common::PlayerId;

/// Running win totals for both players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinHistory {
    pub player1_wins: u32,
    pub player2_wins: u32,
}

impl WinHistory {
    /// Win count for one player.
    pub fn wins_for(&self, player: PlayerId) -> u32 {
        match player {
            PlayerId::One => self.player1_wins,
            PlayerId::Two => self.player2_wins,
        }
    }

    fn add_win(&mut self, player: PlayerId) {
        match player {
            PlayerId::One => self.player1_wins += 1,
            PlayerId::Two => self.player2_wins += 1,
        }
    }
}

/// Store for win history, read at startup and updated at game end.
pub trait ScoreStore {
    /// Load the current totals.
    fn load(&self) -> Result<WinHistory>;

    /// Increment the winner's total and persist, returning the new totals.
    fn record_win(&mut self, winner: PlayerId) -> Result<WinHistory>;
}

/// File-backed store serialized as JSON. A missing file reads as zero wins.
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&self) -> Result<WinHistory> {
        if !self.path.exists() {
            return Ok(WinHistory::default());
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("reading win history from {}", self.path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("parsing win history in {}", self.path.display()))
    }

    fn record_win(&mut self, winner: PlayerId) -> Result<WinHistory> {
        let mut history = self.load()?;
        history.add_win(winner);
        let data = serde_json::to_string_pretty(&history)?;
        fs::write(&self.path, data)
            .with_context(|| format!("writing win history to {}", self.path.display()))?;
        Ok(history)
    }
}

/// In-memory store, useful for tests and score-less play.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    history: WinHistory,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<WinHistory> {
        Ok(self.history)
    }

    fn record_win(&mut self, winner: PlayerId) -> Result<WinHistory> {
        self.history.add_win(winner);
        Ok(self.history)
    }
}
