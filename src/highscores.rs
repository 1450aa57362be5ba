//! Best runs
//!
//! Kept as JSON: a file on native (next to the settings file), LocalStorage
//! on the web. A run qualifies when it dodged at least one obstacle and beats
//! the weakest kept run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a stored leaderboard could not be read or written
#[derive(Debug, Error)]
pub enum HighScoresError {
    #[error("high scores file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed high scores JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Runs kept on the board
pub const MAX_HIGH_SCORES: usize = 10;

/// File name used by the native binary
pub const HIGH_SCORES_FILE: &str = "obstacle-dash-scores.json";

/// One finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Obstacles dodged
    pub score: u32,
    /// Frames survived
    pub ticks: u64,
    /// Unix timestamp (ms) when the run ended
    pub timestamp: f64,
}

/// Best runs first; equal scores rank the shorter run higher
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScores {
    runs: Vec<Run>,
}

impl HighScores {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "obstacle_dash_highscores";

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn best(&self) -> Option<&Run> {
        self.runs.first()
    }

    /// Insert a finished run. Returns its 1-based rank if it made the board.
    pub fn record(&mut self, run: Run) -> Option<usize> {
        if run.score == 0 {
            return None;
        }

        // Strictly-better runs stay ahead, ties go behind existing entries
        let key = |r: &Run| (r.score, std::cmp::Reverse(r.ticks));
        let idx = self.runs.partition_point(|r| key(r) >= key(&run));
        if idx >= MAX_HIGH_SCORES {
            return None;
        }

        log::info!("Run with score {} ranked #{}", run.score, idx + 1);
        self.runs.insert(idx, run);
        self.runs.truncate(MAX_HIGH_SCORES);
        Some(idx + 1)
    }

    /// Parse a stored board, re-establishing order and size
    pub fn from_json(json: &str) -> Result<Self, HighScoresError> {
        let mut board: HighScores = serde_json::from_str(json)?;
        board.runs.retain(|r| r.score > 0);
        board
            .runs
            .sort_by(|a, b| (b.score, a.ticks).cmp(&(a.score, b.ticks)));
        board.runs.truncate(MAX_HIGH_SCORES);
        Ok(board)
    }

    pub fn to_json(&self) -> Result<String, HighScoresError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read the board from a file; a missing file is an empty board
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, HighScoresError> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<(), HighScoresError> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        log::info!("High scores saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Load the board from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());

        match stored.map(|json| Self::from_json(&json)) {
            Some(Ok(board)) => {
                log::info!("Loaded {} high scores", board.runs.len());
                board
            }
            Some(Err(e)) => {
                log::warn!("Discarding stored high scores: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Save the board to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let (Some(storage), Ok(json)) = (storage, self.to_json()) {
            let _ = storage.set_item(Self::STORAGE_KEY, &json);
        }
    }
}
