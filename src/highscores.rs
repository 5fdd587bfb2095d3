//! High score persistence
//!
//! A single scalar value on disk. Reads tolerate a missing or corrupt file by
//! defaulting to zero; write failures are logged and never fatal.

use std::fs;
use std::path::PathBuf;

/// File-backed store for the best completed-run score.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: Option<PathBuf>,
}

impl HighScoreStore {
    /// Default file name, placed in the current directory
    const FILE_NAME: &'static str = "ring_reflex_highscore.json";

    /// Store backed by the default path
    pub fn new() -> Self {
        Self {
            path: Some(PathBuf::from(Self::FILE_NAME)),
        }
    }

    /// Store backed by an explicit path
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store that never touches disk (tests, embedding hosts with their own storage)
    pub fn in_memory() -> Self {
        Self { path: None }
    }

    /// Read the persisted high score, defaulting to zero.
    pub fn load(&self) -> u64 {
        let Some(path) = &self.path else {
            return 0;
        };

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<u64>(contents.trim()) {
                Ok(score) => {
                    log::info!("Loaded high score {} from {}", score, path.display());
                    score
                }
                Err(err) => {
                    log::warn!(
                        "Corrupt high score file {} ({}), defaulting to 0",
                        path.display(),
                        err
                    );
                    0
                }
            },
            Err(_) => {
                log::info!("No high score file at {}, starting fresh", path.display());
                0
            }
        }
    }

    /// Persist a new high score.
    pub fn save(&self, score: u64) {
        let Some(path) = &self.path else {
            return;
        };

        match fs::write(path, score.to_string()) {
            Ok(()) => log::info!("High score {} saved to {}", score, path.display()),
            Err(err) => log::warn!("Failed to save high score to {}: {}", path.display(), err),
        }
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new()
    }
}
