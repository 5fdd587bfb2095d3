//! Difficulty levels
//!
//! A static 3-tier table; the active tier is a pure function of elapsed play
//! time and never reverts to an easier tier.

use serde::{Deserialize, Serialize};

/// Static per-tier tuning
#[derive(Debug, Clone, Copy)]
pub struct Level {
    pub name: &'static str,
    /// Tier applies while elapsed time is below this (seconds)
    pub duration_secs: u64,
    /// Multiplier on the base step interval (lower = faster)
    pub speed_mult: f64,
    /// Multiplier on the event-gate probability
    pub freq_mult: f64,
}

/// The immutable tier table, easiest first
pub const LEVELS: [Level; 3] = [
    Level {
        name: "EASY",
        duration_secs: 4 * 60,
        speed_mult: 1.0,
        freq_mult: 1.0,
    },
    Level {
        name: "MEDIUM",
        duration_secs: 8 * 60,
        speed_mult: 0.7,
        freq_mult: 1.5,
    },
    Level {
        name: "HARD",
        // Hard has no successor; this upper bound is never reached
        duration_secs: 12 * 60,
        speed_mult: 0.4,
        freq_mult: 2.0,
    },
];

/// Difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum LevelTier {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl LevelTier {
    /// Map elapsed play time to a tier. Easy below 240 s, Medium below 480 s,
    /// Hard from 480 s on (permanently).
    pub fn for_elapsed(elapsed_secs: u64) -> Self {
        if elapsed_secs < LEVELS[0].duration_secs {
            LevelTier::Easy
        } else if elapsed_secs < LEVELS[1].duration_secs {
            LevelTier::Medium
        } else {
            LevelTier::Hard
        }
    }

    pub fn tuning(&self) -> &'static Level {
        match self {
            LevelTier::Easy => &LEVELS[0],
            LevelTier::Medium => &LEVELS[1],
            LevelTier::Hard => &LEVELS[2],
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.tuning().name
    }

    pub fn speed_mult(&self) -> f64 {
        self.tuning().speed_mult
    }

    pub fn freq_mult(&self) -> f64 {
        self.tuning().freq_mult
    }
}
