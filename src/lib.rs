//! Ring Reflex - a reaction-timing game on a 12-position circular track
//!
//! Core modules:
//! - `sim`: Deterministic simulation (event generation, movement, scoring)
//! - `engine`: Scheduler driving the step loop and the 1 s heartbeat
//! - `settings`: Tunable speed/frequency/score-window configuration
//! - `highscores`: Persisted single high-score value

pub mod engine;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use engine::{Engine, RunSummary};
pub use highscores::HighScoreStore;
pub use settings::{ScoreWindow, ScoreWindows, Settings, SettingsPatch};

/// Game configuration constants
pub mod consts {
    /// Number of discrete positions on the circular track
    pub const TRACK_LEN: i64 = 12;

    /// Steps moved on a normal tick
    pub const NORMAL_STEPS: i64 = 1;
    /// Steps moved on the tick a jump event fires
    pub const JUMP_STEPS: i64 = 3;

    /// Fixed heartbeat cadence (advances elapsed time, recomputes level)
    pub const HEARTBEAT_MS: u64 = 1000;
    /// Minimum wall-clock spacing between any two fired events
    pub const EVENT_COOLDOWN_MS: u64 = 2000;
}

/// Advance a track position by a signed step count, wrapping into [0, 11].
///
/// Euclidean modulo, so counter-clockwise movement wraps correctly
/// (position 0, one step counter-clockwise, lands on 11).
#[inline]
pub fn wrap_position(pos: u8, delta: i64) -> u8 {
    (pos as i64 + delta).rem_euclid(consts::TRACK_LEN) as u8
}
