//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit timestamps only (callers pass `now_ms`)
//! - Seeded RNG only
//! - No timers, rendering, or platform dependencies

pub mod judge;
pub mod level;
pub mod state;
pub mod tick;

pub use judge::{Judgement, handle_interaction};
pub use level::{LEVELS, Level, LevelTier};
pub use state::{
    Direction, EventKind, GameState, PendingEvent, PendingEvents, RunStats, Shape, TokenColor,
};
pub use tick::tick;
