//! Game state and core simulation types
//!
//! The full authoritative snapshot consumed by the UI layer lives here.

use serde::{Deserialize, Serialize};

use super::level::LevelTier;

/// The four mutation-event kinds a player reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Token shape changed
    Shape,
    /// Token color changed
    Color,
    /// Rotation direction flipped
    Turn,
    /// Extra 3-step movement this tick
    Jump,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Shape,
        EventKind::Color,
        EventKind::Turn,
        EventKind::Jump,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            EventKind::Shape => 0,
            EventKind::Color => 1,
            EventKind::Turn => 2,
            EventKind::Jump => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Shape => "SHAPE",
            EventKind::Color => "COLOR",
            EventKind::Turn => "TURN",
            EventKind::Jump => "JUMP",
        }
    }
}

/// Token shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Shape {
    #[default]
    Circle,
    Square,
    Triangle,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Square, Shape::Triangle];
}

/// Token colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TokenColor {
    #[default]
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl TokenColor {
    pub const ALL: [TokenColor; 5] = [
        TokenColor::Red,
        TokenColor::Blue,
        TokenColor::Green,
        TokenColor::Yellow,
        TokenColor::Purple,
    ];
}

/// Movement direction around the track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Signed step factor: clockwise advances, counter-clockwise retreats
    pub fn sign(self) -> i64 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn flipped(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// The most recent mutation event of one kind
///
/// `fired_at_ms == None` is the never-fired sentinel: the judge treats it as
/// outside every reaction window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEvent {
    /// Wall-clock timestamp the event fired, if it ever has
    pub fired_at_ms: Option<u64>,
    /// Whether a reaction has already scored this occurrence
    pub acknowledged: bool,
}

/// One `PendingEvent` slot per kind, at all times
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PendingEvents {
    slots: [PendingEvent; 4],
}

impl PendingEvents {
    pub fn get(&self, kind: EventKind) -> &PendingEvent {
        &self.slots[kind.index()]
    }

    pub fn get_mut(&mut self, kind: EventKind) -> &mut PendingEvent {
        &mut self.slots[kind.index()]
    }

    /// Overwrite the slot for `kind` with a fresh unacknowledged occurrence.
    /// A still-unacknowledged previous occurrence is silently forfeited.
    pub fn record(&mut self, kind: EventKind, now_ms: u64) {
        self.slots[kind.index()] = PendingEvent {
            fired_at_ms: Some(now_ms),
            acknowledged: false,
        };
    }

    /// True if the jump slot fired exactly this tick (drives 3-step movement)
    pub fn jump_fired_at(&self, now_ms: u64) -> bool {
        self.get(EventKind::Jump).fired_at_ms == Some(now_ms)
    }
}

/// Aggregate run statistics for the end-of-game summary
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Mutation events recorded this run
    pub events_fired: u64,
    /// Events scored within a reaction window
    pub events_caught: u64,
}

/// Complete game state snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub is_playing: bool,
    pub is_paused: bool,
    pub score: u64,
    /// Best completed-run score; survives resets
    pub high_score: u64,
    /// Whole seconds of unpaused play time
    pub elapsed_secs: u64,
    /// Difficulty tier, derived from elapsed time every heartbeat
    pub level: LevelTier,
    /// Track slot 0-11
    pub position: u8,
    pub shape: Shape,
    pub color: TokenColor,
    pub direction: Direction,
    /// Per-kind reaction records
    pub pending: PendingEvents,
    /// No new event may fire until this wall-clock time
    pub cooldown_until_ms: u64,
    pub stats: RunStats,
}

impl GameState {
    /// Fresh pre-game state (not yet playing)
    pub fn new() -> Self {
        Self {
            is_playing: false,
            is_paused: false,
            score: 0,
            high_score: 0,
            elapsed_secs: 0,
            level: LevelTier::Easy,
            position: 0,
            shape: Shape::Circle,
            color: TokenColor::Red,
            direction: Direction::Clockwise,
            pending: PendingEvents::default(),
            cooldown_until_ms: 0,
            stats: RunStats::default(),
        }
    }

    /// Reset everything for a new run, keeping the high score
    pub fn reset_for_start(&mut self) {
        let high_score = self.high_score;
        *self = Self::new();
        self.high_score = high_score;
        self.is_playing = true;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert!(!state.is_playing);
        assert_eq!(state.position, 0);
        assert_eq!(state.shape, Shape::Circle);
        assert_eq!(state.color, TokenColor::Red);
        assert_eq!(state.direction, Direction::Clockwise);
        assert_eq!(state.level, LevelTier::Easy);
        for kind in EventKind::ALL {
            assert_eq!(state.pending.get(kind).fired_at_ms, None);
        }
    }

    #[test]
    fn test_reset_keeps_high_score() {
        let mut state = GameState::new();
        state.high_score = 120;
        state.score = 80;
        state.position = 7;
        state.pending.record(EventKind::Turn, 5000);

        state.reset_for_start();
        assert!(state.is_playing);
        assert_eq!(state.high_score, 120);
        assert_eq!(state.score, 0);
        assert_eq!(state.position, 0);
        assert_eq!(state.pending.get(EventKind::Turn).fired_at_ms, None);
    }

    #[test]
    fn test_record_overwrites_unacknowledged() {
        let mut pending = PendingEvents::default();
        pending.record(EventKind::Color, 1000);
        assert_eq!(pending.get(EventKind::Color).fired_at_ms, Some(1000));

        // New occurrence silently replaces the missed one
        pending.record(EventKind::Color, 4000);
        let slot = pending.get(EventKind::Color);
        assert_eq!(slot.fired_at_ms, Some(4000));
        assert!(!slot.acknowledged);
    }

    #[test]
    fn test_direction_flip() {
        assert_eq!(Direction::Clockwise.sign(), 1);
        assert_eq!(Direction::Clockwise.flipped(), Direction::CounterClockwise);
        assert_eq!(Direction::CounterClockwise.flipped().sign(), 1);
    }
}
