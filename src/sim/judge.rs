//! Reaction judge
//!
//! Matches an asynchronous player input against the most recent unacknowledged
//! event of that kind and awards tiered points.

use super::state::{EventKind, GameState};
use crate::settings::Settings;

/// Outcome of one player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgement {
    /// Reaction inside the excellent window; points awarded
    Excellent(u64),
    /// Reaction inside the good window; points awarded
    Good(u64),
    /// Past both windows; no points, the record stays live
    TooLate,
    /// Nothing to judge: not playing, never fired, or already scored
    NoOp,
}

impl Judgement {
    pub fn points(&self) -> u64 {
        match self {
            Judgement::Excellent(p) | Judgement::Good(p) => *p,
            Judgement::TooLate | Judgement::NoOp => 0,
        }
    }
}

/// Judge a player input of `kind` at `now_ms`.
///
/// At most one award per event occurrence: a scored record is acknowledged and
/// every later press for it is a no-op. A late press neither scores nor
/// acknowledges, so a later occurrence of the kind simply overwrites it.
pub fn handle_interaction(
    state: &mut GameState,
    settings: &Settings,
    kind: EventKind,
    now_ms: u64,
) -> Judgement {
    if !state.is_playing {
        return Judgement::NoOp;
    }

    let slot = state.pending.get(kind);
    if slot.acknowledged {
        return Judgement::NoOp;
    }
    let Some(fired_at) = slot.fired_at_ms else {
        // Never fired for this kind
        return Judgement::NoOp;
    };

    let elapsed = now_ms.saturating_sub(fired_at);
    let windows = &settings.score_windows;

    let judgement = if elapsed <= windows.excellent.time_ms {
        Judgement::Excellent(windows.excellent.points)
    } else if elapsed <= windows.good.time_ms {
        Judgement::Good(windows.good.points)
    } else {
        return Judgement::TooLate;
    };

    state.pending.get_mut(kind).acknowledged = true;
    state.score += judgement.points();
    state.stats.events_caught += 1;
    judgement
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_state() -> GameState {
        let mut state = GameState::new();
        state.is_playing = true;
        state
    }

    #[test]
    fn test_excellent_then_duplicate_noop() {
        // Spec scenario: jump at t=5000, press at t=5500 -> +20; press again -> no change
        let mut state = playing_state();
        let settings = Settings::default();
        state.pending.record(EventKind::Jump, 5000);

        let j = handle_interaction(&mut state, &settings, EventKind::Jump, 5500);
        assert_eq!(j, Judgement::Excellent(20));
        assert_eq!(state.score, 20);
        assert_eq!(state.stats.events_caught, 1);

        let j = handle_interaction(&mut state, &settings, EventKind::Jump, 7000);
        assert_eq!(j, Judgement::NoOp);
        assert_eq!(state.score, 20);
        assert_eq!(state.stats.events_caught, 1);
    }

    #[test]
    fn test_good_window() {
        let mut state = playing_state();
        let settings = Settings::default();
        state.pending.record(EventKind::Turn, 1000);

        // 1500 ms elapsed: past excellent (1000), inside good (2000)
        let j = handle_interaction(&mut state, &settings, EventKind::Turn, 2500);
        assert_eq!(j, Judgement::Good(10));
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_window_boundaries_inclusive() {
        let settings = Settings::default();

        let mut state = playing_state();
        state.pending.record(EventKind::Shape, 0);
        assert_eq!(
            handle_interaction(&mut state, &settings, EventKind::Shape, 1000),
            Judgement::Excellent(20)
        );

        let mut state = playing_state();
        state.pending.record(EventKind::Shape, 0);
        assert_eq!(
            handle_interaction(&mut state, &settings, EventKind::Shape, 2000),
            Judgement::Good(10)
        );

        let mut state = playing_state();
        state.pending.record(EventKind::Shape, 0);
        assert_eq!(
            handle_interaction(&mut state, &settings, EventKind::Shape, 2001),
            Judgement::TooLate
        );
    }

    #[test]
    fn test_too_late_leaves_record_unacknowledged() {
        // Spec scenario: color event at t=0, press at t=10000 -> 0 points, still live
        let mut state = playing_state();
        let settings = Settings::default();
        state.pending.record(EventKind::Color, 0);

        let j = handle_interaction(&mut state, &settings, EventKind::Color, 10_000);
        assert_eq!(j, Judgement::TooLate);
        assert_eq!(state.score, 0);
        assert!(!state.pending.get(EventKind::Color).acknowledged);
        assert_eq!(state.stats.events_caught, 0);
    }

    #[test]
    fn test_never_fired_is_noop() {
        let mut state = playing_state();
        let settings = Settings::default();

        let j = handle_interaction(&mut state, &settings, EventKind::Shape, 123_456);
        assert_eq!(j, Judgement::NoOp);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_not_playing_is_noop() {
        let mut state = GameState::new();
        let settings = Settings::default();
        state.pending.record(EventKind::Jump, 1000);

        let j = handle_interaction(&mut state, &settings, EventKind::Jump, 1100);
        assert_eq!(j, Judgement::NoOp);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_score_never_decreases() {
        let mut state = playing_state();
        let settings = Settings::default();
        let mut last_score = 0;

        for i in 0..20u64 {
            let kind = EventKind::ALL[(i % 4) as usize];
            state.pending.record(kind, i * 3000);
            // Alternate between timely and hopeless presses
            let press_at = if i % 2 == 0 { i * 3000 + 500 } else { i * 3000 + 9000 };
            handle_interaction(&mut state, &settings, kind, press_at);
            assert!(state.score >= last_score);
            last_score = state.score;
        }
    }
}
