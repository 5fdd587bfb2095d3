//! Per-step simulation tick
//!
//! One tick = maybe fire a mutation event, then advance the token. Callers pass
//! the tick's wall-clock timestamp; nothing in here reads a clock or schedules.

use rand::Rng;

use super::state::{EventKind, GameState, Shape, TokenColor};
use crate::consts::{EVENT_COOLDOWN_MS, JUMP_STEPS, NORMAL_STEPS};
use crate::settings::Settings;
use crate::wrap_position;

/// Kind selection from a single uniform draw: explicit cumulative spans,
/// mutually exclusive by construction. Upper bounds are exclusive.
const KIND_SPANS: [(EventKind, f64); 4] = [
    (EventKind::Shape, 0.25),
    (EventKind::Color, 0.50),
    (EventKind::Turn, 0.75),
    (EventKind::Jump, 1.00),
];

pub(crate) fn select_kind(sample: f64) -> EventKind {
    for (kind, upper) in KIND_SPANS {
        if sample < upper {
            return kind;
        }
    }
    EventKind::Jump
}

/// Advance the game by one step-loop tick at `now_ms`.
///
/// Order within the tick is fixed: event generation first, then movement, so a
/// turn or jump fired this tick shapes this tick's movement.
pub fn tick<R: Rng>(state: &mut GameState, settings: &Settings, rng: &mut R, now_ms: u64) {
    if !state.is_playing || state.is_paused {
        return;
    }

    maybe_fire_event(state, settings, rng, now_ms);
    integrate_position(state, now_ms);
}

/// Event generator: two independent draws, gate then kind.
///
/// The 2 s cooldown suppresses the gate entirely; a same-value shape/color draw
/// is a no-op (no record, no cooldown reset), not a retry.
pub(crate) fn maybe_fire_event<R: Rng>(
    state: &mut GameState,
    settings: &Settings,
    rng: &mut R,
    now_ms: u64,
) {
    if now_ms <= state.cooldown_until_ms {
        return;
    }

    let gate: f64 = rng.random();
    let chance = settings.change_frequency * state.level.freq_mult();
    if gate >= chance {
        return;
    }

    let fired = match select_kind(rng.random()) {
        EventKind::Shape => {
            let drawn = Shape::ALL[rng.random_range(0..Shape::ALL.len())];
            apply_shape(state, drawn, now_ms)
        }
        EventKind::Color => {
            let drawn = TokenColor::ALL[rng.random_range(0..TokenColor::ALL.len())];
            apply_color(state, drawn, now_ms)
        }
        EventKind::Turn => apply_turn(state, now_ms),
        EventKind::Jump => apply_jump(state, now_ms),
    };

    if fired {
        state.cooldown_until_ms = now_ms + EVENT_COOLDOWN_MS;
    }
}

/// Mutate the shape; drawing the current value changes nothing this tick.
pub(crate) fn apply_shape(state: &mut GameState, drawn: Shape, now_ms: u64) -> bool {
    if drawn == state.shape {
        return false;
    }
    state.shape = drawn;
    record(state, EventKind::Shape, now_ms);
    true
}

/// Mutate the color; same no-op rule as shapes.
pub(crate) fn apply_color(state: &mut GameState, drawn: TokenColor, now_ms: u64) -> bool {
    if drawn == state.color {
        return false;
    }
    state.color = drawn;
    record(state, EventKind::Color, now_ms);
    true
}

/// Flip direction. Always a real mutation, so always records.
pub(crate) fn apply_turn(state: &mut GameState, now_ms: u64) -> bool {
    state.direction = state.direction.flipped();
    record(state, EventKind::Turn, now_ms);
    true
}

/// Record a jump; movement itself happens in the integrator this tick.
pub(crate) fn apply_jump(state: &mut GameState, now_ms: u64) -> bool {
    record(state, EventKind::Jump, now_ms);
    true
}

fn record(state: &mut GameState, kind: EventKind, now_ms: u64) {
    state.pending.record(kind, now_ms);
    state.stats.events_fired += 1;
}

/// Position integrator: runs every tick, event or not.
///
/// Jump steps apply only on the tick the jump fired; direction is read after
/// any same-tick turn, so movement always reflects the freshest flip.
pub(crate) fn integrate_position(state: &mut GameState, now_ms: u64) {
    let steps = if state.pending.jump_fired_at(now_ms) {
        JUMP_STEPS
    } else {
        NORMAL_STEPS
    };
    state.position = wrap_position(state.position, steps * state.direction.sign());
}
