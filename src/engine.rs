//! Scheduler and game lifecycle
//!
//! Owns the authoritative [`GameState`] and drives the two cadences of the
//! game: the variable-delay step loop and the fixed 1 s heartbeat. The host
//! calls [`Engine::advance`] with the current wall-clock time; deadlines are
//! plain fields, so cancelling a pending timer is overwriting the field.
//! Nothing can fire after pause/stop/restart.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::HEARTBEAT_MS;
use crate::highscores::HighScoreStore;
use crate::settings::{Settings, SettingsPatch};
use crate::sim::{self, EventKind, GameState, Judgement, LevelTier};

/// End-of-run statistics for the summary screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u64,
    pub high_score: u64,
    pub elapsed_secs: u64,
    pub events_fired: u64,
    pub events_caught: u64,
}

/// The game engine: state, RNG, settings, persistence, and the two timers.
#[derive(Debug)]
pub struct Engine {
    state: GameState,
    settings: Settings,
    rng: Pcg32,
    store: HighScoreStore,
    /// Next step-loop deadline; `None` means no tick is scheduled
    next_tick_at: Option<u64>,
    /// Next heartbeat deadline; `None` means the heartbeat is stopped
    next_heartbeat_at: Option<u64>,
}

impl Engine {
    /// Build an engine with the given settings, score store and RNG seed.
    /// The persisted high score is read once, here.
    pub fn new(settings: Settings, store: HighScoreStore, seed: u64) -> Self {
        let mut state = GameState::new();
        state.high_score = store.load();
        Self {
            state,
            settings,
            rng: Pcg32::seed_from_u64(seed),
            store,
            next_tick_at: None,
            next_heartbeat_at: None,
        }
    }

    /// Step-loop delay for the current level
    fn step_delay_ms(&self) -> u64 {
        let delay = self.settings.base_speed_ms as f64 * self.state.level.speed_mult();
        (delay.round() as u64).max(1)
    }

    /// Begin a run. Calling while already playing is an implicit full reset;
    /// the stale deadlines are overwritten first, so no old tick survives.
    pub fn start(&mut self, now_ms: u64) {
        self.state.reset_for_start();
        self.next_tick_at = Some(now_ms + self.step_delay_ms());
        self.next_heartbeat_at = Some(now_ms + HEARTBEAT_MS);
        log::info!("Game started");
    }

    /// End the run, cancel both timers, and persist the high score if beaten.
    /// The final state stays readable for the summary screen.
    pub fn stop(&mut self) {
        self.next_tick_at = None;
        self.next_heartbeat_at = None;
        if !self.state.is_playing {
            return;
        }
        self.state.is_playing = false;
        self.state.is_paused = false;

        if self.state.score > self.state.high_score {
            self.state.high_score = self.state.score;
            self.store.save(self.state.high_score);
        }
        let summary = self.summary();
        log::info!(
            "Game over: score {} (best {}), {}/{} events caught in {}s",
            summary.score,
            summary.high_score,
            summary.events_caught,
            summary.events_fired,
            summary.elapsed_secs
        );
    }

    /// Suspend both timers without touching game state. Idempotent.
    pub fn pause(&mut self) {
        if !self.state.is_playing || self.state.is_paused {
            return;
        }
        self.state.is_paused = true;
        self.next_tick_at = None;
        self.next_heartbeat_at = None;
        log::info!("Paused");
    }

    /// Re-enter the loop as if a tick just completed: the first tick after
    /// resume fires after a full fresh delay.
    pub fn resume(&mut self, now_ms: u64) {
        if !self.state.is_playing || !self.state.is_paused {
            return;
        }
        self.state.is_paused = false;
        self.next_tick_at = Some(now_ms + self.step_delay_ms());
        self.next_heartbeat_at = Some(now_ms + HEARTBEAT_MS);
        log::info!("Resumed");
    }

    pub fn toggle_pause(&mut self, now_ms: u64) {
        if self.state.is_paused {
            self.resume(now_ms);
        } else {
            self.pause();
        }
    }

    /// Execute every deadline due at or before `now_ms`, in timestamp order.
    ///
    /// A due tick runs with its deadline as the tick's timestamp, keeping the
    /// run deterministic under host jitter. When a tick and a heartbeat fall
    /// due at the same instant the heartbeat runs first, so a tier change
    /// feeds the very next tick's delay.
    pub fn advance(&mut self, now_ms: u64) {
        loop {
            let tick_due = self.next_tick_at.filter(|&t| t <= now_ms);
            let heartbeat_due = self.next_heartbeat_at.filter(|&t| t <= now_ms);

            match (tick_due, heartbeat_due) {
                (None, None) => break,
                (Some(t), Some(h)) if h <= t => self.run_heartbeat(h),
                (Some(t), _) => self.run_tick(t),
                (None, Some(h)) => self.run_heartbeat(h),
            }
        }
    }

    fn run_tick(&mut self, due_ms: u64) {
        // Delay uses the level in effect at the start of this tick
        let delay = self.step_delay_ms();
        sim::tick(&mut self.state, &self.settings, &mut self.rng, due_ms);
        self.next_tick_at = Some(due_ms + delay);
    }

    fn run_heartbeat(&mut self, due_ms: u64) {
        self.state.elapsed_secs += 1;
        let tier = LevelTier::for_elapsed(self.state.elapsed_secs);
        if tier != self.state.level {
            log::info!("Level up: {} at {}s", tier.as_str(), self.state.elapsed_secs);
            self.state.level = tier;
        }
        self.next_heartbeat_at = Some(due_ms + HEARTBEAT_MS);
    }

    /// Earliest pending deadline, for host sleep loops
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.next_tick_at, self.next_heartbeat_at) {
            (Some(t), Some(h)) => Some(t.min(h)),
            (t, h) => t.or(h),
        }
    }

    /// Judge a player input arriving at `now_ms`.
    pub fn handle_interaction(&mut self, kind: EventKind, now_ms: u64) -> Judgement {
        let judgement = sim::handle_interaction(&mut self.state, &self.settings, kind, now_ms);
        if judgement.points() > 0 {
            log::debug!(
                "{} caught: {:?}, score {}",
                kind.as_str(),
                judgement,
                self.state.score
            );
        }
        judgement
    }

    /// Merge a partial settings update. Takes effect the next time a tick or
    /// heartbeat reads the settings; no retroactive rescheduling.
    pub fn update_settings(&mut self, patch: SettingsPatch) {
        self.settings.apply(patch);
        log::debug!("Settings updated: {:?}", self.settings);
    }

    /// The full snapshot consumed by rendering
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            score: self.state.score,
            high_score: self.state.high_score,
            elapsed_secs: self.state.elapsed_secs,
            events_fired: self.state.stats.events_fired,
            events_caught: self.state.stats.events_caught,
        }
    }
}
