//! Ring Reflex entry point
//!
//! Runs a self-playing demo: the engine is driven off the real clock and an
//! automated player reacts to fired events with human-ish latency. Run with
//! `RUST_LOG=info` to watch the events and judgements stream by.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use rand::Rng;

use ring_reflex::sim::EventKind;
use ring_reflex::{Engine, HighScoreStore, Settings};

/// Demo run length (wall clock)
const DEMO_DURATION_MS: u64 = 20_000;

fn now_ms(t0: Instant) -> u64 {
    t0.elapsed().as_millis() as u64
}

fn main() {
    env_logger::init();
    log::info!("Ring Reflex demo starting ({}s run)...", DEMO_DURATION_MS / 1000);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut engine = Engine::new(Settings::default(), HighScoreStore::new(), seed);
    let mut rng = rand::rng();

    let t0 = Instant::now();
    engine.start(now_ms(t0));

    // Per-kind bookkeeping for the automated player: the last occurrence it
    // noticed and when it plans to press for it.
    let mut seen: [Option<u64>; 4] = [None; 4];
    let mut press_at: [Option<u64>; 4] = [None; 4];

    loop {
        let t = now_ms(t0);
        if t >= DEMO_DURATION_MS {
            break;
        }

        engine.advance(t);

        for (i, &kind) in EventKind::ALL.iter().enumerate() {
            let slot = *engine.state().pending.get(kind);

            if slot.fired_at_ms != seen[i] {
                seen[i] = slot.fired_at_ms;
                if let Some(fired) = slot.fired_at_ms {
                    let latency: u64 = rng.random_range(200..1800);
                    press_at[i] = Some(fired + latency);
                    log::info!("{} event at {}ms, reacting in {}ms", kind.as_str(), fired, latency);
                }
            }

            if let Some(when) = press_at[i]
                && t >= when
            {
                let judgement = engine.handle_interaction(kind, t);
                log::info!("{} press -> {:?}", kind.as_str(), judgement);
                press_at[i] = None;
            }
        }

        // Sleep until the next deadline or planned press, capped for responsiveness
        let mut wake = engine.next_deadline().unwrap_or(t + 50);
        for planned in press_at.iter().flatten() {
            wake = wake.min(*planned);
        }
        let t = now_ms(t0);
        if wake > t {
            std::thread::sleep(Duration::from_millis((wake - t).min(50)));
        }
    }

    engine.stop();
    let summary = engine.summary();
    log::info!(
        "Demo finished: score {} (best {}), caught {}/{} events over {}s",
        summary.score,
        summary.high_score,
        summary.events_caught,
        summary.events_fired,
        summary.elapsed_secs
    );
}
