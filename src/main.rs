//! Moto Dash demo driver
//!
//! Headless entry point: runs one session with the autopilot at a fixed
//! timestep and logs the events a presentation layer would react to.
//!
//! Usage: `moto-dash [seed] [variant]` where variant is one of
//! `classic`, `turbo`, `laser`. RUST_LOG tunes verbosity.

use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use moto_dash::sim::{GameEvent, Phase, Session, TickInput, tick};
use moto_dash::tuning::Variant;

/// Fixed simulation timestep (120 Hz)
const STEP: f32 = 1.0 / 120.0;
/// Demo sessions give up after this much simulated time
const MAX_SIM_SECONDS: f32 = 300.0;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("seed must be an integer, got '{raw}'"))?,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64,
    };
    let variant = match args.next() {
        Some(name) => Variant::from_str(&name)
            .ok_or_else(|| format!("unknown variant '{name}' (classic|turbo|laser)"))?,
        None => Variant::Classic,
    };

    let mut session = Session::new(variant.tuning(), seed);
    log::info!("Moto Dash: variant={}, seed={}", variant.as_str(), seed);

    let mut input = TickInput {
        start: true,
        idle_mode: true,
        ..Default::default()
    };

    let max_ticks = (MAX_SIM_SECONDS / STEP) as u64;
    for _ in 0..max_ticks {
        tick(&mut session, &input, STEP);
        // Clear one-shot inputs after processing
        input.start = false;

        for event in session.take_events() {
            match event {
                GameEvent::Pickup { kind } => log::info!("nice pick-up: {}", kind.label()),
                GameEvent::Kill { bonus } => log::info!("enemy wiped out (+{bonus})"),
                GameEvent::Hit { lives_left } => log::warn!("hit! {lives_left} lives left"),
                GameEvent::EnergyLow => log::debug!("energy low"),
                GameEvent::Won => log::info!("win threshold reached"),
                GameEvent::Lost => log::info!("out of lives"),
            }
        }

        if matches!(session.phase, Phase::Won | Phase::Lost) {
            break;
        }
    }

    let outcome = match session.phase {
        Phase::Won => "victory lap",
        Phase::Lost => "wipeout",
        _ => "time limit",
    };
    println!(
        "{} after {:.1}s: score {}, lives {}",
        outcome, session.elapsed, session.score, session.lives
    );
    Ok(())
}
