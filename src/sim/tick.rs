//! Per-frame simulation tick
//!
//! Core game loop that advances a session deterministically: timers, spawn
//! scheduling, motion integration, collision resolution, and the session
//! state machine. One call per host frame with the elapsed-time delta.

use glam::Vec2;
use rand::Rng;

use super::collision::{self, player_hitbox};
use super::state::{Enemy, GameEvent, Phase, Pickup, PickupKind, Session, Shot};
use crate::approach;
use crate::consts::*;

/// Score awards (rules, not balance - identical across variants)
const PICKUP_SCORE: u32 = 1;
const SHOT_KILL_BONUS: u32 = 2;
const DODGE_KILL_BONUS: u32 = 3;

/// How far ahead of the player the autopilot reacts to an enemy
const AUTOPILOT_WINDOW: f32 = 260.0;

/// Input intents for a single tick
///
/// The host records pointer taps and button presses between frames and
/// hands them over here; the natural debounce of the cooldown and dodge
/// timers is the only queueing.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start (or restart) the session
    pub start: bool,
    /// The one discrete gameplay intent: wheelie, or fire in the laser variant
    pub activate: bool,
    /// Idle/demo mode - the autopilot supplies activate intents
    pub idle_mode: bool,
}

/// Advance the session by one frame's worth of simulated time
pub fn tick(state: &mut Session, input: &TickInput, dt: f32) {
    // The start action works from any phase and consumes the whole tick
    if input.start {
        state.start();
        return;
    }

    match state.phase {
        Phase::Idle | Phase::Won | Phase::Lost => return,
        Phase::Ready => {
            // The first activate after arming only releases the brake; it
            // does not also fire.
            if input.activate || input.idle_mode {
                state.phase = Phase::Running;
            }
            return;
        }
        Phase::Running => {}
    }

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }
    let input = &input;

    state.ticks += 1;
    state.elapsed += dt;
    state.scroll += state.tuning.world_speed * dt;

    // Dodge timer and pose
    state.dodge_time = (state.dodge_time - dt).max(0.0);
    let dodging = state.dodge_time > 0.0;
    let target_angle = if dodging { WHEELIE_ANGLE } else { 0.0 };
    state.player.angle = approach(state.player.angle, target_angle, ANGLE_LERP_RATE, dt);

    // Weapon housekeeping: energy regenerates whether or not we fire
    if let Some(weapon) = state.tuning.weapon {
        state.energy = (state.energy + weapon.recharge_rate * dt).min(weapon.max_energy);
        state.cooldown = (state.cooldown - dt).max(0.0);
    }

    if input.activate {
        if state.tuning.weapon.is_some() {
            try_fire(state);
        } else if state.dodge_time <= 0.0 {
            // No stacking: a tap mid-wheelie neither extends nor resets it
            state.dodge_time = state.tuning.dodge_duration;
        }
    }

    // Spawn scheduler
    state.spawn_in -= dt;
    if state.spawn_in <= 0.0 {
        spawn_entity(state);
        let (lo, hi) = state.tuning.spawn_interval;
        state.spawn_in = state.rng.random_range(lo..hi);
    }

    // Motion integration: the world slides left past the player
    let mv = state.tuning.world_speed * dt;
    for pickup in &mut state.pickups {
        pickup.pos.x -= mv;
    }
    for enemy in &mut state.enemies {
        enemy.pos.x -= mv * ENEMY_SPEED_FACTOR;
    }
    if let Some(weapon) = state.tuning.weapon {
        for shot in &mut state.shots {
            shot.pos.x += weapon.shot_speed * dt;
        }
    }

    resolve_collisions(state, dodging);

    // Retirement: consumed or off-screen entities drop with no side effects
    state.pickups.retain(|p| !p.collected && p.pos.x > RETIRE_X);
    state.enemies.retain(|e| !e.dead && e.pos.x > RETIRE_X);
    let far_edge = state.tuning.view_width + SHOT_RETIRE_MARGIN;
    state.shots.retain(|s| s.pos.x < far_edge);

    // End-of-session checks; a same-tick tie resolves to the loss
    if state.lives == 0 {
        end_session(state, GameEvent::Lost);
    } else if state.score >= state.tuning.win_score {
        end_session(state, GameEvent::Won);
    }
}

/// Spawn one entity just beyond the trailing edge
///
/// Enemy with probability `enemy_chance`, otherwise a pickup whose subtype
/// is an independent fair coin flip. Sizes jitter uniformly per family.
fn spawn_entity(state: &mut Session) {
    if state.rng.random::<f32>() < state.tuning.enemy_chance {
        let (lo, hi) = state.tuning.enemy_size;
        let size = state.rng.random_range(lo..hi);
        let id = state.next_entity_id();
        state.enemies.push(Enemy {
            id,
            pos: Vec2::new(
                state.tuning.view_width + ENEMY_SPAWN_MARGIN,
                state.tuning.ground_y,
            ),
            size,
            dead: false,
        });
    } else {
        let kind = if state.rng.random::<f32>() < 0.5 {
            PickupKind::Nitro
        } else {
            PickupKind::Wrench
        };
        let (lo, hi) = state.tuning.pickup_size;
        let size = state.rng.random_range(lo..hi);
        let id = state.next_entity_id();
        state.pickups.push(Pickup {
            id,
            kind,
            pos: Vec2::new(
                state.tuning.view_width + PICKUP_SPAWN_MARGIN,
                state.tuning.ground_y - size / 2.0 - PICKUP_FLOAT,
            ),
            size,
            collected: false,
        });
    }
}

/// Attempt to fire the laser
///
/// Gated on cooldown and energy. A cold gun stays silent; an empty tank
/// raises the advisory event. Neither is an error.
fn try_fire(state: &mut Session) {
    let Some(weapon) = state.tuning.weapon else {
        return;
    };
    if state.cooldown > 0.0 {
        return;
    }
    if state.energy < weapon.shot_cost {
        state.push_event(GameEvent::EnergyLow);
        return;
    }

    state.energy -= weapon.shot_cost;
    state.cooldown = weapon.cooldown;
    let id = state.next_entity_id();
    let muzzle = state.player.pos + Vec2::new(MUZZLE_DX, MUZZLE_DY);
    state.shots.push(Shot { id, pos: muzzle });

    if state.energy < weapon.max_energy * ENERGY_LOW_FRAC {
        state.push_event(GameEvent::EnergyLow);
    }
}

/// Resolve all overlaps for this tick
///
/// Order matters: shots claim their enemies before the body test runs, so a
/// bolt and the player can never both score the same enemy.
fn resolve_collisions(state: &mut Session, dodging: bool) {
    // Shots vs enemies (projectile priority)
    let mut spent: Vec<u32> = Vec::new();
    for shot in &state.shots {
        let bolt = collision::shot_hitbox(shot);
        let hit = state
            .enemies
            .iter_mut()
            .find(|e| !e.dead && collision::enemy_hitbox(e).intersects(&bolt));
        if let Some(enemy) = hit {
            enemy.dead = true;
            spent.push(shot.id);
            state.score += SHOT_KILL_BONUS;
            state.events.push(GameEvent::Kill {
                bonus: SHOT_KILL_BONUS,
            });
        }
    }
    if !spent.is_empty() {
        state.shots.retain(|s| !spent.contains(&s.id));
    }

    let body = player_hitbox(&state.player, dodging);

    // Pickups
    for pickup in &mut state.pickups {
        if pickup.collected {
            continue;
        }
        if body.intersects(&collision::pickup_hitbox(pickup)) {
            pickup.collected = true;
            state.score += PICKUP_SCORE;
            state.events.push(GameEvent::Pickup { kind: pickup.kind });
        }
    }

    // Enemies: a wheelie turns the collision into a kill
    for enemy in &mut state.enemies {
        if enemy.dead {
            continue;
        }
        if body.intersects(&collision::enemy_hitbox(enemy)) {
            enemy.dead = true;
            if dodging {
                state.score += DODGE_KILL_BONUS;
                state.events.push(GameEvent::Kill {
                    bonus: DODGE_KILL_BONUS,
                });
            } else {
                state.lives = state.lives.saturating_sub(1);
                state.events.push(GameEvent::Hit {
                    lives_left: state.lives,
                });
            }
        }
    }
}

/// Halt the simulation and emit the single terminal event
fn end_session(state: &mut Session, outcome: GameEvent) {
    state.phase = match outcome {
        GameEvent::Won => Phase::Won,
        _ => Phase::Lost,
    };
    state.pickups.clear();
    state.enemies.clear();
    state.shots.clear();
    state.push_event(outcome);
}

/// Demo-mode pilot: dodge or shoot when an enemy enters the window
fn autopilot(state: &Session, input: &mut TickInput) {
    if input.activate {
        return;
    }
    let near = state.player.pos.x;
    let threat = state
        .enemies
        .iter()
        .any(|e| !e.dead && e.pos.x > near && e.pos.x < near + AUTOPILOT_WINDOW);
    if !threat {
        return;
    }
    match state.tuning.weapon {
        Some(weapon) => {
            if state.cooldown <= 0.0 && state.energy >= weapon.shot_cost {
                input.activate = true;
            }
        }
        None => {
            if state.dodge_time <= 0.0 {
                input.activate = true;
            }
        }
    }
}
