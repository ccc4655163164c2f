//! Game state and core simulation types
//!
//! Everything the simulation owns lives here: the session bookkeeping, the
//! player pose, and the three transient entity collections. Presentation
//! handles (sprites, DOM nodes, sounds) never appear in these records; the
//! host reads plain numbers and drains [`GameEvent`]s instead.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Never started, nothing simulates until the first start action
    Idle,
    /// Started with the weapon enabled; the first activate begins the run
    Ready,
    /// Active gameplay
    Running,
    /// Run ended at the win score
    Won,
    /// Run ended with no lives left
    Lost,
}

/// Pickup subtypes, chosen by a fair coin flip at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    Nitro,
    Wrench,
}

impl PickupKind {
    /// Display name for HUD messages
    pub fn label(&self) -> &'static str {
        match self {
            PickupKind::Nitro => "Nitro",
            PickupKind::Wrench => "Wrench",
        }
    }
}

/// A collectible pickup, center-anchored, floating above the ground line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub kind: PickupKind,
    pub pos: Vec2,
    pub size: f32,
    pub collected: bool,
}

/// A rival rig, bottom-center-anchored, resting on the ground line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
    pub dead: bool,
}

/// A laser bolt, center-anchored, moving toward the trailing edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shot {
    pub id: u32,
    pub pos: Vec2,
}

/// Discrete events for the presentation layer
///
/// Emitted into [`Session::events`] and drained with
/// [`Session::take_events`]. Ignoring them never affects the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A pickup was collected (+1 score)
    Pickup { kind: PickupKind },
    /// An enemy was destroyed without losing a life
    Kill { bonus: u32 },
    /// An enemy got through; one life lost
    Hit { lives_left: u32 },
    /// Weapon energy is low (advisory only)
    EnergyLow,
    /// Terminal: the session reached the win score
    Won,
    /// Terminal: the session ran out of lives
    Lost,
}

/// The player's bike
///
/// X stays camera-relative and fixed; Y sits on the ground line. The pose
/// angle eases toward the wheelie tilt while a dodge is held.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Pose angle in degrees (0 = level, negative = nose up)
    pub angle: f32,
}

impl Player {
    fn at_start(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.view_width * PLAYER_X_FRAC, tuning.ground_y),
            angle: 0.0,
        }
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance parameters for this session's variant
    pub tuning: Tuning,
    /// Current phase
    pub phase: Phase,
    /// Score, monotonically non-decreasing within a run
    pub score: u32,
    /// Lives remaining
    pub lives: u32,
    /// Weapon charge, `0..=tuning.max_energy()` (0 when the variant has no weapon)
    pub energy: f32,
    /// Seconds of wheelie remaining; positive means the dodge pose is held
    pub dodge_time: f32,
    /// Seconds until the next shot is allowed
    pub cooldown: f32,
    /// Seconds until the next spawn attempt
    pub spawn_in: f32,
    /// World scroll offset (read by the background renderer)
    pub scroll: f32,
    /// Player pose
    pub player: Player,
    /// Active pickups (spawn order, stable ids)
    pub pickups: Vec<Pickup>,
    /// Active enemies (spawn order, stable ids)
    pub enemies: Vec<Enemy>,
    /// Active laser bolts
    pub shots: Vec<Shot>,
    /// Simulation tick counter
    pub ticks: u64,
    /// Simulated seconds since the last reset
    pub elapsed: f32,
    /// Session RNG; every random decision draws from this stream
    pub rng: Pcg32,
    /// Pending events for the presentation layer
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl Session {
    /// Create an idle session with the given balance and seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let player = Player::at_start(&tuning);
        let energy = tuning.max_energy();
        Self {
            seed,
            tuning,
            phase: Phase::Idle,
            score: 0,
            lives: 0,
            energy,
            dodge_time: 0.0,
            cooldown: 0.0,
            spawn_in: 0.0,
            scroll: 0.0,
            player,
            pickups: Vec::new(),
            enemies: Vec::new(),
            shots: Vec::new(),
            ticks: 0,
            elapsed: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Whether the simulation advances on this tick
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Begin (or restart) a run
    ///
    /// Resets all gameplay state, then enters `Running` - or `Ready` when
    /// the variant carries a weapon, in which case the first activate input
    /// starts the scroll. The RNG stream is deliberately left alone: one
    /// seed owns the whole session including restarts.
    pub fn start(&mut self) {
        self.reset();
        self.phase = if self.tuning.weapon.is_some() {
            Phase::Ready
        } else {
            Phase::Running
        };
    }

    /// Reset every gameplay field to its session-start value
    ///
    /// Idempotent: calling this twice in a row leaves the same state as
    /// calling it once.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.tuning.start_lives;
        self.energy = self.tuning.max_energy();
        self.dodge_time = 0.0;
        self.cooldown = 0.0;
        self.spawn_in = 0.0;
        self.scroll = 0.0;
        self.player = Player::at_start(&self.tuning);
        self.pickups.clear();
        self.enemies.clear();
        self.shots.clear();
        self.ticks = 0;
        self.elapsed = 0.0;
        self.events.clear();
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Queue an event for the presentation layer
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain pending events (host calls this once per frame)
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
