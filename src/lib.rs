//! Moto Dash - a side-scrolling bike-runner arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, session state)
//! - `tuning`: Data-driven game balance (variant presets)
//!
//! Rendering, audio, and input devices live outside this crate; the host
//! drives `sim::tick` once per frame and drains `sim::GameEvent`s for
//! whatever presentation it has.

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, WeaponTuning};

/// Game geometry constants
///
/// Structural values shared by every variant. Per-variant balance (speeds,
/// lives, spawn windows, weapon numbers) lives in [`tuning::Tuning`].
pub mod consts {
    /// Player display size (pixels)
    pub const PLAYER_W: f32 = 160.0;
    pub const PLAYER_H: f32 = 110.0;
    /// Fraction of the player width the hitbox trails the sprite anchor by
    pub const PLAYER_BACKSET: f32 = 0.15;
    /// Player rests at this fraction of the view width
    pub const PLAYER_X_FRAC: f32 = 0.18;

    /// Wheelie pose target angle (degrees, nose up)
    pub const WHEELIE_ANGLE: f32 = -45.0;
    /// Hitbox height multiplier while the wheelie is held
    pub const DODGE_HITBOX_SCALE: f32 = 1.4;
    /// Pose interpolation rate (per second) toward/away from the wheelie angle
    pub const ANGLE_LERP_RATE: f32 = 8.0;

    /// Enemies close slightly faster than the world scrolls
    pub const ENEMY_SPEED_FACTOR: f32 = 1.05;
    /// Entities past this X on the near edge are retired
    pub const RETIRE_X: f32 = -80.0;
    /// Spawn margin beyond the trailing edge, per entity family
    pub const PICKUP_SPAWN_MARGIN: f32 = 80.0;
    pub const ENEMY_SPAWN_MARGIN: f32 = 120.0;
    /// Shots past the trailing edge by this margin are retired
    pub const SHOT_RETIRE_MARGIN: f32 = 40.0;
    /// Pickups float this far above their resting line
    pub const PICKUP_FLOAT: f32 = 20.0;

    /// Laser bolt collision size
    pub const SHOT_SIZE: f32 = 24.0;
    /// Muzzle offset from the player anchor
    pub const MUZZLE_DX: f32 = 130.0;
    pub const MUZZLE_DY: f32 = -70.0;

    /// Advisory threshold: energy below this fraction of max reads as "low"
    pub const ENERGY_LOW_FRAC: f32 = 0.2;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Frame-rate-aware approach toward a target at `rate` per second
///
/// Matches the feel of lerping by `rate * dt` each tick without overshooting
/// on a long frame.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    lerp(current, target, (rate * dt).min(1.0))
}
