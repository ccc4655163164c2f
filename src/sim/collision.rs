//! Axis-aligned collision detection
//!
//! The subtle part of a lane runner: the records use three different anchor
//! conventions (the player sprite hangs from a bottom-left-ish anchor,
//! enemies stand on a bottom-center anchor, pickups and shots are centered).
//! Every overlap test goes through [`Aabb::from_anchor`] so the convention
//! is written down exactly once - a mismatch here drops or double-counts
//! hits.
//!
//! Coordinates are screen-style: X grows toward the trailing edge, Y grows
//! downward, the ground line is a large Y.

use glam::Vec2;

use crate::consts::*;
use super::state::{Enemy, Pickup, Player, Shot};

/// Anchor conventions for the entity records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `pos` is the geometric center (pickups, shots)
    Center,
    /// `pos` is the midpoint of the bottom edge (enemies on the ground line)
    BottomCenter,
    /// `pos` is the bottom-left corner (the player hitbox)
    BottomLeft,
}

/// An axis-aligned rectangle in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build a rectangle from an anchored position and extents
    pub fn from_anchor(anchor: Anchor, pos: Vec2, w: f32, h: f32) -> Self {
        let min = match anchor {
            Anchor::Center => Vec2::new(pos.x - w / 2.0, pos.y - h / 2.0),
            Anchor::BottomCenter => Vec2::new(pos.x - w / 2.0, pos.y - h),
            Anchor::BottomLeft => Vec2::new(pos.x, pos.y - h),
        };
        Self {
            min,
            max: min + Vec2::new(w, h),
        }
    }

    /// Half-open overlap test; rectangles that merely share an edge miss
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The player's hitbox for this tick
///
/// Trails the sprite anchor by a fixed fraction of the width; grows taller
/// while the wheelie is held so a dodge can clip enemies the level pose
/// would miss.
pub fn player_hitbox(player: &Player, dodging: bool) -> Aabb {
    let h = if dodging {
        PLAYER_H * DODGE_HITBOX_SCALE
    } else {
        PLAYER_H
    };
    let origin = Vec2::new(player.pos.x - PLAYER_W * PLAYER_BACKSET, player.pos.y);
    Aabb::from_anchor(Anchor::BottomLeft, origin, PLAYER_W, h)
}

/// Pickup collision rectangle (center-anchored square)
pub fn pickup_hitbox(pickup: &Pickup) -> Aabb {
    Aabb::from_anchor(Anchor::Center, pickup.pos, pickup.size, pickup.size)
}

/// Enemy collision rectangle (bottom-center-anchored square)
pub fn enemy_hitbox(enemy: &Enemy) -> Aabb {
    Aabb::from_anchor(Anchor::BottomCenter, enemy.pos, enemy.size, enemy.size)
}

/// Laser bolt collision rectangle
pub fn shot_hitbox(shot: &Shot) -> Aabb {
    Aabb::from_anchor(Anchor::Center, shot.pos, SHOT_SIZE, SHOT_SIZE)
}
