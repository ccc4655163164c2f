//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies
//!
//! The host calls [`tick`] once per frame with an elapsed-time delta and
//! drains [`GameEvent`]s afterward. Every event is safe to ignore; the
//! simulation never depends on a subscriber being present.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Anchor, player_hitbox};
pub use state::{Enemy, GameEvent, Phase, Pickup, PickupKind, Player, Session, Shot};
pub use tick::{TickInput, tick};
