//! Data-driven game balance
//!
//! Every knob the variants turn lives here, so a balance pass edits data
//! instead of the loop. The three shipped presets mirror the game's
//! history: the classic wheelie build, the faster turbo cut, and the laser
//! build that swaps the dodge for a weapon.

use serde::{Deserialize, Serialize};

/// The shipped game variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    #[default]
    Classic,
    Turbo,
    Laser,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Turbo => "turbo",
            Variant::Laser => "laser",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Variant::Classic),
            "turbo" => Some(Variant::Turbo),
            "laser" => Some(Variant::Laser),
            _ => None,
        }
    }

    /// Balance preset for this variant
    pub fn tuning(&self) -> Tuning {
        match self {
            Variant::Classic => Tuning::classic(),
            Variant::Turbo => Tuning::turbo(),
            Variant::Laser => Tuning::laser(),
        }
    }
}

/// Weapon parameters for the laser variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponTuning {
    /// Seconds between shots
    pub cooldown: f32,
    /// Energy deducted per shot
    pub shot_cost: f32,
    /// Energy regained per second, up to `max_energy`
    pub recharge_rate: f32,
    /// Tank capacity
    pub max_energy: f32,
    /// Bolt velocity toward the trailing edge (pixels/sec)
    pub shot_speed: f32,
}

/// Per-variant balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    // === View geometry ===
    /// Visible world width; entities spawn just beyond it
    pub view_width: f32,
    /// The ground line entities rest on
    pub ground_y: f32,

    // === Session ===
    pub start_lives: u32,
    /// Score that ends the run in a win
    pub win_score: u32,

    // === World ===
    /// Horizontal scroll speed (pixels/sec)
    pub world_speed: f32,

    // === Spawning ===
    /// Probability a spawn attempt produces an enemy (else a pickup)
    pub enemy_chance: f32,
    /// Uniform window between spawn attempts (seconds, lo..hi)
    pub spawn_interval: (f32, f32),
    /// Uniform size jitter per family (pixels, lo..hi)
    pub pickup_size: (f32, f32),
    pub enemy_size: (f32, f32),

    // === Actions ===
    /// Wheelie hold time per activation (seconds)
    pub dodge_duration: f32,
    /// Present only in the laser variant; also gates the `Ready` phase
    pub weapon: Option<WeaponTuning>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::classic()
    }
}

impl Tuning {
    /// The original wheelie build
    pub fn classic() -> Self {
        Self {
            view_width: 1280.0,
            ground_y: 615.0,
            start_lives: 3,
            win_score: 40,
            world_speed: 320.0,
            enemy_chance: 0.35,
            spawn_interval: (1.1, 2.0),
            pickup_size: (60.0, 80.0),
            enemy_size: (48.0, 66.0),
            dodge_duration: 1.0,
            weapon: None,
        }
    }

    /// Faster world, tighter spawn window, fewer lives, longer run
    pub fn turbo() -> Self {
        Self {
            start_lives: 2,
            win_score: 60,
            world_speed: 380.0,
            spawn_interval: (0.9, 1.5),
            ..Self::classic()
        }
    }

    /// Classic pacing with the dodge swapped for a laser
    pub fn laser() -> Self {
        Self {
            win_score: 60,
            weapon: Some(WeaponTuning {
                cooldown: 0.35,
                shot_cost: 20.0,
                recharge_rate: 30.0,
                max_energy: 100.0,
                shot_speed: 900.0,
            }),
            ..Self::classic()
        }
    }

    /// Tank capacity, or zero for variants without a weapon
    pub fn max_energy(&self) -> f32 {
        self.weapon.map_or(0.0, |w| w.max_energy)
    }

    /// Load a balance file
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize for a balance file
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_sane() {
        for variant in [Variant::Classic, Variant::Turbo, Variant::Laser] {
            let t = variant.tuning();
            assert!(t.start_lives > 0);
            assert!(t.win_score > 0);
            assert!(t.world_speed > 0.0);
            assert!(t.enemy_chance > 0.0 && t.enemy_chance < 1.0);
            assert!(t.spawn_interval.0 < t.spawn_interval.1);
            assert!(t.pickup_size.0 < t.pickup_size.1);
            assert!(t.enemy_size.0 < t.enemy_size.1);
        }
    }

    #[test]
    fn test_variant_names_round_trip() {
        for variant in [Variant::Classic, Variant::Turbo, Variant::Laser] {
            assert_eq!(Variant::from_str(variant.as_str()), Some(variant));
        }
        assert_eq!(Variant::from_str("TURBO"), Some(Variant::Turbo));
        assert_eq!(Variant::from_str("arcade"), None);
    }

    #[test]
    fn test_only_laser_carries_a_weapon() {
        assert!(Tuning::classic().weapon.is_none());
        assert!(Tuning::turbo().weapon.is_none());
        assert!(Tuning::laser().weapon.is_some());
        assert_eq!(Tuning::classic().max_energy(), 0.0);
        assert!(Tuning::laser().max_energy() > 0.0);
    }

    #[test]
    fn test_balance_file_loads() {
        let json = r#"{
            "view_width": 1280.0,
            "ground_y": 615.0,
            "start_lives": 2,
            "win_score": 25,
            "world_speed": 400.0,
            "enemy_chance": 0.5,
            "spawn_interval": [0.8, 1.2],
            "pickup_size": [60.0, 80.0],
            "enemy_size": [48.0, 66.0],
            "dodge_duration": 0.8,
            "weapon": null
        }"#;
        let tuning = Tuning::from_json(json).unwrap();
        assert_eq!(tuning.start_lives, 2);
        assert_eq!(tuning.win_score, 25);
        assert_eq!(tuning.spawn_interval, (0.8, 1.2));
        assert!(tuning.weapon.is_none());
    }
}
