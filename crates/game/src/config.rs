use std::path::PathBuf;
use std::time::Duration;

use glam::DVec2;

pub const DEFAULT_TICK_RATE: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

impl Playfield {
    pub const GROUND_RATIO: f64 = 0.8;

    /// Y coordinate of the ground line. Positions grow downwards.
    pub fn ground_y(&self) -> f64 {
        Self::GROUND_RATIO * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailConfig {
    pub capacity: usize,
    pub sample_period: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            sample_period: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LauncherConfig {
    pub barrel_length: f64,
    pub barrel_width: f64,

    /// Initial aim in radians, measured from the vertical.
    pub angle: f64,
    pub speed: f64,

    pub aim_step: f64,
    pub speed_step: f64,

    /// Where the barrel sprite is anchored, relative to the ground line.
    pub pivot_x: f64,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            barrel_length: 200.0,
            barrel_width: 50.0,

            angle: 0.78,
            speed: 150.0,

            aim_step: 3_f64.to_radians(),
            speed_step: 10.0,

            pivot_x: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TargetConfig {
    pub sprite_path: PathBuf,

    pub hitpoints: u32,
    pub damage_per_hit: u32,

    pub scale: f64,
    pub spawn_shift_percent: f64,
    pub relocate_after: Duration,

    pub health_bar_width_percent: u32,
    pub health_bar_height: u32,

    pub seed: u64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            sprite_path: PathBuf::from("assets/enemy.png"),

            hitpoints: 1000,
            damage_per_hit: 10,

            scale: 0.7,
            spawn_shift_percent: 10.0,
            relocate_after: Duration::from_secs(5),

            health_bar_width_percent: 70,
            health_bar_height: 5,

            seed: 0x5eed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub playfield: Playfield,
    pub gravity: f64,
    pub trail: TrailConfig,
    pub launcher: LauncherConfig,
    pub target: TargetConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield: Playfield::default(),
            gravity: 50.0,
            trail: TrailConfig::default(),
            launcher: LauncherConfig::default(),
            target: TargetConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn launcher_pivot(&self) -> DVec2 {
        DVec2::new(self.launcher.pivot_x, self.playfield.ground_y())
    }
}
