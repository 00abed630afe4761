pub mod assets;
pub mod background;
pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod launcher;
pub mod registry;
pub mod render;
pub mod simulation;
pub mod target;

pub use assets::{AssetLoader, SpriteImage};
pub use background::Background;
pub use config::{
    DEFAULT_TICK_RATE, GameConfig, LauncherConfig, Playfield, TargetConfig, TrailConfig,
};
pub use error::{AssetError, GameError, RegistryError, TickError};
pub use event::GameEvent;
pub use input::{InputEvents, LauncherAction};
pub use launcher::{Launcher, Projectile};
pub use registry::{Entity, Registry, Shared, shared};
pub use render::{Color, DrawCommand, DrawList, SpriteId, Surface, Transform};
pub use simulation::{FixedTimestep, FrameReport, Game, SimulationLoop, TickContext};
pub use target::{HealthBar, Hitpoints, Target};
