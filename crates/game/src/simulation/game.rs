use std::time::Instant;

use crate::assets::{AssetLoader, SpriteImage};
use crate::background::Background;
use crate::config::GameConfig;
use crate::error::{GameError, TickError};
use crate::event::GameEvent;
use crate::input::InputEvents;
use crate::launcher::Launcher;
use crate::registry::{Registry, Shared, shared};
use crate::render::Surface;
use crate::target::Target;

use super::{FixedTimestep, TickContext};

pub struct Game {
    config: GameConfig,
    registry: Registry,
    launcher: Shared<Launcher>,
    target: Shared<Target>,
    target_sprite: SpriteImage,
}

impl Game {
    /// Loads the target sprite and registers background, launcher and target,
    /// in that order.
    pub fn new(
        config: GameConfig,
        assets: &dyn AssetLoader,
        now: Instant,
    ) -> Result<Self, GameError> {
        let target_sprite = assets.load_sprite(&config.target.sprite_path)?;

        let target = shared(Target::new(
            config.target.clone(),
            config.playfield,
            target_sprite,
            now,
        ));
        let launcher = shared(Launcher::new(&config).with_target(target.clone()));

        let mut registry = Registry::new();
        registry.register(shared(Background::new(config.playfield)));
        registry.register(launcher.clone());
        registry.register(target.clone());

        log::info!(
            "Game ready: {}x{} playfield, target sprite {}x{}",
            config.playfield.width,
            config.playfield.height,
            target_sprite.width,
            target_sprite.height
        );

        Ok(Self {
            config,
            registry,
            launcher,
            target,
            target_sprite,
        })
    }

    pub fn update(&mut self, ctx: &mut TickContext) -> Result<(), TickError> {
        ctx.validate()?;
        self.registry.update_all(ctx)
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        self.registry.draw_all(surface);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn launcher(&self) -> &Shared<Launcher> {
        &self.launcher
    }

    pub fn target(&self) -> &Shared<Target> {
        &self.target
    }

    pub fn target_sprite(&self) -> SpriteImage {
        self.target_sprite
    }
}

#[derive(Debug, Default)]
pub struct FrameReport {
    pub ticks: u32,
    pub events: Vec<GameEvent>,
}

/// Runs as many fixed ticks as the elapsed frame time allows. Input is held
/// until a tick runs and is delivered to that tick only.
pub struct SimulationLoop {
    game: Game,
    timestep: FixedTimestep,
    pending_input: InputEvents,
}

impl SimulationLoop {
    pub fn new(game: Game, tick_rate: u32) -> Self {
        Self {
            game,
            timestep: FixedTimestep::new(tick_rate),
            pending_input: InputEvents::empty(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn timestep(&self) -> &FixedTimestep {
        &self.timestep
    }

    pub fn update(
        &mut self,
        delta: f64,
        now: Instant,
        input: InputEvents,
    ) -> Result<FrameReport, TickError> {
        self.timestep.accumulate(delta);
        self.pending_input |= input;

        let mut report = FrameReport::default();
        while self.timestep.consume_tick() {
            let input = std::mem::take(&mut self.pending_input);
            let mut ctx = TickContext::new(self.timestep.dt(), now).with_input(input);

            self.game.update(&mut ctx)?;
            report.events.extend(ctx.drain_events());
            report.ticks += 1;
        }
        Ok(report)
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        self.game.draw(surface);
    }
}
