mod health_bar;

pub use health_bar::HealthBar;

use std::time::Instant;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::assets::SpriteImage;
use crate::config::{Playfield, TargetConfig};
use crate::error::TickError;
use crate::event::GameEvent;
use crate::registry::Entity;
use crate::render::{DrawCommand, SpriteId, Surface, Transform};
use crate::simulation::TickContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitpoints {
    pub current: u32,
    pub max: u32,
}

impl Hitpoints {
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }
}

/// The enemy the launcher is shooting at. It hops to a new spot on the ground
/// every few seconds of wall-clock time and dies for good at zero hitpoints.
pub struct Target {
    config: TargetConfig,
    playfield: Playfield,
    sprite: SpriteImage,
    health: Hitpoints,
    health_bar: HealthBar,
    position: DVec2,
    last_moved: Instant,
    rng: ChaCha8Rng,
}

impl Target {
    pub const NAME: &'static str = "target";

    pub fn new(
        config: TargetConfig,
        playfield: Playfield,
        sprite: SpriteImage,
        now: Instant,
    ) -> Self {
        let health = Hitpoints::full(config.hitpoints);
        let bar_width = config.health_bar_width_percent * sprite.width / 100;
        let health_bar = HealthBar::new(health.max, bar_width, config.health_bar_height);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        let mut target = Self {
            config,
            playfield,
            sprite,
            health,
            health_bar,
            position: DVec2::ZERO,
            last_moved: now,
            rng,
        };
        target.relocate(now);
        target
    }

    /// Picks a new X inside the spawn band and drops the sprite onto the
    /// ground line.
    pub fn relocate(&mut self, now: Instant) {
        let (min, max) = self.spawn_band();
        let x = if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        };

        self.position = DVec2::new(
            f64::from(x),
            self.playfield.ground_y() - self.scaled_height(),
        );
        self.last_moved = now;
        self.health_bar.set_position(self.position);
        log::debug!("Target relocated to ({:.0}, {:.0})", self.position.x, self.position.y);
    }

    pub fn spawn_band(&self) -> (i32, i32) {
        let midpoint = self.playfield.width / 2.0;
        let shift = self.config.spawn_shift_percent / 100.0;
        let min = (shift * midpoint) as i32;
        let max = ((shift + 1.0) * midpoint) as i32;
        (min, max)
    }

    pub fn hitbox(&self) -> (DVec2, f64) {
        let radius = self.scaled_height() / 2.0;
        let center = DVec2::new(self.position.x, self.position.y + radius);
        (center, radius)
    }

    pub fn in_hitbox(&self, point: DVec2) -> bool {
        let (center, radius) = self.hitbox();
        center.distance(point) <= radius
    }

    /// Returns the damage actually applied. A dead target absorbs nothing.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        if self.health.is_dead() {
            return 0;
        }
        let amount = amount.min(self.health.current);
        self.health.current -= amount;
        self.health_bar.subtract(amount);
        amount
    }

    pub fn hitpoints(&self) -> Hitpoints {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }

    pub fn damage_per_hit(&self) -> u32 {
        self.config.damage_per_hit
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn last_moved(&self) -> Instant {
        self.last_moved
    }

    pub fn health_bar(&self) -> &HealthBar {
        &self.health_bar
    }

    fn scaled_height(&self) -> f64 {
        self.config.scale * f64::from(self.sprite.height)
    }
}

impl Entity for Target {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn update(&mut self, ctx: &mut TickContext) -> Result<(), TickError> {
        if ctx.now.saturating_duration_since(self.last_moved) > self.config.relocate_after {
            self.relocate(ctx.now);
            ctx.emit(GameEvent::TargetRelocated {
                x: self.position.x,
            });
        }
        Ok(())
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw(DrawCommand::Sprite {
            sprite: SpriteId::Target,
            transform: Transform::scale_translate(self.config.scale, self.position),
        });
        self.health_bar.draw(surface);
    }
}
