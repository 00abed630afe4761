mod projectile;

pub use projectile::Projectile;

use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec2;

use crate::config::{GameConfig, LauncherConfig, TrailConfig};
use crate::error::TickError;
use crate::event::GameEvent;
use crate::input::LauncherAction;
use crate::registry::{Entity, Shared};
use crate::render::{DrawCommand, SpriteId, Surface, Transform};
use crate::simulation::TickContext;
use crate::target::Target;

/// The player's cannon. Owns every projectile it has fired that is still in
/// the air.
pub struct Launcher {
    config: LauncherConfig,
    angle: f64,
    speed: f64,
    gravity: f64,
    ground_y: f64,
    pivot: DVec2,
    trail: TrailConfig,
    projectiles: Vec<Projectile>,
    target: Option<Shared<Target>>,
}

impl Launcher {
    pub const NAME: &'static str = "launcher";

    pub fn new(config: &GameConfig) -> Self {
        Self {
            angle: config.launcher.angle,
            speed: config.launcher.speed,
            gravity: config.gravity,
            ground_y: config.playfield.ground_y(),
            pivot: config.launcher_pivot(),
            trail: config.trail,
            config: config.launcher.clone(),
            projectiles: Vec::new(),
            target: None,
        }
    }

    pub fn with_target(mut self, target: Shared<Target>) -> Self {
        self.target = Some(target);
        self
    }

    pub fn apply(&mut self, action: LauncherAction) {
        match action {
            LauncherAction::AimUp => self.angle -= self.config.aim_step,
            LauncherAction::AimDown => self.angle += self.config.aim_step,
            LauncherAction::Slower => self.speed -= self.config.speed_step,
            LauncherAction::Faster => self.speed += self.config.speed_step,
            LauncherAction::Fire => self.fire(),
        }
    }

    /// Spawns a projectile at the muzzle. The barrel points along
    /// `π/2 - angle` from the horizontal.
    pub fn fire(&mut self) {
        let launch_angle = FRAC_PI_2 - self.angle;
        let (sin, cos) = launch_angle.sin_cos();
        let length = self.config.barrel_length;

        let position = DVec2::new(length * cos, -length * sin + self.ground_y);
        let velocity_y = -sin * self.speed;

        log::debug!(
            "Fired at angle {:.3} rad, speed {:.2}",
            self.angle,
            self.speed
        );
        self.launch(Projectile::new(
            position,
            velocity_y,
            launch_angle,
            self.speed,
            self.trail,
        ));
    }

    pub fn launch(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    /// Moves every projectile one step and keeps only those still in flight.
    pub fn advance(&mut self, ctx: &mut TickContext) -> Result<(), TickError> {
        let mut target = match &self.target {
            Some(target) => Some(target.try_borrow_mut().map_err(|_| TickError::EntityBusy {
                name: Target::NAME.to_string(),
            })?),
            None => None,
        };

        let in_flight = std::mem::take(&mut self.projectiles);
        for mut shot in in_flight {
            shot.advance(self.gravity, ctx.dt);

            if let Some(target) = target.as_deref_mut() {
                if target.in_hitbox(shot.position) {
                    strike(target, ctx);
                    continue;
                }
            }

            if shot.is_below(self.ground_y) {
                ctx.emit(GameEvent::ShotGrounded {
                    x: shot.position.x,
                });
                continue;
            }

            self.projectiles.push(shot);
        }
        Ok(())
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn barrel_transform(&self) -> Transform {
        Transform::rotate_translate(self.angle + PI, self.pivot)
    }
}

fn strike(target: &mut Target, ctx: &mut TickContext) {
    let damage = target.take_damage(target.damage_per_hit());
    if damage == 0 {
        return;
    }

    let remaining = target.hitpoints().current;
    ctx.emit(GameEvent::TargetHit { damage, remaining });
    if remaining == 0 {
        log::info!("Target is dead!");
        ctx.emit(GameEvent::TargetDestroyed);
    } else {
        log::info!("{} dmg to target! Health remaining: {}", damage, remaining);
    }
}

impl Entity for Launcher {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn update(&mut self, ctx: &mut TickContext) -> Result<(), TickError> {
        if let Some(action) = ctx.input.action() {
            self.apply(action);
            if action == LauncherAction::Fire {
                ctx.emit(GameEvent::ShotFired {
                    angle: self.angle,
                    speed: self.speed,
                });
            }
        }
        self.advance(ctx)
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw(DrawCommand::Sprite {
            sprite: SpriteId::Barrel,
            transform: self.barrel_transform(),
        });
        for shot in &self.projectiles {
            shot.draw(surface);
        }
    }
}
