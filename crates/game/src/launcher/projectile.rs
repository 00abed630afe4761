use std::collections::VecDeque;
use std::f64::consts::{FRAC_PI_4, PI};

use glam::DVec2;

use crate::config::TrailConfig;
use crate::render::{DrawCommand, SpriteId, Surface, Transform};

/// One shot in flight. Horizontal velocity is constant; only the vertical
/// component feels gravity.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub position: DVec2,
    pub velocity_y: f64,
    /// Launch angle above the horizontal, in radians.
    pub angle: f64,
    pub speed: f64,
    pub elapsed: f64,
    trail: VecDeque<DVec2>,
    trail_config: TrailConfig,
}

impl Projectile {
    pub const VISUAL_ROTATION: f64 = FRAC_PI_4 + PI;

    pub fn new(
        position: DVec2,
        velocity_y: f64,
        angle: f64,
        speed: f64,
        trail_config: TrailConfig,
    ) -> Self {
        Self {
            position,
            velocity_y,
            angle,
            speed,
            elapsed: 0.0,
            trail: VecDeque::with_capacity(trail_config.capacity),
            trail_config,
        }
    }

    /// Semi-implicit Euler: the position update uses the velocity after this
    /// step's gravity has been applied.
    pub fn integrate(&mut self, gravity: f64, dt: f64) {
        self.velocity_y += gravity * dt;
        self.position.x += self.speed * self.angle.cos() * dt;
        self.position.y += self.velocity_y * dt;
    }

    pub fn sample_trail(&mut self, dt: f64) {
        if self.elapsed > self.trail_config.sample_period {
            self.push_trail(self.position);
            self.elapsed = 0.0;
        } else {
            self.elapsed += dt;
        }
    }

    /// One tick of motion followed by trail bookkeeping.
    pub fn advance(&mut self, gravity: f64, dt: f64) {
        self.integrate(gravity, dt);
        self.sample_trail(dt);
    }

    pub fn push_trail(&mut self, sample: DVec2) {
        if self.trail_config.capacity == 0 {
            return;
        }
        if self.trail.len() >= self.trail_config.capacity {
            self.trail.pop_front();
        }
        self.trail.push_back(sample);
    }

    pub fn trail(&self) -> impl ExactSizeIterator<Item = &DVec2> {
        self.trail.iter()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_below(&self, ground_y: f64) -> bool {
        self.position.y > ground_y
    }

    pub fn transform(&self) -> Transform {
        Transform::rotate_translate(Self::VISUAL_ROTATION, self.position)
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.draw(DrawCommand::Sprite {
            sprite: SpriteId::Shot,
            transform: self.transform(),
        });
        for sample in &self.trail {
            surface.draw(DrawCommand::Sprite {
                sprite: SpriteId::PathMarker,
                transform: Transform::translate(*sample),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;

    fn flat_shot(speed: f64) -> Projectile {
        Projectile::new(DVec2::new(0.0, 500.0), 0.0, 0.0, speed, TrailConfig::default())
    }

    #[test]
    fn horizontal_shot_uses_post_gravity_velocity() {
        for dt in [1.0 / 60.0, 0.1, 0.5, 2.0] {
            let mut shot = flat_shot(150.0);
            shot.integrate(50.0, dt);

            assert!((shot.position.x - 150.0 * dt).abs() < 1e-9);
            assert!((shot.velocity_y - 50.0 * dt).abs() < 1e-9);
            assert!((shot.position.y - (500.0 + 50.0 * dt * dt)).abs() < 1e-9);
        }
    }

    #[test]
    fn trail_is_sampled_after_period_elapses() {
        let mut shot = flat_shot(100.0);
        let dt = 0.2;

        shot.advance(50.0, dt);
        shot.advance(50.0, dt);
        shot.advance(50.0, dt);
        assert_eq!(shot.trail_len(), 0);

        // elapsed is now 0.6 > 0.5
        shot.advance(50.0, dt);
        assert_eq!(shot.trail_len(), 1);
        assert_eq!(shot.elapsed, 0.0);
        assert_eq!(*shot.trail().next().unwrap(), shot.position);
    }

    #[test]
    fn trail_never_exceeds_capacity() {
        let mut shot = flat_shot(100.0);
        for i in 0..25 {
            shot.push_trail(DVec2::new(i as f64, 0.0));
            assert!(shot.trail_len() <= 10);
        }

        let xs: Vec<f64> = shot.trail().map(|p| p.x).collect();
        assert_eq!(xs, (15..25).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn trail_bound_holds_over_long_flights() {
        let mut shot = flat_shot(10.0);
        for _ in 0..10_000 {
            shot.advance(0.0, 0.3);
            assert!(shot.trail_len() <= 10);
        }
        assert_eq!(shot.trail_len(), 10);
    }

    #[test]
    fn draw_emits_shot_then_markers() {
        let mut shot = flat_shot(100.0);
        shot.push_trail(DVec2::new(1.0, 2.0));
        shot.push_trail(DVec2::new(3.0, 4.0));

        let mut list = DrawList::new();
        shot.draw(&mut list);

        assert_eq!(list.len(), 3);
        let body = list.sprites(SpriteId::Shot).next().unwrap();
        assert_eq!(body.rotation, Projectile::VISUAL_ROTATION);
        assert_eq!(body.translation, shot.position);

        let markers: Vec<_> = list.sprites(SpriteId::PathMarker).collect();
        assert_eq!(markers[0].translation, DVec2::new(1.0, 2.0));
        assert_eq!(markers[1].rotation, 0.0);
    }
}
