//! Draw commands handed to the external renderer.
//!
//! The core never touches pixels. Each entity describes what it wants drawn as a
//! list of [`DrawCommand`]s referencing bitmaps the renderer owns, and the
//! renderer is free to rasterize them however it likes.

use glam::{DAffine2, DVec2};

/// Pre-rendered bitmaps owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Barrel,
    Shot,
    PathMarker,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const SKY: Self = Self::rgb(0, 100, 100);
    pub const GROUND: Self = Self::rgb(1, 50, 32);
    pub const HEALTH: Self = Self::rgb(0, 255, 0);
    pub const HEALTH_LOST: Self = Self::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Scale, then rotation, then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub rotation: f64,
    pub translation: DVec2,
    pub scale: Option<f64>,
}

impl Transform {
    pub fn translate(translation: DVec2) -> Self {
        Self {
            rotation: 0.0,
            translation,
            scale: None,
        }
    }

    pub fn rotate_translate(rotation: f64, translation: DVec2) -> Self {
        Self {
            rotation,
            translation,
            scale: None,
        }
    }

    pub fn scale_translate(scale: f64, translation: DVec2) -> Self {
        Self {
            rotation: 0.0,
            translation,
            scale: Some(scale),
        }
    }

    pub fn matrix(&self) -> DAffine2 {
        let scale = self.scale.unwrap_or(1.0);
        DAffine2::from_scale_angle_translation(
            DVec2::splat(scale),
            self.rotation,
            self.translation,
        )
    }

    /// Maps a point in sprite-local pixels into playfield coordinates.
    pub fn apply(&self, local: DVec2) -> DVec2 {
        self.matrix().transform_point2(local)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        sprite: SpriteId,
        transform: Transform,
    },
    Rect {
        origin: DVec2,
        size: DVec2,
        color: Color,
    },
}

pub trait Surface {
    fn draw(&mut self, command: DrawCommand);
}

/// Records draw commands in submission order.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn sprites(&self, id: SpriteId) -> impl Iterator<Item = &Transform> {
        self.commands.iter().filter_map(move |command| match command {
            DrawCommand::Sprite { sprite, transform } if *sprite == id => Some(transform),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for DrawList {
    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn transform_scales_before_translating() {
        let transform = Transform::scale_translate(0.5, DVec2::new(100.0, 50.0));
        let p = transform.apply(DVec2::new(10.0, 20.0));
        assert!((p.x - 105.0).abs() < 1e-9);
        assert!((p.y - 60.0).abs() < 1e-9);
    }

    #[test]
    fn transform_rotates_before_translating() {
        let transform = Transform::rotate_translate(FRAC_PI_2, DVec2::new(10.0, 0.0));
        let p = transform.apply(DVec2::new(1.0, 0.0));
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn draw_list_filters_sprites() {
        let mut list = DrawList::new();
        list.draw(DrawCommand::Sprite {
            sprite: SpriteId::Shot,
            transform: Transform::translate(DVec2::ZERO),
        });
        list.draw(DrawCommand::Rect {
            origin: DVec2::ZERO,
            size: DVec2::ONE,
            color: Color::SKY,
        });
        list.draw(DrawCommand::Sprite {
            sprite: SpriteId::PathMarker,
            transform: Transform::translate(DVec2::ONE),
        });

        assert_eq!(list.len(), 3);
        assert_eq!(list.sprites(SpriteId::Shot).count(), 1);
        assert_eq!(list.sprites(SpriteId::Target).count(), 0);
    }
}
