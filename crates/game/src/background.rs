use glam::DVec2;

use crate::config::Playfield;
use crate::error::TickError;
use crate::registry::Entity;
use crate::render::{Color, DrawCommand, Surface};
use crate::simulation::TickContext;

pub struct Background {
    playfield: Playfield,
}

impl Background {
    pub const NAME: &'static str = "background";

    pub fn new(playfield: Playfield) -> Self {
        Self { playfield }
    }
}

impl Entity for Background {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn update(&mut self, _ctx: &mut TickContext) -> Result<(), TickError> {
        Ok(())
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let Playfield { width, height } = self.playfield;
        let ground_y = self.playfield.ground_y();

        surface.draw(DrawCommand::Rect {
            origin: DVec2::ZERO,
            size: DVec2::new(width, height),
            color: Color::SKY,
        });
        surface.draw(DrawCommand::Rect {
            origin: DVec2::new(0.0, ground_y),
            size: DVec2::new(width, height - ground_y),
            color: Color::GROUND,
        });
    }
}
