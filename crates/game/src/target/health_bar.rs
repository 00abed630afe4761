use glam::DVec2;

use crate::render::{Color, DrawCommand, Surface};

/// Proportional health bar anchored to its owner's position.
#[derive(Debug, Clone)]
pub struct HealthBar {
    total: u32,
    current: u32,
    width: u32,
    height: u32,
    fill_width: u32,
    position: DVec2,
}

impl HealthBar {
    pub fn new(total: u32, width: u32, height: u32) -> Self {
        let mut bar = Self {
            total,
            current: total,
            width,
            height,
            fill_width: 0,
            position: DVec2::ZERO,
        };
        bar.refresh();
        bar
    }

    pub fn subtract(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
        self.refresh();
    }

    pub fn add(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.total);
        self.refresh();
    }

    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn fill_width(&self) -> u32 {
        self.fill_width
    }

    fn refresh(&mut self) {
        self.fill_width = if self.total == 0 {
            0
        } else {
            (u64::from(self.width) * u64::from(self.current) / u64::from(self.total)) as u32
        };
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let height = f64::from(self.height);
        surface.draw(DrawCommand::Rect {
            origin: self.position,
            size: DVec2::new(f64::from(self.width), height),
            color: Color::HEALTH_LOST,
        });
        if self.fill_width != 0 {
            surface.draw(DrawCommand::Rect {
                origin: self.position,
                size: DVec2::new(f64::from(self.fill_width), height),
                color: Color::HEALTH,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;

    #[test]
    fn subtract_clamps_at_zero() {
        let mut bar = HealthBar::new(100, 50, 5);
        bar.subtract(30);
        assert_eq!(bar.current(), 70);
        bar.subtract(500);
        assert_eq!(bar.current(), 0);
        assert_eq!(bar.fill_width(), 0);
    }

    #[test]
    fn add_clamps_at_total() {
        let mut bar = HealthBar::new(100, 50, 5);
        bar.subtract(60);
        bar.add(20);
        assert_eq!(bar.current(), 60);
        bar.add(u32::MAX);
        assert_eq!(bar.current(), 100);
        assert_eq!(bar.fill_width(), 50);
    }

    #[test]
    fn fill_width_is_floored_proportion() {
        let mut bar = HealthBar::new(1000, 140, 5);
        for damage in [1, 7, 33, 100, 250, 9] {
            bar.subtract(damage);
            let expected = (140.0 * f64::from(bar.current()) / 1000.0).floor() as u32;
            assert_eq!(bar.fill_width(), expected);
        }

        let mut bar = HealthBar::new(3, 10, 5);
        bar.subtract(1);
        // 10 * 2 / 3 = 6.67
        assert_eq!(bar.fill_width(), 6);
    }

    #[test]
    fn empty_bar_draws_background_only() {
        let mut bar = HealthBar::new(10, 20, 5);
        bar.set_position(DVec2::new(3.0, 4.0));

        let mut list = DrawList::new();
        bar.draw(&mut list);
        assert_eq!(list.len(), 2);

        bar.subtract(10);
        list.clear();
        bar.draw(&mut list);
        assert_eq!(list.len(), 1);
        assert_eq!(
            list.commands()[0],
            DrawCommand::Rect {
                origin: DVec2::new(3.0, 4.0),
                size: DVec2::new(20.0, 5.0),
                color: Color::HEALTH_LOST,
            }
        );
    }
}
