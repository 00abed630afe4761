use cannonbattle::{DrawCommand, DrawList, SimulationLoop, SpriteId, Transform};
use glam::DVec2;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Context, Line as Segment, Rectangle};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::assets::SpriteAtlas;

use super::TuiState;

pub fn render(
    frame: &mut Frame,
    state: &TuiState,
    sim: &SimulationLoop,
    draw_list: &DrawList,
    atlas: &SpriteAtlas,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(7),
        ])
        .split(frame.area());

    render_playfield(frame, chunks[0], sim, draw_list, atlas);
    render_hud(frame, chunks[1], sim);
    render_log(frame, chunks[2], state);
}

fn render_playfield(
    frame: &mut Frame,
    area: Rect,
    sim: &SimulationLoop,
    draw_list: &DrawList,
    atlas: &SpriteAtlas,
) {
    let playfield = sim.game().config().playfield;
    let height = playfield.height;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(" Cannonbattle ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .marker(Marker::Braille)
        .background_color(rgb(cannonbattle::Color::SKY))
        .x_bounds([0.0, playfield.width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for command in draw_list.commands() {
                match command {
                    DrawCommand::Sprite { sprite, transform } => {
                        draw_sprite(ctx, atlas, *sprite, transform, height);
                    }
                    DrawCommand::Rect {
                        origin,
                        size,
                        color,
                    } => {
                        ctx.draw(&Rectangle {
                            x: origin.x,
                            y: height - origin.y - size.y,
                            width: size.x,
                            height: size.y,
                            color: rgb(*color),
                        });
                    }
                }
            }
        });

    frame.render_widget(canvas, area);
}

/// Outlines the sprite's bitmap bounds after transformation. The canvas Y
/// axis points up, the playfield's points down.
fn draw_sprite(
    ctx: &mut Context,
    atlas: &SpriteAtlas,
    sprite: SpriteId,
    transform: &Transform,
    height: f64,
) {
    let size = atlas.size(sprite);
    let (w, h) = (f64::from(size.width), f64::from(size.height));
    let corners = [
        DVec2::new(0.0, 0.0),
        DVec2::new(w, 0.0),
        DVec2::new(w, h),
        DVec2::new(0.0, h),
    ]
    .map(|corner| {
        let p = transform.apply(corner);
        DVec2::new(p.x, height - p.y)
    });

    let color = atlas.color(sprite);
    for i in 0..corners.len() {
        let a = corners[i];
        let b = corners[(i + 1) % corners.len()];
        ctx.draw(&Segment {
            x1: a.x,
            y1: a.y,
            x2: b.x,
            y2: b.y,
            color,
        });
    }
}

fn render_hud(frame: &mut Frame, area: Rect, sim: &SimulationLoop) {
    let launcher = sim.game().launcher().borrow();
    let target = sim.game().target().borrow();
    let hp = target.hitpoints();

    let hp_color = if hp.is_dead() {
        Color::Red
    } else {
        Color::Green
    };

    let line = Line::from(vec![
        Span::styled("Speed: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.2}", launcher.speed()),
            Style::default().fg(Color::White),
        ),
        Span::styled("  Angle: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.1}°", launcher.angle().to_degrees()),
            Style::default().fg(Color::White),
        ),
        Span::styled("  Shots: ", Style::default().fg(Color::Gray)),
        Span::styled(
            launcher.projectiles().len().to_string(),
            Style::default().fg(Color::White),
        ),
        Span::styled("  Target: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}/{}", hp.current, hp.max),
            Style::default().fg(hp_color),
        ),
        Span::styled(
            "   ←/→ speed  ↑/↓ aim  Enter fire  q quit",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
    ]);

    let block = Block::default()
        .title(" Launcher ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_log(frame: &mut Frame, area: Rect, state: &TuiState) {
    let visible = area.height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = state
        .log_lines()
        .rev()
        .take(visible)
        .map(|entry| Line::from(entry.as_str()))
        .collect();
    lines.reverse();

    let block = Block::default()
        .title(format!(" Events (frame {}) ", state.frames()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn rgb(color: cannonbattle::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
