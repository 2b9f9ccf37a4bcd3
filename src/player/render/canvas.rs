//! Corridor canvas rendering for the native player.
//!
//! Draws a [`Scene`] with ratatui's braille canvas. Canvas bounds equal the
//! surface size in dots, so one canvas unit is one dot. Surface y grows
//! downwards while the canvas y grows upwards; every point is flipped on
//! the way in.

use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    text::{Line as TextLine, Span},
    widgets::canvas::{Canvas, Line, Painter, Shape},
    Frame,
};

use super::scene::Scene;
use crate::theme::Theme;

/// Filled disc. ratatui's `Circle` only draws the outline.
#[derive(Debug, Clone, Copy)]
pub struct Disc {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
    /// Canvas extent; only the part of the disc inside it is visited
    pub bounds: (f64, f64),
}

impl Disc {
    /// First and last offset along one axis that land inside `[0, extent]`.
    fn span(center: f64, r: f64, extent: f64) -> (f64, f64) {
        let start = if center - r < 0.0 {
            -r + (r - center).ceil()
        } else {
            -r
        };
        (start, r.min(extent - center))
    }
}

impl Shape for Disc {
    fn draw(&self, painter: &mut Painter) {
        let r = self.radius.max(0.5);
        let r2 = r * r;
        let (dy_start, dy_end) = Self::span(self.y, r, self.bounds.1);
        let (dx_start, dx_end) = Self::span(self.x, r, self.bounds.0);

        let mut dy = dy_start;
        while dy <= dy_end {
            let mut dx = dx_start;
            while dx <= dx_end {
                if dx * dx + dy * dy <= r2 {
                    if let Some((px, py)) = painter.get_point(self.x + dx, self.y + dy) {
                        painter.paint(px, py, self.color);
                    }
                }
                dx += 1.0;
            }
            dy += 1.0;
        }
    }
}

/// Render the scene into `area`.
pub fn render_scene(frame: &mut Frame, area: Rect, scene: &Scene, theme: &Theme) {
    let width = f64::from(area.width) * 2.0;
    let height = f64::from(area.height) * 4.0;
    let flip = |y: f64| height - y;

    let label = format!("t = {:.2} s", scene.time);
    let outline = scene.outline;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(theme.background)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            let corners = [
                (outline.left, outline.top, outline.right, outline.top),
                (outline.right, outline.top, outline.right, outline.bottom),
                (outline.right, outline.bottom, outline.left, outline.bottom),
                (outline.left, outline.bottom, outline.left, outline.top),
            ];
            for (x1, y1, x2, y2) in corners {
                ctx.draw(&Line::new(x1, flip(y1), x2, flip(y2), theme.wall));
            }

            for agent in &scene.agents {
                ctx.draw(&Disc {
                    x: agent.center.0,
                    y: flip(agent.center.1),
                    radius: agent.radius,
                    color: agent.color,
                    bounds: (width, height),
                });
                if let Some((radius, color)) = agent.core {
                    ctx.draw(&Disc {
                        x: agent.center.0,
                        y: flip(agent.center.1),
                        radius,
                        color,
                        bounds: (width, height),
                    });
                }
            }

            // Arrows go on their own layer so they stay visible over discs
            ctx.layer();
            for arrow in scene.agents.iter().filter_map(|a| a.arrow.as_ref()) {
                for (from, to) in [
                    (arrow.from, arrow.to),
                    (arrow.to, arrow.head_left),
                    (arrow.to, arrow.head_right),
                ] {
                    ctx.draw(&Line::new(from.0, flip(from.1), to.0, flip(to.1), theme.arrow));
                }
            }

            ctx.print(
                0.0,
                height,
                TextLine::from(Span::styled(label.clone(), theme.text_style().fg(theme.label))),
            );
        });

    frame.render_widget(canvas, area);
}
