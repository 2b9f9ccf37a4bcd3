//! Scene assembly: one frame turned into draw-ready glyphs.
//!
//! Building the scene is pure geometry and color lookup, so it can be
//! tested without a terminal.

use ratatui::style::Color;

use crate::player::color::AgentColorPolicy;
use crate::player::mapper::{CoordinateMapper, PixelRect};
use crate::records::{AgentId, Frame, Record};

/// Speeds below this draw no arrow.
const MIN_ARROW_SPEED: f64 = 1e-3;
/// Arrow head stroke length in pixels.
const ARROW_HEAD_PX: f64 = 3.0;

/// Drawing options that do not change during a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStyle {
    pub direction_vectors: bool,
    pub draw_cores: bool,
    /// Arrow pixels per unit speed, as a fraction of the map scale
    pub arrow_scale: f64,
    /// Physical radius of the core disc
    pub core_radius: f64,
}

/// Velocity arrow: shaft plus two head strokes, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub head_left: (f64, f64),
    pub head_right: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgentGlyph {
    pub id: AgentId,
    pub center: (f64, f64),
    pub radius: f64,
    pub color: Color,
    /// Core disc radius and color, when cores are drawn
    pub core: Option<(f64, Color)>,
    pub arrow: Option<Arrow>,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub index: usize,
    pub time: f64,
    pub outline: PixelRect,
    pub agents: Vec<AgentGlyph>,
    /// Agents in the frame but outside the corridor
    pub hidden: usize,
}

impl Scene {
    pub fn total_agents(&self) -> usize {
        self.agents.len() + self.hidden
    }
}

/// Map every agent of a frame to a glyph.
///
/// Every agent gets a color assignment, including the ones outside the
/// corridor that are not drawn, so an agent re-entering later keeps the
/// color of its first sighting.
pub fn build_scene(
    frame: &Frame,
    index: usize,
    mapper: &CoordinateMapper,
    colors: &mut AgentColorPolicy,
    style: &SceneStyle,
) -> Scene {
    let mut agents = Vec::with_capacity(frame.len());
    let mut hidden = 0;

    for record in frame {
        let origin = colors.origin_for_record(record);
        let Some(placement) = mapper.place(record) else {
            hidden += 1;
            continue;
        };

        let palette = colors.palette();
        let core = style.draw_cores.then(|| {
            (
                mapper.length_px(style.core_radius).min(placement.radius),
                palette.core(origin),
            )
        });
        let arrow = if style.direction_vectors {
            velocity_arrow(record, (placement.x, placement.y), mapper.scale() * style.arrow_scale)
        } else {
            None
        };

        agents.push(AgentGlyph {
            id: record.id.clone(),
            center: (placement.x, placement.y),
            radius: placement.radius,
            color: palette.body(origin),
            core,
            arrow,
        });
    }

    Scene {
        index,
        time: frame.time(),
        outline: mapper.outline(),
        agents,
        hidden,
    }
}

/// Arrow of length `|v| * px_per_speed` from the agent center.
///
/// Surface y points down, so the y velocity is negated.
fn velocity_arrow(record: &Record, center: (f64, f64), px_per_speed: f64) -> Option<Arrow> {
    let speed = record.speed();
    if speed < MIN_ARROW_SPEED {
        return None;
    }
    let length = speed * px_per_speed;
    let (dx, dy) = (record.vx / speed, -record.vy / speed);
    let to = (center.0 + dx * length, center.1 + dy * length);

    let angle = dy.atan2(dx);
    let spread = std::f64::consts::FRAC_PI_6;
    let head = |theta: f64| {
        (
            to.0 - ARROW_HEAD_PX * theta.cos(),
            to.1 - ARROW_HEAD_PX * theta.sin(),
        )
    };

    Some(Arrow {
        from: center,
        to,
        head_left: head(angle - spread),
        head_right: head(angle + spread),
    })
}
