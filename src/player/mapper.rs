//! Physical-to-surface coordinate mapping.
//!
//! One scale factor is used for both axes so the corridor keeps its true
//! aspect ratio. The corridor is centered on the surface and the y axis is
//! flipped (simulation y points up, surface y points down).

use crate::records::Record;

/// Physical corridor geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Extent along x (direction of travel)
    pub length: f64,
    /// Extent along y (across the lane)
    pub width: f64,
    /// Largest agent radius, the minimum margin to the lane walls
    pub r_max: f64,
    /// Keep drawn circles between the lane walls
    pub lane_clamp: bool,
}

/// Render surface size in pixels (canvas dots for the terminal backend).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    /// Blank border kept on every side
    pub padding: f64,
}

impl Surface {
    /// Braille canvas surface for a terminal area: 2x4 dots per cell.
    pub fn from_cells(cols: u16, rows: u16, padding: u16) -> Self {
        Self {
            width: f64::from(cols) * 2.0,
            height: f64::from(rows) * 4.0,
            padding: f64::from(padding),
        }
    }
}

/// Axis-aligned rectangle in surface pixels, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PixelRect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// Where and how large to draw one agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    domain: Domain,
    surface: Surface,
    scale: f64,
    x_offset: f64,
    y_offset: f64,
}

impl CoordinateMapper {
    /// Fit the domain onto the surface.
    pub fn new(domain: Domain, surface: Surface) -> Self {
        let available_w = (surface.width - 2.0 * surface.padding).max(1.0);
        let available_h = (surface.height - 2.0 * surface.padding).max(1.0);
        let scale = (available_w / domain.length).min(available_h / domain.width);

        Self {
            domain,
            surface,
            scale,
            x_offset: (surface.width - domain.length * scale) / 2.0,
            y_offset: (surface.height - domain.width * scale) / 2.0,
        }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Pixels per physical unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map a physical point to surface pixels.
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.x_offset + x * self.scale,
            self.y_offset + (self.domain.width - y) * self.scale,
        )
    }

    /// Map a physical length to pixels, at least one pixel.
    pub fn length_px(&self, length: f64) -> f64 {
        (length * self.scale).max(1.0)
    }

    /// Radius in pixels for drawing, never larger than the surface diagonal.
    pub fn radius_px(&self, radius: f64) -> f64 {
        let diagonal = self.surface.width.hypot(self.surface.height);
        self.length_px(radius).min(diagonal.max(1.0))
    }

    /// Corridor outline on the surface.
    pub fn outline(&self) -> PixelRect {
        let (left, bottom) = self.to_pixel(0.0, 0.0);
        let (right, top) = self.to_pixel(self.domain.length, self.domain.width);
        PixelRect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Whether an x coordinate lies inside the modeled corridor.
    pub fn in_domain(&self, x: f64) -> bool {
        (0.0..=self.domain.length).contains(&x)
    }

    /// Keep a circle of `radius` between the lane walls.
    ///
    /// An agent wider than the lane is centered in it.
    pub fn clamp_lateral(&self, y: f64, radius: f64) -> f64 {
        let width = self.domain.width;
        if 2.0 * radius >= width {
            return width / 2.0;
        }
        y.clamp(radius, width - radius)
    }

    /// Placement of an agent, or `None` when it is outside `[0, L]`.
    pub fn place(&self, record: &Record) -> Option<Placement> {
        if !self.in_domain(record.x) {
            return None;
        }
        let y = if self.domain.lane_clamp {
            self.clamp_lateral(record.y, record.radius.max(0.0))
        } else {
            record.y
        };
        let (x, y) = self.to_pixel(record.x, y);
        Some(Placement {
            x,
            y,
            radius: self.radius_px(record.radius),
        })
    }
}
