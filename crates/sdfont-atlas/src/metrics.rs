//! Glyph-space to atlas-space coordinate mapping
//!
//! Glyph-space boxes are baseline-relative with y increasing upward. Atlas
//! pixel space is y-down from the top-left. Vertical reference lines are
//! measured upward from the bottom of a fixed line box.

use crate::source::LineMetrics;

/// Tight outline bounding box in font-design pixel space (y up, min corner + size)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlyphBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Integer pixel box: a tight bounding box padded on all sides and rounded
/// outward (floor on the min corner, ceil on the max corner)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl PixelBox {
    pub fn from_bounds(bounds: GlyphBounds, pad: i32) -> Self {
        Self {
            min_x: bounds.x.floor() as i32 - pad,
            min_y: bounds.y.floor() as i32 - pad,
            max_x: (bounds.x + bounds.width).ceil() as i32 + pad,
            max_y: (bounds.y + bounds.height).ceil() as i32 + pad,
        }
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }
}

/// Font-wide vertical reference lines measured from the bottom of a line box
/// of height `max_ascent + max_descent`
#[derive(Debug, Clone, Copy)]
pub struct ReferenceLines {
    pub top: i32,
    pub ascent: i32,
    pub baseline: i32,
    pub descent: i32,
}

impl ReferenceLines {
    pub fn from_metrics(metrics: &LineMetrics) -> Self {
        Self {
            top: metrics.max_descent + metrics.max_ascent,
            ascent: metrics.max_descent + metrics.ascent,
            baseline: metrics.max_descent,
            descent: metrics.max_descent - metrics.descent,
        }
    }
}

/// Normalized UV rectangle for a box placed at (x, y) in atlas pixels.
///
/// Returns (u0, v0, u1, v1) with `v0` on the rectangle's larger-pixel-y edge
/// and `v1` on the smaller; renderers rely on this exact mapping.
pub fn uv_rect(x: i32, y: i32, width: i32, height: i32, atlas_width: u32, atlas_height: u32) -> (f32, f32, f32, f32) {
    let tw = atlas_width as f32;
    let th = atlas_height as f32;
    (
        x as f32 / tw,
        (y + height) as f32 / th,
        (x + width) as f32 / tw,
        y as f32 / th,
    )
}
