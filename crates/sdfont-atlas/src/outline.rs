//! Flattened glyph outlines: line segments and containment

use crate::{AtlasError, Result};

/// A single line segment in font-design pixel space (baseline-relative, y up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Segment {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Squared distance from a point to this segment
    pub fn distance_sq(&self, px: f32, py: f32) -> f32 {
        let dx = self.x1 - self.x0;
        let dy = self.y1 - self.y0;
        let len_sq = dx * dx + dy * dy;
        let (cx, cy) = if len_sq <= f32::EPSILON {
            (self.x0, self.y0)
        } else {
            let t = (((px - self.x0) * dx + (py - self.y0) * dy) / len_sq).clamp(0.0, 1.0);
            (self.x0 + t * dx, self.y0 + t * dy)
        };
        let ex = px - cx;
        let ey = py - cy;
        ex * ex + ey * ey
    }

    /// Twice the signed area of the triangle (start, end, point).
    /// Positive when the point lies left of the directed segment.
    fn cross(&self, px: f32, py: f32) -> f32 {
        (self.x1 - self.x0) * (py - self.y0) - (px - self.x0) * (self.y1 - self.y0)
    }
}

/// Outline event handed over by the provider.
///
/// The provider contract is move/line/close only; `QuadTo` and `CurveTo`
/// exist so an unfulfilled flattening contract is detectable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineEvent {
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    QuadTo { x1: f32, y1: f32, x: f32, y: f32 },
    CurveTo { x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32 },
    Close,
}

/// The closed polygon formed by a glyph's flattened segments.
///
/// Containment uses the nonzero winding rule, so multi-contour glyphs with
/// holes ("O", "B") resolve correctly as long as hole contours wind opposite
/// to outer contours, which font outlines guarantee.
#[derive(Debug, Clone, Default)]
pub struct Outline {
    segments: Vec<Segment>,
}

impl Outline {
    /// Build per-subpath segments from flattened outline events.
    ///
    /// A close event synthesizes the implicit segment back to the subpath
    /// start when the provider did not emit it explicitly. Curve events are
    /// fatal: flattening is the provider's job.
    pub fn from_events(events: &[OutlineEvent]) -> Result<Self> {
        let mut segments = Vec::new();
        let (mut first_x, mut first_y) = (0.0f32, 0.0f32);
        let (mut last_x, mut last_y) = (0.0f32, 0.0f32);
        for event in events {
            match *event {
                OutlineEvent::MoveTo { x, y } => {
                    first_x = x;
                    first_y = y;
                    last_x = x;
                    last_y = y;
                }
                OutlineEvent::LineTo { x, y } => {
                    segments.push(Segment::new(last_x, last_y, x, y));
                    last_x = x;
                    last_y = y;
                }
                OutlineEvent::QuadTo { .. } => {
                    return Err(AtlasError::UnflattenedCurve("quadratic"));
                }
                OutlineEvent::CurveTo { .. } => {
                    return Err(AtlasError::UnflattenedCurve("cubic"));
                }
                OutlineEvent::Close => {
                    if last_x != first_x || last_y != first_y {
                        segments.push(Segment::new(last_x, last_y, first_x, first_y));
                    }
                    last_x = first_x;
                    last_y = first_y;
                }
            }
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Nonzero-winding point-in-polygon test
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let mut winding = 0i32;
        for s in &self.segments {
            if s.y0 <= y {
                if s.y1 > y && s.cross(x, y) > 0.0 {
                    winding += 1;
                }
            } else if s.y1 <= y && s.cross(x, y) < 0.0 {
                winding -= 1;
            }
        }
        winding != 0
    }
}
