//! Bézier flattening: reduces curve outline events to line segments
//!
//! The atlas pipeline only accepts move/line/close events, so curves are
//! linearized here, at extraction time. Flatness is measured as the maximum
//! distance of any control point from the chord between the curve's
//! endpoints; a curve is subdivided at its midpoint until that distance
//! drops below the configured tolerance.

use sdfont_atlas::outline::{OutlineEvent, Segment};
use ttf_parser::OutlineBuilder;

/// Recursion bound for degenerate control geometry
const MAX_DEPTH: u32 = 16;

/// ttf-parser outline sink that scales font units to pixel space and
/// flattens quadratic and cubic curves to line events
pub struct OutlineFlattener {
    events: Vec<OutlineEvent>,
    scale: f32,
    flatness: f32,
    last_x: f32,
    last_y: f32,
}

impl OutlineFlattener {
    pub fn new(scale: f32, flatness: f32) -> Self {
        Self {
            events: Vec::new(),
            scale,
            flatness,
            last_x: 0.0,
            last_y: 0.0,
        }
    }

    /// The flattened event stream, consuming the sink
    pub fn finish(self) -> Vec<OutlineEvent> {
        self.events
    }

    fn push_line(&mut self, x: f32, y: f32) {
        self.events.push(OutlineEvent::LineTo { x, y });
        self.last_x = x;
        self.last_y = y;
    }

    fn flatten_quad(&mut self, x0: f32, y0: f32, cx: f32, cy: f32, x1: f32, y1: f32, depth: u32) {
        let chord = Segment::new(x0, y0, x1, y1);
        if depth >= MAX_DEPTH || chord.distance_sq(cx, cy) <= self.flatness * self.flatness {
            self.push_line(x1, y1);
            return;
        }
        // de Casteljau midpoint split; the split point lies on the curve
        let ax = (x0 + cx) * 0.5;
        let ay = (y0 + cy) * 0.5;
        let bx = (cx + x1) * 0.5;
        let by = (cy + y1) * 0.5;
        let mx = (ax + bx) * 0.5;
        let my = (ay + by) * 0.5;
        self.flatten_quad(x0, y0, ax, ay, mx, my, depth + 1);
        self.flatten_quad(mx, my, bx, by, x1, y1, depth + 1);
    }

    #[allow(clippy::too_many_arguments)]
    fn flatten_cubic(
        &mut self,
        x0: f32,
        y0: f32,
        c1x: f32,
        c1y: f32,
        c2x: f32,
        c2y: f32,
        x1: f32,
        y1: f32,
        depth: u32,
    ) {
        let chord = Segment::new(x0, y0, x1, y1);
        let deviation_sq = chord.distance_sq(c1x, c1y).max(chord.distance_sq(c2x, c2y));
        if depth >= MAX_DEPTH || deviation_sq <= self.flatness * self.flatness {
            self.push_line(x1, y1);
            return;
        }
        let ax = (x0 + c1x) * 0.5;
        let ay = (y0 + c1y) * 0.5;
        let cx = (c1x + c2x) * 0.5;
        let cy = (c1y + c2y) * 0.5;
        let bx = (c2x + x1) * 0.5;
        let by = (c2y + y1) * 0.5;
        let dx = (ax + cx) * 0.5;
        let dy = (ay + cy) * 0.5;
        let ex = (cx + bx) * 0.5;
        let ey = (cy + by) * 0.5;
        let mx = (dx + ex) * 0.5;
        let my = (dy + ey) * 0.5;
        self.flatten_cubic(x0, y0, ax, ay, dx, dy, mx, my, depth + 1);
        self.flatten_cubic(mx, my, ex, ey, bx, by, x1, y1, depth + 1);
    }
}

impl OutlineBuilder for OutlineFlattener {
    fn move_to(&mut self, x: f32, y: f32) {
        let x = x * self.scale;
        let y = y * self.scale;
        self.events.push(OutlineEvent::MoveTo { x, y });
        self.last_x = x;
        self.last_y = y;
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push_line(x * self.scale, y * self.scale);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x0, y0) = (self.last_x, self.last_y);
        self.flatten_quad(x0, y0, x1 * self.scale, y1 * self.scale, x * self.scale, y * self.scale, 0);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x0, y0) = (self.last_x, self.last_y);
        self.flatten_cubic(
            x0,
            y0,
            x1 * self.scale,
            y1 * self.scale,
            x2 * self.scale,
            y2 * self.scale,
            x * self.scale,
            y * self.scale,
            0,
        );
    }

    fn close(&mut self) {
        self.events.push(OutlineEvent::Close);
    }
}
