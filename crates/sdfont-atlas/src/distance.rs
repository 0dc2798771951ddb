//! Per-pixel signed distance computation and encoding

use crate::metrics::PixelBox;
use crate::outline::Outline;

/// Signed distance from a sample point to the nearest outline boundary,
/// capped at `spread`. Positive inside the outline, negative outside.
///
/// The minimum starts at `spread²` so segments farther than the spread can
/// never change the result.
pub fn signed_distance(x: f32, y: f32, spread: f32, outline: &Outline) -> f32 {
    let mut min_sq = spread * spread;
    for segment in outline.segments() {
        min_sq = min_sq.min(segment.distance_sq(x, y));
    }
    let distance = min_sq.sqrt();
    if outline.contains(x, y) {
        distance
    } else {
        -distance
    }
}

/// Encode a signed distance into the normalized [0,1] range
pub fn encode(distance: f32, spread: f32) -> f32 {
    (distance + spread) / (spread + spread)
}

/// Inverse of [`encode`]
pub fn decode(value: f32, spread: f32) -> f32 {
    value * (spread + spread) - spread
}

/// Rasterize a glyph's padded pixel box into encoded distance bytes.
///
/// One byte per pixel, row-major, first row at the box's top (largest y)
/// edge. Samples at pixel centers (integer coordinate + 0.5 in both axes).
/// O(pixels × segments), no spatial acceleration; glyph boxes are small.
pub fn rasterize(bounds: &PixelBox, spread: f32, outline: &Outline) -> Vec<u8> {
    let width = bounds.width();
    let height = bounds.height();
    let mut values = Vec::with_capacity((width * height).max(0) as usize);
    for row in 0..height {
        let y = bounds.max_y as f32 - row as f32 - 0.5;
        for col in 0..width {
            let x = bounds.min_x as f32 + col as f32 + 0.5;
            let sd = signed_distance(x, y, spread, outline);
            values.push((encode(sd, spread) * 255.0).round() as u8);
        }
    }
    values
}
