//! Font face wrapper: scaled metrics and flattened glyph outlines

use sdfont_atlas::metrics::GlyphBounds;
use sdfont_atlas::source::{GlyphSource, LineMetrics, SourceGlyph};
use ttf_parser::{name_id, Face, GlyphId};

use crate::flatten::OutlineFlattener;
use crate::{FontError, Result};

/// A parsed font face scaled to a nominal pixel size.
///
/// Outline coordinates and metrics it hands out are baseline-relative
/// design pixels, y increasing upward.
pub struct FontFace<'a> {
    face: Face<'a>,
    scale: f32,
    flatness: f32,
}

impl<'a> FontFace<'a> {
    /// Parse a face from raw font data and derive the units-to-pixels scale
    pub fn parse(data: &'a [u8], index: u32, size_px: u32, flatness: f32) -> Result<Self> {
        let face = Face::parse(data, index)?;
        let units_per_em = face.units_per_em();
        if units_per_em == 0 {
            return Err(FontError::BadUnitsPerEm);
        }
        Ok(Self {
            face,
            scale: size_px as f32 / f32::from(units_per_em),
            flatness,
        })
    }

    /// Glyph id for a character code; undefined codes map to .notdef (id 0),
    /// which is what makes them collapse to a single atlas entry
    fn glyph_id(&self, code: u32) -> GlyphId {
        char::from_u32(code)
            .and_then(|c| self.face.glyph_index(c))
            .unwrap_or(GlyphId(0))
    }

    fn px_ceil(&self, units: i16) -> i32 {
        (f32::from(units) * self.scale).ceil() as i32
    }
}

impl GlyphSource for FontFace<'_> {
    fn glyph_key(&self, code: u32) -> u16 {
        self.glyph_id(code).0
    }

    fn glyph(&self, code: u32) -> SourceGlyph {
        let id = self.glyph_id(code);
        let advance = f32::from(self.face.glyph_hor_advance(id).unwrap_or(0)) * self.scale;
        let mut flattener = OutlineFlattener::new(self.scale, self.flatness);
        let bounds = self
            .face
            .outline_glyph(id, &mut flattener)
            .map(|rect| GlyphBounds {
                x: f32::from(rect.x_min) * self.scale,
                y: f32::from(rect.y_min) * self.scale,
                width: (f32::from(rect.x_max) - f32::from(rect.x_min)) * self.scale,
                height: (f32::from(rect.y_max) - f32::from(rect.y_min)) * self.scale,
            })
            .unwrap_or_default();
        SourceGlyph {
            advance,
            bounds,
            events: flattener.finish(),
        }
    }

    fn line_metrics(&self) -> LineMetrics {
        let bbox = self.face.global_bounding_box();
        let ascent = self.px_ceil(self.face.ascender());
        let descent = self.px_ceil(-self.face.descender());
        let leading = self.px_ceil(self.face.line_gap());
        LineMetrics {
            max_ascent: self.px_ceil(bbox.y_max),
            max_descent: self.px_ceil(-bbox.y_min),
            ascent,
            descent,
            leading,
            line_height: ascent + descent + leading,
        }
    }

    fn display_name(&self) -> String {
        for id in [name_id::FAMILY, name_id::FULL_NAME] {
            let name = self
                .face
                .names()
                .into_iter()
                .filter(|n| n.name_id == id && n.is_unicode())
                .find_map(|n| n.to_string());
            if let Some(name) = name {
                return name;
            }
        }
        "unknown".to_string()
    }
}
