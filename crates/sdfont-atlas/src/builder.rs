//! Atlas construction: dedup, packing, rasterization, descriptor assembly
//!
//! One owning builder holds the pixel buffer, packer cursor, dedup map and
//! output lists; a run mutates them strictly sequentially, one character
//! code at a time.

use std::collections::HashMap;

use log::{debug, info};

use crate::descriptor::{CharGlyph, FontDescriptor, Glyph};
use crate::distance;
use crate::metrics::{uv_rect, PixelBox, ReferenceLines};
use crate::outline::Outline;
use crate::packer::ShelfPacker;
use crate::source::{GlyphSource, SourceGlyph};
use crate::{AtlasError, Result};

/// Fill for atlas pixels never touched by a glyph: opaque red, matching the
/// established atlas format bit for bit
const SENTINEL: [u8; 4] = [255, 0, 0, 255];

/// Immutable per-run configuration
#[derive(Debug, Clone)]
pub struct AtlasConfig {
    pub atlas_width: u32,
    pub atlas_height: u32,
    /// Maximum encodable distance in pixels
    pub spread: u32,
    /// Outline-flattening tolerance in pixels
    pub flatness: f32,
    /// Nominal font size in pixels
    pub font_size: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            atlas_width: 512,
            atlas_height: 512,
            spread: 4,
            flatness: 0.1,
            font_size: 32,
        }
    }
}

impl AtlasConfig {
    pub fn validate(&self) -> Result<()> {
        if self.atlas_width == 0 || self.atlas_height == 0 {
            return Err(AtlasError::InvalidConfig("atlas dimensions must be positive"));
        }
        if self.spread == 0 {
            return Err(AtlasError::InvalidConfig("spread must be positive"));
        }
        if !(self.flatness > 0.0) {
            return Err(AtlasError::InvalidConfig("flattening tolerance must be positive"));
        }
        if self.font_size == 0 {
            return Err(AtlasError::InvalidConfig("font size must be positive"));
        }
        Ok(())
    }

    /// Padding applied on all sides of every glyph box
    pub fn pad(&self) -> i32 {
        self.spread as i32 + 1
    }
}

/// Outcome of processing one character code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeOutcome {
    /// A new glyph was rasterized and placed
    Placed,
    /// The code aliases an already-placed glyph
    Aliased,
    /// The glyph no longer fits; the run stops here
    AtlasFull,
}

/// Finished run output: the descriptor plus the RGBA atlas pixels
#[derive(Debug, Clone)]
pub struct BuiltAtlas {
    pub descriptor: FontDescriptor,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Builds one SDF atlas from a glyph source, one character code at a time
pub struct AtlasBuilder<'a, S: GlyphSource> {
    config: AtlasConfig,
    source: &'a S,
    lines: ReferenceLines,
    packer: ShelfPacker,
    pixels: Vec<u8>,
    glyph_index_by_key: HashMap<u16, usize>,
    glyphs: Vec<Glyph>,
    chars: Vec<CharGlyph>,
}

impl<'a, S: GlyphSource> AtlasBuilder<'a, S> {
    pub fn new(config: AtlasConfig, source: &'a S) -> Result<Self> {
        config.validate()?;
        let metrics = source.line_metrics();
        debug!(
            "max ascent: {}, ascent: {}, descent: {}, max descent: {}",
            metrics.max_ascent, metrics.ascent, metrics.descent, metrics.max_descent
        );
        debug!("line height: {}, leading: {}", metrics.line_height, metrics.leading);
        let lines = ReferenceLines::from_metrics(&metrics);
        let shelf_height = (lines.top + 2 * config.pad()).max(0) as u32;
        let packer = ShelfPacker::new(
            config.atlas_width,
            config.atlas_height,
            shelf_height,
            metrics.line_height.max(0) as u32,
        );
        let mut pixels = vec![0u8; (config.atlas_width * config.atlas_height * 4) as usize];
        for pixel in pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&SENTINEL);
        }
        Ok(Self {
            config,
            source,
            lines,
            packer,
            pixels,
            glyph_index_by_key: HashMap::new(),
            glyphs: Vec::new(),
            chars: Vec::new(),
        })
    }

    /// Process a single character code.
    ///
    /// `AtlasFull` means the glyph could not be placed: nothing is recorded
    /// for this code and the caller must stop feeding further codes.
    pub fn process(&mut self, code: u32) -> Result<CodeOutcome> {
        let key = self.source.glyph_key(code);
        if let Some(&index) = self.glyph_index_by_key.get(&key) {
            self.chars.push(CharGlyph { code, glyph: index });
            return Ok(CodeOutcome::Aliased);
        }

        let glyph = self.source.glyph(code);
        let outline = Outline::from_events(&glyph.events)?;
        let pixel_box = PixelBox::from_bounds(glyph.bounds, self.config.pad());
        let Some((x, y)) = self.packer.place(pixel_box.width() as u32) else {
            return Ok(CodeOutcome::AtlasFull);
        };

        let index = self.glyphs.len();
        self.glyph_index_by_key.insert(key, index);
        self.chars.push(CharGlyph { code, glyph: index });
        self.blit(x, y, &pixel_box, &outline);
        let entry = self.layout_glyph(&glyph, &pixel_box, x, y);
        self.glyphs.push(entry);
        Ok(CodeOutcome::Placed)
    }

    /// Run the standard byte-range sweep: codes 0..=255 in ascending order,
    /// until exhaustion or atlas overflow
    pub fn run(&mut self) -> Result<()> {
        for code in 0u32..=255 {
            if self.process(code)? == CodeOutcome::AtlasFull {
                info!("atlas full at code {code}; remaining codes are skipped");
                break;
            }
        }
        Ok(())
    }

    /// Rasterize the outline into the placed rectangle
    fn blit(&mut self, x: u32, y: u32, pixel_box: &PixelBox, outline: &Outline) {
        let spread = self.config.spread as f32;
        let values = distance::rasterize(pixel_box, spread, outline);
        let width = pixel_box.width() as u32;
        for (i, value) in values.iter().enumerate() {
            let tx = x + i as u32 % width;
            let ty = y + i as u32 / width;
            if tx >= self.config.atlas_width || ty >= self.config.atlas_height {
                continue;
            }
            let at = ((ty * self.config.atlas_width + tx) * 4) as usize;
            self.pixels[at..at + 4].copy_from_slice(&[*value; 4]);
        }
    }

    fn layout_glyph(&self, source: &SourceGlyph, pixel_box: &PixelBox, x: u32, y: u32) -> Glyph {
        let (u0, v0, u1, v1) = uv_rect(
            x as i32,
            y as i32,
            pixel_box.width(),
            pixel_box.height(),
            self.config.atlas_width,
            self.config.atlas_height,
        );
        Glyph {
            advance: source.advance,
            texture: 0,
            draw_x: pixel_box.min_x,
            draw_y: self.lines.baseline + pixel_box.min_y,
            draw_width: pixel_box.width(),
            draw_height: pixel_box.height(),
            u0,
            v0,
            u1,
            v1,
            lx: source.bounds.x,
            ly: self.lines.baseline as f32 + source.bounds.y,
            lwidth: source.bounds.width,
            lheight: source.bounds.height,
        }
    }

    /// Consume the builder, yielding the descriptor and the pixel buffer.
    ///
    /// `textures` is the list of image file names the descriptor references.
    pub fn finish(self, name: String, textures: Vec<String>) -> BuiltAtlas {
        info!(
            "placed {} glyphs for {} character codes",
            self.glyphs.len(),
            self.chars.len()
        );
        BuiltAtlas {
            descriptor: FontDescriptor {
                name,
                size: self.config.font_size,
                top: self.lines.top,
                ascent: self.lines.ascent,
                baseline: self.lines.baseline,
                descent: self.lines.descent,
                textures,
                chars: self.chars,
                glyphs: self.glyphs,
            },
            width: self.config.atlas_width,
            height: self.config.atlas_height,
            pixels: self.pixels,
        }
    }
}
