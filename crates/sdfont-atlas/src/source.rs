//! Outline/metrics provider contract
//!
//! The atlas pipeline is driven through this trait so it never touches font
//! files directly. Coordinates handed over are baseline-relative font-design
//! pixels with y increasing upward.

use crate::metrics::GlyphBounds;
use crate::outline::OutlineEvent;

/// Font-wide vertical metrics in whole pixels
#[derive(Debug, Clone, Copy)]
pub struct LineMetrics {
    pub max_ascent: i32,
    pub max_descent: i32,
    pub ascent: i32,
    pub descent: i32,
    pub leading: i32,
    /// ascent + descent + leading
    pub line_height: i32,
}

/// Everything the pipeline needs to rasterize one distinct glyph
#[derive(Debug, Clone)]
pub struct SourceGlyph {
    pub advance: f32,
    /// Tight outline bounding box; zero-sized for glyphs with no outline
    pub bounds: GlyphBounds,
    /// Flattened outline events (move/line/close only per the provider contract)
    pub events: Vec<OutlineEvent>,
}

/// Provider of glyph outlines and metrics for one font at one nominal size
pub trait GlyphSource {
    /// Opaque glyph identity key: character codes with equal keys render the
    /// same outline and share one atlas entry
    fn glyph_key(&self, code: u32) -> u16;

    /// Extract one glyph's advance, tight bounds and flattened outline
    fn glyph(&self, code: u32) -> SourceGlyph;

    /// Font-wide vertical metrics
    fn line_metrics(&self) -> LineMetrics;

    /// Display name for the descriptor
    fn display_name(&self) -> String;
}
