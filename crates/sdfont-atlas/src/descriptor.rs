//! Font descriptor data model (serialized to JSON alongside the atlas image)

use serde::Serialize;

/// One atlas entry for a distinct glyph outline.
///
/// Draw coordinates are baseline-relative pixels with y measured upward from
/// the bottom of the line box; `lx`/`ly` locate the tight outline bounding
/// box the same way. Appended once per distinct outline, never mutated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Glyph {
    pub advance: f32,
    /// Texture page id; always 0, a single page is generated
    pub texture: u32,
    pub draw_x: i32,
    pub draw_y: i32,
    pub draw_width: i32,
    pub draw_height: i32,
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
    pub lx: f32,
    pub ly: f32,
    pub lwidth: f32,
    pub lheight: f32,
}

/// Character code to glyph index mapping (many-to-one)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CharGlyph {
    #[serde(rename = "char")]
    pub code: u32,
    pub glyph: usize,
}

/// Complete output of a run, handed whole to the serializer.
///
/// `top`, `ascent`, `baseline` and `descent` are the vertical reference
/// lines measured from the bottom of the line box.
#[derive(Debug, Clone, Serialize)]
pub struct FontDescriptor {
    pub name: String,
    pub size: u32,
    pub top: i32,
    pub ascent: i32,
    pub baseline: i32,
    pub descent: i32,
    pub textures: Vec<String>,
    pub chars: Vec<CharGlyph>,
    pub glyphs: Vec<Glyph>,
}
