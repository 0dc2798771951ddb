//! sdfont-font - Font loading and outline flattening
//!
//! Implements the atlas pipeline's glyph source on top of `ttf-parser`:
//! - Per-character glyph identity keys (undefined codes collapse to .notdef)
//! - Outline extraction with quadratic/cubic Bézier flattening
//! - Vertical metrics scaled to pixel space

pub mod face;
pub mod flatten;

pub use face::FontFace;
pub use flatten::OutlineFlattener;

/// Font provider error types
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("failed to parse font: {0}")]
    Parse(#[from] ttf_parser::FaceParsingError),

    #[error("font reports zero units per em")]
    BadUnitsPerEm,
}

pub type Result<T> = std::result::Result<T, FontError>;
