//! sdfont-atlas - SDF glyph atlas construction
//!
//! This crate builds a signed-distance-field texture atlas from flattened
//! glyph outlines:
//! - Segment model and point-in-polygon containment (nonzero winding)
//! - Per-pixel signed distance rasterization and [0,1] encoding
//! - Glyph deduplication by outline identity key
//! - Shelf-based row packing into a fixed-size atlas
//! - Glyph-space to atlas/UV coordinate mapping
//! - Descriptor data model for serialization
//!
//! Outlines arrive pre-flattened from a [`GlyphSource`] provider; curve
//! events are a contract violation and abort the run.

pub mod builder;
pub mod descriptor;
pub mod distance;
pub mod metrics;
pub mod outline;
pub mod packer;
pub mod source;

pub use builder::{AtlasBuilder, AtlasConfig, BuiltAtlas, CodeOutcome};
pub use descriptor::{CharGlyph, FontDescriptor, Glyph};
pub use metrics::{GlyphBounds, PixelBox, ReferenceLines};
pub use outline::{Outline, OutlineEvent, Segment};
pub use source::{GlyphSource, LineMetrics, SourceGlyph};

/// Atlas construction error types
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    #[error("{0} curve event reached the segment model; outlines must be pre-flattened")]
    UnflattenedCurve(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
