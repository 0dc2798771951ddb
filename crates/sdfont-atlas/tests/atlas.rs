//! End-to-end atlas construction tests against a synthetic glyph source
//!
//! No font file involved: each test wires a small in-memory provider into
//! the builder and checks the descriptor and pixel output.

use sdfont_atlas::{
    AtlasBuilder, AtlasConfig, CodeOutcome, GlyphBounds, GlyphSource, LineMetrics, OutlineEvent,
    SourceGlyph,
};

// ============================================================================
// SYNTHETIC GLYPH SOURCE
// ============================================================================

struct TestSource {
    metrics: LineMetrics,
    key_of: fn(u32) -> u16,
    glyph_of: fn(u32) -> SourceGlyph,
}

impl GlyphSource for TestSource {
    fn glyph_key(&self, code: u32) -> u16 {
        (self.key_of)(code)
    }

    fn glyph(&self, code: u32) -> SourceGlyph {
        (self.glyph_of)(code)
    }

    fn line_metrics(&self) -> LineMetrics {
        self.metrics
    }

    fn display_name(&self) -> String {
        "Test Font".to_string()
    }
}

fn test_metrics() -> LineMetrics {
    LineMetrics {
        max_ascent: 24,
        max_descent: 8,
        ascent: 20,
        descent: 6,
        leading: 2,
        line_height: 28,
    }
}

/// A 16x16 square sitting just above the baseline
fn square_glyph(_code: u32) -> SourceGlyph {
    SourceGlyph {
        advance: 18.0,
        bounds: GlyphBounds {
            x: 2.0,
            y: 2.0,
            width: 16.0,
            height: 16.0,
        },
        events: vec![
            OutlineEvent::MoveTo { x: 2.0, y: 2.0 },
            OutlineEvent::LineTo { x: 18.0, y: 2.0 },
            OutlineEvent::LineTo { x: 18.0, y: 18.0 },
            OutlineEvent::LineTo { x: 2.0, y: 18.0 },
            OutlineEvent::Close,
        ],
    }
}

/// A square ring: 20x20 outer contour with an 8x8 hole wound the other way
fn ring_glyph(_code: u32) -> SourceGlyph {
    SourceGlyph {
        advance: 24.0,
        bounds: GlyphBounds {
            x: 2.0,
            y: 2.0,
            width: 20.0,
            height: 20.0,
        },
        events: vec![
            OutlineEvent::MoveTo { x: 2.0, y: 2.0 },
            OutlineEvent::LineTo { x: 22.0, y: 2.0 },
            OutlineEvent::LineTo { x: 22.0, y: 22.0 },
            OutlineEvent::LineTo { x: 2.0, y: 22.0 },
            OutlineEvent::Close,
            OutlineEvent::MoveTo { x: 8.0, y: 8.0 },
            OutlineEvent::LineTo { x: 8.0, y: 16.0 },
            OutlineEvent::LineTo { x: 16.0, y: 16.0 },
            OutlineEvent::LineTo { x: 16.0, y: 8.0 },
            OutlineEvent::Close,
        ],
    }
}

fn distinct_source() -> TestSource {
    TestSource {
        metrics: test_metrics(),
        key_of: |code| code as u16,
        glyph_of: square_glyph,
    }
}

fn rgba_at(pixels: &[u8], atlas_width: u32, x: u32, y: u32) -> [u8; 4] {
    let at = ((y * atlas_width + x) * 4) as usize;
    [pixels[at], pixels[at + 1], pixels[at + 2], pixels[at + 3]]
}

// ============================================================================
// DEDUPLICATION
// ============================================================================

#[test]
fn test_shared_key_aliases_one_glyph() {
    // 'A' and 'B' resolve to the same outline identity
    let source = TestSource {
        metrics: test_metrics(),
        key_of: |_| 7,
        glyph_of: square_glyph,
    };
    let mut builder = AtlasBuilder::new(AtlasConfig::default(), &source).unwrap();
    assert_eq!(builder.process(65).unwrap(), CodeOutcome::Placed);
    assert_eq!(builder.process(66).unwrap(), CodeOutcome::Aliased);

    let atlas = builder.finish("Test Font".to_string(), vec!["t.png".to_string()]);
    let descriptor = &atlas.descriptor;
    assert_eq!(descriptor.glyphs.len(), 1);
    assert_eq!(descriptor.chars.len(), 2);
    assert_eq!(descriptor.chars[0].code, 65);
    assert_eq!(descriptor.chars[1].code, 66);
    assert_eq!(descriptor.chars[0].glyph, 0);
    assert_eq!(descriptor.chars[1].glyph, 0);

    // The second code rasterized nothing: the slot after the first glyph's
    // gutter is still sentinel red
    let next_x = 1 + descriptor.glyphs[0].draw_width as u32 + 1;
    assert_eq!(rgba_at(&atlas.pixels, atlas.width, next_x, 1), [255, 0, 0, 255]);
}

// ============================================================================
// OVERFLOW TRUNCATION
// ============================================================================

#[test]
fn test_overflow_truncates_without_error() {
    // 100x100 atlas, 26-wide boxes, shelf height 42, line height 28:
    // three glyphs per shelf, two usable shelves, so exactly 6 fit
    let source = distinct_source();
    let config = AtlasConfig {
        atlas_width: 100,
        atlas_height: 100,
        ..AtlasConfig::default()
    };
    let mut builder = AtlasBuilder::new(config, &source).unwrap();
    builder.run().unwrap();

    let atlas = builder.finish("Test Font".to_string(), vec!["t.png".to_string()]);
    assert_eq!(atlas.descriptor.glyphs.len(), 6);
    assert_eq!(atlas.descriptor.chars.len(), 6);
    // Codes are processed in ascending order; the first six made it in
    for (i, char_glyph) in atlas.descriptor.chars.iter().enumerate() {
        assert_eq!(char_glyph.code, i as u32);
        assert_eq!(char_glyph.glyph, i);
    }
}

#[test]
fn test_overflow_outcome_records_nothing() {
    let source = distinct_source();
    let config = AtlasConfig {
        atlas_width: 100,
        atlas_height: 100,
        ..AtlasConfig::default()
    };
    let mut builder = AtlasBuilder::new(config, &source).unwrap();
    for code in 0..6 {
        assert_eq!(builder.process(code).unwrap(), CodeOutcome::Placed);
    }
    assert_eq!(builder.process(6).unwrap(), CodeOutcome::AtlasFull);
    let atlas = builder.finish("Test Font".to_string(), vec![]);
    assert_eq!(atlas.descriptor.glyphs.len(), 6);
    assert_eq!(atlas.descriptor.chars.len(), 6);
}

// ============================================================================
// PLACEMENT INVARIANTS
// ============================================================================

#[test]
fn test_placed_rectangles_are_disjoint() {
    let source = distinct_source();
    let mut builder = AtlasBuilder::new(AtlasConfig::default(), &source).unwrap();
    builder.run().unwrap();
    let atlas = builder.finish("Test Font".to_string(), vec![]);

    let rects: Vec<(i32, i32, i32, i32)> = atlas
        .descriptor
        .glyphs
        .iter()
        .map(|g| {
            let x = (g.u0 * atlas.width as f32).round() as i32;
            let y = (g.v1 * atlas.height as f32).round() as i32;
            (x, y, g.draw_width, g.draw_height)
        })
        .collect();

    for (i, a) in rects.iter().enumerate() {
        assert!(a.0 + a.2 <= atlas.width as i32, "right edge out of bounds: {a:?}");
        assert!(a.1 + a.3 <= atlas.height as i32, "bottom edge out of bounds: {a:?}");
        for b in &rects[i + 1..] {
            let overlap_x = a.0 < b.0 + b.2 && b.0 < a.0 + a.2;
            let overlap_y = a.1 < b.1 + b.3 && b.1 < a.1 + a.3;
            assert!(!(overlap_x && overlap_y), "overlap: {a:?} vs {b:?}");
        }
    }
}

// ============================================================================
// DETERMINISM
// ============================================================================

#[test]
fn test_identical_runs_are_byte_identical() {
    let build = || {
        let source = distinct_source();
        let mut builder = AtlasBuilder::new(AtlasConfig::default(), &source).unwrap();
        builder.run().unwrap();
        builder.finish("Test Font".to_string(), vec!["t.png".to_string()])
    };
    let first = build();
    let second = build();
    assert_eq!(first.pixels, second.pixels);
    assert_eq!(
        serde_json::to_string(&first.descriptor).unwrap(),
        serde_json::to_string(&second.descriptor).unwrap()
    );
}

// ============================================================================
// RING GLYPH SCENARIO (default config: 512x512, spread 4, size 32)
// ============================================================================

#[test]
fn test_ring_glyph_layout_and_field_values() {
    let source = TestSource {
        metrics: test_metrics(),
        key_of: |code| code as u16,
        glyph_of: ring_glyph,
    };
    let config = AtlasConfig::default();
    let pad = config.pad();
    let mut builder = AtlasBuilder::new(config, &source).unwrap();
    assert_eq!(builder.process(79).unwrap(), CodeOutcome::Placed);
    let atlas = builder.finish("Test Font".to_string(), vec!["t.png".to_string()]);

    let glyph = &atlas.descriptor.glyphs[0];
    // Outward-rounded tight box plus padding on both sides
    assert_eq!(glyph.draw_width, 20 + 2 * pad);
    assert_eq!(glyph.draw_height, 20 + 2 * pad);
    assert_eq!(glyph.draw_x, -3);
    // Padded box bottom sits 3 below the baseline, which is 8 above the
    // line box bottom
    assert_eq!(glyph.draw_y, 5);
    assert_eq!(glyph.lx, 2.0);
    assert_eq!(glyph.ly, 10.0);
    assert_eq!(glyph.lwidth, 20.0);
    assert_eq!(glyph.lheight, 20.0);
    for uv in [glyph.u0, glyph.v0, glyph.u1, glyph.v1] {
        assert!((0.0..=1.0).contains(&uv));
    }
    assert!(glyph.v0 > glyph.v1);

    // Placed at the margin: box spans glyph-space x in [-3, 27), y in [-3, 27)
    let probe = |gx: i32, gy: i32| {
        let tx = (1 + gx + 3) as u32;
        let ty = (1 + 26 - gy) as u32;
        rgba_at(&atlas.pixels, atlas.width, tx, ty)
    };

    // In the ring band, 2.5 from the outer left edge: (2.5 + 4) / 8 of 255
    assert_eq!(probe(4, 11), [207; 4]);
    // In the hole, 3.5 from the nearest hole edge: (-3.5 + 4) / 8 of 255
    assert_eq!(probe(11, 11), [16; 4]);
    // Corner of the padded box, farther than the spread: encodes to 0
    assert_eq!(probe(-2, -2), [0; 4]);

    // Untouched atlas pixels keep the sentinel fill
    assert_eq!(rgba_at(&atlas.pixels, atlas.width, 0, 0), [255, 0, 0, 255]);
    assert_eq!(rgba_at(&atlas.pixels, atlas.width, 200, 200), [255, 0, 0, 255]);
}

// ============================================================================
// PROVIDER CONTRACT VIOLATIONS
// ============================================================================

#[test]
fn test_curve_event_aborts_run() {
    let source = TestSource {
        metrics: test_metrics(),
        key_of: |code| code as u16,
        glyph_of: |_| SourceGlyph {
            advance: 10.0,
            bounds: GlyphBounds {
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height: 10.0,
            },
            events: vec![
                OutlineEvent::MoveTo { x: 0.0, y: 0.0 },
                OutlineEvent::QuadTo { x1: 5.0, y1: 10.0, x: 10.0, y: 0.0 },
                OutlineEvent::Close,
            ],
        },
    };
    let mut builder = AtlasBuilder::new(AtlasConfig::default(), &source).unwrap();
    assert!(builder.process(0).is_err());
    assert!(builder.run().is_err());
}
