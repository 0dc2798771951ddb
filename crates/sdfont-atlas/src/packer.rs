//! Shelf-based row packing for the fixed-size atlas
//!
//! Deterministic left-to-right, top-to-bottom fill in arrival order. Not a
//! best-fit bin packer: no sorting by glyph size, no free-rectangle tracking.

/// Shelf packer with a fixed shelf height and a 1-pixel outer margin.
///
/// Boxes are placed at the cursor and separated by a 1-pixel gutter. When a
/// box no longer fits on the current shelf the cursor wraps to the next
/// shelf; when the next line would fall off the atlas the packer reports
/// overflow and the caller stops feeding it.
#[derive(Debug)]
pub struct ShelfPacker {
    atlas_width: u32,
    atlas_height: u32,
    shelf_height: u32,
    line_height: u32,
    cursor_x: u32,
    cursor_y: u32,
}

const MARGIN: u32 = 1;

impl ShelfPacker {
    pub fn new(atlas_width: u32, atlas_height: u32, shelf_height: u32, line_height: u32) -> Self {
        Self {
            atlas_width,
            atlas_height,
            shelf_height,
            line_height,
            cursor_x: MARGIN,
            cursor_y: MARGIN,
        }
    }

    /// Place a box of the given padded width on the current shelf.
    ///
    /// Returns the top-left position, or `None` when the atlas is full.
    /// Overflow is a graceful stop, not an error.
    pub fn place(&mut self, width: u32) -> Option<(u32, u32)> {
        if self.cursor_x + width >= self.atlas_width {
            self.cursor_y += self.shelf_height;
            self.cursor_x = MARGIN;
        }
        if self.cursor_y + self.line_height >= self.atlas_height {
            return None;
        }
        let position = (self.cursor_x, self.cursor_y);
        self.cursor_x += width + 1;
        Some(position)
    }
}
