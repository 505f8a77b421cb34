//! Coordinate arithmetic for hit-testing, dragging and resizing canvas items.
//!
//! Everything here works in logical pixels relative to the canvas origin.

const LABEL_CHAR_WIDTH: f32 = 0.6;
const LABEL_LINE_HEIGHT: f32 = 1.4;
const LABEL_PADDING: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open: the right and bottom edges belong to the neighbour.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Size bounds applied while resizing. `min` always wins over `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeLimits {
    pub min: (f32, f32),
    pub max: Option<(f32, f32)>,
}

/// True when the point falls inside the square grip at the bottom-right corner.
pub fn in_resize_handle(rect: &Rect, px: f32, py: f32, handle: f32) -> bool {
    let handle = handle.min(rect.width).min(rect.height);
    Rect::new(
        rect.x + rect.width - handle,
        rect.y + rect.height - handle,
        handle,
        handle,
    )
    .contains(px, py)
}

/// New top-left corner for an item grabbed at `grab_offset` from its origin.
pub fn drag_target(pointer: (f32, f32), grab_offset: (f32, f32)) -> (f32, f32) {
    (pointer.0 - grab_offset.0, pointer.1 - grab_offset.1)
}

pub fn resized(original: (f32, f32), delta: (f32, f32), limits: SizeLimits) -> (f32, f32) {
    let clamp = |value: f32, min: f32, max: Option<f32>| {
        let value = match max {
            Some(max) => value.min(max),
            None => value,
        };
        value.max(min)
    };

    (
        clamp(
            original.0 + delta.0,
            limits.min.0,
            limits.max.map(|max| max.0),
        ),
        clamp(
            original.1 + delta.1,
            limits.min.1,
            limits.max.map(|max| max.1),
        ),
    )
}

/// Approximate box of a text label. Labels are hit-tested and laid out with
/// this rather than measured glyphs.
pub fn label_extent(text: &str, font_size: f32) -> (f32, f32) {
    let longest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
    let lines = text.lines().count().max(1);

    let width = longest as f32 * font_size * LABEL_CHAR_WIDTH + 2.0 * LABEL_PADDING;
    let height = lines as f32 * font_size * LABEL_LINE_HEIGHT;
    (width.max(font_size), height)
}
