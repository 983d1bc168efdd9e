//! Integer axis-aligned boxes.
//!
//! Hitboxes, cell bounds and redraw regions all share this type. Coordinates follow
//! raster conventions: `x`/`y` is the top-left corner, the right and bottom edges are
//! exclusive, and a box with zero width or height is empty.

use glam::{IVec2, Vec2};

/// An axis-aligned box with a non-negative size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl Rect {
    /// The zero-area box at the origin. Used as "nothing to report".
    pub const EMPTY: Rect = Rect { x: 0, y: 0, w: 0, h: 0 };

    /// Create a box. Panics on a negative size.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        assert!(w >= 0 && h >= 0, "rect size must be non-negative, got {w}x{h}");
        Self { x, y, w, h }
    }

    /// Box of `size` centred on `center`, truncating each component toward zero.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(
            (center.x - size.x / 2.0) as i32,
            (center.y - size.y / 2.0) as i32,
            size.x as i32,
            size.y as i32,
        )
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.w
    }

    pub fn height(&self) -> i32 {
        self.h
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Half-open point containment.
    pub fn contains(&self, p: IVec2) -> bool {
        !self.is_empty() && p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Whether the two boxes share a region of positive area.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Bounding box of both. Empty boxes contribute nothing.
    pub fn union(&self, other: &Rect) -> Rect {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Bounding box of every non-empty box in `rects`, or `EMPTY`.
    pub fn encapsulate<'a>(rects: impl IntoIterator<Item = &'a Rect>) -> Rect {
        rects.into_iter().fold(Rect::EMPTY, |acc, r| acc.union(r))
    }

    /// Grow each side outward by `margin`.
    pub fn padded(&self, margin: i32) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.w + margin * 2,
            self.h + margin * 2,
        )
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.w, self.h)
    }
}
