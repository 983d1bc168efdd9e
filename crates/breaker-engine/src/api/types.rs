use bytemuck::{Pod, Zeroable};

use crate::core::rect::Rect;

/// Unique identifier for an entity in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Screen-space redraw rectangle handed to the renderer once per frame.
/// A zero width or height means nothing needs repainting.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ClipRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ClipRect {
    pub const FLOATS: usize = 4;

    pub fn is_empty(&self) -> bool {
        self.w == 0.0 || self.h == 0.0
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}

impl From<Rect> for ClipRect {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x() as f32,
            y: r.y() as f32,
            w: r.width() as f32,
            h: r.height() as f32,
        }
    }
}
