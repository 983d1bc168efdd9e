//! Two-slot dirty-region tracker.
//!
//! A producer pushes the box it covers after each committed change; the renderer
//! drops once per frame to learn what to repaint. Whatever was reported on one drop
//! is reported again on the next, so the area an object just left gets erased even
//! if the object never pushes again.

use crate::core::rect::Rect;

/// Redraw state of one drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirtyRegion {
    #[default]
    Empty,
    /// A fresh region, not yet reported.
    Pending(Rect),
    /// A region already reported once, owed one more report.
    Carry(Rect),
    PendingAndCarry { pending: Rect, carry: Rect },
}

impl DirtyRegion {
    pub fn new() -> Self {
        Self::Empty
    }

    /// Record a region to redraw. An older pending region moves into the carry slot.
    pub fn push(&mut self, region: Rect) {
        let (pending, carry) = match *self {
            DirtyRegion::Empty => (region, Rect::EMPTY),
            DirtyRegion::Pending(old) => (region, old),
            DirtyRegion::Carry(carry) => (region, carry),
            DirtyRegion::PendingAndCarry { pending, carry } => (region, carry.union(&pending)),
        };
        *self = Self::from_slots(pending, carry);
    }

    /// Take the region to redraw this frame. The pending region stays owed for
    /// the next frame.
    pub fn drop_region(&mut self) -> Rect {
        let (out, next) = match *self {
            DirtyRegion::Empty => (Rect::EMPTY, DirtyRegion::Empty),
            DirtyRegion::Carry(carry) => (carry, DirtyRegion::Empty),
            DirtyRegion::Pending(pending) => (pending, DirtyRegion::Carry(pending)),
            DirtyRegion::PendingAndCarry { pending, carry } => {
                (pending.union(&carry), DirtyRegion::Carry(pending))
            }
        };
        *self = next;
        out
    }

    pub fn pending(&self) -> Rect {
        match *self {
            DirtyRegion::Pending(r) | DirtyRegion::PendingAndCarry { pending: r, .. } => r,
            _ => Rect::EMPTY,
        }
    }

    pub fn carry(&self) -> Rect {
        match *self {
            DirtyRegion::Carry(r) | DirtyRegion::PendingAndCarry { carry: r, .. } => r,
            _ => Rect::EMPTY,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == DirtyRegion::Empty
    }

    /// Forget everything, e.g. on level reload.
    pub fn clear(&mut self) {
        *self = DirtyRegion::Empty;
    }

    fn from_slots(pending: Rect, carry: Rect) -> Self {
        match (pending.is_empty(), carry.is_empty()) {
            (true, true) => DirtyRegion::Empty,
            (false, true) => DirtyRegion::Pending(pending),
            (true, false) => DirtyRegion::Carry(carry),
            (false, false) => DirtyRegion::PendingAndCarry { pending, carry },
        }
    }
}
