//! Merges the dirty regions of many drawables into one redraw box.

use crate::core::rect::Rect;
use crate::renderer::dirty::DirtyRegion;

/// Draw order within a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Layer {
    Background = 0,
    Midground = 1,
    Foreground = 2,
}

impl Layer {
    pub const COUNT: usize = 3;
    pub const ALL: [Layer; Layer::COUNT] = [Layer::Background, Layer::Midground, Layer::Foreground];
}

/// Drop every child once and return the bounding box of the non-empty results.
///
/// Each child must be passed exactly once per frame; a second drop in the same
/// frame would lose what the first one reported.
pub fn compose<'a>(children: impl IntoIterator<Item = &'a mut DirtyRegion>) -> Rect {
    children
        .into_iter()
        .map(DirtyRegion::drop_region)
        .filter(|r| !r.is_empty())
        .fold(Rect::EMPTY, |acc, r| acc.union(&r))
}

/// A drawable made of layered children. Gathers their regions once per tick into
/// its own tracker.
#[derive(Debug, Clone, Default)]
pub struct LayerStack {
    region: DirtyRegion,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the children's regions, back to front. Pushes only when something
    /// changed.
    pub fn update<'a>(&mut self, children: impl IntoIterator<Item = (Layer, &'a mut DirtyRegion)>) {
        let mut ordered: Vec<(Layer, &'a mut DirtyRegion)> = children.into_iter().collect();
        ordered.sort_by_key(|(layer, _)| *layer);
        let merged = compose(ordered.into_iter().map(|(_, region)| region));
        if !merged.is_empty() {
            self.region.push(merged);
        }
    }

    pub fn region_mut(&mut self) -> &mut DirtyRegion {
        &mut self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_empty_children_compose_to_empty() {
        let mut a = DirtyRegion::new();
        let mut b = DirtyRegion::new();
        assert_eq!(compose([&mut a, &mut b]), Rect::EMPTY);
    }

    #[test]
    fn compose_unions_non_empty_children() {
        let mut a = DirtyRegion::new();
        let mut b = DirtyRegion::new();
        let mut c = DirtyRegion::new();
        a.push(Rect::new(0, 0, 10, 10));
        c.push(Rect::new(50, 20, 5, 5));
        assert_eq!(compose([&mut a, &mut b, &mut c]), Rect::new(0, 0, 55, 25));
    }

    #[test]
    fn compose_order_does_not_matter() {
        let build = || {
            let mut a = DirtyRegion::new();
            let mut b = DirtyRegion::new();
            a.push(Rect::new(-4, 2, 3, 3));
            b.push(Rect::new(8, 8, 1, 1));
            (a, b)
        };
        let (mut a1, mut b1) = build();
        let (mut a2, mut b2) = build();
        assert_eq!(compose([&mut a1, &mut b1]), compose([&mut b2, &mut a2]));
    }

    #[test]
    fn stack_pushes_only_when_children_changed() {
        let mut stack = LayerStack::new();
        let mut child = DirtyRegion::new();
        stack.update([(Layer::Midground, &mut child)]);
        assert!(stack.region_mut().is_empty());

        child.push(Rect::new(1, 2, 3, 4));
        stack.update([(Layer::Midground, &mut child)]);
        assert_eq!(stack.region_mut().drop_region(), Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn layers_sort_back_to_front() {
        assert!(Layer::Background < Layer::Midground);
        assert!(Layer::Midground < Layer::Foreground);
        assert_eq!(Layer::ALL.len(), Layer::COUNT);
    }
}
