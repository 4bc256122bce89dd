//! Dirty-rectangle tracking.
//!
//! The list holds at most [`MAX_DIRTY_RECTS`] pairwise disjoint rectangles.
//! Adding a rectangle absorbs every rectangle it overlaps or lines up with
//! edge to edge; when the list overflows, the pair whose bounding box
//! wastes the least area is merged.
//! Drivers read the list, repaint those regions and clear it.

use log::warn;

use crate::geometry::Rect;

use super::Canvas;

/// Upper bound on tracked rectangles.
pub(crate) const MAX_DIRTY_RECTS: usize = 8;

/// Disjoint set of changed regions.
#[derive(Debug, Clone, Default)]
pub(crate) struct DirtyList {
    rects: Vec<Rect>,
}

impl DirtyList {
    /// Merge `rect` into the list. Empty rectangles are dropped.
    pub(crate) fn add(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        self.insert_disjoint(rect);
        self.compact();
    }

    /// Carve `rect` out of every tracked rectangle.
    pub(crate) fn remove(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let mut carved = Vec::with_capacity(self.rects.len());
        for r in &self.rects {
            carved.extend(r.subtract(&rect));
        }
        self.rects = carved;
        self.compact();
    }

    pub(crate) fn clear(&mut self) {
        self.rects.clear();
    }

    /// Clip every rectangle to a `width` × `height` grid.
    pub(crate) fn clip(&mut self, width: usize, height: usize) {
        for r in &mut self.rects {
            *r = r.clip(width, height);
        }
        self.rects.retain(|r| !r.is_empty());
    }

    pub(crate) fn as_slice(&self) -> &[Rect] {
        &self.rects
    }

    /// Push `rect` after absorbing every rectangle it overlaps or tiles
    /// exactly with.
    fn insert_disjoint(&mut self, mut rect: Rect) {
        // A grown rectangle may reach others, so repeat until stable.
        while let Some(i) = self.rects.iter().position(|r| absorbs(&rect, r)) {
            rect = rect.union(&self.rects.swap_remove(i));
        }
        self.rects.push(rect);
    }

    /// Merge cheapest pairs until the list fits.
    fn compact(&mut self) {
        while self.rects.len() > MAX_DIRTY_RECTS {
            let (i, j) = self.cheapest_pair();
            // j > i, so removing j first keeps i valid.
            let b = self.rects.swap_remove(j);
            let a = self.rects.swap_remove(i);
            self.insert_disjoint(a.union(&b));
        }
    }

    /// Pair whose bounding box adds the fewest uncovered cells.
    fn cheapest_pair(&self) -> (usize, usize) {
        let mut best = (0, 1);
        let mut best_cost = i64::MAX;
        for (i, a) in self.rects.iter().enumerate() {
            for (j, b) in self.rects.iter().enumerate().skip(i + 1) {
                let cost = a.union(b).area() - a.area() - b.area();
                if cost < best_cost {
                    best_cost = cost;
                    best = (i, j);
                }
            }
        }
        best
    }
}

/// Whether `a` and `b` should become one rectangle: they overlap, or their
/// bounding box covers no extra cell.
fn absorbs(a: &Rect, b: &Rect) -> bool {
    a.intersects(b) || a.union(b).area() == a.area() + b.area()
}

impl Canvas {
    /// Rectangles changed since the list was last cleared.
    pub fn dirty_rects(&self) -> &[Rect] {
        self.dirty.as_slice()
    }

    /// Mark a region dirty regardless of the disable counter.
    ///
    /// The region is clipped to the canvas; empty regions are ignored.
    pub fn add_dirty_rect(&mut self, rect: Rect) {
        let rect = rect.clip(self.width, self.height);
        self.dirty.add(rect);
    }

    /// Mark a region clean regardless of the disable counter.
    pub fn remove_dirty_rect(&mut self, rect: Rect) {
        let rect = rect.clip(self.width, self.height);
        self.dirty.remove(rect);
    }

    pub fn clear_dirty_rect_list(&mut self) {
        self.dirty.clear();
    }

    /// Suspend automatic dirty tracking. Calls nest.
    pub fn disable_dirty_rect(&mut self) {
        self.dirty_disabled += 1;
    }

    /// Undo one `disable_dirty_rect`.
    pub fn enable_dirty_rect(&mut self) {
        if self.dirty_disabled == 0 {
            warn!("enable_dirty_rect called while dirty tracking is already enabled");
            return;
        }
        self.dirty_disabled -= 1;
    }

    /// Whether mutating calls currently record dirty regions.
    pub fn is_dirty_tracking_enabled(&self) -> bool {
        self.dirty_disabled == 0
    }

    /// Record `rect` if automatic tracking is on.
    pub(crate) fn mark_dirty(&mut self, rect: Rect) {
        if self.dirty_disabled == 0 {
            self.add_dirty_rect(rect);
        }
    }

    pub(crate) fn mark_all_dirty(&mut self) {
        let bounds = self.bounds();
        self.mark_dirty(bounds);
    }
}

#[cfg(test)]
mod tests;
