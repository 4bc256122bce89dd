//! Integer points and rectangles in cell coordinates.

/// A cell position. Coordinates may be negative or past the canvas edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle; `x`/`y` is the top-left cell.
///
/// A rectangle with non-positive width or height is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning two inclusive corners, in any order.
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (xa, xb) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (ya, yb) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        Self::new(xa, ya, xb - xa + 1, yb - ya + 1)
    }

    /// One past the rightmost column.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Number of cells covered, 0 when empty.
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.width as i64 * self.height as i64
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether the two rectangles share at least one cell.
    pub fn intersects(&self, other: &Self) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Overlapping region; empty when the rectangles are disjoint.
    pub fn intersection(&self, other: &Self) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Self::new(x, y, (right - x).max(0), (bottom - y).max(0))
    }

    /// Smallest rectangle containing both. Empty inputs are ignored.
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(x, y, right - x, bottom - y)
    }

    /// Clip to a `width` × `height` grid anchored at the origin.
    pub fn clip(&self, width: usize, height: usize) -> Self {
        self.intersection(&Self::new(0, 0, width as i32, height as i32))
    }

    /// Parts of `self` not covered by `hole`, as up to four rectangles.
    pub fn subtract(&self, hole: &Self) -> Vec<Self> {
        let cut = self.intersection(hole);
        if cut.is_empty() {
            return vec![*self];
        }
        let mut parts = Vec::with_capacity(4);
        // Full-width bands above and below the hole.
        parts.push(Self::new(self.x, self.y, self.width, cut.y - self.y));
        parts.push(Self::new(
            self.x,
            cut.bottom(),
            self.width,
            self.bottom() - cut.bottom(),
        ));
        // Side pieces beside it.
        parts.push(Self::new(self.x, cut.y, cut.x - self.x, cut.height));
        parts.push(Self::new(
            cut.right(),
            cut.y,
            self.right() - cut.right(),
            cut.height,
        ));
        parts.retain(|r| !r.is_empty());
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn corners_in_any_order() {
        assert_eq!(Rect::from_corners(5, 7, 2, 3), Rect::new(2, 3, 4, 5));
        assert_eq!(Rect::from_corners(1, 1, 1, 1), Rect::new(1, 1, 1, 1));
    }

    #[test]
    fn empty_rects() {
        assert!(Rect::new(0, 0, 0, 5).is_empty());
        assert!(Rect::new(0, 0, 3, -1).is_empty());
        assert_eq!(Rect::new(0, 0, -2, -2).area(), 0);
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn intersection_and_union() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 4, 4);
        assert_eq!(a.intersection(&b), Rect::new(2, 2, 2, 2));
        assert_eq!(a.union(&b), Rect::new(0, 0, 6, 6));
        assert!(a.intersects(&b));

        let c = Rect::new(4, 0, 2, 2);
        assert!(!a.intersects(&c));
        assert_eq!(a.union(&Rect::default()), a);
    }

    #[test]
    fn clip_to_grid() {
        let r = Rect::new(-2, -1, 6, 4);
        assert_eq!(r.clip(3, 10), Rect::new(0, 0, 3, 3));
        assert!(Rect::new(10, 10, 2, 2).clip(5, 5).is_empty());
    }

    #[test]
    fn subtract_carves_hole() {
        let r = Rect::new(0, 0, 5, 5);
        let parts = r.subtract(&Rect::new(1, 1, 2, 2));
        let area: i64 = parts.iter().map(Rect::area).sum();
        assert_eq!(area, 25 - 4);
        for p in &parts {
            assert!(!p.contains(1, 1));
            assert!(!p.contains(2, 2));
        }
        for (i, p) in parts.iter().enumerate() {
            for q in &parts[i + 1..] {
                assert!(!p.intersects(q));
            }
        }
    }

    #[test]
    fn subtract_disjoint_and_total() {
        let r = Rect::new(0, 0, 2, 2);
        assert_eq!(r.subtract(&Rect::new(5, 5, 1, 1)), vec![r]);
        assert!(r.subtract(&Rect::new(-1, -1, 4, 4)).is_empty());
    }
}
