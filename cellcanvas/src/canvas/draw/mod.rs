//! Vector drawing primitives.
//!
//! Every primitive goes through [`Canvas::put_char`], so clipping,
//! fullwidth handling and dirty tracking behave exactly as for direct
//! writes. "Thin" variants pick ASCII glyphs from the local direction of
//! the outline instead of using one fill glyph.
//!
//! Coordinates are widened to `i64` before offsets are applied, so shapes
//! anchored anywhere in the `i32` plane clip instead of overflowing.

mod boxes;
mod conic;
mod line;
mod triangle;

use super::Canvas;

/// Where an axis-aligned ellipse lies relative to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reach {
    /// The bounding box misses the canvas.
    Outside,
    /// Every cell lies strictly inside the curve, clear of the outline.
    Inside,
    Crossing,
}

impl Canvas {
    /// `put_char` for widened coordinates; anything past `i32` is off canvas.
    fn put_char_wide(&mut self, x: i64, y: i64, ch: char) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.put_char(x, y, ch);
        }
    }

    /// Plot the four points mirrored around (xo, yo).
    fn plot4(&mut self, xo: i64, yo: i64, x: i64, y: i64, ch: char) {
        self.put_char_wide(xo + x, yo + y, ch);
        self.put_char_wide(xo - x, yo + y, ch);
        self.put_char_wide(xo + x, yo - y, ch);
        self.put_char_wide(xo - x, yo - y, ch);
    }

    /// Fill columns `x1..=x2` of row `y`, clipped to the canvas.
    fn hspan(&mut self, x1: i64, x2: i64, y: i64, ch: char) {
        if y < 0 || y >= self.height as i64 {
            return;
        }
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let mut x = lo.max(0);
        let hi = hi.min(self.width as i64 - 1);
        while x <= hi {
            x += self.put_char(x as i32, y as i32, ch) as i64;
        }
    }

    /// Classify the ellipse centered on (xo, yo) with radii `a` and `b`.
    ///
    /// `margin` cells are kept between the canvas and the curve before it
    /// counts as [`Reach::Inside`].
    fn reach(&self, xo: i64, yo: i64, a: i64, b: i64, margin: i64) -> Reach {
        let (xmax, ymax) = (self.width as i64 - 1, self.height as i64 - 1);
        if xo + a < 0 || xo - a > xmax || yo + b < 0 || yo - b > ymax {
            return Reach::Outside;
        }
        // Farthest canvas offsets from the center along each axis.
        let mx = i128::from(xo.abs().max((xmax - xo).abs()) + margin);
        let my = i128::from(yo.abs().max((ymax - yo).abs()) + margin);
        let (a2, b2) = (i128::from(a) * i128::from(a), i128::from(b) * i128::from(b));
        let lhs = b2
            .checked_mul(mx * mx)
            .zip(a2.checked_mul(my * my))
            .and_then(|(p, q)| p.checked_add(q));
        match (lhs, a2.checked_mul(b2)) {
            (Some(lhs), Some(rhs)) if lhs < rhs => Reach::Inside,
            _ => Reach::Crossing,
        }
    }
}
