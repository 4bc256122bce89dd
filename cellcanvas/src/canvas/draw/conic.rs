//! Circles and ellipses.

use crate::canvas::Canvas;

use super::Reach;

/// How the midpoint walk reached a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Start,
    Horizontal,
    Diagonal,
    Vertical,
}

/// Walk one quadrant of an axis-aligned ellipse with radii `a` (x) and
/// `b` (y), from (0, b) to (a, 0), using the midpoint algorithm.
///
/// Decision variables are kept at four times their usual value so that
/// everything stays integral; `i128` holds them for any `i32` radius.
fn walk_ellipse(a: i64, b: i64, mut visit: impl FnMut(i64, i64, Step)) {
    if b == 0 {
        for x in 0..=a {
            visit(x, 0, if x == 0 { Step::Start } else { Step::Horizontal });
        }
        return;
    }

    let (a, b) = (i128::from(a), i128::from(b));
    let (a2, b2) = (a * a, b * b);
    let (mut x, mut y) = (0_i128, b);
    visit(0, y as i64, Step::Start);

    let mut d1 = 4 * b2 - 4 * a2 * b + a2;
    while a2 * (2 * y - 1) > 2 * b2 * (x + 1) {
        let step = if d1 < 0 {
            d1 += 4 * b2 * (2 * x + 3);
            Step::Horizontal
        } else {
            d1 += 4 * (b2 * (2 * x + 3) + a2 * (2 - 2 * y));
            y -= 1;
            Step::Diagonal
        };
        x += 1;
        visit(x as i64, y as i64, step);
    }

    let mut d2 = b2 * (2 * x + 1) * (2 * x + 1) + 4 * a2 * (y - 1) * (y - 1) - 4 * a2 * b2;
    while y > 0 {
        let step = if d2 < 0 {
            d2 += 4 * (b2 * (2 * x + 2) + a2 * (3 - 2 * y));
            x += 1;
            Step::Diagonal
        } else {
            d2 += 4 * a2 * (3 - 2 * y);
            Step::Vertical
        };
        y -= 1;
        visit(x as i64, y as i64, step);
    }

    // Very flat ellipses can stop short of the horizontal radius.
    while x < a {
        x += 1;
        visit(x as i64, 0, Step::Horizontal);
    }
}

/// Outline glyph for a quadrant point at height `y` reached by `step`,
/// where `sx` and `sy` are the quadrant signs (y grows downwards).
fn thin_glyph(y: i64, step: Step, sx: i64, sy: i64) -> char {
    match step {
        Step::Start | Step::Horizontal => '-',
        Step::Vertical => '|',
        Step::Diagonal if y == 0 => '|',
        Step::Diagonal if sx * sy > 0 => '/',
        Step::Diagonal => '\\',
    }
}

/// Cells kept between the canvas and an outline before it is skipped.
const OUTLINE_MARGIN: i64 = 2;

impl Canvas {
    /// Outline a circle of radius `r` centered on (x, y).
    pub fn draw_circle(&mut self, x: i32, y: i32, r: i32, ch: char) {
        let (xo, yo, r) = (i64::from(x), i64::from(y), i64::from(r).abs());
        if self.reach(xo, yo, r, r, OUTLINE_MARGIN) != Reach::Crossing {
            return;
        }
        let (mut test, mut dx, mut dy) = (0, 0, r);
        while dx <= dy {
            self.plot4(xo, yo, dx, dy, ch);
            self.plot4(xo, yo, dy, dx, ch);
            if test > 0 {
                test += dx - dy;
                dy -= 1;
            } else {
                test += dx;
            }
            dx += 1;
        }
    }

    /// Outline an ellipse with radii `a` (horizontal) and `b` (vertical).
    pub fn draw_ellipse(&mut self, xo: i32, yo: i32, a: i32, b: i32, ch: char) {
        let (xo, yo) = (i64::from(xo), i64::from(yo));
        let (a, b) = (i64::from(a).abs(), i64::from(b).abs());
        if self.reach(xo, yo, a, b, OUTLINE_MARGIN) != Reach::Crossing {
            return;
        }
        walk_ellipse(a, b, |x, y, _| self.plot4(xo, yo, x, y, ch));
    }

    /// Fill an ellipse with radii `a` and `b`.
    pub fn fill_ellipse(&mut self, xo: i32, yo: i32, a: i32, b: i32, ch: char) {
        let (xo, yo) = (i64::from(xo), i64::from(yo));
        let (a, b) = (i64::from(a).abs(), i64::from(b).abs());
        match self.reach(xo, yo, a, b, OUTLINE_MARGIN) {
            Reach::Outside => return,
            Reach::Inside => {
                let (w, h) = (self.width as i64, self.height as i64);
                for row in 0..h {
                    self.hspan(0, w - 1, row, ch);
                }
                return;
            }
            Reach::Crossing => {}
        }

        // Only rows at most this far from the center can land on the canvas.
        let ymax = self.height as i64 - 1;
        let reach_y = b.min(yo.abs().max((ymax - yo).abs()));
        let mut half = vec![0_i64; reach_y as usize + 1];
        walk_ellipse(a, b, |x, y, _| {
            if let Some(slot) = half.get_mut(y as usize) {
                *slot = (*slot).max(x);
            }
        });
        for (dy, &dx) in half.iter().enumerate() {
            let dy = dy as i64;
            self.hspan(xo - dx, xo + dx, yo - dy, ch);
            if dy != 0 {
                self.hspan(xo - dx, xo + dx, yo + dy, ch);
            }
        }
    }

    /// Outline an ellipse with `-`, `|`, `/` and `\` chosen per segment.
    pub fn draw_thin_ellipse(&mut self, xo: i32, yo: i32, a: i32, b: i32) {
        let (xo, yo) = (i64::from(xo), i64::from(yo));
        let (a, b) = (i64::from(a).abs(), i64::from(b).abs());
        if self.reach(xo, yo, a, b, OUTLINE_MARGIN) != Reach::Crossing {
            return;
        }
        walk_ellipse(a, b, |x, y, step| {
            for (sx, sy) in [(1, 1), (-1, 1), (1, -1), (-1, -1)] {
                let ch = thin_glyph(y, step, sx, sy);
                self.put_char_wide(xo + sx * x, yo + sy * y, ch);
            }
        });
    }
}
