//! Lines and polylines: Cohen–Sutherland clipping, then Bresenham.

use crate::geometry::Point;

use crate::canvas::Canvas;

const LEFT: u8 = 1 << 0;
const RIGHT: u8 = 1 << 1;
const TOP: u8 = 1 << 2;
const BOTTOM: u8 = 1 << 3;

#[derive(Debug, Clone, Copy)]
struct Segment {
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
}

impl Segment {
    fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            x1: x1.into(),
            y1: y1.into(),
            x2: x2.into(),
            y2: y2.into(),
        }
    }

    fn swapped(self) -> Self {
        Self {
            x1: self.x2,
            y1: self.y2,
            x2: self.x1,
            y2: self.y1,
        }
    }
}

fn outcode(x: i64, y: i64, width: i64, height: i64) -> u8 {
    let mut code = 0;
    if x < 0 {
        code |= LEFT;
    } else if x >= width {
        code |= RIGHT;
    }
    if y < 0 {
        code |= TOP;
    } else if y >= height {
        code |= BOTTOM;
    }
    code
}

/// Clip `s` to a `width` × `height` grid; `None` when nothing is visible.
///
/// The endpoints may come back swapped.
fn clip(mut s: Segment, width: i64, height: i64) -> Option<Segment> {
    // Each pass pins one endpoint coordinate to an edge.
    for _ in 0..16 {
        let c1 = outcode(s.x1, s.y1, width, height);
        let c2 = outcode(s.x2, s.y2, width, height);
        if c1 & c2 != 0 {
            return None;
        }
        if c1 == 0 {
            if c2 == 0 {
                return Some(s);
            }
            s = s.swapped();
            continue;
        }

        if c1 & LEFT != 0 {
            s.y1 = s.y2 - s.x2 * (s.y2 - s.y1) / (s.x2 - s.x1);
            s.x1 = 0;
        } else if c1 & RIGHT != 0 {
            let xmax = width - 1;
            s.y1 = s.y2 - (s.x2 - xmax) * (s.y2 - s.y1) / (s.x2 - s.x1);
            s.x1 = xmax;
        } else if c1 & TOP != 0 {
            s.x1 = s.x2 - s.y2 * (s.x2 - s.x1) / (s.y2 - s.y1);
            s.y1 = 0;
        } else {
            let ymax = height - 1;
            s.x1 = s.x2 - (s.y2 - ymax) * (s.x2 - s.x1) / (s.y2 - s.y1);
            s.y1 = ymax;
        }
    }
    None
}

impl Canvas {
    /// Draw a line of `ch` between two points, inclusive.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, ch: char) {
        if let Some(s) = self.clip_segment(x1, y1, x2, y2) {
            self.solid_segment(s, ch);
        }
    }

    /// Draw connected line segments through `points`.
    pub fn draw_polyline(&mut self, points: &[Point], ch: char) {
        for pair in points.windows(2) {
            self.draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, ch);
        }
    }

    /// Draw a line with ASCII glyphs (`-`, `|`, `,`, `` ` ``, `'`, `.`)
    /// following its slope.
    pub fn draw_thin_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        if let Some(s) = self.clip_segment(x1, y1, x2, y2) {
            self.thin_segment(s);
        }
    }

    /// Thin variant of [`draw_polyline`](Self::draw_polyline).
    pub fn draw_thin_polyline(&mut self, points: &[Point]) {
        for pair in points.windows(2) {
            self.draw_thin_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y);
        }
    }

    fn clip_segment(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Option<Segment> {
        clip(
            Segment::new(x1, y1, x2, y2),
            self.width as i64,
            self.height as i64,
        )
    }

    fn solid_segment(&mut self, s: Segment, ch: char) {
        let (mut x, mut y) = (s.x1, s.y1);
        let mut dx = (s.x2 - s.x1).abs();
        let mut dy = (s.y2 - s.y1).abs();
        let xinc = if s.x1 > s.x2 { -1 } else { 1 };
        let yinc = if s.y1 > s.y2 { -1 } else { 1 };

        if dx >= dy {
            let dpr = dy << 1;
            let dpru = dpr - (dx << 1);
            let mut delta = dpr - dx;
            while dx >= 0 {
                self.put_char(x as i32, y as i32, ch);
                if delta > 0 {
                    y += yinc;
                    delta += dpru;
                } else {
                    delta += dpr;
                }
                x += xinc;
                dx -= 1;
            }
        } else {
            let dpr = dx << 1;
            let dpru = dpr - (dy << 1);
            let mut delta = dpr - dy;
            while dy >= 0 {
                self.put_char(x as i32, y as i32, ch);
                if delta > 0 {
                    x += xinc;
                    delta += dpru;
                } else {
                    delta += dpr;
                }
                y += yinc;
                dy -= 1;
            }
        }
    }

    fn thin_segment(&mut self, s: Segment) {
        // Walk left to right; glyphs depend on whether the line climbs.
        let s = if s.x2 >= s.x1 { s } else { s.swapped() };
        let (mut x, mut y) = (s.x1, s.y1);
        let mut dx = (s.x2 - s.x1).abs();
        let mut dy = (s.y2 - s.y1).abs();
        let (yinc, slope) = if s.y1 > s.y2 {
            (-1, [',', '\''])
        } else {
            (1, ['`', '.'])
        };

        if dx >= dy {
            let dpr = dy << 1;
            let dpru = dpr - (dx << 1);
            let mut delta = dpr - dx;
            let mut stepped = false;
            while dx >= 0 {
                if delta > 0 {
                    self.put_char(x as i32, y as i32, slope[1]);
                    y += yinc;
                    delta += dpru;
                    stepped = true;
                } else {
                    let ch = if stepped { slope[0] } else { '-' };
                    self.put_char(x as i32, y as i32, ch);
                    delta += dpr;
                    stepped = false;
                }
                x += 1;
                dx -= 1;
            }
        } else {
            let dpr = dx << 1;
            let dpru = dpr - (dy << 1);
            let mut delta = dpr - dy;
            while dy >= 0 {
                if delta > 0 {
                    self.put_char(x as i32, y as i32, slope[0]);
                    self.put_char(x as i32 + 1, y as i32, slope[1]);
                    x += 1;
                    delta += dpru;
                } else {
                    self.put_char(x as i32, y as i32, '|');
                    delta += dpr;
                }
                y += yinc;
                dy -= 1;
            }
        }
    }
}
