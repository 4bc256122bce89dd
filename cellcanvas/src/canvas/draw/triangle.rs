//! Triangles: outlined, filled with a glyph, or texture-mapped.

use crate::canvas::Canvas;
use crate::geometry::Point;

/// 16.16 fixed-point one.
const ONE: i64 = 0x10000;

impl Canvas {
    /// Outline a triangle with `ch`.
    pub fn draw_triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        ch: char,
    ) {
        self.draw_line(x1, y1, x2, y2, ch);
        self.draw_line(x2, y2, x3, y3, ch);
        self.draw_line(x3, y3, x1, y1, ch);
    }

    /// Outline a triangle with thin ASCII lines.
    pub fn draw_thin_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32) {
        self.draw_thin_line(x1, y1, x2, y2);
        self.draw_thin_line(x2, y2, x3, y3);
        self.draw_thin_line(x3, y3, x1, y1);
    }

    /// Fill a triangle with `ch` using 16.16 fixed-point scanlines.
    pub fn fill_triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        ch: char,
    ) {
        let mut pts = [(x1, y1), (x2, y2), (x3, y3)];
        pts.sort_by_key(|&(_, y)| y);
        let [(x1, y1), (x2, y2), (x3, y3)] = pts.map(|(x, y)| (i64::from(x), i64::from(y)));

        let slope = |xa: i64, ya: i64, xb: i64, yb: i64| {
            if ya == yb { 0 } else { (xb - xa) * ONE / (yb - ya) }
        };
        let mut sl21 = slope(x1, y1, x2, y2);
        let sl31 = slope(x1, y1, x3, y3);
        let sl32 = slope(x2, y2, x3, y3);
        let (fx1, fx2, fx3) = (x1 * ONE, x2 * ONE, x3 * ONE);

        let ymin = y1.max(0);
        let ymax = (y3 + 1).min(self.height as i64);
        let (mut xa, mut xb) = if ymin < y2 {
            (fx1 + sl21 * (ymin - y1), fx1 + sl31 * (ymin - y1))
        } else if ymin == y2 {
            let xb = if y1 == y3 { fx3 } else { fx1 + sl31 * (ymin - y1) };
            (fx2, xb)
        } else {
            sl21 = sl32;
            (fx3 + sl32 * (ymin - y3), fx3 + sl31 * (ymin - y3))
        };

        for y in ymin..ymax {
            if y == y2 {
                xa = fx2;
                sl21 = sl32;
            }
            let (lo, hi) = if xa < xb { (xa, xb) } else { (xb, xa) };
            let xx1 = (lo + 0x800) / ONE;
            let xx2 = (hi + 0x801) / ONE;
            let xmin = xx1.max(0);
            let xmax = (xx2 + 1).min(self.width as i64);
            if xmin < xmax {
                self.hspan(xmin, xmax - 1, y, ch);
            }
            xa += sl21;
            xb += sl31;
        }
    }

    /// Map `texture` onto a triangle.
    ///
    /// `uv` gives each vertex's normalized texture coordinate in
    /// `[0, 1]`. Each destination cell takes the nearest texture cell,
    /// glyph and attribute; fullwidth texture cells become spaces.
    pub fn fill_triangle_textured(
        &mut self,
        coords: [Point; 3],
        texture: &Self,
        uv: [(f32, f32); 3],
    ) {
        if texture.width == 0 || texture.height == 0 {
            return;
        }
        let [p0, p1, p2] = coords.map(|p| (f64::from(p.x), f64::from(p.y)));
        let edge = |a: (f64, f64), b: (f64, f64), p: (f64, f64)| {
            (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
        };
        let area = edge(p0, p1, p2);
        if area == 0.0 {
            return;
        }

        let xmin = coords.iter().map(|p| p.x).min().unwrap_or(0).max(0);
        let ymin = coords.iter().map(|p| p.y).min().unwrap_or(0).max(0);
        let xmax = coords.iter().map(|p| p.x).max().unwrap_or(-1).min(self.width as i32 - 1);
        let ymax = coords.iter().map(|p| p.y).max().unwrap_or(-1).min(self.height as i32 - 1);

        let (tw, th) = (texture.width, texture.height);
        let saved = self.attr();
        for y in ymin..=ymax {
            for x in xmin..=xmax {
                let p = (f64::from(x), f64::from(y));
                let w0 = edge(p1, p2, p) / area;
                let w1 = edge(p2, p0, p) / area;
                let w2 = 1.0 - w0 - w1;
                if w0 < -1e-9 || w1 < -1e-9 || w2 < -1e-9 {
                    continue;
                }
                let u = w0 * f64::from(uv[0].0) + w1 * f64::from(uv[1].0) + w2 * f64::from(uv[2].0);
                let v = w0 * f64::from(uv[0].1) + w1 * f64::from(uv[1].1) + w2 * f64::from(uv[2].1);
                let tx = ((u * tw as f64).floor() as i64).clamp(0, tw as i64 - 1) as usize;
                let ty = ((v * th as f64).floor() as i64).clamp(0, th as i64 - 1) as usize;

                let cell = texture.cells()[ty * tw + tx];
                let ch = if cell.is_fullwidth() || cell.is_continuation() { ' ' } else { cell.ch };
                self.frame_mut().attr = cell.attr;
                self.put_char(x, y, ch);
            }
        }
        self.frame_mut().attr = saved;
    }
}
