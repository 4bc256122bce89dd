//! Rectangles: outlined with lines, thin ASCII, CP437 box drawing or
//! filled.

use crate::canvas::Canvas;

/// Edge and corner glyphs: horizontal, vertical, then the top-left,
/// bottom-left, top-right and bottom-right corners.
struct BoxGlyphs([char; 6]);

const THIN: BoxGlyphs = BoxGlyphs(['-', '|', ',', '`', '.', '\'']);
const CP437: BoxGlyphs = BoxGlyphs(['─', '│', '┌', '└', '┐', '┘']);

impl Canvas {
    /// Outline a `width` × `height` box with `ch`. Empty sizes draw nothing.
    pub fn draw_box(&mut self, x: i32, y: i32, width: i32, height: i32, ch: char) {
        if width <= 0 || height <= 0 {
            return;
        }
        // Edges are axis-aligned, so saturating the far corner keeps every
        // on-canvas cell.
        let (x2, y2) = (x.saturating_add(width - 1), y.saturating_add(height - 1));
        self.draw_line(x, y, x, y2, ch);
        self.draw_line(x, y2, x2, y2, ch);
        self.draw_line(x2, y2, x2, y, ch);
        self.draw_line(x2, y, x, y, ch);
    }

    /// Outline a box with `-`, `|` and `,` `` ` `` `.` `'` corners.
    pub fn draw_thin_box(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.outline_box(x, y, width, height, &THIN);
    }

    /// Outline a box with CP437 single-line box-drawing glyphs.
    pub fn draw_cp437_box(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.outline_box(x, y, width, height, &CP437);
    }

    /// Fill a `width` × `height` box with `ch`, clipped to the canvas.
    pub fn fill_box(&mut self, x: i32, y: i32, width: i32, height: i32, ch: char) {
        if width <= 0 || height <= 0 {
            return;
        }
        let (x, y) = (i64::from(x), i64::from(y));
        let ymin = y.max(0);
        let ymax = (y + i64::from(height) - 1).min(self.height as i64 - 1);
        for row in ymin..=ymax {
            self.hspan(x, x + i64::from(width) - 1, row, ch);
        }
    }

    fn outline_box(&mut self, x: i32, y: i32, width: i32, height: i32, glyphs: &BoxGlyphs) {
        if width <= 0 || height <= 0 {
            return;
        }
        let [horiz, vert, top_left, bottom_left, top_right, bottom_right] = glyphs.0;
        let (x, y) = (i64::from(x), i64::from(y));
        let (x2, y2) = (x + i64::from(width) - 1, y + i64::from(height) - 1);
        let (xmax, ymax) = (self.width as i64 - 1, self.height as i64 - 1);
        if x2 < 0 || y2 < 0 || x > xmax || y > ymax {
            return;
        }

        for i in (x + 1).max(0)..x2.min(xmax + 1) {
            self.put_char_wide(i, y, horiz);
            self.put_char_wide(i, y2, horiz);
        }
        for j in (y + 1).max(0)..y2.min(ymax + 1) {
            self.put_char_wide(x, j, vert);
            self.put_char_wide(x2, j, vert);
        }

        self.put_char_wide(x, y, top_left);
        self.put_char_wide(x, y2, bottom_left);
        self.put_char_wide(x2, y, top_right);
        self.put_char_wide(x2, y2, bottom_right);
    }
}
