//! Cell writes: glyphs, strings, attributes, blits and cropping.
//!
//! Every write keeps the fullwidth invariant: a fullwidth glyph is always
//! followed by a continuation cell in the same row, and overwriting either
//! half turns the other half into a space.

use std::fmt;

use log::debug;

use crate::attr::Attr;
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::glyph::{self, CONTINUATION};

use super::{Canvas, alloc_cells, repair_row};

impl Canvas {
    /// Write `ch` at (x, y) with the current attribute.
    ///
    /// Returns the glyph width (1 or 2) so callers can advance. Out-of-bounds
    /// writes do nothing. A fullwidth glyph that would not fit in the last
    /// column becomes a space, and one starting at x = -1 leaves a space in
    /// column 0. A bare continuation marker is written as a space.
    pub fn put_char(&mut self, x: i32, y: i32, ch: char) -> usize {
        let ch = if ch == CONTINUATION { ' ' } else { ch };
        let mut fullwidth = glyph::is_fullwidth(ch);
        let advance = if fullwidth { 2 } else { 1 };
        let width = self.width as i32;
        if x >= width || y < 0 || y >= self.height as i32 {
            return advance;
        }

        let (x, mut ch) = if x == -1 && fullwidth {
            fullwidth = false;
            (0, ' ')
        } else if x < 0 {
            return advance;
        } else {
            (x, ch)
        };

        let attr = self.attr();
        let base = (y * width) as usize;
        let xu = x as usize;
        let (mut xmin, mut xmax) = (x, x);
        let cells = &mut self.frames[self.active].cells[base..base + self.width];

        // Overwriting the right half clears the left half.
        if xu > 0 && cells[xu].is_continuation() {
            cells[xu - 1].ch = ' ';
            xmin -= 1;
        }

        if fullwidth {
            if x + 1 == width {
                ch = ' ';
            } else {
                xmax += 1;
                // Overwriting the left half of another glyph clears its right half.
                if x + 2 < width && cells[xu + 2].is_continuation() {
                    cells[xu + 2].ch = ' ';
                    xmax += 1;
                }
                cells[xu + 1] = Cell::new(CONTINUATION, attr);
            }
        } else if x + 1 != width && cells[xu + 1].is_continuation() {
            cells[xu + 1].ch = ' ';
            xmax += 1;
        }

        let changed = cells[xu].ch != ch || cells[xu].attr != attr || xmin != x || xmax != x;
        cells[xu] = Cell::new(ch, attr);
        if changed {
            self.mark_dirty(Rect::new(xmin, y, xmax - xmin + 1, 1));
        }
        advance
    }

    /// Write a string starting at (x, y), clipping at both edges.
    ///
    /// Returns the number of cells that landed on the canvas.
    pub fn put_str(&mut self, x: i32, y: i32, s: &str) -> usize {
        let on_row = y >= 0 && (y as usize) < self.height;
        let width = self.width as i64;
        let mut consumed = 0;
        let mut cx = i64::from(x);
        for ch in s.chars() {
            if cx >= width {
                break;
            }
            let Ok(at) = i32::try_from(cx) else {
                break;
            };
            let advance = self.put_char(at, y, ch) as i64;
            if on_row {
                consumed += ((cx + advance).min(width) - cx.max(0)).max(0) as usize;
            }
            cx += advance;
        }
        consumed
    }

    /// Formatted variant of [`put_str`](Self::put_str).
    pub fn put_fmt(&mut self, x: i32, y: i32, args: fmt::Arguments<'_>) -> usize {
        match args.as_str() {
            Some(s) => self.put_str(x, y, s),
            None => self.put_str(x, y, &args.to_string()),
        }
    }

    /// Glyph at (x, y); a space when out of bounds.
    pub fn get_char(&self, x: i32, y: i32) -> char {
        self.index(x, y).map_or(' ', |i| self.frame().cells[i].ch)
    }

    /// Attribute at (x, y); the current attribute when out of bounds.
    pub fn get_attr(&self, x: i32, y: i32) -> Attr {
        self.index(x, y)
            .map_or_else(|| self.attr(), |i| self.frame().cells[i].attr)
    }

    /// Set the attribute of one cell, both halves for a fullwidth glyph.
    pub fn put_attr(&mut self, x: i32, y: i32, attr: Attr) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let width = self.width;
        let xu = x as usize;
        let cells = &mut self.frames[self.active].cells;
        let (mut xmin, mut xmax) = (x, x);
        let changed = cells[i].attr != attr;
        cells[i].attr = attr;

        if xu > 0 && cells[i].is_continuation() {
            cells[i - 1].attr = attr;
            xmin -= 1;
        } else if xu + 1 < width && cells[i + 1].is_continuation() {
            cells[i + 1].attr = attr;
            xmax += 1;
        }

        if changed || xmin < xmax {
            self.mark_dirty(Rect::new(xmin, y, xmax - xmin + 1, 1));
        }
    }

    /// Fill the active frame with spaces in the current attribute.
    pub fn clear(&mut self) {
        let blank = Cell::blank(self.attr());
        self.frame_mut().cells.fill(blank);
        self.mark_all_dirty();
    }

    /// Copy the active frame of `src` onto this canvas at (x, y) minus the
    /// source handle.
    ///
    /// With a `mask` of the same size, source cells whose mask glyph is a
    /// space are skipped. Source spaces on a TRANSPARENT background are
    /// skipped too. Fullwidth glyphs split by the edges become spaces.
    pub fn blit(&mut self, x: i32, y: i32, src: &Self, mask: Option<&Self>) -> Result<()> {
        if let Some(mask) = mask {
            if mask.width != src.width || mask.height != src.height {
                return Err(Error::InvalidGeometry(format!(
                    "mask is {}x{}, source is {}x{}",
                    mask.width, mask.height, src.width, src.height
                )));
            }
        }

        let origin = Point::new(x - src.handle().x, y - src.handle().y);
        let area = Rect::new(origin.x, origin.y, src.width as i32, src.height as i32)
            .clip(self.width, self.height);
        if area.is_empty() {
            return Ok(());
        }

        let src_cells = src.cells();
        let mask_cells = mask.map(Self::cells);
        let mut changed: Option<Rect> = None;

        for dy in area.y..area.bottom() {
            let sy = (dy - origin.y) as usize;
            let mut row_changed = false;
            for dx in area.x..area.right() {
                let si = sy * src.width + (dx - origin.x) as usize;
                if mask_cells.is_some_and(|m| m[si].ch == ' ') {
                    continue;
                }
                let cell = src_cells[si];
                if cell.is_transparent() {
                    continue;
                }
                let di = dy as usize * self.width + dx as usize;
                let dst = &mut self.frames[self.active].cells[di];
                if *dst != cell {
                    *dst = cell;
                    row_changed = true;
                }
            }

            let mut span = row_changed.then(|| Rect::new(area.x, dy, area.width, 1));
            if let Some(fix) =
                self.repair_fullwidth(dy as usize, area.x as usize, area.right() as usize)
            {
                span = Some(span.map_or(fix, |s| s.union(&fix)));
            }
            if let Some(span) = span {
                changed = Some(changed.map_or(span, |c| c.union(&span)));
            }
        }

        if let Some(rect) = changed {
            self.mark_dirty(rect);
        }
        Ok(())
    }

    /// Blit a pre-rendered glyph canvas at the cursor, treating its spaces
    /// as transparent, then advance the cursor by the glyph width.
    pub fn put_glyph(&mut self, glyph: &Self) -> Result<()> {
        let at = self.cursor();
        self.blit(at.x, at.y, glyph, Some(glyph))?;
        self.goto(at.x.saturating_add(glyph.width as i32), at.y);
        Ok(())
    }

    /// Crop or extend every frame to the `width` × `height` window whose
    /// top-left corner sits at (x, y) in current coordinates.
    ///
    /// Cells outside the old grid become default spaces. Cursors and
    /// handles return to the origin.
    pub fn set_boundaries(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        self.ensure_detached()?;
        if width < 0 || height < 0 {
            return Err(Error::InvalidArgument(format!(
                "negative boundaries {width}x{height}"
            )));
        }
        let (new_w, new_h) = (width as usize, height as usize);

        let mut cropped = Vec::with_capacity(self.frames.len());
        for frame in &self.frames {
            let mut cells = alloc_cells(new_w, new_h, Cell::default())?;
            for j in 0..new_h {
                let sy = i64::from(y) + j as i64;
                if sy < 0 || sy >= self.height as i64 {
                    continue;
                }
                for i in 0..new_w {
                    let sx = i64::from(x) + i as i64;
                    if sx >= 0 && sx < self.width as i64 {
                        cells[j * new_w + i] = frame.cells[sy as usize * self.width + sx as usize];
                    }
                }
            }
            if new_w > 0 {
                for row in cells.chunks_mut(new_w) {
                    repair_row(row, 0, new_w);
                }
            }
            cropped.push(cells);
        }

        for (frame, cells) in self.frames.iter_mut().zip(cropped) {
            frame.cells = cells;
            frame.cursor = Point::ORIGIN;
            frame.handle = Point::ORIGIN;
        }
        self.width = new_w;
        self.height = new_h;
        self.dirty.clear();
        self.mark_all_dirty();
        debug!("set boundaries to {width}x{height} at ({x}, {y})");
        Ok(())
    }
}
