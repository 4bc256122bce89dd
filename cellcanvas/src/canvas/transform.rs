//! Geometric transforms.
//!
//! Same-size transforms (`invert`, `flip`, `flop`, `rotate_180`) act on
//! the active frame only. Quarter turns and stretches change the canvas
//! dimensions, so they act on every frame and are refused while a display
//! holds the canvas.

mod tables;

use log::debug;

use crate::cell::Cell;
use crate::error::Result;
use crate::geometry::Point;

use super::{Canvas, alloc_cells};

use tables::{FLIP_PAIRS, FLOP_PAIRS, mirror, rotate_char, rotate_pair, rotate180};

/// Put fullwidth glyphs back in front of their continuation after a row
/// was reversed.
fn fix_reversed_pairs(row: &mut [Cell]) {
    let mut x = 0;
    while x + 1 < row.len() {
        if row[x].is_continuation() && row[x + 1].is_fullwidth() {
            row.swap(x, x + 1);
            x += 2;
        } else {
            x += 1;
        }
    }
}

/// Substitute a glyph unless it is half of a fullwidth pair.
fn map_glyph(cell: &mut Cell, f: impl Fn(char) -> char) {
    if !cell.is_fullwidth() && !cell.is_continuation() {
        cell.ch = f(cell.ch);
    }
}

impl Canvas {
    /// Swap foreground and background of every cell, keeping styles.
    pub fn invert(&mut self) {
        for cell in &mut self.frame_mut().cells {
            cell.attr = cell.attr.swap_colors();
        }
        self.mark_all_dirty();
    }

    /// Mirror the active frame left to right.
    pub fn flip(&mut self) {
        let width = self.width;
        if width > 0 {
            for row in self.frame_mut().cells.chunks_mut(width) {
                row.reverse();
                fix_reversed_pairs(row);
                for cell in row {
                    map_glyph(cell, |ch| mirror(FLIP_PAIRS, ch));
                }
            }
        }
        self.mark_all_dirty();
    }

    /// Mirror the active frame top to bottom.
    pub fn flop(&mut self) {
        let (width, height) = (self.width, self.height);
        let cells = &mut self.frame_mut().cells;
        for y in 0..height / 2 {
            let (top, bottom) = cells.split_at_mut((height - 1 - y) * width);
            top[y * width..(y + 1) * width].swap_with_slice(&mut bottom[..width]);
        }
        for cell in cells.iter_mut() {
            map_glyph(cell, |ch| mirror(FLOP_PAIRS, ch));
        }
        self.mark_all_dirty();
    }

    /// Turn the active frame upside down.
    pub fn rotate_180(&mut self) {
        let width = self.width;
        let cells = &mut self.frame_mut().cells;
        cells.reverse();
        if width > 0 {
            for row in cells.chunks_mut(width) {
                fix_reversed_pairs(row);
            }
        }
        for cell in cells.iter_mut() {
            map_glyph(cell, rotate180);
        }
        self.mark_all_dirty();
    }

    /// Rotate every frame a quarter turn counterclockwise.
    ///
    /// Two horizontally adjacent cells become one output pair, so the new
    /// size is `2 * height` × `ceil(width / 2)`.
    pub fn rotate_left(&mut self) -> Result<()> {
        self.rotate_quarter(false)
    }

    /// Rotate every frame a quarter turn clockwise.
    pub fn rotate_right(&mut self) -> Result<()> {
        self.rotate_quarter(true)
    }

    /// Rotate every frame counterclockwise one cell per cell, swapping
    /// width and height. Fullwidth glyphs are lost.
    pub fn stretch_left(&mut self) -> Result<()> {
        self.stretch(false)
    }

    /// Clockwise variant of [`stretch_left`](Self::stretch_left).
    pub fn stretch_right(&mut self) -> Result<()> {
        self.stretch(true)
    }

    fn rotate_quarter(&mut self, clockwise: bool) -> Result<()> {
        self.ensure_detached()?;
        let (w, h) = (self.width, self.height);
        let pairs = w.div_ceil(2);
        let (new_w, new_h) = (2 * h, pairs);

        let mut rotated = Vec::with_capacity(self.frames.len());
        for frame in &self.frames {
            let mut cells = alloc_cells(new_w, new_h, Cell::default())?;
            for y in 0..h {
                for px in 0..pairs {
                    let i = y * w + 2 * px;
                    let mut a = frame.cells[i];
                    let mut b = if 2 * px + 1 < w {
                        frame.cells[i + 1]
                    } else {
                        Cell::blank(a.attr)
                    };

                    // Glyphs straddling two pairs cannot survive.
                    if a.is_continuation() {
                        a.ch = ' ';
                    }
                    if b.is_fullwidth() {
                        b.ch = ' ';
                    }
                    // A space's colors would be wrong once paired with a glyph.
                    if a.ch == ' ' {
                        a.attr = b.attr;
                    } else if b.ch == ' ' {
                        b.attr = a.attr;
                    }

                    let glyphs = if a.is_fullwidth() {
                        [a.ch, b.ch]
                    } else {
                        rotate_pair([a.ch, b.ch], clockwise)
                    };
                    let (row, col) = if clockwise {
                        (px, h - 1 - y)
                    } else {
                        (pairs - 1 - px, y)
                    };
                    let o = row * new_w + 2 * col;
                    cells[o] = Cell::new(glyphs[0], a.attr);
                    cells[o + 1] = Cell::new(glyphs[1], b.attr);
                }
            }
            rotated.push(cells);
        }

        let turn = |p: Point| {
            if clockwise {
                Point::new((h as i32 - 1 - p.y) * 2, p.x / 2)
            } else {
                Point::new(p.y * 2, (w as i32 - 1 - p.x) / 2)
            }
        };
        self.replace_frames(rotated, new_w, new_h, turn);
        debug!("rotated canvas to {new_w}x{new_h}");
        Ok(())
    }

    fn stretch(&mut self, clockwise: bool) -> Result<()> {
        self.ensure_detached()?;
        let (w, h) = (self.width, self.height);
        let (new_w, new_h) = (h, w);

        let mut stretched = Vec::with_capacity(self.frames.len());
        for frame in &self.frames {
            let mut cells = alloc_cells(new_w, new_h, Cell::default())?;
            for ny in 0..new_h {
                for nx in 0..new_w {
                    let (x, y) = if clockwise {
                        (ny, h - 1 - nx)
                    } else {
                        (w - 1 - ny, nx)
                    };
                    let mut cell = frame.cells[y * w + x];
                    if cell.is_fullwidth() || cell.is_continuation() {
                        cell.ch = ' ';
                    } else {
                        cell.ch = rotate_char(cell.ch, clockwise);
                    }
                    cells[ny * new_w + nx] = cell;
                }
            }
            stretched.push(cells);
        }

        let turn = |p: Point| {
            if clockwise {
                Point::new(h as i32 - 1 - p.y, p.x)
            } else {
                Point::new(p.y, w as i32 - 1 - p.x)
            }
        };
        self.replace_frames(stretched, new_w, new_h, turn);
        debug!("stretched canvas to {new_w}x{new_h}");
        Ok(())
    }

    /// Install transformed grids and move each frame's cursor and handle.
    fn replace_frames(
        &mut self,
        grids: Vec<Vec<Cell>>,
        width: usize,
        height: usize,
        turn: impl Fn(Point) -> Point,
    ) {
        for (frame, cells) in self.frames.iter_mut().zip(grids) {
            frame.cells = cells;
            frame.cursor = turn(frame.cursor);
            frame.handle = turn(frame.handle);
        }
        self.width = width;
        self.height = height;
        self.dirty.clear();
        self.mark_all_dirty();
    }
}
