//! Multi-frame character-cell canvas.
//!
//! A `Canvas` owns one or more frames of identical size. Only the active
//! frame is read and written by the cell, drawing and most transform
//! operations; frame management lives in [`frame`], dirty-rectangle
//! bookkeeping in [`dirty`], writes in [`editing`], primitives in [`draw`],
//! geometric transforms in [`transform`] and byte serialization in
//! [`codec`].

pub mod codec;
mod dirty;
mod draw;
mod editing;
mod frame;
mod transform;

use log::debug;

use crate::attr::{Attr, Color, Style};
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};

pub use codec::Format;

use dirty::DirtyList;
use frame::Frame;

/// A grid of cells with frames, cursor, handle and dirty tracking.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    /// All frames; never empty.
    frames: Vec<Frame>,
    /// Index into `frames`.
    active: usize,
    dirty: DirtyList,
    /// Nesting depth of `disable_dirty_rect`; tracking runs only at zero.
    dirty_disabled: usize,
    /// Counter behind auto-generated frame names.
    autoinc: u32,
    /// Set while a display holds the canvas.
    attached: bool,
}

impl Canvas {
    /// Create a `width` × `height` canvas with one blank frame.
    ///
    /// Every cell is a space with the default attribute and cursor and
    /// handle sit at the origin.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Allocation { width, height });
        }
        let cells = alloc_cells(width, height, Cell::default())?;
        let mut canvas = Self {
            width,
            height,
            frames: Vec::new(),
            active: 0,
            dirty: DirtyList::default(),
            dirty_disabled: 0,
            autoinc: 0,
            attached: false,
        };
        let name = canvas.next_frame_name();
        canvas.frames.push(Frame::new(cells, name));
        debug!("created {width}x{height} canvas");
        Ok(canvas)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Change the size of every frame.
    ///
    /// Content at the top-left is preserved, new cells are spaces in each
    /// frame's current attribute and cursors are clamped into the new grid.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        self.ensure_detached()?;
        self.resize_unchecked(width, height)
    }

    /// Resize without the attachment check, for display-initiated resizes.
    pub(crate) fn resize_unchecked(&mut self, width: usize, height: usize) -> Result<()> {
        let mut resized = Vec::with_capacity(self.frames.len());
        for frame in &self.frames {
            let mut cells = alloc_cells(width, height, Cell::blank(frame.attr))?;
            let keep_w = width.min(self.width);
            for y in 0..height.min(self.height) {
                let src = &frame.cells[y * self.width..y * self.width + keep_w];
                cells[y * width..y * width + keep_w].copy_from_slice(src);
            }
            resized.push(cells);
        }

        let max_x = (width as i32 - 1).max(0);
        let max_y = (height as i32 - 1).max(0);
        for (frame, cells) in self.frames.iter_mut().zip(resized) {
            frame.cells = cells;
            frame.cursor.x = frame.cursor.x.clamp(0, max_x);
            frame.cursor.y = frame.cursor.y.clamp(0, max_y);
        }

        self.width = width;
        self.height = height;
        if width > 0 {
            for frame in &mut self.frames {
                for row in frame.cells.chunks_mut(width) {
                    repair_row(row, 0, width);
                }
            }
        }
        self.dirty.clip(width, height);
        self.mark_all_dirty();
        debug!("resized canvas to {width}x{height}");
        Ok(())
    }

    /// Cells of the active frame in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.frame().cells
    }

    /// One row of the active frame, or `None` past the bottom.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        (y < self.height).then(|| &self.frame().cells[y * self.width..(y + 1) * self.width])
    }

    /// Current attribute of the active frame.
    pub fn attr(&self) -> Attr {
        self.frame().attr
    }

    /// Set the current attribute from two ANSI colors, keeping the style.
    pub fn set_color_ansi(&mut self, fg: Color, bg: Color) {
        let attr = self.attr().with_colors_of(Attr::from_ansi(fg, bg));
        self.frame_mut().attr = attr;
    }

    /// Set the current attribute from two ARGB-4444 colors, keeping the style.
    pub fn set_color_argb(&mut self, fg: u16, bg: u16) {
        let attr = self.attr().with_colors_of(Attr::from_argb(fg, bg));
        self.frame_mut().attr = attr;
    }

    /// Replace the current attribute.
    pub fn set_attr(&mut self, attr: Attr) {
        self.frame_mut().attr = attr;
    }

    /// Add style flags to the current attribute.
    pub fn set_style(&mut self, style: Style) {
        let attr = self.attr();
        self.frame_mut().attr = attr.with_style(attr.style() | style);
    }

    /// Remove style flags from the current attribute.
    pub fn unset_style(&mut self, style: Style) {
        let attr = self.attr();
        self.frame_mut().attr = attr.with_style(attr.style() - style);
    }

    /// Toggle style flags on the current attribute.
    pub fn toggle_style(&mut self, style: Style) {
        let attr = self.attr();
        self.frame_mut().attr = attr.with_style(attr.style() ^ style);
    }

    /// Move the cursor. Any position is accepted.
    pub fn goto(&mut self, x: i32, y: i32) {
        self.frame_mut().cursor = Point::new(x, y);
    }

    pub fn cursor(&self) -> Point {
        self.frame().cursor
    }

    /// Set the offset subtracted when this canvas is blitted elsewhere.
    pub fn set_handle(&mut self, x: i32, y: i32) {
        self.frame_mut().handle = Point::new(x, y);
    }

    pub fn handle(&self) -> Point {
        self.frame().handle
    }

    /// Mark the canvas as held by a display.
    pub fn attach(&mut self) -> Result<()> {
        self.ensure_detached()?;
        self.attached = true;
        debug!("canvas attached");
        Ok(())
    }

    /// Release the display hold. No-op when not attached.
    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            debug!("canvas detached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub(crate) fn ensure_detached(&self) -> Result<()> {
        if self.attached {
            Err(Error::DriverAttached)
        } else {
            Ok(())
        }
    }

    pub(crate) fn frame(&self) -> &Frame {
        &self.frames[self.active]
    }

    pub(crate) fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frames[self.active]
    }

    /// Row-major index of (x, y), or `None` when out of bounds.
    pub(crate) fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// Whole-canvas rectangle.
    pub(crate) fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Replace orphaned fullwidth halves around columns `[x0, x1)` of row
    /// `y` in the active frame, returning the changed span.
    pub(crate) fn repair_fullwidth(&mut self, y: usize, x0: usize, x1: usize) -> Option<Rect> {
        if y >= self.height {
            return None;
        }
        let width = self.width;
        let row = &mut self.frames[self.active].cells[y * width..(y + 1) * width];
        repair_row(row, x0, x1)
            .map(|(lo, hi)| Rect::new(lo as i32, y as i32, (hi - lo + 1) as i32, 1))
    }
}

/// Replace orphaned fullwidth halves in `row[x0..x1]`, plus one column of
/// margin each side, with spaces.
///
/// Returns the first and last changed columns.
pub(crate) fn repair_row(row: &mut [Cell], x0: usize, x1: usize) -> Option<(usize, usize)> {
    let width = row.len();
    let lo = x0.saturating_sub(1);
    let hi = (x1 + 1).min(width);
    let mut changed: Option<(usize, usize)> = None;
    for x in lo..hi {
        let orphan = if row[x].is_continuation() {
            x == 0 || !row[x - 1].is_fullwidth()
        } else if row[x].is_fullwidth() {
            x + 1 >= width || !row[x + 1].is_continuation()
        } else {
            false
        };
        if orphan {
            row[x].ch = ' ';
            changed = Some(changed.map_or((x, x), |(a, _)| (a, x)));
        }
    }
    changed
}

/// Allocate `width * height` copies of `fill`, reporting failure as an error.
pub(crate) fn alloc_cells(width: usize, height: usize, fill: Cell) -> Result<Vec<Cell>> {
    let len = width
        .checked_mul(height)
        .ok_or(Error::Allocation { width, height })?;
    let mut cells = Vec::new();
    if cells.try_reserve_exact(len).is_err() {
        return Err(Error::Allocation { width, height });
    }
    cells.resize(len, fill);
    Ok(cells)
}
