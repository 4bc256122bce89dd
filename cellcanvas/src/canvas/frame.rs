//! Frame storage and frame management.
//!
//! Every frame holds its own cells, cursor, handle, attribute and name.
//! All frames of a canvas share the canvas dimensions.

use log::debug;

use crate::attr::Attr;
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::geometry::Point;

use super::Canvas;

/// One grid snapshot within a canvas.
#[derive(Debug, Clone)]
pub(crate) struct Frame {
    pub(crate) cells: Vec<Cell>,
    pub(crate) cursor: Point,
    pub(crate) handle: Point,
    pub(crate) attr: Attr,
    pub(crate) name: String,
}

impl Frame {
    pub(crate) fn new(cells: Vec<Cell>, name: String) -> Self {
        Self {
            cells,
            cursor: Point::ORIGIN,
            handle: Point::ORIGIN,
            attr: Attr::default(),
            name,
        }
    }
}

impl Canvas {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Index of the active frame.
    pub fn frame_index(&self) -> usize {
        self.active
    }

    /// Make frame `index` active and mark the whole canvas dirty.
    pub fn set_frame(&mut self, index: usize) -> Result<()> {
        if index >= self.frames.len() {
            return Err(Error::InvalidArgument(format!(
                "frame {index} out of range (count {})",
                self.frames.len()
            )));
        }
        self.active = index;
        self.mark_all_dirty();
        Ok(())
    }

    /// Name of the active frame.
    pub fn frame_name(&self) -> &str {
        &self.frame().name
    }

    pub fn set_frame_name(&mut self, name: impl Into<String>) {
        self.frame_mut().name = name.into();
    }

    /// Insert a copy of the active frame at `index`.
    ///
    /// `index` is clamped into `[0, frame_count]`. The active frame stays
    /// active; its index shifts when the insertion lands at or before it.
    pub fn create_frame(&mut self, index: i32) -> Result<()> {
        let index = index.clamp(0, self.frames.len() as i32) as usize;

        let src = self.frame();
        let mut cells = Vec::new();
        if cells.try_reserve_exact(src.cells.len()).is_err() {
            return Err(Error::Allocation {
                width: self.width,
                height: self.height,
            });
        }
        cells.extend_from_slice(&src.cells);
        let (cursor, handle, attr) = (src.cursor, src.handle, src.attr);
        let frame = Frame {
            cells,
            cursor,
            handle,
            attr,
            name: self.next_frame_name(),
        };

        self.frames.insert(index, frame);
        if index <= self.active {
            self.active += 1;
        }
        debug!("created frame {index} ({} total)", self.frames.len());
        Ok(())
    }

    /// Delete frame `index`, clamped into `[0, frame_count - 1]`.
    ///
    /// Deleting the active frame selects frame 0 and marks the whole
    /// canvas dirty. The last remaining frame cannot be deleted.
    pub fn free_frame(&mut self, index: i32) -> Result<()> {
        if self.frames.len() <= 1 {
            return Err(Error::InvalidArgument(
                "cannot delete the only frame".to_owned(),
            ));
        }
        let index = index.clamp(0, self.frames.len() as i32 - 1) as usize;
        self.frames.remove(index);

        if index < self.active {
            self.active -= 1;
        } else if index == self.active {
            self.active = 0;
            self.mark_all_dirty();
        }
        debug!("freed frame {index} ({} left)", self.frames.len());
        Ok(())
    }

    pub(crate) fn next_frame_name(&mut self) -> String {
        let name = format!("frame#{:08x}", self.autoinc);
        self.autoinc = self.autoinc.wrapping_add(1);
        name
    }
}

#[cfg(test)]
mod tests;
