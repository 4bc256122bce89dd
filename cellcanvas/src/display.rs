//! Display seam between a canvas and an output driver.
//!
//! Drivers only read the canvas: they paint the active frame, usually just
//! the regions in [`Canvas::dirty_rects`]. A [`Display`] ties one driver to
//! one canvas and keeps the canvas attached for its whole lifetime, so
//! structural changes (resize, rotation, import) are refused until the
//! display is dropped.

use log::debug;

use crate::canvas::Canvas;
use crate::error::Result;

/// Paints canvas contents somewhere.
pub trait Driver {
    /// Short identifier, e.g. `"ncurses"` or `"null"`.
    fn name(&self) -> &str;

    /// Render the canvas. Called by [`Display::refresh`]; the dirty list is
    /// cleared afterwards.
    fn paint(&mut self, canvas: &Canvas);
}

/// Driver that paints nothing, for tests and headless operation.
#[derive(Debug, Default)]
pub struct VoidDriver;

impl Driver for VoidDriver {
    fn name(&self) -> &str {
        "null"
    }

    fn paint(&mut self, _canvas: &Canvas) {}
}

enum Slot<'a> {
    Borrowed(&'a mut Canvas),
    Owned(Canvas),
}

/// A driver bound to a canvas it either borrows or owns.
pub struct Display<'a, D: Driver> {
    driver: D,
    canvas: Slot<'a>,
}

impl<'a, D: Driver> Display<'a, D> {
    /// Attach `canvas` to `driver`. Fails if another display holds it.
    pub fn new(driver: D, canvas: &'a mut Canvas) -> Result<Self> {
        canvas.attach()?;
        debug!("{} display attached to existing canvas", driver.name());
        Ok(Self {
            driver,
            canvas: Slot::Borrowed(canvas),
        })
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn canvas(&self) -> &Canvas {
        match &self.canvas {
            Slot::Borrowed(cv) => cv,
            Slot::Owned(cv) => cv,
        }
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        match &mut self.canvas {
            Slot::Borrowed(cv) => cv,
            Slot::Owned(cv) => cv,
        }
    }

    /// Paint the canvas and mark it clean.
    pub fn refresh(&mut self) {
        let canvas = match &mut self.canvas {
            Slot::Borrowed(cv) => &mut **cv,
            Slot::Owned(cv) => cv,
        };
        self.driver.paint(canvas);
        canvas.clear_dirty_rect_list();
    }

    /// Resize on behalf of the output device (window resize, terminal
    /// SIGWINCH). Bypasses the attachment check.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        self.canvas_mut().resize_unchecked(width, height)
    }
}

impl<D: Driver> Display<'static, D> {
    /// Create a `width` × `height` canvas owned by the display.
    pub fn with_canvas(driver: D, width: usize, height: usize) -> Result<Self> {
        let mut canvas = Canvas::new(width, height)?;
        canvas.attach()?;
        debug!("{} display created {width}x{height} canvas", driver.name());
        Ok(Self {
            driver,
            canvas: Slot::Owned(canvas),
        })
    }
}

impl<D: Driver> Drop for Display<'_, D> {
    fn drop(&mut self) {
        self.canvas_mut().detach();
        debug!("{} display released canvas", self.driver.name());
    }
}

#[cfg(test)]
mod tests;
