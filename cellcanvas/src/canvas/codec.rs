//! Native byte serialization of canvases.
//!
//! All integers are big-endian:
//!
//! ```text
//! magic        "\xCA\xCA" "CV"
//! control_size u32   16 + 32 * frame_count
//! data_size    u32   frame_count * width * height * 8
//! version      u16   1
//! frame_count  u32
//! flags        u16   0
//! frame header 32 bytes each: width, height, duration, attr (u32),
//!              cursor x/y, handle x/y (i32)
//! cell data    ch u32, attr u32 per cell, frame after frame
//! ```
//!
//! `control_size` counts from its own first byte to the start of the cell
//! data.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::attr::Attr;
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::geometry::Point;

use super::frame::Frame;
use super::{Canvas, alloc_cells, repair_row};

const MAGIC: [u8; 4] = [0xca, 0xca, b'C', b'V'];
const VERSION: u16 = 1;
/// Bytes from the magic through the flags field.
const HEADER_LEN: usize = 20;
const FRAME_HEADER_LEN: usize = 32;
const CELL_LEN: usize = 8;

/// Serialization formats understood by [`Canvas::export_canvas`] and
/// [`Canvas::import_canvas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Lossless native format preserving every frame.
    Caca,
}

impl Format {
    pub const ALL: [Self; 1] = [Self::Caca];

    /// Identifier accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Caca => "caca",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Caca => "native canvas format",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| Error::unknown_mode("format", s))
    }
}

impl Canvas {
    /// Serialize every frame.
    pub fn export_canvas(&self, format: Format) -> Vec<u8> {
        match format {
            Format::Caca => self.encode(&self.frames),
        }
    }

    /// Serialize only the active frame.
    pub fn export_frame(&self, format: Format) -> Vec<u8> {
        match format {
            Format::Caca => self.encode(std::slice::from_ref(self.frame())),
        }
    }

    /// Replace all frames with the serialized ones.
    ///
    /// Returns the number of bytes consumed, or `Ok(0)` when `bytes` is a
    /// valid but incomplete prefix. The first imported frame becomes active.
    pub fn import_canvas(&mut self, bytes: &[u8], format: Format) -> Result<usize> {
        self.ensure_detached()?;
        let Some(decoded) = (match format {
            Format::Caca => decode(bytes)?,
        }) else {
            return Ok(0);
        };

        let mut frames = Vec::with_capacity(decoded.frames.len());
        for stored in decoded.frames {
            let name = self.next_frame_name();
            frames.push(stored.into_frame(name));
        }
        self.frames = frames;
        self.active = 0;
        self.width = decoded.width;
        self.height = decoded.height;
        self.dirty.clear();
        self.mark_all_dirty();
        debug!(
            "imported {} frame(s) of {}x{}",
            self.frames.len(),
            self.width,
            self.height
        );
        Ok(decoded.consumed)
    }

    /// Replace the active frame with the first serialized frame, resizing
    /// the canvas to match.
    pub fn import_frame(&mut self, bytes: &[u8], format: Format) -> Result<usize> {
        self.ensure_detached()?;
        let Some(decoded) = (match format {
            Format::Caca => decode(bytes)?,
        }) else {
            return Ok(0);
        };
        let Some(first) = decoded.frames.into_iter().next() else {
            return Err(Error::Import("no frame stored".into()));
        };

        self.resize_unchecked(decoded.width, decoded.height)?;
        let frame = self.frame_mut();
        frame.cells = first.cells;
        frame.cursor = first.cursor;
        frame.handle = first.handle;
        frame.attr = first.attr;
        self.mark_all_dirty();
        debug!("imported frame of {}x{}", decoded.width, decoded.height);
        Ok(decoded.consumed)
    }

    fn encode(&self, frames: &[Frame]) -> Vec<u8> {
        let count = frames.len();
        let control_size = 16 + FRAME_HEADER_LEN * count;
        let data_size = count * self.width * self.height * CELL_LEN;

        let mut out = Vec::with_capacity(4 + control_size + data_size);
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&(control_size as u32).to_be_bytes());
        out.extend_from_slice(&(data_size as u32).to_be_bytes());
        out.extend_from_slice(&VERSION.to_be_bytes());
        out.extend_from_slice(&(count as u32).to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes());

        for frame in frames {
            for word in [
                self.width as u32,
                self.height as u32,
                0,
                frame.attr.0,
            ] {
                out.extend_from_slice(&word.to_be_bytes());
            }
            for coord in [frame.cursor.x, frame.cursor.y, frame.handle.x, frame.handle.y] {
                out.extend_from_slice(&coord.to_be_bytes());
            }
        }

        for frame in frames {
            for cell in &frame.cells {
                out.extend_from_slice(&u32::from(cell.ch).to_be_bytes());
                out.extend_from_slice(&cell.attr.0.to_be_bytes());
            }
        }
        out
    }
}

/// A frame as read from the byte stream.
struct StoredFrame {
    cells: Vec<Cell>,
    cursor: Point,
    handle: Point,
    attr: Attr,
}

impl StoredFrame {
    fn into_frame(self, name: String) -> Frame {
        let mut frame = Frame::new(self.cells, name);
        frame.cursor = self.cursor;
        frame.handle = self.handle;
        frame.attr = self.attr;
        frame
    }
}

struct Decoded {
    width: usize,
    height: usize,
    frames: Vec<StoredFrame>,
    consumed: usize,
}

/// Big-endian reader over a byte slice whose length was checked up front.
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8], pos: usize) -> Self {
        Self { bytes, pos }
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let chunk = self
            .bytes
            .get(self.pos..self.pos + N)
            .and_then(|s| <[u8; N]>::try_from(s).ok())
            .ok_or_else(|| Error::Import("truncated field".into()))?;
        self.pos += N;
        Ok(chunk)
    }

    fn u16(&mut self) -> Result<u16> {
        self.take().map(u16::from_be_bytes)
    }

    fn u32(&mut self) -> Result<u32> {
        self.take().map(u32::from_be_bytes)
    }

    fn i32(&mut self) -> Result<i32> {
        self.take().map(i32::from_be_bytes)
    }
}

/// Decode a native stream, or `None` when more bytes are needed.
fn decode(bytes: &[u8]) -> Result<Option<Decoded>> {
    let prefix = bytes.len().min(MAGIC.len());
    if bytes[..prefix] != MAGIC[..prefix] {
        return Err(Error::Import("bad magic".into()));
    }
    if bytes.len() < HEADER_LEN {
        return Ok(None);
    }

    let mut r = Reader::new(bytes, MAGIC.len());
    let control_size = r.u32()? as usize;
    let data_size = r.u32()? as usize;
    let version = r.u16()?;
    let count = r.u32()? as usize;
    let _flags = r.u16()?;

    if version != VERSION {
        return Err(Error::Import(format!("unsupported version {version}")));
    }
    if count == 0 {
        return Err(Error::Import("no frame stored".into()));
    }
    let min_control = count
        .checked_mul(FRAME_HEADER_LEN)
        .and_then(|n| n.checked_add(16))
        .ok_or_else(|| Error::Import("frame count overflow".into()))?;
    if control_size < min_control {
        return Err(Error::Import(format!(
            "control size {control_size} too small for {count} frame(s)"
        )));
    }
    let data_start = 4 + control_size;
    if bytes.len() < data_start {
        return Ok(None);
    }

    let mut headers = Vec::with_capacity(count);
    for _ in 0..count {
        let width = r.u32()? as usize;
        let height = r.u32()? as usize;
        let _duration = r.u32()?;
        let attr = Attr(r.u32()?);
        let cursor = Point::new(r.i32()?, r.i32()?);
        let handle = Point::new(r.i32()?, r.i32()?);
        headers.push((width, height, attr, cursor, handle));
    }

    let (width, height) = (headers[0].0, headers[0].1);
    if headers.iter().any(|h| (h.0, h.1) != (width, height)) {
        return Err(Error::Import("frames differ in size".into()));
    }
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(count * CELL_LEN))
        .ok_or_else(|| Error::Import("frame size overflow".into()))?;
    if data_size != expected {
        return Err(Error::Import(format!(
            "data size {data_size} does not match {count} frame(s) of {width}x{height}"
        )));
    }
    let end = data_start + data_size;
    if bytes.len() < end {
        return Ok(None);
    }

    let mut r = Reader::new(bytes, data_start);
    let mut frames = Vec::with_capacity(count);
    for (_, _, attr, cursor, handle) in headers {
        let mut cells = alloc_cells(width, height, Cell::default())?;
        for cell in &mut cells {
            let raw = r.u32()?;
            let ch = char::from_u32(raw)
                .ok_or_else(|| Error::Import(format!("invalid scalar {raw:#x}")))?;
            *cell = Cell::new(ch, Attr(r.u32()?));
        }
        if width > 0 {
            for row in cells.chunks_mut(width) {
                repair_row(row, 0, width);
            }
        }
        frames.push(StoredFrame {
            cells,
            cursor,
            handle,
            attr,
        });
    }

    Ok(Some(Decoded {
        width,
        height,
        frames,
        consumed: end,
    }))
}
