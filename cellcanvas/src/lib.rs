//! Character-cell canvas and bitmap ditherer.
//!
//! This crate provides the in-memory side of a text-mode renderer: packed
//! cell attributes, glyph conversions, a multi-frame cell canvas with
//! drawing primitives, transforms and dirty-rectangle tracking, and a
//! ditherer that turns pixel bitmaps into colored glyphs. It contains no
//! terminal I/O; output drivers plug in through [`display::Driver`].

#![deny(unsafe_code)]

pub mod attr;
pub mod canvas;
pub mod cell;
pub mod display;
pub mod dither;
pub mod error;
pub mod geometry;
pub mod glyph;

pub use attr::{Attr, Color, Style};
pub use canvas::{Canvas, Format};
pub use cell::Cell;
pub use display::{Display, Driver, VoidDriver};
pub use dither::{Algorithm, Antialias, Charset, ColorMode, Dither, DitherSettings};
pub use error::{Error, Result};
pub use geometry::{Point, Rect};
