//! Canvas cell type.
//!
//! A `Cell` is one character position: a glyph and its packed attribute.
//! The right half of a fullwidth glyph holds [`CONTINUATION`] instead of a
//! real glyph.

use crate::attr::Attr;
use crate::glyph::{self, CONTINUATION};

/// One character position in a canvas frame.
///
/// Target size: 8 bytes, `char(4) + Attr(4)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The glyph stored in this cell.
    pub ch: char,
    /// Packed colors and style.
    pub attr: Attr,
}

const _: () = assert!(size_of::<Cell>() == 8);

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Attr::default())
    }
}

impl Cell {
    /// Cell holding `ch` with `attr`.
    pub fn new(ch: char, attr: Attr) -> Self {
        Self { ch, attr }
    }

    /// Space cell with the given attribute.
    pub fn blank(attr: Attr) -> Self {
        Self { ch: ' ', attr }
    }

    /// Whether this cell is the right half of a fullwidth glyph.
    pub fn is_continuation(&self) -> bool {
        self.ch == CONTINUATION
    }

    /// Whether this cell starts a fullwidth glyph.
    pub fn is_fullwidth(&self) -> bool {
        glyph::is_fullwidth(self.ch)
    }

    /// Whether this is a space with a TRANSPARENT background.
    pub fn is_transparent(&self) -> bool {
        self.ch == ' ' && self.attr.has_transparent_bg()
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;
    use crate::attr::{Attr, Color};
    use crate::glyph::CONTINUATION;

    #[test]
    fn size_assertion() {
        assert_eq!(size_of::<Cell>(), 8);
    }

    #[test]
    fn default_cell_is_transparent_space() {
        let cell = Cell::default();
        assert_eq!(cell.ch, ' ');
        assert_eq!(cell.attr, Attr::default());
        assert!(cell.is_transparent());
    }

    #[test]
    fn opaque_background_is_not_transparent() {
        let cell = Cell::blank(Attr::from_ansi(Color::White, Color::Black));
        assert!(!cell.is_transparent());
        assert!(!Cell::new('x', Attr::default()).is_transparent());
    }

    #[test]
    fn width_classification() {
        assert!(Cell::new('漢', Attr::default()).is_fullwidth());
        assert!(!Cell::new('a', Attr::default()).is_fullwidth());
        let cont = Cell::new(CONTINUATION, Attr::default());
        assert!(cont.is_continuation());
        assert!(!cont.is_fullwidth());
    }
}
