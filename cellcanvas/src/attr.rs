//! Packed cell attributes and color conversions.
//!
//! An [`Attr`] is a 32-bit value holding a background color, a foreground
//! color and four style bits. Each color occupies a 14-bit slot laid out as
//! 3 bits alpha, 4 bits red, 4 bits green, 3 bits blue. ANSI palette colors
//! and the DEFAULT/TRANSPARENT sentinels are stored in the same slot as
//! `index | 0x40`, which no ARGB value can produce.
//!
//! ```text
//!  31        18 17         4 3    0
//! [  bg slot   |  fg slot   | style ]
//! ```

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Text style flags stored in the low nibble of an attribute.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Style: u8 {
        const BOLD      = 1 << 0;
        const ITALICS   = 1 << 1;
        const UNDERLINE = 1 << 2;
        const BLINK     = 1 << 3;
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::empty()
    }
}

/// The 16 ANSI colors plus the two sentinels.
///
/// Numbering follows the classic PC text-mode order (blue is 1, red is 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0x00,
    Blue = 0x01,
    Green = 0x02,
    Cyan = 0x03,
    Red = 0x04,
    Magenta = 0x05,
    Brown = 0x06,
    LightGray = 0x07,
    DarkGray = 0x08,
    LightBlue = 0x09,
    LightGreen = 0x0a,
    LightCyan = 0x0b,
    LightRed = 0x0c,
    LightMagenta = 0x0d,
    Yellow = 0x0e,
    White = 0x0f,
    /// Inherit the output device's default color.
    Default = 0x10,
    /// Leave whatever is underneath untouched.
    Transparent = 0x20,
}

impl Color {
    /// The 16 palette colors in index order.
    pub const ANSI: [Self; 16] = [
        Self::Black,
        Self::Blue,
        Self::Green,
        Self::Cyan,
        Self::Red,
        Self::Magenta,
        Self::Brown,
        Self::LightGray,
        Self::DarkGray,
        Self::LightBlue,
        Self::LightGreen,
        Self::LightCyan,
        Self::LightRed,
        Self::LightMagenta,
        Self::Yellow,
        Self::White,
    ];

    /// Look up a color by its numeric value (0..=15, 0x10 or 0x20).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0x00..=0x0f => Some(Self::ANSI[index as usize]),
            0x10 => Some(Self::Default),
            0x20 => Some(Self::Transparent),
            _ => None,
        }
    }

    /// Numeric value of this color.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Whether this is one of the 16 palette colors.
    pub fn is_ansi(self) -> bool {
        (self as u8) < 0x10
    }
}

/// 16-bit ARGB-4444 values of the ANSI palette.
const ANSI_TAB16: [u16; 16] = [
    0xf000, 0xf008, 0xf080, 0xf088, 0xf800, 0xf808, 0xf880, 0xf888,
    0xf444, 0xf44f, 0xf4f4, 0xf4ff, 0xff44, 0xff4f, 0xfff4, 0xffff,
];

/// The ANSI palette reduced to 14-bit slots, for nearest-color search.
const ANSI_TAB14: [u16; 16] = {
    let mut tab = [0; 16];
    let mut i = 0;
    while i < 16 {
        tab[i] = argb_slot(ANSI_TAB16[i]);
        i += 1;
    }
    tab
};

/// Marker OR-ed into a color slot holding an ANSI index or sentinel.
const ANSI_FLAG: u16 = 0x40;
const SLOT_DEFAULT: u16 = Color::Default as u16 | ANSI_FLAG;
const SLOT_TRANSPARENT: u16 = Color::Transparent as u16 | ANSI_FLAG;

/// Packed 32-bit cell attribute.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attr(pub u32);

impl Default for Attr {
    /// Default foreground on a transparent background, no style.
    fn default() -> Self {
        Self::from_ansi(Color::Default, Color::Transparent)
    }
}

impl fmt::Debug for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Attr({:#010x})", self.0)
    }
}

impl Attr {
    /// Build an attribute from two ANSI colors, with no style.
    pub fn from_ansi(fg: Color, bg: Color) -> Self {
        let fg = (fg as u32) | ANSI_FLAG as u32;
        let bg = (bg as u32) | ANSI_FLAG as u32;
        Self((bg << 18) | (fg << 4))
    }

    /// Build an attribute from two ARGB-4444 colors, with no style.
    ///
    /// Precision is reduced to the 14-bit slot format: alpha keeps 3 bits
    /// and blue keeps 3 bits.
    pub fn from_argb(fg: u16, bg: u16) -> Self {
        Self((argb_to_slot(bg) << 18) | (argb_to_slot(fg) << 4))
    }

    /// Raw 14-bit foreground slot.
    pub fn fg_slot(self) -> u16 {
        ((self.0 >> 4) & 0x3fff) as u16
    }

    /// Raw 14-bit background slot.
    pub fn bg_slot(self) -> u16 {
        (self.0 >> 18) as u16
    }

    /// Style flags.
    pub fn style(self) -> Style {
        Style::from_bits_truncate((self.0 & 0x0f) as u8)
    }

    /// Copy of this attribute with the style nibble replaced.
    pub fn with_style(self, style: Style) -> Self {
        Self((self.0 & !0x0f) | style.bits() as u32)
    }

    /// Copy of this attribute with the colors of `other` and the current style.
    pub fn with_colors_of(self, other: Self) -> Self {
        Self((other.0 & !0x0f) | (self.0 & 0x0f))
    }

    /// Exchange foreground and background colors, keeping the style.
    pub fn swap_colors(self) -> Self {
        let a = self.0;
        Self((a & 0x0f) | ((a >> 14) & 0x0003_fff0) | ((a << 14) & 0xfffc_0000))
    }

    /// Whether the background is the TRANSPARENT sentinel.
    pub fn has_transparent_bg(self) -> bool {
        self.bg_slot() == SLOT_TRANSPARENT
    }

    /// Nearest ANSI color (or sentinel) for the foreground.
    pub fn to_ansi_fg(self) -> Color {
        nearest_ansi(self.fg_slot())
    }

    /// Nearest ANSI color (or sentinel) for the background.
    pub fn to_ansi_bg(self) -> Color {
        nearest_ansi(self.bg_slot())
    }

    /// DOS-style attribute byte: foreground in the low nibble, background
    /// in the high nibble. Sentinels resolve to light gray on black.
    pub fn to_ansi(self) -> u8 {
        let fg = self.to_ansi_fg();
        let bg = self.to_ansi_bg();
        let fg = if fg.is_ansi() { fg } else { Color::LightGray };
        let bg = if bg.is_ansi() { bg } else { Color::Black };
        fg.index() | (bg.index() << 4)
    }

    /// 12-bit RGB value of the foreground.
    pub fn to_rgb12_fg(self) -> u16 {
        slot_to_rgb12(self.fg_slot(), Color::LightGray)
    }

    /// 12-bit RGB value of the background.
    pub fn to_rgb12_bg(self) -> u16 {
        slot_to_rgb12(self.bg_slot(), Color::Black)
    }

    /// Eight ARGB nibbles: background a, r, g, b then foreground a, r, g, b.
    pub fn to_argb64(self) -> [u8; 8] {
        let bg = slot_to_argb16(self.bg_slot(), Color::Black);
        let fg = slot_to_argb16(self.fg_slot(), Color::LightGray);
        [
            (bg >> 12) as u8,
            ((bg >> 8) & 0xf) as u8,
            ((bg >> 4) & 0xf) as u8,
            (bg & 0xf) as u8,
            (fg >> 12) as u8,
            ((fg >> 8) & 0xf) as u8,
            ((fg >> 4) & 0xf) as u8,
            (fg & 0xf) as u8,
        ]
    }
}

const fn argb_slot(color: u16) -> u16 {
    ((color >> 1) & 0x7ff) | ((color >> 13) << 11)
}

fn argb_to_slot(color: u16) -> u32 {
    // Fully transparent black would collide with the ANSI encoding.
    let color = if color < 0x100 { color + 0x100 } else { color };
    argb_slot(color) as u32
}

/// Decode an ANSI-flagged slot into its palette index.
fn slot_ansi_index(slot: u16) -> Option<usize> {
    (ANSI_FLAG..ANSI_FLAG + 0x10)
        .contains(&slot)
        .then_some((slot ^ ANSI_FLAG) as usize)
}

fn nearest_ansi(slot: u16) -> Color {
    if let Some(index) = slot_ansi_index(slot) {
        return Color::ANSI[index];
    }
    if slot == SLOT_DEFAULT {
        return Color::Default;
    }
    if slot == SLOT_TRANSPARENT {
        return Color::Transparent;
    }
    // Alpha of 0 or 1 out of 7.
    if slot < 0x0fff {
        return Color::Transparent;
    }

    let channels = |v: u16| -> [i32; 3] {
        [
            ((v >> 7) & 0xf) as i32,
            ((v >> 3) & 0xf) as i32,
            ((v << 1) & 0xf) as i32,
        ]
    };
    let target = channels(slot);

    let mut best = Color::Default;
    let mut best_dist = i32::MAX;
    for (i, &tab) in ANSI_TAB14.iter().enumerate() {
        let dist: i32 = channels(tab)
            .iter()
            .zip(target)
            .map(|(&a, b)| (a - b) * (a - b))
            .sum();
        if dist < best_dist {
            best_dist = dist;
            best = Color::ANSI[i];
        }
    }
    best
}

fn slot_to_rgb12(slot: u16, sentinel: Color) -> u16 {
    if let Some(index) = slot_ansi_index(slot) {
        return ANSI_TAB16[index] & 0x0fff;
    }
    if slot == SLOT_DEFAULT || slot == SLOT_TRANSPARENT {
        return ANSI_TAB16[sentinel as usize] & 0x0fff;
    }
    (slot << 1) & 0x0fff
}

fn slot_to_argb16(slot: u16, default: Color) -> u16 {
    if let Some(index) = slot_ansi_index(slot) {
        return ANSI_TAB16[index];
    }
    match slot {
        SLOT_DEFAULT => ANSI_TAB16[default as usize],
        SLOT_TRANSPARENT => 0x0fff,
        _ => ((slot << 2) & 0xf000) | ((slot << 1) & 0x0fff),
    }
}

#[cfg(test)]
mod tests;
