//! Named dither modes.
//!
//! Every mode enum parses from its identifier, also accepts `"default"`,
//! and lists its variants in `ALL` in the order they are presented.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Generate identifier, description, `ALL`, `Display` and `FromStr` for a
/// mode enum.
macro_rules! modes {
    (
        $(#[$meta:meta])*
        $ty:ident ($kind:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $name:literal, $desc:literal;)+
        }
        default = $default:ident;
        $(aliases { $($alias:literal => $target:ident),* $(,)? })?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $ty {
            $($(#[$vmeta])* $variant,)+
        }

        impl $ty {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Identifier accepted by `FromStr`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Human-readable description.
            pub fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $desc,)+
                }
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    "default" => Ok(Self::$default),
                    $($($alias => Ok(Self::$target),)*)?
                    _ => Self::ALL
                        .iter()
                        .copied()
                        .find(|m| m.name() == s)
                        .ok_or_else(|| Error::unknown_mode($kind, s)),
                }
            }
        }
    };
}

modes! {
    /// Whether a cell averages its whole source box or samples its center.
    Antialias ("antialiasing method") {
        None => "none", "no antialiasing";
        Prefilter => "prefilter", "prefilter antialiasing";
    }
    default = Prefilter;
}

modes! {
    /// Which ANSI colors the ditherer may emit and how.
    ///
    /// The `Full*` modes choose both foreground and background per cell;
    /// the others draw a foreground color on black.
    ColorMode ("color mode") {
        Mono => "mono", "white on black";
        Gray => "gray", "grayscale on black";
        Ansi8 => "8", "8 colours on black";
        Ansi16 => "16", "16 colours on black";
        FullGray => "fullgray", "full grayscale";
        Full8 => "full8", "full 8 colours";
        Full16 => "full16", "full 16 colours";
    }
    default = Full16;
}

modes! {
    /// Glyph ramp used to express coverage.
    Charset ("character set") {
        Ascii => "ascii", "plain ASCII";
        Shades => "shades", "CP437 shades";
        Blocks => "blocks", "Unicode quarter-cell blocks";
    }
    default = Ascii;
}

modes! {
    /// Quantization error handling.
    Algorithm ("dithering algorithm") {
        None => "none", "no dithering";
        Ordered2 => "ordered2", "2x2 ordered dithering";
        Ordered4 => "ordered4", "4x4 ordered dithering";
        Ordered8 => "ordered8", "8x8 ordered dithering";
        Random => "random", "random dithering";
        FloydSteinberg => "fstein", "Floyd-Steinberg dithering";
    }
    default = FloydSteinberg;
    aliases { "floyd-steinberg" => FloydSteinberg }
}

impl ColorMode {
    /// Palette indices this mode may use, darkest first.
    pub(super) fn palette(self) -> &'static [u8] {
        const GRAY: &[u8] = &[0, 8, 7, 15];
        const ANSI8: &[u8] = &[0, 1, 2, 3, 4, 5, 6, 7];
        const ANSI16: &[u8] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
        match self {
            Self::Mono => &[0, 7],
            Self::Gray | Self::FullGray => GRAY,
            Self::Ansi8 | Self::Full8 => ANSI8,
            Self::Ansi16 | Self::Full16 => ANSI16,
        }
    }

    /// Whether both colors of a cell are chosen from the image.
    pub(super) fn is_full(self) -> bool {
        matches!(self, Self::FullGray | Self::Full8 | Self::Full16)
    }
}

impl Charset {
    /// Glyphs in increasing coverage order.
    pub(super) fn glyphs(self) -> &'static [char] {
        match self {
            Self::Ascii => &[' ', '.', ':', ';', 't', '%', 'S', 'X', '@', '8'],
            Self::Shades => &[' ', '·', '░', '▒'],
            Self::Blocks => &[' ', '▘', '▚'],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Algorithm, Antialias, Charset, ColorMode};
    use crate::error::Error;

    #[test]
    fn identifiers_round_trip() {
        for mode in ColorMode::ALL {
            assert_eq!(mode.name().parse::<ColorMode>().unwrap(), *mode);
        }
        for algo in Algorithm::ALL {
            assert_eq!(algo.to_string().parse::<Algorithm>().unwrap(), *algo);
        }
        assert_eq!(Charset::ALL.len(), 3);
        assert_eq!(Antialias::ALL, &[Antialias::None, Antialias::Prefilter]);
    }

    #[test]
    fn default_aliases() {
        assert_eq!("default".parse::<Antialias>().unwrap(), Antialias::Prefilter);
        assert_eq!("default".parse::<ColorMode>().unwrap(), ColorMode::Full16);
        assert_eq!("default".parse::<Charset>().unwrap(), Charset::Ascii);
        assert_eq!("default".parse::<Algorithm>().unwrap(), Algorithm::FloydSteinberg);
        assert_eq!(
            "floyd-steinberg".parse::<Algorithm>().unwrap(),
            Algorithm::FloydSteinberg
        );
        assert_eq!(ColorMode::default(), ColorMode::Full16);
    }

    #[test]
    fn unknown_identifier_names_the_kind() {
        let err = "sixel".parse::<Charset>().unwrap_err();
        assert!(matches!(err, Error::UnknownMode { kind: "character set", .. }));
        assert_eq!(err.to_string(), "unknown character set `sixel`");
    }

    #[test]
    fn descriptions_are_present() {
        assert_eq!(ColorMode::Ansi8.description(), "8 colours on black");
        assert_eq!(Algorithm::Ordered4.name(), "ordered4");
    }

    #[test]
    fn palettes_and_glyph_ramps() {
        assert!(ColorMode::Full8.is_full());
        assert!(!ColorMode::Gray.is_full());
        assert_eq!(ColorMode::Full16.palette().len(), 16);
        assert_eq!(Charset::Ascii.glyphs().len(), 10);
        assert_eq!(Charset::Blocks.glyphs()[0], ' ');
    }
}
