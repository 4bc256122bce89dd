//! Glyph conversions between UTF-32, UTF-8, CP437 and plain ASCII.

use unicode_width::UnicodeWidthChar;

/// Marker stored in the right half of a fullwidth glyph.
pub const CONTINUATION: char = '\u{FFFFE}';

/// Substitute for undecodable UTF-8 input.
const REPLACEMENT: char = '\u{FFFD}';

/// CP437 0x01..=0x1f pictographs.
const CP437_LOW: [char; 31] = [
    '☺', '☻', '♥', '♦', '♣', '♠', '•', '◘',
    '○', '◙', '♂', '♀', '♪', '♫', '☼', '►',
    '◄', '↕', '‼', '¶', '§', '▬', '↨', '↑',
    '↓', '→', '←', '∟', '↔', '▲', '▼',
];

/// CP437 0x80..=0xff.
const CP437_HIGH: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç',
    'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù',
    'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º',
    '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖',
    '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟',
    '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫',
    '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ',
    'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈',
    '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{a0}',
];

/// Whether `ch` occupies two cells.
pub fn is_fullwidth(ch: char) -> bool {
    ch != CONTINUATION && ch.width() == Some(2)
}

/// Decode the leading scalar of `bytes`.
///
/// Returns the scalar and the number of bytes it used, or `None` when the
/// input is empty or ends in the middle of a sequence. Malformed input
/// decodes as U+FFFD and consumes one byte.
pub fn utf8_to_utf32(bytes: &[u8]) -> Option<(char, usize)> {
    let first = *bytes.first()?;
    let len = match first {
        0x00..=0x7f => return Some((first as char, 1)),
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => return Some((REPLACEMENT, 1)),
    };

    if bytes.len() < len {
        let pending = bytes[1..].iter().all(|b| b & 0xc0 == 0x80);
        return if pending { None } else { Some((REPLACEMENT, 1)) };
    }

    match std::str::from_utf8(&bytes[..len]) {
        Ok(s) => s.chars().next().map(|ch| (ch, len)),
        Err(_) => Some((REPLACEMENT, 1)),
    }
}

/// Encode `ch` into `buf`, returning the number of bytes written.
pub fn utf32_to_utf8(ch: char, buf: &mut [u8; 4]) -> usize {
    ch.encode_utf8(buf).len()
}

/// Map a scalar to its CP437 code, or `b'?'` when it has none.
pub fn utf32_to_cp437(ch: char) -> u8 {
    match ch {
        '\0' => 0x00,
        '\u{20}'..='\u{7e}' => ch as u8,
        '\u{2302}' => 0x7f,
        _ => {
            if let Some(i) = CP437_HIGH.iter().position(|&c| c == ch) {
                return 0x80 + i as u8;
            }
            if let Some(i) = CP437_LOW.iter().position(|&c| c == ch) {
                return 0x01 + i as u8;
            }
            b'?'
        }
    }
}

/// Map a CP437 code to its Unicode scalar.
pub fn cp437_to_utf32(byte: u8) -> char {
    match byte {
        0x00 => '\0',
        0x01..=0x1f => CP437_LOW[byte as usize - 0x01],
        0x7f => '\u{2302}',
        0x80..=0xff => CP437_HIGH[byte as usize - 0x80],
        _ => byte as char,
    }
}

/// Closest printable ASCII character for `ch`, or `'?'`.
pub fn utf32_to_ascii(ch: char) -> char {
    match ch {
        '\u{20}'..='\u{7e}' => ch,
        // Fullwidth ASCII forms.
        '\u{ff01}'..='\u{ff5e}' => char::from_u32(ch as u32 - 0xfee0).unwrap_or('?'),
        '\u{3000}' | '\u{a0}' => ' ',
        _ => ASCII_APPROX
            .iter()
            .find(|(from, _)| from.contains(ch))
            .map_or('?', |&(_, to)| to),
    }
}

/// Groups of non-ASCII scalars sharing one ASCII stand-in.
const ASCII_APPROX: &[(&str, char)] = &[
    ("ÀÁÂÃÄÅ", 'A'),
    ("Ç", 'C'),
    ("ÈÉÊË", 'E'),
    ("ÌÍÎÏ", 'I'),
    ("Ñ", 'N'),
    ("ÒÓÔÕÖØ", 'O'),
    ("ÙÚÛÜ", 'U'),
    ("Ý", 'Y'),
    ("àáâãäåª", 'a'),
    ("ç¢", 'c'),
    ("èéêë", 'e'),
    ("ìíîï", 'i'),
    ("ñ", 'n'),
    ("òóôõöøº°", 'o'),
    ("ùúûüµ", 'u'),
    ("ýÿ", 'y'),
    ("ß", 's'),
    ("×", 'x'),
    ("÷", '/'),
    ("«‹", '<'),
    ("»›", '>'),
    ("¡", '!'),
    ("¿", '?'),
    ("·∙…", '.'),
    ("•◘○◙■", '*'),
    ("“”„″", '"'),
    ("‘’‚′", '\''),
    ("–—─━═╌╍┄┅", '-'),
    ("│┃║╎╏┆┇", '|'),
    ("┌┐└┘├┤┬┴┼╔╗╚╝╠╣╦╩╬╒╓╕╖╘╙╛╜╞╟╡╢╤╥╧╨╪╫┏┓┗┛┣┫┳┻╋", '+'),
    ("╭╮╯╰", '+'),
    ("░", ':'),
    ("▒", '%'),
    ("▓█▌▐▀▄▖▗▘▙▚▛▜▝▞▟", '#'),
    ("←◄◀", '<'),
    ("→►▶", '>'),
    ("↑▲", '^'),
    ("↓▼", 'v'),
    ("↔", '-'),
    ("↕", '|'),
    ("╱", '/'),
    ("╲", '\\'),
    ("╳", 'X'),
];

#[cfg(test)]
mod tests;
