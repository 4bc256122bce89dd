use super::{
    CONTINUATION, cp437_to_utf32, is_fullwidth, utf8_to_utf32, utf32_to_ascii, utf32_to_cp437,
    utf32_to_utf8,
};

#[test]
fn fullwidth_detection() {
    assert!(is_fullwidth('漢'));
    assert!(is_fullwidth('Ａ'));
    assert!(!is_fullwidth('A'));
    assert!(!is_fullwidth('é'));
    assert!(!is_fullwidth(CONTINUATION));
}

#[test]
fn utf8_decodes_leading_scalar() {
    assert_eq!(utf8_to_utf32(b"abc"), Some(('a', 1)));
    assert_eq!(utf8_to_utf32("é!".as_bytes()), Some(('é', 2)));
    assert_eq!(utf8_to_utf32("漢字".as_bytes()), Some(('漢', 3)));
    assert_eq!(utf8_to_utf32("🦀".as_bytes()), Some(('🦀', 4)));
}

#[test]
fn utf8_incomplete_input_needs_more() {
    assert_eq!(utf8_to_utf32(b""), None);
    let crab = "🦀".as_bytes();
    assert_eq!(utf8_to_utf32(&crab[..2]), None);
}

#[test]
fn utf8_malformed_input_consumes_one_byte() {
    assert_eq!(utf8_to_utf32(&[0xff, b'a']), Some(('\u{FFFD}', 1)));
    // Lead byte followed by a non-continuation byte.
    assert_eq!(utf8_to_utf32(&[0xe6, b'a']), Some(('\u{FFFD}', 1)));
    // Overlong encoding of '/'.
    assert_eq!(utf8_to_utf32(&[0xc0, 0xaf]), Some(('\u{FFFD}', 1)));
    // Surrogate half.
    assert_eq!(utf8_to_utf32(&[0xed, 0xa0, 0x80]), Some(('\u{FFFD}', 1)));
}

#[test]
fn utf8_encoding_lengths() {
    let mut buf = [0; 4];
    assert_eq!(utf32_to_utf8('x', &mut buf), 1);
    assert_eq!(buf[0], b'x');
    assert_eq!(utf32_to_utf8('漢', &mut buf), 3);
    assert_eq!(&buf[..3], "漢".as_bytes());
}

#[test]
fn cp437_table_is_a_bijection() {
    for byte in 0..=255u8 {
        let ch = cp437_to_utf32(byte);
        assert_eq!(utf32_to_cp437(ch), byte, "byte {byte:#04x} maps to {ch:?}");
    }
}

#[test]
fn cp437_known_entries() {
    assert_eq!(cp437_to_utf32(0x01), '☺');
    assert_eq!(cp437_to_utf32(0x41), 'A');
    assert_eq!(cp437_to_utf32(0xb0), '░');
    assert_eq!(cp437_to_utf32(0xdb), '█');
    assert_eq!(cp437_to_utf32(0xc9), '╔');
    assert_eq!(utf32_to_cp437('漢'), b'?');
}

#[test]
fn ascii_approximations() {
    assert_eq!(utf32_to_ascii('q'), 'q');
    assert_eq!(utf32_to_ascii('Ｑ'), 'Q');
    assert_eq!(utf32_to_ascii('é'), 'e');
    assert_eq!(utf32_to_ascii('Ö'), 'O');
    assert_eq!(utf32_to_ascii('─'), '-');
    assert_eq!(utf32_to_ascii('║'), '|');
    assert_eq!(utf32_to_ascii('┼'), '+');
    assert_eq!(utf32_to_ascii('█'), '#');
    assert_eq!(utf32_to_ascii('→'), '>');
    assert_eq!(utf32_to_ascii('漢'), '?');
}
