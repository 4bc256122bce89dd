use super::{Attr, Color, Style};

#[test]
fn default_attr_is_default_on_transparent() {
    let attr = Attr::default();
    assert_eq!(attr.to_ansi_fg(), Color::Default);
    assert_eq!(attr.to_ansi_bg(), Color::Transparent);
    assert!(attr.has_transparent_bg());
    assert!(attr.style().is_empty());
    assert_eq!(attr.0, 0x0180_0500);
}

#[test]
fn ansi_colors_round_trip() {
    for fg in Color::ANSI {
        for bg in Color::ANSI {
            let attr = Attr::from_ansi(fg, bg);
            assert_eq!(attr.to_ansi_fg(), fg);
            assert_eq!(attr.to_ansi_bg(), bg);
            assert_eq!(attr.to_ansi(), fg.index() | (bg.index() << 4));
        }
    }
}

#[test]
fn to_ansi_resolves_sentinels() {
    let attr = Attr::from_ansi(Color::Default, Color::Transparent);
    assert_eq!(attr.to_ansi(), Color::LightGray.index());

    let attr = Attr::from_ansi(Color::Yellow, Color::Default);
    assert_eq!(attr.to_ansi(), Color::Yellow.index());
}

#[test]
fn argb_opaque_white_on_black() {
    let attr = Attr::from_argb(0xffff, 0xf000);
    assert_eq!(attr.fg_slot(), 0x3fff);
    assert_eq!(attr.bg_slot(), 0x3800);
    assert_eq!(attr.to_ansi_fg(), Color::White);
    assert_eq!(attr.to_ansi_bg(), Color::Black);
}

#[test]
fn argb_nearest_picks_closest_palette_entry() {
    // Bright-ish red, fully opaque.
    let attr = Attr::from_argb(0xfe33, 0xf00a);
    assert_eq!(attr.to_ansi_fg(), Color::LightRed);
    assert_eq!(attr.to_ansi_bg(), Color::Blue);
}

#[test]
fn argb_mostly_transparent_maps_to_transparent() {
    let attr = Attr::from_argb(0x0fff, 0x1234);
    assert_eq!(attr.to_ansi_fg(), Color::Transparent);
    assert_eq!(attr.to_ansi_bg(), Color::Transparent);
}

#[test]
fn argb_zero_does_not_collide_with_ansi_encoding() {
    let attr = Attr::from_argb(0x0000, 0x0000);
    assert!(attr.fg_slot() >= 0x80);
    assert_eq!(attr.to_ansi_fg(), Color::Transparent);
}

#[test]
fn rgb12_of_ansi_colors() {
    let attr = Attr::from_ansi(Color::Red, Color::LightCyan);
    assert_eq!(attr.to_rgb12_fg(), 0x800);
    assert_eq!(attr.to_rgb12_bg(), 0x4ff);
}

#[test]
fn rgb12_of_sentinels() {
    let attr = Attr::default();
    assert_eq!(attr.to_rgb12_fg(), 0x888);
    assert_eq!(attr.to_rgb12_bg(), 0x000);
}

#[test]
fn rgb12_of_argb_drops_blue_lsb() {
    let attr = Attr::from_argb(0xffff, 0xf000);
    assert_eq!(attr.to_rgb12_fg(), 0xffe);
    assert_eq!(attr.to_rgb12_bg(), 0x000);
}

#[test]
fn argb64_layout() {
    let attr = Attr::from_ansi(Color::White, Color::Blue);
    assert_eq!(attr.to_argb64(), [0xf, 0x0, 0x0, 0x8, 0xf, 0xf, 0xf, 0xf]);

    let attr = Attr::default();
    assert_eq!(attr.to_argb64(), [0x0, 0xf, 0xf, 0xf, 0xf, 0x8, 0x8, 0x8]);

    let attr = Attr::from_argb(0xffff, 0xf000);
    assert_eq!(attr.to_argb64(), [0xe, 0x0, 0x0, 0x0, 0xf, 0xf, 0xf, 0xe]);
}

#[test]
fn swap_colors_keeps_style() {
    let attr = Attr::from_ansi(Color::Green, Color::Magenta).with_style(Style::BOLD);
    let swapped = attr.swap_colors();
    assert_eq!(swapped.to_ansi_fg(), Color::Magenta);
    assert_eq!(swapped.to_ansi_bg(), Color::Green);
    assert_eq!(swapped.style(), Style::BOLD);
    assert_eq!(swapped.swap_colors(), attr);
}

#[test]
fn style_nibble_round_trip() {
    let attr = Attr::from_ansi(Color::White, Color::Black);
    let styled = attr.with_style(Style::ITALICS | Style::BLINK);
    assert_eq!(styled.style(), Style::ITALICS | Style::BLINK);
    assert_eq!(styled.to_ansi_fg(), Color::White);
    assert_eq!(styled.with_style(Style::empty()), attr);
}

#[test]
fn with_colors_of_keeps_own_style() {
    let base = Attr::default().with_style(Style::UNDERLINE);
    let colors = Attr::from_ansi(Color::Cyan, Color::Brown).with_style(Style::BOLD);
    let merged = base.with_colors_of(colors);
    assert_eq!(merged.style(), Style::UNDERLINE);
    assert_eq!(merged.to_ansi_fg(), Color::Cyan);
    assert_eq!(merged.to_ansi_bg(), Color::Brown);
}

#[test]
fn color_from_index() {
    assert_eq!(Color::from_index(0x04), Some(Color::Red));
    assert_eq!(Color::from_index(0x10), Some(Color::Default));
    assert_eq!(Color::from_index(0x20), Some(Color::Transparent));
    assert_eq!(Color::from_index(0x11), None);
    assert!(Color::Red.is_ansi());
    assert!(!Color::Transparent.is_ansi());
}
