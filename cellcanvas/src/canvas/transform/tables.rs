//! Static glyph substitution tables for mirrors and rotations.
//!
//! Glyphs missing from a table are left unchanged.

/// Left-right mirror images.
pub(super) const FLIP_PAIRS: &[(char, char)] = &[
    ('(', ')'), ('[', ']'), ('{', '}'), ('<', '>'), ('/', '\\'),
    ('b', 'd'), ('p', 'q'), (',', '.'), ('`', '\''),
    ('┌', '┐'), ('└', '┘'), ('├', '┤'), ('╔', '╗'), ('╚', '╝'), ('╠', '╣'),
    ('╒', '╕'), ('╓', '╖'), ('╘', '╛'), ('╙', '╜'), ('╞', '╡'), ('╟', '╢'),
    ('╭', '╮'), ('╰', '╯'), ('┏', '┓'), ('┗', '┛'), ('┣', '┫'),
    ('╱', '╲'), ('╴', '╶'),
    ('▌', '▐'), ('▖', '▗'), ('▘', '▝'), ('▙', '▟'), ('▛', '▜'), ('▚', '▞'),
    ('←', '→'), ('↖', '↗'), ('↙', '↘'), ('◄', '►'), ('◀', '▶'), ('◂', '▸'),
    ('«', '»'), ('‹', '›'), ('⌐', '¬'),
];

/// Top-bottom mirror images.
pub(super) const FLOP_PAIRS: &[(char, char)] = &[
    ('/', '\\'), (',', '`'), ('.', '\''), ('^', 'v'), ('_', '‾'),
    ('b', 'p'), ('d', 'q'), ('m', 'w'), ('M', 'W'), ('n', 'u'),
    ('┌', '└'), ('┐', '┘'), ('┬', '┴'), ('╔', '╚'), ('╗', '╝'), ('╦', '╩'),
    ('╒', '╘'), ('╓', '╙'), ('╕', '╛'), ('╖', '╜'), ('╤', '╧'), ('╥', '╨'),
    ('╭', '╰'), ('╮', '╯'), ('┏', '┗'), ('┓', '┛'), ('┳', '┻'),
    ('╱', '╲'), ('╵', '╷'),
    ('▀', '▄'), ('▘', '▖'), ('▝', '▗'), ('▛', '▙'), ('▜', '▟'), ('▚', '▞'),
    ('↑', '↓'), ('↖', '↙'), ('↗', '↘'), ('▲', '▼'), ('▴', '▾'), ('∩', '∪'),
];

/// Half-turn images that are not a composition of the two mirrors.
pub(super) const ROTATE180_PAIRS: &[(char, char)] = &[
    ('6', '9'), ('!', '¡'), ('?', '¿'), ('&', '⅋'),
];

/// Quarter-turn cycles in clockwise order.
pub(super) const ROTATE_CYCLES: &[[char; 4]] = &[
    ['^', '>', 'v', '<'],
    ['↑', '→', '↓', '←'],
    ['↖', '↗', '↘', '↙'],
    ['▲', '►', '▼', '◄'],
    ['▴', '▸', '▾', '◂'],
    ['┌', '┐', '┘', '└'],
    ['╔', '╗', '╝', '╚'],
    ['╭', '╮', '╯', '╰'],
    ['┏', '┓', '┛', '┗'],
    ['├', '┬', '┤', '┴'],
    ['╠', '╦', '╣', '╩'],
    ['┣', '┳', '┫', '┻'],
    ['╵', '╶', '╷', '╴'],
    ['▀', '▐', '▄', '▌'],
    ['▘', '▝', '▗', '▖'],
    ['▛', '▜', '▟', '▙'],
];

/// Glyphs that trade places under any quarter turn.
pub(super) const ROTATE_SWAPS: &[(char, char)] = &[
    ('-', '|'), ('─', '│'), ('━', '┃'), ('═', '║'), ('┄', '┆'), ('┅', '┇'),
    ('╌', '╎'), ('/', '\\'), ('╱', '╲'), ('▚', '▞'), ('↔', '↕'),
];

/// Two-cell pairs that rotate as one square, clockwise order.
pub(super) const PAIR_CYCLES: &[[[char; 2]; 4]] = &[
    [['▀', '▀'], [' ', '█'], ['▄', '▄'], ['█', ' ']],
    [['▀', ' '], [' ', '▀'], [' ', '▄'], ['▄', ' ']],
    [['█', '▀'], ['▀', '█'], ['▄', '█'], ['█', '▄']],
];

/// Two-cell pairs that trade places under any quarter turn.
pub(super) const PAIR_SWAPS: &[([char; 2], [char; 2])] = &[(['▀', '▄'], ['▄', '▀'])];

/// Look `ch` up in a symmetric pair table.
pub(super) fn mirror(table: &[(char, char)], ch: char) -> char {
    table
        .iter()
        .find_map(|&(a, b)| match ch {
            c if c == a => Some(b),
            c if c == b => Some(a),
            _ => None,
        })
        .unwrap_or(ch)
}

/// Point mirror: the dedicated table, else both mirrors in turn.
pub(super) fn rotate180(ch: char) -> char {
    if ROTATE180_PAIRS.iter().any(|&(a, b)| a == ch || b == ch) {
        return mirror(ROTATE180_PAIRS, ch);
    }
    mirror(FLOP_PAIRS, mirror(FLIP_PAIRS, ch))
}

fn cycle_step<T: Copy + PartialEq>(cycle: &[T; 4], item: T, clockwise: bool) -> Option<T> {
    let i = cycle.iter().position(|&c| c == item)?;
    Some(cycle[if clockwise { (i + 1) % 4 } else { (i + 3) % 4 }])
}

/// Quarter turn of a single glyph.
pub(super) fn rotate_char(ch: char, clockwise: bool) -> char {
    ROTATE_CYCLES
        .iter()
        .find_map(|cycle| cycle_step(cycle, ch, clockwise))
        .unwrap_or_else(|| mirror(ROTATE_SWAPS, ch))
}

/// Quarter turn of a horizontal pair of cells.
pub(super) fn rotate_pair(pair: [char; 2], clockwise: bool) -> [char; 2] {
    if let Some(p) = PAIR_CYCLES
        .iter()
        .find_map(|cycle| cycle_step(cycle, pair, clockwise))
    {
        return p;
    }
    for &(a, b) in PAIR_SWAPS {
        if pair == a {
            return b;
        }
        if pair == b {
            return a;
        }
    }
    [rotate_char(pair[0], clockwise), rotate_char(pair[1], clockwise)]
}
