//! Block-letter font for the hero banner.
//!
//! Covers only the letters the portfolio name needs; characters outside
//! the font are dropped so a changed name degrades gracefully.

/// Height of every banner glyph in rows.
pub const BANNER_ROWS: usize = 7;

/// Letter A (7 lines tall, 6 chars wide)
pub const LETTER_A: [&str; 7] = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██████",
    "██  ██",
    "██  ██",
    "██  ██",
];

/// Letter B
pub const LETTER_B: [&str; 7] = [
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
];

/// Letter D
pub const LETTER_D: [&str; 7] = [
    "█████ ",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "█████ ",
];

/// Letter E
pub const LETTER_E: [&str; 7] = [
    "██████",
    "██    ",
    "██    ",
    "█████ ",
    "██    ",
    "██    ",
    "██████",
];

/// Letter H
pub const LETTER_H: [&str; 7] = [
    "██  ██",
    "██  ██",
    "██  ██",
    "██████",
    "██  ██",
    "██  ██",
    "██  ██",
];

/// Letter I
pub const LETTER_I: [&str; 7] = [
    " ████ ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    " ████ ",
];

/// Letter N
pub const LETTER_N: [&str; 7] = [
    "██  ██",
    "███ ██",
    "██████",
    "██ ███",
    "██  ██",
    "██  ██",
    "██  ██",
];

/// Letter S
pub const LETTER_S: [&str; 7] = [
    " █████",
    "██    ",
    "██    ",
    " ████ ",
    "    ██",
    "    ██",
    "█████ ",
];

/// Word gap (7 lines tall, 2 chars wide)
pub const GAP: [&str; 7] = ["  ", "  ", "  ", "  ", "  ", "  ", "  "];

/// Look up the glyph for a letter, if the font covers it.
fn glyph(ch: char) -> Option<&'static [&'static str; 7]> {
    match ch.to_ascii_uppercase() {
        'A' => Some(&LETTER_A),
        'B' => Some(&LETTER_B),
        'D' => Some(&LETTER_D),
        'E' => Some(&LETTER_E),
        'H' => Some(&LETTER_H),
        'I' => Some(&LETTER_I),
        'N' => Some(&LETTER_N),
        'S' => Some(&LETTER_S),
        ' ' => Some(&GAP),
        _ => None,
    }
}

/// Build the block-letter banner for a name.
///
/// Returns [`BANNER_ROWS`] strings of equal display width. Letters are
/// joined with a single column of space; characters the font does not
/// cover are dropped.
pub fn build_name_banner(name: &str) -> Vec<String> {
    let glyphs: Vec<&[&str; 7]> = name.chars().filter_map(glyph).collect();

    let mut lines = Vec::with_capacity(BANNER_ROWS);
    for row in 0..BANNER_ROWS {
        let mut line = String::new();
        for (i, g) in glyphs.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(g[row]);
        }
        lines.push(line);
    }
    lines
}

/// Display width of the banner built for `name`, in columns.
pub fn banner_width(name: &str) -> usize {
    build_name_banner(name)
        .first()
        .map(|line| line.chars().count())
        .unwrap_or(0)
}
