//! Block-letter banner font for the hero headline.

/// Banner height in terminal rows.
pub const BANNER_HEIGHT: usize = 5;

/// Width of one letter in columns.
pub const LETTER_WIDTH: usize = 5;

/// Block letters A-Z (5 lines tall, 5 chars wide).
const LETTERS: [[&str; 5]; 26] = [
    // A
    [
        " ███ ",
        "█   █",
        "█████",
        "█   █",
        "█   █",
    ],
    // B
    [
        "████ ",
        "█   █",
        "████ ",
        "█   █",
        "████ ",
    ],
    // C
    [
        " ████",
        "█    ",
        "█    ",
        "█    ",
        " ████",
    ],
    // D
    [
        "████ ",
        "█   █",
        "█   █",
        "█   █",
        "████ ",
    ],
    // E
    [
        "█████",
        "█    ",
        "███  ",
        "█    ",
        "█████",
    ],
    // F
    [
        "█████",
        "█    ",
        "███  ",
        "█    ",
        "█    ",
    ],
    // G
    [
        " ████",
        "█    ",
        "█  ██",
        "█   █",
        " ███ ",
    ],
    // H
    [
        "█   █",
        "█   █",
        "█████",
        "█   █",
        "█   █",
    ],
    // I
    [
        "█████",
        "  █  ",
        "  █  ",
        "  █  ",
        "█████",
    ],
    // J
    [
        "    █",
        "    █",
        "    █",
        "█   █",
        " ███ ",
    ],
    // K
    [
        "█   █",
        "█  █ ",
        "███  ",
        "█  █ ",
        "█   █",
    ],
    // L
    [
        "█    ",
        "█    ",
        "█    ",
        "█    ",
        "█████",
    ],
    // M
    [
        "█   █",
        "██ ██",
        "█ █ █",
        "█   █",
        "█   █",
    ],
    // N
    [
        "█   █",
        "██  █",
        "█ █ █",
        "█  ██",
        "█   █",
    ],
    // O
    [
        " ███ ",
        "█   █",
        "█   █",
        "█   █",
        " ███ ",
    ],
    // P
    [
        "████ ",
        "█   █",
        "████ ",
        "█    ",
        "█    ",
    ],
    // Q
    [
        " ███ ",
        "█   █",
        "█   █",
        "█  █ ",
        " ██ █",
    ],
    // R
    [
        "████ ",
        "█   █",
        "████ ",
        "█  █ ",
        "█   █",
    ],
    // S
    [
        " ████",
        "█    ",
        " ███ ",
        "    █",
        "████ ",
    ],
    // T
    [
        "█████",
        "  █  ",
        "  █  ",
        "  █  ",
        "  █  ",
    ],
    // U
    [
        "█   █",
        "█   █",
        "█   █",
        "█   █",
        " ███ ",
    ],
    // V
    [
        "█   █",
        "█   █",
        "█   █",
        " █ █ ",
        "  █  ",
    ],
    // W
    [
        "█   █",
        "█   █",
        "█ █ █",
        "██ ██",
        "█   █",
    ],
    // X
    [
        "█   █",
        " █ █ ",
        "  █  ",
        " █ █ ",
        "█   █",
    ],
    // Y
    [
        "█   █",
        " █ █ ",
        "  █  ",
        "  █  ",
        "  █  ",
    ],
    // Z
    [
        "█████",
        "   █ ",
        "  █  ",
        " █   ",
        "█████",
    ],
];

/// Blank glyph used for spaces and unknown characters.
const BLANK: [&str; 5] = ["     ", "     ", "     ", "     ", "     "];

fn letter(ch: char) -> &'static [&'static str; 5] {
    match ch {
        'A'..='Z' => &LETTERS[(ch as u8 - b'A') as usize],
        _ => &BLANK,
    }
}

/// Build the block-letter banner for a headline.
///
/// Input is uppercased; characters outside A-Z render as blanks.
/// Returns `BANNER_HEIGHT` strings, one per row.
pub fn build_banner(text: &str) -> Vec<String> {
    let upper = text.to_uppercase();
    let mut lines = Vec::with_capacity(BANNER_HEIGHT);

    for row in 0..BANNER_HEIGHT {
        let mut line = String::new();
        for (i, ch) in upper.chars().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(letter(ch)[row]);
        }
        lines.push(line);
    }

    lines
}

/// Banner width in columns, for narrow-terminal fallback checks.
pub fn banner_width(text: &str) -> u16 {
    let count = text.chars().count();
    if count == 0 {
        return 0;
    }
    (count * LETTER_WIDTH + (count - 1)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_height() {
        let lines = build_banner("ANKI");
        assert_eq!(lines.len(), BANNER_HEIGHT);
    }

    #[test]
    fn test_banner_width_matches_helper() {
        let lines = build_banner("ANKI");
        for line in &lines {
            assert_eq!(line.chars().count() as u16, banner_width("ANKI"));
        }
        assert_eq!(banner_width("ANKI"), 23);
        assert_eq!(banner_width(""), 0);
    }

    #[test]
    fn test_lowercase_is_uppercased() {
        assert_eq!(build_banner("anki"), build_banner("ANKI"));
    }

    #[test]
    fn test_unknown_chars_render_blank() {
        let lines = build_banner("?");
        assert!(lines.iter().all(|l| l.trim().is_empty()));
    }
}
