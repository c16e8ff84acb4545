// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Font table: a fixed 5x7 bitmap for every printable ASCII char,
//! plus arrows, degree and euro signs used by ticker sources.
//!
//! Each glyph row is a 5-bit value, bit 4 is the leftmost column:
//! ```text
//! 'A' => 0b01110  .###.
//!        0b10001  #...#
//!        0b10001  #...#
//!        0b10001  #...#
//!        0b11111  #####
//!        0b10001  #...#
//!        0b10001  #...#
//! ```
//! Chars without a bitmap fall back to the blank glyph, same as space.

/// glyph width in dot columns
pub const GLYPH_WIDTH: usize = 5;
/// glyph height in dot rows
pub const GLYPH_HEIGHT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Glyph(pub [u8; GLYPH_HEIGHT]);

impl Glyph {
    pub const BLANK: Glyph = Glyph([0; GLYPH_HEIGHT]);

    /// Returns the bit at (row, col), out of range reads as unlit.
    pub fn bit(&self, row: usize, col: usize) -> bool {
        if row >= GLYPH_HEIGHT || col >= GLYPH_WIDTH {
            return false;
        }
        (self.0[row] >> (GLYPH_WIDTH - 1 - col)) & 1 == 1
    }

    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|r| *r == 0)
    }

    pub fn lit_count(&self) -> u32 {
        self.0.iter().map(|r| (r & 0b11111).count_ones()).sum()
    }
}

/// Returns true if the char owns a dedicated bitmap.
pub fn has_glyph(ch: char) -> bool {
    ch == ' ' || !get_pattern(ch).is_blank()
}

/// Looks up the 7x5 pattern of a char
pub fn get_pattern(ch: char) -> Glyph {
    match ch {
        ' ' => Glyph::BLANK,
        '!' => Glyph([0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00000, 0b00100]),
        '"' => Glyph([0b01010, 0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000]),
        '#' => Glyph([0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010]),
        '$' => Glyph([0b00100, 0b01111, 0b10100, 0b01110, 0b00101, 0b11110, 0b00100]),
        '%' => Glyph([0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011]),
        '&' => Glyph([0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101]),
        '\'' => Glyph([0b01100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000]),
        '(' => Glyph([0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010]),
        ')' => Glyph([0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000]),
        '*' => Glyph([0b00000, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0b00000]),
        '+' => Glyph([0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000]),
        ',' => Glyph([0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000]),
        '-' => Glyph([0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]),
        '.' => Glyph([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100]),
        '/' => Glyph([0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000]),
        '0' => Glyph([0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
        '1' => Glyph([0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
        '2' => Glyph([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
        '3' => Glyph([0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
        '4' => Glyph([0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
        '5' => Glyph([0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
        '6' => Glyph([0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
        '7' => Glyph([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
        '8' => Glyph([0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
        '9' => Glyph([0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
        ':' => Glyph([0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000]),
        ';' => Glyph([0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b00100, 0b01000]),
        '<' => Glyph([0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010]),
        '=' => Glyph([0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000]),
        '>' => Glyph([0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000]),
        '?' => Glyph([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100]),
        '@' => Glyph([0b01110, 0b10001, 0b00001, 0b01101, 0b10101, 0b10101, 0b01110]),
        'A' => Glyph([0b01110, 0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001]),
        'B' => Glyph([0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
        'C' => Glyph([0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
        'D' => Glyph([0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100]),
        'E' => Glyph([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
        'F' => Glyph([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
        'G' => Glyph([0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]),
        'H' => Glyph([0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'I' => Glyph([0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
        'J' => Glyph([0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
        'K' => Glyph([0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
        'L' => Glyph([0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
        'M' => Glyph([0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
        'N' => Glyph([0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001]),
        'O' => Glyph([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'P' => Glyph([0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
        'Q' => Glyph([0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
        'R' => Glyph([0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
        'S' => Glyph([0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
        'T' => Glyph([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
        'U' => Glyph([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'V' => Glyph([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
        'W' => Glyph([0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010]),
        'X' => Glyph([0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
        'Y' => Glyph([0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100]),
        'Z' => Glyph([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
        '[' => Glyph([0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110]),
        '\\' => Glyph([0b00000, 0b10000, 0b01000, 0b00100, 0b00010, 0b00001, 0b00000]),
        ']' => Glyph([0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110]),
        '^' => Glyph([0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000]),
        '_' => Glyph([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111]),
        '`' => Glyph([0b01000, 0b00100, 0b00010, 0b00000, 0b00000, 0b00000, 0b00000]),
        'a' => Glyph([0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111]),
        'b' => Glyph([0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110]),
        'c' => Glyph([0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110]),
        'd' => Glyph([0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111]),
        'e' => Glyph([0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110]),
        'f' => Glyph([0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000]),
        'g' => Glyph([0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]),
        'h' => Glyph([0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001]),
        'i' => Glyph([0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110]),
        'j' => Glyph([0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100]),
        'k' => Glyph([0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010]),
        'l' => Glyph([0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
        'm' => Glyph([0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001]),
        'n' => Glyph([0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001]),
        'o' => Glyph([0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110]),
        'p' => Glyph([0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000]),
        'q' => Glyph([0b00000, 0b00000, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001]),
        'r' => Glyph([0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000]),
        's' => Glyph([0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110]),
        't' => Glyph([0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110]),
        'u' => Glyph([0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101]),
        'v' => Glyph([0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
        'w' => Glyph([0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010]),
        'x' => Glyph([0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001]),
        'y' => Glyph([0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]),
        'z' => Glyph([0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111]),
        '{' => Glyph([0b00010, 0b00100, 0b00100, 0b01000, 0b00100, 0b00100, 0b00010]),
        '|' => Glyph([0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
        '}' => Glyph([0b01000, 0b00100, 0b00100, 0b00010, 0b00100, 0b00100, 0b01000]),
        '~' => Glyph([0b00000, 0b00000, 0b01000, 0b10101, 0b00010, 0b00000, 0b00000]),
        '↑' => Glyph([0b00100, 0b01110, 0b10101, 0b00100, 0b00100, 0b00100, 0b00100]),
        '↓' => Glyph([0b00100, 0b00100, 0b00100, 0b00100, 0b10101, 0b01110, 0b00100]),
        '←' => Glyph([0b00000, 0b00100, 0b01000, 0b11111, 0b01000, 0b00100, 0b00000]),
        '→' => Glyph([0b00000, 0b00100, 0b00010, 0b11111, 0b00010, 0b00100, 0b00000]),
        '°' => Glyph([0b01100, 0b10010, 0b10010, 0b01100, 0b00000, 0b00000, 0b00000]),
        '€' => Glyph([0b00111, 0b01000, 0b11110, 0b01000, 0b11110, 0b01000, 0b00111]),
        _ => Glyph::BLANK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_char_is_blank_and_stable() {
        let a = get_pattern('☃');
        let b = get_pattern('☃');
        assert_eq!(a, b);
        assert_eq!(a, get_pattern(' '));
        assert!(a.is_blank());
        assert!(!has_glyph('☃'));
    }

    #[test]
    fn arrows_differ_from_space() {
        let space = get_pattern(' ');
        for ch in ['↑', '↓', '←', '→'] {
            assert_ne!(get_pattern(ch), space, "{} should not be blank", ch);
            assert!(has_glyph(ch));
        }
        assert_ne!(get_pattern('↑'), get_pattern('↓'));
    }

    #[test]
    fn every_printable_ascii_has_bitmap() {
        for b in 0x21u8..=0x7e {
            let ch = b as char;
            assert!(!get_pattern(ch).is_blank(), "missing glyph for {:?}", ch);
        }
    }

    #[test]
    fn glyph_rows_fit_five_columns() {
        for b in 0x20u8..=0x7e {
            let g = get_pattern(b as char);
            assert!(g.0.iter().all(|r| *r < 0b100000));
        }
    }

    #[test]
    fn bit_reads_left_to_right() {
        let l = get_pattern('L');
        assert!(l.bit(0, 0));
        assert!(!l.bit(0, 4));
        assert!(l.bit(6, 4));
        assert!(!l.bit(7, 0));
        assert!(!l.bit(0, 5));
        assert_eq!(get_pattern('I').lit_count(), 11);
    }
}
