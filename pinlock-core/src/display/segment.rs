//! Segment encoding tables
//!
//! Patterns are for a common-anode digit: bit 0 is segment `a` through
//! bit 6 for `g`, bit 7 is the decimal point, and a 0 bit lights the
//! segment.
//!
//! ```text
//!    aaa
//!   f   b
//!    ggg
//!   e   c
//!    ddd  dp
//! ```

use crate::state::CELL_COUNT;

/// All segments off
pub const BLANK: u8 = 0xFF;

/// All segments on, decimal point included
pub const SOLID: u8 = 0x00;

/// Digits 0-9, then the blank code (also used for [`EMPTY`](crate::state::EMPTY)) and the solid code
pub const DIGITS: [u8; 12] = [
    0xC0, 0xF9, 0xA4, 0xB0, 0x99, 0x92, 0x83, 0xF8, 0x80, 0x98, BLANK, SOLID,
];

/// Device banner scrolled after a correct password, in reading order
pub const BANNER: [u8; 8] = encode_text(b"16F887  ");

/// "Erro", in slot order (slot 0 is the rightmost digit)
pub const ERROR_BANNER: [u8; CELL_COUNT] = reversed(encode_text(b"Erro"));

/// Pattern for a buffer cell
///
/// Codes past the table render blank.
pub fn encode(code: u8) -> u8 {
    DIGITS.get(usize::from(code)).copied().unwrap_or(BLANK)
}

/// Pattern for an ASCII character the banners use
pub const fn glyph(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => DIGITS[(c - b'0') as usize],
        b'C' => 0xC6,
        b'E' => 0x86,
        b'F' => 0x8E,
        b'I' => 0xF9,
        b'P' => 0x8C,
        b'o' => 0xA3,
        b'r' => 0xAF,
        b'-' => 0xBF,
        _ => BLANK,
    }
}

/// Encode a fixed-length string
pub const fn encode_text<const N: usize>(text: &[u8; N]) -> [u8; N] {
    let mut out = [BLANK; N];
    let mut i = 0;
    while i < N {
        out[i] = glyph(text[i]);
        i += 1;
    }
    out
}

const fn reversed<const N: usize>(patterns: [u8; N]) -> [u8; N] {
    let mut out = [BLANK; N];
    let mut i = 0;
    while i < N {
        out[i] = patterns[N - 1 - i];
        i += 1;
    }
    out
}
