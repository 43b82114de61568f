//! Hex-digit glyphs, drawn onto a [`PixelDisplay`] the way a CHIP8 program
//! draws sprites: one XOR per set bit.

use display::PixelDisplay;
use strum::{EnumCount, EnumIter};
use surface::Surface;

/// Glyph width in pixels. Each row byte uses its top 4 bits.
pub const GLYPH_WIDTH: i32 = 4;

/// Glyph height in pixels.
pub const GLYPH_HEIGHT: i32 = 5;

/// Horizontal distance between the left edges of two neighbouring glyphs.
pub const ADVANCE: i32 = GLYPH_WIDTH + 1;

/// Vertical distance between two lines of text.
pub const LINE_HEIGHT: i32 = GLYPH_HEIGHT + 1;

/// What gets drawn when nothing else is asked for.
pub const DEFAULT_LINES: [&str; 3] = ["0123456789", "ABCDEF", "C0FFEE"];

/// The hexadecimal digits `0x0` through `0xF`, as 4x5 sprites.
#[derive(Debug, EnumCount, EnumIter, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Glyph {
    Hex0 = 0, Hex1, Hex2, Hex3, Hex4, Hex5, Hex6, Hex7, Hex8, Hex9,
    HexA, HexB, HexC, HexD, HexE, HexF,
}

impl Glyph {
    /// Look up the glyph for a hex digit, in either case.
    pub fn from_char(c: char) -> Option<Self> {
        use Glyph::*;

        let glyph = match c.to_digit(16)? {
            0x0 => Hex0,
            0x1 => Hex1,
            0x2 => Hex2,
            0x3 => Hex3,
            0x4 => Hex4,
            0x5 => Hex5,
            0x6 => Hex6,
            0x7 => Hex7,
            0x8 => Hex8,
            0x9 => Hex9,
            0xA => HexA,
            0xB => HexB,
            0xC => HexC,
            0xD => HexD,
            0xE => HexE,
            _ => HexF,
        };
        Some(glyph)
    }

    /// The sprite rows, top to bottom. The most significant bit is the
    /// leftmost pixel.
    pub const fn rows(&self) -> [u8; GLYPH_HEIGHT as usize] {
        match self {
            Glyph::Hex0 => [0xF0, 0x90, 0x90, 0x90, 0xF0],
            Glyph::Hex1 => [0x20, 0x60, 0x20, 0x20, 0x70],
            Glyph::Hex2 => [0xF0, 0x10, 0xF0, 0x80, 0xF0],
            Glyph::Hex3 => [0xF0, 0x10, 0xF0, 0x10, 0xF0],
            Glyph::Hex4 => [0x90, 0x90, 0xF0, 0x10, 0x10],
            Glyph::Hex5 => [0xF0, 0x80, 0xF0, 0x10, 0xF0],
            Glyph::Hex6 => [0xF0, 0x80, 0xF0, 0x90, 0xF0],
            Glyph::Hex7 => [0xF0, 0x10, 0x20, 0x40, 0x40],
            Glyph::Hex8 => [0xF0, 0x90, 0xF0, 0x90, 0xF0],
            Glyph::Hex9 => [0xF0, 0x90, 0xF0, 0x10, 0xF0],
            Glyph::HexA => [0xF0, 0x90, 0xF0, 0x90, 0x90],
            Glyph::HexB => [0xE0, 0x90, 0xE0, 0x90, 0xE0],
            Glyph::HexC => [0xF0, 0x80, 0x80, 0x80, 0xF0],
            Glyph::HexD => [0xE0, 0x90, 0x90, 0x90, 0xE0],
            Glyph::HexE => [0xF0, 0x80, 0xF0, 0x80, 0xF0],
            Glyph::HexF => [0xF0, 0x80, 0xF0, 0x80, 0x80],
        }
    }
}

/// XOR a glyph onto the display with its top-left corner at `(x, y)`.
///
/// Returns `true` if any lit pixel was erased.
pub fn draw_glyph<S: Surface>(display: &mut PixelDisplay<S>, glyph: Glyph, x: i32, y: i32) -> bool {
    let mut collided = false;

    for (dy, row) in (0..).zip(glyph.rows()) {
        for dx in 0..GLYPH_WIDTH {
            if row & (0x80 >> dx) != 0 {
                collided |= display.toggle_pixel(x + dx, y + dy);
            }
        }
    }

    if collided {
        tracing::debug!(?glyph, x, y, "Glyph erased lit pixels");
    }
    collided
}

/// Draw a line of hex digits left to right, starting at `(x, y)`.
///
/// Spaces leave a glyph-wide gap. Anything else that isn't a hex digit is
/// skipped. Returns `true` if any glyph erased a lit pixel.
pub fn draw_text<S: Surface>(display: &mut PixelDisplay<S>, text: &str, x: i32, y: i32) -> bool {
    let mut collided = false;
    let mut cursor = x;

    for c in text.chars() {
        if c == ' ' {
            cursor += ADVANCE;
            continue;
        }

        match Glyph::from_char(c) {
            Some(glyph) => {
                collided |= draw_glyph(display, glyph, cursor, y);
                cursor += ADVANCE;
            }
            None => tracing::warn!(character = ?c, "Skipping character with no glyph"),
        }
    }

    collided
}

/// Draw several lines of text, one below the other.
pub fn draw_lines<S, L>(display: &mut PixelDisplay<S>, lines: &[L], x: i32, y: i32) -> bool
where
    S: Surface,
    L: AsRef<str>,
{
    let mut collided = false;
    for (i, line) in (0..).zip(lines) {
        collided |= draw_text(display, line.as_ref(), x, y + i * LINE_HEIGHT);
    }
    collided
}
