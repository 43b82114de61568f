//! Parsing colours given on the command line.

use image::Rgba;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Expected a colour as 6 or 8 hex digits (RRGGBB or RRGGBBAA), got {0:?}")]
    BadLength(String),

    #[error("Invalid hex digit in colour {0:?}")]
    BadDigit(String),
}

/// Parse `RRGGBB` or `RRGGBBAA`, with an optional leading `#`. Alpha defaults
/// to fully opaque.
pub fn parse_hex_color(input: &str) -> Result<Rgba<u8>, ColorParseError> {
    let hex = input.strip_prefix('#').unwrap_or(input);

    if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
        return Err(ColorParseError::BadLength(input.to_owned()));
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::BadDigit(input.to_owned()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| ColorParseError::BadDigit(input.to_owned()))
    };

    let alpha = if hex.len() == 8 { channel(6)? } else { 0xFF };
    let color = Rgba([channel(0)?, channel(2)?, channel(4)?, alpha]);

    tracing::debug!(input, ?color, "Parsed colour");
    Ok(color)
}
