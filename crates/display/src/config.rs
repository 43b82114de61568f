//! Construction-time settings for a [`PixelDisplay`](crate::PixelDisplay).

use image::Rgba;

/// The default number of surface units per logical pixel edge.
pub const DEFAULT_SCALE: u32 = 10;

/// The default colour of lit pixels: opaque black.
pub const DEFAULT_FOREGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Settings fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Surface units per logical pixel edge. Must be non-zero.
    pub scale: u32,
    /// Fill colour for lit pixels.
    pub foreground: Rgba<u8>,
}

impl DisplayConfig {
    pub const fn new(scale: u32) -> Self {
        Self {
            scale,
            foreground: DEFAULT_FOREGROUND,
        }
    }

    #[must_use]
    pub const fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub const fn with_foreground(mut self, foreground: Rgba<u8>) -> Self {
        self.foreground = foreground;
        self
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_black_at_ten_units_per_pixel() {
        let config = DisplayConfig::default();
        assert_eq!(config.scale, 10);
        assert_eq!(config.foreground, Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn builder_setters_override_defaults() {
        let config = DisplayConfig::default()
            .with_scale(3)
            .with_foreground(Rgba([0x33, 0xff, 0x66, 0xff]));
        assert_eq!(config.scale, 3);
        assert_eq!(config.foreground, Rgba([0x33, 0xff, 0x66, 0xff]));
    }
}
