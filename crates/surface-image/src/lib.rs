//! A headless drawing surface backed by an in-memory RGBA image.

use std::path::Path;

use image::{ImageBuffer, ImageResult, Rgba, RgbaImage};
use surface::{Environment, Rect, Surface, SurfaceError};

/// The colour a cleared region is reset to, matching a freshly cleared
/// browser canvas.
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// The fill colour used until [`Surface::set_fill_color`] is called: opaque
/// black, the same as a canvas' initial `fillStyle`.
pub const DEFAULT_FILL: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// A [`Surface`] that rasterizes into an [`image::RgbaImage`].
///
/// Useful for running without a window, for screenshots, and for checking
/// rendered output pixel by pixel.
#[derive(Clone, Debug)]
pub struct ImageSurface {
    buf: RgbaImage,
    fill: Rgba<u8>,
}

impl ImageSurface {
    /// Create an empty, zero-sized surface. It becomes usable once resized.
    pub fn new() -> Self {
        Self::with_size(0, 0)
    }

    /// Create a fully transparent surface of the given size.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            buf: ImageBuffer::from_pixel(width, height, BACKGROUND),
            fill: DEFAULT_FILL,
        }
    }

    /// Return the image as a regular RGBA8 image from the [`image`] crate.
    #[inline]
    pub fn as_rgba8_image(&self) -> &RgbaImage {
        &self.buf
    }

    /// Consume the surface and return its image.
    pub fn into_rgba8_image(self) -> RgbaImage {
        self.buf
    }

    /// Write the current contents to disk. The format is picked from the
    /// file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "Saving surface image");
        self.buf.save(path)
    }

    fn paint(&mut self, rect: Rect, color: Rgba<u8>) {
        let (width, height) = self.buf.dimensions();
        let Some((x0, y0, x1, y1)) = rect.clip_to(width, height) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                self.buf.put_pixel(x, y, color);
            }
        }
    }
}

impl Default for ImageSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for ImageSurface {
    #[inline]
    fn dimensions(&self) -> (u32, u32) {
        self.buf.dimensions()
    }

    fn resize(&mut self, width: u32, height: u32) {
        tracing::debug!(width, height, "Resizing image surface");
        self.buf = ImageBuffer::from_pixel(width, height, BACKGROUND);
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.paint(rect, BACKGROUND);
    }

    #[inline]
    fn set_fill_color(&mut self, color: Rgba<u8>) {
        self.fill = color;
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.paint(rect, self.fill);
    }
}

/// An [`Environment`] that always has a surface to give: a fresh
/// [`ImageSurface`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessEnvironment;

impl Environment for HeadlessEnvironment {
    type Surface = ImageSurface;

    fn acquire_surface(&self) -> Result<ImageSurface, SurfaceError> {
        Ok(ImageSurface::new())
    }
}

#[cfg(test)]
mod tests {
    use display::{DisplayConfig, PixelDisplay};

    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn fill_and_clear_paint_the_rect() {
        let mut surface = ImageSurface::with_size(4, 4);
        surface.set_fill_color(RED);
        surface.fill_rect(Rect::from_size(4, 4));
        surface.clear_rect(Rect::new(1, 1, 2, 2));

        let img = surface.as_rgba8_image();
        assert_eq!(img[(0, 0)], RED);
        assert_eq!(img[(3, 3)], RED);
        assert_eq!(img[(1, 1)], BACKGROUND);
        assert_eq!(img[(2, 2)], BACKGROUND);
        assert_eq!(img[(3, 1)], RED);
    }

    #[test]
    fn drawing_is_clipped_to_the_image() {
        let mut surface = ImageSurface::with_size(3, 2);
        surface.set_fill_color(RED);
        surface.fill_rect(Rect::square(2, 1, 5));
        surface.fill_rect(Rect::square(10, 10, 5));

        let img = surface.as_rgba8_image();
        let lit = img.pixels().filter(|p| **p == RED).count();
        assert_eq!(lit, 1);
        assert_eq!(img[(2, 1)], RED);
    }

    #[test]
    fn fills_default_to_opaque_black() {
        let mut surface = ImageSurface::with_size(2, 1);
        surface.fill_rect(Rect::square(0, 0, 1));

        let img = surface.as_rgba8_image();
        assert_eq!(img[(0, 0)], DEFAULT_FILL);
        assert_eq!(img[(1, 0)], BACKGROUND);
        assert_eq!(DEFAULT_FILL, display::config::DEFAULT_FOREGROUND);
    }

    #[test]
    fn resize_starts_from_a_transparent_image() {
        let mut surface = ImageSurface::with_size(2, 2);
        surface.set_fill_color(RED);
        surface.fill_rect(Rect::from_size(2, 2));
        surface.resize(5, 3);

        assert_eq!(surface.dimensions(), (5, 3));
        assert!(surface.as_rgba8_image().pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn rendered_pixels_match_the_grid() {
        let mut display =
            PixelDisplay::new(&HeadlessEnvironment, DisplayConfig::default().with_scale(2)).unwrap();
        display.toggle_pixel(0, 0);
        display.toggle_pixel(-1, -1);
        display.render();

        let img = display.surface().as_rgba8_image();
        assert_eq!(img.dimensions(), (128, 64));

        let black = DEFAULT_FILL;
        for (x, y) in [(0, 0), (1, 1), (126, 62), (127, 63)] {
            assert_eq!(img[(x, y)], black, "({x}, {y}) should be lit");
        }
        for (x, y) in [(2, 0), (0, 2), (125, 63), (64, 32)] {
            assert_eq!(img[(x, y)], BACKGROUND, "({x}, {y}) should be blank");
        }
        assert_eq!(img.pixels().filter(|p| **p == black).count(), 2 * 4);
    }

    #[test]
    fn rerendering_after_a_toggle_erases_the_old_square() {
        let mut display =
            PixelDisplay::new(&HeadlessEnvironment, DisplayConfig::new(1)).unwrap();
        display.toggle_pixel(10, 10);
        display.render();
        let first = display.surface().as_rgba8_image().clone();

        display.render();
        assert_eq!(display.surface().as_rgba8_image(), &first);

        display.toggle_pixel(10, 10);
        display.render();
        let img = display.into_surface().into_rgba8_image();
        assert!(img.pixels().all(|p| *p == BACKGROUND));
    }
}
