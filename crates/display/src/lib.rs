//! The 64x32 monochrome CHIP8-style pixel display.
//!
//! [`PixelDisplay`] owns the logical pixel grid and projects it onto a
//! borrowed [`Surface`] on demand. It knows nothing about sprites or opcodes;
//! an emulator core drives it through [`PixelDisplay::toggle_pixel`],
//! [`PixelDisplay::clear`] and [`PixelDisplay::render`].

use image::Rgba;
use surface::{Environment, Rect, Surface, SurfaceError};
use thiserror::Error;

pub mod config;

pub use config::DisplayConfig;

/// Width of the logical grid, in pixels.
pub const COLUMNS: usize = 64;

/// Height of the logical grid, in pixels.
pub const ROWS: usize = 32;

/// The logical pixel grid, row-major: `grid[y][x]`.
pub type Grid = [[bool; COLUMNS]; ROWS];

/// A 64x32 grid of lit and unlit cells, blitted onto a surface at a fixed
/// integer scale. Lit cells are filled with the foreground colour; unlit
/// cells stay transparent.
///
/// Coordinates passed to [`Self::toggle_pixel`] and [`Self::pixel`] wrap
/// around both edges. Most CHIP8 references clip sprites at the edge of the
/// screen instead, so programs relying on clipping will look different here.
#[derive(Debug)]
pub struct PixelDisplay<S> {
    grid: Grid,
    scale: u32,
    surface_size: (u32, u32),
    foreground: Rgba<u8>,
    surface: S,
}

impl<S: Surface> PixelDisplay<S> {
    /// Acquire a surface from `environment` and build a display on top of it.
    ///
    /// Fails if the configured scale is zero or too large for the surface
    /// size to fit in a `u32`, if the environment has no
    /// surface, or if no 2D drawing context can be obtained for it.
    pub fn new<E>(environment: &E, config: DisplayConfig) -> Result<Self, DisplayError>
    where
        E: Environment<Surface = S>,
    {
        validate_scale(config.scale)?;

        let surface = environment.acquire_surface().map_err(|e| {
            tracing::error!(error = %e, "Failed to acquire a drawing surface");
            e
        })?;

        Self::with_surface(surface, config)
    }

    /// Build a display on top of a surface the caller already holds.
    ///
    /// The surface is resized to `64 * scale` by `32 * scale` units.
    pub fn with_surface(mut surface: S, config: DisplayConfig) -> Result<Self, DisplayError> {
        let (width, height) = validate_scale(config.scale)?;
        surface.resize(width, height);

        tracing::info!(
            scale = config.scale,
            width,
            height,
            "Initializing pixel display"
        );

        Ok(Self {
            grid: [[false; COLUMNS]; ROWS],
            scale: config.scale,
            surface_size: (width, height),
            foreground: config.foreground,
            surface,
        })
    }

    /// XOR a single pixel, wrapping the coordinates around the grid.
    ///
    /// Returns `true` if a lit pixel was switched off, which is how sprite
    /// collisions are detected.
    pub fn toggle_pixel(&mut self, x: i32, y: i32) -> bool {
        let (x, y) = wrap(x, y);
        let cell = &mut self.grid[y][x];
        *cell ^= true;

        !*cell
    }

    /// Switch every pixel off. The surface is left untouched until the next
    /// [`Self::render`].
    pub fn clear(&mut self) {
        self.grid = [[false; COLUMNS]; ROWS];
    }

    /// Redraw the whole grid onto the surface.
    ///
    /// The full surface is cleared first, then one square of side `scale` is
    /// filled per lit pixel. Unlit pixels are left as background.
    pub fn render(&mut self) {
        let (width, height) = self.surface_size;
        let scale = self.scale;

        self.surface.clear_rect(Rect::from_size(width, height));
        self.surface.set_fill_color(self.foreground);

        let mut drawn = 0usize;
        for (y, row) in self.grid.iter().enumerate() {
            for (x, _) in row.iter().enumerate().filter(|(_, lit)| **lit) {
                self.surface
                    .fill_rect(Rect::square(x as u32 * scale, y as u32 * scale, scale));
                drawn += 1;
            }
        }

        tracing::trace!(lit_pixels = drawn, "Rendered pixel display");
    }

    /// Whether the pixel at `(x, y)` is lit. Coordinates wrap like
    /// [`Self::toggle_pixel`].
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        let (x, y) = wrap(x, y);
        self.grid[y][x]
    }

    /// The whole logical grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The number of lit pixels.
    pub fn lit_count(&self) -> usize {
        self.grid
            .iter()
            .map(|row| row.iter().filter(|lit| **lit).count())
            .sum()
    }

    /// Return the dimensions of the logical grid as a pair of `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (COLUMNS as u32, ROWS as u32)
    }

    /// Return the dimensions of the scaled surface as a pair of `(width, height)`.
    #[inline]
    pub fn surface_dimensions(&self) -> (u32, u32) {
        self.surface_size
    }

    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub fn foreground(&self) -> Rgba<u8> {
        self.foreground
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Tear the display down, handing the surface back to the caller.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// Errors raised while constructing a [`PixelDisplay`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    #[error(
        "The display scale must be at least 1 surface unit per pixel and keep the \
        surface within u32 bounds, got {0}"
    )]
    InvalidScale(u32),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Check the scale and return the `(width, height)` of the scaled surface.
fn validate_scale(scale: u32) -> Result<(u32, u32), DisplayError> {
    let width = (COLUMNS as u32).checked_mul(scale);
    let height = (ROWS as u32).checked_mul(scale);

    match (width, height) {
        (Some(width), Some(height)) if scale > 0 => Ok((width, height)),
        _ => Err(DisplayError::InvalidScale(scale)),
    }
}

/// Map any pair of coordinates onto the grid, wrapping in both directions.
#[inline]
fn wrap(x: i32, y: i32) -> (usize, usize) {
    (
        x.rem_euclid(COLUMNS as i32) as usize,
        y.rem_euclid(ROWS as i32) as usize,
    )
}
