//! Common tools for drawing onto a scaled visual surface.
//!
//! A [`Surface`] is the small set of 2D drawing primitives a pixel display
//! needs: clear a region, pick a fill colour, fill a rectangle. Backends
//! (an in-memory image, a browser canvas, a test recorder) implement it, and
//! an [`Environment`] hands one out when a display is constructed.

use std::fmt;

use image::Rgba;
use thiserror::Error;

pub mod recording;

/// An axis-aligned rectangle, in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle anchored at the origin covering `width` by `height` units.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// A square of side `side` with its top-left corner at `(x, y)`.
    #[inline]
    pub const fn square(x: u32, y: u32, side: u32) -> Self {
        Self::new(x, y, side, side)
    }

    /// Clip this rectangle against a `width` by `height` area anchored at the
    /// origin, returning the visible `(x0, y0, x1, y1)` span (end-exclusive).
    ///
    /// Returns `None` when nothing of the rectangle is visible.
    pub fn clip_to(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let x1 = self.x.saturating_add(self.width).min(width);
        let y1 = self.y.saturating_add(self.height).min(height);

        if self.x >= x1 || self.y >= y1 {
            None
        } else {
            Some((self.x, self.y, x1, y1))
        }
    }
}

/// A drawable 2D target that a display projects its pixels onto.
///
/// The surface is owned by whatever environment created it. A display only
/// ever resizes it once, during construction.
pub trait Surface: fmt::Debug {
    /// Return the dimensions of the surface as a pair of `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// Set the size of the surface, in surface units.
    ///
    /// Existing contents are not preserved.
    fn resize(&mut self, width: u32, height: u32);

    /// Erase a region back to the (transparent) background.
    fn clear_rect(&mut self, rect: Rect);

    /// Set the colour used by subsequent calls to [`Surface::fill_rect`].
    fn set_fill_color(&mut self, color: Rgba<u8>);

    /// Fill a region with the current fill colour.
    fn fill_rect(&mut self, rect: Rect);
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    #[inline]
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    #[inline]
    fn resize(&mut self, width: u32, height: u32) {
        (**self).resize(width, height)
    }

    #[inline]
    fn clear_rect(&mut self, rect: Rect) {
        (**self).clear_rect(rect)
    }

    #[inline]
    fn set_fill_color(&mut self, color: Rgba<u8>) {
        (**self).set_fill_color(color)
    }

    #[inline]
    fn fill_rect(&mut self, rect: Rect) {
        (**self).fill_rect(rect)
    }
}

/// Something that can hand out a drawing surface, such as a browser document
/// or a headless image allocator.
pub trait Environment {
    /// The type of surface this environment provides.
    type Surface: Surface;

    /// Look up a drawable surface and a 2D drawing context for it.
    fn acquire_surface(&self) -> Result<Self::Surface, SurfaceError>;
}

/// Reasons an [`Environment`] could not provide a [`Surface`].
///
/// Both are structural: the environment simply lacks what is needed, so there
/// is nothing to retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("Could not find a drawable surface: {what}")]
    SurfaceUnavailable { what: String },

    #[error("Could not obtain a 2D drawing context for the surface")]
    DrawingContextUnavailable,
}

impl SurfaceError {
    /// Shorthand for [`SurfaceError::SurfaceUnavailable`].
    pub fn unavailable(what: impl Into<String>) -> Self {
        Self::SurfaceUnavailable { what: what.into() }
    }
}
