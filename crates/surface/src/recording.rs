//! A surface that draws nothing and remembers everything.
//!
//! Used to test display logic without a real rendering backend.

use image::Rgba;

use super::{Environment, Rect, Surface, SurfaceError};

/// A single call made against a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    Resize { width: u32, height: u32 },
    ClearRect(Rect),
    SetFillColor(Rgba<u8>),
    FillRect(Rect),
}

/// A [`Surface`] that records every call made against it, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call recorded so far.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Every rectangle filled so far, in order.
    pub fn filled_rects(&self) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillRect(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Forget all recorded calls. The surface keeps its size.
    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.calls.push(DrawCall::Resize { width, height });
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.calls.push(DrawCall::ClearRect(rect));
    }

    fn set_fill_color(&mut self, color: Rgba<u8>) {
        self.calls.push(DrawCall::SetFillColor(color));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.calls.push(DrawCall::FillRect(rect));
    }
}

/// An [`Environment`] that hands out [`RecordingSurface`]s, or fails on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordingEnvironment {
    #[default]
    Available,
    /// Behave as if there is no surface at all.
    MissingSurface,
    /// Behave as if the surface exists but has no 2D context.
    MissingContext,
}

impl Environment for RecordingEnvironment {
    type Surface = RecordingSurface;

    fn acquire_surface(&self) -> Result<RecordingSurface, SurfaceError> {
        match self {
            Self::Available => Ok(RecordingSurface::new()),
            Self::MissingSurface => Err(SurfaceError::unavailable("recording surface disabled")),
            Self::MissingContext => Err(SurfaceError::DrawingContextUnavailable),
        }
    }
}
