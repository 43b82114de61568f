use image::Rgba;
use surface::{Environment, Rect, Surface, SurfaceError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::{css_color, DEFAULT_SELECTOR};

/// Finds a `<canvas>` in the current page's document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasEnvironment {
    selector: String,
}

impl CanvasEnvironment {
    /// Look the canvas up with a CSS selector, e.g. `"#rust-chip-canvas"`.
    pub fn with_selector(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    fn find_canvas(&self) -> Result<HtmlCanvasElement, SurfaceError> {
        let document = web_sys::window()
            .and_then(|win| win.document())
            .ok_or_else(|| SurfaceError::unavailable("no document to search"))?;

        let element = document
            .query_selector(&self.selector)
            .map_err(|_| {
                SurfaceError::unavailable(format!("invalid selector {:?}", self.selector))
            })?
            .ok_or_else(|| {
                SurfaceError::unavailable(format!("nothing matches {:?}", self.selector))
            })?;

        element.dyn_into::<HtmlCanvasElement>().map_err(|_| {
            SurfaceError::unavailable(format!("{:?} is not a <canvas> element", self.selector))
        })
    }
}

impl Default for CanvasEnvironment {
    fn default() -> Self {
        Self::with_selector(DEFAULT_SELECTOR)
    }
}

impl Environment for CanvasEnvironment {
    type Surface = CanvasSurface;

    fn acquire_surface(&self) -> Result<CanvasSurface, SurfaceError> {
        let canvas = self.find_canvas()?;

        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(SurfaceError::DrawingContextUnavailable)?;

        tracing::info!(selector = %self.selector, "Acquired canvas 2D context");

        Ok(CanvasSurface { canvas, context })
    }
}

/// A [`Surface`] that draws through a canvas' 2D rendering context.
///
/// The canvas element stays owned by the page.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    #[inline]
    fn dimensions(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear_rect(&mut self, rect: Rect) {
        let (x, y, w, h) = to_f64(rect);
        self.context.clear_rect(x, y, w, h);
    }

    fn set_fill_color(&mut self, color: Rgba<u8>) {
        #[allow(deprecated)]
        self.context
            .set_fill_style(&JsValue::from_str(&css_color(color)));
    }

    fn fill_rect(&mut self, rect: Rect) {
        let (x, y, w, h) = to_f64(rect);
        self.context.fill_rect(x, y, w, h);
    }
}

#[inline]
fn to_f64(rect: Rect) -> (f64, f64, f64, f64) {
    (
        f64::from(rect.x),
        f64::from(rect.y),
        f64::from(rect.width),
        f64::from(rect.height),
    )
}
