//! A drawing surface backed by an HTML `<canvas>` element.
//!
//! The canvas itself only exists on `wasm32` targets. Colour conversion is
//! plain Rust and available everywhere.

use image::Rgba;

#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasEnvironment, CanvasSurface};

/// The selector used to find the canvas when none is given.
pub const DEFAULT_SELECTOR: &str = "canvas";

/// Format a colour as a CSS `rgba()` value for `fillStyle`.
pub fn css_color(color: Rgba<u8>) -> String {
    let Rgba([r, g, b, a]) = color;
    format!("rgba({r}, {g}, {b}, {})", f32::from(a) / 255.0)
}
