use color_eyre::Result;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod banner;
pub mod color;

pub use display::{DisplayConfig, DisplayError, PixelDisplay};

/// Where the banner's top-left corner goes.
pub const BANNER_ORIGIN: (i32, i32) = (2, 2);

/// Draw `lines` of hex digits (or the default banner, if there are none),
/// render them once and save the result as an image at `path`.
#[cfg(not(target_arch = "wasm32"))]
pub fn render_to_png<L: AsRef<str>>(
    config: DisplayConfig,
    lines: &[L],
    path: &std::path::Path,
) -> Result<()> {
    use color_eyre::eyre::WrapErr;
    use surface_image::HeadlessEnvironment;

    let mut screen = PixelDisplay::new(&HeadlessEnvironment, config)
        .wrap_err("Failed to set up the pixel display")?;

    let (x, y) = BANNER_ORIGIN;
    let collided = if lines.is_empty() {
        banner::draw_lines(&mut screen, &banner::DEFAULT_LINES[..], x, y)
    } else {
        banner::draw_lines(&mut screen, lines, x, y)
    };
    if collided {
        tracing::warn!("Some glyphs overlapped and erased each other's pixels");
    }

    screen.render();
    screen
        .surface()
        .save(path)
        .wrap_err_with(|| format!("Failed to save {}", path.display()))?;

    let lit_pixels = screen.lit_count();
    tracing::info!(path = %path.display(), lit_pixels, "Rendered display");

    Ok(())
}

/// Browser entry point: draw the default banner onto the page's `<canvas>`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    use surface_canvas::CanvasEnvironment;

    setup_logging().map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut screen = PixelDisplay::new(&CanvasEnvironment::default(), DisplayConfig::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let (x, y) = BANNER_ORIGIN;
    banner::draw_lines(&mut screen, &banner::DEFAULT_LINES[..], x, y);
    screen.render();

    Ok(())
}

/// Install the panic/error reporter and a `RUST_LOG`-driven subscriber.
pub fn setup_logging() -> Result<()> {
    use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

    let default_level = if cfg!(debug_assertions) {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    #[cfg(not(target_arch = "wasm32"))]
    let output = {
        color_eyre::install()?;
        fmt::layer().compact()
    };

    #[cfg(target_arch = "wasm32")]
    let output = {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        fmt::layer()
            .with_ansi(false)
            .without_time()
            .with_writer(tracing_web::MakeConsoleWriter)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .try_init()?;

    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::path::PathBuf;

    use image::Rgba;

    use super::*;

    fn scratch_png(name: &str) -> PathBuf {
        let path =
            std::env::temp_dir().join(format!("pixel-canvas-{}-{name}.png", std::process::id()));
        let _ = std::fs::remove_file(&path);
        path
    }

    fn glyph_cells(lines: &[&str]) -> usize {
        lines
            .iter()
            .flat_map(|line| line.chars())
            .filter_map(banner::Glyph::from_char)
            .map(|glyph| {
                glyph
                    .rows()
                    .iter()
                    .map(|row| row.count_ones() as usize)
                    .sum::<usize>()
            })
            .sum()
    }

    #[test]
    fn saved_image_matches_the_drawn_text() {
        let path = scratch_png("eight");
        let foreground = Rgba([0x33, 0xff, 0x66, 0xff]);
        let config = DisplayConfig::new(2).with_foreground(foreground);

        render_to_png(config, &["8"][..], &path).unwrap();

        let img = image::open(&path).unwrap().into_rgba8();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(img.dimensions(), (128, 64));
        // The glyph's top-left cell sits at the banner origin, doubled.
        assert_eq!(img[(4, 4)], foreground);
        assert_eq!(img[(0, 0)], Rgba([0, 0, 0, 0]));
        assert_eq!(
            img.pixels().filter(|p| **p == foreground).count(),
            glyph_cells(&["8"]) * 4
        );
    }

    #[test]
    fn no_lines_draws_the_default_banner() {
        let path = scratch_png("default");
        let no_lines: &[&str] = &[];

        render_to_png(DisplayConfig::new(1), no_lines, &path).unwrap();

        let img = image::open(&path).unwrap().into_rgba8();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(img.dimensions(), (64, 32));
        let black = Rgba([0, 0, 0, 255]);
        assert_eq!(
            img.pixels().filter(|p| **p == black).count(),
            glyph_cells(&banner::DEFAULT_LINES[..])
        );
    }

    #[test]
    fn bad_scale_fails_without_writing_anything() {
        let path = scratch_png("bad-scale");

        let err = render_to_png(DisplayConfig::new(0), &["0"][..], &path).unwrap_err();

        assert_eq!(
            err.downcast_ref::<DisplayError>(),
            Some(&DisplayError::InvalidScale(0))
        );
        assert!(!path.exists());
    }
}
