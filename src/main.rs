// The native binary renders to an image file. Browser builds start from
// `pixel_canvas::run` instead.
cfg_if::cfg_if! {
    if #[cfg(not(target_arch = "wasm32"))] {
        use std::path::PathBuf;

        use image::Rgba;
        use pixel_canvas::{color::parse_hex_color, DisplayConfig};
        use structopt::StructOpt;

        #[derive(Debug, StructOpt)]
        #[structopt(
            name = "pixel-canvas",
            about = "Draw hex digits onto a 64x32 pixel display and save it as an image."
        )]
        struct Opt {
            /// Image pixels per display pixel.
            #[structopt(short, long, default_value = "10")]
            scale: u32,

            /// Colour of lit pixels, as RRGGBB or RRGGBBAA.
            #[structopt(short, long, default_value = "000000", parse(try_from_str = parse_hex_color))]
            foreground: Rgba<u8>,

            /// Where to write the rendered display. The format follows the extension.
            #[structopt(short, long, default_value = "display.png", parse(from_os_str))]
            output: PathBuf,

            /// Lines of hex digits to draw. Defaults to a sample of every digit.
            lines: Vec<String>,
        }

        fn main() -> color_eyre::Result<()> {
            pixel_canvas::setup_logging()?;

            let opt = Opt::from_args();
            tracing::debug!(?opt, "Parsed command line");

            let config = DisplayConfig::new(opt.scale).with_foreground(opt.foreground);
            pixel_canvas::render_to_png(config, opt.lines.as_slice(), &opt.output)
        }
    } else {
        fn main() {}
    }
}
