use anyhow::{Context, bail};
use ezview_rs::image_pipeline::decode_ppm_file;
use ezview_rs::logger;

use tracing::{error, info};

const USAGE: &str = "\
Usage: ezview_rs <input.ppm>
\t input.ppm: The input image PPM file (P3 or P6)

\t Example: ezview_rs test.ppm
";

fn main() -> anyhow::Result<()> {
    logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input] = args.as_slice() else {
        error!("Expected exactly one argument, got {}", args.len());
        eprint!("{}", USAGE);
        bail!("invalid arguments");
    };

    let image = decode_ppm_file(input)
        .with_context(|| format!("An error occurred loading the source file '{}'", input))?;

    info!(
        width = image.width,
        height = image.height,
        pixels = image.pixels.len(),
        "Loaded {}",
        input
    );

    Ok(())
}
