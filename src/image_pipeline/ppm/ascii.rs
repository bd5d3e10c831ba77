//! `P3` raster decoding: one decimal token per channel.

use std::io::Read;

use tracing::trace;

use crate::image_pipeline::common::error::{DecodeError, Result};
use crate::image_pipeline::ppm::header::PpmHeader;
use crate::image_pipeline::ppm::sample::{allocate_pixels, normalize_sample, parse_integer};
use crate::image_pipeline::ppm::tokenizer::Tokenizer;
use crate::image_pipeline::ppm::types::{NumberParsing, RgbSample};

pub fn decode_ascii<R: Read>(
    tokenizer: &mut Tokenizer<R>,
    header: &PpmHeader,
    parsing: NumberParsing,
) -> Result<Vec<RgbSample>> {
    let mut pixels = allocate_pixels(header)?;

    for row in 0..header.height {
        for _ in 0..header.width {
            let r = read_sample(tokenizer, header.maxval, parsing)?;
            let g = read_sample(tokenizer, header.maxval, parsing)?;
            let b = read_sample(tokenizer, header.maxval, parsing)?;
            pixels.push(RgbSample { r, g, b });
        }
        trace!(row, "Decoded P3 row");
    }

    Ok(pixels)
}

fn read_sample<R: Read>(tokenizer: &mut Tokenizer<R>, maxval: u16, parsing: NumberParsing) -> Result<f32> {
    tokenizer.skip_whitespace()?;
    let token = tokenizer.read_token()?;
    if token.is_empty() {
        return Err(DecodeError::InvalidFormat(
            "expected a color value but read nothing".to_string(),
        ));
    }
    let value = parse_integer(token, parsing).ok_or_else(|| {
        DecodeError::InvalidFormat(format!(
            "color sample is not a number: '{}'",
            String::from_utf8_lossy(token)
        ))
    })?;
    normalize_sample(value, maxval)
}
