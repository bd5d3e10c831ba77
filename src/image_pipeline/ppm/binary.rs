//! `P6` raster decoding: fixed-width big-endian samples, read a row at a time.

use std::io::Read;

use tracing::trace;

use crate::image_pipeline::common::error::{DecodeError, Result};
use crate::image_pipeline::ppm::header::PpmHeader;
use crate::image_pipeline::ppm::sample::{allocate_pixels, normalize_sample};
use crate::image_pipeline::ppm::tokenizer::Tokenizer;
use crate::image_pipeline::ppm::types::RgbSample;

const CHANNELS: usize = 3;

/// Decodes the raster. The separator after maxval must already be consumed.
pub fn decode_binary<R: Read>(tokenizer: &mut Tokenizer<R>, header: &PpmHeader) -> Result<Vec<RgbSample>> {
    let mut pixels = allocate_pixels(header)?;
    if header.pixel_count() == Some(0) {
        return Ok(pixels);
    }

    let sample_len = header.bytes_per_sample();
    let pixel_len = CHANNELS * sample_len;
    let row_len = (header.width as usize)
        .checked_mul(pixel_len)
        .ok_or(DecodeError::InvalidDimensions(header.width, header.height))?;
    let mut row = vec![0u8; row_len];

    for y in 0..header.height {
        tokenizer.read_exact(&mut row)?;

        for pixel in row.chunks_exact(pixel_len) {
            let mut channels = [0.0f32; CHANNELS];
            for (channel, word) in channels.iter_mut().zip(pixel.chunks_exact(sample_len)) {
                let value = if sample_len == 1 {
                    u16::from(word[0])
                } else {
                    u16::from_be_bytes([word[0], word[1]])
                };
                *channel = normalize_sample(i64::from(value), header.maxval)?;
            }
            let [r, g, b] = channels;
            pixels.push(RgbSample { r, g, b });
        }
        trace!(row = y, "Decoded P6 row");
    }

    Ok(pixels)
}
