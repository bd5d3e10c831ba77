//! Integer parsing and sample normalization shared by the header and both raster decoders.

use crate::image_pipeline::common::error::{DecodeError, Result, SampleError};
use crate::image_pipeline::ppm::header::PpmHeader;
use crate::image_pipeline::ppm::types::{NumberParsing, RgbSample};

/// Parses a decimal token, `None` when strict parsing rejects it.
pub fn parse_integer(token: &[u8], parsing: NumberParsing) -> Option<i64> {
    match parsing {
        NumberParsing::Strict => std::str::from_utf8(token).ok()?.parse().ok(),
        NumberParsing::Lenient => Some(parse_leading_integer(token)),
    }
}

/// `atoi`-style: optional sign then the longest run of digits, saturating.
fn parse_leading_integer(token: &[u8]) -> i64 {
    let (negative, digits) = match token.first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let magnitude = digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, &b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}

/// Range-checks `value` against `maxval` and scales it into `[0, 1]`.
///
/// A maxval of zero only admits zero samples, which normalize to 0.0.
pub fn normalize_sample(value: i64, maxval: u16) -> Result<f32> {
    if value < 0 {
        return Err(SampleError::Negative(value).into());
    }
    if value > i64::from(maxval) {
        return Err(SampleError::ExceedsMaximum { value, maxval }.into());
    }
    if maxval == 0 {
        return Ok(0.0);
    }
    Ok(value as f32 / f32::from(maxval))
}

/// Empty buffer with room for every pixel the header declares.
pub fn allocate_pixels(header: &PpmHeader) -> Result<Vec<RgbSample>> {
    let count = header
        .pixel_count()
        .ok_or(DecodeError::InvalidDimensions(header.width, header.height))?;

    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(count)
        .map_err(|_| DecodeError::InvalidDimensions(header.width, header.height))?;
    Ok(pixels)
}
