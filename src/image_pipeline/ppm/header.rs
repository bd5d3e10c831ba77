//! `P3`/`P6` header parsing: magic number, width, height and maxval.

use std::fmt;
use std::io::Read;

use tracing::debug;

use crate::image_pipeline::common::error::{DecodeError, Result};
use crate::image_pipeline::ppm::sample::parse_integer;
use crate::image_pipeline::ppm::tokenizer::Tokenizer;
use crate::image_pipeline::ppm::types::NumberParsing;

/// Largest maxval a PPM header may declare.
pub const MAX_MAXVAL: u16 = u16::MAX;

/// Raster encoding named by the magic number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PpmFormat {
    /// `P3`: whitespace separated decimal samples
    Ascii,
    /// `P6`: raw big-endian samples, one or two bytes wide
    Binary,
}

impl PpmFormat {
    pub fn from_magic(magic: &[u8]) -> Option<Self> {
        match magic {
            b"P3" => Some(PpmFormat::Ascii),
            b"P6" => Some(PpmFormat::Binary),
            _ => None,
        }
    }

    pub fn magic(&self) -> &'static str {
        match self {
            PpmFormat::Ascii => "P3",
            PpmFormat::Binary => "P6",
        }
    }
}

impl fmt::Display for PpmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.magic())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpmHeader {
    pub format: PpmFormat,
    pub width: u32,
    pub height: u32,
    pub maxval: u16,
}

impl PpmHeader {
    /// Width of one binary sample: 1 byte below 256, 2 bytes otherwise.
    pub fn bytes_per_sample(&self) -> usize {
        if self.maxval < 256 { 1 } else { 2 }
    }

    pub fn pixel_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }
}

/// Parses `<magic> <width> <height> <maxval>`, leaving the stream on the
/// whitespace that follows maxval.
pub fn read_header<R: Read>(tokenizer: &mut Tokenizer<R>, parsing: NumberParsing) -> Result<PpmHeader> {
    let format = {
        let magic = tokenizer.read_token()?;
        PpmFormat::from_magic(magic).ok_or_else(|| {
            DecodeError::InvalidFormat(format!(
                "bad magic number '{}'",
                String::from_utf8_lossy(magic)
            ))
        })?
    };

    tokenizer.skip_whitespace()?;
    let width = read_dimension(tokenizer, "width", parsing)?;

    tokenizer.skip_whitespace()?;
    let height = read_dimension(tokenizer, "height", parsing)?;

    tokenizer.skip_whitespace()?;
    let value = read_field(tokenizer, "maximum color value", parsing)?;
    let maxval = u16::try_from(value).map_err(|_| {
        DecodeError::InvalidFormat(format!(
            "expected maximum color value between 0 and {}, got {}",
            MAX_MAXVAL, value
        ))
    })?;

    debug!(%format, width, height, maxval, "Parsed PPM header");

    Ok(PpmHeader {
        format,
        width,
        height,
        maxval,
    })
}

fn read_dimension<R: Read>(tokenizer: &mut Tokenizer<R>, field: &str, parsing: NumberParsing) -> Result<u32> {
    let value = read_field(tokenizer, field, parsing)?;
    u32::try_from(value)
        .map_err(|_| DecodeError::InvalidFormat(format!("{} out of range: {}", field, value)))
}

fn read_field<R: Read>(tokenizer: &mut Tokenizer<R>, field: &str, parsing: NumberParsing) -> Result<i64> {
    let token = tokenizer.read_token()?;
    if token.is_empty() {
        return Err(DecodeError::InvalidFormat(format!(
            "expected a {} value but read nothing",
            field
        )));
    }
    parse_integer(token, parsing).ok_or_else(|| {
        DecodeError::InvalidFormat(format!(
            "{} is not a number: '{}'",
            field,
            String::from_utf8_lossy(token)
        ))
    })
}
