//! Decoded image types and decoder configuration

use crate::image_pipeline::common::error::{DecodeError, Result};

/// Longest header or sample token accepted by default; one byte short of a 1024 byte read buffer.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 1023;

/// One pixel, every component normalized to `[0, 1]`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RgbSample {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RgbSample {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// A fully decoded image
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Width of the image in pixels
    pub width: u32,
    /// Height of the image in pixels
    pub height: u32,
    /// Row-major pixels, top row first, exactly `width * height` of them
    pub pixels: Vec<RgbSample>,
}

impl Image {
    pub fn new(width: u32, height: u32, pixels: Vec<RgbSample>) -> Self {
        Self { width, height, pixels }
    }

    /// Pixel at column `x` of row `y`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&RgbSample> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Interleaved `[R, G, B, R, G, B, ...]` samples, ready to upload as an RGB float texture.
    pub fn to_rgb_f32(&self) -> Vec<f32> {
        self.pixels.iter().flat_map(|p| p.to_array()).collect()
    }
}

/// How header and sample tokens are turned into integers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberParsing {
    /// The whole token must be a base-10 integer
    #[default]
    Strict,
    /// `atoi` semantics: longest leading integer, anything else reads as 0
    Lenient,
}

/// What separates a `P6` header from its raster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RasterSeparator {
    /// A run of whitespace, with comments allowed after line breaks
    #[default]
    SkipWhitespace,
    /// Exactly one whitespace byte; raster bytes that look like whitespace are kept
    SingleByte,
}

/// Configuration for PPM decoding
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    /// Longest token the tokenizer will accumulate
    pub max_token_length: usize,
    /// Integer parsing mode for header fields and P3 samples
    pub number_parsing: NumberParsing,
    /// How the bytes between maxval and a binary raster are consumed
    pub raster_separator: RasterSeparator,
    /// Largest width or height accepted, checked before the pixel buffer is allocated
    pub max_dimension: Option<u32>,
    /// Whether the pipeline checks the decoded buffer against the declared size
    pub validate_dimensions: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
            number_parsing: NumberParsing::Strict,
            raster_separator: RasterSeparator::SkipWhitespace,
            max_dimension: None,
            validate_dimensions: true,
        }
    }
}

impl DecodeConfig {
    pub fn builder() -> DecodeConfigBuilder {
        DecodeConfigBuilder::default()
    }

    /// Fails if either side is larger than `max_dimension`.
    pub fn check_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if let Some(max) = self.max_dimension {
            if width > max || height > max {
                return Err(DecodeError::InvalidDimensions(width, height));
            }
        }
        Ok(())
    }
}

/// Builder for DecodeConfig
#[derive(Default)]
pub struct DecodeConfigBuilder {
    max_token_length: Option<usize>,
    number_parsing: Option<NumberParsing>,
    raster_separator: Option<RasterSeparator>,
    max_dimension: Option<Option<u32>>,
    validate_dimensions: Option<bool>,
}

impl DecodeConfigBuilder {
    pub fn max_token_length(mut self, length: usize) -> Self {
        self.max_token_length = Some(length);
        self
    }

    pub fn number_parsing(mut self, parsing: NumberParsing) -> Self {
        self.number_parsing = Some(parsing);
        self
    }

    pub fn raster_separator(mut self, separator: RasterSeparator) -> Self {
        self.raster_separator = Some(separator);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> DecodeConfig {
        let default = DecodeConfig::default();
        DecodeConfig {
            max_token_length: self.max_token_length.unwrap_or(default.max_token_length),
            number_parsing: self.number_parsing.unwrap_or(default.number_parsing),
            raster_separator: self.raster_separator.unwrap_or(default.raster_separator),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
        }
    }
}
