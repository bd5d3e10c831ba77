//! PPM image reader.
//!
//! Drives the tokenizer through the header, then hands the stream to the
//! `P3` or `P6` raster decoder the magic number selects.

use std::io::Read;

use tracing::{debug, info_span};

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::ppm::ascii::decode_ascii;
use crate::image_pipeline::ppm::binary::decode_binary;
use crate::image_pipeline::ppm::header::{PpmFormat, read_header};
use crate::image_pipeline::ppm::reader::ImageReader;
use crate::image_pipeline::ppm::tokenizer::Tokenizer;
use crate::image_pipeline::ppm::types::{DecodeConfig, Image, RasterSeparator};

/// Reader for `P3` and `P6` portable pixmaps.
pub struct PpmReader;

impl ImageReader for PpmReader {
    /// Decodes a whole image from `source`.
    ///
    /// Nothing is returned until every pixel has been read; any failure
    /// discards the partially filled buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ezview_rs::image_pipeline::{DecodeConfig, ImageReader, PpmReader};
    ///
    /// let mut data: &[u8] = b"P3\n1 1\n255\n255 0 0\n";
    /// let image = PpmReader.read_image(&mut data, &DecodeConfig::default()).unwrap();
    /// assert_eq!((image.width, image.height), (1, 1));
    /// assert_eq!(image.pixels[0].r, 1.0);
    /// ```
    fn read_image(&self, source: &mut dyn Read, config: &DecodeConfig) -> Result<Image> {
        let mut tokenizer = Tokenizer::new(source, config.max_token_length);

        let header = {
            let _span = info_span!("read_header").entered();
            read_header(&mut tokenizer, config.number_parsing)?
        };

        config.check_dimensions(header.width, header.height)?;

        let pixels = {
            let _span = info_span!("decode_samples", format = %header.format).entered();
            match header.format {
                PpmFormat::Ascii => decode_ascii(&mut tokenizer, &header, config.number_parsing)?,
                PpmFormat::Binary => {
                    match config.raster_separator {
                        RasterSeparator::SkipWhitespace => tokenizer.skip_whitespace()?,
                        RasterSeparator::SingleByte => tokenizer.read_separator()?,
                    }
                    decode_binary(&mut tokenizer, &header)?
                }
            }
        };

        debug!("Decoded {} pixels", pixels.len());

        Ok(Image::new(header.width, header.height, pixels))
    }
}
