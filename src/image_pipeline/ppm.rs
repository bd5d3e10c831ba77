//! PPM decoding module
//!
//! This module decodes Netpbm portable pixmaps, both the plain-text `P3`
//! and the raw binary `P6` variants, into normalized floating-point RGB.

mod ascii;
mod binary;
mod ppm_reader;
mod reader;
mod sample;
pub mod header;
pub mod tokenizer;
pub mod types;


pub use header::{PpmFormat, PpmHeader, read_header};
pub use ppm_reader::PpmReader;
pub use reader::ImageReader;
pub use tokenizer::Tokenizer;
pub use types::{DecodeConfig, DecodeConfigBuilder, DEFAULT_MAX_TOKEN_LENGTH, Image, NumberParsing, RasterSeparator, RgbSample};
