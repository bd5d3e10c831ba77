//! Image loading pipeline module
//!
//! This module provides a structured approach to image decoding, with separate
//! modules for the PPM decoder, shared error types and load orchestration.

pub mod common;
pub mod pipeline;
pub mod ppm;

pub use common::{
    DecodeError,
    Result,
    SampleError,
};

pub use ppm::{
    DecodeConfig,
    DecodeConfigBuilder,
    Image,
    ImageReader,
    NumberParsing,
    PpmFormat,
    PpmHeader,
    PpmReader,
    RasterSeparator,
    RgbSample,
};

pub use pipeline::{
    ImageLoadPipeline,
    decode_ppm_file,
};
