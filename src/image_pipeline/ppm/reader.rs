use std::io::Read;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::ppm::types::{DecodeConfig, Image};

pub trait ImageReader {
    fn read_image(&self, source: &mut dyn Read, config: &DecodeConfig) -> Result<Image>;
}
