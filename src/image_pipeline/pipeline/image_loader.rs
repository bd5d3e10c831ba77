use tracing::{info, instrument};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{DecodeError, Result},
    ppm::{DecodeConfig, Image, ImageReader, PpmReader},
};

pub struct ImageLoadPipeline<R: ImageReader> {
    reader: R,
    config: DecodeConfig,
}

impl ImageLoadPipeline<PpmReader> {
    pub fn new(config: DecodeConfig) -> Self {
        Self {
            reader: PpmReader,
            config,
        }
    }
}

impl Default for ImageLoadPipeline<PpmReader> {
    fn default() -> Self {
        Self::new(DecodeConfig::default())
    }
}

impl<R: ImageReader> ImageLoadPipeline<R> {
    pub fn with_custom(reader: R, config: DecodeConfig) -> Self {
        Self {
            reader,
            config,
        }
    }

    fn validate_dimensions(&self, image: &Image) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        self.config.check_dimensions(image.width, image.height)?;

        let expected = (image.width as usize).checked_mul(image.height as usize);
        if expected != Some(image.pixels.len()) {
            return Err(DecodeError::InvalidDimensions(image.width, image.height));
        }

        Ok(())
    }

    /// Decodes one image from `source`, which is read to the end of the raster only.
    #[instrument(skip(self, source))]
    pub fn decode<S: Read>(&self, mut source: S) -> Result<Image> {
        let image = {
            let _span = tracing::info_span!("read_image").entered();
            self.reader.read_image(&mut source, &self.config)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width,
                height = image.height
            ).entered();
            self.validate_dimensions(&image)?;
        }

        info!(
            width = image.width,
            height = image.height,
            "Image decoded"
        );
        Ok(image)
    }

    /// Opens `path` and decodes it. The file is closed on every return path.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn decode_file<P: AsRef<Path>>(&self, path: P) -> Result<Image> {
        let path = path.as_ref();

        let file = {
            let _span = tracing::info_span!("open_source").entered();
            File::open(path).map_err(|source| DecodeError::OpenFailed {
                path: path.to_path_buf(),
                source,
            })?
        };

        self.decode(file)
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DecodeConfig) {
        self.config = config;
    }
}

/// Decodes the PPM file at `path` with the default configuration.
pub fn decode_ppm_file<P: AsRef<Path>>(path: P) -> Result<Image> {
    ImageLoadPipeline::default().decode_file(path)
}
