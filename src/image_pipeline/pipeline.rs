//! Image loading pipeline module
//!
//! This module contains the orchestration that opens a source, runs a reader
//! over it and checks the result before handing it to the caller.

mod image_loader;


pub use image_loader::{ImageLoadPipeline, decode_ppm_file};
