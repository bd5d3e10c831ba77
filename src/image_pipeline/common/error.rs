use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Could not open source file for reading '{}': {source}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The source is not a valid P3 or P6 file: {0}")]
    InvalidFormat(String),

    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("Token longer than the {0} byte limit")]
    BufferOverflow(usize),

    #[error("Invalid color sample: {0}")]
    InvalidSample(#[from] SampleError),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// The two ways a decoded sample can fall outside `[0, maxval]`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    #[error("a negative color sample ({0}) is not a valid value")]
    Negative(i64),

    #[error("color sample {value} is greater than the maximum color value {maxval}")]
    ExceedsMaximum { value: i64, maxval: u16 },
}

impl DecodeError {
    /// Maps a failed read, turning a short read into [`DecodeError::UnexpectedEndOfInput`].
    pub(crate) fn from_read(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            DecodeError::UnexpectedEndOfInput
        } else {
            DecodeError::IoError(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
