//! Common utilities module
//!
//! This module contains the error types shared by every decoding stage.

pub mod error;

pub use error::{DecodeError, Result, SampleError};
