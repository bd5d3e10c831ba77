//! Byte tokenizer for Netpbm headers and plain-text samples.
//!
//! Reads from any [`Read`] source through a [`BufReader`] and keeps a single
//! byte of lookahead of its own, so it never needs the source to be seekable.

use std::io::{BufReader, ErrorKind, Read};

use crate::image_pipeline::common::error::{DecodeError, Result};

/// Space, tab, carriage return or line feed.
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

pub fn is_line_terminator(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n')
}

pub struct Tokenizer<R: Read> {
    reader: BufReader<R>,
    pushback: Option<u8>,
    token: Vec<u8>,
    max_token_length: usize,
}

impl<R: Read> Tokenizer<R> {
    pub fn new(source: R, max_token_length: usize) -> Self {
        Self {
            reader: BufReader::new(source),
            pushback: None,
            token: Vec::new(),
            max_token_length,
        }
    }

    /// Next byte of the stream, `None` at end of stream.
    fn next_byte(&mut self) -> Result<Option<u8>> {
        if let Some(byte) = self.pushback.take() {
            return Ok(Some(byte));
        }

        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(DecodeError::IoError(e)),
            }
        }
    }

    fn require_byte(&mut self) -> Result<u8> {
        self.next_byte()?.ok_or(DecodeError::UnexpectedEndOfInput)
    }

    /// Hands `byte` back so the next read returns it again.
    fn unread(&mut self, byte: u8) {
        debug_assert!(self.pushback.is_none(), "only one byte of pushback");
        self.pushback = Some(byte);
    }

    /// Skips any run of `#` comment lines starting at the current position.
    ///
    /// The terminator ending each comment is consumed. Running out of input,
    /// even on the very first read, is an error.
    pub fn skip_comments(&mut self) -> Result<()> {
        let mut in_comment = false;
        loop {
            let byte = self.require_byte()?;
            if in_comment {
                if is_line_terminator(byte) {
                    in_comment = false;
                }
            } else if byte == b'#' {
                in_comment = true;
            } else {
                self.unread(byte);
                return Ok(());
            }
        }
    }

    /// Skips whitespace up to the next non-whitespace byte.
    ///
    /// Comments are only recognised right after a line terminator; a `#`
    /// following a space or tab is left in place as the start of a token.
    pub fn skip_whitespace(&mut self) -> Result<()> {
        loop {
            let byte = self.require_byte()?;
            if is_line_terminator(byte) {
                self.skip_comments()?;
            }
            if !is_whitespace(byte) {
                self.unread(byte);
                return Ok(());
            }
        }
    }

    /// Reads bytes up to, but not including, the next whitespace byte.
    ///
    /// The token may be empty if the stream is positioned on whitespace.
    /// End of stream before any whitespace is an error, as is a token longer
    /// than `max_token_length`.
    pub fn read_token(&mut self) -> Result<&[u8]> {
        self.token.clear();
        loop {
            let byte = self.require_byte()?;
            if is_whitespace(byte) {
                self.unread(byte);
                return Ok(&self.token);
            }
            if self.token.len() == self.max_token_length {
                return Err(DecodeError::BufferOverflow(self.max_token_length));
            }
            self.token.push(byte);
        }
    }

    /// Consumes the single whitespace byte separating a binary header from its raster.
    pub fn read_separator(&mut self) -> Result<()> {
        let byte = self.require_byte()?;
        if !is_whitespace(byte) {
            return Err(DecodeError::InvalidFormat(format!(
                "expected a single whitespace byte before the raster, found 0x{:02X}",
                byte
            )));
        }
        Ok(())
    }

    /// Fills `buf` with raw bytes, starting with any pushed-back byte.
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        if buf.is_empty() {
            return Ok(());
        }

        let rest = match self.pushback.take() {
            Some(byte) => {
                buf[0] = byte;
                &mut buf[1..]
            }
            None => buf,
        };

        self.reader.read_exact(rest).map_err(DecodeError::from_read)
    }
}
