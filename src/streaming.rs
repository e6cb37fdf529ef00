//! Incremental wrappers over the buffer-based bit-packing coders.
//!
//! Both sides buffer to group boundaries so every intermediate chunk is a
//! self-contained encode/decode call; padding is only considered for the
//! final chunk, at `finish`. Dividing schemes need the whole input to
//! produce any output and are not streamable; use the buffer APIs there.

use crate::encoders::bitpack::BitPackCoder;
use crate::encoders::errors::DecodeError;
use std::fmt;
use std::io::{self, Read, Write};

/// Errors from streaming decode: transport or content.
#[derive(Debug)]
pub enum StreamingError {
    Io(io::Error),
    Decode(DecodeError),
}

impl fmt::Display for StreamingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamingError::Io(err) => write!(f, "stream I/O error: {}", err),
            StreamingError::Decode(err) => write!(f, "stream decode error: {}", err),
        }
    }
}

impl std::error::Error for StreamingError {}

impl From<io::Error> for StreamingError {
    fn from(err: io::Error) -> Self {
        StreamingError::Io(err)
    }
}

impl From<DecodeError> for StreamingError {
    fn from(err: DecodeError) -> Self {
        StreamingError::Decode(err)
    }
}

/// Encodes byte chunks into a writer, holding back at most one partial
/// group between calls.
pub struct StreamingEncoder<'a, W: Write> {
    coder: &'a BitPackCoder,
    writer: W,
    carry: Vec<u8>,
    with_padding: bool,
}

impl<'a, W: Write> StreamingEncoder<'a, W> {
    pub fn new(coder: &'a BitPackCoder, writer: W, with_padding: bool) -> Self {
        Self { coder, writer, carry: Vec::with_capacity(coder.group_bytes()), with_padding }
    }

    /// Encodes as much of `data` as falls on a group boundary; the rest
    /// waits for the next call or for [`finish`](Self::finish).
    pub fn write(&mut self, data: &[u8]) -> io::Result<()> {
        let group = self.coder.group_bytes();

        let mut combined;
        let input: &[u8] = if self.carry.is_empty() {
            data
        } else {
            combined = std::mem::take(&mut self.carry);
            combined.extend_from_slice(data);
            &combined
        };

        let boundary = input.len() - input.len() % group;
        if boundary > 0 {
            // A whole number of groups never needs padding.
            let encoded = self.coder.encode(&input[..boundary], false);
            self.writer.write_all(encoded.as_bytes())?;
        }
        self.carry = input[boundary..].to_vec();
        Ok(())
    }

    /// Flushes the trailing partial group, with padding if requested, and
    /// returns the writer.
    pub fn finish(mut self) -> io::Result<W> {
        if !self.carry.is_empty() {
            let encoded = self.coder.encode(&self.carry, self.with_padding);
            self.writer.write_all(encoded.as_bytes())?;
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Decodes encoded text from a reader, holding back at most one partial
/// symbol group between reads.
pub struct StreamingDecoder<'a, R: Read> {
    coder: &'a BitPackCoder,
    reader: R,
}

impl<'a, R: Read> StreamingDecoder<'a, R> {
    pub fn new(coder: &'a BitPackCoder, reader: R) -> Self {
        Self { coder, reader }
    }

    /// Reads the stream to completion, decoding group-aligned chunks as
    /// they arrive. Padding may only appear in the final chunk.
    pub fn decode_to_end(mut self) -> Result<Vec<u8>, StreamingError> {
        let group = self.coder.group_symbols();
        let mut output = Vec::new();
        let mut carry = String::new();
        let mut chunk = [0u8; 8192];

        loop {
            let read = self.reader.read(&mut chunk)?;
            if read == 0 {
                break;
            }
            // The coder alphabets are ASCII; anything else will surface as
            // an invalid character from the decode itself.
            let text = std::str::from_utf8(&chunk[..read]).map_err(|_| {
                StreamingError::Decode(DecodeError::InvalidCharacter {
                    character: char::REPLACEMENT_CHARACTER,
                    position: output.len(),
                })
            })?;
            carry.push_str(text);

            // Hold back the tail: a partial group, or any group that might
            // continue with padding characters.
            let boundary = carry.len() - carry.len() % group;
            let holdback = if boundary == carry.len() && boundary >= group { group } else { 0 };
            let split = boundary - holdback;
            if split > 0 {
                let head: String = carry.drain(..split).collect();
                output.extend(self.coder.decode(&head)?);
            }
        }

        if !carry.is_empty() {
            output.extend(self.coder.decode(&carry)?);
        }
        Ok(output)
    }
}
