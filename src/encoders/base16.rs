//! Hexadecimal. Two symbols per byte, no padding, nothing clever.
//!
//! Kept separate from the generic bit-packing engine: the 4-bit case
//! reduces to a pair of table lookups per byte, and the decode loop can
//! enforce the even-length rule up front. All indexing is bounds-checked
//! slice access.

use crate::alphabet::Alphabet;
use crate::encoders::errors::{DecodeError, EncodeError};
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Base16 {
    alphabet: Alphabet,
}

impl Base16 {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Exact encoded length: two symbols per byte.
    pub fn encoded_len(&self, byte_len: usize) -> usize {
        byte_len * 2
    }

    /// Exact decoded length for a valid input.
    pub fn decoded_len(&self, char_len: usize) -> usize {
        char_len / 2
    }

    pub fn encode_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize, EncodeError> {
        let needed = self.encoded_len(input.len());
        if output.len() < needed {
            return Err(EncodeError::InsufficientBuffer { needed });
        }
        for (i, &byte) in input.iter().enumerate() {
            output[i * 2] = self.alphabet.symbol((byte >> 4) as usize);
            output[i * 2 + 1] = self.alphabet.symbol((byte & 0x0F) as usize);
        }
        Ok(needed)
    }

    pub fn decode_into(&self, input: &str, output: &mut [u8]) -> Result<usize, DecodeError> {
        if input.len() % 2 != 0 {
            return Err(DecodeError::InvalidLength {
                length: input.len(),
                expected: "an even number of hex digits",
            });
        }
        let needed = self.decoded_len(input.len());
        if output.len() < needed {
            return Err(DecodeError::InsufficientBuffer { needed });
        }

        let mut high = None;
        let mut written = 0;
        for (position, character) in input.char_indices() {
            let digit = self
                .alphabet
                .decode_value(character)
                .ok_or(DecodeError::InvalidCharacter { character, position })?;
            match high.take() {
                None => high = Some(digit),
                Some(h) => {
                    output[written] = (h << 4) | digit;
                    written += 1;
                }
            }
        }
        // A dangling nibble would mean a multi-byte character slipped past
        // the byte-length check; decode_value has already rejected it.
        debug_assert!(high.is_none());
        Ok(written)
    }

    pub fn encode(&self, input: &[u8]) -> String {
        let mut output = vec![0u8; self.encoded_len(input.len())];
        self.encode_into(input, &mut output)
            .expect("buffer sized to the exact encoded length");
        String::from_utf8(output).expect("alphabet symbols are ASCII")
    }

    pub fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        let mut output = vec![0u8; self.decoded_len(input.len())];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }
}

/// Uppercase hex; decode accepts both cases.
pub fn upper() -> &'static Base16 {
    static CODER: OnceLock<Base16> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet = Alphabet::builder(16, "0123456789ABCDEF")
            .case_insensitive()
            .build()
            .expect("valid hex alphabet");
        Base16::new(alphabet)
    })
}

/// Lowercase hex; decode accepts both cases.
pub fn lower() -> &'static Base16 {
    static CODER: OnceLock<Base16> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet = Alphabet::builder(16, "0123456789abcdef")
            .case_insensitive()
            .build()
            .expect("valid hex alphabet");
        Base16::new(alphabet)
    })
}
