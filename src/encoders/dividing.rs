//! Generic big-number base conversion for radices that do not divide byte
//! boundaries (Base10, Base36, Base62, custom radices).
//!
//! The whole input is treated as one big-endian unsigned integer. Encoding
//! injects one input byte at a time into a running number held in the output
//! radix; decoding runs the mirror multiply-accumulate. Both directions work
//! in place over caller buffers, O(n^2) worst case, allocation-free.
//!
//! Leading zero bytes carry no numeric magnitude here and are dropped; a
//! scheme that must preserve them as literal symbols (Base58) has its own
//! coder in [`base58`](crate::encoders::base58).

use crate::alphabet::Alphabet;
use crate::encoders::errors::{DecodeError, EncodeError};
use std::sync::OnceLock;

/// Stateless base-conversion coder for an arbitrary-radix [`Alphabet`].
///
/// The `reduction_factor` is `log2(radix) * 125` rounded down, i.e. an
/// integer approximation of `log(radix) / log(256) * 1000`. It drives the
/// closed-form output-size bounds so buffers never need to grow mid-call.
#[derive(Debug, Clone)]
pub struct DividingCoder {
    alphabet: Alphabet,
    reduction_factor: usize,
}

impl DividingCoder {
    pub fn new(alphabet: Alphabet) -> Self {
        let reduction_factor = ((alphabet.radix() as f64).log2() * 125.0) as usize;
        Self { alphabet, reduction_factor }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Upper bound on the number of symbols `encode` emits for `byte_len`
    /// input bytes. Deliberately an overestimate; the exact count is the
    /// return value of [`encode_into`](Self::encode_into).
    pub fn safe_encoded_len(&self, byte_len: usize) -> usize {
        byte_len * 1000 / self.reduction_factor + 1
    }

    /// Upper bound on the number of bytes `decode` produces for `char_len`
    /// input symbols.
    pub fn safe_decoded_len(&self, char_len: usize) -> usize {
        char_len * (self.reduction_factor + 1) / 1000 + 1
    }

    /// Encodes `input` into `output`, returning the number of symbols
    /// written. `output` must hold at least
    /// [`safe_encoded_len`](Self::safe_encoded_len) bytes to be guaranteed
    /// to fit; on `InsufficientBuffer` the buffer contents are unspecified.
    pub fn encode_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize, EncodeError> {
        let radix = self.alphabet.radix();
        let mut digits = 0;

        for &byte in input {
            // Multiply the running base-R number by 256 and add the new byte,
            // normalizing digit by digit.
            let mut carry = byte as usize;
            for digit in &mut output[..digits] {
                carry += (*digit as usize) << 8;
                *digit = (carry % radix) as u8;
                carry /= radix;
            }
            while carry > 0 {
                let slot = output.get_mut(digits).ok_or(EncodeError::InsufficientBuffer {
                    needed: self.safe_encoded_len(input.len()),
                })?;
                *slot = (carry % radix) as u8;
                digits += 1;
                carry /= radix;
            }
        }

        for digit in &mut output[..digits] {
            *digit = self.alphabet.symbol(*digit as usize);
        }
        output[..digits].reverse();
        Ok(digits)
    }

    /// Decodes `input` into `output`, returning the number of bytes written.
    pub fn decode_into(&self, input: &str, output: &mut [u8]) -> Result<usize, DecodeError> {
        let radix = self.alphabet.radix();
        let mut written = 0;

        for (position, character) in input.char_indices() {
            let mut carry = self
                .alphabet
                .decode_value(character)
                .ok_or(DecodeError::InvalidCharacter { character, position })?
                as usize;

            for byte in &mut output[..written] {
                carry += (*byte as usize) * radix;
                *byte = (carry & 0xFF) as u8;
                carry >>= 8;
            }
            while carry > 0 {
                let slot = output.get_mut(written).ok_or(DecodeError::InsufficientBuffer {
                    needed: self.safe_decoded_len(input.len()),
                })?;
                *slot = (carry & 0xFF) as u8;
                written += 1;
                carry >>= 8;
            }
        }

        output[..written].reverse();
        Ok(written)
    }

    /// Allocating convenience wrapper around
    /// [`encode_into`](Self::encode_into). Empty input yields an empty
    /// string.
    pub fn encode(&self, input: &[u8]) -> String {
        let mut output = vec![0u8; self.safe_encoded_len(input.len())];
        let len = self
            .encode_into(input, &mut output)
            .expect("scratch buffer sized to the safe bound");
        output.truncate(len);
        // The alphabet is validated ASCII.
        String::from_utf8(output).expect("alphabet symbols are ASCII")
    }

    /// Allocating convenience wrapper around
    /// [`decode_into`](Self::decode_into).
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        let mut output = vec![0u8; self.safe_decoded_len(input.len())];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }
}

/// Decimal digits.
pub fn base10() -> &'static DividingCoder {
    static CODER: OnceLock<DividingCoder> = OnceLock::new();
    CODER.get_or_init(|| {
        DividingCoder::new(Alphabet::new(10, "0123456789").expect("valid base10 alphabet"))
    })
}

/// Lowercase alphanumerics, case-insensitive on decode.
pub fn base36() -> &'static DividingCoder {
    static CODER: OnceLock<DividingCoder> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet = Alphabet::builder(36, "0123456789abcdefghijklmnopqrstuvwxyz")
            .case_insensitive()
            .build()
            .expect("valid base36 alphabet");
        DividingCoder::new(alphabet)
    })
}

/// Digits, uppercase, lowercase — case-sensitive.
pub fn base62() -> &'static DividingCoder {
    static CODER: OnceLock<DividingCoder> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet = Alphabet::new(
            62,
            "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
        )
        .expect("valid base62 alphabet");
        DividingCoder::new(alphabet)
    })
}
