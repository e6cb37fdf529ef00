//! Base2 and Base8 over the bit-packing engine, with the multibase length
//! rules enforced on decode.

use crate::alphabet::Alphabet;
use crate::encoders::bitpack::BitPackCoder;
use crate::encoders::errors::DecodeError;
use std::sync::OnceLock;

fn base2_coder() -> &'static BitPackCoder {
    static CODER: OnceLock<BitPackCoder> = OnceLock::new();
    CODER.get_or_init(|| {
        BitPackCoder::new(Alphabet::new(2, "01").expect("valid base2 alphabet"))
            .expect("power-of-two radix")
    })
}

fn base8_coder() -> &'static BitPackCoder {
    static CODER: OnceLock<BitPackCoder> = OnceLock::new();
    CODER.get_or_init(|| {
        BitPackCoder::new(Alphabet::new(8, "01234567").expect("valid base8 alphabet"))
            .expect("power-of-two radix")
    })
}

pub mod base2 {
    use super::*;

    /// Eight `0`/`1` characters per byte.
    pub fn encode(input: &[u8]) -> String {
        base2_coder().encode(input, false)
    }

    /// Requires a multiple of eight characters; there is no canonical
    /// encoding of partial bytes.
    pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
        if input.len() % 8 != 0 {
            return Err(DecodeError::InvalidLength {
                length: input.len(),
                expected: "a multiple of 8 binary digits",
            });
        }
        base2_coder().decode(input)
    }
}

pub mod base8 {
    use super::*;

    /// Eight octal digits per three bytes, zero-filled final symbol.
    pub fn encode(input: &[u8]) -> String {
        base8_coder().encode(input, false)
    }

    /// Valid lengths are 0, 3 or 6 modulo 8 — the only counts a whole
    /// number of bytes can produce. An under-full trailing byte (the
    /// encoder's fill bits) is dropped per the multibase Base8 rule.
    pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
        if !matches!(input.len() % 8, 0 | 3 | 6) {
            return Err(DecodeError::InvalidLength {
                length: input.len(),
                expected: "0, 3 or 6 octal digits modulo 8",
            });
        }
        base8_coder().decode(input)
    }
}
