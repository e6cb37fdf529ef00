//! Base45 (RFC 9285), the QR-code alphanumeric-mode encoding.
//!
//! Two bytes become three symbols, a trailing single byte becomes two.
//! Unusually, the least significant digit comes first: `[a, b]` encodes the
//! value `a * 256 + b` as `c + d*45 + e*45²` emitted in `c d e` order.

use crate::alphabet::Alphabet;
use crate::encoders::errors::DecodeError;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Base45 {
    alphabet: Alphabet,
}

impl Base45 {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Exact encoded length: three symbols per byte pair, two for a
    /// trailing byte.
    pub fn encoded_len(&self, byte_len: usize) -> usize {
        byte_len / 2 * 3 + byte_len % 2 * 2
    }

    /// Exact decoded length for a valid input; a remainder of one symbol is
    /// impossible.
    pub fn decoded_len(&self, char_len: usize) -> Result<usize, DecodeError> {
        match char_len % 3 {
            0 => Ok(char_len / 3 * 2),
            2 => Ok(char_len / 3 * 2 + 1),
            _ => Err(DecodeError::InvalidLength {
                length: char_len,
                expected: "0 or 2 base45 digits modulo 3",
            }),
        }
    }

    pub fn encode(&self, input: &[u8]) -> String {
        let mut output = Vec::with_capacity(self.encoded_len(input.len()));

        for chunk in input.chunks(2) {
            match *chunk {
                [a, b] => {
                    let mut value = a as usize * 256 + b as usize;
                    for _ in 0..3 {
                        output.push(self.alphabet.symbol(value % 45));
                        value /= 45;
                    }
                }
                [a] => {
                    let value = a as usize;
                    output.push(self.alphabet.symbol(value % 45));
                    output.push(self.alphabet.symbol(value / 45));
                }
                _ => unreachable!("chunks(2) yields one or two bytes"),
            }
        }

        String::from_utf8(output).expect("alphabet symbols are ASCII")
    }

    pub fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        let mut output = Vec::with_capacity(self.decoded_len(input.len())?);

        // Digits per group, least significant first.
        let mut digits = [0usize; 3];
        let mut count = 0;
        let mut group_start = 0;

        for (position, character) in input.char_indices() {
            let digit = self
                .alphabet
                .decode_value(character)
                .ok_or(DecodeError::InvalidCharacter { character, position })?;
            if count == 0 {
                group_start = position;
            }
            digits[count] = digit as usize;
            count += 1;

            if count == 3 {
                let value = digits[0] + digits[1] * 45 + digits[2] * 45 * 45;
                if value > 0xFFFF {
                    return Err(DecodeError::Overflow { position: group_start });
                }
                output.push((value >> 8) as u8);
                output.push((value & 0xFF) as u8);
                count = 0;
            }
        }

        match count {
            0 => {}
            2 => {
                let value = digits[0] + digits[1] * 45;
                if value > 0xFF {
                    return Err(DecodeError::Overflow { position: group_start });
                }
                output.push(value as u8);
            }
            // decoded_len has already rejected a single trailing digit.
            _ => unreachable!("length congruency validated up front"),
        }

        Ok(output)
    }
}

/// The RFC 9285 alphabet: digits, uppercase letters, then ` $%*+-./:`.
pub fn default() -> &'static Base45 {
    static CODER: OnceLock<Base45> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet = Alphabet::new(45, "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:")
            .expect("valid base45 alphabet");
        Base45::new(alphabet)
    })
}
