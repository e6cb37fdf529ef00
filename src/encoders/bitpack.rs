//! Shared engine for power-of-two radices (Base2, Base8, Base32, Base64).
//!
//! Encode and decode are pure shift/mask walks over a sliding bit window;
//! no division is involved anywhere. The engine supports both RFC 4648
//! style end-aligned output (trailing partial symbol padded with zero bits,
//! filler appended) and mirrored start-aligned output (virtual zero bits at
//! the front, filler prepended), selected by the alphabet's padding
//! position.

use crate::alphabet::{Alphabet, PaddingPosition};
use crate::encoders::errors::{AlphabetError, DecodeError, EncodeError};

/// Bit-group coder over a power-of-two [`Alphabet`].
#[derive(Debug, Clone)]
pub struct BitPackCoder {
    alphabet: Alphabet,
    bits_per_symbol: u32,
}

const fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}

impl BitPackCoder {
    pub fn new(alphabet: Alphabet) -> Result<Self, AlphabetError> {
        let radix = alphabet.radix();
        if !radix.is_power_of_two() || radix < 2 {
            return Err(AlphabetError::InvalidRadix { radix });
        }
        let bits_per_symbol = radix.trailing_zeros();
        Ok(Self { alphabet, bits_per_symbol })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn bits_per_symbol(&self) -> u32 {
        self.bits_per_symbol
    }

    /// Symbols per padding group: `lcm(bits, 8) / bits`.
    pub fn group_symbols(&self) -> usize {
        let bits = self.bits_per_symbol as usize;
        bits * 8 / gcd(bits, 8) / bits
    }

    /// Bytes per padding group: `lcm(bits, 8) / 8`.
    pub fn group_bytes(&self) -> usize {
        let bits = self.bits_per_symbol as usize;
        bits * 8 / gcd(bits, 8) / 8
    }

    /// Exact encoded length for `byte_len` bytes.
    pub fn encoded_len(&self, byte_len: usize, with_padding: bool) -> usize {
        let bits = self.bits_per_symbol as usize;
        let symbols = (byte_len * 8).div_ceil(bits);
        if with_padding && self.alphabet.padding().is_some() {
            symbols.div_ceil(self.group_symbols()) * self.group_symbols()
        } else {
            symbols
        }
    }

    /// Upper bound on decoded bytes for `char_len` input characters.
    pub fn safe_decoded_len(&self, char_len: usize) -> usize {
        char_len * self.bits_per_symbol as usize / 8 + 1
    }

    pub fn encode_into(
        &self,
        input: &[u8],
        output: &mut [u8],
        with_padding: bool,
    ) -> Result<usize, EncodeError> {
        let needed = self.encoded_len(input.len(), with_padding);
        if output.len() < needed {
            return Err(EncodeError::InsufficientBuffer { needed });
        }

        match self.alphabet.padding_position() {
            PaddingPosition::End => self.encode_end_aligned(input, output, with_padding, needed),
            PaddingPosition::Start => self.encode_start_aligned(input, output, with_padding, needed),
        }
        Ok(needed)
    }

    fn encode_end_aligned(&self, input: &[u8], output: &mut [u8], with_padding: bool, total: usize) {
        let bits = self.bits_per_symbol;
        let mask = (1u32 << bits) - 1;
        let mut bit_buffer = 0u32;
        let mut bits_in_buffer = 0u32;
        let mut written = 0;

        for &byte in input {
            bit_buffer = (bit_buffer << 8) | byte as u32;
            bits_in_buffer += 8;
            while bits_in_buffer >= bits {
                bits_in_buffer -= bits;
                output[written] = self.alphabet.symbol(((bit_buffer >> bits_in_buffer) & mask) as usize);
                written += 1;
            }
        }

        // Final partial symbol, zero bits on the right.
        if bits_in_buffer > 0 {
            output[written] = self.alphabet.symbol(((bit_buffer << (bits - bits_in_buffer)) & mask) as usize);
            written += 1;
        }

        if with_padding {
            if let Some(pad) = self.alphabet.padding() {
                output[written..total].fill(pad);
            }
        }
    }

    fn encode_start_aligned(&self, input: &[u8], output: &mut [u8], with_padding: bool, total: usize) {
        let bits = self.bits_per_symbol;
        let mask = (1u32 << bits) - 1;
        let symbols = (input.len() * 8).div_ceil(bits as usize);

        let mut written = 0;
        if with_padding {
            if let Some(pad) = self.alphabet.padding() {
                while written < total - symbols {
                    output[written] = pad;
                    written += 1;
                }
            }
        }

        // Virtual zero bits in front make the stream end exactly on a
        // symbol boundary; the walk is otherwise identical to end-aligned.
        let mut bit_buffer = 0u32;
        let mut bits_in_buffer = (symbols * bits as usize - input.len() * 8) as u32;
        for &byte in input {
            bit_buffer = (bit_buffer << 8) | byte as u32;
            bits_in_buffer += 8;
            while bits_in_buffer >= bits {
                bits_in_buffer -= bits;
                output[written] = self.alphabet.symbol(((bit_buffer >> bits_in_buffer) & mask) as usize);
                written += 1;
            }
        }
        debug_assert_eq!(bits_in_buffer, 0);
    }

    pub fn decode_into(&self, input: &str, output: &mut [u8]) -> Result<usize, DecodeError> {
        let payload = self.strip_padding(input)?;
        match self.alphabet.padding_position() {
            PaddingPosition::End => self.decode_end_aligned(payload, output),
            PaddingPosition::Start => self.decode_start_aligned(payload, output),
        }
    }

    /// Removes padding characters from the padded side and rejects padding
    /// anywhere else.
    fn strip_padding<'a>(&self, input: &'a str) -> Result<&'a str, DecodeError> {
        let Some(pad) = self.alphabet.padding() else {
            return Ok(input);
        };
        let pad = pad as char;
        match self.alphabet.padding_position() {
            PaddingPosition::End => {
                let trimmed = input.trim_end_matches(pad);
                if let Some((position, character)) =
                    trimmed.char_indices().find(|&(_, c)| c == pad)
                {
                    return Err(DecodeError::InvalidCharacter { character, position });
                }
                Ok(trimmed)
            }
            PaddingPosition::Start => {
                let trimmed = input.trim_start_matches(pad);
                if let Some((position, character)) =
                    trimmed.char_indices().find(|&(_, c)| c == pad)
                {
                    let offset = input.len() - trimmed.len();
                    return Err(DecodeError::InvalidCharacter { character, position: position + offset });
                }
                Ok(trimmed)
            }
        }
    }

    fn decode_end_aligned(&self, input: &str, output: &mut [u8]) -> Result<usize, DecodeError> {
        let bits = self.bits_per_symbol;
        let mut bit_buffer = 0u32;
        let mut bits_in_buffer = 0u32;
        let mut written = 0;

        for (position, character) in input.char_indices() {
            let digit = self
                .alphabet
                .decode_value(character)
                .ok_or(DecodeError::InvalidCharacter { character, position })?;
            bit_buffer = (bit_buffer << bits) | digit as u32;
            bits_in_buffer += bits;
            while bits_in_buffer >= 8 {
                bits_in_buffer -= 8;
                let slot = output.get_mut(written).ok_or(DecodeError::InsufficientBuffer {
                    needed: self.safe_decoded_len(input.len()),
                })?;
                *slot = ((bit_buffer >> bits_in_buffer) & 0xFF) as u8;
                written += 1;
            }
        }

        // Fewer than 8 leftover bits are the encoder's zero fill; drop them.
        Ok(written)
    }

    fn decode_start_aligned(&self, input: &str, output: &mut [u8]) -> Result<usize, DecodeError> {
        let bits = self.bits_per_symbol;
        let mut bit_buffer = 0u32;
        let mut bits_in_buffer = 0u32;
        let mut written = 0;

        // Walk backwards so the partial group's virtual zero bits fall off
        // the front instead of the back.
        for (position, character) in input.char_indices().rev() {
            let digit = self
                .alphabet
                .decode_value(character)
                .ok_or(DecodeError::InvalidCharacter { character, position })?;
            bit_buffer |= (digit as u32) << bits_in_buffer;
            bits_in_buffer += bits;
            while bits_in_buffer >= 8 {
                let slot = output.get_mut(written).ok_or(DecodeError::InsufficientBuffer {
                    needed: self.safe_decoded_len(input.len()),
                })?;
                *slot = (bit_buffer & 0xFF) as u8;
                written += 1;
                bit_buffer >>= 8;
                bits_in_buffer -= 8;
            }
        }

        output[..written].reverse();
        Ok(written)
    }

    pub fn encode(&self, input: &[u8], with_padding: bool) -> String {
        let mut output = vec![0u8; self.encoded_len(input.len(), with_padding)];
        let len = self
            .encode_into(input, &mut output, with_padding)
            .expect("buffer sized to the exact encoded length");
        debug_assert_eq!(len, output.len());
        String::from_utf8(output).expect("alphabet symbols are ASCII")
    }

    pub fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        let mut output = vec![0u8; self.safe_decoded_len(input.len())];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }
}
