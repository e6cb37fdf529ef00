//! Base85 family: Z85, Ascii85 and the RFC 1924 alphabet.
//!
//! Each 4-byte block encodes independently to 5 symbols through plain
//! divmod chains; there is no whole-buffer big number here. Ascii85 adds
//! two shortcut symbols (`z` for an all-zero block, `y` for an all-space
//! block) which are only legal on block boundaries. Trailing partial
//! blocks are padded virtually with the highest-value digit on decode and
//! with zero bytes on encode, then truncated back down.
//!
//! The RFC 1924 IPv6 form is the deliberate oddball: a fixed 16-byte input
//! treated as one 128-bit integer and divided by 85 twenty times. It is
//! retained for compatibility; the block coder is the design to copy.

use crate::alphabet::Alphabet;
use crate::encoders::errors::DecodeError;
use std::sync::OnceLock;

/// Whitespace code points skipped by the decoder.
fn is_skipped_whitespace(character: char) -> bool {
    matches!(character, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

#[derive(Debug, Clone)]
pub struct Base85 {
    alphabet: Alphabet,
    zero_shortcut: Option<char>,
    space_shortcut: Option<char>,
}

impl Base85 {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet, zero_shortcut: None, space_shortcut: None }
    }

    /// Adds the all-zero-block and all-space-block shortcut symbols.
    pub fn with_shortcuts(mut self, zero: Option<char>, space: Option<char>) -> Self {
        self.zero_shortcut = zero;
        self.space_shortcut = space;
        self
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Upper bound on encoded symbols (shortcuts only ever shrink output).
    pub fn safe_encoded_len(&self, byte_len: usize) -> usize {
        let tail = byte_len % 4;
        byte_len / 4 * 5 + if tail == 0 { 0 } else { tail + 1 }
    }

    /// Upper bound on decoded bytes: every symbol could be a shortcut.
    pub fn safe_decoded_len(&self, char_len: usize) -> usize {
        if self.zero_shortcut.is_some() || self.space_shortcut.is_some() {
            char_len * 4
        } else {
            char_len.div_ceil(5) * 4
        }
    }

    pub fn encode(&self, input: &[u8]) -> String {
        let mut output = Vec::with_capacity(self.safe_encoded_len(input.len()));

        for chunk in input.chunks(4) {
            if chunk.len() == 4 {
                let value = u32::from_be_bytes(chunk.try_into().expect("4-byte chunk"));
                if value == 0 {
                    if let Some(shortcut) = self.zero_shortcut {
                        output.push(shortcut as u8);
                        continue;
                    }
                }
                if value == 0x2020_2020 {
                    if let Some(shortcut) = self.space_shortcut {
                        output.push(shortcut as u8);
                        continue;
                    }
                }
                self.push_block(value, 5, &mut output);
            } else {
                // Zero-fill to a full block, emit len + 1 symbols.
                let mut padded = [0u8; 4];
                padded[..chunk.len()].copy_from_slice(chunk);
                let value = u32::from_be_bytes(padded);
                self.push_block(value, chunk.len() + 1, &mut output);
            }
        }

        String::from_utf8(output).expect("alphabet symbols are ASCII")
    }

    fn push_block(&self, value: u32, keep: usize, output: &mut Vec<u8>) {
        let mut value = value;
        let mut digits = [0usize; 5];
        for slot in digits.iter_mut().rev() {
            *slot = (value % 85) as usize;
            value /= 85;
        }
        for &digit in &digits[..keep] {
            output.push(self.alphabet.symbol(digit));
        }
    }

    pub fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        let mut output = Vec::with_capacity(input.len() / 5 * 4 + 4);
        let mut digits = [0u8; 5];
        let mut count = 0;
        let mut block_start = 0;

        for (position, character) in input.char_indices() {
            if is_skipped_whitespace(character) {
                continue;
            }
            if self.zero_shortcut == Some(character) {
                if count != 0 {
                    return Err(DecodeError::InvalidShortcut { character, position });
                }
                output.extend_from_slice(&[0, 0, 0, 0]);
                continue;
            }
            if self.space_shortcut == Some(character) {
                if count != 0 {
                    return Err(DecodeError::InvalidShortcut { character, position });
                }
                output.extend_from_slice(&[0x20; 4]);
                continue;
            }

            let digit = self
                .alphabet
                .decode_value(character)
                .ok_or(DecodeError::InvalidCharacter { character, position })?;
            if count == 0 {
                block_start = position;
            }
            digits[count] = digit;
            count += 1;

            if count == 5 {
                let bytes = block_value(&digits, block_start)?;
                output.extend_from_slice(&bytes);
                count = 0;
            }
        }

        match count {
            0 => {}
            1 => {
                return Err(DecodeError::InvalidLength {
                    length: input.len(),
                    expected: "at least two base85 digits in the final block",
                });
            }
            keep => {
                // Virtual padding with the highest digit, then truncation.
                for slot in digits[keep..].iter_mut() {
                    *slot = 84;
                }
                let bytes = block_value(&digits, block_start)?;
                output.extend_from_slice(&bytes[..keep - 1]);
            }
        }

        Ok(output)
    }
}

/// Combines five digits into a 4-byte group, rejecting values past 2^32.
fn block_value(digits: &[u8; 5], block_start: usize) -> Result<[u8; 4], DecodeError> {
    let mut value = 0u64;
    for &digit in digits {
        value = value * 85 + digit as u64;
    }
    if value > u32::MAX as u64 {
        return Err(DecodeError::Overflow { position: block_start });
    }
    Ok((value as u32).to_be_bytes())
}

/// Z85 (ZeroMQ): no shortcuts, alphabet chosen to be quoting-friendly.
pub fn z85() -> &'static Base85 {
    static CODER: OnceLock<Base85> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet = Alphabet::new(
            85,
            "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#",
        )
        .expect("valid z85 alphabet");
        Base85::new(alphabet)
    })
}

/// Ascii85 (btoa lineage): `!` through `u`, with `z` and `y` shortcuts.
pub fn ascii85() -> &'static Base85 {
    static CODER: OnceLock<Base85> = OnceLock::new();
    CODER.get_or_init(|| {
        let symbols: String = ('!'..='u').collect();
        let alphabet = Alphabet::new(85, &symbols).expect("valid ascii85 alphabet");
        Base85::new(alphabet).with_shortcuts(Some('z'), Some('y'))
    })
}

/// The RFC 1924 alphabet, shared with the IPv6 form below.
pub fn rfc1924() -> &'static Base85 {
    static CODER: OnceLock<Base85> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet = Alphabet::new(
            85,
            "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~",
        )
        .expect("valid rfc1924 alphabet");
        Base85::new(alphabet)
    })
}

/// Symbols in an encoded IPv6 address.
pub const IPV6_ENCODED_LEN: usize = 20;

/// RFC 1924: the 16-byte address as one 128-bit integer, divided by 85
/// twenty times.
pub fn encode_ipv6(input: &[u8; 16]) -> String {
    let alphabet = rfc1924().alphabet();
    let mut value = u128::from_be_bytes(*input);
    let mut output = [0u8; IPV6_ENCODED_LEN];
    for slot in output.iter_mut().rev() {
        *slot = alphabet.symbol((value % 85) as usize);
        value /= 85;
    }
    String::from_utf8(output.to_vec()).expect("alphabet symbols are ASCII")
}

/// Inverse of [`encode_ipv6`]. Exactly twenty symbols, value below 2^128.
pub fn decode_ipv6(input: &str) -> Result<[u8; 16], DecodeError> {
    let alphabet = rfc1924().alphabet();
    let mut value = 0u128;
    let mut count = 0;

    for (position, character) in input.char_indices() {
        let digit = alphabet
            .decode_value(character)
            .ok_or(DecodeError::InvalidCharacter { character, position })?;
        value = value
            .checked_mul(85)
            .and_then(|v| v.checked_add(digit as u128))
            .ok_or(DecodeError::Overflow { position })?;
        count += 1;
    }

    if count != IPV6_ENCODED_LEN {
        return Err(DecodeError::InvalidLength {
            length: count,
            expected: "exactly 20 base85 digits",
        });
    }
    Ok(value.to_be_bytes())
}
