//! CryptoNote (Monero) block-based Base58.
//!
//! Not the same algorithm as Bitcoin Base58: the input is split into 8-byte
//! blocks and each block encodes independently to exactly 11 characters,
//! with a fixed size table for the trailing partial block. Fixed block
//! widths mean leading zeros are preserved for free (`1` padding inside
//! each block) and encoding is O(n) rather than O(n^2). Shares only the
//! alphabet with the whole-buffer coder.

use crate::alphabet::Alphabet;
use crate::encoders::errors::DecodeError;
use std::sync::OnceLock;

/// Bytes per full block.
const FULL_BLOCK_SIZE: usize = 8;

/// Characters per full encoded block.
const FULL_ENCODED_BLOCK_SIZE: usize = 11;

/// Byte count -> encoded character count for partial blocks.
const ENCODED_BLOCK_SIZES: [usize; 9] = [0, 2, 3, 5, 6, 7, 9, 10, 11];

/// Encoded character count -> byte count. `None` marks sizes no block can
/// produce.
const DECODED_BLOCK_SIZES: [Option<usize>; 12] =
    [Some(0), None, Some(1), Some(2), None, Some(3), Some(4), Some(5), None, Some(6), Some(7), Some(8)];

fn alphabet() -> &'static Alphabet {
    static ALPHABET: OnceLock<Alphabet> = OnceLock::new();
    ALPHABET.get_or_init(|| {
        Alphabet::new(58, "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz")
            .expect("valid base58 alphabet")
    })
}

/// Exact encoded length for `byte_len` input bytes.
pub fn encoded_len(byte_len: usize) -> usize {
    byte_len / FULL_BLOCK_SIZE * FULL_ENCODED_BLOCK_SIZE
        + ENCODED_BLOCK_SIZES[byte_len % FULL_BLOCK_SIZE]
}

/// Exact decoded length for `char_len` input characters, or `InvalidLength`
/// when the trailing block size is impossible.
pub fn decoded_len(char_len: usize) -> Result<usize, DecodeError> {
    let tail = char_len % FULL_ENCODED_BLOCK_SIZE;
    match DECODED_BLOCK_SIZES[tail] {
        Some(bytes) => Ok(char_len / FULL_ENCODED_BLOCK_SIZE * FULL_BLOCK_SIZE + bytes),
        None => Err(DecodeError::InvalidLength {
            length: char_len,
            expected: "a valid CryptoNote block length (tail of 0, 2, 3, 5, 6, 7, 9, 10 or 11 chars)",
        }),
    }
}

fn encode_block(block: &[u8], output: &mut [u8]) {
    let alphabet = alphabet();
    let mut value = 0u64;
    for &byte in block {
        value = (value << 8) | byte as u64;
    }

    let zero = alphabet.zero_symbol();
    output.fill(zero);
    let mut index = output.len();
    while value > 0 {
        index -= 1;
        output[index] = alphabet.symbol((value % 58) as usize);
        value /= 58;
    }
}

fn decode_block(block: &str, offset: usize, output: &mut [u8]) -> Result<(), DecodeError> {
    let alphabet = alphabet();
    let mut value = 0u64;

    for (position, character) in block.char_indices() {
        let digit = alphabet.decode_value(character).ok_or(DecodeError::InvalidCharacter {
            character,
            position: offset + position,
        })?;
        value = value
            .checked_mul(58)
            .and_then(|v| v.checked_add(digit as u64))
            .ok_or(DecodeError::Overflow { position: offset })?;
    }

    // A partial block must fit its declared byte width.
    if output.len() < FULL_BLOCK_SIZE && value >> (output.len() * 8) != 0 {
        return Err(DecodeError::Overflow { position: offset });
    }

    for slot in output.iter_mut().rev() {
        *slot = (value & 0xFF) as u8;
        value >>= 8;
    }
    Ok(())
}

/// Encodes `input` block by block. Empty input yields an empty string.
pub fn encode(input: &[u8]) -> String {
    let mut output = vec![0u8; encoded_len(input.len())];

    let mut in_offset = 0;
    let mut out_offset = 0;
    for block in input.chunks(FULL_BLOCK_SIZE) {
        let width = ENCODED_BLOCK_SIZES[block.len()];
        encode_block(block, &mut output[out_offset..out_offset + width]);
        in_offset += block.len();
        out_offset += width;
    }
    debug_assert_eq!(in_offset, input.len());

    String::from_utf8(output).expect("alphabet symbols are ASCII")
}

/// Decodes a block-based Base58 string.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    if !input.is_ascii() {
        // Find the first non-ASCII character for the error position.
        let (position, character) = input
            .char_indices()
            .find(|(_, c)| !c.is_ascii())
            .expect("non-ASCII input has a non-ASCII character");
        return Err(DecodeError::InvalidCharacter { character, position });
    }

    let mut output = vec![0u8; decoded_len(input.len())?];

    let mut out_offset = 0;
    let mut in_offset = 0;
    while in_offset < input.len() {
        let width = FULL_ENCODED_BLOCK_SIZE.min(input.len() - in_offset);
        let bytes = DECODED_BLOCK_SIZES[width].expect("validated by decoded_len");
        decode_block(&input[in_offset..in_offset + width], in_offset, &mut output[out_offset..out_offset + bytes])?;
        in_offset += width;
        out_offset += bytes;
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_sizes() {
        assert_eq!(encoded_len(0), 0);
        assert_eq!(encoded_len(1), 2);
        assert_eq!(encoded_len(8), 11);
        assert_eq!(encoded_len(9), 13);
        assert_eq!(encoded_len(16), 22);

        assert_eq!(decoded_len(0).unwrap(), 0);
        assert_eq!(decoded_len(2).unwrap(), 1);
        assert_eq!(decoded_len(11).unwrap(), 8);
        assert_eq!(decoded_len(13).unwrap(), 9);
        assert!(decoded_len(1).is_err());
        assert!(decoded_len(4).is_err());
        assert!(decoded_len(12).is_err());
    }

    #[test]
    fn test_known_blocks() {
        assert_eq!(encode(&[]), "");
        assert_eq!(encode(&[0]), "11");
        assert_eq!(encode(&[1]), "12");
        assert_eq!(encode(&[0u8; 8]), "11111111111");
        assert_eq!(encode(&[0, 0, 0, 0, 0, 0, 0, 1]), "11111111112");
        assert_eq!(decode("11").unwrap(), vec![0]);
        assert_eq!(decode("11111111112").unwrap(), vec![0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_round_trip() {
        let inputs: Vec<Vec<u8>> = vec![
            vec![],
            vec![0],
            vec![0xFF],
            vec![0; 16],
            (0u8..=255).collect(),
            vec![0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x01],
        ];
        for input in inputs {
            let encoded = encode(&input);
            assert_eq!(encoded.len(), encoded_len(input.len()));
            assert_eq!(decode(&encoded).unwrap(), input, "round trip failed for {:?}", input);
        }
    }

    #[test]
    fn test_partial_block_overflow() {
        // "zz" is the maximal 2-char block value, 57*58 + 57 = 3363, which
        // exceeds one byte.
        assert!(matches!(decode("zz").unwrap_err(), DecodeError::Overflow { .. }));
        // "5Q" is 255 exactly.
        assert_eq!(decode("5Q").unwrap(), vec![0xFF]);
    }

    #[test]
    fn test_invalid_character() {
        let err = decode("1O").unwrap_err();
        assert_eq!(err, DecodeError::InvalidCharacter { character: 'O', position: 1 });
    }
}
