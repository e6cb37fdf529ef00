//! Base58 with Bitcoin-compatible zero-prefix handling.
//!
//! Unlike the generic [`DividingCoder`](crate::encoders::dividing::DividingCoder),
//! leading zero bytes are not dropped: each one becomes exactly one literal
//! zero symbol (`1` in the Bitcoin alphabet) at the front of the output, and
//! each leading zero symbol decodes back to a zero byte. The numeric part of
//! the conversion uses the same carry-loop machinery.
//!
//! The coder is radix-agnostic on purpose: the Stacks c32check format reuses
//! it with the Crockford Base32 alphabet, differing from Base58Check only in
//! radix and alphabet.

use crate::alphabet::Alphabet;
use crate::encoders::errors::{DecodeError, EncodeError};
use std::sync::OnceLock;

/// Zero-prefix-preserving big-number coder.
#[derive(Debug, Clone)]
pub struct Base58 {
    alphabet: Alphabet,
    reduction_factor: usize,
}

impl Base58 {
    pub fn new(alphabet: Alphabet) -> Self {
        let reduction_factor = ((alphabet.radix() as f64).log2() * 125.0) as usize;
        Self { alphabet, reduction_factor }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Upper bound on encoded symbols. Leading zero bytes map 1:1, the rest
    /// goes through the reduction-factor estimate.
    pub fn safe_encoded_len(&self, input: &[u8]) -> usize {
        let zeroes = input.iter().take_while(|&&b| b == 0).count();
        zeroes + (input.len() - zeroes) * 1000 / self.reduction_factor + 1
    }

    /// Upper bound on decoded bytes. Leading zero symbols map 1:1.
    pub fn safe_decoded_len(&self, input: &str) -> usize {
        let zero = self.alphabet.zero_symbol();
        let zeroes = input.bytes().take_while(|&b| b == zero).count();
        zeroes + (input.len() - zeroes) * (self.reduction_factor + 1) / 1000 + 1
    }

    pub fn encode_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize, EncodeError> {
        let radix = self.alphabet.radix();
        let mut digits = 0;

        for &byte in input {
            let mut carry = byte as usize;
            for digit in &mut output[..digits] {
                carry += (*digit as usize) << 8;
                *digit = (carry % radix) as u8;
                carry /= radix;
            }
            while carry > 0 {
                let slot = output.get_mut(digits).ok_or(EncodeError::InsufficientBuffer {
                    needed: self.safe_encoded_len(input),
                })?;
                *slot = (carry % radix) as u8;
                digits += 1;
                carry /= radix;
            }
        }

        // One zero symbol per leading zero byte; they carry no magnitude and
        // never enter the division loop.
        for _ in input.iter().take_while(|&&byte| byte == 0) {
            let slot = output.get_mut(digits).ok_or(EncodeError::InsufficientBuffer {
                needed: self.safe_encoded_len(input),
            })?;
            *slot = 0;
            digits += 1;
        }

        for digit in &mut output[..digits] {
            *digit = self.alphabet.symbol(*digit as usize);
        }
        output[..digits].reverse();
        Ok(digits)
    }

    pub fn decode_into(&self, input: &str, output: &mut [u8]) -> Result<usize, DecodeError> {
        let radix = self.alphabet.radix();
        let zero = self.alphabet.zero_symbol();
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
                    needed: self.safe_decoded_len(input),
                })?;
                *slot = (carry & 0xFF) as u8;
                written += 1;
                carry >>= 8;
            }
        }

        for _ in input.bytes().take_while(|&byte| byte == zero) {
            let slot = output.get_mut(written).ok_or(DecodeError::InsufficientBuffer {
                needed: self.safe_decoded_len(input),
            })?;
            *slot = 0;
            written += 1;
        }

        output[..written].reverse();
        Ok(written)
    }

    pub fn encode(&self, input: &[u8]) -> String {
        let mut output = vec![0u8; self.safe_encoded_len(input)];
        let len = self
            .encode_into(input, &mut output)
            .expect("scratch buffer sized to the safe bound");
        output.truncate(len);
        String::from_utf8(output).expect("alphabet symbols are ASCII")
    }

    pub fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        let mut output = vec![0u8; self.safe_decoded_len(input)];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }
}

/// The Bitcoin alphabet: no `0`, `O`, `I` or `l`.
pub fn bitcoin() -> &'static Base58 {
    static CODER: OnceLock<Base58> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet =
            Alphabet::new(58, "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz")
                .expect("valid bitcoin base58 alphabet");
        Base58::new(alphabet)
    })
}

/// The Ripple alphabet: same symbols as Bitcoin, permuted.
pub fn ripple() -> &'static Base58 {
    static CODER: OnceLock<Base58> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet =
            Alphabet::new(58, "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz")
                .expect("valid ripple base58 alphabet");
        Base58::new(alphabet)
    })
}

/// The Flickr alphabet: lowercase before uppercase.
pub fn flickr() -> &'static Base58 {
    static CODER: OnceLock<Base58> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet =
            Alphabet::new(58, "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ")
                .expect("valid flickr base58 alphabet");
        Base58::new(alphabet)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(bitcoin().encode(b""), "");
        assert_eq!(bitcoin().encode(b"a"), "2g");
        assert_eq!(bitcoin().encode(b"bbb"), "a3gV");
        assert_eq!(bitcoin().encode(b"ccc"), "aPEr");
        assert_eq!(
            bitcoin().encode(b"simply a long string"),
            "2cFupjhnEsSn59qHXstmK2ffpLv2"
        );
        assert_eq!(bitcoin().encode(&[0x51, 0x6b, 0x6f, 0xcd, 0x0f]), "ABnLTmg");
        assert_eq!(bitcoin().encode(&[0x57, 0x2e, 0x47, 0x94]), "3EFU7m");
    }

    #[test]
    fn test_decode_known_vectors() {
        assert_eq!(bitcoin().decode("").unwrap(), b"");
        assert_eq!(bitcoin().decode("2g").unwrap(), b"a");
        assert_eq!(bitcoin().decode("a3gV").unwrap(), b"bbb");
        assert_eq!(
            bitcoin().decode("2cFupjhnEsSn59qHXstmK2ffpLv2").unwrap(),
            b"simply a long string"
        );
        assert_eq!(
            bitcoin().decode("3SEo3LWLoPntC").unwrap(),
            vec![0xbf, 0x4f, 0x89, 0x00, 0x1e, 0x67, 0x02, 0x74, 0xdd]
        );
    }

    #[test]
    fn test_zero_prefix_preserved() {
        assert_eq!(bitcoin().encode(&[0, 0, 1, 2, 3]), "11Ldp");
        assert_eq!(bitcoin().decode("11Ldp").unwrap(), vec![0, 0, 1, 2, 3]);

        // All-zero input is nothing but zero symbols.
        assert_eq!(bitcoin().encode(&[0u8; 10]), "1111111111");
        assert_eq!(bitcoin().decode("1111111111").unwrap(), vec![0u8; 10]);
    }

    #[test]
    fn test_zero_prefix_count_matches() {
        for zeroes in 0..8 {
            let mut data = vec![0u8; zeroes];
            data.extend_from_slice(&[0xAB, 0xCD]);
            let encoded = bitcoin().encode(&data);
            let ones = encoded.bytes().take_while(|&b| b == b'1').count();
            assert_eq!(ones, zeroes);
            assert_eq!(bitcoin().decode(&encoded).unwrap(), data);
        }
    }

    #[test]
    fn test_invalid_character() {
        let err = bitcoin().decode("11l").unwrap_err();
        assert_eq!(err, DecodeError::InvalidCharacter { character: 'l', position: 2 });
        let err = bitcoin().decode("0").unwrap_err();
        assert_eq!(err, DecodeError::InvalidCharacter { character: '0', position: 0 });
    }

    #[test]
    fn test_flavors_disagree() {
        let data = b"flavor test";
        let b = bitcoin().encode(data);
        let r = ripple().encode(data);
        let f = flickr().encode(data);
        assert_ne!(b, r);
        assert_ne!(b, f);
        assert_eq!(ripple().decode(&r).unwrap(), data);
        assert_eq!(flickr().decode(&f).unwrap(), data);
    }

    #[test]
    fn test_estimates_are_upper_bounds() {
        let data = [0u8, 0, 0xFF, 0x10, 0x51];
        let encoded = bitcoin().encode(&data);
        assert!(encoded.len() <= bitcoin().safe_encoded_len(&data));
        assert!(data.len() <= bitcoin().safe_decoded_len(&encoded));
    }
}
