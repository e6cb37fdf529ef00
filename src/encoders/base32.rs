//! Base32 flavors over the shared bit-packing engine.
//!
//! RFC 4648 (upper and lower), Extended Hex, z-base-32, Crockford and
//! Base32H all pack 5 bits per symbol; they differ only in alphabet,
//! aliasing, case policy and padding placement.
//!
//! Base32H is provisional: its reference decode path is incomplete, so the
//! start-aligned bit walk here is inferred from its encode direction and
//! its padding-at-start contract. Revisit once a confirmed vector set
//! exists.

use crate::alphabet::{Alphabet, PaddingPosition};
use crate::encoders::bitpack::BitPackCoder;
use crate::encoders::errors::{AlphabetError, DecodeError, EncodeError};
use std::sync::OnceLock;

/// A Base32 coder: the bit-packing engine plus 64-bit integer conveniences.
#[derive(Debug, Clone)]
pub struct Base32 {
    coder: BitPackCoder,
}

impl Base32 {
    pub fn new(alphabet: Alphabet) -> Result<Self, AlphabetError> {
        Ok(Self { coder: BitPackCoder::new(alphabet)? })
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.coder.alphabet()
    }

    pub fn encoded_len(&self, byte_len: usize, with_padding: bool) -> usize {
        self.coder.encoded_len(byte_len, with_padding)
    }

    pub fn safe_decoded_len(&self, char_len: usize) -> usize {
        self.coder.safe_decoded_len(char_len)
    }

    pub fn encode_into(
        &self,
        input: &[u8],
        output: &mut [u8],
        with_padding: bool,
    ) -> Result<usize, EncodeError> {
        self.coder.encode_into(input, output, with_padding)
    }

    pub fn decode_into(&self, input: &str, output: &mut [u8]) -> Result<usize, DecodeError> {
        self.coder.decode_into(input, output)
    }

    pub fn encode(&self, input: &[u8], with_padding: bool) -> String {
        self.coder.encode(input, with_padding)
    }

    /// Decode accepts both padded and unpadded forms.
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        self.coder.decode(input)
    }

    /// Encodes a 64-bit integer by trimming leading zero bytes of its
    /// big-endian form. The byte view makes the wire output identical on
    /// every platform; zero encodes as the empty string.
    pub fn encode_u64(&self, value: u64) -> String {
        let bytes = value.to_be_bytes();
        let start = bytes.iter().take_while(|&&b| b == 0).count();
        self.encode(&bytes[start..], false)
    }

    /// Inverse of [`encode_u64`](Self::encode_u64).
    pub fn decode_u64(&self, input: &str) -> Result<u64, DecodeError> {
        let bytes = self.decode(input)?;
        if bytes.len() > 8 {
            return Err(DecodeError::Overflow { position: 0 });
        }
        let mut value = 0u64;
        for &byte in &bytes {
            value = (value << 8) | byte as u64;
        }
        Ok(value)
    }
}

/// RFC 4648 uppercase with `=` padding; decode accepts lowercase.
pub fn rfc4648() -> &'static Base32 {
    static CODER: OnceLock<Base32> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet = Alphabet::builder(32, "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567")
            .case_insensitive()
            .padding('=', PaddingPosition::End)
            .build()
            .expect("valid rfc4648 alphabet");
        Base32::new(alphabet).expect("power-of-two radix")
    })
}

/// RFC 4648 Extended Hex (`base32hex`), uppercase with `=` padding.
pub fn extended_hex() -> &'static Base32 {
    static CODER: OnceLock<Base32> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet = Alphabet::builder(32, "0123456789ABCDEFGHIJKLMNOPQRSTUV")
            .case_insensitive()
            .padding('=', PaddingPosition::End)
            .build()
            .expect("valid base32hex alphabet");
        Base32::new(alphabet).expect("power-of-two radix")
    })
}

/// Lowercase RFC 4648 as used by FileCoin and multibase `b`.
pub fn filecoin() -> &'static Base32 {
    static CODER: OnceLock<Base32> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet = Alphabet::builder(32, "abcdefghijklmnopqrstuvwxyz234567")
            .case_insensitive()
            .padding('=', PaddingPosition::End)
            .build()
            .expect("valid filecoin alphabet");
        Base32::new(alphabet).expect("power-of-two radix")
    })
}

/// z-base-32 (Tahoe-LAFS, Phil Zimmermann): permuted lowercase, no padding.
pub fn zbase32() -> &'static Base32 {
    static CODER: OnceLock<Base32> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet = Alphabet::new(32, "ybndrfg8ejkmcpqxot1uwisza345h769")
            .expect("valid z-base-32 alphabet");
        Base32::new(alphabet).expect("power-of-two radix")
    })
}

/// Crockford Base32: case-insensitive, `O`/`o` fold to `0`, `I`/`i`/`L`/`l`
/// fold to `1`, no padding.
pub fn crockford() -> &'static Base32 {
    static CODER: OnceLock<Base32> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet = Alphabet::builder(32, "0123456789ABCDEFGHJKMNPQRSTVWXYZ")
            .case_insensitive()
            .aliases(&[('O', '0'), ('o', '0'), ('I', '1'), ('i', '1'), ('L', '1'), ('l', '1')])
            .build()
            .expect("valid crockford alphabet");
        Base32::new(alphabet).expect("power-of-two radix")
    })
}

/// Base32H: human-oriented digits with look-alike aliases, numeral style
/// (start-aligned groups). Provisional pending reference vectors.
pub fn base32h() -> &'static Base32 {
    static CODER: OnceLock<Base32> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet = Alphabet::builder(32, "0123456789ABCDEFGHJKLMNPQRTVWXYZ")
            .case_insensitive()
            .aliases(&[('O', '0'), ('o', '0'), ('I', '1'), ('i', '1'), ('S', '5'), ('s', '5'), ('U', 'V'), ('u', 'V')])
            .padding_position(PaddingPosition::Start)
            .build()
            .expect("valid base32h alphabet");
        Base32::new(alphabet).expect("power-of-two radix")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4648_vectors() {
        // RFC 4648 section 10.
        assert_eq!(rfc4648().encode(b"", true), "");
        assert_eq!(rfc4648().encode(b"f", true), "MY======");
        assert_eq!(rfc4648().encode(b"fo", true), "MZXQ====");
        assert_eq!(rfc4648().encode(b"foo", true), "MZXW6===");
        assert_eq!(rfc4648().encode(b"foob", true), "MZXW6YQ=");
        assert_eq!(rfc4648().encode(b"fooba", true), "MZXW6YTB");
        assert_eq!(rfc4648().encode(b"foobar", true), "MZXW6YTBOI======");
        assert_eq!(rfc4648().encode(b"foobar", false), "MZXW6YTBOI");
    }

    #[test]
    fn test_rfc4648_decode_padded_and_bare() {
        assert_eq!(rfc4648().decode("MZXW6YTBOI======").unwrap(), b"foobar");
        assert_eq!(rfc4648().decode("MZXW6YTBOI").unwrap(), b"foobar");
        assert_eq!(rfc4648().decode("mzxw6ytboi").unwrap(), b"foobar");
    }

    #[test]
    fn test_extended_hex_vectors() {
        assert_eq!(extended_hex().encode(b"foobar", true), "CPNMUOJ1E8======");
        assert_eq!(extended_hex().decode("CPNMUOJ1E8").unwrap(), b"foobar");
    }

    #[test]
    fn test_crockford_aliases() {
        let encoded = crockford().encode(&[0xDE, 0xAD], false);
        let decoded = crockford().decode(&encoded).unwrap();
        assert_eq!(decoded, vec![0xDE, 0xAD]);

        // O and 0 are interchangeable on decode.
        assert_eq!(crockford().decode("O0").unwrap(), crockford().decode("00").unwrap());
        assert_eq!(crockford().decode("1L").unwrap(), crockford().decode("11").unwrap());
    }

    #[test]
    fn test_zbase32_round_trip() {
        for data in [&b""[..], &b"z"[..], &b"hello world"[..], &[0u8, 0xFF, 0x10][..]] {
            let encoded = zbase32().encode(data, false);
            assert_eq!(zbase32().decode(&encoded).unwrap(), data);
        }
    }

    #[test]
    fn test_u64_round_trip() {
        for value in [0u64, 1, 255, 256, 0xDEAD_BEEF, u64::MAX] {
            let encoded = rfc4648().encode_u64(value);
            assert_eq!(rfc4648().decode_u64(&encoded).unwrap(), value, "failed for {}", value);
        }
    }

    #[test]
    fn test_u64_trims_leading_zeroes() {
        // 1 fits one byte; the encoding must match the 1-byte array form.
        assert_eq!(rfc4648().encode_u64(1), rfc4648().encode(&[1], false));
        assert_eq!(rfc4648().encode_u64(0), "");
        assert_eq!(rfc4648().decode_u64("").unwrap(), 0);
    }

    #[test]
    fn test_u64_overflow() {
        // Nine bytes of payload cannot fit a u64.
        let encoded = rfc4648().encode(&[1u8; 9], false);
        assert!(matches!(rfc4648().decode_u64(&encoded).unwrap_err(), DecodeError::Overflow { .. }));
    }

    #[test]
    fn test_base32h_round_trip() {
        for data in [&[][..], &[1][..], &[0xAB, 0xCD, 0xEF][..], &[0u8; 5][..]] {
            let encoded = base32h().encode(data, false);
            assert_eq!(base32h().decode(&encoded).unwrap(), data, "failed for {:?}", data);
        }
    }

    #[test]
    fn test_base32h_aliases() {
        // U folds to V, S folds to 5, case-insensitive throughout.
        assert_eq!(base32h().decode("1U").unwrap(), base32h().decode("1V").unwrap());
        assert_eq!(base32h().decode("2s").unwrap(), base32h().decode("25").unwrap());
        assert_eq!(base32h().decode("2s").unwrap(), base32h().decode("2S").unwrap());
    }

    #[test]
    fn test_invalid_character_reported() {
        assert_eq!(
            rfc4648().decode("MZX!").unwrap_err(),
            DecodeError::InvalidCharacter { character: '!', position: 3 }
        );
    }
}
