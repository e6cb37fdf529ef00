//! Checksum-augmented address formats: Base58Check, CB58 and c32check.
//!
//! All three wrap a zero-prefix-preserving big-number coder with a version
//! byte and/or a truncated SHA-256 digest. They are pure functions; a bad
//! checksum is a definitional failure (`ChecksumMismatch`), never a retry.

use crate::alphabet::Alphabet;
use crate::encoders::base58::{self, Base58};
use crate::encoders::errors::DecodeError;
use sha2::{Digest, Sha256};
use std::sync::OnceLock;

/// Length of the truncated digest appended by every format here.
const CHECKSUM_LEN: usize = 4;

fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// `Base58(version ‖ payload ‖ sha256(sha256(version ‖ payload))[0..4])`.
pub fn base58check_encode(payload: &[u8], version: u8) -> String {
    let mut buffer = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    buffer.push(version);
    buffer.extend_from_slice(payload);
    let checksum = double_sha256(&buffer);
    buffer.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    base58::bitcoin().encode(&buffer)
}

/// Decodes and verifies a Base58Check string, returning `(version, payload)`.
///
/// Fails closed: anything shorter than version + checksum is
/// `InvalidLength`, a digest mismatch is `ChecksumMismatch`.
pub fn base58check_decode(input: &str) -> Result<(u8, Vec<u8>), DecodeError> {
    let decoded = base58::bitcoin().decode(input)?;
    if decoded.len() < 1 + CHECKSUM_LEN {
        return Err(DecodeError::InvalidLength {
            length: decoded.len(),
            expected: "at least 5 bytes of decoded payload",
        });
    }
    let (body, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    let expected = double_sha256(body);
    if checksum != &expected[..CHECKSUM_LEN] {
        return Err(DecodeError::ChecksumMismatch);
    }
    Ok((body[0], body[1..].to_vec()))
}

/// CB58 (Avalanche): `payload ‖ sha256(payload)[28..32]` — single hash, no
/// version byte.
pub fn cb58_encode(payload: &[u8]) -> String {
    let mut buffer = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    buffer.extend_from_slice(payload);
    let digest = sha256(payload);
    buffer.extend_from_slice(&digest[32 - CHECKSUM_LEN..]);
    base58::bitcoin().encode(&buffer)
}

/// Decodes and verifies a CB58 string, returning the payload.
pub fn cb58_decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let decoded = base58::bitcoin().decode(input)?;
    if decoded.len() < CHECKSUM_LEN {
        return Err(DecodeError::InvalidLength {
            length: decoded.len(),
            expected: "at least 4 bytes of decoded payload",
        });
    }
    let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    let digest = sha256(payload);
    if checksum != &digest[32 - CHECKSUM_LEN..] {
        return Err(DecodeError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}

/// The Crockford-alphabet coder used by c32check. Same zero-prefix dividing
/// machinery as Base58, radix 32.
fn c32() -> &'static Base58 {
    static CODER: OnceLock<Base58> = OnceLock::new();
    CODER.get_or_init(|| {
        let alphabet = Alphabet::builder(32, "0123456789ABCDEFGHJKMNPQRSTVWXYZ")
            .case_insensitive()
            .aliases(&[('O', '0'), ('o', '0'), ('I', '1'), ('i', '1'), ('L', '1'), ('l', '1')])
            .build()
            .expect("valid crockford alphabet");
        Base58::new(alphabet)
    })
}

/// c32check (Stacks): `version ‖ payload ‖ sha256d(version ‖ payload)[0..4]`
/// through the Crockford Base32 alphabet. The version goes in as a plain
/// byte, exactly like Base58Check; only radix and alphabet differ.
pub fn c32check_encode(payload: &[u8], version: u8) -> String {
    let mut buffer = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    buffer.push(version);
    buffer.extend_from_slice(payload);
    let checksum = double_sha256(&buffer);
    buffer.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    c32().encode(&buffer)
}

/// Decodes and verifies a c32check string, returning `(version, payload)`.
pub fn c32check_decode(input: &str) -> Result<(u8, Vec<u8>), DecodeError> {
    let decoded = c32().decode(input)?;
    if decoded.len() < 1 + CHECKSUM_LEN {
        return Err(DecodeError::InvalidLength {
            length: decoded.len(),
            expected: "at least 5 bytes of decoded payload",
        });
    }
    let (body, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    let expected = double_sha256(body);
    if checksum != &expected[..CHECKSUM_LEN] {
        return Err(DecodeError::ChecksumMismatch);
    }
    Ok((body[0], body[1..].to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base58check_round_trip() {
        let payload = [0x12u8, 0x34, 0x56, 0x78, 0x9A];
        let encoded = base58check_encode(&payload, 0);
        let (version, decoded) = base58check_decode(&encoded).unwrap();
        assert_eq!(version, 0);
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_base58check_burn_address() {
        // Version 0 over twenty zero bytes is the well-known Bitcoin burn
        // address.
        let encoded = base58check_encode(&[0u8; 20], 0);
        assert_eq!(encoded, "1111111111111111111114oLvT2");
        let (version, payload) = base58check_decode(&encoded).unwrap();
        assert_eq!(version, 0);
        assert_eq!(payload, vec![0u8; 20]);
    }

    #[test]
    fn test_base58check_rejects_corruption() {
        let encoded = base58check_encode(&[1, 2, 3, 4], 5);
        let mut corrupted = encoded.into_bytes();
        let last = *corrupted.last().unwrap();
        *corrupted.last_mut().unwrap() = if last == b'2' { b'3' } else { b'2' };
        let corrupted = String::from_utf8(corrupted).unwrap();
        assert_eq!(base58check_decode(&corrupted).unwrap_err(), DecodeError::ChecksumMismatch);
    }

    #[test]
    fn test_base58check_too_short() {
        // "2g" decodes to a single byte, far below version + checksum.
        assert!(matches!(
            base58check_decode("2g").unwrap_err(),
            DecodeError::InvalidLength { .. }
        ));
    }

    #[test]
    fn test_cb58_round_trip() {
        for payload in [&[][..], &[0][..], &[1, 2, 3, 4][..], &[0xFF; 32][..]] {
            let encoded = cb58_encode(payload);
            assert_eq!(cb58_decode(&encoded).unwrap(), payload);
        }
    }

    #[test]
    fn test_cb58_single_hash_differs_from_base58check() {
        // CB58 has no version byte and hashes once; the two formats must not
        // accept each other's strings for the same payload.
        let payload = [9u8, 8, 7];
        let cb = cb58_encode(&payload);
        assert!(base58check_decode(&cb).is_err());
    }

    #[test]
    fn test_cb58_rejects_corruption() {
        let encoded = cb58_encode(&[1, 2, 3, 4]);
        let mut chars: Vec<char> = encoded.chars().collect();
        chars[0] = if chars[0] == '2' { '3' } else { '2' };
        let corrupted: String = chars.into_iter().collect();
        assert!(cb58_decode(&corrupted).is_err());
    }

    #[test]
    fn test_c32check_round_trip() {
        let payload = [0xA0u8, 0xB1, 0xC2, 0xD3];
        let encoded = c32check_encode(&payload, 22);
        let (version, decoded) = c32check_decode(&encoded).unwrap();
        assert_eq!(version, 22);
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_c32check_case_insensitive() {
        let encoded = c32check_encode(&[1, 2, 3], 0);
        let (_, upper) = c32check_decode(&encoded.to_uppercase()).unwrap();
        let (_, lower) = c32check_decode(&encoded.to_lowercase()).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_c32check_rejects_corruption() {
        let encoded = c32check_encode(&[1, 2, 3, 4, 5], 1);
        let mut chars: Vec<char> = encoded.chars().collect();
        let flip = chars.len() / 2;
        chars[flip] = if chars[flip] == '7' { '8' } else { '7' };
        let corrupted: String = chars.into_iter().collect();
        assert!(c32check_decode(&corrupted).is_err());
    }
}
