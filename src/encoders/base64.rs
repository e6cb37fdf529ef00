//! Base64, standard and URL-safe, over the bit-packing engine.

use crate::alphabet::{Alphabet, PaddingPosition};
use crate::encoders::bitpack::BitPackCoder;
use crate::encoders::errors::{DecodeError, EncodeError};
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Base64 {
    coder: BitPackCoder,
}

impl Base64 {
    fn from_symbols(symbols: &str) -> Self {
        let alphabet = Alphabet::builder(64, symbols)
            .padding('=', PaddingPosition::End)
            .build()
            .expect("valid base64 alphabet");
        Self { coder: BitPackCoder::new(alphabet).expect("power-of-two radix") }
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
}

/// The RFC 4648 standard alphabet (`+` and `/`).
pub fn standard() -> &'static Base64 {
    static CODER: OnceLock<Base64> = OnceLock::new();
    CODER.get_or_init(|| {
        Base64::from_symbols("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/")
    })
}

/// The URL-safe alphabet (`-` and `_`).
pub fn url_safe() -> &'static Base64 {
    static CODER: OnceLock<Base64> = OnceLock::new();
    CODER.get_or_init(|| {
        Base64::from_symbols("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_")
    })
}
