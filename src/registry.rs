//! Named alphabets: the standard flavors plus user-defined ones loaded
//! from TOML.
//!
//! A registry maps scheme names to runtime [`Codec`]s so embedding
//! applications (and the CLI) can pick encodings by string. Custom entries
//! look like:
//!
//! ```toml
//! [alphabets.dna]
//! symbols = "ACGT"
//! mode = "bit_packing"
//!
//! [alphabets.base20]
//! symbols = "0123456789abcdefghij"
//! case_insensitive = true
//! ```

use crate::alphabet::{Alphabet, PaddingPosition};
use crate::encoders::base16::{self, Base16};
use crate::encoders::base2_8::{base2, base8};
use crate::encoders::base32::{self, Base32};
use crate::encoders::base45::{self, Base45};
use crate::encoders::base58::{self, Base58};
use crate::encoders::base64::{self, Base64};
use crate::encoders::base85::{self, Base85};
use crate::encoders::bitpack::BitPackCoder;
use crate::encoders::dividing::{self, DividingCoder};
use crate::encoders::emoji;
use crate::encoders::errors::{AlphabetError, DecodeError};
use crate::encoders::monero58;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// How a custom alphabet converts bytes to symbols.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EncodingMode {
    /// Whole-buffer base conversion; works for any radix.
    #[default]
    Dividing,
    /// Fixed bit groups; requires a power-of-two radix.
    BitPacking,
}

/// A single `[alphabets.<name>]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct AlphabetConfig {
    /// The ordered symbol list.
    pub symbols: String,
    /// Conversion mode; auto-detected from the radix when omitted.
    #[serde(default)]
    pub mode: Option<EncodingMode>,
    /// Optional padding character (bit-packing only).
    #[serde(default)]
    pub padding: Option<String>,
    /// Derive opposite-case mappings on decode.
    #[serde(default)]
    pub case_insensitive: bool,
}

impl AlphabetConfig {
    /// Explicit mode, or bit-packing exactly when the radix is a power of
    /// two.
    pub fn effective_mode(&self) -> EncodingMode {
        if let Some(mode) = &self.mode {
            return mode.clone();
        }
        let radix = self.symbols.chars().count();
        if radix > 0 && radix.is_power_of_two() {
            EncodingMode::BitPacking
        } else {
            EncodingMode::Dividing
        }
    }

    fn build(&self) -> Result<Codec, AlphabetError> {
        let radix = self.symbols.chars().count();
        let mut builder = Alphabet::builder(radix, &self.symbols);
        if let Some(padding) = &self.padding {
            if let Some(character) = padding.chars().next() {
                builder = builder.padding(character, PaddingPosition::End);
            }
        }
        if self.case_insensitive {
            builder = builder.case_insensitive();
        }
        let alphabet = builder.build()?;

        Ok(match self.effective_mode() {
            EncodingMode::Dividing => Codec::Dividing(DividingCoder::new(alphabet)),
            EncodingMode::BitPacking => Codec::BitPack(BitPackCoder::new(alphabet)?),
        })
    }
}

/// A runtime-selected coder. Thin dispatch; the per-scheme modules do the
/// work.
#[derive(Debug, Clone)]
pub enum Codec {
    Dividing(DividingCoder),
    ZeroPrefix(Base58),
    Base16(Base16),
    Base32(Base32),
    Base64(Base64),
    Base45(Base45),
    Base85(Base85),
    BitPack(BitPackCoder),
    Base2,
    Base8,
    Monero58,
    Base256Emoji,
}

impl Codec {
    /// Encodes with the scheme's defaults (padding on, where defined).
    pub fn encode(&self, input: &[u8]) -> String {
        match self {
            Codec::Dividing(coder) => coder.encode(input),
            Codec::ZeroPrefix(coder) => coder.encode(input),
            Codec::Base16(coder) => coder.encode(input),
            Codec::Base32(coder) => coder.encode(input, true),
            Codec::Base64(coder) => coder.encode(input, true),
            Codec::Base45(coder) => coder.encode(input),
            Codec::Base85(coder) => coder.encode(input),
            Codec::BitPack(coder) => coder.encode(input, true),
            Codec::Base2 => base2::encode(input),
            Codec::Base8 => base8::encode(input),
            Codec::Monero58 => monero58::encode(input),
            Codec::Base256Emoji => emoji::encode(input),
        }
    }

    pub fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        match self {
            Codec::Dividing(coder) => coder.decode(input),
            Codec::ZeroPrefix(coder) => coder.decode(input),
            Codec::Base16(coder) => coder.decode(input),
            Codec::Base32(coder) => coder.decode(input),
            Codec::Base64(coder) => coder.decode(input),
            Codec::Base45(coder) => coder.decode(input),
            Codec::Base85(coder) => coder.decode(input),
            Codec::BitPack(coder) => coder.decode(input),
            Codec::Base2 => base2::decode(input),
            Codec::Base8 => base8::decode(input),
            Codec::Monero58 => monero58::decode(input),
            Codec::Base256Emoji => emoji::decode(input),
        }
    }
}

/// Errors from loading registry TOML.
#[derive(Debug)]
pub enum RegistryError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The TOML itself is malformed.
    Parse(toml::de::Error),
    /// An alphabet definition is invalid.
    Alphabet { name: String, source: AlphabetError },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Io(err) => write!(f, "cannot read registry file: {}", err),
            RegistryError::Parse(err) => write!(f, "malformed registry TOML: {}", err),
            RegistryError::Alphabet { name, source } => {
                write!(f, "invalid alphabet '{}': {}", name, source)
            }
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::Io(err) => Some(err),
            RegistryError::Parse(err) => Some(err),
            RegistryError::Alphabet { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    alphabets: HashMap<String, AlphabetConfig>,
}

/// Name -> codec map, seeded with every standard flavor.
#[derive(Debug, Clone)]
pub struct Registry {
    codecs: HashMap<String, Codec>,
}

impl Registry {
    pub fn with_defaults() -> Self {
        let mut codecs = HashMap::new();
        let defaults: [(&str, Codec); 24] = [
            ("base2", Codec::Base2),
            ("base8", Codec::Base8),
            ("base10", Codec::Dividing(dividing::base10().clone())),
            ("base36", Codec::Dividing(dividing::base36().clone())),
            ("base62", Codec::Dividing(dividing::base62().clone())),
            ("base16", Codec::Base16(base16::lower().clone())),
            ("base16upper", Codec::Base16(base16::upper().clone())),
            ("base32", Codec::Base32(base32::rfc4648().clone())),
            ("base32hex", Codec::Base32(base32::extended_hex().clone())),
            ("base32z", Codec::Base32(base32::zbase32().clone())),
            ("crockford", Codec::Base32(base32::crockford().clone())),
            ("base32h", Codec::Base32(base32::base32h().clone())),
            ("filecoin", Codec::Base32(base32::filecoin().clone())),
            ("base45", Codec::Base45(base45::default().clone())),
            ("base58", Codec::ZeroPrefix(base58::bitcoin().clone())),
            ("base58ripple", Codec::ZeroPrefix(base58::ripple().clone())),
            ("base58flickr", Codec::ZeroPrefix(base58::flickr().clone())),
            ("z85", Codec::Base85(base85::z85().clone())),
            ("ascii85", Codec::Base85(base85::ascii85().clone())),
            ("base85rfc1924", Codec::Base85(base85::rfc1924().clone())),
            ("base64", Codec::Base64(base64::standard().clone())),
            ("base64url", Codec::Base64(base64::url_safe().clone())),
            ("monero58", Codec::Monero58),
            ("base256emoji", Codec::Base256Emoji),
        ];
        for (name, codec) in defaults {
            codecs.insert(name.to_string(), codec);
        }
        Self { codecs }
    }

    pub fn get(&self, name: &str) -> Option<&Codec> {
        self.codecs.get(name)
    }

    /// All registered names, sorted for stable listings.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Merges custom alphabets from a TOML document. Later definitions
    /// shadow earlier ones, including built-ins.
    pub fn load_toml_str(&mut self, text: &str) -> Result<(), RegistryError> {
        let file: RegistryFile = toml::from_str(text).map_err(RegistryError::Parse)?;
        for (name, config) in file.alphabets {
            let codec = config
                .build()
                .map_err(|source| RegistryError::Alphabet { name: name.clone(), source })?;
            self.codecs.insert(name, codec);
        }
        Ok(())
    }

    pub fn load_toml_file(&mut self, path: impl AsRef<Path>) -> Result<(), RegistryError> {
        let text = std::fs::read_to_string(path).map_err(RegistryError::Io)?;
        self.load_toml_str(&text)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_present() {
        let registry = Registry::with_defaults();
        for name in ["base2", "base16", "base32", "base58", "base64", "z85", "base256emoji"] {
            assert!(registry.get(name).is_some(), "missing default {}", name);
        }
        assert_eq!(registry.names().len(), 24);
    }

    #[test]
    fn test_default_codecs_round_trip() {
        let registry = Registry::with_defaults();
        let data = b"registry smoke test";
        for name in registry.names() {
            let codec = registry.get(name).unwrap();
            let encoded = codec.encode(data);
            let decoded = codec.decode(&encoded).unwrap();
            assert_eq!(decoded, data, "round trip failed for {}", name);
        }
    }

    #[test]
    fn test_load_custom_alphabet() {
        let mut registry = Registry::with_defaults();
        registry
            .load_toml_str(
                r#"
                [alphabets.dna]
                symbols = "ACGT"
                mode = "bit_packing"

                [alphabets.base20]
                symbols = "0123456789abcdefghij"
                case_insensitive = true
                "#,
            )
            .unwrap();

        let dna = registry.get("dna").unwrap();
        let encoded = dna.encode(&[0b00011011]);
        assert_eq!(encoded, "ACGT");
        assert_eq!(dna.decode("ACGT").unwrap(), vec![0b00011011]);

        let base20 = registry.get("base20").unwrap();
        let encoded = base20.encode(b"hi");
        assert_eq!(base20.decode(&encoded).unwrap(), b"hi");
        assert_eq!(base20.decode(&encoded.to_uppercase()).unwrap(), b"hi");
    }

    #[test]
    fn test_mode_auto_detection() {
        let config = AlphabetConfig {
            symbols: "0123".to_string(),
            mode: None,
            padding: None,
            case_insensitive: false,
        };
        assert_eq!(config.effective_mode(), EncodingMode::BitPacking);

        let config = AlphabetConfig {
            symbols: "0123456789".to_string(),
            mode: None,
            padding: None,
            case_insensitive: false,
        };
        assert_eq!(config.effective_mode(), EncodingMode::Dividing);
    }

    #[test]
    fn test_invalid_alphabet_reports_name() {
        let mut registry = Registry::with_defaults();
        let err = registry
            .load_toml_str("[alphabets.bad]\nsymbols = \"aa\"\n")
            .unwrap_err();
        assert!(matches!(err, RegistryError::Alphabet { ref name, .. } if name == "bad"));
    }

    #[test]
    fn test_malformed_toml() {
        let mut registry = Registry::with_defaults();
        assert!(matches!(
            registry.load_toml_str("not toml [").unwrap_err(),
            RegistryError::Parse(_)
        ));
    }
}
