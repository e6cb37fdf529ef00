//! Multi-scheme binary-to-text encoding.
//!
//! Positional big-number codes (Base58, Base62, Base36, Base10), bit-packing
//! codes (Base16, Base32, Base64, Base85, Base8, Base2), checksum address
//! formats (Base58Check, CB58, c32check), Monero's block Base58, Base45,
//! Base256Emoji, and a [multibase] dispatcher tying them together.
//!
//! Every coder is immutable after construction and safe to share across
//! threads; encode/decode calls are pure transforms whose working state
//! lives on the stack. The standard flavors are process-wide statics:
//!
//! ```
//! use base_prism::encoders::{base32, base58};
//!
//! assert_eq!(base58::bitcoin().encode(&[0x00, 0x00, 0x01, 0x02, 0x03]), "11Ldp");
//! assert_eq!(base32::rfc4648().encode(b"foobar", true), "MZXW6YTBOI======");
//! ```
//!
//! Buffer-based variants avoid allocation; size the output with the
//! scheme's safe estimators first:
//!
//! ```
//! use base_prism::encoders::base58;
//!
//! let coder = base58::bitcoin();
//! let data = [0x51, 0x6b, 0x6f, 0xcd, 0x0f];
//! let mut buffer = vec![0u8; coder.safe_encoded_len(&data)];
//! let written = coder.encode_into(&data, &mut buffer).unwrap();
//! assert_eq!(&buffer[..written], b"ABnLTmg");
//! ```

mod alphabet;
#[cfg(feature = "cli")]
pub mod cli;
pub mod encoders;
pub mod multibase;
pub mod prelude;
pub mod registry;
pub mod streaming;

pub use alphabet::{Alphabet, AlphabetBuilder, PaddingPosition};
pub use encoders::errors::{AlphabetError, DecodeError, EncodeError};
pub use multibase::Multibase;
pub use registry::{AlphabetConfig, Codec, EncodingMode, Registry, RegistryError};
