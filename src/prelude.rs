//! Convenient re-exports for common usage.
//!
//! A single import for the types most callers touch:
//!
//! ```
//! use base_prism::prelude::*;
//!
//! let registry = Registry::with_defaults();
//! let encoded = registry.get("base58").unwrap().encode(b"hello");
//! assert_eq!(registry.get("base58").unwrap().decode(&encoded).unwrap(), b"hello");
//! ```

pub use crate::{
    Alphabet,
    AlphabetBuilder,
    AlphabetError,
    Codec,
    DecodeError,
    EncodeError,
    EncodingMode,
    Multibase,
    PaddingPosition,
    Registry,

    encoders::base16,
    encoders::base32,
    encoders::base45,
    encoders::base58,
    encoders::base64,
    encoders::base85,
    encoders::check,
    encoders::dividing,
    encoders::emoji,
    encoders::monero58,

    multibase,
};
