use std::fmt;

/// Errors raised while building an [`Alphabet`](crate::Alphabet).
///
/// All of these are configuration mistakes: they are detected once, at
/// construction time, and never during encode/decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// The symbol list does not match the declared radix.
    WrongLength { expected: usize, actual: usize },
    /// The same character appears twice in the symbol list.
    DuplicateSymbol { symbol: char },
    /// A symbol, alias or padding character is outside the low-ASCII table.
    NonAsciiSymbol { symbol: char },
    /// Case-insensitivity was requested but both cases of a letter are
    /// already explicit members of the symbol list.
    AmbiguousCase { symbol: char },
    /// The padding character collides with a mapped symbol.
    InvalidPadding { symbol: char },
    /// An alias source is already mapped, or its target is not a symbol.
    InvalidAlias { from: char, to: char },
    /// A bit-packing coder requires a power-of-two radix.
    InvalidRadix { radix: usize },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::WrongLength { expected, actual } => {
                write!(f, "alphabet has {} symbols, radix requires {}", actual, expected)
            }
            AlphabetError::DuplicateSymbol { symbol } => {
                write!(f, "duplicate symbol '{}' in alphabet", symbol)
            }
            AlphabetError::NonAsciiSymbol { symbol } => {
                write!(f, "symbol '{}' is outside the low-ASCII range", symbol.escape_unicode())
            }
            AlphabetError::AmbiguousCase { symbol } => {
                write!(f, "both cases of '{}' are explicit symbols; case-insensitive mapping is ambiguous", symbol)
            }
            AlphabetError::InvalidPadding { symbol } => {
                write!(f, "padding character '{}' collides with an alphabet symbol", symbol)
            }
            AlphabetError::InvalidAlias { from, to } => {
                write!(f, "invalid alias '{}' -> '{}'", from, to)
            }
            AlphabetError::InvalidRadix { radix } => {
                write!(f, "radix {} is not a power of two", radix)
            }
        }
    }
}

impl std::error::Error for AlphabetError {}

/// Errors that can occur during decoding.
///
/// Every variant is detected synchronously at the point of failure and
/// reported through the return value; decode loops never panic on bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character not in the alphabet. `position` is the
    /// byte offset of the offending character in the input text.
    InvalidCharacter { character: char, position: usize },
    /// The input length violates the scheme's congruency requirement.
    InvalidLength { length: usize, expected: &'static str },
    /// A Base85 shortcut character appeared in the middle of a block.
    InvalidShortcut { character: char, position: usize },
    /// A checksum-bearing format failed verification.
    ChecksumMismatch,
    /// The caller-supplied output buffer is too small. Nothing beyond the
    /// reported length has been written; contents are unspecified on error.
    InsufficientBuffer { needed: usize },
    /// The input string is empty where the scheme requires content.
    EmptyInput,
    /// A block or numeric convenience decode exceeded its value range.
    Overflow { position: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidCharacter { character, position } => {
                write!(f, "invalid character '{}' at position {}", character, position)
            }
            DecodeError::InvalidLength { length, expected } => {
                write!(f, "invalid input length {}, expected {}", length, expected)
            }
            DecodeError::InvalidShortcut { character, position } => {
                write!(f, "shortcut character '{}' inside a block at position {}", character, position)
            }
            DecodeError::ChecksumMismatch => write!(f, "checksum mismatch"),
            DecodeError::InsufficientBuffer { needed } => {
                write!(f, "output buffer too small, need at least {} bytes", needed)
            }
            DecodeError::EmptyInput => write!(f, "cannot decode empty input"),
            DecodeError::Overflow { position } => {
                write!(f, "value overflow in block at position {}", position)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors that can occur during buffer-based encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The caller-supplied output buffer is too small.
    InsufficientBuffer { needed: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InsufficientBuffer { needed } => {
                write!(f, "output buffer too small, need at least {} units", needed)
            }
        }
    }
}

impl std::error::Error for EncodeError {}
