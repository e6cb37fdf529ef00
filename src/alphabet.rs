use crate::encoders::errors::AlphabetError;

/// Size of the reverse-lookup table. Every symbol, alias and padding
/// character must sit below this code point.
const LOOKUP_LEN: usize = 127;

/// Where a scheme places its padding characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingPosition {
    /// Padding precedes the payload symbols (Base32H style).
    Start,
    /// Padding follows the payload symbols (RFC 4648 style).
    End,
}

/// An encoding alphabet: an ordered symbol list for a fixed radix plus an
/// O(1) reverse lookup.
///
/// Alphabets are immutable once built. Optional features are configured
/// through [`AlphabetBuilder`]: a padding character with a position,
/// case-insensitive decoding (the opposite-case mapping is derived
/// automatically), and aliases that fold look-alike characters onto a
/// canonical symbol (Crockford's `O` -> `0`).
///
/// Standard flavors are process-wide statics owned by the scheme modules;
/// construction happens at most once behind `OnceLock`.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Box<[u8]>,
    lookup: [Option<u8>; LOOKUP_LEN],
    padding: Option<u8>,
    padding_position: PaddingPosition,
}

impl Alphabet {
    /// Builds a plain alphabet: `radix` symbols, no padding, case-sensitive.
    pub fn new(radix: usize, symbols: &str) -> Result<Self, AlphabetError> {
        Self::builder(radix, symbols).build()
    }

    /// Starts configuring an alphabet.
    pub fn builder(radix: usize, symbols: &str) -> AlphabetBuilder {
        AlphabetBuilder {
            radix,
            symbols: symbols.to_string(),
            padding: None,
            padding_position: PaddingPosition::End,
            aliases: Vec::new(),
            case_insensitive: false,
        }
    }

    /// Number of symbols in the alphabet.
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// The ordered symbol list as raw ASCII bytes.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// The symbol for digit value `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value >= radix`. Coders only produce in-range digits, so a
    /// panic here is an internal invariant violation, not an input error.
    pub fn symbol(&self, value: usize) -> u8 {
        self.symbols[value]
    }

    /// The symbol that represents digit zero.
    pub fn zero_symbol(&self) -> u8 {
        self.symbols[0]
    }

    /// Reverse lookup: the digit value of `character`, or `None` when the
    /// character is outside the low-ASCII table or never mapped.
    ///
    /// This is the single authoritative source of "invalid character" for
    /// every coder built on the alphabet.
    pub fn decode_value(&self, character: char) -> Option<u8> {
        let code = character as usize;
        if code < LOOKUP_LEN { self.lookup[code] } else { None }
    }

    /// Byte-oriented variant of [`decode_value`](Self::decode_value) for
    /// ASCII-only input paths.
    pub fn decode_byte(&self, byte: u8) -> Option<u8> {
        if (byte as usize) < LOOKUP_LEN {
            self.lookup[byte as usize]
        } else {
            None
        }
    }

    /// The padding character, if the alphabet defines one.
    pub fn padding(&self) -> Option<u8> {
        self.padding
    }

    /// Where padding goes. Only meaningful when [`padding`](Self::padding)
    /// is `Some`.
    pub fn padding_position(&self) -> PaddingPosition {
        self.padding_position
    }

    /// Whether `character` is this alphabet's padding character.
    pub fn is_padding(&self, character: char) -> bool {
        match self.padding {
            Some(p) => character as u32 == p as u32,
            None => false,
        }
    }

    /// The symbol list rendered as a `&str` for messages and listings.
    pub fn symbols_str(&self) -> &str {
        // Symbols are validated ASCII at construction.
        std::str::from_utf8(&self.symbols).unwrap()
    }
}

/// Configures and validates an [`Alphabet`].
///
/// The build order is fixed: symbols, then derived case mappings, then
/// aliases, then padding. Each step fails fast with an [`AlphabetError`]
/// naming the offending character.
#[derive(Debug, Clone)]
pub struct AlphabetBuilder {
    radix: usize,
    symbols: String,
    padding: Option<char>,
    padding_position: PaddingPosition,
    aliases: Vec<(char, char)>,
    case_insensitive: bool,
}

impl AlphabetBuilder {
    /// Sets the padding character and its position.
    pub fn padding(mut self, character: char, position: PaddingPosition) -> Self {
        self.padding = Some(character);
        self.padding_position = position;
        self
    }

    /// Sets the padding position without a padding character. Numeral-style
    /// schemes align their final group to the start without emitting filler.
    pub fn padding_position(mut self, position: PaddingPosition) -> Self {
        self.padding_position = position;
        self
    }

    /// Adds `(from, canonical)` alias pairs, applied after the base mapping.
    /// The canonical character must be a symbol; the source must be unmapped.
    pub fn aliases(mut self, pairs: &[(char, char)]) -> Self {
        self.aliases.extend_from_slice(pairs);
        self
    }

    /// Derives the opposite-case mapping for every letter symbol. Fails at
    /// build time if both cases of a letter are already explicit symbols.
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    pub fn build(self) -> Result<Alphabet, AlphabetError> {
        let count = self.symbols.chars().count();
        if count != self.radix {
            return Err(AlphabetError::WrongLength { expected: self.radix, actual: count });
        }
        if count > LOOKUP_LEN {
            return Err(AlphabetError::WrongLength { expected: LOOKUP_LEN, actual: count });
        }

        let mut symbols = Vec::with_capacity(count);
        let mut lookup = [None; LOOKUP_LEN];

        for (value, character) in self.symbols.chars().enumerate() {
            let code = character as usize;
            if code >= LOOKUP_LEN {
                return Err(AlphabetError::NonAsciiSymbol { symbol: character });
            }
            if lookup[code].is_some() {
                return Err(AlphabetError::DuplicateSymbol { symbol: character });
            }
            lookup[code] = Some(value as u8);
            symbols.push(code as u8);
        }

        if self.case_insensitive {
            for (value, character) in self.symbols.chars().enumerate() {
                if !character.is_ascii_alphabetic() {
                    continue;
                }
                let folded = if character.is_ascii_uppercase() {
                    character.to_ascii_lowercase()
                } else {
                    character.to_ascii_uppercase()
                };
                let code = folded as usize;
                match lookup[code] {
                    // Both cases are explicit members; folding would have to
                    // pick one of two distinct values.
                    Some(_) => return Err(AlphabetError::AmbiguousCase { symbol: character }),
                    None => lookup[code] = Some(value as u8),
                }
            }
        }

        for &(from, to) in &self.aliases {
            let from_code = from as usize;
            if from_code >= LOOKUP_LEN {
                return Err(AlphabetError::NonAsciiSymbol { symbol: from });
            }
            let to_code = to as usize;
            let target = if to_code < LOOKUP_LEN { lookup[to_code] } else { None };
            let Some(value) = target else {
                return Err(AlphabetError::InvalidAlias { from, to });
            };
            if lookup[from_code].is_some() {
                return Err(AlphabetError::InvalidAlias { from, to });
            }
            lookup[from_code] = Some(value);
        }

        let padding = match self.padding {
            Some(character) => {
                let code = character as usize;
                if code >= LOOKUP_LEN {
                    return Err(AlphabetError::NonAsciiSymbol { symbol: character });
                }
                if lookup[code].is_some() {
                    return Err(AlphabetError::InvalidPadding { symbol: character });
                }
                Some(code as u8)
            }
            None => None,
        };

        Ok(Alphabet {
            symbols: symbols.into_boxed_slice(),
            lookup,
            padding,
            padding_position: self.padding_position,
        })
    }
}
