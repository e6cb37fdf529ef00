//! Multibase: self-describing encoded text.
//!
//! A single prefix character names the scheme; the body follows with no
//! separator. The dispatcher is a thin match over the per-scheme coders —
//! all the real work happens in [`encoders`](crate::encoders).

use crate::encoders::base2_8::{base2, base8};
use crate::encoders::dividing::DividingCoder;
use crate::encoders::errors::DecodeError;
use crate::encoders::{base16, base32, base45, base58, base64, dividing, emoji};

/// The supported multibase encodings and their prefix characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multibase {
    /// `0` — binary
    Base2,
    /// `7` — octal
    Base8,
    /// `9` — decimal, leading zero bytes as `0`
    Base10,
    /// `f` — lowercase hex
    Base16Lower,
    /// `F` — uppercase hex
    Base16Upper,
    /// `b` — RFC 4648 lowercase, no padding
    Base32Lower,
    /// `B` — RFC 4648 uppercase, no padding
    Base32Upper,
    /// `c` — RFC 4648 lowercase with padding
    Base32PadLower,
    /// `C` — RFC 4648 uppercase with padding
    Base32PadUpper,
    /// `v` — base32hex lowercase, no padding
    Base32HexLower,
    /// `V` — base32hex uppercase, no padding
    Base32HexUpper,
    /// `h` — z-base-32
    Base32Z,
    /// `k` — lowercase base36, leading zero bytes as `0`
    Base36Lower,
    /// `K` — uppercase base36
    Base36Upper,
    /// `R` — RFC 9285
    Base45,
    /// `z` — Bitcoin-alphabet Base58
    Base58Btc,
    /// `Z` — Flickr-alphabet Base58
    Base58Flickr,
    /// `m` — standard Base64, no padding
    Base64,
    /// `M` — standard Base64 with padding
    Base64Pad,
    /// `u` — URL-safe Base64, no padding
    Base64Url,
    /// `U` — URL-safe Base64 with padding
    Base64UrlPad,
    /// `🚀` — one emoji per byte
    Base256Emoji,
}

impl Multibase {
    pub const fn prefix(self) -> char {
        match self {
            Multibase::Base2 => '0',
            Multibase::Base8 => '7',
            Multibase::Base10 => '9',
            Multibase::Base16Lower => 'f',
            Multibase::Base16Upper => 'F',
            Multibase::Base32Lower => 'b',
            Multibase::Base32Upper => 'B',
            Multibase::Base32PadLower => 'c',
            Multibase::Base32PadUpper => 'C',
            Multibase::Base32HexLower => 'v',
            Multibase::Base32HexUpper => 'V',
            Multibase::Base32Z => 'h',
            Multibase::Base36Lower => 'k',
            Multibase::Base36Upper => 'K',
            Multibase::Base45 => 'R',
            Multibase::Base58Btc => 'z',
            Multibase::Base58Flickr => 'Z',
            Multibase::Base64 => 'm',
            Multibase::Base64Pad => 'M',
            Multibase::Base64Url => 'u',
            Multibase::Base64UrlPad => 'U',
            Multibase::Base256Emoji => '\u{1F680}',
        }
    }

    pub fn from_prefix(prefix: char) -> Option<Self> {
        Some(match prefix {
            '0' => Multibase::Base2,
            '7' => Multibase::Base8,
            '9' => Multibase::Base10,
            'f' => Multibase::Base16Lower,
            'F' => Multibase::Base16Upper,
            'b' => Multibase::Base32Lower,
            'B' => Multibase::Base32Upper,
            'c' => Multibase::Base32PadLower,
            'C' => Multibase::Base32PadUpper,
            'v' => Multibase::Base32HexLower,
            'V' => Multibase::Base32HexUpper,
            'h' => Multibase::Base32Z,
            'k' => Multibase::Base36Lower,
            'K' => Multibase::Base36Upper,
            'R' => Multibase::Base45,
            'z' => Multibase::Base58Btc,
            'Z' => Multibase::Base58Flickr,
            'm' => Multibase::Base64,
            'M' => Multibase::Base64Pad,
            'u' => Multibase::Base64Url,
            'U' => Multibase::Base64UrlPad,
            '\u{1F680}' => Multibase::Base256Emoji,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Multibase::Base2 => "base2",
            Multibase::Base8 => "base8",
            Multibase::Base10 => "base10",
            Multibase::Base16Lower => "base16",
            Multibase::Base16Upper => "base16upper",
            Multibase::Base32Lower => "base32",
            Multibase::Base32Upper => "base32upper",
            Multibase::Base32PadLower => "base32pad",
            Multibase::Base32PadUpper => "base32padupper",
            Multibase::Base32HexLower => "base32hex",
            Multibase::Base32HexUpper => "base32hexupper",
            Multibase::Base32Z => "base32z",
            Multibase::Base36Lower => "base36",
            Multibase::Base36Upper => "base36upper",
            Multibase::Base45 => "base45",
            Multibase::Base58Btc => "base58btc",
            Multibase::Base58Flickr => "base58flickr",
            Multibase::Base64 => "base64",
            Multibase::Base64Pad => "base64pad",
            Multibase::Base64Url => "base64url",
            Multibase::Base64UrlPad => "base64urlpad",
            Multibase::Base256Emoji => "base256emoji",
        }
    }
}

/// Dividing coders drop leading zero bytes; the multibase forms of base10
/// and base36 keep them as literal zero symbols instead.
fn encode_zero_preserving(coder: &DividingCoder, input: &[u8]) -> String {
    let zeroes = input.iter().take_while(|&&b| b == 0).count();
    let zero = coder.alphabet().zero_symbol() as char;
    let mut output: String = std::iter::repeat_n(zero, zeroes).collect();
    output.push_str(&coder.encode(&input[zeroes..]));
    output
}

fn decode_zero_preserving(coder: &DividingCoder, input: &str) -> Result<Vec<u8>, DecodeError> {
    let zero = coder.alphabet().zero_symbol();
    let zeroes = input.bytes().take_while(|&b| b == zero).count();
    let mut output = vec![0u8; zeroes];
    output.extend(coder.decode(&input[zeroes..])?);
    Ok(output)
}

/// Encodes `input` under `base`, prefix included.
pub fn encode(base: Multibase, input: &[u8]) -> String {
    let body = match base {
        Multibase::Base2 => base2::encode(input),
        Multibase::Base8 => base8::encode(input),
        Multibase::Base10 => encode_zero_preserving(dividing::base10(), input),
        Multibase::Base16Lower => base16::lower().encode(input),
        Multibase::Base16Upper => base16::upper().encode(input),
        Multibase::Base32Lower => base32::filecoin().encode(input, false),
        Multibase::Base32Upper => base32::rfc4648().encode(input, false),
        Multibase::Base32PadLower => base32::filecoin().encode(input, true),
        Multibase::Base32PadUpper => base32::rfc4648().encode(input, true),
        Multibase::Base32HexLower => base32::extended_hex().encode(input, false).to_ascii_lowercase(),
        Multibase::Base32HexUpper => base32::extended_hex().encode(input, false),
        Multibase::Base32Z => base32::zbase32().encode(input, false),
        Multibase::Base36Lower => encode_zero_preserving(dividing::base36(), input),
        Multibase::Base36Upper => {
            encode_zero_preserving(dividing::base36(), input).to_ascii_uppercase()
        }
        Multibase::Base45 => base45::default().encode(input),
        Multibase::Base58Btc => base58::bitcoin().encode(input),
        Multibase::Base58Flickr => base58::flickr().encode(input),
        Multibase::Base64 => base64::standard().encode(input, false),
        Multibase::Base64Pad => base64::standard().encode(input, true),
        Multibase::Base64Url => base64::url_safe().encode(input, false),
        Multibase::Base64UrlPad => base64::url_safe().encode(input, true),
        Multibase::Base256Emoji => emoji::encode(input),
    };

    let mut output = String::with_capacity(base.prefix().len_utf8() + body.len());
    output.push(base.prefix());
    output.push_str(&body);
    output
}

/// Reads the prefix, dispatches the remainder. Empty input is always an
/// error; an unknown prefix reports the character at position zero.
pub fn decode(input: &str) -> Result<(Multibase, Vec<u8>), DecodeError> {
    let prefix = input.chars().next().ok_or(DecodeError::EmptyInput)?;
    let base = Multibase::from_prefix(prefix)
        .ok_or(DecodeError::InvalidCharacter { character: prefix, position: 0 })?;
    let body = &input[prefix.len_utf8()..];

    let bytes = match base {
        Multibase::Base2 => base2::decode(body)?,
        Multibase::Base8 => base8::decode(body)?,
        Multibase::Base10 => decode_zero_preserving(dividing::base10(), body)?,
        Multibase::Base16Lower | Multibase::Base16Upper => base16::lower().decode(body)?,
        Multibase::Base32Lower
        | Multibase::Base32Upper
        | Multibase::Base32PadLower
        | Multibase::Base32PadUpper => base32::rfc4648().decode(body)?,
        Multibase::Base32HexLower | Multibase::Base32HexUpper => {
            base32::extended_hex().decode(body)?
        }
        Multibase::Base32Z => base32::zbase32().decode(body)?,
        Multibase::Base36Lower | Multibase::Base36Upper => {
            decode_zero_preserving(dividing::base36(), body)?
        }
        Multibase::Base45 => base45::default().decode(body)?,
        Multibase::Base58Btc => base58::bitcoin().decode(body)?,
        Multibase::Base58Flickr => base58::flickr().decode(body)?,
        Multibase::Base64 | Multibase::Base64Pad => base64::standard().decode(body)?,
        Multibase::Base64Url | Multibase::Base64UrlPad => base64::url_safe().decode(body)?,
        Multibase::Base256Emoji => emoji::decode(body)?,
    };

    Ok((base, bytes))
}
