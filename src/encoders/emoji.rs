//! Base256Emoji: every byte value maps to one emoji.
//!
//! The table is the multiformats base256emoji listing — a rocket-ship
//! opener followed by the most-used emoji. Entries are single Unicode
//! scalar values, so decoding walks `char`s; host environments that index
//! UTF-16 units have to reassemble surrogate pairs first, but a Rust
//! `&str` is always well-formed and any scalar outside the table is simply
//! an invalid character.

use crate::encoders::errors::DecodeError;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Byte value -> emoji, in table order.
const TABLE: &str = "🚀🪐☄🛰🌌🌑🌒🌓🌔🌕🌖🌗🌘🌍🌏🌎🐉☀💻🖥💾💿😂❤😍🤣😊🙏💕😭😘👍😅👏😁🔥🥰💔💖💙😢🤔😆🙄💪😉☺👌🤗💜😔😎😇🌹🤦🎉💞✌✨🤷😱😌🌸🙌😋💗💚😏💛🙂💓🤩😄😀🖤😃💯🙈👇🎶😒🤭❣😜💋👀😪😑💥🙋😞😩😡🤪👊🥳😥🤤👉💃😳✋😚😝😴🌟😬🙃🍀🌷😻😓⭐✅🥺🌈😈🤘💦✔😣🏃💐☹🎊💘😠☝😕🌺🎂🌻😐🖕💝🙊😹🗣💫💀👑🎵🤞😛🔴😤🌼😫⚽🤙☕🏆🤫👈😮🙆🍻🍃🐶💁😲🌿🧡🎁⚡🌞🎈❌✊👋😰🤨😶🤝🚶💰🍓💢🤟🙁🚨💨🤬✈🎀🍺🤓😙💟🌱😖👶🥴▶➡❓💎💸⬇😨🌚🦋😷🕺⚠🙅😟😵👎🤲🤠🤧📌🔵💅🧐🐾🍒😗🤑🌊🤯🐷☎💧😯💆👆🎤🙇🍑❄🌴💣🐸💌📍🥀🤢👅💡💩👐📸👻🤐🤮🎼🥵🚩🍎🍊👼💍📣🥂";

fn forward() -> &'static [char; 256] {
    static FORWARD: OnceLock<[char; 256]> = OnceLock::new();
    FORWARD.get_or_init(|| {
        let mut table = ['\0'; 256];
        let mut count = 0;
        for (slot, character) in table.iter_mut().zip(TABLE.chars()) {
            *slot = character;
            count += 1;
        }
        assert_eq!(count, 256, "emoji table must hold exactly 256 entries");
        table
    })
}

fn reverse() -> &'static HashMap<char, u8> {
    static REVERSE: OnceLock<HashMap<char, u8>> = OnceLock::new();
    REVERSE.get_or_init(|| {
        forward()
            .iter()
            .enumerate()
            .map(|(value, &character)| (character, value as u8))
            .collect()
    })
}

/// Exact decoded length: one byte per scalar value.
pub fn decoded_len(input: &str) -> usize {
    input.chars().count()
}

pub fn encode(input: &[u8]) -> String {
    let table = forward();
    let mut output = String::with_capacity(input.len() * 4);
    for &byte in input {
        output.push(table[byte as usize]);
    }
    output
}

/// Decodes into a caller buffer, one scalar value at a time.
pub fn decode_into(input: &str, output: &mut [u8]) -> Result<usize, DecodeError> {
    let table = reverse();
    let mut written = 0;

    for (position, character) in input.char_indices() {
        let &value = table
            .get(&character)
            .ok_or(DecodeError::InvalidCharacter { character, position })?;
        let slot = output.get_mut(written).ok_or(DecodeError::InsufficientBuffer {
            needed: decoded_len(input),
        })?;
        *slot = value;
        written += 1;
    }

    Ok(written)
}

pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let mut output = vec![0u8; decoded_len(input)];
    let len = decode_into(input, &mut output)?;
    output.truncate(len);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_complete_and_unique() {
        let table = forward();
        let mut seen = std::collections::HashSet::new();
        for &character in table.iter() {
            assert_ne!(character, '\0');
            assert!(seen.insert(character), "duplicate emoji {:?}", character);
        }
        assert_eq!(reverse().len(), 256);
    }

    #[test]
    fn test_zero_is_rocket() {
        assert_eq!(encode(&[0]), "🚀");
        assert_eq!(decode("🚀").unwrap(), vec![0]);
    }

    #[test]
    fn test_round_trip_all_bytes() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = encode(&data);
        assert_eq!(encoded.chars().count(), 256);
        assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_invalid_scalar() {
        let err = decode("🚀x").unwrap_err();
        assert_eq!(err, DecodeError::InvalidCharacter { character: 'x', position: 4 });
    }

    #[test]
    fn test_insufficient_buffer() {
        let encoded = encode(&[1, 2, 3]);
        let mut tiny = [0u8; 2];
        assert!(matches!(
            decode_into(&encoded, &mut tiny).unwrap_err(),
            DecodeError::InsufficientBuffer { needed: 3 }
        ));
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }
}
