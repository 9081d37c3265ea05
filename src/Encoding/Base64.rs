//! Standard-alphabet Base64 with `=` padding (RFC 4648, section 4).

use crate::Bit_utils::narrow_cast;
use thiserror::Error;

/// The 64 data symbols followed by the padding symbol at index 64.
pub const CHARACTER_SET: [u8; 65] =
    *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

pub const PADDING_INDEX: u8 = 64;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Base64Error {
    #[error("base64 input length {length} is not a multiple of 4")]
    InvalidLength { length: usize },
    #[error("byte {symbol:#04x} at position {position} is not a base64 symbol")]
    InvalidSymbol { symbol: u8, position: usize },
    #[error("padding symbol at position {position} is not at the end of the input")]
    MisplacedPadding { position: usize },
}

/// Maps a 6-bit value (or 64, for padding) to its symbol.
///
/// # Panics
/// When `value > 64`.
pub fn to_character_set(value: u8) -> char {
    char::from(CHARACTER_SET[usize::from(value)])
}

/// Inverse of [`to_character_set`]. `None` for bytes outside the table.
pub fn to_index(symbol: u8) -> Option<u8> {
    match symbol {
        b'A'..=b'Z' => Some(symbol - b'A'),
        b'a'..=b'z' => Some(symbol - b'a' + 26),
        b'0'..=b'9' => Some(symbol - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        b'=' => Some(PADDING_INDEX),
        _ => None,
    }
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let bytes = input.as_ref();
    let mut output = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for group in bytes.chunks(3) {
        let triple = group
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, &byte)| acc | u32::from(byte) << (16 - 8 * i));
        // n input bytes carry n + 1 sextets
        let symbols = group.len() + 1;
        for i in 0..4 {
            let value = match i < symbols {
                true => narrow_cast::<u8, u32>(triple >> (18 - 6 * i)) & 0x3F,
                false => PADDING_INDEX,
            };
            output.push(to_character_set(value));
        }
    }
    output
}

/// Rejects input that is not a whole number of 4-symbol groups, bytes outside
/// the table, and `=` anywhere but the tail of the last group.
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Base64Error> {
    let symbols = input.as_ref();
    if symbols.len() % 4 != 0 {
        return Err(Base64Error::InvalidLength {
            length: symbols.len(),
        });
    }
    let group_count = symbols.len() / 4;
    let mut output = Vec::with_capacity(group_count * 3);

    for (g, group) in symbols.chunks_exact(4).enumerate() {
        let is_last = g + 1 == group_count;
        let mut triple = 0u32;
        let mut padding = 0usize;
        for (i, &symbol) in group.iter().enumerate() {
            let position = 4 * g + i;
            let index = to_index(symbol).ok_or(Base64Error::InvalidSymbol { symbol, position })?;
            if index == PADDING_INDEX {
                if !is_last || i < 2 {
                    return Err(Base64Error::MisplacedPadding { position });
                }
                padding += 1;
            } else if padding > 0 {
                // a data symbol after '=' means the earlier '=' was not trailing
                return Err(Base64Error::MisplacedPadding {
                    position: position - padding,
                });
            } else {
                triple |= u32::from(index) << (18 - 6 * i);
            }
        }
        let bytes: [u8; 3] = [
            narrow_cast(triple >> 16),
            narrow_cast(triple >> 8),
            narrow_cast(triple),
        ];
        output.extend_from_slice(&bytes[..3 - padding]);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn character_set_test() {
        assert_eq!(to_character_set(0), 'A');
        assert_eq!(to_character_set(1), 'B');
        assert_eq!(to_character_set(26), 'a');
        assert_eq!(to_character_set(27), 'b');
        assert_eq!(to_character_set(52), '0');
        assert_eq!(to_character_set(62), '+');
        assert_eq!(to_character_set(63), '/');
        assert_eq!(to_character_set(64), '=');
    }

    #[test]
    fn to_index_test() {
        assert_eq!(to_index(b'A'), Some(0));
        assert_eq!(to_index(b'B'), Some(1));
        assert_eq!(to_index(b'a'), Some(26));
        assert_eq!(to_index(b'b'), Some(27));
        assert_eq!(to_index(b'0'), Some(52));
        assert_eq!(to_index(b'+'), Some(62));
        assert_eq!(to_index(b'/'), Some(63));
        assert_eq!(to_index(b'='), Some(64));
        assert_eq!(to_index(b'-'), None);
        assert_eq!(to_index(0xC3), None);
    }

    #[test]
    fn tables_agree() {
        for value in 0..=PADDING_INDEX {
            assert_eq!(to_index(to_character_set(value) as u8), Some(value));
        }
    }

    #[test]
    #[should_panic]
    fn character_set_out_of_range() {
        to_character_set(65);
    }

    #[test]
    fn encode_test() {
        assert_eq!(encode(""), "");
        assert_eq!(encode("M"), "TQ==");
        assert_eq!(encode("Ma"), "TWE=");
        assert_eq!(encode("Man"), "TWFu");
        assert_eq!(encode("pleasure."), "cGxlYXN1cmUu");
        assert_eq!(encode("leasure."), "bGVhc3VyZS4=");
        assert_eq!(encode("easure."), "ZWFzdXJlLg==");
        assert_eq!(encode("asure."), "YXN1cmUu");
        assert_eq!(encode("sure."), "c3VyZS4=");
        assert_eq!(encode([0xFBu8, 0xFF]), "+/8=");
    }

    #[test]
    fn decode_test() {
        assert_eq!(decode("").unwrap(), b"");
        assert_eq!(decode("TQ==").unwrap(), b"M");
        assert_eq!(decode("TWE=").unwrap(), b"Ma");
        assert_eq!(decode("TWFu").unwrap(), b"Man");
        assert_eq!(decode("cGxlYXN1cmUu").unwrap(), b"pleasure.");
        assert_eq!(decode("bGVhc3VyZS4=").unwrap(), b"leasure.");
        assert_eq!(decode("ZWFzdXJlLg==").unwrap(), b"easure.");
        assert_eq!(decode("YXN1cmUu").unwrap(), b"asure.");
        assert_eq!(decode("c3VyZS4=").unwrap(), b"sure.");
        assert_eq!(decode("+/8=").unwrap(), [0xFB, 0xFF]);
    }

    #[test]
    fn decode_rejects_malformed() {
        assert_eq!(
            decode("TWF"),
            Err(Base64Error::InvalidLength { length: 3 })
        );
        assert_eq!(
            decode("TW-u"),
            Err(Base64Error::InvalidSymbol {
                symbol: b'-',
                position: 2
            })
        );
        assert_eq!(
            decode("TQ==TWFu"),
            Err(Base64Error::MisplacedPadding { position: 2 })
        );
        assert_eq!(
            decode("T==="),
            Err(Base64Error::MisplacedPadding { position: 1 })
        );
        assert_eq!(
            decode("TQ=u"),
            Err(Base64Error::MisplacedPadding { position: 2 })
        );
        assert_eq!(
            decode("===="),
            Err(Base64Error::MisplacedPadding { position: 0 })
        );
    }

    #[test]
    fn random_round_trip() {
        let mut rng = thread_rng();
        for length in 0..100usize {
            let mut bytes = vec![0u8; length];
            rng.fill(bytes.as_mut_slice());
            let encoded = encode(&bytes);
            assert_eq!(encoded.len(), length.div_ceil(3) * 4);
            assert_eq!(decode(&encoded).unwrap(), bytes);
        }
    }
}
