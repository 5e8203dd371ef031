/*
 * Copyright (C) 2022 taylor.fish <contact@taylor.fish>
 *
 * This file is part of basetext.
 *
 * basetext is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * basetext is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with basetext. If not, see <https://www.gnu.org/licenses/>.
 */

//! Base91 encoding and decoding.
//!
//! Bits are packed into groups of 13 or 14 and each group is written as two
//! symbols of a 91-symbol alphabet (91 × 91 = 8281 values). A 13-bit group is
//! used whenever its value exceeds 88; otherwise the group is widened to 14
//! bits, which keeps every group below 8281. The last partial group is
//! written as one or two symbols.
//!
//! Neither direction can fail. Decoding skips anything outside the alphabet,
//! so encoded text may be wrapped or indented freely.

use super::alphabet::{Alphabet, DecodeTable};

use once_cell::sync::Lazy;

/// The base91 alphabet, in value order.
pub const ALPHABET: Alphabet<91> = Alphabet::new(
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
      abcdefghijklmnopqrstuvwxyz\
      0123456789!#$%&()*+,./:;<=>?@[]^_`{|}~\"",
);

static DECODE_TABLE: Lazy<DecodeTable> = Lazy::new(|| ALPHABET.decode_table());

const RADIX: u32 = 91;

/// Groups whose low 13 bits are at most this value take 14 bits instead.
const WIDE_GROUP_MAX: u32 = 88;

const NARROW_MASK: u32 = (1 << 13) - 1;

/// Holds bits that have been read but not yet written out.
#[derive(Default)]
struct BitAccumulator {
    bits: u32,
    len: u32,
}

impl BitAccumulator {
    fn push(&mut self, value: u32, width: u32) {
        self.bits |= value << self.len;
        self.len += width;
    }

    fn consume(&mut self, width: u32) {
        self.bits >>= width;
        self.len -= width;
    }
}

fn group_width(value: u32) -> u32 {
    if value & NARROW_MASK > WIDE_GROUP_MAX {
        13
    } else {
        14
    }
}

/// An upper bound on the encoded length of `len` bytes.
///
/// Every full group carries at least 13 bits in two symbols, and the final
/// partial group needs at most two more.
pub const fn encoded_len_upper_bound(len: usize) -> usize {
    len.saturating_mul(16) / 13 + 2
}

/// An upper bound on the number of bytes decoded from `len` symbols.
pub const fn decoded_len_upper_bound(len: usize) -> usize {
    (len / 2).saturating_mul(14) / 8 + 1
}

fn encode_with(bytes: &[u8], mut emit: impl FnMut(char)) {
    let mut acc = BitAccumulator::default();
    for &byte in bytes {
        acc.push(u32::from(byte), 8);
        while acc.len > 13 {
            let width = group_width(acc.bits);
            let value = acc.bits & ((1 << width) - 1);
            acc.consume(width);
            emit(ALPHABET.symbol((value % RADIX) as usize));
            emit(ALPHABET.symbol((value / RADIX) as usize));
        }
    }

    if acc.len != 0 {
        emit(ALPHABET.symbol((acc.bits % RADIX) as usize));
        if acc.len > 7 || acc.bits >= RADIX {
            emit(ALPHABET.symbol((acc.bits / RADIX) as usize));
        }
    }
}

/// Encodes `bytes` as base91.
///
/// Empty input produces an empty string.
pub fn encode_to_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len_upper_bound(bytes.len()));
    encode_with(bytes, |c| out.push(c));
    out
}

/// Encodes `bytes` as base91 and returns the text as ASCII bytes.
pub fn encode_to_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len_upper_bound(bytes.len()));
    // Every symbol is ASCII.
    encode_with(bytes, |c| out.push(c as u8));
    out
}

/// Decodes base91 text held as raw bytes.
///
/// Bytes that are not symbols of [`ALPHABET`] are skipped, including every
/// byte of a multi-byte UTF-8 sequence.
pub fn decode_bytes(text: &[u8]) -> Vec<u8> {
    let table = &*DECODE_TABLE;
    let mut out = Vec::with_capacity(decoded_len_upper_bound(text.len()));
    let mut acc = BitAccumulator::default();
    // The first symbol of a pair, until its partner arrives.
    let mut pending: Option<u32> = None;
    let mut skipped = 0_usize;

    for &c in text {
        let c = match table.get(c) {
            Some(v) => u32::from(v),
            None => {
                skipped += 1;
                continue;
            }
        };
        let low = match pending.take() {
            Some(low) => low,
            None => {
                pending = Some(c);
                continue;
            }
        };

        let value = low + c * RADIX;
        acc.push(value, group_width(value));
        while acc.len > 7 {
            out.push((acc.bits & 0xff) as u8);
            acc.consume(8);
        }
    }

    if let Some(low) = pending {
        out.push(((acc.bits | low << acc.len) & 0xff) as u8);
    }
    if skipped != 0 {
        log::trace!("skipped {} bytes outside the base91 alphabet", skipped);
    }
    out
}

/// Decodes a base91 `str`.
///
/// Characters that are not symbols of [`ALPHABET`] are skipped.
pub fn decode_str(text: &str) -> Vec<u8> {
    decode_bytes(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(b"", "" ; "empty")]
    #[test_case(b"\x00", "AA" ; "single zero")]
    #[test_case(b"\xff", "/C" ; "single ff")]
    #[test_case(b"\x00\x00", "AAA" ; "two zeros")]
    #[test_case(b"\x00\x00\x00\x00", "AAAAA" ; "four zeros")]
    #[test_case(b"\xff\xff\xff\xff", "B\"B\"#" ; "four ff")]
    #[test_case(b"test", "fPNKd" ; "ascii word")]
    #[test_case(b"hello world", "TPwJh>Io2Tv!lE" ; "hello world")]
    #[test_case(b"Hello, World!", ">OwJh>}AQ;r@@Y?F" ; "greeting")]
    #[test_case(b"\x00\x01\x02\x03\x04\x05\x06\x07", ":C#(:C?hVB" ; "counting")]
    fn vectors(bytes: &[u8], text: &str) {
        assert_eq!(encode_to_string(bytes), text);
        assert_eq!(encode_to_bytes(bytes), text.as_bytes());
        assert_eq!(decode_str(text), bytes);
    }

    #[test]
    fn decode_table_inverts_alphabet() {
        (0..ALPHABET.len()).for_each(|v| {
            let c = ALPHABET.symbol(v) as u8;
            assert_eq!(DECODE_TABLE.get(c), Some(v as u8));
        });
        let members = (0..=u8::MAX).filter(|&c| DECODE_TABLE.get(c).is_some());
        assert_eq!(members.count(), 91);
    }

    #[test]
    fn alphabet_excludes_formatting_characters() {
        [b' ', b'\n', b'\r', b'\t', b'-', b'\'', b'\\']
            .iter()
            .for_each(|&c| assert_eq!(DECODE_TABLE.get(c), None));
    }

    #[test]
    fn foreign_characters_are_skipped() {
        assert_eq!(decode_str("f P\nN-K d"), b"test");
        assert_eq!(decode_str("\u{2014}fPN\u{e9}Kd\u{1f600}"), b"test");
        assert_eq!(decode_str(" \n\t-"), b"");
    }

    #[test_case("A", &[0x00] ; "single symbol")]
    #[test_case("Hello", &[0xb1, 0x8a, 0xa9, 0xa1] ; "odd symbol count")]
    fn decodes_text_not_produced_by_encoder(text: &str, expected: &[u8]) {
        assert_eq!(decode_str(text), expected);
    }

    #[test]
    fn tail_emits_second_symbol_only_when_needed() {
        // One byte leaves 8 bits, so two symbols are needed.
        assert_eq!(encode_to_string(&[0x05]).len(), 2);
        // Two bytes leave 16 - 13 = 3 bits, which one symbol can hold.
        assert_eq!(encode_to_string(&[0xff, 0xff]).len(), 3);
        assert_eq!(encode_to_string(&[0xff, 0xff, 0x00]).len(), 4);
    }

    #[test]
    fn wide_groups_round_trip() {
        // Low 13 bits of zero force the 14-bit path repeatedly.
        let bytes = [0_u8; 64];
        assert_eq!(decode_str(&encode_to_string(&bytes)), bytes);
        let bytes = [0x58, 0x00, 0x00, 0x58, 0x00];
        assert_eq!(encode_to_string(&bytes), "}AC\"FA");
        assert_eq!(decode_str("}AC\"FA"), bytes);
    }

    #[test]
    fn decoder_advances_by_encoder_group_width() {
        // The 13-bit path never sets bit 13, and every two-symbol value fits
        // the group width the decoder picks for it.
        (0..=WIDE_GROUP_MAX + 8192 + 10).for_each(|bits| {
            let width = group_width(bits);
            let value = bits & ((1 << width) - 1);
            assert_eq!(group_width(value), width);
        });
        (0..RADIX * RADIX).for_each(|value| {
            assert!(value < 1 << group_width(value));
        });
    }

    #[test]
    fn length_bounds_hold() {
        (0..300).for_each(|len| {
            let bytes: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
            let text = encode_to_string(&bytes);
            assert!(text.len() <= encoded_len_upper_bound(len));
            assert!(decode_str(&text).len() <= decoded_len_upper_bound(text.len()));
        });
    }
}
