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

//! Hexadecimal (base16) encoding and decoding.
//!
//! Each byte becomes two symbols, high nibble first. Encoding rejects empty
//! input, and decoding rejects blank or odd-length text, but decoding does
//! *not* check that symbols are hex digits: every character is turned into a
//! nibble arithmetically, so `"GG"` decodes to `[0x10]` rather than failing.

use super::alphabet::Alphabet;
use super::error::{Error, Result};

/// Upper-case hex digits, `0-9A-F`.
pub const UPPER: Alphabet<16> = Alphabet::new(b"0123456789ABCDEF");

/// Lower-case hex digits, `0-9a-f`.
pub const LOWER: Alphabet<16> = Alphabet::new(b"0123456789abcdef");

/// Used by [`encode_to_string_with`] to configure the encoding process.
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct EncodeConfig {
    /// Whether to emit `A-F` rather than `a-f`. [default: true]
    pub upper_case: bool,
}

impl EncodeConfig {
    /// Returns the default configuration.
    pub const fn new() -> Self {
        Self {
            upper_case: true,
        }
    }

    /// Returns a configuration that emits lower-case digits.
    pub const fn lower() -> Self {
        Self {
            upper_case: false,
        }
    }
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The length of the hex text for `len` bytes.
pub const fn encoded_len(len: usize) -> usize {
    len * 2
}

/// The number of bytes decoded from `len` hex symbols.
pub const fn decoded_len(len: usize) -> usize {
    len / 2
}

/// Encodes `bytes` as upper-case hex.
///
/// Fails with [`Error::InvalidArgument`] if `bytes` is empty.
pub fn encode_to_string(bytes: &[u8]) -> Result<String> {
    encode_to_string_with(bytes, EncodeConfig::new())
}

/// Encodes `bytes` as hex with the given config.
///
/// This function is like [`encode_to_string`], but takes a configuration
/// object.
pub fn encode_to_string_with(
    bytes: &[u8],
    config: EncodeConfig,
) -> Result<String> {
    if bytes.is_empty() {
        log::trace!("refusing to hex-encode empty input");
        return Err(Error::InvalidArgument("bytes"));
    }

    let table = if config.upper_case {
        &UPPER
    } else {
        &LOWER
    };
    let mut out = String::with_capacity(encoded_len(bytes.len()));
    bytes.iter().for_each(|&b| {
        out.push(table.symbol(usize::from(b >> 4)));
        out.push(table.symbol(usize::from(b & 0xf)));
    });
    Ok(out)
}

/// Maps a symbol to a nibble without branching on its case.
///
/// Digits (`0x30..=0x39`) have bit 6 clear and letters (`0x41..=0x46`,
/// `0x61..=0x66`) have it set; letters get 9 added to their low four bits.
/// Characters outside the hex alphabet still produce a value, which may
/// exceed 15.
fn nibble(c: char) -> u32 {
    let code = u32::from(c);
    (code & 0xf) + ((code & 0x40) >> 6) * 9
}

/// Decodes hex text.
///
/// Leading and trailing whitespace is removed first, and only the trimmed
/// text is checked and decoded, so `"  ab  "` yields `[0xab]`. Fails with
/// [`Error::InvalidArgument`] if the trimmed text is empty, and with
/// [`Error::InvalidLength`] if it has an odd number of symbols. Symbols are
/// not otherwise validated, and whitespace inside the text is decoded like
/// any other symbol.
pub fn decode_str(text: &str) -> Result<Vec<u8>> {
    let text = text.trim();
    if text.is_empty() {
        log::trace!("refusing to hex-decode blank input");
        return Err(Error::InvalidArgument("text"));
    }

    let len = text.chars().count();
    if len % 2 != 0 {
        log::trace!("refusing to hex-decode {} symbols", len);
        return Err(Error::InvalidLength(len));
    }

    let mut out = Vec::with_capacity(decoded_len(len));
    let mut chars = text.chars();
    while let (Some(high), Some(low)) = (chars.next(), chars.next()) {
        // Out-of-alphabet nibbles can exceed four bits; only the low byte of
        // the combination is kept.
        out.push((((nibble(high) << 4) | nibble(low)) & 0xff) as u8);
    }
    Ok(out)
}
