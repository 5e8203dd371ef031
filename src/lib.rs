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

//! Hexadecimal and base91 binary-to-text codecs.
//!
//! [`hex`] maps every byte to two symbols and is strict about its input
//! shape; [`base91`] packs 13 or 14 bits into every pair of symbols, never
//! fails, and skips anything outside its alphabet when decoding.
//!
//! ```
//! let text = basetext::base91::encode_to_string(b"test");
//! assert_eq!(text, "fPNKd");
//! assert_eq!(basetext::base91::decode_str(&text), b"test");
//!
//! let hex = basetext::hex::encode_to_string(&[0x00, 0xff, 0x1a]).unwrap();
//! assert_eq!(hex, "00FF1A");
//! ```

pub mod alphabet;
pub mod base91;
pub mod error;
pub mod ext;
pub mod hex;
pub mod wrap;

pub use alphabet::{Alphabet, DecodeTable};
pub use error::{Error, Result};
pub use ext::{FromBaseText, ToBaseText};
