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

//! Extension traits that expose the codecs as methods on byte buffers and
//! strings.
//!
//! Both traits are also implemented for [`Option`], which stands in for an
//! absent input: [`None`] is rejected by the hex codec and treated as empty by
//! the base91 codec.

use super::error::{Error, Result};
use super::hex::EncodeConfig;
use super::{base91, hex};

/// Encodes a byte buffer as text.
pub trait ToBaseText {
    /// Encodes as upper-case hex. See [`hex::encode_to_string`].
    fn to_base16(&self) -> Result<String>;

    /// Encodes as lower-case hex.
    fn to_base16_lower(&self) -> Result<String>;

    /// Encodes as base91. See [`base91::encode_to_string`].
    fn to_base91(&self) -> String;
}

/// Decodes text to a byte buffer.
pub trait FromBaseText {
    /// Decodes hex. See [`hex::decode_str`].
    fn from_base16(&self) -> Result<Vec<u8>>;

    /// Decodes base91. See [`base91::decode_str`].
    fn from_base91(&self) -> Vec<u8>;
}

macro_rules! impl_to_base_text {
    ($($ty:ty),* $(,)?) => {$(
        impl ToBaseText for $ty {
            fn to_base16(&self) -> Result<String> {
                hex::encode_to_string(self.as_ref())
            }

            fn to_base16_lower(&self) -> Result<String> {
                hex::encode_to_string_with(self.as_ref(), EncodeConfig::lower())
            }

            fn to_base91(&self) -> String {
                base91::encode_to_string(self.as_ref())
            }
        }
    )*};
}

impl_to_base_text!([u8], Vec<u8>, str, String);

impl<T: ToBaseText + ?Sized> ToBaseText for &T {
    fn to_base16(&self) -> Result<String> {
        (**self).to_base16()
    }

    fn to_base16_lower(&self) -> Result<String> {
        (**self).to_base16_lower()
    }

    fn to_base91(&self) -> String {
        (**self).to_base91()
    }
}

impl<const N: usize> ToBaseText for [u8; N] {
    fn to_base16(&self) -> Result<String> {
        self[..].to_base16()
    }

    fn to_base16_lower(&self) -> Result<String> {
        self[..].to_base16_lower()
    }

    fn to_base91(&self) -> String {
        self[..].to_base91()
    }
}

impl<T: ToBaseText> ToBaseText for Option<T> {
    fn to_base16(&self) -> Result<String> {
        self.as_ref()
            .ok_or(Error::InvalidArgument("bytes"))
            .and_then(ToBaseText::to_base16)
    }

    fn to_base16_lower(&self) -> Result<String> {
        self.as_ref()
            .ok_or(Error::InvalidArgument("bytes"))
            .and_then(ToBaseText::to_base16_lower)
    }

    fn to_base91(&self) -> String {
        self.as_ref().map(ToBaseText::to_base91).unwrap_or_default()
    }
}

macro_rules! impl_from_base_text {
    ($($ty:ty),* $(,)?) => {$(
        impl FromBaseText for $ty {
            fn from_base16(&self) -> Result<Vec<u8>> {
                hex::decode_str(self)
            }

            fn from_base91(&self) -> Vec<u8> {
                base91::decode_str(self)
            }
        }
    )*};
}

impl_from_base_text!(str, String);

impl<T: FromBaseText + ?Sized> FromBaseText for &T {
    fn from_base16(&self) -> Result<Vec<u8>> {
        (**self).from_base16()
    }

    fn from_base91(&self) -> Vec<u8> {
        (**self).from_base91()
    }
}

impl<T: FromBaseText> FromBaseText for Option<T> {
    fn from_base16(&self) -> Result<Vec<u8>> {
        self.as_ref()
            .ok_or(Error::InvalidArgument("text"))
            .and_then(FromBaseText::from_base16)
    }

    fn from_base91(&self) -> Vec<u8> {
        self.as_ref().map(FromBaseText::from_base91).unwrap_or_default()
    }
}
