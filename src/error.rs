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

//! The error type shared by the fallible codecs.

/// An error encountered while encoding or decoding hexadecimal data.
///
/// Base91 has no error path; only [`crate::hex`] produces these.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The named argument was empty, blank, or absent.
    #[error("{0} can't be absent or empty")]
    InvalidArgument(&'static str),
    /// The hexadecimal text had an odd number of symbols.
    #[error("hexadecimal text has an odd length ({0} symbols)")]
    InvalidLength(usize),
}

/// Alias of <code>[Result](core::result::Result)\<T, [Error]></code>.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            Error::InvalidArgument("bytes").to_string(),
            "bytes can't be absent or empty",
        );
        assert_eq!(
            Error::InvalidLength(3).to_string(),
            "hexadecimal text has an odd length (3 symbols)",
        );
    }
}
