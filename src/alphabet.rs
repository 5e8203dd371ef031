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

//! Symbol tables and their reverse lookups.

use core::fmt::{self, Debug, Formatter};

/// An ordered table of `N` distinct, printable ASCII symbols. A symbol's
/// position in the table is the value it encodes.
#[derive(Clone, Copy)]
pub struct Alphabet<const N: usize> {
    symbols: [u8; N],
}

impl<const N: usize> Alphabet<N> {
    /// Creates an alphabet from the given symbols.
    ///
    /// Meant to be evaluated in a `const` context, where a duplicate or
    /// non-printable symbol is a compile-time error.
    ///
    /// # Panics
    ///
    /// Panics if any symbol is not printable ASCII or occurs more than once.
    pub const fn new(symbols: &[u8; N]) -> Self {
        let mut i = 0;
        while i < N {
            let c = symbols[i];
            if !(c >= b'!' && c <= b'~') {
                panic!("alphabet symbols must be printable ASCII");
            }
            let mut j = 0;
            while j < i {
                if symbols[j] == c {
                    panic!("alphabet symbols must be distinct");
                }
                j += 1;
            }
            i += 1;
        }
        Self {
            symbols: *symbols,
        }
    }

    /// The number of symbols, which is also the radix.
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the alphabet has no symbols.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the symbol for `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not less than [`Self::len`].
    pub fn symbol(&self, value: usize) -> char {
        char::from(self.symbols[value])
    }

    /// The symbols in value order.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.symbols
    }

    /// Builds the reverse lookup for this alphabet.
    pub fn decode_table(&self) -> DecodeTable {
        let mut table = [DecodeTable::ABSENT; 256];
        self.symbols.iter().enumerate().for_each(|(value, &c)| {
            // `N` is at most 95 because every symbol is distinct printable
            // ASCII, so `value` fits in a `u8` below `ABSENT`.
            table[usize::from(c)] = value as u8;
        });
        DecodeTable(table)
    }
}

impl<const N: usize> Debug for Alphabet<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Every symbol is ASCII.
        let s = core::str::from_utf8(&self.symbols).unwrap_or_default();
        f.debug_tuple("Alphabet").field(&s).finish()
    }
}

/// A byte-indexed map from symbol to value.
#[derive(Clone)]
pub struct DecodeTable([u8; 256]);

impl DecodeTable {
    const ABSENT: u8 = u8::MAX;

    /// Returns the value of `symbol`, or [`None`] if it is not part of the
    /// alphabet this table was built from.
    pub fn get(&self, symbol: u8) -> Option<u8> {
        let value = self.0[usize::from(symbol)];
        (value != Self::ABSENT).then_some(value)
    }
}

impl Debug for DecodeTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let members = (0..=u8::MAX).filter(|&c| self.get(c).is_some());
        f.debug_set().entries(members.map(char::from)).finish()
    }
}
