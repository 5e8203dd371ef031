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

//! Line wrapping for encoded text.

/// Inserts a newline after every `width` characters of `text`.
///
/// No newline is added at the end. A `width` of zero returns `text`
/// unchanged. Base91 decoding skips the inserted newlines; hex decoding does
/// not, so only base91 text should be wrapped.
pub fn wrap_lines(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_owned();
    }
    let len = text.chars().count();
    let mut out = String::with_capacity(text.len() + len / width);
    text.chars().enumerate().for_each(|(i, c)| {
        if i != 0 && i % width == 0 {
            out.push('\n');
        }
        out.push(c);
    });
    out
}
