// This file is part of basm, an assembler.
// Copyright 2026 The basm developers
//
// SPDX-License-Identifier: GPL-3.0-or-later
//
// basm is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License,
// or (at your option) any later version.
//
// basm is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with basm.  If not, see <http://www.gnu.org/licenses/>.

//! Position-tracking input cursor.

use crate::util::Location;

/// Input cursor specialized for lexical analysis.
///
/// A `Cursor` takes a sequence of bytes as input and provides a forward-only
/// cursor over it, maintaining the physical line and column of the byte at
/// the current position.  Lines are 1-based; columns are 0-based and count
/// bytes, not display width.
///
#[derive(Clone, Debug)]
pub struct Cursor<I: Iterator<Item = u8>> {
    cur:    Option<u8>,
    line:   u32,
    column: u32,
    done:   bool,
    iter:   I,
}

impl<I: Iterator<Item = u8>> Cursor<I> {
    /// Creates a new [`Cursor`] over the given iterator, positioned at
    /// line 1, column 0, before the first byte.
    #[inline(always)]
    pub fn new(iter: I) -> Self {
        Self { cur: None, line: 1, column: 0, done: false, iter }
    }

    /// Advances the cursor to the next byte.
    ///
    /// Reading a line feed increments [`Self::line()`] and resets
    /// [`Self::column()`] to 0; reading any other byte increments the
    /// column.  At end of input this method does nothing: the current byte
    /// becomes (and remains) `None` and the position is left unchanged.
    #[inline(always)]
    pub fn advance(&mut self) {
        if self.done { return }

        self.cur = self.iter.next();

        match self.cur {
            Some(b'\n') => { self.line += 1; self.column = 0 }
            Some(_)     => { self.column += 1 }
            None        => { self.done = true }
        }
    }

    /// Returns the byte at the current position, or `None` at end of input.
    #[inline(always)]
    pub fn current(&self) -> Option<u8> {
        self.cur
    }

    /// Returns the line number of the byte at the current position.
    #[inline(always)]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column number of the byte at the current position.
    #[inline(always)]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the location of the byte at the current position.
    #[inline(always)]
    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }
}
