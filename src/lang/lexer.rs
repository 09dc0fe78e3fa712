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

//! Directive tokenizer.
//!
//! Pulls from the comment and whitespace filter, so it never observes a raw
//! comment or a multi-byte whitespace run.

use std::fmt::{self, Display, Formatter};

use crate::util::Location;

use super::filter::Filter;

// ----------------------------------------------------------------------------

/// Lexical tokens.
// TODO: directive keywords, identifiers, numeric literals, and strings.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Token {
    /// End of line.
    Newline,

    /// Anything not yet recognized by the directive grammar.
    Unrecognized,

    /// End of file.
    Eof,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        use Token::*;

        let s = match *self {
            Newline      => "EOL",
            Unrecognized => "?",
            Eof          => "EOF",
        };
        s.fmt(f)
    }
}

// ----------------------------------------------------------------------------

/// Directive tokenizer.  Reads filtered input and yields a stream of lexical
/// tokens.
#[derive(Clone, Debug)]
pub struct Lexer<I: Iterator<Item = u8>> {
    input: Filter<I>,
}

impl<I: Iterator<Item = u8>> Lexer<I> {
    /// Creates a new tokenizer for the given input iterator.
    pub fn new(iter: I) -> Self {
        Self { input: Filter::new(iter) }
    }

    /// Advances to the next token and returns its type.
    pub fn next(&mut self) -> Token {
        match self.input.get() {
            Some(b'\n') => Token::Newline,
            Some(_)     => Token::Unrecognized,
            None        => Token::Eof,
        }
    }

    /// Returns the line number at which the current token begins.
    #[inline]
    pub fn line(&self) -> u32 {
        self.input.line()
    }

    /// Returns the column number at which the current token begins.
    #[inline]
    pub fn column(&self) -> u32 {
        self.input.column()
    }

    /// Returns the location at which the current token begins.
    #[inline]
    pub fn location(&self) -> Location {
        self.input.location()
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexer_empty() {
        let mut lexer = Lexer::new("".bytes());

        assert_eq!( lexer.next(), Token::Newline );
        assert_eq!( lexer.next(), Token::Eof     );
        assert_eq!( lexer.next(), Token::Eof     );
    }

    #[test]
    fn lexer_comment_only() {
        let mut lexer = Lexer::new("// hello".bytes());

        assert_eq!( lexer.next(), Token::Newline );
        assert_eq!( lexer.next(), Token::Eof     );
    }

    #[test]
    fn lexer_unrecognized() {
        let mut lexer = Lexer::new("x y".bytes());

        assert_eq!( lexer.next(), Token::Unrecognized );
        assert_eq!( lexer.next(), Token::Unrecognized );
        assert_eq!( lexer.next(), Token::Unrecognized );
        assert_eq!( lexer.next(), Token::Newline      );
        assert_eq!( lexer.next(), Token::Eof          );
    }

    #[test]
    fn lexer_positions_delegate() {
        let mut lexer = Lexer::new("a\nb".bytes());

        assert_eq!( lexer.next(),     Token::Unrecognized );
        assert_eq!( lexer.location(), Location::new(1, 1) );

        assert_eq!( lexer.next(),     Token::Newline      );
        assert_eq!( lexer.location(), Location::new(2, 0) );

        assert_eq!( lexer.next(),     Token::Unrecognized );
        assert_eq!( lexer.location(), Location::new(2, 1) );

        assert_eq!( lexer.next(),     Token::Newline      );
        assert_eq!( lexer.location(), Location::new(3, 0) );

        assert_eq!( lexer.next(),     Token::Eof          );
        assert_eq!( lexer.location(), Location::new(3, 0) );
    }
}
