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

//! Byte classification.
//!
//! Every input byte (and the end-of-input condition) maps to exactly one
//! logical character: a character equivalence class that receives identical
//! treatment during lexical analysis.  The classification is fixed data;
//! categories the comment filter does not distinguish exist for the benefit
//! of the directive tokenizer above it.

/// Logical characters recognized by the lexical analyzers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Char {
    // space, line endings
    Space,      // \s \t \v \f \r \a
    LineEnd,    // \n
    // comment and continuation introducers
    Slash,      // /
    BSlash,     // \
    Star,       // *
    // identifiers, numbers
    Exp,        // e E
    Alpha,      // other letters
    Under,      // _
    HexX,       // x
    BinB,       // b
    BinDigit,   // 0 1
    OctDigit,   // 2-7
    DecDigit,   // 8 9
    HexDigit,   // A-D F a c d f
    // punctuation
    Bang,       // !
    DQuote,     // "
    Dot,        // .
    Plus,       // +
    Minus,      // -
    LParen,     // (
    RParen,     // )
    Lt,         // <
    Equal,      // =
    Gt,         // >
    Comma,      // ,
    Hash,       // #
    Amp,        // &
    Pipe,       // |
    // rare
    NonAscii,   // bytes above 0x7F
    Eof,        // end of input
    Other,      // everything else // <- COUNT references this
}

impl Char {
    /// Count of logical characters.
    pub const COUNT: usize = Self::Other as usize + 1;

    /// Classifies a byte, or the end-of-input condition, as a logical
    /// character.  Total and pure.
    #[inline(always)]
    pub fn of(byte: Option<u8>) -> Self {
        match byte {
            Some(b) if b < 128 => unsafe { *CHARS.get_unchecked(b as usize) },
            Some(_)            => Self::NonAscii,
            None               => Self::Eof,
        }
    }
}

/// Mapping of 7-bit ASCII to logical characters.
static CHARS: [Char; 128] = {
    use Char::*;
    const __: Char = Other;
[
//  x0        x1        x2        x3        x4        x5        x6        x7
//  x8        x9        xA        xB        xC        xD        xE        xF
    __,       __,       __,       __,       __,       __,       __,       Space,    // 0x │·······a│
    __,       Space,    LineEnd,  Space,    Space,    Space,    __,       __,       // 0x │·tnvfr··│
    __,       __,       __,       __,       __,       __,       __,       __,       // 1x │········│
    __,       __,       __,       __,       __,       __,       __,       __,       // 1x │········│
    Space,    Bang,     DQuote,   Hash,     __,       __,       Amp,      __,       // 2x │ !"#$%&'│
    LParen,   RParen,   Star,     Plus,     Comma,    Minus,    Dot,      Slash,    // 2x │()*+,-./│
    BinDigit, BinDigit, OctDigit, OctDigit, OctDigit, OctDigit, OctDigit, OctDigit, // 3x │01234567│
    DecDigit, DecDigit, __,       __,       Lt,       Equal,    Gt,       __,       // 3x │89:;<=>?│
    __,       HexDigit, HexDigit, HexDigit, HexDigit, Exp,      HexDigit, Alpha,    // 4x │@ABCDEFG│
    Alpha,    Alpha,    Alpha,    Alpha,    Alpha,    Alpha,    Alpha,    Alpha,    // 4x │HIJKLMNO│
    Alpha,    Alpha,    Alpha,    Alpha,    Alpha,    Alpha,    Alpha,    Alpha,    // 5x │PQRSTUVW│
    Alpha,    Alpha,    Alpha,    __,       BSlash,   __,       __,       Under,    // 5x │XYZ[\]^_│
    __,       HexDigit, BinB,     HexDigit, HexDigit, Exp,      HexDigit, Alpha,    // 6x │`abcdefg│
    Alpha,    Alpha,    Alpha,    Alpha,    Alpha,    Alpha,    Alpha,    Alpha,    // 6x │hijklmno│
    Alpha,    Alpha,    Alpha,    Alpha,    Alpha,    Alpha,    Alpha,    Alpha,    // 7x │pqrstuvw│
    HexX,     Alpha,    Alpha,    __,       Pipe,     __,       __,       __,       // 7x │xyz{|}~░│
]};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_whitespace() {
        assert_eq!( Char::of(Some(b' ')),  Char::Space );
        assert_eq!( Char::of(Some(b'\t')), Char::Space );
        assert_eq!( Char::of(Some(0x0B)),  Char::Space );
        assert_eq!( Char::of(Some(0x0C)),  Char::Space );
        assert_eq!( Char::of(Some(b'\r')), Char::Space );
        // BEL counts as whitespace, an original quirk of the table
        assert_eq!( Char::of(Some(0x07)),  Char::Space );
    }

    #[test]
    fn classify_line_end() {
        assert_eq!( Char::of(Some(b'\n')), Char::LineEnd );
    }

    #[test]
    fn classify_comment_introducers() {
        assert_eq!( Char::of(Some(b'/')),  Char::Slash  );
        assert_eq!( Char::of(Some(b'\\')), Char::BSlash );
        assert_eq!( Char::of(Some(b'*')),  Char::Star   );
    }

    #[test]
    fn classify_digits() {
        assert_eq!( Char::of(Some(b'0')), Char::BinDigit );
        assert_eq!( Char::of(Some(b'1')), Char::BinDigit );
        assert_eq!( Char::of(Some(b'2')), Char::OctDigit );
        assert_eq!( Char::of(Some(b'7')), Char::OctDigit );
        assert_eq!( Char::of(Some(b'8')), Char::DecDigit );
        assert_eq!( Char::of(Some(b'9')), Char::DecDigit );
    }

    #[test]
    fn classify_letters() {
        assert_eq!( Char::of(Some(b'a')), Char::HexDigit );
        assert_eq!( Char::of(Some(b'B')), Char::HexDigit );
        assert_eq!( Char::of(Some(b'e')), Char::Exp      );
        assert_eq!( Char::of(Some(b'E')), Char::Exp      );
        assert_eq!( Char::of(Some(b'x')), Char::HexX     );
        assert_eq!( Char::of(Some(b'X')), Char::Alpha    );
        assert_eq!( Char::of(Some(b'b')), Char::BinB     );
        assert_eq!( Char::of(Some(b'g')), Char::Alpha    );
        assert_eq!( Char::of(Some(b'_')), Char::Under    );
    }

    #[test]
    fn classify_punctuation() {
        assert_eq!( Char::of(Some(b'&')), Char::Amp   );
        assert_eq!( Char::of(Some(b'|')), Char::Pipe  );
        assert_eq!( Char::of(Some(b'#')), Char::Hash  );
        assert_eq!( Char::of(Some(b'=')), Char::Equal );
    }

    #[test]
    fn classify_rare() {
        assert_eq!( Char::of(Some(0x80)), Char::NonAscii );
        assert_eq!( Char::of(Some(0xFF)), Char::NonAscii );
        assert_eq!( Char::of(None),       Char::Eof      );
        assert_eq!( Char::of(Some(0x00)), Char::Other    );
        assert_eq!( Char::of(Some(b'`')), Char::Other    );
        assert_eq!( Char::of(Some(0x7F)), Char::Other    );
    }
}
