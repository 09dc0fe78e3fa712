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

//! Comment and whitespace filter.
//!
//! The filter sits between the input cursor and the directive tokenizer and
//! normalizes the byte stream: a run of whitespace collapses to one space,
//! `//` and `/* */` comments collapse to one space that merges with adjacent
//! whitespace, and a backslash-newline pair is elided entirely.  Newlines
//! survive, because the directive grammar above is line-oriented.  Every
//! emitted byte carries the physical line and column it came from, even when
//! many raw bytes collapsed into it, and every filtered stream ends with
//! exactly one newline before end of input.

use crate::util::Location;

use super::char::Char;
use super::input::Cursor;

// ----------------------------------------------------------------------------

/// Comment filter states.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
enum State {
    /// Normal state.  Bytes pass through unchanged.
    Normal,

    /// In a run of whitespace that will collapse to one space.
    Space,

    /// After a `/` that might start a comment.
    Slash,

    /// In a `//` comment.  Bytes are dropped until a line end.
    LineComment,

    /// In a `/*` comment.  Bytes are dropped until `*/`.
    BlockComment,

    /// After a `*`, or a run of them, that might end a block comment.
    Star,

    /// After a `\` that might start a line continuation.
    BSlash,

    /// End of input reached.  Terminal. // <- COUNT references this
    AtEof,
}

impl State {
    /// Count of comment filter states.
    const COUNT: usize = Self::AtEof as usize + 1;
}

// ----------------------------------------------------------------------------

// Comment filter transitions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
enum Transition {
    /// Consume and emit the current input byte; continue in `Normal` state.
    Pass,

    /// Consume the current input byte and continue in `Space` state.
    Space,

    /// Consume the current input byte and continue in `Slash` state.
    Slash,

    /// Consume the current input byte and continue in `BSlash` state.
    BSlash,

    /// Consume the current input byte and continue in `LineComment` state.
    LineComment,

    /// Consume the current input byte and continue in `BlockComment` state.
    BlockComment,

    /// Consume the current input byte and continue in `Star` state.
    Star,

    /// Emit one space for the collapsed run; re-offer the current input byte
    /// to the next call.
    SpaceOut,

    /// Emit the pending `/`, which did not start a comment; re-offer the
    /// current input byte to the next call.
    SlashOut,

    /// Emit the pending `/`; absorb the current whitespace byte into a new
    /// whitespace run.
    SlashSpace,

    /// Emit the pending `/`; end of input follows.
    SlashEnd,

    /// Emit the pending `\`, which did not escape anything; re-offer the
    /// current input byte to the next call.
    BSlashOut,

    /// Emit the pending `\`; absorb the current whitespace byte into a new
    /// whitespace run.
    BSlashSpace,

    /// Emit the pending `\`; the current `/` may still start a comment.
    BSlashSlash,

    /// Emit the pending `\`; end of input follows.
    BSlashEnd,

    /// Synthesize the trailing newline if one is still owed, then report
    /// end of input.
    End,
}

impl Transition {
    /// Returns the action and successor state for the transition.
    fn decode(self) -> (Action, State) {
        use Action::*;
        use State      as S;
        use Transition as X;

        match self {
            //                    Action         State
            // scanning         ------------------------------------
            X::Pass           => ( Emit,         S::Normal       ),
            X::Space          => ( Continue,     S::Space        ),
            X::Slash          => ( Continue,     S::Slash        ),
            X::BSlash         => ( Continue,     S::BSlash       ),
            X::LineComment    => ( Continue,     S::LineComment  ),
            X::BlockComment   => ( Continue,     S::BlockComment ),
            X::Star           => ( Continue,     S::Star         ),
            // pending byte    ------------------------------------
            X::SpaceOut       => ( Defer(b' '),  S::Normal       ),
            X::SlashOut       => ( Defer(b'/'),  S::Normal       ),
            X::SlashSpace     => ( Flush(b'/'),  S::Space        ),
            X::SlashEnd       => ( Flush(b'/'),  S::AtEof        ),
            X::BSlashOut      => ( Defer(b'\\'), S::Normal       ),
            X::BSlashSpace    => ( Flush(b'\\'), S::Space        ),
            X::BSlashSlash    => ( Flush(b'\\'), S::Slash        ),
            X::BSlashEnd      => ( Flush(b'\\'), S::AtEof        ),
            // end of input    ------------------------------------
            X::End            => ( End,          S::AtEof        ),
        }
    }
}

// ----------------------------------------------------------------------------

/// Comment filter actions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Action {
    /// No output for this byte; keep scanning.
    Continue,

    /// Emit the current input byte at its own position.
    Emit,

    /// Emit the given byte at the position of the previously consumed byte;
    /// re-offer the current input byte, with its position, to the next call.
    Defer(u8),

    /// Emit the given byte at the position of the previously consumed byte;
    /// the current input byte is consumed silently.
    Flush(u8),

    /// Synthesize the trailing newline if one is still owed, then report
    /// end of input.
    End,
}

// ----------------------------------------------------------------------------

/// Comment filter state transition map.
static TRANSITION_MAP: [Transition; Char::COUNT * State::COUNT] = {
    use Transition::*;
[
//              Normal        Space         Slash         LineComment   BlockComment  Star          BSlash        AtEof
//              ------------------------------------------------------------------------------------------------------
/*  Space   */  Space,        Space,        SlashSpace,   LineComment,  BlockComment, BlockComment, BSlashSpace,  End,
/*  LineEnd */  Pass,         Pass,         SlashOut,     Pass,         BlockComment, BlockComment, Space,        End,
/*  Slash   */  Slash,        Slash,        LineComment,  LineComment,  BlockComment, Space,        BSlashSlash,  End,
/*  BSlash  */  BSlash,       SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  Star    */  Pass,         SpaceOut,     BlockComment, LineComment,  Star,         Star,         BSlashOut,    End,

/*  Exp     */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  Alpha   */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  Under   */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  HexX    */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  BinB    */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/* BinDigit */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/* OctDigit */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/* DecDigit */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/* HexDigit */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,

/*  Bang    */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  DQuote  */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  Dot     */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  Plus    */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  Minus   */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  LParen  */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  RParen  */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  Lt      */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  Equal   */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  Gt      */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  Comma   */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  Hash    */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  Amp     */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  Pipe    */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,

/* NonAscii */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
/*  Eof     */  End,          End,          SlashEnd,     End,          End,          End,          BSlashEnd,    End,
/*  Other   */  Pass,         SpaceOut,     SlashOut,     LineComment,  BlockComment, BlockComment, BSlashOut,    End,
]};

// ----------------------------------------------------------------------------

/// Comment and whitespace filter.  Reads raw bytes through a [`Cursor`] and
/// yields the normalized byte stream, one byte per [`Filter::get`] call.
#[derive(Clone, Debug)]
pub struct Filter<I: Iterator<Item = u8>> {
    input:    Cursor<I>,
    state:    State,
    pushback: Option<(u8, Location)>,
    prev:     Location,
    pos:      Location,
    newline:  bool,
}

impl<I: Iterator<Item = u8>> Filter<I> {
    /// Creates a new filter over the given input iterator.
    pub fn new(iter: I) -> Self {
        Self {
            input:    Cursor::new(iter),
            state:    State::Normal,
            pushback: None,
            prev:     Location::START,
            pos:      Location::START,
            newline:  false,
        }
    }

    /// Returns the next filtered byte, or `None` at end of input.
    ///
    /// At most one internal byte of lookahead is ever buffered; a byte read
    /// while deciding the fate of a pending `/` or `\` is re-offered, with
    /// its original position, on the next call.
    pub fn get(&mut self) -> Option<u8> {
        use Action::*;

        loop {
            // Pushed-back bytes are restored with their cached position
            let (byte, loc) = match self.pushback.take() {
                Some((byte, loc)) => (Some(byte), loc),
                None => {
                    self.input.advance();
                    (self.input.current(), self.input.location())
                }
            };

            let (action, state) = {
                let input      = Char::of(byte);
                let transition = TRANSITION_MAP
                    [input as usize * State::COUNT + self.state as usize];
                transition.decode()
            };

            let prev   = self.prev;
            self.prev  = loc;
            self.state = state;

            match action {
                Continue  => (),
                Emit      => if let Some(b) = byte { break self.emit(b, loc) },
                Defer (b) => { self.cache(byte, loc); break self.emit(b, prev) }
                Flush (b) => break self.emit(b, prev),
                End       => break self.finish(),
            }
        }
    }

    /// Returns the line number of the most recently returned byte.
    #[inline]
    pub fn line(&self) -> u32 {
        self.pos.line
    }

    /// Returns the column number of the most recently returned byte.
    #[inline]
    pub fn column(&self) -> u32 {
        self.pos.column
    }

    /// Returns the location of the most recently returned byte.
    #[inline]
    pub fn location(&self) -> Location {
        self.pos
    }

    #[inline]
    fn emit(&mut self, byte: u8, loc: Location) -> Option<u8> {
        self.pos     = loc;
        self.newline = byte == b'\n';
        Some(byte)
    }

    #[inline]
    fn cache(&mut self, byte: Option<u8>, loc: Location) {
        if let Some(byte) = byte {
            self.pushback = Some((byte, loc));
        }
    }

    // Every filtered stream ends with exactly one newline: if the last
    // emitted byte was not one, it is synthesized here on the line after
    // the last physical line.  Idempotent thereafter.
    fn finish(&mut self) -> Option<u8> {
        if self.newline { return None }

        self.newline = true;
        self.pos     = Location::new(self.input.line() + 1, 0);
        Some(b'\n')
    }
}

// ----------------------------------------------------------------------------
