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

//! Lexical analysis.

pub mod char;
pub mod filter;
pub mod input;
pub mod lexer;
