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

//! Program entry point and crate root.

#![allow(dead_code)]

mod lang;
mod util;

use std::env::args;
use std::fs::File;
use std::io::{self, Read, stdin};

use colored::*;

use lang::filter::Filter;
use lang::lexer::{Lexer, Token};

fn main() {
    for_each_input(|path, content| {
        println!("[{}]", path);
        print_filtered(content);
        print_tokens(content);
    });
}

fn for_each_input<F>(f: F)
where
    F: Fn(&str, &str) -> ()
{
    for path in args().skip(1) {
        match read_input(&path) {
            Ok (content) => f(path.as_str(), content.as_str()),
            Err(e)       => eprintln!("{}: {}", path, e),
        }
    }
}

// `-` names standard input
fn read_input(path: &str) -> io::Result<String> {
    let mut content = String::with_capacity(4096);

    if path == "-" {
        stdin().read_to_string(&mut content)?;
    } else {
        File::open(path)?.read_to_string(&mut content)?;
    }
    Ok(content)
}

fn print_filtered(content: &str) {
    println!("╭──────┬────────┬──────────╮");
    println!("│ LINE │ COLUMN │ BYTE     │");
    println!("╞══════╪════════╪══════════╡");

    let mut filter = Filter::new(content.bytes());

    while let Some(byte) = filter.get() {
        println!(
            "│ {:4} │ {:6} │ {} │",
            filter.line(),
            filter.column(),
            render_byte(byte)
        );
    }
    println!(
        "│ {:4} │ {:6} │ {} │",
        filter.line(),
        filter.column(),
        format!("{:<8}", "EOF").as_str().red()
    );
    println!("╰──────┴────────┴──────────╯");
}

fn print_tokens(content: &str) {
    println!("╭──────────┬───────╮");
    println!("│ LOCATION │ TYPE  │");
    println!("╞══════════╪═══════╡");

    let mut lexer = Lexer::new(content.bytes());

    loop {
        let token = lexer.next();
        println!(
            "│ {:>8} │ {:<5} │",
            lexer.location().to_string(),
            token
        );
        if token == Token::Eof { break }
    }
    println!("╰──────────┴───────╯");
}

// Pad before coloring: escape codes would throw the column widths off.
fn render_byte(byte: u8) -> ColoredString {
    let text = match byte {
        b'\n'                     => "\\n".to_string(),
        b' '                      => "' '".to_string(),
        b if b.is_ascii_graphic() => (b as char).to_string(),
        b                         => format!("0x{:02X}", b),
    };
    let text = format!("{:<8}", text);

    match byte {
        b'\n'                     => text.as_str().green(),
        b' '                      => text.as_str().cyan(),
        b if b.is_ascii_graphic() => text.as_str().normal(),
        _                         => text.as_str().yellow(),
    }
}
