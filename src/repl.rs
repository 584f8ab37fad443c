//! Line-oriented read-eval-print loop.
//!
//! Each input line gets a fresh lexer (and parser, in parse mode); nothing
//! carries over between lines.

use std::io::{self, BufRead, Write};

use crate::{
    display_errors,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::parse,
};

pub const PROMPT: &str = ">> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Print every token of the line
    #[default]
    Tokens,
    /// Print the parsed program, or its errors
    Parse,
}

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    pub mode: Mode,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: String::from(PROMPT),
            mode: Mode::default(),
        }
    }
}

/// Runs the loop until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(input: R, mut output: W, config: &ReplConfig) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        match config.mode {
            Mode::Tokens => print_tokens(&line, &mut output)?,
            Mode::Parse => print_program(&line, &mut output)?,
        }
    }
}

fn print_tokens(line: &str, output: &mut impl Write) -> io::Result<()> {
    for token in Lexer::new(line).take_while(|token| !token.is(TokenKind::EOF)) {
        writeln!(output, "{}", token.debug())?;
    }
    Ok(())
}

fn print_program(line: &str, output: &mut impl Write) -> io::Result<()> {
    let (program, errors) = parse(line);

    if errors.is_empty() {
        writeln!(output, "{}", program)
    } else {
        display_errors(&errors, output)
    }
}
