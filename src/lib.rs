#![allow(clippy::module_inception)]

use std::io::{self, Write};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

pub use lexer::lexer::{tokenize, Lexer};
pub use parser::parser::{parse, Parser};

pub fn display_error(error: &Error, out: &mut impl Write) -> io::Result<()> {
    /*
        Error: UnexpectedToken (expected next token to be `Identifier`, got `=` instead)
    */

    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error)
    } else {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip())
    }
}

pub fn display_errors(errors: &[Error], out: &mut impl Write) -> io::Result<()> {
    for error in errors {
        display_error(error, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::TokenKind,
    };

    #[test]
    fn test_display_error_with_tip() {
        let error = Error::new(ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Assignment,
        });
        let mut out = Vec::new();

        super::display_error(&error, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: UnexpectedToken (expected next token to be `Identifier`, got `=` instead)\n"
        );
    }

    #[test]
    fn test_display_error_without_tip() {
        let error = Error::new(ErrorImpl::IllegalToken {
            literal: "@".to_string(),
        });
        let mut out = Vec::new();

        super::display_error(&error, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: IllegalToken (illegal token: \"@\")\n"
        );
    }
}
