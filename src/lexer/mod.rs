//! Lexical analysis module for the interpreter front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Pull-based scanning, one Unicode code point at a time
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - One code point of lookahead for `==` and `!=`
//! - Unknown characters, reported as `Illegal` tokens

pub mod lexer;
pub mod tokens;
