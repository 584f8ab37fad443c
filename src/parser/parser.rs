//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser pulls tokens from a [`Lexer`] and keeps two of them in view:
//! the current token and one token of lookahead. Expressions are parsed
//! with a Pratt parser using NUD/LED handlers, statements by dispatching on
//! the current token.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Deepest expression nesting accepted. Anything deeper fails the statement
/// with `NestingTooDeep`.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// A parser is good for exactly one program: build a fresh one per source.
pub struct Parser<'a> {
    /// Source of tokens, pulled on demand
    lexer: Lexer<'a>,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Syntax errors collected so far, in source order
    errors: Vec<Error>,
    /// Number of `parse_expr` calls currently on the stack
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser over `lexer`, with every handler registered and
    /// both token slots filled.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Parser {
            lexer,
            current: Token::new(TokenKind::EOF, ""),
            peek: Token::new(TokenKind::EOF, ""),
            errors: vec![],
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();
        parser
    }

    /// Parses statements until `EOF`.
    ///
    /// A statement that fails to parse is dropped and its error recorded;
    /// parsing resumes at the following token. Check [`Parser::errors`]
    /// afterwards to know whether the returned tree is complete.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(Some(stmt)) => program.statements.push(stmt),
                Ok(None) => {}
                Err(error) => {
                    tracing::debug!(%error, "dropping statement");
                    self.errors.push(error);
                }
            }
            self.advance();
        }

        program
    }

    /// Errors collected by [`Parser::parse_program`].
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts the lookahead into the current slot, pulls a new lookahead and
    /// returns the token that was current.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, peek)
    }

    /// Advances only if the lookahead token is of `expected_kind`.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) with the new current token on a match, otherwise an
    /// `UnexpectedToken` error naming the expected and found kinds. Nothing
    /// is consumed on a mismatch.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek_token_is(expected_kind) {
            self.advance();
            Ok(self.current.clone())
        } else {
            Err(Error::new(ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found: self.peek.kind,
            }))
        }
    }

    /// Records one more level of expression nesting.
    ///
    /// Fails with `NestingTooDeep` once [`MAX_NESTING_DEPTH`] levels are
    /// open; the depth is left untouched in that case.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn exit_nesting(&mut self) {
        self.depth -= 1;
    }

    pub fn nesting_depth(&self) -> usize {
        self.depth
    }

    /// Binding power of the lookahead token; `Default` for non-operators.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power(self.peek.kind)
    }

    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Prefix registration leaves the binding power alone, so `-` and `(`
    /// keep the power of their infix meaning.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses source text into a Program.
///
/// This is the main entry point for parsing. It creates a fresh lexer and
/// parser, parses all statements until EOF and hands back the tree together
/// with every syntax error met on the way. A non-empty error list means the
/// tree is partial.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.into_errors();

    tracing::debug!(
        statements = program.len(),
        errors = errors.len(),
        "parsed program"
    );

    (program, errors)
}
