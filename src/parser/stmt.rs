use crate::{
    ast::{
        ast::Statement,
        expressions::IdentifierExpr,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses the statement starting at the current token.
///
/// Returns `Ok(None)` for tokens that cannot start a statement; the caller
/// skips them.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Statement>, Error> {
    let kind = parser.current_token_kind();

    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&kind).copied() {
        return stmt_fn(parser).map(Some);
    }

    if kind == TokenKind::Illegal {
        return Err(Error::new(ErrorImpl::IllegalToken {
            literal: parser.current_token().literal.clone(),
        }));
    }

    if parser.get_nud_lookup().contains_key(&kind) {
        return parse_expression_stmt(parser).map(Some);
    }

    tracing::trace!(%kind, "skipping token that cannot start a statement");
    Ok(None)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let name = IdentifierExpr::new(parser.expect_peek(TokenKind::Identifier)?);
    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Let(LetStmt {
        token,
        name,
        value: Some(value),
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.advance();

    let value = if parser.current_token_is(TokenKind::Semicolon)
        || parser.current_token_is(TokenKind::EOF)
    {
        None
    } else {
        Some(parse_expr(parser, BindingPower::Default)?)
    };

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Expression(ExpressionStmt { token, expression }))
}
