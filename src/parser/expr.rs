//! Expression handlers.
//!
//! Every handler is entered with the parser's current token on the first
//! token it owns (the operator, for LED handlers) and leaves the current
//! token on the last token of the expression it built.

use crate::{
    ast::{
        ast::Expression,
        expressions::{BooleanExpr, CallExpr, IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses one expression whose operators all bind tighter than `bp`.
///
/// Prefix operators, groups and call arguments recurse back in here, so
/// every call counts as one level of nesting.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    parser.enter_nesting()?;
    let expr = parse_nested_expr(parser, bp);
    parser.exit_nesting();
    expr
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud_fn) => *nud_fn,
        None => return Err(Error::new(ErrorImpl::NoPrefixHandler { found: token_kind })),
    };

    let mut left = nud_fn(parser)?;

    // While the next operator binds tighter than `bp`, fold it into lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let led_fn = match parser.get_led_lookup().get(&parser.peek_token_kind()) {
            Some(led_fn) => *led_fn,
            None => return Ok(left),
        };

        parser.advance();
        let operator_bp = parser.binding_power(parser.current_token_kind());
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Identifier => Ok(Expression::Identifier(IdentifierExpr::new(token))),
        TokenKind::Integer => match token.literal.parse::<i64>() {
            Ok(value) => Ok(Expression::Integer(IntegerExpr { token, value })),
            Err(_) => Err(Error::new(ErrorImpl::NumberParseError {
                literal: token.literal,
            })),
        },
        TokenKind::True | TokenKind::False => Ok(Expression::Boolean(BooleanExpr {
            value: token.kind == TokenKind::True,
            token,
        })),
        kind => Err(Error::new(ErrorImpl::NoPrefixHandler { found: kind })),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.advance();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expression::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(rhs),
    }))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Error> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(Expression::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expression,
    _bp: BindingPower,
) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let mut arguments = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
    } else {
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Default)?);

        while parser.peek_token_is(TokenKind::Comma) {
            parser.advance();
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::Default)?);
        }

        parser.expect_peek(TokenKind::CloseParen)?;
    }

    Ok(Expression::Call(CallExpr {
        token,
        function: Box::new(left),
        arguments,
    }))
}
