use std::{fmt::Display, slice::Iter};

use super::{
    expressions::{BooleanExpr, CallExpr, IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

/// Program
///
/// The root of every parse: the statements of the source, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Literal of the first statement's leading token, or `""` for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Statement::token_literal)
            .unwrap_or("")
    }
}

impl Display for Program {
    /// Statements are written back to back. Expression statements carry no
    /// terminator, so a `;` goes between one and the statement after it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut statements = self.statements.iter().peekable();
        while let Some(stmt) = statements.next() {
            write!(f, "{}", stmt)?;
            if matches!(stmt, Statement::Expression(_)) && statements.peek().is_some() {
                write!(f, ";")?;
            }
        }
        Ok(())
    }
}

/// Statement Types
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Statement {
    /// Literal of the token the statement starts with.
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => &stmt.token.literal,
            Statement::Return(stmt) => &stmt.token.literal,
            Statement::Expression(stmt) => &stmt.token.literal,
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{}", stmt),
            Statement::Return(stmt) => write!(f, "{}", stmt),
            Statement::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression Types
///
/// Grouped expressions have no variant of their own; the parentheses only
/// steer precedence and the parser returns the inner expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(IdentifierExpr),
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    Call(CallExpr),
}

impl Expression {
    /// Literal of the token the expression starts with.
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(expr) => &expr.token.literal,
            Expression::Integer(expr) => &expr.token.literal,
            Expression::Boolean(expr) => &expr.token.literal,
            Expression::Prefix(expr) => &expr.token.literal,
            Expression::Infix(expr) => &expr.token.literal,
            Expression::Call(expr) => &expr.token.literal,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Identifier(expr) => write!(f, "{}", expr),
            Expression::Integer(expr) => write!(f, "{}", expr),
            Expression::Boolean(expr) => write!(f, "{}", expr),
            Expression::Prefix(expr) => write!(f, "{}", expr),
            Expression::Infix(expr) => write!(f, "{}", expr),
            Expression::Call(expr) => write!(f, "{}", expr),
        }
    }
}
