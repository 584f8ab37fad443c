use crate::lexer::tokens::{Token, TokenKind};

use super::{
    ast::{Expression, Program, Statement},
    expressions::{CallExpr, IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

fn ident(name: &str) -> IdentifierExpr {
    IdentifierExpr::new(Token::new(TokenKind::Identifier, name))
}

#[test]
fn test_program_display() {
    let program = Program {
        statements: vec![Statement::Let(LetStmt {
            token: Token::new(TokenKind::Let, "let"),
            name: ident("myVar"),
            value: Some(Expression::Identifier(ident("anotherVar"))),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_empty_program() {
    let program = Program::default();

    assert!(program.is_empty());
    assert_eq!(program.token_literal(), "");
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_statements_without_values() {
    let let_stmt = Statement::Let(LetStmt {
        token: Token::new(TokenKind::Let, "let"),
        name: ident("x"),
        value: None,
    });
    let return_stmt = Statement::Return(ReturnStmt {
        token: Token::new(TokenKind::Return, "return"),
        value: None,
    });

    assert_eq!(let_stmt.to_string(), "let x = ;");
    assert_eq!(return_stmt.to_string(), "return ;");
    assert_eq!(return_stmt.token_literal(), "return");
}

#[test]
fn test_nested_expression_display() {
    // -a * add(b, 2)
    let call = Expression::Call(CallExpr {
        token: Token::new(TokenKind::OpenParen, "("),
        function: Box::new(Expression::Identifier(ident("add"))),
        arguments: vec![
            Expression::Identifier(ident("b")),
            Expression::Integer(IntegerExpr {
                token: Token::new(TokenKind::Integer, "2"),
                value: 2,
            }),
        ],
    });
    let negated = Expression::Prefix(PrefixExpr {
        token: Token::new(TokenKind::Dash, "-"),
        operator: "-".to_string(),
        right: Box::new(Expression::Identifier(ident("a"))),
    });
    let product = Expression::Infix(InfixExpr {
        token: Token::new(TokenKind::Star, "*"),
        left: Box::new(negated),
        operator: "*".to_string(),
        right: Box::new(call),
    });
    let stmt = Statement::Expression(ExpressionStmt {
        token: Token::new(TokenKind::Dash, "-"),
        expression: product,
    });

    assert_eq!(stmt.to_string(), "((-a) * add(b, 2))");
    assert_eq!(stmt.token_literal(), "-");
}

#[test]
fn test_program_separates_expression_statements() {
    let expression_stmt = |name: &str| {
        Statement::Expression(ExpressionStmt {
            token: Token::new(TokenKind::Identifier, name),
            expression: Expression::Identifier(ident(name)),
        })
    };
    let program = Program {
        statements: vec![
            expression_stmt("a"),
            expression_stmt("b"),
            Statement::Return(ReturnStmt {
                token: Token::new(TokenKind::Return, "return"),
                value: None,
            }),
            expression_stmt("c"),
        ],
    };

    assert_eq!(program.to_string(), "a;b;return ;c");
}
