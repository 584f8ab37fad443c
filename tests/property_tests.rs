//! Property-based tests for the lexer and parser.

use interpreter::{lexer::tokens::TokenKind, parse, tokenize, Lexer};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{1,8}".prop_filter("keywords are not names", |name| {
        !matches!(
            name.as_str(),
            "fn" | "let" | "return" | "true" | "false" | "if" | "else"
        )
    })
}

fn operand_strategy() -> impl Strategy<Value = String> {
    prop_oneof![name_strategy(), (0u32..100_000).prop_map(|n| n.to_string())]
}

fn expr_strategy() -> impl Strategy<Value = String> {
    let operator = prop_oneof![
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("<"),
        Just(">"),
        Just("=="),
        Just("!="),
    ];

    (operand_strategy(), operator, operand_strategy())
        .prop_map(|(left, op, right)| format!("{} {} {}", left, op, right))
}

/// `let` and `return` statements; both re-serialize with their `;`.
fn binding_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (name_strategy(), expr_strategy())
            .prop_map(|(name, value)| format!("let {} = {};", name, value)),
        expr_strategy().prop_map(|value| format!("return {};", value)),
    ]
}

/// Any well-formed statement.
fn statement_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        binding_strategy(),
        expr_strategy().prop_map(|value| format!("{};", value)),
    ]
}

proptest! {
    /// Property: tokenizing any input ends in exactly one EOF
    #[test]
    fn tokenize_ends_with_single_eof(source in any::<String>()) {
        let tokens = tokenize(&source);

        prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
        prop_assert_eq!(tokens.iter().filter(|token| token.is(TokenKind::EOF)).count(), 1);
        // Every token but EOF consumes at least one code point.
        prop_assert!(tokens.len() <= source.chars().count() + 1);
    }

    /// Property: fresh lexers over the same input agree
    #[test]
    fn tokenize_is_idempotent(source in any::<String>()) {
        let first: Vec<_> = Lexer::new(&source).collect();
        let second: Vec<_> = Lexer::new(&source).collect();

        prop_assert_eq!(first, second);
    }

    /// Property: parsing never panics and always terminates
    #[test]
    fn parse_accepts_arbitrary_input(source in any::<String>()) {
        let (program, errors) = parse(&source);

        prop_assert!(program.len() <= source.len());
        prop_assert!(errors.len() <= source.len());
    }

    /// Property: well-formed statements parse cleanly, one statement each
    #[test]
    fn generated_statements_parse(statements in prop::collection::vec(statement_strategy(), 1..8)) {
        let source = statements.join("\n");
        let (program, errors) = parse(&source);

        prop_assert!(errors.is_empty(), "errors for {:?}: {:?}", source, errors);
        prop_assert_eq!(program.len(), statements.len());
    }

    /// Property: the re-serialized program parses back to the same text
    #[test]
    fn serialized_program_reparses(statements in prop::collection::vec(statement_strategy(), 1..8)) {
        let source = statements.join(" ");
        let (program, _) = parse(&source);
        let printed = program.to_string();
        let (reparsed, errors) = parse(&printed);

        prop_assert!(errors.is_empty(), "errors for {:?}: {:?}", printed, errors);
        prop_assert_eq!(reparsed.len(), program.len());
        prop_assert_eq!(reparsed.to_string(), printed);
    }
}
