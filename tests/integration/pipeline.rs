//! Pipeline integration tests
//!
//! Source text through the public lexer and parser entry points.

use std::io::Write;

use tsb::frontend::parser::{Expression, Statement};
use tsb::{parse, parse_file, tokenize, tokenize_file, TokenKind};

const SAMPLE: &str = r#"
let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
"#;

#[test]
fn test_sample_program_tokens() {
    let tokens = tokenize(SAMPLE);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(
        tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
        1
    );
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Illegal));
    assert_eq!(
        tokens.iter().filter(|t| t.kind == TokenKind::Let).count(),
        4
    );
}

#[test]
fn test_sample_program_parses() {
    // `!-/*5;` has no prefix function for `/`
    let err = parse(SAMPLE).unwrap_err();
    assert_eq!(
        err.messages(),
        vec!["no prefix parse function for / found"]
    );

    let fixed = SAMPLE.replace("!-/*5;", "!-5;");
    let program = parse(&fixed).unwrap();
    assert_eq!(program.statements.len(), 9);
    assert_eq!(program.statements[2].to_string(), "let add = fn(x, y) (x + y);");
    assert_eq!(program.statements[3].to_string(), "let result = add(five, ten);");
    assert_eq!(program.statements[4].to_string(), "(!(-5))");
    assert_eq!(program.statements[5].to_string(), "((5 < 10) > 5)");
}

#[test]
fn test_nested_functions_and_calls() {
    let program = parse("let compose = fn(f, g) { fn(x) { g(f(x)) } }; compose(a, b)(1);").unwrap();
    assert_eq!(program.statements.len(), 2);

    match &program.statements[1] {
        Statement::Expression(stmt) => match &stmt.expression {
            Expression::Call(call) => {
                assert_eq!(call.arguments.len(), 1);
                assert_eq!(call.function.to_string(), "compose(a, b)");
            }
            other => panic!("expected call, got {:?}", other),
        },
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_parse_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "let x = 1 + 2;").unwrap();
    writeln!(file, "return x;").unwrap();

    let program = parse_file(file.path()).unwrap();
    assert_eq!(program.to_string(), "let x = (1 + 2);return x;");

    let tokens = tokenize_file(file.path()).unwrap();
    assert_eq!(tokens.len(), 11);
}

#[test]
fn test_parse_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_file(&dir.path().join("nope.tsb")).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read file"));
}
