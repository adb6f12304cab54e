//! Error handling integration tests
//!
//! Syntax errors are collected, reported in order, and never stop parsing.

use std::io::Write;

use tsb::frontend::lexer::Lexer;
use tsb::{parse, parse_file, ParseError, Parser, TokenKind};

#[test]
fn test_all_errors_reported() {
    let err = parse("let x 5;\nlet = 10;\nlet 838383;").unwrap_err();
    assert_eq!(err.errors.len(), 3);
    assert_eq!(err.errors[0].span().start.line, 1);
    assert_eq!(err.errors[1].span().start.line, 2);
    assert_eq!(err.errors[2].span().start.line, 3);
}

#[test]
fn test_error_variants() {
    let mut parser = Parser::new(Lexer::new("let = 1; ); 99999999999999999999;"));
    let program = parser.parse_program();
    assert!(program.is_empty());

    let errors = parser.into_errors();
    assert_eq!(errors.len(), 3);
    assert!(matches!(
        errors[0],
        ParseError::ExpectedToken {
            expected: TokenKind::Ident,
            found: TokenKind::Assign,
            ..
        }
    ));
    assert!(matches!(
        errors[1],
        ParseError::NoPrefixParseFn {
            kind: TokenKind::RParen,
            ..
        }
    ));
    assert!(matches!(errors[2], ParseError::InvalidInteger { .. }));
}

#[test]
fn test_illegal_characters_do_not_stop_lexing() {
    let tokens = tsb::tokenize("let x = 5 $ 3;");
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Illegal && t.literal == "$"));
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn test_parse_file_reports_syntax_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "let = 1;").unwrap();

    let err = parse_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse"));
    let root = format!("{:#}", err);
    assert!(root.contains("expected next token to be IDENT, got = instead"));
}
