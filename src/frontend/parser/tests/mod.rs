//! Parser tests module
//!
//! - statements: let / return / expression statements
//! - expressions: 前缀、中缀、优先级、if、函数与调用
//! - recovery: 错误收集与恢复
//! - state: Parser 窗口与辅助方法
//! - fuzz: proptest 属性测试


use crate::frontend::lexer::Lexer;
use crate::frontend::parser::ast::*;
use crate::frontend::parser::Parser;

/// Parse `input`, failing the test if any syntax error was recorded
pub(super) fn parse_checked(input: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();
    let errors: Vec<String> = parser.errors().iter().map(|e| e.to_string()).collect();
    assert!(
        errors.is_empty(),
        "parser has {} errors for {:?}: {:?}",
        errors.len(),
        input,
        errors
    );
    program
}

/// Parse `input` and return the program together with the error messages
pub(super) fn parse_with_errors(input: &str) -> (Program, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();
    let errors = parser.errors().iter().map(|e| e.to_string()).collect();
    (program, errors)
}

/// Expected value of a leaf expression
#[derive(Debug, Clone, Copy)]
pub(super) enum Lit<'a> {
    Int(i64),
    Bool(bool),
    Ident(&'a str),
}

pub(super) fn check_literal(
    expr: &Expression,
    expected: Lit<'_>,
) {
    match expected {
        Lit::Int(value) => check_integer(expr, value),
        Lit::Bool(value) => check_boolean(expr, value),
        Lit::Ident(value) => check_identifier(expr, value),
    }
}

pub(super) fn check_identifier(
    expr: &Expression,
    value: &str,
) {
    match expr {
        Expression::Identifier(ident) => {
            assert_eq!(ident.value, value);
            assert_eq!(ident.token_literal(), value);
        }
        other => panic!("expected identifier {}, got {:?}", value, other),
    }
}

pub(super) fn check_integer(
    expr: &Expression,
    value: i64,
) {
    match expr {
        Expression::Integer(int) => {
            assert_eq!(int.value, value);
            assert_eq!(int.token_literal(), value.to_string());
        }
        other => panic!("expected integer {}, got {:?}", value, other),
    }
}

pub(super) fn check_boolean(
    expr: &Expression,
    value: bool,
) {
    match expr {
        Expression::Boolean(b) => {
            assert_eq!(b.value, value);
            assert_eq!(b.token_literal(), value.to_string());
        }
        other => panic!("expected boolean {}, got {:?}", value, other),
    }
}

pub(super) fn check_infix(
    expr: &Expression,
    left: Lit<'_>,
    operator: &str,
    right: Lit<'_>,
) {
    match expr {
        Expression::Infix(infix) => {
            check_literal(&infix.left, left);
            assert_eq!(infix.operator, operator);
            check_literal(&infix.right, right);
        }
        other => panic!("expected infix expression, got {:?}", other),
    }
}

pub(super) fn check_let_statement(
    stmt: &Statement,
    name: &str,
) {
    assert_eq!(stmt.token_literal(), "let");
    match stmt {
        Statement::Let(let_stmt) => {
            assert_eq!(let_stmt.name.value, name);
            assert_eq!(let_stmt.name.token_literal(), name);
        }
        other => panic!("expected let statement, got {:?}", other),
    }
}

/// The single expression statement of `program`
pub(super) fn single_expression(program: &Program) -> &Expression {
    assert_eq!(program.statements.len(), 1, "program: {}", program);
    match &program.statements[0] {
        Statement::Expression(stmt) => &stmt.expression,
        other => panic!("expected expression statement, got {:?}", other),
    }
}
