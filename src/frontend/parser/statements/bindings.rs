//! Binding statement parsing: `let <ident> = <expr>;`

use crate::frontend::lexer::tokens::*;
use crate::frontend::parser::ast::*;
use crate::frontend::parser::pratt::Precedence;
use crate::frontend::parser::Parser;

/// Parse let statement
///
/// Returns `None`, producing no node, if the name or the `=` is missing or
/// the value does not parse.
pub fn parse_let_statement(parser: &mut Parser<'_>) -> Option<Statement> {
    let token = parser.cur_token().clone();

    if !parser.expect_peek(TokenKind::Ident) {
        return None;
    }
    let name = Identifier::from_token(parser.cur_token().clone());

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }
    parser.next_token();

    let value = parser.parse_expression(Precedence::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Some(Statement::Let(LetStatement { token, name, value }))
}
