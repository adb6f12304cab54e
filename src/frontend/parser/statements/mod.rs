//! Statement parsing modules
//!
//! Every statement parser starts on the statement's first token and, on
//! success, leaves the parser on its last token (the `;` when present).

pub mod bindings;
pub mod control_flow;

pub use bindings::*;
pub use control_flow::*;

use crate::frontend::lexer::tokens::*;
use crate::frontend::parser::ast::*;
use crate::frontend::parser::pratt::Precedence;
use crate::frontend::parser::Parser;

/// Statement dispatch
pub trait StatementParser {
    /// Parse the statement starting at the current token
    fn parse_statement(&mut self) -> Option<Statement>;
}

impl StatementParser for Parser<'_> {
    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token().kind {
            TokenKind::Let => bindings::parse_let_statement(self),
            TokenKind::Return => control_flow::parse_return_statement(self),
            _ => parse_expression_statement(self),
        }
    }
}

/// Parse an expression in statement position: `<expr>[;]`
pub fn parse_expression_statement(parser: &mut Parser<'_>) -> Option<Statement> {
    let token = parser.cur_token().clone();
    let expression = parser.parse_expression(Precedence::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Some(Statement::Expression(ExpressionStatement { token, expression }))
}
