//! Control flow statement parsing
//! Handles return statements and blocks

use crate::frontend::lexer::tokens::*;
use crate::frontend::parser::ast::*;
use crate::frontend::parser::pratt::Precedence;
use crate::frontend::parser::statements::StatementParser;
use crate::frontend::parser::Parser;

/// Parse return statement: `return [expr];`
pub fn parse_return_statement(parser: &mut Parser<'_>) -> Option<Statement> {
    let token = parser.cur_token().clone();

    let return_value = if parser.peek_is(TokenKind::Semicolon)
        || parser.peek_is(TokenKind::RBrace)
        || parser.peek_is(TokenKind::Eof)
    {
        None
    } else {
        parser.next_token();
        Some(parser.parse_expression(Precedence::Lowest)?)
    };

    if parser.peek_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Some(Statement::Return(ReturnStatement {
        token,
        return_value,
    }))
}

/// Parse block: `{ <stmt>* }`
///
/// Starts on `{` and ends on the matching `}` (or `Eof` if the block is
/// unterminated). Failed statements inside the block are dropped; the
/// block itself is produced unless it is nested too deeply.
pub fn parse_block_statement(parser: &mut Parser<'_>) -> Option<BlockStatement> {
    if !parser.enter_nesting() {
        return None;
    }
    let token = parser.cur_token().clone();
    let mut statements = Vec::new();

    parser.next_token();

    while !parser.cur_is(TokenKind::RBrace) && !parser.cur_is(TokenKind::Eof) {
        match parser.parse_statement() {
            Some(stmt) => statements.push(stmt),
            None => {
                parser.synchronize();
                if parser.cur_is(TokenKind::RBrace) {
                    break;
                }
            }
        }
        parser.next_token();
    }

    parser.leave_nesting();
    Some(BlockStatement { token, statements })
}
