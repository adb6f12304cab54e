//! Prefix expression parsing (nud - null denotation)

use crate::frontend::lexer::tokens::*;
use crate::frontend::parser::ast::*;
use crate::frontend::parser::pratt::precedence::Precedence;
use crate::frontend::parser::statements::parse_block_statement;
use crate::frontend::parser::{ParseError, Parser};

impl<'a> Parser<'a> {
    pub(crate) fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::from_token(
            self.cur_token().clone(),
        )))
    }

    pub(crate) fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token().clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
            Err(_) => {
                self.error(ParseError::InvalidInteger {
                    literal: token.literal,
                    span: token.span,
                });
                None
            }
        }
    }

    pub(crate) fn parse_boolean(&mut self) -> Option<Expression> {
        let token = self.cur_token().clone();
        let value = token.kind == TokenKind::True;
        Some(Expression::Boolean(Boolean { token, value }))
    }

    /// `!<expr>` or `-<expr>`
    pub(crate) fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token().clone();
        let operator = token.literal.clone();
        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    /// `( <expr> )`; the parentheses leave no node behind
    pub(crate) fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    /// `if (<cond>) { ... } [else { ... }]`
    pub(crate) fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token().clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = parse_block_statement(self)?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(parse_block_statement(self)?)
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// `fn(<params>) { ... }`
    pub(crate) fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token().clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = parse_block_statement(self)?;

        Some(Expression::Function(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    /// Comma separated identifiers; starts on `(` and ends on `)`
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut params = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(params);
        }

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        params.push(Identifier::from_token(self.cur_token().clone()));

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            params.push(Identifier::from_token(self.cur_token().clone()));
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(params)
    }
}
