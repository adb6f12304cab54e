//! Pratt parser implementation
//!
//! Each token kind may register a prefix function (nud) and/or an infix
//! function (led). [`Parser::parse_expression`] keeps folding infix
//! operators into the left operand while the next operator binds tighter
//! than the caller's threshold.

pub mod led;
pub mod nud;
pub mod precedence;

pub use precedence::*;

use crate::frontend::lexer::tokens::TokenKind;
use crate::frontend::parser::ast::Expression;
use crate::frontend::parser::{ParseError, Parser};

/// Parses an expression starting at the current token
pub type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Option<Expression>;

/// Extends an already parsed left operand; the current token is the operator
pub type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> Option<Expression>;

impl<'a> Parser<'a> {
    /// Populate the prefix and infix registries
    pub(crate) fn register_parse_fns(&mut self) {
        self.register_prefix(TokenKind::Ident, Self::parse_identifier);
        self.register_prefix(TokenKind::Int, Self::parse_integer_literal);
        self.register_prefix(TokenKind::True, Self::parse_boolean);
        self.register_prefix(TokenKind::False, Self::parse_boolean);
        self.register_prefix(TokenKind::Bang, Self::parse_prefix_expression);
        self.register_prefix(TokenKind::Minus, Self::parse_prefix_expression);
        self.register_prefix(TokenKind::LParen, Self::parse_grouped_expression);
        self.register_prefix(TokenKind::If, Self::parse_if_expression);
        self.register_prefix(TokenKind::Function, Self::parse_function_literal);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
        ] {
            self.register_infix(kind, Self::parse_infix_expression);
        }
        self.register_infix(TokenKind::LParen, Self::parse_call_expression);
    }

    pub(crate) fn register_prefix(
        &mut self,
        kind: TokenKind,
        parse_fn: PrefixParseFn<'a>,
    ) {
        self.prefix_fns.insert(kind, parse_fn);
    }

    pub(crate) fn register_infix(
        &mut self,
        kind: TokenKind,
        parse_fn: InfixParseFn<'a>,
    ) {
        self.infix_fns.insert(kind, parse_fn);
    }

    /// Parse an expression whose operators all bind tighter than `precedence`
    ///
    /// On success the current token is the last token of the expression.
    pub fn parse_expression(
        &mut self,
        precedence: Precedence,
    ) -> Option<Expression> {
        if !self.enter_nesting() {
            return None;
        }
        let expr = self.parse_expression_at(precedence);
        self.leave_nesting();
        expr
    }

    fn parse_expression_at(
        &mut self,
        precedence: Precedence,
    ) -> Option<Expression> {
        let prefix = match self.prefix_fns.get(&self.cur_token().kind).copied() {
            Some(prefix) => prefix,
            None => {
                self.no_prefix_parse_fn_error();
                return None;
            }
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let infix = match self.infix_fns.get(&self.peek_token().kind).copied() {
                Some(infix) => infix,
                None => return Some(left),
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn no_prefix_parse_fn_error(&mut self) {
        let token = self.cur_token();
        let error = ParseError::NoPrefixParseFn {
            kind: token.kind,
            span: token.span,
        };
        self.error(error);
    }
}
